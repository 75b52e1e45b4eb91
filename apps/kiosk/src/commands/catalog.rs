//! # Catalog Commands
//!
//! Menu listing and the category filter chips.

use serde::Serialize;
use tracing::debug;

use cafe_core::types::Product;

use crate::state::SessionState;

/// The pseudo-category that shows the whole menu.
pub const ALL_CATEGORY: &str = "All";

/// One category chip row: "All" first, then the catalog's categories in
/// first-appearance order.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryList {
    pub categories: Vec<String>,
}

/// Lists the category chips.
pub fn list_categories(session: &SessionState) -> CategoryList {
    debug!("list_categories command");

    let mut categories = vec![ALL_CATEGORY.to_string()];
    categories.extend(session.catalog().categories().iter().map(|c| c.to_string()));
    CategoryList { categories }
}

/// Lists products, optionally filtered by an active category chip.
///
/// `None` and `"All"` both mean the whole menu. An unknown category simply
/// yields an empty grid; chips always come from [`list_categories`], so
/// that only happens to a stale frontend.
pub fn list_products(session: &SessionState, category: Option<&str>) -> Vec<Product> {
    debug!(category = ?category, "list_products command");

    match category {
        None => session.catalog().products().to_vec(),
        Some(c) if c == ALL_CATEGORY => session.catalog().products().to_vec(),
        Some(c) => session.catalog().by_category(c).into_iter().cloned().collect(),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
