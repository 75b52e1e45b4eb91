//! # The Catalog
//!
//! An ordered, read-only product list plus the category queries behind the
//! menu's filter chips.

use std::path::Path;

use tracing::{info, warn};

use cafe_core::types::{Product, ProductId};

use crate::error::CatalogError;
use crate::loader;

/// The kiosk's menu: every product, in authored order.
///
/// Read-only to the whole system; the engine borrows products out of it
/// and never writes back.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Builds a catalog from already-loaded products (used by tests and by
    /// hosts that embed the menu).
    pub fn new(products: Vec<Product>) -> Self {
        Catalog { products }
    }

    /// An empty catalog; what the kiosk serves when the product file is
    /// missing or broken.
    pub fn empty() -> Self {
        Catalog::default()
    }

    /// Parses a catalog from a products.json body.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        Ok(Catalog::new(loader::parse_products(json)?))
    }

    /// Loads the catalog from a product file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let body = std::fs::read_to_string(path).map_err(|source| CatalogError::ReadFailed {
            path: path.display().to_string(),
            source,
        })?;

        let catalog = Catalog::from_json_str(&body)?;
        info!(path = %path.display(), products = catalog.len(), "catalog loaded");
        Ok(catalog)
    }

    /// Loads the catalog, degrading any failure to an empty menu.
    ///
    /// The ordering page must still open when the file is bad; the shopper
    /// sees an empty grid, not a crash. The real cause lands in the log.
    pub fn load_or_empty(path: impl AsRef<Path>) -> Self {
        match Catalog::load(path.as_ref()) {
            Ok(catalog) => catalog,
            Err(err) => {
                warn!(path = %path.as_ref().display(), error = %err, "catalog load failed, serving empty menu");
                Catalog::empty()
            }
        }
    }

    /// All products, in authored order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Looks up a product by catalog id.
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Distinct category labels, in first-appearance order; exactly the
    /// order the filter chips render in.
    pub fn categories(&self) -> Vec<&str> {
        let mut categories: Vec<&str> = Vec::new();
        for product in &self.products {
            if !categories.contains(&product.category.as_str()) {
                categories.push(&product.category);
            }
        }
        categories
    }

    /// Products whose category matches the given label.
    pub fn by_category<'a>(&'a self, category: &str) -> Vec<&'a Product> {
        self.products
            .iter()
            .filter(|p| p.category == category)
            .collect()
    }

    /// Number of products on the menu.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Checks if the menu is empty.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
