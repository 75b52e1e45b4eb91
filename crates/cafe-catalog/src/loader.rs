//! # Product File Loader
//!
//! The wire format of `products.json` and its conversion into engine types.
//!
//! ## Wire Format
//! ```json
//! {
//!   "products": [
//!     {
//!       "id": 1,
//!       "name": "Greek Salad",
//!       "price": 8.5,
//!       "description": "Feta, olives, cucumber",
//!       "image": "/images/greek-salad.jpg",
//!       "category": "Salads"
//!     }
//!   ]
//! }
//! ```
//!
//! ## The one float in the system
//! The menu file is authored by hand with decimal prices, so the wire type
//! carries an f64, converted to integer cents HERE, once, at the load
//! boundary. Nothing past this module ever touches a floating-point price.

use serde::Deserialize;
use tracing::warn;

use cafe_core::types::{Product, ProductId};

use crate::error::CatalogError;

/// Top-level shape of products.json.
#[derive(Debug, Deserialize)]
pub(crate) struct ProductFile {
    pub(crate) products: Vec<ProductRecord>,
}

/// One raw menu record, exactly as authored.
#[derive(Debug, Deserialize)]
pub(crate) struct ProductRecord {
    pub(crate) id: ProductId,
    pub(crate) name: String,
    /// Decimal price as written in the file (e.g. 8.5 = 8.50).
    pub(crate) price: f64,
    #[serde(default)]
    pub(crate) description: String,
    #[serde(default)]
    pub(crate) image: String,
    #[serde(default)]
    pub(crate) category: String,
}

impl ProductRecord {
    /// Converts the record into an engine [`Product`].
    ///
    /// Returns `None` (with a warning) for records the engine must never
    /// see: negative or non-finite prices.
    fn into_product(self) -> Option<Product> {
        if !self.price.is_finite() || self.price < 0.0 {
            warn!(id = self.id, name = %self.name, price = self.price, "skipping product with invalid price");
            return None;
        }

        Some(Product {
            id: self.id,
            name: self.name,
            description: self.description,
            image: self.image,
            category: self.category,
            price_cents: (self.price * 100.0).round() as i64,
        })
    }
}

/// Parses a product file body into engine products.
///
/// Insertion order is preserved; the menu renders in authored order.
/// Records with invalid prices or duplicate ids are dropped with a `warn!`
/// (first occurrence of an id wins); a malformed file as a whole is a
/// [`CatalogError::ParseFailed`].
pub(crate) fn parse_products(json: &str) -> Result<Vec<Product>, CatalogError> {
    let file: ProductFile = serde_json::from_str(json)?;

    let mut products: Vec<Product> = Vec::with_capacity(file.products.len());
    for record in file.products {
        let Some(product) = record.into_product() else {
            continue;
        };
        if products.iter().any(|p| p.id == product.id) {
            warn!(id = product.id, name = %product.name, "skipping product with duplicate id");
            continue;
        }
        products.push(product);
    }

    Ok(products)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_well_formed_file() {
        let json = r#"{
            "products": [
                { "id": 1, "name": "Greek Salad", "price": 8.5,
                  "description": "Feta, olives", "image": "/images/greek.jpg",
                  "category": "Salads" },
                { "id": 2, "name": "Tomato Soup", "price": 6.0,
                  "description": "", "image": "", "category": "Soups" }
            ]
        }"#;

        let products = parse_products(json).unwrap();
        assert_eq!(products.len(), 2);
        assert_eq!(products[0].name, "Greek Salad");
        assert_eq!(products[0].price_cents, 850);
        assert_eq!(products[1].price_cents, 600);
    }

    #[test]
    fn test_decimal_prices_convert_exactly() {
        let json = r#"{ "products": [
            { "id": 1, "name": "A", "price": 10.99 },
            { "id": 2, "name": "B", "price": 0.05 },
            { "id": 3, "name": "C", "price": 7 }
        ] }"#;

        let products = parse_products(json).unwrap();
        let cents: Vec<i64> = products.iter().map(|p| p.price_cents).collect();
        assert_eq!(cents, vec![1099, 5, 700]);
    }

    #[test]
    fn test_negative_price_is_skipped() {
        let json = r#"{ "products": [
            { "id": 1, "name": "Bad", "price": -2.0 },
            { "id": 2, "name": "Good", "price": 3.0 }
        ] }"#;

        let products = parse_products(json).unwrap();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].id, 2);
    }

    #[test]
    fn test_duplicate_id_first_wins() {
        let json = r#"{ "products": [
            { "id": 1, "name": "First", "price": 1.0 },
            { "id": 1, "name": "Second", "price": 2.0 }
        ] }"#;

        let products = parse_products(json).unwrap();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].name, "First");
    }

    #[test]
    fn test_missing_optional_fields_default() {
        let json = r#"{ "products": [ { "id": 1, "name": "Bare", "price": 1.0 } ] }"#;
        let products = parse_products(json).unwrap();
        assert_eq!(products[0].description, "");
        assert_eq!(products[0].category, "");
    }

    #[test]
    fn test_malformed_json_is_a_parse_error() {
        assert!(matches!(
            parse_products("not json").unwrap_err(),
            CatalogError::ParseFailed(_)
        ));
        // valid JSON, wrong shape
        assert!(matches!(
            parse_products(r#"{ "items": [] }"#).unwrap_err(),
            CatalogError::ParseFailed(_)
        ));
    }
}
