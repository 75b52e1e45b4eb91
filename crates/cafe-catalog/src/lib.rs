//! # cafe-catalog: Catalog Provider for the Cafe Kiosk
//!
//! Loads the static product file the kiosk ships with and serves it to the
//! engine as an ordered, read-only product list.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Catalog Data Flow                                 │
//! │                                                                         │
//! │  data/products.json (static, authored by the cafe)                     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  cafe-catalog (THIS CRATE)                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐         ┌────────────────────────────┐     │   │
//! │  │   │   loader      │         │        Catalog             │     │   │
//! │  │   │ (loader.rs)   │ ──────► │      (catalog.rs)          │     │   │
//! │  │   │               │         │                            │     │   │
//! │  │   │ parse JSON    │         │ products() get()           │     │   │
//! │  │   │ price → cents │         │ categories() by_category() │     │   │
//! │  │   │ drop bad rows │         │                            │     │   │
//! │  │   └───────────────┘         └────────────────────────────┘     │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  cafe-core (Cart takes &Product; never mutates the catalog)            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`loader`] - File reading and the products.json wire format
//! - [`catalog`] - The in-memory catalog and its query methods
//! - [`error`] - Catalog error types
//!
//! ## Usage
//!
//! ```rust,ignore
//! use cafe_catalog::Catalog;
//!
//! // The kiosk startup path: never fails, worst case is an empty menu
//! let catalog = Catalog::load_or_empty("data/products.json");
//!
//! for product in catalog.products() {
//!     println!("{}: {}", product.name, product.price());
//! }
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod error;
pub mod loader;

// =============================================================================
// Re-exports
// =============================================================================

pub use catalog::Catalog;
pub use error::CatalogError;
