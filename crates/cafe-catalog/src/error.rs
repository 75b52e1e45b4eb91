//! # Catalog Error Types
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  io::Error / serde_json::Error                                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  CatalogError (this module) ← adds the file path / category            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Catalog::load_or_empty ← swallows it with a warn! and serves an        │
//! │                           empty menu (load failure is not fatal)        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Catalog load failures.
///
/// Callers on the kiosk startup path should prefer
/// [`crate::Catalog::load_or_empty`], which downgrades all of these to an
/// empty catalog; `load` exists for tools that want the real cause.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The product file could not be read.
    ///
    /// ## When This Occurs
    /// - File missing (wrong deploy, wrong working directory)
    /// - Permission problems on the kiosk device
    #[error("failed to read product file {path}: {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The product file is not valid JSON, or does not match the expected
    /// `{ "products": [...] }` shape.
    #[error("failed to parse product file: {0}")]
    ParseFailed(#[from] serde_json::Error),
}
