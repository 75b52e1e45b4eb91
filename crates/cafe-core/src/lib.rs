//! # cafe-core: Pure Ordering Engine for the Cafe Kiosk
//!
//! This crate is the **heart** of the kiosk. It tracks the shopper's cart,
//! prices it, validates the checkout form, and drives the
//! browsing → cart → checkout → confirmation cycle, all as plain in-memory
//! state with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Cafe Kiosk Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  Frontend (single-page web UI)                  │   │
//! │  │    Menu grid ──► Cart panel ──► Checkout form ──► Receipt       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ command API (apps/kiosk)               │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                ★ cafe-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   cart    │  │  pricing  │  │ checkout  │  │   flow    │  │   │
//! │  │   │   Cart    │  │ CartTotals│  │  Draft    │  │ OrderFlow │  │   │
//! │  │   │ CartLine  │  │ price_cart│  │  rules    │  │ FlowState │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO FILES • NO NETWORK • NO PERSISTENCE                       │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              cafe-catalog (static product file)                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, TaxRate, OrderSummary, etc.)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`error`] - Domain error types
//! - [`cart`] - The cart store and its capacity/quantity invariants
//! - [`pricing`] - Pure subtotal/tax/total derivation
//! - [`checkout`] - Checkout form validation
//! - [`flow`] - The order flow state machine
//!
//! ## Design Principles
//!
//! 1. **One shopper, one session**: a single `OrderFlow` per page visit,
//!    mutated synchronously by discrete user actions
//! 2. **No I/O**: catalog loading and receipt rendering live in other crates
//! 3. **Integer Money**: all monetary values are cents (i64), never floats
//! 4. **Explicit Errors**: every rule violation is a typed variant, never a
//!    string or a panic; the shopper can always retry or cancel
//!
//! ## Example Usage
//!
//! ```rust
//! use cafe_core::money::Money;
//! use cafe_core::types::TaxRate;
//!
//! // Create money from cents (never from floats!)
//! let price = Money::from_cents(1050); // 10.50
//!
//! // Derive tax at the kiosk default of 5%
//! let rate = TaxRate::from_bps(cafe_core::DEFAULT_TAX_RATE_BPS);
//! let tax = price.calculate_tax(rate);
//!
//! // 10.50 at 5% = 0.53 (rounded once, half-up)
//! assert_eq!(tax.cents(), 53);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod checkout;
pub mod error;
pub mod flow;
pub mod money;
pub mod pricing;
pub mod types;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use cafe_core::Money` instead of
// `use cafe_core::money::Money`

pub use cart::{Cart, CartLimits, CartLine};
pub use checkout::{CheckoutDraft, CheckoutField, FieldErrors, TableRange};
pub use error::{CartError, CheckoutError, FlowError};
pub use flow::OrderFlow;
pub use money::Money;
pub use pricing::{price_cart, CartTotals};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================
// Defaults only: every one of these is carried as configuration by the types
// that enforce it, so a kiosk can be reconfigured without touching the
// invariant-enforcement code.

/// Default maximum number of distinct lines in a cart.
///
/// ## Business Reason
/// Keeps a single table's order reviewable on a phone screen and bounds the
/// printed receipt length. See [`cart::CartLimits`].
pub const DEFAULT_MAX_CART_LINES: usize = 5;

/// Default maximum quantity of a single line.
///
/// ## Business Reason
/// Prevents accidental over-ordering from repeated taps on "Add to Cart".
/// See [`cart::CartLimits`].
pub const DEFAULT_MAX_LINE_QUANTITY: u32 = 5;

/// Default tax rate in basis points (500 = 5%).
pub const DEFAULT_TAX_RATE_BPS: u32 = 500;

/// Default table number range for dine-in orders (inclusive).
///
/// The cafe floor has tables 1 through 12; see [`checkout::TableRange`].
pub const DEFAULT_TABLE_MIN: u32 = 1;
pub const DEFAULT_TABLE_MAX: u32 = 12;
