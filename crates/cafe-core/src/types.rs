//! # Domain Types
//!
//! Core domain types used throughout the kiosk.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │  OrderSummary   │   │  CustomerInfo   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (u32)       │   │  id (UUID)      │   │  table          │       │
//! │  │  name           │   │  lines          │   │  name           │       │
//! │  │  price_cents    │   │  subtotal/tax   │   │  phone          │       │
//! │  │  category       │   │  total_cents    │   │                 │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐                             │
//! │  │    TaxRate      │   │    FlowState    │                             │
//! │  │  ─────────────  │   │  ─────────────  │                             │
//! │  │  bps (u32)      │   │  Browsing       │                             │
//! │  │  500 = 5%       │   │  CartOpen       │                             │
//! │  └─────────────────┘   │  CheckingOut    │                             │
//! │                        │  Confirmed      │                             │
//! │                        └─────────────────┘                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity
//! Products keep the catalog file's small numeric id (the menu is a static
//! list, not a database). Confirmed orders get a UUID v4 so receipts are
//! unique across kiosk restarts.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

/// Catalog identity of a product.
pub type ProductId = u32;

// =============================================================================
// Tax Rate
// =============================================================================

/// Tax rate represented in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000
/// 500 bps = 5% (the kiosk default, see [`crate::DEFAULT_TAX_RATE_BPS`])
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TaxRate(u32);

impl TaxRate {
    /// Creates a tax rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        TaxRate(bps)
    }

    /// Creates a tax rate from a percentage (for convenience).
    pub fn from_percentage(pct: f64) -> Self {
        TaxRate((pct * 100.0).round() as u32)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a percentage (for display only).
    #[inline]
    pub fn percentage(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Zero tax rate.
    #[inline]
    pub const fn zero() -> Self {
        TaxRate(0)
    }

    /// Checks if tax rate is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl Default for TaxRate {
    fn default() -> Self {
        TaxRate::zero()
    }
}

// =============================================================================
// Product
// =============================================================================

/// A menu item supplied by the catalog.
///
/// The engine never mutates products; they arrive from the catalog provider
/// as an ordered, read-only list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Product {
    /// Catalog identifier.
    pub id: ProductId,

    /// Display name shown on the menu card and the receipt.
    pub name: String,

    /// Short menu-card description.
    pub description: String,

    /// Image reference (a path or URL the frontend resolves).
    pub image: String,

    /// Category label used by the filter chips ("Fruits", "Soups", ...).
    pub category: String,

    /// Unit price in cents (smallest currency unit). Never negative.
    pub price_cents: i64,
}

impl Product {
    /// Returns the unit price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }
}

// =============================================================================
// Flow State
// =============================================================================

/// Where the shopper is in the ordering cycle.
///
/// The flow is cyclic per order; there is no terminal state:
/// ```text
/// Browsing ──► CartOpen ──► CheckingOut ──► Confirmed ──► Browsing ...
///     ▲            │             │
///     └────────────┴─────────────┘  (close/cancel)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum FlowState {
    /// Shopper is looking at the menu grid.
    Browsing,
    /// The cart panel is open.
    CartOpen,
    /// The checkout form is being filled in.
    CheckingOut,
    /// An order was just placed; awaiting acknowledgement.
    Confirmed,
}

impl Default for FlowState {
    fn default() -> Self {
        FlowState::Browsing
    }
}

// =============================================================================
// Customer Info
// =============================================================================

/// Validated customer details for a dine-in order.
///
/// This is the *output* of checkout validation; construct it through
/// [`crate::checkout::CheckoutDraft::validate`], never from raw form text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CustomerInfo {
    /// Table number, inside the configured range.
    pub table: u32,

    /// Customer name, non-empty after trimming.
    pub name: String,

    /// Contact phone number, non-empty after trimming.
    pub phone: String,
}

// =============================================================================
// Order Summary
// =============================================================================

/// One priced line of a confirmed order.
/// Uses the snapshot pattern: product data frozen at confirmation time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct OrderLine {
    pub product_id: ProductId,
    /// Product name at time of order (frozen).
    pub name: String,
    /// Unit price in cents at time of order (frozen).
    pub unit_price_cents: i64,
    /// Quantity ordered.
    pub quantity: u32,
    /// Line total before tax (unit_price × quantity).
    pub line_total_cents: i64,
}

impl OrderLine {
    /// Returns the unit price as Money.
    #[inline]
    pub fn unit_price(&self) -> Money {
        Money::from_cents(self.unit_price_cents)
    }

    /// Returns the line total as Money.
    #[inline]
    pub fn line_total(&self) -> Money {
        Money::from_cents(self.line_total_cents)
    }
}

/// An immutable, fully priced snapshot of a confirmed order.
///
/// Built once by the flow controller at confirmation time and handed to the
/// receipt formatter. It holds copies of everything it needs; later cart
/// mutation cannot reach it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct OrderSummary {
    /// Order identifier (UUID v4).
    pub id: String,

    /// When the order was confirmed.
    #[ts(as = "String")]
    pub placed_at: DateTime<Utc>,

    /// Who placed it and where they are sitting.
    pub customer: CustomerInfo,

    /// Priced line items, in the order they were added to the cart.
    pub lines: Vec<OrderLine>,

    /// Sum of line totals, before tax.
    pub subtotal_cents: i64,

    /// The tax rate the order was priced with, in basis points.
    pub tax_rate_bps: u32,

    /// Tax amount (subtotal × rate, rounded once).
    pub tax_cents: i64,

    /// Grand total (subtotal + tax).
    pub total_cents: i64,
}

impl OrderSummary {
    /// Returns the subtotal as Money.
    #[inline]
    pub fn subtotal(&self) -> Money {
        Money::from_cents(self.subtotal_cents)
    }

    /// Returns the tax amount as Money.
    #[inline]
    pub fn tax(&self) -> Money {
        Money::from_cents(self.tax_cents)
    }

    /// Returns the grand total as Money.
    #[inline]
    pub fn total(&self) -> Money {
        Money::from_cents(self.total_cents)
    }

    /// Total quantity across all lines (for the "3 items" receipt footer).
    pub fn total_quantity(&self) -> u32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
