//! # Pricing Calculator
//!
//! Pure derivation of subtotal, tax, and grand total from a cart snapshot
//! and a configured tax rate.
//!
//! ## Where pricing runs
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Cart panel (re-rendered after every mutation)                          │
//! │                                                                         │
//! │  ┌────────────────────────────────────────────────────────────────┐    │
//! │  │  Greek Salad              x2                   17.00           │    │
//! │  │  Tomato Soup              x1                    6.50           │    │
//! │  ├────────────────────────────────────────────────────────────────┤    │
//! │  │  Subtotal                                      23.50           │    │
//! │  │  Tax (5%)                                       1.18           │    │
//! │  │  ──────────────────────────────────────────────────            │    │
//! │  │  TOTAL                                         24.68           │    │
//! │  └────────────────────────────────────────────────────────────────┘    │
//! │                                                                         │
//! │  price_cart(&cart, rate); no side effects, no mutation, idempotent:     │
//! │  pricing the same cart twice yields identical totals.                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The whole order is taxed at one configured rate, so tax is derived from
//! the subtotal in a single step and rounding can never compound across
//! repeated calls.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::cart::Cart;
use crate::money::Money;
use crate::types::TaxRate;

/// Derived totals for a cart snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartTotals {
    /// Σ (unit price × quantity) over all lines.
    pub subtotal_cents: i64,

    /// subtotal × tax rate, rounded half-up to whole cents, exactly once.
    pub tax_cents: i64,

    /// subtotal + tax.
    pub total_cents: i64,
}

impl CartTotals {
    /// Totals of an empty cart.
    pub const fn zero() -> Self {
        CartTotals {
            subtotal_cents: 0,
            tax_cents: 0,
            total_cents: 0,
        }
    }

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
}

/// Prices a cart at the given tax rate.
///
/// Pure function of its inputs: no side effects, no mutation. Calling it
/// twice on an unmodified cart returns identical results.
///
/// ## Example
/// ```rust
/// use cafe_core::cart::Cart;
/// use cafe_core::pricing::price_cart;
/// use cafe_core::types::{Product, TaxRate};
///
/// let mut cart = Cart::default();
/// cart.add_item(&Product {
///     id: 1,
///     name: "Iced Coffee".into(),
///     description: String::new(),
///     image: String::new(),
///     category: "Desserts".into(),
///     price_cents: 1000,
/// }).unwrap();
///
/// let totals = price_cart(&cart, TaxRate::from_bps(500));
/// assert_eq!(totals.subtotal_cents, 1000);
/// assert_eq!(totals.tax_cents, 50);
/// assert_eq!(totals.total_cents, 1050);
/// ```
pub fn price_cart(cart: &Cart, rate: TaxRate) -> CartTotals {
    let subtotal_cents: i64 = cart.lines().iter().map(|l| l.line_total_cents()).sum();
    let subtotal = Money::from_cents(subtotal_cents);
    let tax = subtotal.calculate_tax(rate);
    let total = subtotal + tax;

    CartTotals {
        subtotal_cents: subtotal.cents(),
        tax_cents: tax.cents(),
        total_cents: total.cents(),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Product;

    fn test_product(id: u32, price_cents: i64) -> Product {
        Product {
            id,
            name: format!("Product {}", id),
            description: String::new(),
            image: String::new(),
            category: "Grilled".to_string(),
            price_cents,
        }
    }

    #[test]
    fn test_two_lines_at_five_percent() {
        // cart = [{price 10.00, qty 2}, {price 15.00, qty 1}], rate 5%
        let mut cart = Cart::default();
        let a = test_product(1, 1000);
        let b = test_product(2, 1500);
        cart.add_item(&a).unwrap();
        cart.add_item(&a).unwrap();
        cart.add_item(&b).unwrap();

        let totals = price_cart(&cart, TaxRate::from_bps(500));

        assert_eq!(totals.subtotal_cents, 3500); // 35.00
        assert_eq!(totals.tax_cents, 175); // 1.75
        assert_eq!(totals.total_cents, 3675); // 36.75
    }

    #[test]
    fn test_pricing_is_pure_and_idempotent() {
        let mut cart = Cart::default();
        cart.add_item(&test_product(1, 333)).unwrap();
        cart.change_quantity(1, 2).unwrap();
        let before = cart.clone();

        let first = price_cart(&cart, TaxRate::from_bps(500));
        let second = price_cart(&cart, TaxRate::from_bps(500));

        assert_eq!(first, second);
        assert_eq!(cart, before); // no mutation
    }

    #[test]
    fn test_empty_cart_prices_to_zero() {
        let cart = Cart::default();
        let totals = price_cart(&cart, TaxRate::from_bps(500));
        assert_eq!(totals, CartTotals::zero());
    }

    #[test]
    fn test_zero_rate_means_total_equals_subtotal() {
        let mut cart = Cart::default();
        cart.add_item(&test_product(1, 1299)).unwrap();

        let totals = price_cart(&cart, TaxRate::zero());
        assert_eq!(totals.tax_cents, 0);
        assert_eq!(totals.total_cents, totals.subtotal_cents);
    }

    #[test]
    fn test_tax_rounds_once_on_the_subtotal() {
        // Three lines of 3.33: subtotal 9.99, 5% = 0.4995 → 0.50.
        // Taxing per line would give 3 × round(0.1665) = 3 × 0.17 = 0.51.
        let mut cart = Cart::default();
        for id in 1..=3 {
            cart.add_item(&test_product(id, 333)).unwrap();
        }

        let totals = price_cart(&cart, TaxRate::from_bps(500));
        assert_eq!(totals.subtotal_cents, 999);
        assert_eq!(totals.tax_cents, 50);
    }
}
