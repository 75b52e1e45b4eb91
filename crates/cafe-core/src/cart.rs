//! # Cart Store
//!
//! The shopper's in-progress selection: an insertion-ordered list of lines,
//! one per distinct product, with two independent caps enforced atomically
//! per mutation.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Cart Store Operations                              │
//! │                                                                         │
//! │  Frontend Action           Operation               Cart Change          │
//! │  ───────────────           ─────────               ───────────          │
//! │                                                                         │
//! │  Tap "Add to Cart" ──────► add_item() ───────────► push / qty + 1      │
//! │                                                                         │
//! │  Tap +/− stepper ────────► change_quantity() ────► qty + delta         │
//! │                                                    (floor-clamped to 1) │
//! │  Tap trash icon ─────────► remove_item() ────────► line deleted        │
//! │                                                                         │
//! │  Order confirmed/cancel ─► clear() ──────────────► all lines deleted   │
//! │                                                                         │
//! │  Render cart panel ──────► lines() ──────────────► (read only)         │
//! │                                                                         │
//! │  INVARIANTS: at most `max_lines` distinct products; every quantity in   │
//! │  [1, max_line_quantity]; a failed mutation changes nothing.             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CartError;
use crate::money::Money;
use crate::types::{Product, ProductId};
use crate::{DEFAULT_MAX_CART_LINES, DEFAULT_MAX_LINE_QUANTITY};

// =============================================================================
// Cart Limits
// =============================================================================

/// The two cart caps, carried as configuration rather than literals so a
/// kiosk can be retuned without touching the enforcement code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartLimits {
    /// Maximum number of distinct lines (different products).
    pub max_lines: usize,

    /// Maximum quantity of any single line.
    pub max_line_quantity: u32,
}

impl Default for CartLimits {
    /// The shipped kiosk caps: 5 different items, 5 units each.
    fn default() -> Self {
        CartLimits {
            max_lines: DEFAULT_MAX_CART_LINES,
            max_line_quantity: DEFAULT_MAX_LINE_QUANTITY,
        }
    }
}

// =============================================================================
// Cart Line
// =============================================================================

/// One product-and-quantity entry in the cart.
///
/// ## Design Notes
/// - `product_id`: identity for dedup and removal
/// - name and price are frozen copies taken when the product entered the
///   cart, so the panel stays consistent even if the catalog is reloaded
///   behind it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    /// Product catalog id.
    pub product_id: ProductId,

    /// Product name at time of adding (frozen).
    pub name: String,

    /// Price in cents at time of adding (frozen).
    pub unit_price_cents: i64,

    /// Quantity in cart, always within [1, max_line_quantity].
    pub quantity: u32,

    /// When this line was added to the cart.
    #[ts(as = "String")]
    pub added_at: DateTime<Utc>,
}

impl CartLine {
    /// Creates a new line for a product with quantity 1.
    pub fn from_product(product: &Product) -> Self {
        CartLine {
            product_id: product.id,
            name: product.name.clone(),
            unit_price_cents: product.price_cents,
            quantity: 1,
            added_at: Utc::now(),
        }
    }

    /// Returns the frozen unit price as Money.
    #[inline]
    pub fn unit_price(&self) -> Money {
        Money::from_cents(self.unit_price_cents)
    }

    /// Calculates the line total (unit price × quantity).
    pub fn line_total_cents(&self) -> i64 {
        self.unit_price_cents * self.quantity as i64
    }
}

// =============================================================================
// Cart
// =============================================================================

/// The cart store.
///
/// ## Invariants
/// - Lines are unique by `product_id` (adding the same product increments)
/// - `lines.len() <= limits.max_lines`
/// - Every quantity is in `[1, limits.max_line_quantity]`; zero-quantity
///   lines never exist; removal is always explicit
/// - Insertion order is preserved; new lines append at the end
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    lines: Vec<CartLine>,
    limits: CartLimits,
}

impl Cart {
    /// Creates an empty cart with the given caps.
    pub fn new(limits: CartLimits) -> Self {
        Cart {
            lines: Vec::new(),
            limits,
        }
    }

    /// Adds one unit of a product.
    ///
    /// ## Behavior
    /// - Product already in cart: its quantity goes up by one, or
    ///   `QuantityExceeded` if that would pass the per-item cap (the line is
    ///   left unchanged)
    /// - New product in a full cart: `CapacityExceeded` (the cart is left
    ///   unchanged; the caller is told, never silently dropped)
    /// - Otherwise: a new line with quantity 1 appends at the end
    pub fn add_item(&mut self, product: &Product) -> Result<(), CartError> {
        if let Some(line) = self.lines.iter_mut().find(|l| l.product_id == product.id) {
            if line.quantity >= self.limits.max_line_quantity {
                return Err(CartError::QuantityExceeded {
                    max: self.limits.max_line_quantity,
                });
            }
            line.quantity += 1;
            return Ok(());
        }

        if self.lines.len() >= self.limits.max_lines {
            return Err(CartError::CapacityExceeded {
                max: self.limits.max_lines,
            });
        }

        self.lines.push(CartLine::from_product(product));
        Ok(())
    }

    /// Adjusts a line's quantity by a signed delta.
    ///
    /// ## Behavior
    /// - Result above the cap: `QuantityExceeded`, line unchanged
    /// - Result below 1: clamped to exactly 1; a stepper can never delete
    ///   a line implicitly; removal is [`Cart::remove_item`]'s job
    /// - Product not in the cart: no-op (a stale +/− tap racing a removal
    ///   is not an error)
    /// - Other lines keep their positions
    pub fn change_quantity(&mut self, product_id: ProductId, delta: i64) -> Result<(), CartError> {
        let Some(line) = self.lines.iter_mut().find(|l| l.product_id == product_id) else {
            return Ok(());
        };

        let new_quantity = line.quantity as i64 + delta;
        if new_quantity > self.limits.max_line_quantity as i64 {
            return Err(CartError::QuantityExceeded {
                max: self.limits.max_line_quantity,
            });
        }

        line.quantity = new_quantity.max(1) as u32;
        Ok(())
    }

    /// Deletes the line for a product. No-op when the product is not in the
    /// cart.
    pub fn remove_item(&mut self, product_id: ProductId) {
        self.lines.retain(|l| l.product_id != product_id);
    }

    /// Empties the cart unconditionally (order confirmed, or the shopper
    /// walked away).
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Read-only view of the lines, in insertion order. Reflects live state.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// The caps this cart enforces.
    pub fn limits(&self) -> CartLimits {
        self.limits
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of distinct lines in the cart.
    pub fn distinct_lines(&self) -> usize {
        self.lines.len()
    }

    /// Total quantity across all lines (the cart badge number).
    pub fn total_quantity(&self) -> u32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }
}

impl Default for Cart {
    fn default() -> Self {
        Cart::new(CartLimits::default())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn test_product(id: ProductId, price_cents: i64) -> Product {
        Product {
            id,
            name: format!("Product {}", id),
            description: String::new(),
            image: format!("/images/{}.jpg", id),
            category: "Soups".to_string(),
            price_cents,
        }
    }

    #[test]
    fn test_add_item_new_line() {
        let mut cart = Cart::default();
        let product = test_product(1, 999);

        cart.add_item(&product).unwrap();

        assert_eq!(cart.distinct_lines(), 1);
        assert_eq!(cart.lines()[0].quantity, 1);
        assert_eq!(cart.lines()[0].unit_price_cents, 999);
    }

    #[test]
    fn test_add_same_product_increments_quantity() {
        let mut cart = Cart::default();
        let product = test_product(1, 999);

        cart.add_item(&product).unwrap();
        cart.add_item(&product).unwrap();

        assert_eq!(cart.distinct_lines(), 1); // still one unique line
        assert_eq!(cart.total_quantity(), 2);
    }

    #[test]
    fn test_add_item_respects_quantity_cap() {
        let mut cart = Cart::default();
        let product = test_product(1, 999);

        for _ in 0..5 {
            cart.add_item(&product).unwrap();
        }

        let err = cart.add_item(&product).unwrap_err();
        assert_eq!(err, CartError::QuantityExceeded { max: 5 });
        assert_eq!(cart.lines()[0].quantity, 5); // line unchanged
    }

    #[test]
    fn test_sixth_distinct_product_is_rejected() {
        let mut cart = Cart::default();
        for id in 1..=5 {
            cart.add_item(&test_product(id, 100)).unwrap();
        }
        let before = cart.clone();

        let err = cart.add_item(&test_product(6, 100)).unwrap_err();

        assert_eq!(err, CartError::CapacityExceeded { max: 5 });
        assert_eq!(cart, before); // the 5 lines are byte-for-byte unchanged
    }

    #[test]
    fn test_full_cart_still_accepts_existing_product() {
        let mut cart = Cart::default();
        for id in 1..=5 {
            cart.add_item(&test_product(id, 100)).unwrap();
        }

        // Capacity is about *distinct* products, not total units
        cart.add_item(&test_product(3, 100)).unwrap();
        assert_eq!(cart.total_quantity(), 6);
    }

    #[test]
    fn test_change_quantity_up_and_down() {
        let mut cart = Cart::default();
        cart.add_item(&test_product(1, 100)).unwrap();

        cart.change_quantity(1, 3).unwrap();
        assert_eq!(cart.lines()[0].quantity, 4);

        cart.change_quantity(1, -2).unwrap();
        assert_eq!(cart.lines()[0].quantity, 2);
    }

    #[test]
    fn test_change_quantity_above_cap_fails_and_keeps_line() {
        let mut cart = Cart::default();
        cart.add_item(&test_product(1, 100)).unwrap();
        cart.change_quantity(1, 3).unwrap(); // qty 4

        let err = cart.change_quantity(1, 2).unwrap_err();
        assert_eq!(err, CartError::QuantityExceeded { max: 5 });
        assert_eq!(cart.lines()[0].quantity, 4);
    }

    #[test]
    fn test_change_quantity_clamps_to_one_never_removes() {
        let mut cart = Cart::default();
        cart.add_item(&test_product(1, 100)).unwrap();
        cart.change_quantity(1, 3).unwrap(); // qty 4

        cart.change_quantity(1, -999).unwrap(); // never errors

        assert_eq!(cart.distinct_lines(), 1); // line survived
        assert_eq!(cart.lines()[0].quantity, 1); // clamped to the floor
    }

    #[test]
    fn test_change_quantity_unknown_id_is_noop() {
        let mut cart = Cart::default();
        cart.add_item(&test_product(1, 100)).unwrap();

        cart.change_quantity(42, 1).unwrap();
        assert_eq!(cart.total_quantity(), 1);
    }

    #[test]
    fn test_remove_item() {
        let mut cart = Cart::default();
        cart.add_item(&test_product(1, 100)).unwrap();
        cart.add_item(&test_product(2, 200)).unwrap();

        cart.remove_item(1);
        assert_eq!(cart.distinct_lines(), 1);
        assert_eq!(cart.lines()[0].product_id, 2);

        // absent id: no-op, not an error
        cart.remove_item(42);
        assert_eq!(cart.distinct_lines(), 1);
    }

    #[test]
    fn test_insertion_order_is_preserved() {
        let mut cart = Cart::default();
        for id in [3, 1, 2] {
            cart.add_item(&test_product(id, 100)).unwrap();
        }
        cart.change_quantity(1, 2).unwrap();

        let ids: Vec<ProductId> = cart.lines().iter().map(|l| l.product_id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn test_clear() {
        let mut cart = Cart::default();
        cart.add_item(&test_product(1, 100)).unwrap();
        assert!(!cart.is_empty());

        cart.clear();
        assert!(cart.is_empty());
    }

    #[test]
    fn test_invariants_hold_under_mixed_operations() {
        let mut cart = Cart::default();
        for id in 1..=8 {
            let _ = cart.add_item(&test_product(id, 100));
        }
        for id in 1..=8 {
            let _ = cart.change_quantity(id, 7);
            let _ = cart.change_quantity(id, -100);
            let _ = cart.add_item(&test_product(id, 100));
        }

        assert!(cart.distinct_lines() <= 5);
        for line in cart.lines() {
            assert!((1..=5).contains(&line.quantity));
        }
    }

    #[test]
    fn test_custom_limits() {
        let mut cart = Cart::new(CartLimits {
            max_lines: 2,
            max_line_quantity: 3,
        });
        cart.add_item(&test_product(1, 100)).unwrap();
        cart.add_item(&test_product(2, 100)).unwrap();

        assert_eq!(
            cart.add_item(&test_product(3, 100)).unwrap_err(),
            CartError::CapacityExceeded { max: 2 }
        );
        assert_eq!(
            cart.change_quantity(1, 5).unwrap_err(),
            CartError::QuantityExceeded { max: 3 }
        );
    }
}
