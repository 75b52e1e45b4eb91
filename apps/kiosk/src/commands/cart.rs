//! # Cart Commands
//!
//! Cart manipulation for the cart panel.
//!
//! ## Cart Panel Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Panel                                           │
//! │                                                                         │
//! │  Tap "Add to Cart"  ───► add_to_cart(id)        ───► badge count up    │
//! │  Tap "+" stepper    ───► change_quantity(id, 1) ───► line qty up       │
//! │  Tap "−" stepper    ───► change_quantity(id,-1) ───► line qty down     │
//! │  Tap trash icon     ───► remove_from_cart(id)   ───► line gone         │
//! │  Abandon order      ───► clear_cart()           ───► panel empty       │
//! │  Render panel       ───► get_cart()             ───► (read only)       │
//! │                                                                         │
//! │  Cap violations return an error AND post the transient popup; the      │
//! │  cart itself is left exactly as it was.                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use tracing::debug;

use cafe_core::types::ProductId;
use cafe_core::{CartLine, CartTotals, OrderFlow};

use crate::error::ApiError;
use crate::state::SessionState;

/// Cart response: the lines plus live totals, which is everything the
/// panel renders.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartView {
    pub lines: Vec<CartLine>,
    pub totals: CartTotals,
}

impl CartView {
    fn from_flow(flow: &OrderFlow) -> Self {
        CartView {
            lines: flow.cart().lines().to_vec(),
            totals: flow.totals(),
        }
    }
}

/// Gets the current cart contents and totals.
pub fn get_cart(session: &SessionState) -> CartView {
    debug!("get_cart command");
    session.with_flow(CartView::from_flow)
}

/// Adds one unit of a product to the cart.
///
/// ## Behavior
/// - Product already in cart: quantity goes up by one
/// - New product: appended with quantity 1
/// - Either cap hit: the cart is unchanged, the transient popup is posted,
///   and the error comes back to the caller too
///
/// ## Arguments
/// * `product_id` - Catalog id of the tapped menu card
pub fn add_to_cart(session: &SessionState, product_id: ProductId) -> Result<CartView, ApiError> {
    debug!(product_id, "add_to_cart command");

    let product = session
        .catalog()
        .get(product_id)
        .cloned()
        .ok_or_else(|| ApiError::not_found("Product", product_id))?;

    let result = session.with_flow_mut(|flow| {
        flow.cart_mut().add_item(&product)?;
        Ok::<CartView, cafe_core::CartError>(CartView::from_flow(flow))
    });

    result.map_err(|err| {
        session.notices().post(err.to_string());
        err.into()
    })
}

/// Adjusts a line's quantity by a signed delta (the +/− steppers).
///
/// Going below 1 clamps to 1; going above the cap fails and posts the
/// popup; an id that is no longer in the cart is a no-op.
pub fn change_quantity(
    session: &SessionState,
    product_id: ProductId,
    delta: i64,
) -> Result<CartView, ApiError> {
    debug!(product_id, delta, "change_quantity command");

    let result = session.with_flow_mut(|flow| {
        flow.cart_mut().change_quantity(product_id, delta)?;
        Ok::<CartView, cafe_core::CartError>(CartView::from_flow(flow))
    });

    result.map_err(|err| {
        session.notices().post(err.to_string());
        err.into()
    })
}

/// Removes a line from the cart. No-op when the product is not in it.
pub fn remove_from_cart(session: &SessionState, product_id: ProductId) -> CartView {
    debug!(product_id, "remove_from_cart command");

    session.with_flow_mut(|flow| {
        flow.cart_mut().remove_item(product_id);
        CartView::from_flow(flow)
    })
}

/// Clears all lines from the cart.
///
/// ## When Used
/// - The shopper abandons the order
/// - (Order confirmation clears the cart itself, inside the engine)
pub fn clear_cart(session: &SessionState) -> CartView {
    debug!("clear_cart command");

    session.with_flow_mut(|flow| {
        flow.cart_mut().clear();
        CartView::from_flow(flow)
    })
}

// =============================================================================
// Unit Tests
// =============================================================================
