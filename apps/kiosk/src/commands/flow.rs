//! # Flow Commands
//!
//! The checkout funnel: opening/closing the cart panel, starting checkout,
//! editing the form, submitting, and acknowledging the confirmation.
//!
//! ## Funnel
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Tap cart icon ─────────► open_cart()                 → CartOpen        │
//! │  Tap ✕ on panel ────────► close_cart()                → Browsing        │
//! │  "Proceed to Checkout" ─► begin_checkout()            → CheckingOut     │
//! │  Type in a form field ──► update_checkout_field(...)  (reactive check)  │
//! │  "Confirm Order" ───────► submit_checkout()           → Confirmed       │
//! │  Dismiss confirmation ──► acknowledge_confirmation()  → Browsing        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use tracing::{debug, info};

use cafe_core::checkout::CheckoutField;
use cafe_core::types::{FlowState, OrderSummary};

use crate::error::ApiError;
use crate::state::SessionState;

/// The reactive outcome of editing one checkout field.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldCheck {
    pub field: CheckoutField,
    /// The field's current violation; `None` means it passes right now.
    pub error: Option<ApiError>,
}

/// Opens the cart panel. Always succeeds.
pub fn open_cart(session: &SessionState) -> FlowState {
    debug!("open_cart command");

    session.with_flow_mut(|flow| {
        flow.open_cart();
        flow.state()
    })
}

/// Closes the cart panel (also backs out of an in-progress checkout form).
/// Cart contents survive; the half-typed form does not.
pub fn close_cart(session: &SessionState) -> Result<FlowState, ApiError> {
    debug!("close_cart command");

    session.with_flow_mut(|flow| {
        flow.close_cart()?;
        Ok(flow.state())
    })
}

/// Starts checkout from the open cart panel.
///
/// Fails with `EMPTY_CART` when there is nothing to order.
pub fn begin_checkout(session: &SessionState) -> Result<FlowState, ApiError> {
    debug!("begin_checkout command");

    session.with_flow_mut(|flow| {
        flow.begin_checkout()?;
        Ok(flow.state())
    })
}

/// Stores new text for one checkout field and returns that field's
/// reactive validation outcome.
///
/// Called on every edit, not only on submit. A failing field never blocks
/// the others and never loses the shopper's text.
pub fn update_checkout_field(
    session: &SessionState,
    field: CheckoutField,
    value: &str,
) -> Result<FieldCheck, ApiError> {
    debug!(field = ?field, "update_checkout_field command");

    let outcome = session.with_flow_mut(|flow| flow.edit_field(field, value))?;
    Ok(FieldCheck {
        field,
        error: outcome.map(ApiError::from),
    })
}

/// Submits the checkout form.
///
/// On success the engine snapshots and returns the confirmed order (the
/// caller hands it to the receipt formatter) and the cart is already
/// empty. On validation failure the state stays CheckingOut and the first
/// violating field comes back as the error.
pub fn submit_checkout(session: &SessionState) -> Result<OrderSummary, ApiError> {
    debug!("submit_checkout command");

    let summary = session.with_flow_mut(|flow| flow.submit_checkout().map(|s| s.clone()))?;

    info!(
        order_id = %summary.id,
        table = summary.customer.table,
        total_cents = summary.total_cents,
        lines = summary.lines.len(),
        "order confirmed"
    );

    Ok(summary)
}

/// Dismisses the confirmation screen and returns to browsing.
pub fn acknowledge_confirmation(session: &SessionState) -> Result<FlowState, ApiError> {
    debug!("acknowledge_confirmation command");

    session.with_flow_mut(|flow| {
        flow.acknowledge_confirmation()?;
        Ok(flow.state())
    })
}

// =============================================================================
// Unit Tests
// =============================================================================
