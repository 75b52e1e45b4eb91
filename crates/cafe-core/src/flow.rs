//! # Order Flow Controller
//!
//! The state machine tying the engine together: it owns the cart, the
//! checkout draft, and the confirmed order snapshot, and gates every
//! transition of the browsing → cart → checkout → confirmation cycle.
//!
//! ## State Diagram
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Order Flow                                       │
//! │                                                                         │
//! │               open_cart()            begin_checkout()                   │
//! │  ┌──────────┐ ─────────► ┌──────────┐ ─────────► ┌─────────────┐       │
//! │  │ Browsing │            │ CartOpen │            │ CheckingOut │       │
//! │  └──────────┘ ◄───────── └──────────┘            └─────────────┘       │
//! │       ▲        close_cart()    ▲                       │    │           │
//! │       │                        └───────────────────────┘    │           │
//! │       │                             close_cart()            │           │
//! │       │                                                     │           │
//! │       │        acknowledge_confirmation()   ┌───────────┐   │           │
//! │       └──────────────────────────────────── │ Confirmed │ ◄─┘           │
//! │                                             └───────────┘               │
//! │                                           submit_checkout()             │
//! │                                                                         │
//! │  Cyclic per order; no terminal state. Cart edits are allowed in any     │
//! │  state; the machine only gates the checkout funnel.                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Ownership
//! The controller exclusively owns the Cart for the session's lifetime.
//! The [`OrderSummary`] it produces is a detached value with no back
//! reference; later cart mutation cannot reach a printed receipt.

use chrono::Utc;
use uuid::Uuid;

use crate::cart::{Cart, CartLimits};
use crate::checkout::{CheckoutDraft, CheckoutField, TableRange};
use crate::error::{CheckoutError, FlowError};
use crate::pricing::{price_cart, CartTotals};
use crate::types::{FlowState, OrderLine, OrderSummary, TaxRate};

// =============================================================================
// Flow Configuration
// =============================================================================

/// Everything configurable about one ordering session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlowConfig {
    /// Cart caps (distinct lines, per-line quantity).
    pub limits: CartLimits,

    /// Tax rate applied to the whole order.
    pub tax_rate: TaxRate,

    /// Valid dine-in table numbers.
    pub table_range: TableRange,
}

impl Default for FlowConfig {
    /// The shipped kiosk: 5/5 caps, 5% tax, tables 1-12.
    fn default() -> Self {
        FlowConfig {
            limits: CartLimits::default(),
            tax_rate: TaxRate::from_bps(crate::DEFAULT_TAX_RATE_BPS),
            table_range: TableRange::default(),
        }
    }
}

// =============================================================================
// Order Flow
// =============================================================================

/// One shopper's ordering session.
///
/// All mutations are synchronous and run to completion before the next user
/// action is accepted, so the controller needs no internal locking; the
/// host wraps the whole session in one mutex (one instance per session,
/// nothing shared across sessions).
#[derive(Debug, Clone)]
pub struct OrderFlow {
    state: FlowState,
    cart: Cart,
    config: FlowConfig,
    /// Present only while CheckingOut.
    draft: Option<CheckoutDraft>,
    /// Present only while Confirmed.
    confirmed: Option<OrderSummary>,
}

impl OrderFlow {
    /// Creates a fresh session in the Browsing state with an empty cart.
    pub fn new(config: FlowConfig) -> Self {
        OrderFlow {
            state: FlowState::Browsing,
            cart: Cart::new(config.limits),
            config,
            draft: None,
            confirmed: None,
        }
    }

    /// The current flow state.
    #[inline]
    pub fn state(&self) -> FlowState {
        self.state
    }

    /// The session configuration.
    #[inline]
    pub fn config(&self) -> FlowConfig {
        self.config
    }

    /// Read access to the cart.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Write access to the cart.
    ///
    /// Cart edits are legal in every state; the original page lets the
    /// shopper keep tapping "Add to Cart" whether or not the panel is open.
    pub fn cart_mut(&mut self) -> &mut Cart {
        &mut self.cart
    }

    /// Prices the live cart at the session's tax rate.
    pub fn totals(&self) -> CartTotals {
        price_cart(&self.cart, self.config.tax_rate)
    }

    /// The in-progress checkout draft, while CheckingOut.
    pub fn draft(&self) -> Option<&CheckoutDraft> {
        self.draft.as_ref()
    }

    /// The confirmed order awaiting acknowledgement, while Confirmed.
    ///
    /// This is what the receipt formatter consumes; it must do so before
    /// [`OrderFlow::acknowledge_confirmation`] discards it.
    pub fn confirmed_order(&self) -> Option<&OrderSummary> {
        self.confirmed.as_ref()
    }

    // -------------------------------------------------------------------------
    // Transitions
    // -------------------------------------------------------------------------

    /// Opens the cart panel. Legal from any state, no precondition.
    ///
    /// Opening from CheckingOut abandons the draft (the shopper backed out
    /// of the form into the cart view); opening from Confirmed drops the
    /// already-consumed summary.
    pub fn open_cart(&mut self) {
        self.draft = None;
        self.confirmed = None;
        self.state = FlowState::CartOpen;
    }

    /// Closes the cart panel back to browsing.
    ///
    /// Discards the in-progress checkout draft but NOT the cart contents;
    /// closing the panel is not abandoning the meal.
    pub fn close_cart(&mut self) -> Result<(), FlowError> {
        match self.state {
            FlowState::CartOpen | FlowState::CheckingOut => {
                self.draft = None;
                self.state = FlowState::Browsing;
                Ok(())
            }
            state => Err(FlowError::InvalidTransition {
                state,
                action: "close cart",
            }),
        }
    }

    /// Starts checkout: CartOpen → CheckingOut with an empty draft.
    ///
    /// Fails with [`FlowError::EmptyCart`] when there is nothing to order;
    /// the state stays CartOpen.
    pub fn begin_checkout(&mut self) -> Result<&CheckoutDraft, FlowError> {
        if self.state != FlowState::CartOpen {
            return Err(FlowError::InvalidTransition {
                state: self.state,
                action: "begin checkout",
            });
        }
        if self.cart.is_empty() {
            return Err(FlowError::EmptyCart);
        }

        self.state = FlowState::CheckingOut;
        Ok(&*self.draft.insert(CheckoutDraft::new()))
    }

    /// Stores new text for one checkout field and re-validates that field.
    ///
    /// Returns the field's current violation, if any; `Ok(None)` means the
    /// field passes right now. A failing field never blocks edits to the
    /// others and never erases the shopper's text.
    pub fn edit_field(
        &mut self,
        field: CheckoutField,
        value: impl Into<String>,
    ) -> Result<Option<CheckoutError>, FlowError> {
        let range = self.config.table_range;
        let draft = self.draft.as_mut().ok_or(FlowError::InvalidTransition {
            state: self.state,
            action: "edit checkout form",
        })?;

        draft.set_field(field, value);
        Ok(draft.check_field(field, range))
    }

    /// Submits the checkout form: CheckingOut → Confirmed.
    ///
    /// ## On success
    /// 1. The draft distills into a validated `CustomerInfo`
    /// 2. The cart is priced and snapshotted into an [`OrderSummary`]
    ///    (id, timestamp, frozen lines, subtotal/tax/total)
    /// 3. The cart is cleared and the draft discarded
    /// 4. State becomes Confirmed; the summary is exposed via
    ///    [`OrderFlow::confirmed_order`]
    ///
    /// ## On validation failure
    /// No transition: the state stays CheckingOut, the draft keeps the
    /// shopper's text, and the first violating field is reported.
    pub fn submit_checkout(&mut self) -> Result<&OrderSummary, FlowError> {
        if self.state != FlowState::CheckingOut {
            return Err(FlowError::InvalidTransition {
                state: self.state,
                action: "submit checkout",
            });
        }
        let draft = self.draft.as_ref().ok_or(FlowError::InvalidTransition {
            state: self.state,
            action: "submit checkout",
        })?;

        let customer = draft
            .validate(self.config.table_range)
            .map_err(|errors| match errors.first() {
                Some(err) => FlowError::Checkout(err),
                // validate() only errs with at least one field set
                None => FlowError::Checkout(CheckoutError::MissingName),
            })?;

        // Price and freeze BEFORE clearing; the summary must be independent
        // of everything that happens to the cart afterwards.
        let totals = self.totals();
        let lines: Vec<OrderLine> = self
            .cart
            .lines()
            .iter()
            .map(|l| OrderLine {
                product_id: l.product_id,
                name: l.name.clone(),
                unit_price_cents: l.unit_price_cents,
                quantity: l.quantity,
                line_total_cents: l.line_total_cents(),
            })
            .collect();

        let summary = OrderSummary {
            id: Uuid::new_v4().to_string(),
            placed_at: Utc::now(),
            customer,
            lines,
            subtotal_cents: totals.subtotal_cents,
            tax_rate_bps: self.config.tax_rate.bps(),
            tax_cents: totals.tax_cents,
            total_cents: totals.total_cents,
        };

        self.cart.clear();
        self.draft = None;
        self.state = FlowState::Confirmed;

        Ok(&*self.confirmed.insert(summary))
    }

    /// Dismisses the confirmation screen: Confirmed → Browsing.
    ///
    /// Discards the summary; the receipt formatter must already have
    /// consumed it.
    pub fn acknowledge_confirmation(&mut self) -> Result<(), FlowError> {
        if self.state != FlowState::Confirmed {
            return Err(FlowError::InvalidTransition {
                state: self.state,
                action: "acknowledge confirmation",
            });
        }

        self.confirmed = None;
        self.state = FlowState::Browsing;
        Ok(())
    }
}

impl Default for OrderFlow {
    fn default() -> Self {
        OrderFlow::new(FlowConfig::default())
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
            category: "Salads".to_string(),
            price_cents,
        }
    }

    /// Drives a flow to CheckingOut with one 10.00 item in the cart.
    fn flow_at_checkout() -> OrderFlow {
        let mut flow = OrderFlow::default();
        flow.cart_mut().add_item(&test_product(1, 1000)).unwrap();
        flow.open_cart();
        flow.begin_checkout().unwrap();
        flow
    }

    fn fill_valid_form(flow: &mut OrderFlow) {
        flow.edit_field(CheckoutField::Table, "7").unwrap();
        flow.edit_field(CheckoutField::Name, "Priya").unwrap();
        flow.edit_field(CheckoutField::Phone, "98765").unwrap();
    }

    #[test]
    fn test_starts_browsing_with_empty_cart() {
        let flow = OrderFlow::default();
        assert_eq!(flow.state(), FlowState::Browsing);
        assert!(flow.cart().is_empty());
        assert!(flow.draft().is_none());
        assert!(flow.confirmed_order().is_none());
    }

    #[test]
    fn test_open_cart_has_no_precondition() {
        let mut flow = OrderFlow::default();
        flow.open_cart();
        assert_eq!(flow.state(), FlowState::CartOpen);

        // reopening while already open is fine
        flow.open_cart();
        assert_eq!(flow.state(), FlowState::CartOpen);
    }

    #[test]
    fn test_close_cart_keeps_cart_contents() {
        let mut flow = OrderFlow::default();
        flow.cart_mut().add_item(&test_product(1, 500)).unwrap();
        flow.open_cart();

        flow.close_cart().unwrap();

        assert_eq!(flow.state(), FlowState::Browsing);
        assert_eq!(flow.cart().distinct_lines(), 1);
    }

    #[test]
    fn test_close_cart_from_browsing_is_invalid() {
        let mut flow = OrderFlow::default();
        let err = flow.close_cart().unwrap_err();
        assert!(matches!(
            err,
            FlowError::InvalidTransition {
                state: FlowState::Browsing,
                ..
            }
        ));
    }

    #[test]
    fn test_begin_checkout_on_empty_cart_fails_and_stays_cart_open() {
        let mut flow = OrderFlow::default();
        flow.open_cart();

        let err = flow.begin_checkout().unwrap_err();

        assert_eq!(err, FlowError::EmptyCart);
        assert_eq!(flow.state(), FlowState::CartOpen);
        assert!(flow.draft().is_none());
    }

    #[test]
    fn test_begin_checkout_creates_empty_draft() {
        let flow = flow_at_checkout();
        assert_eq!(flow.state(), FlowState::CheckingOut);
        assert_eq!(flow.draft().unwrap(), &CheckoutDraft::new());
    }

    #[test]
    fn test_close_cart_during_checkout_discards_draft_not_cart() {
        let mut flow = flow_at_checkout();
        flow.edit_field(CheckoutField::Name, "Priya").unwrap();

        flow.close_cart().unwrap();

        assert_eq!(flow.state(), FlowState::Browsing);
        assert!(flow.draft().is_none()); // draft gone
        assert_eq!(flow.cart().distinct_lines(), 1); // cart kept
    }

    #[test]
    fn test_edit_field_reports_reactively() {
        let mut flow = flow_at_checkout();

        let err = flow.edit_field(CheckoutField::Table, "13").unwrap();
        assert!(matches!(err, Some(CheckoutError::InvalidTable { .. })));

        let err = flow.edit_field(CheckoutField::Table, "7").unwrap();
        assert_eq!(err, None);
    }

    #[test]
    fn test_edit_field_outside_checkout_is_invalid() {
        let mut flow = OrderFlow::default();
        let err = flow.edit_field(CheckoutField::Name, "Priya").unwrap_err();
        assert!(matches!(err, FlowError::InvalidTransition { .. }));
    }

    #[test]
    fn test_submit_with_invalid_form_stays_checking_out() {
        let mut flow = flow_at_checkout();
        flow.edit_field(CheckoutField::Table, "13").unwrap();
        flow.edit_field(CheckoutField::Name, "Priya").unwrap();
        flow.edit_field(CheckoutField::Phone, "98765").unwrap();

        let err = flow.submit_checkout().unwrap_err();

        assert!(matches!(
            err,
            FlowError::Checkout(CheckoutError::InvalidTable { min: 1, max: 12 })
        ));
        assert_eq!(flow.state(), FlowState::CheckingOut);
        // partial input survives the failed submit
        assert_eq!(flow.draft().unwrap().table, "13");
        assert_eq!(flow.draft().unwrap().name, "Priya");
        assert!(!flow.cart().is_empty());
    }

    #[test]
    fn test_submit_success_confirms_clears_and_snapshots() {
        let mut flow = OrderFlow::default();
        let a = test_product(1, 1000);
        let b = test_product(2, 1500);
        flow.cart_mut().add_item(&a).unwrap();
        flow.cart_mut().add_item(&a).unwrap();
        flow.cart_mut().add_item(&b).unwrap();
        flow.open_cart();
        flow.begin_checkout().unwrap();
        fill_valid_form(&mut flow);

        let expected = flow.totals(); // priced before clearing
        let summary = flow.submit_checkout().unwrap().clone();

        assert_eq!(flow.state(), FlowState::Confirmed);
        assert!(flow.cart().is_empty());
        assert!(flow.draft().is_none());

        assert_eq!(summary.customer.table, 7);
        assert_eq!(summary.lines.len(), 2);
        assert_eq!(summary.subtotal_cents, expected.subtotal_cents); // 3500
        assert_eq!(summary.tax_cents, expected.tax_cents); // 175
        assert_eq!(summary.total_cents, expected.total_cents); // 3675
        assert_eq!(summary.total_cents, 3675);
    }

    #[test]
    fn test_summary_is_detached_from_later_cart_mutation() {
        let mut flow = flow_at_checkout();
        fill_valid_form(&mut flow);
        let summary = flow.submit_checkout().unwrap().clone();

        // keep shopping into a new cart
        flow.cart_mut().add_item(&test_product(9, 9999)).unwrap();

        assert_eq!(summary.lines.len(), 1);
        assert_eq!(summary.subtotal_cents, 1000);
    }

    #[test]
    fn test_acknowledge_returns_to_browsing_and_drops_summary() {
        let mut flow = flow_at_checkout();
        fill_valid_form(&mut flow);
        flow.submit_checkout().unwrap();
        assert!(flow.confirmed_order().is_some());

        flow.acknowledge_confirmation().unwrap();

        assert_eq!(flow.state(), FlowState::Browsing);
        assert!(flow.confirmed_order().is_none());
    }

    #[test]
    fn test_acknowledge_outside_confirmed_is_invalid() {
        let mut flow = OrderFlow::default();
        assert!(matches!(
            flow.acknowledge_confirmation().unwrap_err(),
            FlowError::InvalidTransition { .. }
        ));
    }

    #[test]
    fn test_flow_is_cyclic_per_order() {
        let mut flow = flow_at_checkout();
        fill_valid_form(&mut flow);
        flow.submit_checkout().unwrap();
        flow.acknowledge_confirmation().unwrap();

        // a second order goes around the same loop
        flow.cart_mut().add_item(&test_product(2, 650)).unwrap();
        flow.open_cart();
        flow.begin_checkout().unwrap();
        fill_valid_form(&mut flow);
        let summary = flow.submit_checkout().unwrap();
        assert_eq!(summary.subtotal_cents, 650);
    }

    #[test]
    fn test_submit_from_browsing_is_invalid() {
        let mut flow = OrderFlow::default();
        assert!(matches!(
            flow.submit_checkout().unwrap_err(),
            FlowError::InvalidTransition {
                state: FlowState::Browsing,
                ..
            }
        ));
    }
}
