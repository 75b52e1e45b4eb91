//! # Error Types
//!
//! Domain-specific error types for cafe-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  cafe-core errors (this file)                                          │
//! │  ├── CartError      - capacity/quantity cap violations                 │
//! │  ├── CheckoutError  - per-field form validation failures               │
//! │  └── FlowError      - state machine violations (wraps CheckoutError)   │
//! │                                                                         │
//! │  cafe-catalog errors (separate crate)                                  │
//! │  └── CatalogError   - product file load failures                       │
//! │                                                                         │
//! │  Kiosk API errors (in app)                                             │
//! │  └── ApiError       - what the frontend sees (serialized)              │
//! │                                                                         │
//! │  Flow: CheckoutError → FlowError → ApiError → Frontend                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include the violated limit in the variant (max, range bounds)
//! 3. Errors are enum variants, never String
//! 4. Everything here is recoverable; the shopper retries or cancels;
//!    nothing in this crate panics

use thiserror::Error;

use crate::types::FlowState;

// =============================================================================
// Cart Error
// =============================================================================

/// Cart capacity rule violations.
///
/// Both caps exist to bound checkout complexity and receipt size on a small
/// device. A failed mutation leaves the cart byte-for-byte unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CartError {
    /// A 6th distinct product was added to a full cart.
    ///
    /// ## When This Occurs
    /// - Cart already holds `max` distinct lines
    /// - The added product id is not among them
    #[error("cart cannot hold more than {max} different items")]
    CapacityExceeded { max: usize },

    /// A line's quantity would pass the per-item cap.
    ///
    /// ## When This Occurs
    /// - `add_item` on a line already at the cap
    /// - `change_quantity` with a delta that lands above the cap
    ///
    /// The line keeps its previous quantity in both cases.
    #[error("no more than {max} units of each item")]
    QuantityExceeded { max: u32 },
}

// =============================================================================
// Checkout Error
// =============================================================================

/// Per-field checkout form validation failures.
///
/// Each rule is independent: a failing table number does not block editing
/// (or validating) the name and phone fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CheckoutError {
    /// Table field does not parse as an integer, or parses outside the
    /// configured table range.
    #[error("table number must be between {min} and {max}")]
    InvalidTable { min: u32, max: u32 },

    /// Name field is empty after trimming.
    #[error("name is required")]
    MissingName,

    /// Phone field is empty after trimming.
    #[error("phone number is required")]
    MissingPhone,
}

// =============================================================================
// Flow Error
// =============================================================================

/// Order flow state machine violations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FlowError {
    /// Checkout was begun with nothing in the cart.
    ///
    /// ## User Workflow
    /// ```text
    /// Cart panel (0 items) ──► "Proceed to Checkout"
    ///          │
    ///          ▼
    /// EmptyCart ── state stays CartOpen, UI disables the button
    /// ```
    #[error("cannot check out an empty cart")]
    EmptyCart,

    /// An operation was invoked from a state it is not defined for
    /// (e.g. `submit_checkout` while Browsing).
    #[error("cannot {action} while {state:?}")]
    InvalidTransition {
        state: FlowState,
        action: &'static str,
    },

    /// The checkout form failed validation; the draft is kept intact and
    /// the first violating field is reported.
    #[error(transparent)]
    Checkout(#[from] CheckoutError),
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cart_error_messages() {
        let err = CartError::CapacityExceeded { max: 5 };
        assert_eq!(err.to_string(), "cart cannot hold more than 5 different items");

        let err = CartError::QuantityExceeded { max: 5 };
        assert_eq!(err.to_string(), "no more than 5 units of each item");
    }

    #[test]
    fn test_checkout_error_messages() {
        let err = CheckoutError::InvalidTable { min: 1, max: 12 };
        assert_eq!(err.to_string(), "table number must be between 1 and 12");
        assert_eq!(CheckoutError::MissingName.to_string(), "name is required");
        assert_eq!(
            CheckoutError::MissingPhone.to_string(),
            "phone number is required"
        );
    }

    #[test]
    fn test_checkout_converts_to_flow_error() {
        let err: FlowError = CheckoutError::MissingName.into();
        assert!(matches!(err, FlowError::Checkout(CheckoutError::MissingName)));
        // transparent: the message is the inner one
        assert_eq!(err.to_string(), "name is required");
    }

    #[test]
    fn test_invalid_transition_message() {
        let err = FlowError::InvalidTransition {
            state: FlowState::Browsing,
            action: "submit checkout",
        };
        assert_eq!(err.to_string(), "cannot submit checkout while Browsing");
    }
}
