//! # API Error Type
//!
//! Unified error type for the kiosk command layer.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Kiosk                              │
//! │                                                                         │
//! │  Frontend                     Rust Backend                              │
//! │  ────────                     ────────────                              │
//! │                                                                         │
//! │  addToCart(6th item)                                                    │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Command Function                                                │  │
//! │  │  Result<CartView, ApiError>                                      │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Cart cap hit? ──── CartError::CapacityExceeded ──┐              │  │
//! │  │         │                                         ▼              │  │
//! │  │  Form invalid? ──── CheckoutError::MissingName ── ApiError ────► │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Success ───────────────────────────────────────────────────────►│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  { code: "CAPACITY_EXCEEDED",                                           │
//! │    message: "cart cannot hold more than 5 different items" }            │
//! │                                                                         │
//! │  The code is the machine-readable event signal; the UI decides          │
//! │  whether it becomes a toast, an inline field error, or a popup.         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;

use cafe_core::{CartError, CheckoutError, FlowError};

/// API error returned from kiosk commands.
///
/// ## Serialization
/// This is what the frontend receives when a command fails:
/// ```json
/// {
///   "code": "INVALID_TABLE",
///   "message": "table number must be between 1 and 12"
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for API responses; the engine's event signals, one code
/// per error kind the UI has to react to.
///
/// ## Usage in Frontend
/// ```typescript
/// try {
///   await kiosk.addToCart(productId);
/// } catch (e) {
///   switch (e.code) {
///     case 'CAPACITY_EXCEEDED':
///     case 'QUANTITY_EXCEEDED':
///       showPopup(e.message);
///       break;
///     case 'INVALID_TABLE':
///       markField('table', e.message);
///       break;
///   }
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// 6th distinct product added to a full cart
    CapacityExceeded,

    /// Per-item quantity cap would be passed
    QuantityExceeded,

    /// Checkout begun on an empty cart
    EmptyCart,

    /// Table field not an integer in the configured range
    InvalidTable,

    /// Name field empty
    MissingName,

    /// Phone field empty
    MissingPhone,

    /// Operation invoked from the wrong flow state
    InvalidState,

    /// Product id not on the menu
    NotFound,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a not found error.
    pub fn not_found(resource: &str, id: impl std::fmt::Display) -> Self {
        ApiError::new(ErrorCode::NotFound, format!("{} not found: {}", resource, id))
    }
}

/// Converts cart errors to API errors.
impl From<CartError> for ApiError {
    fn from(err: CartError) -> Self {
        let code = match err {
            CartError::CapacityExceeded { .. } => ErrorCode::CapacityExceeded,
            CartError::QuantityExceeded { .. } => ErrorCode::QuantityExceeded,
        };
        ApiError::new(code, err.to_string())
    }
}

/// Converts checkout errors to API errors.
impl From<CheckoutError> for ApiError {
    fn from(err: CheckoutError) -> Self {
        let code = match err {
            CheckoutError::InvalidTable { .. } => ErrorCode::InvalidTable,
            CheckoutError::MissingName => ErrorCode::MissingName,
            CheckoutError::MissingPhone => ErrorCode::MissingPhone,
        };
        ApiError::new(code, err.to_string())
    }
}

/// Converts flow errors to API errors.
impl From<FlowError> for ApiError {
    fn from(err: FlowError) -> Self {
        match err {
            FlowError::EmptyCart => ApiError::new(ErrorCode::EmptyCart, err.to_string()),
            FlowError::InvalidTransition { .. } => {
                ApiError::new(ErrorCode::InvalidState, err.to_string())
            }
            FlowError::Checkout(inner) => inner.into(),
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use cafe_core::FlowState;

    #[test]
    fn test_cart_error_mapping() {
        let err: ApiError = CartError::CapacityExceeded { max: 5 }.into();
        assert_eq!(err.code, ErrorCode::CapacityExceeded);
        assert!(err.message.contains("5 different items"));
    }

    #[test]
    fn test_checkout_error_mapping() {
        let err: ApiError = CheckoutError::InvalidTable { min: 1, max: 12 }.into();
        assert_eq!(err.code, ErrorCode::InvalidTable);

        let err: ApiError = CheckoutError::MissingPhone.into();
        assert_eq!(err.code, ErrorCode::MissingPhone);
    }

    #[test]
    fn test_flow_error_unwraps_checkout_cause() {
        let err: ApiError = FlowError::Checkout(CheckoutError::MissingName).into();
        assert_eq!(err.code, ErrorCode::MissingName);

        let err: ApiError = FlowError::EmptyCart.into();
        assert_eq!(err.code, ErrorCode::EmptyCart);

        let err: ApiError = FlowError::InvalidTransition {
            state: FlowState::Browsing,
            action: "submit checkout",
        }
        .into();
        assert_eq!(err.code, ErrorCode::InvalidState);
    }

    #[test]
    fn test_serializes_screaming_snake_case() {
        let err: ApiError = CartError::QuantityExceeded { max: 5 }.into();
        let json = serde_json::to_string(&err).unwrap();
        assert!(json.contains(r#""code":"QUANTITY_EXCEEDED""#));
    }
}
