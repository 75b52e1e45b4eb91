//! # Checkout Validator
//!
//! Validates the checkout form (table number, name, phone) before an order
//! may be finalized.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Reactive Field Validation                           │
//! │                                                                         │
//! │  Every keystroke in the checkout form:                                  │
//! │                                                                         │
//! │    edit "table" field ──► check_field(Table) ──► Some(InvalidTable)?   │
//! │                                    │                                    │
//! │                                    ▼                                    │
//! │              inline error under that field only; the name and           │
//! │              phone fields keep whatever the shopper typed               │
//! │                                                                         │
//! │  Submit:                                                                │
//! │                                                                         │
//! │    validate() ──► all three rules pass ──► CustomerInfo                 │
//! │               └─► any rule fails ──────► FieldErrors (field → error)    │
//! │                                                                         │
//! │  The three rules are independent: a bad table number never blocks       │
//! │  editing or validating the other fields.                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CheckoutError;
use crate::types::CustomerInfo;
use crate::{DEFAULT_TABLE_MAX, DEFAULT_TABLE_MIN};

// =============================================================================
// Table Range
// =============================================================================

/// The inclusive range of valid dine-in table numbers.
///
/// Configuration, not a literal: a bigger floor just changes the range the
/// kiosk is constructed with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct TableRange {
    pub min: u32,
    pub max: u32,
}

impl TableRange {
    /// Checks whether a table number falls inside the range.
    #[inline]
    pub const fn contains(&self, table: u32) -> bool {
        table >= self.min && table <= self.max
    }
}

impl Default for TableRange {
    /// The shipped cafe floor: tables 1 through 12.
    fn default() -> Self {
        TableRange {
            min: DEFAULT_TABLE_MIN,
            max: DEFAULT_TABLE_MAX,
        }
    }
}

// =============================================================================
// Field Validators
// =============================================================================

/// Identifies one field of the checkout form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum CheckoutField {
    Table,
    Name,
    Phone,
}

/// Validates the table field.
///
/// ## Rules
/// - Must parse as an integer (surrounding whitespace is tolerated)
/// - Must fall inside the configured range
///
/// ## Example
/// ```rust
/// use cafe_core::checkout::{validate_table, TableRange};
///
/// let range = TableRange::default(); // 1-12
/// assert_eq!(validate_table("7", range).unwrap(), 7);
/// assert!(validate_table("13", range).is_err());
/// assert!(validate_table("patio", range).is_err());
/// ```
pub fn validate_table(raw: &str, range: TableRange) -> Result<u32, CheckoutError> {
    raw.trim()
        .parse::<u32>()
        .ok()
        .filter(|table| range.contains(*table))
        .ok_or(CheckoutError::InvalidTable {
            min: range.min,
            max: range.max,
        })
}

/// Validates the name field: non-empty after trimming.
///
/// Returns the trimmed name.
pub fn validate_name(raw: &str) -> Result<String, CheckoutError> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(CheckoutError::MissingName);
    }
    Ok(name.to_string())
}

/// Validates the phone field: non-empty after trimming.
///
/// The format is deliberately unconstrained beyond that; the cafe staff
/// dial whatever the customer wrote down.
pub fn validate_phone(raw: &str) -> Result<String, CheckoutError> {
    let phone = raw.trim();
    if phone.is_empty() {
        return Err(CheckoutError::MissingPhone);
    }
    Ok(phone.to_string())
}

// =============================================================================
// Field Errors
// =============================================================================

/// The field → error mapping produced by a full-form validation pass.
///
/// One slot per field so the frontend can render every inline error at once
/// instead of fixing them one submit at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FieldErrors {
    pub table: Option<CheckoutError>,
    pub name: Option<CheckoutError>,
    pub phone: Option<CheckoutError>,
}

impl FieldErrors {
    /// True when every field passed.
    pub const fn is_clean(&self) -> bool {
        self.table.is_none() && self.name.is_none() && self.phone.is_none()
    }

    /// The first violation in form order, for callers that surface a single
    /// message.
    pub fn first(&self) -> Option<CheckoutError> {
        self.table.or(self.name).or(self.phone)
    }
}

// =============================================================================
// Checkout Draft
// =============================================================================

/// The not-yet-submitted checkout form, exactly as typed.
///
/// ## Lifecycle
/// Created empty when checkout begins; edited field by field; discarded on
/// cancel or consumed by a successful submission. Raw text stays raw; a
/// failing field never erases what the shopper entered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutDraft {
    /// Table number field, as typed.
    pub table: String,

    /// Customer name field, as typed.
    pub name: String,

    /// Phone number field, as typed.
    pub phone: String,
}

impl CheckoutDraft {
    /// Creates an empty draft (all fields blank).
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores new text for one field.
    pub fn set_field(&mut self, field: CheckoutField, value: impl Into<String>) {
        let value = value.into();
        match field {
            CheckoutField::Table => self.table = value,
            CheckoutField::Name => self.name = value,
            CheckoutField::Phone => self.phone = value,
        }
    }

    /// Re-evaluates a single field, as the form does on every edit.
    ///
    /// Returns `None` when the field currently passes.
    pub fn check_field(&self, field: CheckoutField, range: TableRange) -> Option<CheckoutError> {
        match field {
            CheckoutField::Table => validate_table(&self.table, range).err(),
            CheckoutField::Name => validate_name(&self.name).err(),
            CheckoutField::Phone => validate_phone(&self.phone).err(),
        }
    }

    /// Validates the whole draft.
    ///
    /// All three rules run regardless of earlier failures, so the caller
    /// gets the complete field → error mapping in one pass. On success the
    /// draft is distilled into a [`CustomerInfo`] with the table parsed and
    /// the text fields trimmed.
    pub fn validate(&self, range: TableRange) -> Result<CustomerInfo, FieldErrors> {
        let table = validate_table(&self.table, range);
        let name = validate_name(&self.name);
        let phone = validate_phone(&self.phone);

        match (table, name, phone) {
            (Ok(table), Ok(name), Ok(phone)) => Ok(CustomerInfo { table, name, phone }),
            (table, name, phone) => Err(FieldErrors {
                table: table.err(),
                name: name.err(),
                phone: phone.err(),
            }),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
