//! # Configuration State
//!
//! Stores kiosk configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`CAFE_*`)
//! 2. Defaults (this file)
//!
//! ## Thread Safety
//! Configuration is read-only after initialization, so no mutex needed.

use serde::{Deserialize, Serialize};

use cafe_core::flow::FlowConfig;
use cafe_core::{
    CartLimits, TableRange, TaxRate, DEFAULT_MAX_CART_LINES, DEFAULT_MAX_LINE_QUANTITY,
    DEFAULT_TABLE_MAX, DEFAULT_TABLE_MIN, DEFAULT_TAX_RATE_BPS,
};

/// Kiosk configuration.
///
/// ## Fields
/// Everything here is either letterhead (printed on receipts, never
/// computed) or a tuning knob handed to the engine at session start.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KioskConfig {
    /// Cafe name (receipt header and the page title).
    pub cafe_name: String,

    /// Cafe address lines (for receipts).
    pub address: Vec<String>,

    /// Cafe contact phone (for receipts).
    pub phone: String,

    /// Cafe contact email (for receipts).
    pub email: String,

    /// Currency symbol (for display; the engine itself is symbol-free).
    pub currency_symbol: String,

    /// Tax rate in basis points, e.g. 500 = 5%.
    pub tax_rate_bps: u32,

    /// Maximum distinct lines in a cart.
    pub max_cart_lines: usize,

    /// Maximum quantity per line.
    pub max_line_quantity: u32,

    /// Lowest valid table number.
    pub table_min: u32,

    /// Highest valid table number.
    pub table_max: u32,

    /// How long a transient notice stays up before auto-dismissing, in ms.
    pub notice_dismiss_ms: u64,

    /// Receipt paper width in characters (typically 32, 40, or 48).
    pub receipt_width: usize,

    /// Path of the static product file.
    pub products_path: String,
}

impl Default for KioskConfig {
    /// Returns default configuration suitable for development.
    ///
    /// ## Default Values
    /// - Cafe: "Your Cafe", priced in ₹
    /// - Tax: 5%
    /// - Caps: 5 distinct items, 5 units each
    /// - Tables: 1-12
    /// - Notice: auto-dismisses after 3 seconds
    fn default() -> Self {
        KioskConfig {
            cafe_name: "Your Cafe".to_string(),
            address: vec!["12 Harbour Lane".to_string(), "Fort Kochi 682001".to_string()],
            phone: "+91 484 221 7788".to_string(),
            email: "hello@yourcafe.example".to_string(),
            currency_symbol: "₹".to_string(),
            tax_rate_bps: DEFAULT_TAX_RATE_BPS,
            max_cart_lines: DEFAULT_MAX_CART_LINES,
            max_line_quantity: DEFAULT_MAX_LINE_QUANTITY,
            table_min: DEFAULT_TABLE_MIN,
            table_max: DEFAULT_TABLE_MAX,
            notice_dismiss_ms: 3000,
            receipt_width: 40,
            products_path: "apps/kiosk/data/products.json".to_string(),
        }
    }
}

impl KioskConfig {
    /// Creates a KioskConfig from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `CAFE_NAME`: Override cafe name
    /// - `CAFE_TAX_RATE`: Override tax rate as a percentage (e.g. "5")
    /// - `CAFE_PRODUCTS_PATH`: Override product file path
    /// - `CAFE_TABLE_MAX`: Override the highest table number
    pub fn from_env() -> Self {
        let mut config = KioskConfig::default();

        if let Ok(name) = std::env::var("CAFE_NAME") {
            config.cafe_name = name;
        }

        if let Ok(rate) = std::env::var("CAFE_TAX_RATE") {
            if let Ok(pct) = rate.parse::<f64>() {
                config.tax_rate_bps = (pct * 100.0).round() as u32;
            }
        }

        if let Ok(path) = std::env::var("CAFE_PRODUCTS_PATH") {
            config.products_path = path;
        }

        if let Ok(max) = std::env::var("CAFE_TABLE_MAX") {
            if let Ok(max) = max.parse::<u32>() {
                config.table_max = max;
            }
        }

        config
    }

    /// The tax rate as an engine type.
    pub fn tax_rate(&self) -> TaxRate {
        TaxRate::from_bps(self.tax_rate_bps)
    }

    /// The cart caps as an engine type.
    pub fn cart_limits(&self) -> CartLimits {
        CartLimits {
            max_lines: self.max_cart_lines,
            max_line_quantity: self.max_line_quantity,
        }
    }

    /// The valid table numbers as an engine type.
    pub fn table_range(&self) -> TableRange {
        TableRange {
            min: self.table_min,
            max: self.table_max,
        }
    }

    /// Everything a new ordering session needs.
    pub fn flow_config(&self) -> FlowConfig {
        FlowConfig {
            limits: self.cart_limits(),
            tax_rate: self.tax_rate(),
            table_range: self.table_range(),
        }
    }

    /// Formats a cent amount as a currency string.
    ///
    /// ## Example
    /// ```rust,ignore
    /// let config = KioskConfig::default();
    /// assert_eq!(config.format_currency(1234), "₹12.34");
    /// ```
    pub fn format_currency(&self, cents: i64) -> String {
        let whole = (cents / 100).abs();
        let frac = (cents % 100).abs();

        format!(
            "{}{}{}.{:02}",
            if cents < 0 { "-" } else { "" },
            self.currency_symbol,
            whole,
            frac
        )
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency_positive() {
        let config = KioskConfig::default();
        assert_eq!(config.format_currency(1234), "₹12.34");
        assert_eq!(config.format_currency(100), "₹1.00");
        assert_eq!(config.format_currency(1), "₹0.01");
        assert_eq!(config.format_currency(0), "₹0.00");
    }

    #[test]
    fn test_format_currency_negative() {
        let config = KioskConfig::default();
        assert_eq!(config.format_currency(-1234), "-₹12.34");
    }

    #[test]
    fn test_engine_views_of_config() {
        let config = KioskConfig::default();
        assert_eq!(config.tax_rate().bps(), 500);
        assert_eq!(config.cart_limits().max_lines, 5);
        assert_eq!(config.table_range().max, 12);

        let flow = config.flow_config();
        assert_eq!(flow.limits.max_line_quantity, 5);
    }
}
