//! # Receipt Formatter
//!
//! Renders a confirmed [`OrderSummary`] as fixed-width printable text.
//!
//! ## Responsibility Split
//! The engine hands over a plain data snapshot; everything visual is owned
//! here; layout, the currency symbol, and the letterhead fields (name,
//! address, phone, email), which are configuration constants, never
//! computed.
//!
//! ## Sample Output (width 40)
//! ```text
//! ========================================
//!                Your Cafe
//!             12 Harbour Lane
//!             Fort Kochi 682001
//!        Tel: +91 484 221 7788
//!        hello@yourcafe.example
//! ========================================
//! Order   7f9c2d1a
//! Placed  2026-08-08 12:41
//! Table   7
//! Name    Priya
//! Phone   +91 98765 43210
//! ----------------------------------------
//! Greek Salad            x2        ₹17.00
//! Tomato Soup            x1         ₹6.50
//! ----------------------------------------
//! Subtotal                         ₹23.50
//! Tax (5%)                          ₹1.18
//! TOTAL                            ₹24.68
//! ========================================
//!        Thank you! Visit again.
//! ========================================
//! ```

use cafe_core::types::OrderSummary;

use crate::state::KioskConfig;

/// The cafe identity block printed at the top of every receipt.
#[derive(Debug, Clone)]
pub struct Letterhead {
    pub name: String,
    pub address: Vec<String>,
    pub phone: String,
    pub email: String,
}

/// Renders order summaries to printable text.
#[derive(Debug, Clone)]
pub struct ReceiptFormatter {
    letterhead: Letterhead,
    currency_symbol: String,
    width: usize,
}

impl ReceiptFormatter {
    /// Builds a formatter from the kiosk configuration.
    pub fn from_config(config: &KioskConfig) -> Self {
        ReceiptFormatter {
            letterhead: Letterhead {
                name: config.cafe_name.clone(),
                address: config.address.clone(),
                phone: config.phone.clone(),
                email: config.email.clone(),
            },
            currency_symbol: config.currency_symbol.clone(),
            width: config.receipt_width,
        }
    }

    /// Renders a confirmed order.
    pub fn format(&self, order: &OrderSummary) -> String {
        let mut out = String::new();
        let rule = "=".repeat(self.width);
        let thin_rule = "-".repeat(self.width);

        // Letterhead
        out.push_str(&rule);
        out.push('\n');
        out.push_str(&self.center(&self.letterhead.name));
        for line in &self.letterhead.address {
            out.push_str(&self.center(line));
        }
        out.push_str(&self.center(&format!("Tel: {}", self.letterhead.phone)));
        out.push_str(&self.center(&self.letterhead.email));
        out.push_str(&rule);
        out.push('\n');

        // Order and customer block
        out.push_str(&format!("Order   {}\n", short_id(&order.id)));
        out.push_str(&format!(
            "Placed  {}\n",
            order.placed_at.format("%Y-%m-%d %H:%M")
        ));
        out.push_str(&format!("Table   {}\n", order.customer.table));
        out.push_str(&format!("Name    {}\n", order.customer.name));
        out.push_str(&format!("Phone   {}\n", order.customer.phone));
        out.push_str(&thin_rule);
        out.push('\n');

        // Line items
        for line in &order.lines {
            let qty = format!("x{}", line.quantity);
            let amount = self.money(line.line_total_cents);
            out.push_str(&self.item_row(&line.name, &qty, &amount));
        }
        out.push_str(&thin_rule);
        out.push('\n');

        // Totals
        out.push_str(&self.total_row("Subtotal", order.subtotal_cents));
        out.push_str(&self.total_row(&format!("Tax ({})", rate_label(order.tax_rate_bps)), order.tax_cents));
        out.push_str(&self.total_row("TOTAL", order.total_cents));

        // Footer
        out.push_str(&rule);
        out.push('\n');
        out.push_str(&self.center("Thank you! Visit again."));
        out.push_str(&rule);
        out.push('\n');

        out
    }

    fn money(&self, cents: i64) -> String {
        format!(
            "{}{}.{:02}",
            self.currency_symbol,
            (cents / 100).abs(),
            (cents % 100).abs()
        )
    }

    /// Centers a line within the paper width (by character count).
    fn center(&self, text: &str) -> String {
        let len = text.chars().count();
        let pad = self.width.saturating_sub(len) / 2;
        format!("{}{}\n", " ".repeat(pad), text)
    }

    /// `name ... xN ... amount`, with the name truncated to fit.
    fn item_row(&self, name: &str, qty: &str, amount: &str) -> String {
        // amount right-aligned in 10, quantity right-aligned in 4, the rest
        // belongs to the name
        let name_width = self.width.saturating_sub(14);
        let name: String = name.chars().take(name_width).collect();
        let pad = name_width.saturating_sub(name.chars().count());
        format!(
            "{}{}{:>4}{}\n",
            name,
            " ".repeat(pad),
            qty,
            right_pad_amount(amount, 10)
        )
    }

    /// `label ... amount` over the full width.
    fn total_row(&self, label: &str, cents: i64) -> String {
        let amount = self.money(cents);
        let label_width = self.width.saturating_sub(10);
        let label: String = label.chars().take(label_width).collect();
        let pad = label_width.saturating_sub(label.chars().count());
        format!(
            "{}{}{}\n",
            label,
            " ".repeat(pad),
            right_pad_amount(&amount, 10)
        )
    }
}

/// Right-aligns by character count; `{:>width$}` pads by bytes, which
/// misaligns multi-byte currency symbols like ₹.
fn right_pad_amount(amount: &str, width: usize) -> String {
    let len = amount.chars().count();
    format!("{}{}", " ".repeat(width.saturating_sub(len)), amount)
}

/// First UUID segment; plenty for matching a paper receipt to a log line.
fn short_id(id: &str) -> &str {
    id.split('-').next().unwrap_or(id)
}

/// "5%" for whole percentages, "8.25%" otherwise.
fn rate_label(bps: u32) -> String {
    if bps % 100 == 0 {
        format!("{}%", bps / 100)
    } else {
        format!("{}.{:02}%", bps / 100, bps % 100)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use cafe_core::types::{CustomerInfo, OrderLine};
    use chrono::{TimeZone, Utc};

    fn sample_order() -> OrderSummary {
        OrderSummary {
            id: "7f9c2d1a-3c44-4d2a-9b6e-0e8f1a2b3c4d".to_string(),
            placed_at: Utc.with_ymd_and_hms(2026, 8, 8, 12, 41, 0).unwrap(),
            customer: CustomerInfo {
                table: 7,
                name: "Priya".to_string(),
                phone: "+91 98765 43210".to_string(),
            },
            lines: vec![
                OrderLine {
                    product_id: 2,
                    name: "Greek Salad".to_string(),
                    unit_price_cents: 850,
                    quantity: 2,
                    line_total_cents: 1700,
                },
                OrderLine {
                    product_id: 3,
                    name: "Tomato Soup".to_string(),
                    unit_price_cents: 650,
                    quantity: 1,
                    line_total_cents: 650,
                },
            ],
            subtotal_cents: 2350,
            tax_rate_bps: 500,
            tax_cents: 118,
            total_cents: 2468,
        }
    }

    fn formatter() -> ReceiptFormatter {
        ReceiptFormatter::from_config(&KioskConfig::default())
    }

    #[test]
    fn test_receipt_carries_letterhead_and_customer() {
        let receipt = formatter().format(&sample_order());

        assert!(receipt.contains("Your Cafe"));
        assert!(receipt.contains("12 Harbour Lane"));
        assert!(receipt.contains("Tel: +91 484 221 7788"));
        assert!(receipt.contains("Table   7"));
        assert!(receipt.contains("Name    Priya"));
        assert!(receipt.contains("Order   7f9c2d1a"));
        assert!(receipt.contains("Placed  2026-08-08 12:41"));
    }

    #[test]
    fn test_receipt_lines_and_totals() {
        let receipt = formatter().format(&sample_order());

        assert!(receipt.contains("Greek Salad"));
        assert!(receipt.contains("x2"));
        assert!(receipt.contains("₹17.00"));
        assert!(receipt.contains("₹23.50")); // subtotal
        assert!(receipt.contains("Tax (5%)"));
        assert!(receipt.contains("₹1.18"));
        assert!(receipt.contains("₹24.68")); // total
    }

    #[test]
    fn test_every_line_fits_the_paper_width() {
        let config = KioskConfig::default();
        let receipt = formatter().format(&sample_order());

        for line in receipt.lines() {
            assert!(
                line.chars().count() <= config.receipt_width,
                "line too wide: {:?}",
                line
            );
        }
    }

    #[test]
    fn test_long_product_name_is_truncated() {
        let mut order = sample_order();
        order.lines[0].name = "Char-Grilled Paneer Skewers with Mint Chutney".to_string();

        let receipt = formatter().format(&order);
        for line in receipt.lines() {
            assert!(line.chars().count() <= 40);
        }
    }

    #[test]
    fn test_rate_label() {
        assert_eq!(rate_label(500), "5%");
        assert_eq!(rate_label(1000), "10%");
        assert_eq!(rate_label(825), "8.25%");
    }
}
