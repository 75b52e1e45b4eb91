//! # Cafe Kiosk Library
//!
//! Session host for the cafe's single-page ordering interface.
//!
//! ## Module Organization
//! ```text
//! cafe_kiosk/
//! ├── lib.rs          ◄─── You are here (startup & the demo walkthrough)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── session.rs  ◄─── One shopper's session (flow behind a mutex)
//! │   └── config.rs   ◄─── Kiosk configuration
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   ├── catalog.rs  ◄─── Menu listing, category chips
//! │   ├── cart.rs     ◄─── Cart manipulation commands
//! │   └── flow.rs     ◄─── Checkout funnel commands
//! ├── notify.rs       ◄─── Transient auto-dismissing notices
//! ├── receipt.rs      ◄─── Printable receipt rendering
//! └── error.rs        ◄─── API error type for commands
//! ```
//!
//! ## Embedding
//! The real frontend (a single-page web UI) calls the functions in
//! [`commands`] through whatever bridge the deployment uses; this crate
//! stays bridge-agnostic. The binary target runs a scripted walkthrough
//! order instead; one pass over every command plus a printed receipt, so
//! wiring problems surface without a frontend attached.

pub mod commands;
pub mod error;
pub mod notify;
pub mod receipt;
pub mod state;

use tracing::{info, Level};
use tracing_subscriber::EnvFilter;

use cafe_catalog::Catalog;
use cafe_core::checkout::CheckoutField;

use error::ApiError;
use receipt::ReceiptFormatter;
use state::{KioskConfig, SessionState};

/// Runs the kiosk: startup plus the scripted walkthrough order.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Kiosk Startup                                     │
/// │                                                                         │
/// │  1. Initialize Logging ───────────────────────────────────────────────► │
/// │     • tracing-subscriber with env filter                                │
/// │     • Default: INFO, can be overridden with RUST_LOG                    │
/// │                                                                         │
/// │  2. Load Configuration ───────────────────────────────────────────────► │
/// │     • Defaults overridable via CAFE_* environment variables             │
/// │                                                                         │
/// │  3. Load Catalog ─────────────────────────────────────────────────────► │
/// │     • products.json; a broken file degrades to an empty menu            │
/// │                                                                         │
/// │  4. Create Session State ─────────────────────────────────────────────► │
/// │     • One OrderFlow behind a mutex + the notice slot                    │
/// │                                                                         │
/// │  5. Walk Through an Order ────────────────────────────────────────────► │
/// │     • browse → cart → checkout → confirm → print receipt                │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub async fn run() {
    // Initialize tracing (logging)
    init_tracing();

    info!("Starting Cafe Kiosk");

    let config = KioskConfig::from_env();
    let catalog = Catalog::load_or_empty(&config.products_path);
    info!(products = catalog.len(), "catalog ready");

    let session = SessionState::new(config, catalog);

    match walkthrough_order(&session) {
        Ok(receipt) => {
            info!("walkthrough order complete");
            println!("{}", receipt);
        }
        Err(err) => {
            tracing::error!(code = ?err.code, message = %err.message, "walkthrough order failed");
        }
    }
}

/// Drives one complete order through the command layer and renders its
/// receipt. This is the wiring smoke run behind the binary target.
fn walkthrough_order(session: &SessionState) -> Result<String, ApiError> {
    let chips = commands::catalog::list_categories(session);
    info!(categories = ?chips.categories, "menu categories");

    let menu = commands::catalog::list_products(session, None);
    if menu.is_empty() {
        info!("menu is empty; nothing to order");
        return Ok(String::from("(empty menu, no receipt)"));
    }

    // Two of the first item, one of the second (when there is one)
    let first = menu[0].id;
    commands::cart::add_to_cart(session, first)?;
    commands::cart::change_quantity(session, first, 1)?;
    if let Some(second) = menu.get(1) {
        commands::cart::add_to_cart(session, second.id)?;
    }

    commands::flow::open_cart(session);
    commands::flow::begin_checkout(session)?;
    commands::flow::update_checkout_field(session, CheckoutField::Table, "7")?;
    commands::flow::update_checkout_field(session, CheckoutField::Name, "Walk-through")?;
    commands::flow::update_checkout_field(session, CheckoutField::Phone, "000")?;

    let summary = commands::flow::submit_checkout(session)?;
    commands::flow::acknowledge_confirmation(session)?;

    let formatter = ReceiptFormatter::from_config(session.config());
    Ok(formatter.format(&summary))
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=cafe_kiosk=trace` - Trace for the kiosk only
/// - Default: INFO level, DEBUG for the cafe crates
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,cafe_kiosk=debug,cafe_core=debug,cafe_catalog=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_max_level(Level::TRACE)
        .init();
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_walkthrough_against_inline_catalog() {
        let catalog = Catalog::from_json_str(
            r#"{ "products": [
                { "id": 1, "name": "Greek Salad", "price": 10.0, "category": "Salads" },
                { "id": 2, "name": "Tomato Soup", "price": 15.0, "category": "Soups" }
            ] }"#,
        )
        .unwrap();
        let session = SessionState::new(KioskConfig::default(), catalog);

        let receipt = walkthrough_order(&session).unwrap();

        // 2 × 10.00 + 15.00 = 35.00, 5% tax = 1.75, total 36.75
        assert!(receipt.contains("₹35.00"));
        assert!(receipt.contains("₹1.75"));
        assert!(receipt.contains("₹36.75"));
    }

    #[test]
    fn test_walkthrough_with_empty_menu() {
        let session = SessionState::new(KioskConfig::default(), Catalog::empty());
        let receipt = walkthrough_order(&session).unwrap();
        assert!(receipt.contains("empty menu"));
    }
}
