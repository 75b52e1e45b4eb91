//! # Cafe Kiosk Entry Point
//!
//! ## Application Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          Cafe Kiosk                                     │
//! │                                                                         │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │                  Single-page Frontend                            │  │
//! │  │  • Menu grid + category chips    • Cart panel                    │  │
//! │  │  • Checkout form                 • Printable receipt             │  │
//! │  └──────────────────────────────┬───────────────────────────────────┘  │
//! │                                 │  (bridge: calls commands::*)          │
//! │                                 ▼                                       │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │                 Rust Backend (this crate)                        │  │
//! │  │                                                                  │  │
//! │  │  main.rs ────► tokio entry, delegates to lib run()               │  │
//! │  │                                                                  │  │
//! │  │  lib.rs ─────► logging, config, catalog, session, walkthrough    │  │
//! │  │                                                                  │  │
//! │  │  commands/ ──► list_products, add_to_cart, submit_checkout, ...  │  │
//! │  │                                                                  │  │
//! │  │  state/ ─────► KioskConfig, SessionState                         │  │
//! │  │                                                                  │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                 │                                       │
//! │                                 ▼                                       │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │            data/products.json (static, read-only)                │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The binary runs a scripted walkthrough order (see `lib.rs`); a real
//! deployment embeds the command layer behind its frontend bridge instead.

#[tokio::main]
async fn main() {
    // The actual setup is in lib.rs for better testability
    cafe_kiosk::run().await;
}
