//! # Kiosk Commands Module
//!
//! The API the single-page frontend invokes.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (exports)
//! ├── catalog.rs  ◄─── Menu listing, category chips
//! ├── cart.rs     ◄─── Cart manipulation
//! └── flow.rs     ◄─── Checkout funnel transitions
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Kiosk Command Flow                                   │
//! │                                                                         │
//! │  Single-page frontend                                                   │
//! │  ────────────────────                                                   │
//! │  const cart = await kiosk.addToCart(productId);                         │
//! │         │                                                               │
//! │         │ (host bridge: webview IPC, wasm call, or test harness)        │
//! │         ▼                                                               │
//! │  Rust Backend                                                           │
//! │  ────────────                                                           │
//! │  pub fn add_to_cart(                                                    │
//! │      session: &SessionState,  ◄── one shopper's state                  │
//! │      product_id: ProductId,   ◄── from the call                        │
//! │  ) -> Result<CartView, ApiError>                                        │
//! │         │                                                               │
//! │         │ (JSON serialization)                                          │
//! │         ▼                                                               │
//! │  Frontend receives: { lines: [...], totals: {...} }                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every command takes only `&SessionState`; the bridge that exposes these
//! to the page decides nothing; all rules live in cafe-core.

pub mod cart;
pub mod catalog;
pub mod flow;
