//! # State Module
//!
//! Session state for the kiosk.
//!
//! ## Why Separate Types?
//! Configuration, catalog, and the mutable order flow have different access
//! patterns, so they stay distinct types inside one [`SessionState`]:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       SessionState                                      │
//! │                                                                         │
//! │  ┌──────────────┐  ┌──────────────┐  ┌──────────────────────────────┐  │
//! │  │ KioskConfig  │  │   Catalog    │  │  Mutex<OrderFlow> + Notifier │  │
//! │  │              │  │              │  │                              │  │
//! │  │  letterhead  │  │  products()  │  │  the one mutable thing:      │  │
//! │  │  tax rate    │  │  get(id)     │  │  cart, draft, flow state,    │  │
//! │  │  caps/range  │  │  categories  │  │  current notice              │  │
//! │  └──────────────┘  └──────────────┘  └──────────────────────────────┘  │
//! │                                                                         │
//! │  THREAD SAFETY:                                                        │
//! │  • KioskConfig: read-only after startup                                │
//! │  • Catalog: read-only for the whole session                            │
//! │  • OrderFlow: exclusive access via the mutex; commands serialize       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod session;

pub use config::KioskConfig;
pub use session::SessionState;
