//! # Session State
//!
//! One shopper's ordering session: the order flow behind a mutex, the
//! read-only catalog, the configuration, and the transient notice slot.
//!
//! ## Thread Safety
//! The engine itself assumes a single logical actor; every mutation is a
//! discrete user action that runs to completion before the next one. The
//! mutex here is what *makes* that true for whatever host embeds the
//! command layer: commands serialize on it, nothing else can interleave.
//!
//! If this kiosk ever becomes a multi-session server, the rule is one
//! `SessionState` per shopper; the flow/cart pair is never shared.

use std::sync::Mutex;

use cafe_catalog::Catalog;
use cafe_core::OrderFlow;

use crate::notify::Notifier;
use crate::state::KioskConfig;

/// Everything one shopper's visit needs, bundled for the command layer.
#[derive(Debug)]
pub struct SessionState {
    config: KioskConfig,
    catalog: Catalog,
    flow: Mutex<OrderFlow>,
    notices: Notifier,
}

impl SessionState {
    /// Creates a fresh session over a loaded catalog.
    pub fn new(config: KioskConfig, catalog: Catalog) -> Self {
        let flow = OrderFlow::new(config.flow_config());
        let notices = Notifier::new(config.notice_dismiss_ms);
        SessionState {
            config,
            catalog,
            flow: Mutex::new(flow),
            notices,
        }
    }

    /// The kiosk configuration (read-only after startup).
    pub fn config(&self) -> &KioskConfig {
        &self.config
    }

    /// The menu (read-only for the whole session).
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The transient notice slot.
    pub fn notices(&self) -> &Notifier {
        &self.notices
    }

    /// Executes a function with read access to the order flow.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let totals = session.with_flow(|flow| flow.totals());
    /// ```
    pub fn with_flow<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&OrderFlow) -> R,
    {
        let flow = self.flow.lock().expect("order flow mutex poisoned");
        f(&flow)
    }

    /// Executes a function with write access to the order flow.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// session.with_flow_mut(|flow| flow.open_cart());
    /// ```
    pub fn with_flow_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut OrderFlow) -> R,
    {
        let mut flow = self.flow.lock().expect("order flow mutex poisoned");
        f(&mut flow)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use cafe_core::FlowState;

    #[test]
    fn test_new_session_starts_browsing() {
        let session = SessionState::new(KioskConfig::default(), Catalog::empty());
        assert_eq!(session.with_flow(|f| f.state()), FlowState::Browsing);
        assert!(session.with_flow(|f| f.cart().is_empty()));
    }

    #[test]
    fn test_session_flow_uses_configured_limits() {
        let mut config = KioskConfig::default();
        config.max_cart_lines = 3;
        let session = SessionState::new(config, Catalog::empty());

        let limits = session.with_flow(|f| f.cart().limits());
        assert_eq!(limits.max_lines, 3);
    }
}
