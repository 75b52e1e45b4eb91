//! # Transient Notices
//!
//! The auto-dismissing popup ("You can only add up to 5 units of each
//! item."). One notice is visible at a time; posting a new one replaces the
//! old; each notice dismisses itself after a fixed delay.
//!
//! ## Correctness boundary
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                  Notices vs. Business State                             │
//! │                                                                         │
//! │   add_to_cart ──► CartError ──┬──► Err(ApiError)   (authoritative)     │
//! │                               │                                         │
//! │                               └──► notices.post()  (best-effort)       │
//! │                                          │                              │
//! │                                     ~3s later                           │
//! │                                          ▼                              │
//! │                                    auto-dismiss                         │
//! │                                                                         │
//! │  The notice is a UI signal only. Whether it is dismissed early, late,   │
//! │  or never, no cart or order invariant depends on it.                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Timer races
//! Each post bumps a generation counter and the scheduled dismissal only
//! fires if its generation is still current; a slow timer from an old
//! notice can never clear a newer one.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use serde::Serialize;

/// A visible transient notice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Notice {
    pub message: String,
}

/// Interior state: the visible notice and the generation stamp that pairs
/// it with its dismissal timer.
#[derive(Debug, Default)]
struct NoticeSlot {
    current: Option<Notice>,
    generation: u64,
}

/// The one-notice-at-a-time holder with scheduled auto-dismiss.
#[derive(Debug)]
pub struct Notifier {
    slot: Arc<Mutex<NoticeSlot>>,
    dismiss_after: Duration,
}

impl Notifier {
    /// Creates a notifier whose notices auto-dismiss after `dismiss_ms`.
    pub fn new(dismiss_ms: u64) -> Self {
        Notifier {
            slot: Arc::new(Mutex::new(NoticeSlot::default())),
            dismiss_after: Duration::from_millis(dismiss_ms),
        }
    }

    /// Shows a notice, replacing any current one, and schedules its
    /// auto-dismissal.
    ///
    /// Scheduling needs a tokio runtime; without one the notice simply
    /// stays until replaced or dismissed by hand; it is a best-effort
    /// signal either way.
    pub fn post(&self, message: impl Into<String>) {
        let generation = {
            let mut slot = self.slot.lock().expect("notice mutex poisoned");
            slot.generation += 1;
            slot.current = Some(Notice {
                message: message.into(),
            });
            slot.generation
        };

        if let Ok(handle) = tokio::runtime::Handle::try_current() {
            let slot = Arc::clone(&self.slot);
            let delay = self.dismiss_after;
            handle.spawn(async move {
                tokio::time::sleep(delay).await;
                let mut slot = slot.lock().expect("notice mutex poisoned");
                if slot.generation == generation {
                    slot.current = None;
                }
            });
        }
    }

    /// The currently visible notice, if any.
    pub fn current(&self) -> Option<Notice> {
        self.slot.lock().expect("notice mutex poisoned").current.clone()
    }

    /// Dismisses the current notice immediately (the shopper tapped it
    /// away). Any pending timer for it becomes a no-op.
    pub fn dismiss(&self) {
        let mut slot = self.slot.lock().expect("notice mutex poisoned");
        slot.generation += 1;
        slot.current = None;
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_and_read_without_runtime() {
        // No runtime: the notice shows and simply never auto-dismisses.
        let notifier = Notifier::new(3000);
        notifier.post("limit reached");
        assert_eq!(notifier.current().unwrap().message, "limit reached");
    }

    #[test]
    fn test_new_post_replaces_old() {
        let notifier = Notifier::new(3000);
        notifier.post("first");
        notifier.post("second");
        assert_eq!(notifier.current().unwrap().message, "second");
    }

    #[test]
    fn test_manual_dismiss() {
        let notifier = Notifier::new(3000);
        notifier.post("limit reached");
        notifier.dismiss();
        assert!(notifier.current().is_none());
    }

    #[tokio::test]
    async fn test_auto_dismiss_after_delay() {
        let notifier = Notifier::new(20);
        notifier.post("limit reached");
        assert!(notifier.current().is_some());

        tokio::time::sleep(Duration::from_millis(80)).await;
        assert!(notifier.current().is_none());
    }

    #[tokio::test]
    async fn test_stale_timer_never_clears_newer_notice() {
        let notifier = Notifier::new(50);
        notifier.post("old");
        tokio::time::sleep(Duration::from_millis(30)).await;

        // reposted before the first timer fires
        notifier.post("new");
        tokio::time::sleep(Duration::from_millis(30)).await;

        // the first timer has fired by now; the second has not
        assert_eq!(notifier.current().unwrap().message, "new");
    }

    #[tokio::test]
    async fn test_dismiss_timing_is_irrelevant_to_state() {
        // Early manual dismissal plus a later timer firing is harmless.
        let notifier = Notifier::new(20);
        notifier.post("limit reached");
        notifier.dismiss();
        tokio::time::sleep(Duration::from_millis(60)).await;
        assert!(notifier.current().is_none());
    }
}
