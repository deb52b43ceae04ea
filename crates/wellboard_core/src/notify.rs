//! Failure-notice boundary.
//!
//! The controller never renders toasts itself; when a screen falls back
//! to sample data, the owning session fires one notice through this
//! injected collaborator and moves on.

use log::warn;

/// One standardized fallback notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailureNotice {
    /// Slug of the screen that fell back.
    pub screen_slug: String,
    /// Screen-specific wording, e.g. "Failed to load media, showing
    /// sample data".
    pub message: String,
}

/// Fire-and-forget notification sink.
pub trait FailureNotifier: Send + Sync {
    fn notify(&self, notice: &FailureNotice);
}

/// Default notifier routing notices through the logging stack.
#[derive(Debug, Default)]
pub struct LogNotifier;

impl FailureNotifier for LogNotifier {
    fn notify(&self, notice: &FailureNotice) {
        warn!(
            "event=fetch_fallback module=core status=degraded screen={} message={}",
            notice.screen_slug, notice.message
        );
    }
}
