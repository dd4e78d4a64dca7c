use super::traits::Notifier;
use std::sync::{Mutex, PoisonError};
use std::time::Duration;
use tokio::time::Instant;

pub const DEFAULT_AUTO_HIDE: Duration = Duration::from_secs(6);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnackbarMessage {
    pub message: String,
    pub shown_at: Instant,
}

/// Single-slot error banner.
///
/// A new error replaces the visible one. The banner hides itself once
/// `auto_hide` has elapsed, or when [`SnackbarNotifier::dismiss`] is called.
pub struct SnackbarNotifier {
    auto_hide: Duration,
    current: Mutex<Option<SnackbarMessage>>,
}

impl SnackbarNotifier {
    pub fn new(auto_hide: Duration) -> Self {
        Self {
            auto_hide,
            current: Mutex::new(None),
        }
    }

    /// Message still on screen, if any.
    pub fn visible(&self) -> Option<String> {
        let mut slot = self.current.lock().unwrap_or_else(PoisonError::into_inner);
        let expired = slot
            .as_ref()
            .is_some_and(|shown| shown.shown_at.elapsed() >= self.auto_hide);
        if expired {
            *slot = None;
        }
        slot.as_ref().map(|shown| shown.message.clone())
    }

    pub fn dismiss(&self) {
        *self.current.lock().unwrap_or_else(PoisonError::into_inner) = None;
    }
}

impl Default for SnackbarNotifier {
    fn default() -> Self {
        Self::new(DEFAULT_AUTO_HIDE)
    }
}

impl Notifier for SnackbarNotifier {
    fn show_error(&self, message: &str) {
        tracing::info!(message, "showing error banner");
        *self.current.lock().unwrap_or_else(PoisonError::into_inner) = Some(SnackbarMessage {
            message: message.to_string(),
            shown_at: Instant::now(),
        });
    }
}
