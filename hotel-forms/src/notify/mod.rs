//! Transient notifications ("toasts")
//!
//! The validator reports success through a [`Notifier`] it is handed at
//! construction. [`ToastBoard`] keeps toasts until their duration elapses;
//! [`TracingNotifier`] just logs them.

use std::time::{Duration, Instant};

use parking_lot::Mutex;

/// How long a toast stays on screen unless configured otherwise
pub const DEFAULT_TOAST_DURATION: Duration = Duration::from_millis(3000);

/// Shows a short-lived message to the visitor
///
/// Fire and forget: there is no return value and no failure mode.
#[cfg_attr(test, mockall::automock)]
pub trait Notifier: Send + Sync {
    /// Show `message` for `duration`
    fn show(&self, message: &str, duration: Duration);
}

/// A toast on the board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    /// Text shown to the visitor
    pub message: String,
    /// When the toast removes itself
    pub expires_at: Instant,
}

/// Keeps toasts until they expire
///
/// # Examples
///
/// ```rust
/// use std::time::{Duration, Instant};
/// use hotel_forms::notify::{Notifier, ToastBoard};
///
/// let board = ToastBoard::new();
/// board.show("Вашето съобщение е изпратено успешно!", Duration::from_millis(3000));
///
/// assert_eq!(board.visible().len(), 1);
/// assert!(board.visible_at(Instant::now() + Duration::from_secs(4)).is_empty());
/// ```
#[derive(Debug, Default)]
pub struct ToastBoard {
    toasts: Mutex<Vec<Toast>>,
}

impl ToastBoard {
    /// Create an empty board
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages still on screen now
    #[must_use]
    pub fn visible(&self) -> Vec<String> {
        self.visible_at(Instant::now())
    }

    /// Messages still on screen at `now`; expired toasts are removed
    #[must_use]
    pub fn visible_at(&self, now: Instant) -> Vec<String> {
        let mut toasts = self.toasts.lock();
        toasts.retain(|toast| toast.expires_at > now);
        toasts.iter().map(|toast| toast.message.clone()).collect()
    }

    /// Every toast shown so far that has not been pruned, expired or not
    #[must_use]
    pub fn history(&self) -> Vec<Toast> {
        self.toasts.lock().clone()
    }
}

impl Notifier for ToastBoard {
    fn show(&self, message: &str, duration: Duration) {
        self.toasts.lock().push(Toast {
            message: message.to_string(),
            expires_at: Instant::now() + duration,
        });
    }
}

/// Writes each toast as an `info` event
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn show(&self, message: &str, duration: Duration) {
        tracing::info!(
            duration_ms = u64::try_from(duration.as_millis()).unwrap_or(u64::MAX),
            "{message}"
        );
    }
}
