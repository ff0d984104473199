//! User-facing notifications.
//!
//! The resolver announces theme changes through a [`Notifier`]. Delivery is
//! fire-and-forget; how a notification is shown, dismissed and expired is up
//! to the implementation.
//!
//! - [`RecordingNotifier`]: keeps notifications in memory with expiry and dismissal
//! - [`ConsoleNotifier`]: prints a styled line to the terminal
//! - [`MessageTemplates`]: renders the theme-change messages

mod console;
mod message;
mod recording;

pub use console::ConsoleNotifier;
pub use message::{MessageTemplates, DEFAULT_AUTO_CHANGE_MESSAGE, DEFAULT_USER_TOGGLE_MESSAGE};
pub use recording::RecordingNotifier;

use std::time::{Duration, Instant};

/// How long a notification stays visible unless dismissed.
pub const DEFAULT_TTL: Duration = Duration::from_secs(5);

/// Severity of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotificationKind {
    Info,
    Success,
    Warning,
    Error,
}

impl NotificationKind {
    /// Alert class suffix used by the stylesheet (`alert-success`, ...).
    pub fn as_str(self) -> &'static str {
        match self {
            NotificationKind::Info => "info",
            NotificationKind::Success => "success",
            NotificationKind::Warning => "warning",
            NotificationKind::Error => "danger",
        }
    }
}

/// A dismissible, auto-expiring message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
    pub ttl: Duration,
}

impl Notification {
    pub fn new(message: impl Into<String>, kind: NotificationKind) -> Self {
        Self {
            message: message.into(),
            kind,
            ttl: DEFAULT_TTL,
        }
    }

    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    pub fn expires_at(&self, shown_at: Instant) -> Instant {
        shown_at + self.ttl
    }
}

/// Displays notifications.
pub trait Notifier {
    fn notify(&mut self, notification: Notification);
}

impl<N: Notifier + ?Sized> Notifier for Box<N> {
    fn notify(&mut self, notification: Notification) {
        (**self).notify(notification)
    }
}
