use std::cell::RefCell;
use std::rc::Rc;
use std::time::Instant;

use super::{Notification, Notifier};

#[derive(Debug, Clone)]
struct Shown {
    notification: Notification,
    expires_at: Instant,
}

/// Keeps every delivered notification until it is dismissed or expires.
///
/// Clones share the same list.
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    shown: Rc<RefCell<Vec<Shown>>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Notifications currently visible, oldest first.
    pub fn visible(&self) -> Vec<Notification> {
        self.shown
            .borrow()
            .iter()
            .map(|s| s.notification.clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.shown.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.shown.borrow().is_empty()
    }

    /// Dismisses the notification at `index`, returning it.
    pub fn dismiss(&self, index: usize) -> Option<Notification> {
        let mut shown = self.shown.borrow_mut();
        (index < shown.len()).then(|| shown.remove(index).notification)
    }

    /// Drops every notification whose lifetime ended at or before `now`.
    pub fn prune_expired(&self, now: Instant) -> usize {
        let mut shown = self.shown.borrow_mut();
        let before = shown.len();
        shown.retain(|s| s.expires_at > now);
        before - shown.len()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&mut self, notification: Notification) {
        let expires_at = notification.expires_at(Instant::now());
        self.shown.borrow_mut().push(Shown {
            notification,
            expires_at,
        });
    }
}
