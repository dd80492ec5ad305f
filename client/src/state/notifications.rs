//! Toast notifications shown in the corner of the screen.

#[cfg(test)]
#[path = "notifications_test.rs"]
mod notifications_test;

use std::time::Duration;

/// How long a toast stays up before it dismisses itself.
pub const TOAST_TTL: Duration = Duration::from_secs(5);

/// Oldest toasts are dropped beyond this many.
pub const MAX_VISIBLE: usize = 5;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub id: u64,
    pub kind: NotificationKind,
    pub message: String,
    pub description: Option<String>,
}

#[derive(Clone, Debug, Default)]
pub struct NotificationsState {
    pub items: Vec<Notification>,
    next_id: u64,
}

impl NotificationsState {
    /// Append a toast and return its id.
    pub fn push(&mut self, kind: NotificationKind, message: impl Into<String>, description: Option<String>) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(Notification { id, kind, message: message.into(), description });
        if self.items.len() > MAX_VISIBLE {
            let overflow = self.items.len() - MAX_VISIBLE;
            self.items.drain(..overflow);
        }
        id
    }

    pub fn success(&mut self, message: impl Into<String>) -> u64 {
        self.push(NotificationKind::Success, message, None)
    }

    pub fn error(&mut self, message: impl Into<String>) -> u64 {
        self.push(NotificationKind::Error, message, None)
    }

    /// Remove a toast. Unknown ids are ignored.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.items.len();
        self.items.retain(|n| n.id != id);
        self.items.len() != before
    }
}
