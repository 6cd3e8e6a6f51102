//! Toast notifications
//!
//! The queue lives inside the chat session state so transitions can be
//! tested without a browser; `Toasts` only renders and expires it.

mod toasts;

pub use toasts::Toasts;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: u64,
    pub level: NotificationLevel,
    pub text: String,
}

#[derive(Debug, Clone, Default)]
pub struct Notifications {
    items: Vec<Notification>,
    next_id: u64,
}

impl Notifications {
    pub fn push(&mut self, level: NotificationLevel, text: impl Into<String>) -> u64 {
        self.next_id += 1;
        let notification = Notification {
            id: self.next_id,
            level,
            text: text.into(),
        };
        log::debug!("toast #{} {:?}: {}", notification.id, level, notification.text);
        self.items.push(notification);
        self.next_id
    }

    pub fn success(&mut self, text: impl Into<String>) -> u64 {
        self.push(NotificationLevel::Success, text)
    }

    pub fn warning(&mut self, text: impl Into<String>) -> u64 {
        self.push(NotificationLevel::Warning, text)
    }

    pub fn error(&mut self, text: impl Into<String>) -> u64 {
        self.push(NotificationLevel::Error, text)
    }

    /// Returns false when the toast was already gone.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.items.len();
        self.items.retain(|n| n.id != id);
        self.items.len() != before
    }

    pub fn items(&self) -> &[Notification] {
        &self.items
    }

    pub fn last(&self) -> Option<&Notification> {
        self.items.last()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
