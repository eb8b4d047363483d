//! Notification channel: success/error toasts shared by every screen.
//!
//! SYSTEM CONTEXT
//! ==============
//! Flows return `Feedback` values; components push them into the
//! `RwSignal<Notifications>` context and the `Toaster` renders the queue.

#[cfg(test)]
#[path = "notify_test.rs"]
mod notify_test;

use uuid::Uuid;

/// Maximum number of toasts kept on screen; older ones are dropped first.
pub const MAX_VISIBLE: usize = 4;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// A message to surface, before it is queued.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Feedback {
    pub kind: NoticeKind,
    pub text: String,
}

impl Feedback {
    pub fn success(text: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Success, text: text.into() }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Error, text: text.into() }
    }
}

/// A queued toast.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub id: Uuid,
    pub kind: NoticeKind,
    pub text: String,
}

/// Ordered toast queue, oldest first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Notifications {
    pub items: Vec<Notice>,
}

impl Notifications {
    /// Queue `feedback` and return the new notice's id.
    pub fn push(&mut self, feedback: Feedback) -> Uuid {
        let id = Uuid::new_v4();
        self.items.push(Notice { id, kind: feedback.kind, text: feedback.text });
        if self.items.len() > MAX_VISIBLE {
            let overflow = self.items.len() - MAX_VISIBLE;
            self.items.drain(..overflow);
        }
        id
    }

    pub fn success(&mut self, text: impl Into<String>) -> Uuid {
        self.push(Feedback::success(text))
    }

    pub fn error(&mut self, text: impl Into<String>) -> Uuid {
        self.push(Feedback::error(text))
    }

    pub fn dismiss(&mut self, id: Uuid) {
        self.items.retain(|n| n.id != id);
    }
}
