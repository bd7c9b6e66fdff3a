//! Single-slot transient message shown to the user.

use std::time::Duration;

pub const TICKET_NAME_REQUIRED: &str = "Ticket name is required!";
pub const SAVE_FAILED: &str = "Error saving ticket!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
    /// Monotonic instant the notice was raised at.
    pub raised_at: Duration,
}

impl Notice {
    pub fn new(kind: NoticeKind, text: impl Into<String>, raised_at: Duration) -> Self {
        Self {
            kind,
            text: text.into(),
            raised_at,
        }
    }

    pub fn error(text: impl Into<String>, raised_at: Duration) -> Self {
        Self::new(NoticeKind::Error, text, raised_at)
    }

    /// True once `timeout` has elapsed since the notice was raised.
    pub fn is_expired(&self, now: Duration, timeout: Duration) -> bool {
        now.saturating_sub(self.raised_at) >= timeout
    }
}
