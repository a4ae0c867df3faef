//! Status message shown under the form
//!
//! A message auto-hides after a fixed delay. The delay is tracked as a
//! deadline on the message itself, so replacing a message also replaces its
//! pending hide.

use std::time::{Duration, Instant};

/// Severity of a status message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Success,
    Error,
}

/// A status message and the instant it stops being visible
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    /// The text to display
    pub text: String,
    /// The severity level of the message
    pub level: MessageLevel,
    /// When the message was shown
    pub shown_at: Instant,
    /// How long it stays visible
    pub timeout: Duration,
}

impl StatusMessage {
    pub fn new(text: impl Into<String>, level: MessageLevel, shown_at: Instant, timeout: Duration) -> Self {
        Self {
            text: text.into(),
            level,
            shown_at,
            timeout,
        }
    }

    /// The instant after which the message is hidden
    pub fn deadline(&self) -> Instant {
        self.shown_at + self.timeout
    }

    pub fn is_expired_at(&self, now: Instant) -> bool {
        now >= self.deadline()
    }
}
