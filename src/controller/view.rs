//! Renderable state of the feedback form
//!
//! The controller owns a [`FormView`] and mutates it in response to events;
//! the UI layer only reads it. Tests inspect it directly instead of poking at
//! real UI elements.

use std::time::Instant;

use crate::status::StatusMessage;
use crate::types::FormData;

/// Modal visibility state machine: `Closed <-> Open`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Visibility {
    #[default]
    Closed,
    Open,
}

impl Visibility {
    pub fn is_open(&self) -> bool {
        matches!(self, Visibility::Open)
    }
}

/// State of the submit control
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitButton {
    pub label: String,
    pub enabled: bool,
}

impl SubmitButton {
    pub fn idle(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            enabled: true,
        }
    }

    pub fn sending(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            enabled: false,
        }
    }
}

/// Everything the form renders
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormView {
    pub visibility: Visibility,
    /// Page scrolling is locked while the modal is open
    pub scroll_locked: bool,
    pub message: Option<StatusMessage>,
    pub submit_button: SubmitButton,
    pub fields: FormData,
}

impl FormView {
    pub fn new(submit_label: &str) -> Self {
        Self {
            visibility: Visibility::Closed,
            scroll_locked: false,
            message: None,
            submit_button: SubmitButton::idle(submit_label),
            fields: FormData::default(),
        }
    }

    pub fn is_open(&self) -> bool {
        self.visibility.is_open()
    }

    /// The message that is still visible at `now`
    pub fn visible_message(&self, now: Instant) -> Option<&StatusMessage> {
        self.message.as_ref().filter(|m| !m.is_expired_at(now))
    }
}
