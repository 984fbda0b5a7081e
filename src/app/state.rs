//! UI state: busy flag, transient messages, and the displayed output.

use std::time::{Duration, Instant};

use crate::prompt::OperationKind;

/// How long a message stays visible before it is auto-cleared.
pub const MESSAGE_TTL: Duration = Duration::from_secs(4);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Info,
    Warning,
    Danger,
}

/// A transient notice with its own expiry deadline.
///
/// Showing a new message replaces the previous one wholesale, so a pending
/// auto-clear can never fire against a message it was not scheduled for.
#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub severity: Severity,
    expires_at: Instant,
}

impl Message {
    pub fn is_expired(&self, now: Instant) -> bool {
        now >= self.expires_at
    }
}

/// The single per-session UI state, owned by the orchestrator.
#[derive(Debug, Default)]
pub struct UiState {
    pub busy: bool,
    pub active_operation: Option<OperationKind>,
    message: Option<Message>,
    pub output_text: Option<String>,
}

impl UiState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks the state busy for `operation`, or idle when `busy` is false.
    pub fn set_busy(&mut self, busy: bool, operation: Option<OperationKind>) {
        self.busy = busy;
        self.active_operation = if busy { operation } else { None };
    }

    pub const fn is_idle(&self) -> bool {
        !self.busy
    }

    pub fn show_message(&mut self, text: impl Into<String>, severity: Severity) {
        self.show_message_at(text, severity, Instant::now());
    }

    fn show_message_at(&mut self, text: impl Into<String>, severity: Severity, now: Instant) {
        self.message = Some(Message {
            text: text.into(),
            severity,
            expires_at: now + MESSAGE_TTL,
        });
    }

    pub fn clear_message(&mut self) {
        self.message = None;
    }

    /// The current message, expired or not. Call [`Self::tick`] first to
    /// honor auto-clearing.
    pub const fn message(&self) -> Option<&Message> {
        self.message.as_ref()
    }

    /// Drops the message once its deadline has passed.
    pub fn tick(&mut self, now: Instant) {
        if self.message.as_ref().is_some_and(|m| m.is_expired(now)) {
            self.message = None;
        }
    }

    pub fn set_output(&mut self, text: &str) {
        self.output_text = Some(text.to_string());
    }

    pub fn clear_output(&mut self) {
        self.output_text = None;
    }
}
