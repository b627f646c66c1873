//! Editor state: the document buffer plus session-level status.
//!
//! `EditorState` owns the single `Document`, the ephemeral status message
//! shown in the message bar and the quit confirmation countdown. Cursor and
//! scroll state live in `core-model::View`; this crate stays buffer-centric.
//!
//! Quit guard:
//! - While the document is dirty, each quit request consumes one
//!   confirmation. Quitting proceeds when the counter reaches zero.
//! - Any other keystroke restores the full count (the dispatcher calls
//!   `reset_quit_confirmations`).

use core_config::Config;
use std::time::Instant;

mod document;
mod encoding;
mod line_ending;

pub use document::{Document, DocumentError};
pub use encoding::TextEncoding;
pub use line_ending::{LineEnding, SplitText, split_lines};

/// Ephemeral message for the message bar.
#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub set_at: Instant,
}

/// Outcome of a quit request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuitCheck {
    Proceed,
    /// Unsaved changes; this many more requests are needed.
    Pending { remaining: u32 },
}

pub struct EditorState {
    pub document: Document,
    pub config: Config,
    status: Option<StatusMessage>,
    quit_confirmations_remaining: u32,
}

impl EditorState {
    pub fn new(document: Document) -> Self {
        Self::with_config(document, Config::default())
    }

    pub fn with_config(document: Document, config: Config) -> Self {
        let quit_confirmations_remaining = config.quit_confirmations;
        Self {
            document,
            config,
            status: None,
            quit_confirmations_remaining,
        }
    }

    pub fn set_status<S: Into<String>>(&mut self, msg: S) {
        self.set_status_at(msg, Instant::now());
    }

    pub fn set_status_at<S: Into<String>>(&mut self, msg: S, at: Instant) {
        let text = msg.into();
        tracing::trace!(target: "state.status", text = text.as_str(), "status_set");
        self.status = Some(StatusMessage { text, set_at: at });
    }

    pub fn clear_status(&mut self) {
        self.status = None;
    }

    pub fn status(&self) -> Option<&StatusMessage> {
        self.status.as_ref()
    }

    /// Message text if it was set less than the configured TTL before `now`.
    pub fn visible_status(&self, now: Instant) -> Option<&str> {
        self.status
            .as_ref()
            .filter(|m| now.saturating_duration_since(m.set_at) < self.config.status_message_ttl)
            .map(|m| m.text.as_str())
    }

    pub fn quit_confirmations_remaining(&self) -> u32 {
        self.quit_confirmations_remaining
    }

    pub fn reset_quit_confirmations(&mut self) {
        self.quit_confirmations_remaining = self.config.quit_confirmations;
    }

    /// Register a quit request against the confirmation counter.
    pub fn request_quit(&mut self) -> QuitCheck {
        if !self.document.is_dirty() {
            return QuitCheck::Proceed;
        }
        self.quit_confirmations_remaining = self.quit_confirmations_remaining.saturating_sub(1);
        if self.quit_confirmations_remaining == 0 {
            QuitCheck::Proceed
        } else {
            QuitCheck::Pending {
                remaining: self.quit_confirmations_remaining,
            }
        }
    }
}
