//! Transcript Messages
//!
//! The ordered, append-only list of chat entries a surface renders. Entries are
//! tagged by who produced them and are immutable once created.
//!
//! # Design Philosophy
//!
//! The widget never reads the transcript back. It only appends. Surfaces that
//! need to render hold on to a concrete [`Transcript`] and take snapshots; the
//! widget sees it through the narrower [`MessageSink`] trait.

use std::fmt;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

/// Who produced a transcript entry
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Typed locally by the user
    User,
    /// Parsed from a backend reply
    Assistant,
}

impl Role {
    /// Wire/log name of the role
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Assistant => "assistant",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single transcript entry
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    role: Role,
    text: String,
}

impl Message {
    /// Create a message with an explicit role
    pub fn new(role: Role, text: impl Into<String>) -> Self {
        Self {
            role,
            text: text.into(),
        }
    }

    /// Create a user message
    pub fn user(text: impl Into<String>) -> Self {
        Self::new(Role::User, text)
    }

    /// Create an assistant message
    pub fn assistant(text: impl Into<String>) -> Self {
        Self::new(Role::Assistant, text)
    }

    /// Who produced this message
    #[must_use]
    pub fn role(&self) -> Role {
        self.role
    }

    /// The message text
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Append-only destination for transcript entries
///
/// This is the "message list" hook a surface hands to the widget.
/// Implementations must tolerate appends from concurrently running send tasks.
pub trait MessageSink: Send + Sync {
    /// Append a message to the end of the transcript
    fn append(&self, message: Message);
}

/// In-memory transcript shared between the widget and the surface
///
/// Lives for the session only; nothing is persisted.
#[derive(Debug, Default)]
pub struct Transcript {
    messages: RwLock<Vec<Message>>,
}

impl Transcript {
    /// Create an empty transcript
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all messages, oldest first
    #[must_use]
    pub fn messages(&self) -> Vec<Message> {
        self.messages.read().clone()
    }

    /// Number of messages
    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.read().len()
    }

    /// Whether the transcript has no messages
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.read().is_empty()
    }

    /// The most recently appended message
    #[must_use]
    pub fn last(&self) -> Option<Message> {
        self.messages.read().last().cloned()
    }
}

impl MessageSink for Transcript {
    fn append(&self, message: Message) {
        self.messages.write().push(message);
    }
}
