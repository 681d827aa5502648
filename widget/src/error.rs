//! Request Failure
//!
//! One error type for everything that can go wrong with a single send. The
//! widget handles every variant the same way; the variants exist so the
//! diagnostics record says what actually happened.

use thiserror::Error;

/// Why a send produced no assistant reply
#[derive(Debug, Error)]
pub enum RequestFailure {
    /// Connecting, sending, or reading the body failed
    #[error("request to chat backend failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The body was not JSON
    #[error("chat backend reply was not valid JSON: {0}")]
    Decode(#[from] serde_json::Error),

    /// The body was JSON but cannot carry a reply at all
    #[error("chat backend reply was malformed: {0}")]
    MalformedReply(String),

    /// A non-HTTP backend reported a failure
    #[error("chat backend error: {0}")]
    Backend(String),
}

impl RequestFailure {
    /// Short stable label for structured logging
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Transport(_) => "transport",
            Self::Decode(_) => "decode",
            Self::MalformedReply(_) => "malformed_reply",
            Self::Backend(_) => "backend",
        }
    }
}
