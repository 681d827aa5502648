//! Chat Backend Traits
//!
//! Wire types and the trait every backend implements.
//!
//! # Reply Interpretation
//!
//! The backend is expected to answer `{"response": "<string>"}`, but no schema
//! is enforced. [`ChatReply::from_value`] reads the `response` field the way a
//! loosely typed client would:
//!
//! - a string is used as-is
//! - a missing or `null` field yields empty text
//! - numbers and bools print as plain text, arrays join their items with `,`
//!   and objects render as `[object Object]`, matching DOM `textContent`
//! - a top-level array, number, string or bool has no fields, so empty text
//! - a top-level `null` cannot be read at all and is a failure

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::RequestFailure;

/// Outgoing request body, built fresh for every send
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    /// The trimmed user text
    pub message: String,
}

impl ChatRequest {
    /// Create a request for the given message text
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// The part of a backend reply the widget consumes
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatReply {
    /// Text for the assistant transcript entry
    pub text: String,
}

impl ChatReply {
    /// Create a reply with the given text
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Extract the reply from a parsed JSON body
    ///
    /// # Errors
    ///
    /// Returns [`RequestFailure::MalformedReply`] if the body is JSON `null`.
    pub fn from_value(body: &Value) -> Result<Self, RequestFailure> {
        let text = match body {
            Value::Null => {
                return Err(RequestFailure::MalformedReply(
                    "reply body is null".to_string(),
                ))
            }
            Value::Object(fields) => match fields.get("response") {
                None | Some(Value::Null) => String::new(),
                Some(Value::String(text)) => text.clone(),
                Some(other) => display_text(other),
            },
            Value::Array(_) | Value::Bool(_) | Value::Number(_) | Value::String(_) => String::new(),
        };

        Ok(Self { text })
    }
}

/// Render a JSON value the way assigning it to `textContent` would
fn display_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(text) => text.clone(),
        Value::Bool(flag) => flag.to_string(),
        Value::Number(number) => match number.as_f64() {
            Some(n) if number.is_f64() && n.fract() == 0.0 && n.abs() < 1e21 => {
                format!("{n:.0}")
            }
            _ => number.to_string(),
        },
        Value::Array(items) => items
            .iter()
            .map(display_text)
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

/// Chat backend trait
///
/// Implement this to plug a different transport into the widget.
#[async_trait]
pub trait ChatBackend: Send + Sync {
    /// Backend name for logs (e.g., "HTTP")
    fn name(&self) -> &str;

    /// Send one message and wait for its reply
    ///
    /// Called once per submitted message, possibly many times concurrently.
    async fn send(&self, request: &ChatRequest) -> Result<ChatReply, RequestFailure>;
}
