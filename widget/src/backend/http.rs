//! HTTP Backend Implementation
//!
//! Talks to the Beru chat service over plain HTTP.
//!
//! # Chat API
//!
//! - `POST /chat` with `{"message": "..."}`, answered by `{"response": "..."}`
//!
//! The status code is not checked: a 4xx/5xx whose body still parses is
//! treated as a reply. No client timeout is set; a hung request waits until
//! the connection gives up.

use async_trait::async_trait;

use super::traits::{ChatBackend, ChatReply, ChatRequest};
use crate::config::WidgetConfig;
use crate::error::RequestFailure;

/// HTTP chat backend client
#[derive(Clone, Debug)]
pub struct HttpBackend {
    /// Base URL without a trailing slash
    base_url: String,
    /// HTTP client
    http_client: reqwest::Client,
}

impl HttpBackend {
    /// Create a backend for the given base URL
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        if base_url.ends_with('/') {
            base_url.pop();
        }

        Self {
            base_url,
            http_client: reqwest::Client::new(),
        }
    }

    /// Create from a loaded [`WidgetConfig`]
    #[must_use]
    pub fn from_config(config: &WidgetConfig) -> Self {
        Self::new(config.backend_url.clone())
    }

    /// Get the base URL
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get chat endpoint URL
    #[must_use]
    pub fn chat_url(&self) -> String {
        format!("{}/chat", self.base_url)
    }
}

impl Default for HttpBackend {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_BACKEND_URL)
    }
}

#[async_trait]
impl ChatBackend for HttpBackend {
    fn name(&self) -> &'static str {
        "HTTP"
    }

    async fn send(&self, request: &ChatRequest) -> Result<ChatReply, RequestFailure> {
        let url = self.chat_url();

        // `.json()` sets Content-Type: application/json
        let response = self.http_client.post(&url).json(request).send().await?;

        let status = response.status();
        if !status.is_success() {
            tracing::debug!(%url, %status, "Chat backend returned non-success status");
        }

        let body = response.bytes().await?;
        let data: serde_json::Value = serde_json::from_slice(&body)?;

        ChatReply::from_value(&data)
    }
}
