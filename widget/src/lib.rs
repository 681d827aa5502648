//! Beru Widget - Headless Chat Widget Core
//!
//! This crate provides the chat widget logic for Beru, completely independent
//! of any UI framework. A surface (the TUI, a test harness, anything else)
//! supplies three hooks and the widget does the rest.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                         UI Surface                            │
//! │   message list        text input          send trigger       │
//! │  (MessageSink)       (InputField)         (WidgetEvent)      │
//! └───────┬───────────────────┬──────────────────────┬───────────┘
//!         │ append            │ value / set_value    │ events
//! ┌───────┴───────────────────┴──────────────────────┴───────────┐
//! │                         ChatWidget                            │
//! │   submit_current_input() ──spawn──▶ SendTask (per message)    │
//! │                                        │                      │
//! │                                        ▼                      │
//! │                  ChatBackend ──POST /chat──▶ backend          │
//! │                                        │                      │
//! │                      failure ──▶ DiagnosticSink               │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Quick Start
//!
//! ```ignore
//! use std::sync::Arc;
//! use beru_widget::{
//!     load_config, ChatWidget, HttpBackend, InputBuffer, Transcript, TracingDiagnostics,
//! };
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = load_config()?;
//!     let transcript = Arc::new(Transcript::new());
//!     let input = Arc::new(InputBuffer::new());
//!
//!     let widget = ChatWidget::new(
//!         HttpBackend::from_config(&config),
//!         transcript.clone(),
//!         input.clone(),
//!         Arc::new(TracingDiagnostics),
//!     );
//!
//!     input.set_value("hello".to_string());
//!     if let Some(task) = widget.submit_current_input() {
//!         task.await;
//!     }
//!
//!     for message in transcript.messages() {
//!         println!("{}: {}", message.role(), message.text());
//!     }
//!     Ok(())
//! }
//! ```
//!
//! # Module Overview
//!
//! - [`widget`]: The `ChatWidget` component and its `SendTask` handles
//! - [`messages`]: Transcript entries and the append-only transcript sink
//! - [`input`]: The input-value accessor and its in-memory buffer
//! - [`events`]: Send-trigger events from the surface
//! - [`backend`]: The chat backend seam and the HTTP implementation
//! - [`diagnostics`]: Where swallowed request failures are recorded
//! - [`error`]: Request failure type
//! - [`config`]: Layered configuration (defaults, TOML file, env, CLI)
//!
//! # No TUI Dependencies
//!
//! This crate has **zero** dependencies on ratatui, crossterm, or any other
//! UI framework.

#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod backend;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod events;
pub mod input;
pub mod messages;
pub mod widget;

// Re-exports for convenience
pub use backend::{ChatBackend, ChatReply, ChatRequest, HttpBackend};
pub use config::{
    default_config_path, load_config, load_config_from_path, ConfigError, ConfigOverrides,
    ConfigSource, WidgetConfig, WidgetToml, BACKEND_URL_ENV, DEFAULT_BACKEND_URL,
};
pub use diagnostics::{DiagnosticSink, RecordedFailure, RecordingDiagnostics, TracingDiagnostics};
pub use error::RequestFailure;
pub use events::{Key, WidgetEvent};
pub use input::{InputBuffer, InputField};
pub use messages::{Message, MessageSink, Role, Transcript};
pub use widget::{ChatWidget, RequestId, SendOutcome, SendTask};
