//! Chat Backend Integration
//!
//! The widget talks to its backend through the [`ChatBackend`] trait so tests
//! and alternative transports can stand in for the real HTTP service.
//!
//! # Available Backends
//!
//! - **HTTP**: `POST {base_url}/chat` with a JSON body (default)
//!
//! # Usage
//!
//! ```ignore
//! use beru_widget::backend::{ChatBackend, ChatRequest, HttpBackend};
//!
//! let backend = HttpBackend::new("http://127.0.0.1:8000");
//! let reply = backend.send(&ChatRequest::new("Hello!")).await?;
//! println!("{}", reply.text);
//! ```

mod http;
mod traits;

pub use http::HttpBackend;
pub use traits::{ChatBackend, ChatReply, ChatRequest};
