//! Chat Widget - The Send Flow
//!
//! The widget wires a surface's three hooks (message list, text input, send
//! trigger) to a chat backend. It holds no display state of its own.
//!
//! # Send Flow
//!
//! `submit_current_input()` does its visible work synchronously:
//! 1. read and trim the input; bail out if nothing is left
//! 2. append the user message to the transcript
//! 3. clear the input
//!
//! and then spawns one task for the network round trip, returning a
//! [`SendTask`] the caller may await or drop. The task appends the assistant
//! reply on success and reports to the [`DiagnosticSink`] on failure.
//!
//! Sends are independent. Nothing serializes them, so replies land in whatever
//! order the backend answers.

use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::task::{Context, Poll};

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::backend::{ChatBackend, ChatRequest};
use crate::diagnostics::DiagnosticSink;
use crate::events::WidgetEvent;
use crate::input::InputField;
use crate::messages::{Message, MessageSink};

/// Identifies one send for log and diagnostics correlation
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RequestId(pub u64);

impl RequestId {
    /// Allocate the next process-unique id
    pub fn next() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "req_{}", self.0)
    }
}

/// How a send ended
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SendOutcome {
    /// The assistant reply was appended
    Replied,
    /// The failure was recorded; nothing was appended
    Failed,
}

/// Handle to one in-flight send
///
/// Await it to learn the outcome. Dropping it detaches the task; the request
/// keeps running and its reply still lands in the transcript.
#[derive(Debug)]
pub struct SendTask {
    id: RequestId,
    handle: JoinHandle<SendOutcome>,
}

impl SendTask {
    /// Which send this is
    #[must_use]
    pub fn id(&self) -> RequestId {
        self.id
    }

    /// Whether the round trip has completed
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

impl Future for SendTask {
    type Output = SendOutcome;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let id = self.id;
        Pin::new(&mut self.handle).poll(cx).map(|joined| match joined {
            Ok(outcome) => outcome,
            Err(e) => {
                tracing::error!(request = %id, error = %e, "Send task did not complete");
                SendOutcome::Failed
            }
        })
    }
}

/// The chat widget component
pub struct ChatWidget<B: ChatBackend> {
    /// Chat backend
    backend: Arc<B>,
    /// Message-list hook
    transcript: Arc<dyn MessageSink>,
    /// Text-input hook
    input: Arc<dyn InputField>,
    /// Where swallowed failures go
    diagnostics: Arc<dyn DiagnosticSink>,
}

impl<B: ChatBackend + 'static> ChatWidget<B> {
    /// Create a widget bound to a backend and the surface's hooks
    pub fn new(
        backend: B,
        transcript: Arc<dyn MessageSink>,
        input: Arc<dyn InputField>,
        diagnostics: Arc<dyn DiagnosticSink>,
    ) -> Self {
        Self {
            backend: Arc::new(backend),
            transcript,
            input,
            diagnostics,
        }
    }

    /// Send whatever is in the input field
    ///
    /// Returns `None` without touching anything when the trimmed input is
    /// empty; whitespace-only input stays in the field. Otherwise the user
    /// message is already in the transcript and the input already cleared
    /// when this returns.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn submit_current_input(&self) -> Option<SendTask> {
        let raw = self.input.value();
        let message = raw.trim();
        if message.is_empty() {
            return None;
        }
        let message = message.to_string();

        self.transcript.append(Message::user(message.clone()));
        self.input.set_value(String::new());

        let id = RequestId::next();
        tracing::debug!(
            request = %id,
            backend = self.backend.name(),
            chars = message.chars().count(),
            "Submitting chat message"
        );

        let backend = Arc::clone(&self.backend);
        let transcript = Arc::clone(&self.transcript);
        let diagnostics = Arc::clone(&self.diagnostics);

        let handle = tokio::spawn(async move {
            let request = ChatRequest::new(message);
            match backend.send(&request).await {
                Ok(reply) => {
                    tracing::debug!(request = %id, "Chat reply received");
                    transcript.append(Message::assistant(reply.text));
                    SendOutcome::Replied
                }
                Err(failure) => {
                    diagnostics.record_failure(id, &failure);
                    SendOutcome::Failed
                }
            }
        });

        Some(SendTask { id, handle })
    }

    /// React to one event from the surface
    ///
    /// Send clicks and Enter submit; every other key is ignored.
    pub fn handle_event(&self, event: &WidgetEvent) -> Option<SendTask> {
        if event.is_submit() {
            self.submit_current_input()
        } else {
            None
        }
    }

    /// Drive the widget from an event channel until the sender closes
    ///
    /// Returns how many sends were started. Send tasks are detached, so some
    /// may still be in flight when this returns.
    pub async fn run(&self, mut events: mpsc::Receiver<WidgetEvent>) -> usize {
        let mut started = 0;
        while let Some(event) = events.recv().await {
            if self.handle_event(&event).is_some() {
                started += 1;
            }
        }
        started
    }
}
