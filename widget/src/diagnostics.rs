//! Diagnostics
//!
//! Failed sends are never shown to the user. They are handed to a
//! [`DiagnosticSink`] instead, which by default writes them to the log.

use parking_lot::Mutex;

use crate::error::RequestFailure;
use crate::widget::RequestId;

/// Developer-facing destination for swallowed request failures
pub trait DiagnosticSink: Send + Sync {
    /// Record that the send identified by `request` failed
    fn record_failure(&self, request: RequestId, failure: &RequestFailure);
}

/// Logs failures through `tracing` at warn level
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingDiagnostics;

impl DiagnosticSink for TracingDiagnostics {
    fn record_failure(&self, request: RequestId, failure: &RequestFailure) {
        tracing::warn!(
            request = %request,
            kind = failure.kind(),
            error = %failure,
            "Chat request failed"
        );
    }
}

/// A failure captured by [`RecordingDiagnostics`]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecordedFailure {
    /// Which send failed
    pub request: RequestId,
    /// [`RequestFailure::kind`] of the failure
    pub kind: &'static str,
    /// Rendered error message
    pub message: String,
}

/// Keeps every recorded failure in memory so callers can inspect them
#[derive(Debug, Default)]
pub struct RecordingDiagnostics {
    failures: Mutex<Vec<RecordedFailure>>,
}

impl RecordingDiagnostics {
    /// Create an empty recorder
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of recorded failures, oldest first
    #[must_use]
    pub fn failures(&self) -> Vec<RecordedFailure> {
        self.failures.lock().clone()
    }

    /// Number of recorded failures
    #[must_use]
    pub fn len(&self) -> usize {
        self.failures.lock().len()
    }

    /// Whether nothing has been recorded
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.failures.lock().is_empty()
    }
}

impl DiagnosticSink for RecordingDiagnostics {
    fn record_failure(&self, request: RequestId, failure: &RequestFailure) {
        tracing::debug!(request = %request, kind = failure.kind(), "Recording failure");
        self.failures.lock().push(RecordedFailure {
            request,
            kind: failure.kind(),
            message: failure.to_string(),
        });
    }
}
