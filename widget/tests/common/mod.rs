//! Shared helpers for integration tests
//!
//! Each test spins up its own axum router on an ephemeral port so the real
//! `HttpBackend` can be exercised without an external service.

#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use beru_widget::{ChatWidget, HttpBackend, InputBuffer, RecordingDiagnostics, Transcript};

/// Serve `router` on 127.0.0.1 and return its base URL
pub async fn spawn_backend(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    format!("http://{addr}")
}

/// Base URL of a port nothing is listening on
pub async fn unreachable_backend() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}

/// A widget wired to in-memory hooks
pub struct TestWidget {
    pub widget: ChatWidget<HttpBackend>,
    pub transcript: Arc<Transcript>,
    pub input: Arc<InputBuffer>,
    pub diagnostics: Arc<RecordingDiagnostics>,
}

pub fn widget_for(base_url: &str) -> TestWidget {
    let transcript = Arc::new(Transcript::new());
    let input = Arc::new(InputBuffer::new());
    let diagnostics = Arc::new(RecordingDiagnostics::new());

    let widget = ChatWidget::new(
        HttpBackend::new(base_url),
        transcript.clone(),
        input.clone(),
        diagnostics.clone(),
    );

    TestWidget {
        widget,
        transcript,
        input,
        diagnostics,
    }
}
