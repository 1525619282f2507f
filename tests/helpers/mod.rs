//! Shared setup for router and client integration tests.

#![allow(dead_code)]

use std::{
    io::Write,
    sync::{Arc, Mutex},
};

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode, header},
};
use folio::{AppState, config::RelayConfig, relay::RelayClient};
use folio_contact::{ContactMessage, ContactSubmission, MemoryStore, MessageStore};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;
use tracing_subscriber::fmt::MakeWriter;

pub const RECIPIENT: &str = "owner@example.com";
pub const ACCESS_KEY: &str = "test-access-key";

pub fn relay_config(endpoint: impl Into<String>) -> RelayConfig {
    RelayConfig {
        endpoint: endpoint.into(),
        access_key: ACCESS_KEY.to_owned(),
        recipient: RECIPIENT.to_owned(),
        timeout_secs: 1,
    }
}

pub fn setup_state(endpoint: impl Into<String>) -> anyhow::Result<(AppState, Arc<MemoryStore>)> {
    let store = Arc::new(MemoryStore::new());
    let state = AppState {
        relay: RelayClient::new(&relay_config(endpoint))?,
        store: store.clone(),
    };

    Ok((state, store))
}

pub fn setup_failing_state(endpoint: impl Into<String>) -> anyhow::Result<AppState> {
    Ok(AppState {
        relay: RelayClient::new(&relay_config(endpoint))?,
        store: Arc::new(UnavailableStore),
    })
}

/// Discard port on loopback, never bound by the tests, so connecting is refused.
pub const UNREACHABLE_BASE_URL: &str = "http://127.0.0.1:9";
pub const UNREACHABLE_ENDPOINT: &str = "http://127.0.0.1:9/submit";

pub fn jane() -> ContactSubmission {
    ContactSubmission {
        first_name: "Jane".to_owned(),
        last_name: "Doe".to_owned(),
        email: "jane@x.com".to_owned(),
        subject: "Hi".to_owned(),
        message: "Hello there".to_owned(),
    }
}

pub fn jane_payload() -> Value {
    json!({
        "name": "Jane Doe",
        "email": "jane@x.com",
        "subject": "Hi",
        "message": "Hello there",
    })
}

pub async fn send(router: &Router, body: impl Into<Body>) -> anyhow::Result<(StatusCode, Value)> {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/send-contact-email")
        .header(header::CONTENT_TYPE, "application/json")
        .body(body.into())?;

    call(router, request).await
}

pub async fn list(router: &Router) -> anyhow::Result<(StatusCode, Value)> {
    let request = Request::builder()
        .method(Method::GET)
        .uri("/api/contact-messages")
        .body(Body::empty())?;

    call(router, request).await
}

async fn call(router: &Router, request: Request<Body>) -> anyhow::Result<(StatusCode, Value)> {
    let response = router.clone().oneshot(request).await?;
    let status = response.status();
    let bytes = response.into_body().collect().await?.to_bytes();

    Ok((status, serde_json::from_slice(&bytes)?))
}

/// Serves the router on an ephemeral port and returns its base URL.
pub async fn spawn_app(state: AppState) -> anyhow::Result<String> {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;

    tokio::spawn(async move { axum::serve(listener, folio::router(state)).await });

    Ok(format!("http://{addr}"))
}

/// Store whose backend is always down.
pub struct UnavailableStore;

#[async_trait]
impl MessageStore for UnavailableStore {
    async fn append(&self, _message: ContactMessage) -> folio_contact::Result<()> {
        Err(folio_contact::Error::Store("backend offline".to_owned()))
    }

    async fn list(&self) -> folio_contact::Result<Vec<ContactMessage>> {
        Err(folio_contact::Error::Store("backend offline".to_owned()))
    }
}

/// Collects formatted tracing output emitted on the current thread.
#[derive(Clone, Default)]
pub struct LogCapture(Arc<Mutex<Vec<u8>>>);

impl LogCapture {
    /// Keep the guard alive for as long as events should be captured.
    pub fn install(&self) -> tracing::subscriber::DefaultGuard {
        let subscriber = tracing_subscriber::fmt()
            .with_writer(self.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::DEBUG)
            .finish();

        tracing::subscriber::set_default(subscriber)
    }

    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }

    /// The formatted line of the first event containing `text`.
    pub fn line_with(&self, text: &str) -> Option<String> {
        self.contents()
            .lines()
            .find(|line| line.contains(text))
            .map(str::to_owned)
    }
}

impl Write for LogCapture {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for LogCapture {
    type Writer = Self;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}
