use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use folio_contact::MessageStore;
use tower_http::{compression::CompressionLayer, trace::TraceLayer};

use crate::relay::RelayClient;

pub mod contact;
pub mod health;

#[derive(Clone)]
pub struct AppState {
    pub relay: RelayClient,
    pub store: Arc<dyn MessageStore>,
}

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/api/send-contact-email", post(contact::send))
        .route("/api/contact-messages", get(contact::list))
        .with_state(app_state)
        .layer(CompressionLayer::new().br(true).gzip(true))
        .layer(TraceLayer::new_for_http())
}
