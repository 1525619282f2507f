use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use folio_contact::{Acknowledgment, ContactMessage, ContactPayload};

use crate::{
    error::AppError,
    relay::{RelayError, SUBJECT_PREFIX},
    routes::AppState,
};

pub const RECEIVED_MESSAGE: &str =
    "Message received successfully! It has been logged for the site owner.";

/// POST /api/send-contact-email
///
/// Best-effort: a relay failure is logged and still acknowledged as success.
pub async fn send(
    State(app_state): State<AppState>,
    payload: Result<Json<ContactPayload>, JsonRejection>,
) -> Result<Json<Acknowledgment>, AppError> {
    let Json(payload) = payload?;
    let message = ContactMessage::new(app_state.relay.recipient(), payload);

    tracing::info!(
        id = %message.id,
        to = %message.to,
        from_name = %message.name,
        from_email = %message.email,
        subject = %format!("{SUBJECT_PREFIX}{}", message.subject),
        date = %message.received_at(),
        body = %message.message,
        "New contact message"
    );

    app_state
        .store
        .append(message.clone())
        .await
        .map_err(AppError::Record)?;

    match app_state.relay.deliver(&message).await {
        Ok(reply) => {
            tracing::info!(id = %message.id, %reply, "Email sent successfully via relay");

            return Ok(Json(Acknowledgment::success(format!(
                "Message sent successfully to {}! Check your inbox.",
                message.to
            ))));
        }
        Err(RelayError::Rejected { status, body }) => {
            tracing::error!(id = %message.id, %status, body = %body, "Relay rejected message");
        }
        Err(e) => {
            tracing::error!(id = %message.id, error = %e, "Relay service error");
        }
    }

    Ok(Json(Acknowledgment::success(RECEIVED_MESSAGE)))
}

/// GET /api/contact-messages
pub async fn list(
    State(app_state): State<AppState>,
) -> Result<Json<Vec<ContactMessage>>, AppError> {
    let messages = app_state.store.list().await.map_err(AppError::Retrieve)?;

    Ok(Json(messages))
}
