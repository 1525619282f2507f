use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use folio_contact::Acknowledgment;
use thiserror::Error;

pub const PROCESS_FAILED_MESSAGE: &str = "Failed to process message";
pub const RETRIEVE_FAILED_MESSAGE: &str = "Failed to retrieve messages";

/// Failures surfaced to the caller. Relay delivery problems never end up here.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Malformed submission: {0}")]
    MalformedSubmission(#[from] JsonRejection),

    #[error("Could not record submission: {0}")]
    Record(#[source] folio_contact::Error),

    #[error("Could not retrieve messages: {0}")]
    Retrieve(#[source] folio_contact::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let message = match &self {
            AppError::MalformedSubmission(e) => {
                tracing::error!(error = %e, status = %e.status(), "Email processing error");
                PROCESS_FAILED_MESSAGE
            }
            AppError::Record(e) => {
                tracing::error!(error = %e, "Email processing error");
                PROCESS_FAILED_MESSAGE
            }
            AppError::Retrieve(e) => {
                tracing::error!(error = %e, "Message retrieval error");
                RETRIEVE_FAILED_MESSAGE
            }
        };

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(Acknowledgment::failure(message)),
        )
            .into_response()
    }
}
