//! Outbound email relay
//!
//! Delivers contact messages to the site owner through a third-party webhook
//! (Web3Forms-compatible). One attempt per message, bounded by the configured
//! timeout.

use folio_contact::ContactMessage;
use reqwest::{StatusCode, Url};
use serde::Serialize;

use crate::config::RelayConfig;

pub const SUBJECT_PREFIX: &str = "Contact Form: ";

#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    #[error("relay rejected message with status {status}: {body}")]
    Rejected { status: StatusCode, body: String },

    #[error("relay unreachable: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("relay response could not be decoded: {0}")]
    Decode(#[source] reqwest::Error),
}

/// Body expected by the webhook.
#[derive(Debug, Serialize)]
pub struct RelayRequest<'a> {
    pub access_key: &'a str,
    pub name: &'a str,
    pub email: &'a str,
    pub subject: String,
    pub message: String,
    pub to: &'a str,
}

impl<'a> RelayRequest<'a> {
    pub fn new(access_key: &'a str, recipient: &'a str, message: &'a ContactMessage) -> Self {
        Self {
            access_key,
            name: &message.name,
            email: &message.email,
            subject: format!("{SUBJECT_PREFIX}{}", message.subject),
            message: format!(
                "From: {} ({})\n\nSubject: {}\n\nMessage:\n{}",
                message.name, message.email, message.subject, message.message
            ),
            to: recipient,
        }
    }
}

#[derive(Clone)]
pub struct RelayClient {
    http: reqwest::Client,
    endpoint: Url,
    access_key: String,
    recipient: String,
}

impl RelayClient {
    pub fn new(config: &RelayConfig) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()?;

        if config.access_key.is_empty() {
            tracing::warn!(
                endpoint = %config.endpoint,
                "Relay access key not configured, deliveries will likely be rejected"
            );
        }

        Ok(Self {
            http,
            endpoint: Url::parse(&config.endpoint)?,
            access_key: config.access_key.clone(),
            recipient: config.recipient.clone(),
        })
    }

    pub fn recipient(&self) -> &str {
        &self.recipient
    }

    /// Sends one message and returns the webhook's decoded reply.
    pub async fn deliver(&self, message: &ContactMessage) -> Result<serde_json::Value, RelayError> {
        let request = RelayRequest::new(&self.access_key, &self.recipient, message);

        let response = self
            .http
            .post(self.endpoint.clone())
            .json(&request)
            .send()
            .await
            .map_err(RelayError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RelayError::Rejected { status, body });
        }

        response.json().await.map_err(RelayError::Decode)
    }
}
