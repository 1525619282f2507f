//! HTTP transport for the contact form, talking to a running folio server.

use async_trait::async_trait;
use folio_contact::{Acknowledgment, ContactPayload, Reply, Submitter};
use reqwest::Url;
use std::time::Duration;

/// Relative to the server base URL, so a path prefix such as `/portfolio` is kept.
pub const SEND_PATH: &str = "api/send-contact-email";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

#[derive(Clone)]
pub struct HttpSubmitter {
    http: reqwest::Client,
    endpoint: Url,
}

impl HttpSubmitter {
    pub fn new(base_url: &str) -> anyhow::Result<Self> {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    /// A request still pending after `timeout` fails, which releases the form.
    pub fn with_timeout(base_url: &str, timeout: Duration) -> anyhow::Result<Self> {
        let mut base = Url::parse(base_url)?;
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }

        let http = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            http,
            endpoint: base.join(SEND_PATH)?,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl Submitter for HttpSubmitter {
    async fn submit(&self, payload: &ContactPayload) -> folio_contact::Result<Reply> {
        let response = self
            .http
            .post(self.endpoint.clone())
            .json(payload)
            .send()
            .await
            .map_err(anyhow::Error::from)?;

        let status = response.status().as_u16();
        let acknowledgment = match response.json::<Acknowledgment>().await {
            Ok(ack) => Some(ack),
            Err(e) => {
                tracing::debug!(error = %e, status, "Ignoring undecodable reply body");
                None
            }
        };

        Ok(Reply {
            status,
            acknowledgment,
        })
    }
}
