use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, VariantArray};
use time::OffsetDateTime;

#[derive(
    Display, VariantArray, AsRefStr, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash,
)]
#[strum(serialize_all = "camelCase")]
pub enum Field {
    FirstName,
    LastName,
    Email,
    Subject,
    Message,
}

impl Field {
    /// Maps a `ContactSubmission` struct member back to its form field.
    pub fn from_member(name: &str) -> Option<Self> {
        match name {
            "first_name" => Some(Self::FirstName),
            "last_name" => Some(Self::LastName),
            "email" => Some(Self::Email),
            "subject" => Some(Self::Subject),
            "message" => Some(Self::Message),
            _ => None,
        }
    }
}

/// Body of `POST /api/send-contact-email`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactPayload {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// Normalized reply of every contact endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Acknowledgment {
    pub success: bool,
    pub message: String,
}

impl Acknowledgment {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactMessage {
    pub id: String,
    pub to: String,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub received_at: u64,
}

impl ContactMessage {
    pub fn new(to: impl Into<String>, payload: ContactPayload) -> Self {
        Self {
            id: ulid::Ulid::new().to_string(),
            to: to.into(),
            name: payload.name,
            email: payload.email,
            subject: payload.subject,
            message: payload.message,
            received_at: OffsetDateTime::now_utc().unix_timestamp() as u64,
        }
    }

    pub fn received_at(&self) -> String {
        use time::format_description::well_known::Rfc3339;

        OffsetDateTime::from_unix_timestamp(self.received_at as i64)
            .ok()
            .and_then(|date| date.format(&Rfc3339).ok())
            .unwrap_or_else(|| self.received_at.to_string())
    }
}
