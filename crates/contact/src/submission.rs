use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors};

use crate::{ContactPayload, Field};

/// Per-field validation messages, in form order.
pub type FieldErrors = BTreeMap<Field, String>;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ContactSubmission {
    #[validate(length(min = 1, message = "First name is required"))]
    pub first_name: String,
    #[validate(length(min = 1, message = "Last name is required"))]
    pub last_name: String,
    #[validate(
        length(min = 1, message = "Email is required"),
        email(message = "Please enter a valid email address")
    )]
    pub email: String,
    #[validate(length(min = 1, message = "Subject is required"))]
    pub subject: String,
    #[validate(length(min = 1, message = "Message is required"))]
    pub message: String,
}

impl ContactSubmission {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::FirstName => &self.first_name,
            Field::LastName => &self.last_name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::FirstName => &mut self.first_name,
            Field::LastName => &mut self.last_name,
            Field::Email => &mut self.email,
            Field::Subject => &mut self.subject,
            Field::Message => &mut self.message,
        };

        *slot = value.into();
    }

    pub fn field_errors(&self) -> FieldErrors {
        match self.validate() {
            Ok(()) => FieldErrors::new(),
            Err(errors) => to_field_errors(&errors),
        }
    }

    /// Validates every field and builds the relay-bound payload.
    pub fn into_payload(self) -> crate::Result<ContactPayload> {
        self.validate()?;

        Ok(ContactPayload {
            name: format!("{} {}", self.first_name, self.last_name)
                .trim()
                .to_owned(),
            email: self.email,
            subject: self.subject,
            message: self.message,
        })
    }
}

pub fn to_field_errors(errors: &ValidationErrors) -> FieldErrors {
    errors
        .field_errors()
        .into_iter()
        .filter_map(|(name, errors)| {
            let field = Field::from_member(name.as_ref())?;
            // A missing value reports "required" rather than its format error.
            let message = errors
                .iter()
                .find(|e| e.code == "length")
                .or_else(|| errors.first())
                .and_then(|e| e.message.as_ref())
                .map(|m| m.to_string())
                .unwrap_or_else(|| format!("{field} is invalid"));

            Some((field, message))
        })
        .collect()
}
