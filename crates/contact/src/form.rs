//! Client side of the contact pipeline: form state, validation and a single
//! guarded submission per form instance.

use std::sync::{
    Mutex, MutexGuard, PoisonError,
    atomic::{AtomicBool, Ordering},
};

use async_trait::async_trait;

use crate::{Acknowledgment, ContactPayload, ContactSubmission, Field, FieldErrors};

/// Transport used by [`ContactForm`] to reach the relay endpoint.
#[async_trait]
pub trait Submitter: Send + Sync {
    /// Issues exactly one request. `Err` means the call itself failed.
    async fn submit(&self, payload: &ContactPayload) -> crate::Result<Reply>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    pub status: u16,
    /// Parsed body, `None` when it could not be decoded.
    pub acknowledgment: Option<Acknowledgment>,
}

impl Reply {
    pub fn is_ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastVariant {
    Default,
    Destructive,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub title: &'static str,
    pub description: &'static str,
    pub variant: ToastVariant,
}

impl Toast {
    pub fn sent() -> Self {
        Self {
            title: "Message sent successfully!",
            description: "Thank you for your message! I will get back to you soon.",
            variant: ToastVariant::Default,
        }
    }

    pub fn failed() -> Self {
        Self {
            title: "Error",
            description: "Failed to send message. Please try again.",
            variant: ToastVariant::Destructive,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// A previous submission from this form is still pending.
    Busy,
    Invalid(FieldErrors),
    Sent(Toast),
    Failed(Toast),
}

pub struct ContactForm<S> {
    submitter: S,
    values: Mutex<ContactSubmission>,
    errors: Mutex<FieldErrors>,
    in_flight: AtomicBool,
}

impl<S: Submitter> ContactForm<S> {
    pub fn new(submitter: S) -> Self {
        Self {
            submitter,
            values: Mutex::default(),
            errors: Mutex::default(),
            in_flight: AtomicBool::new(false),
        }
    }

    pub fn set(&self, field: Field, value: impl Into<String>) {
        lock(&self.values).set(field, value);
    }

    pub fn fill(&self, submission: ContactSubmission) {
        *lock(&self.values) = submission;
    }

    pub fn values(&self) -> ContactSubmission {
        lock(&self.values).clone()
    }

    pub fn errors(&self) -> FieldErrors {
        lock(&self.errors).clone()
    }

    pub fn is_submitting(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    pub fn reset(&self) {
        *lock(&self.values) = ContactSubmission::default();
        lock(&self.errors).clear();
    }

    pub fn submitter(&self) -> &S {
        &self.submitter
    }

    pub async fn submit(&self) -> SubmitOutcome {
        let Some(_in_flight) = InFlight::acquire(&self.in_flight) else {
            tracing::debug!("contact form submission ignored, request already in flight");
            return SubmitOutcome::Busy;
        };

        let submission = self.values();
        let errors = submission.field_errors();
        *lock(&self.errors) = errors.clone();

        if !errors.is_empty() {
            return SubmitOutcome::Invalid(errors);
        }

        let payload = match submission.into_payload() {
            Ok(payload) => payload,
            Err(e) => {
                tracing::error!(error = %e, "contact form passed field checks but not payload checks");
                return SubmitOutcome::Failed(Toast::failed());
            }
        };

        match self.submitter.submit(&payload).await {
            Ok(reply) if reply.is_ok() => {
                tracing::info!(
                    status = reply.status,
                    acknowledgment = ?reply.acknowledgment,
                    "contact message sent"
                );
                self.reset();
                SubmitOutcome::Sent(Toast::sent())
            }
            Ok(reply) => {
                tracing::warn!(status = reply.status, "contact message rejected");
                SubmitOutcome::Failed(Toast::failed())
            }
            Err(e) => {
                tracing::warn!(error = %e, "contact message could not be sent");
                SubmitOutcome::Failed(Toast::failed())
            }
        }
    }
}

/// Holds the in-flight slot until dropped.
struct InFlight<'a>(&'a AtomicBool);

impl<'a> InFlight<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self(flag))
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
