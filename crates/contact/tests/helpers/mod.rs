#![allow(dead_code)]

use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};

use async_trait::async_trait;
use folio_contact::{
    Acknowledgment, ContactMessage, ContactPayload, ContactSubmission, Reply, Submitter,
};
use tokio::sync::Notify;

pub fn jane() -> ContactSubmission {
    ContactSubmission {
        first_name: "Jane".to_owned(),
        last_name: "Doe".to_owned(),
        email: "jane@x.com".to_owned(),
        subject: "Hi".to_owned(),
        message: "Hello there".to_owned(),
    }
}

pub fn message(name: impl Into<String>) -> ContactMessage {
    let name = name.into();

    ContactMessage::new(
        "owner@folio.localhost",
        ContactPayload {
            email: format!("{name}@folio.localhost"),
            name,
            subject: "Hi".to_owned(),
            message: "Hello there".to_owned(),
        },
    )
}

pub enum Behavior {
    Status(u16),
    Fail,
}

/// Records every payload and answers according to `behavior`.
pub struct FakeSubmitter {
    behavior: Behavior,
    calls: AtomicUsize,
    payloads: Mutex<Vec<ContactPayload>>,
    gate: Option<Arc<Notify>>,
}

impl FakeSubmitter {
    pub fn new(behavior: Behavior) -> Self {
        Self {
            behavior,
            calls: AtomicUsize::new(0),
            payloads: Mutex::default(),
            gate: None,
        }
    }

    /// Blocks each call until `gate` is notified.
    pub fn gated(behavior: Behavior, gate: Arc<Notify>) -> Self {
        Self {
            gate: Some(gate),
            ..Self::new(behavior)
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn payloads(&self) -> Vec<ContactPayload> {
        self.payloads.lock().unwrap().clone()
    }
}

#[async_trait]
impl Submitter for FakeSubmitter {
    async fn submit(&self, payload: &ContactPayload) -> folio_contact::Result<Reply> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.payloads.lock().unwrap().push(payload.clone());

        if let Some(gate) = &self.gate {
            gate.notified().await;
        }

        match self.behavior {
            Behavior::Status(status) => Ok(Reply {
                status,
                acknowledgment: (status == 200).then(|| Acknowledgment::success("ok")),
            }),
            Behavior::Fail => Err(anyhow::anyhow!("connection refused").into()),
        }
    }
}
