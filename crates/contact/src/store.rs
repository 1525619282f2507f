use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::{ContactMessage, Result};

/// Where received contact messages are kept for administrative review.
#[async_trait]
pub trait MessageStore: Send + Sync {
    async fn append(&self, message: ContactMessage) -> Result<()>;

    /// All messages in the order they were appended.
    async fn list(&self) -> Result<Vec<ContactMessage>>;
}

/// Process-local store, emptied on restart.
#[derive(Default)]
pub struct MemoryStore {
    messages: RwLock<Vec<ContactMessage>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MessageStore for MemoryStore {
    async fn append(&self, message: ContactMessage) -> Result<()> {
        let mut messages = self.messages.write().await;
        messages.push(message);
        tracing::debug!(total = messages.len(), "contact message stored");

        Ok(())
    }

    async fn list(&self) -> Result<Vec<ContactMessage>> {
        Ok(self.messages.read().await.clone())
    }
}
