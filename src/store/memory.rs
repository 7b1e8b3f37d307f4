use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::RwLock;
use tracing::{debug, instrument};

use super::{Document, DocumentStore, StoreError, StoreResult};

/// In-process document store used by the demo binary and tests.
///
/// Collections keep insertion order. Failures and latency can be injected to
/// simulate an unreachable backend.
#[derive(Debug, Default)]
pub struct InMemoryDocumentStore {
    collections: RwLock<HashMap<String, Vec<Document>>>,
    failing: AtomicBool,
    latency: Option<Duration>,
}

impl InMemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Delay every read by `latency`.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    /// Insert or replace a document.
    pub async fn insert(&self, collection: &str, id: impl Into<String>, value: Value) {
        let doc = Document::from_json(id, value);
        let mut collections = self.collections.write().await;
        let docs = collections.entry(collection.to_string()).or_default();
        match docs.iter_mut().find(|existing| existing.id == doc.id) {
            Some(existing) => *existing = doc,
            None => docs.push(doc),
        }
    }

    /// While set, every read returns [`StoreError::Unavailable`].
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    async fn before_read(&self, collection: &str) -> StoreResult<()> {
        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }
        if self.failing.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable(format!(
                "simulated failure reading {collection}"
            )));
        }
        Ok(())
    }
}

#[async_trait]
impl DocumentStore for InMemoryDocumentStore {
    #[instrument(skip(self))]
    async fn get_all(&self, collection: &str) -> StoreResult<Vec<Document>> {
        self.before_read(collection).await?;
        let collections = self.collections.read().await;
        let docs = collections.get(collection).cloned().unwrap_or_default();
        debug!(count = docs.len(), "Read collection");
        Ok(docs)
    }

    #[instrument(skip(self))]
    async fn get(&self, collection: &str, id: &str) -> StoreResult<Option<Document>> {
        self.before_read(collection).await?;
        let collections = self.collections.read().await;
        let doc = collections
            .get(collection)
            .and_then(|docs| docs.iter().find(|doc| doc.id == id))
            .cloned();
        debug!(found = doc.is_some(), "Read document");
        Ok(doc)
    }
}
