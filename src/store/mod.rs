//! Seam to the remote document database.
//!
//! The catalog only ever reads: fetch a whole collection, or one document by
//! id. Anything that can answer those two calls can back the storefront.

mod memory;

pub use memory::InMemoryDocumentStore;

use async_trait::async_trait;
use serde_json::{Map, Value};
use thiserror::Error;

pub type StoreResult<T> = std::result::Result<T, StoreError>;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum StoreError {
    #[error("Document store unavailable: {0}")]
    Unavailable(String),
}

/// A raw record as returned by the store. The id is assigned by the store.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub id: String,
    pub fields: Map<String, Value>,
}

impl Document {
    pub fn new(id: impl Into<String>, fields: Map<String, Value>) -> Self {
        Self {
            id: id.into(),
            fields,
        }
    }

    /// Builds a document from a JSON value. Non-object values yield an empty field map.
    pub fn from_json(id: impl Into<String>, value: Value) -> Self {
        let fields = match value {
            Value::Object(map) => map,
            _ => Map::new(),
        };
        Self::new(id, fields)
    }

    pub fn get_str(&self, field: &str) -> Option<&str> {
        self.fields.get(field).and_then(Value::as_str)
    }

    /// Reads a numeric field; integers and floats are both accepted.
    pub fn get_f64(&self, field: &str) -> Option<f64> {
        self.fields.get(field).and_then(Value::as_f64)
    }
}

#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Fetch every document in a collection.
    async fn get_all(&self, collection: &str) -> StoreResult<Vec<Document>>;

    /// Fetch a single document. `Ok(None)` means the document does not exist.
    async fn get(&self, collection: &str, id: &str) -> StoreResult<Option<Document>>;
}
