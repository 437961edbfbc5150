//! Document store boundary — the key-value profile/chat store behind a
//! trait seam so Postgres and the in-memory demo store are interchangeable.
//!
//! Collections hold JSON records addressed by `(collection, id)`. Chat
//! messages live in an append-only sub-collection per conversation,
//! `chats/<conversationKey>/messages`, ordered by `createdAt`.

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

pub mod cache;
pub mod chat_log;
pub mod handlers;
pub mod memory;
pub mod pg;
pub mod profiles;
pub mod seed;

/// Collection holding freelancer profile records.
pub const FREELANCERS: &str = "freelancers";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("No record '{id}' in collection '{collection}'")]
    Missing { collection: String, id: String },

    #[error("Record serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// The document store seam. Carried in `AppState` as `Arc<dyn DocumentStore>`.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Fetches a record, `None` if absent.
    async fn get(&self, collection: &str, id: &str) -> Result<Option<Value>, StoreError>;

    /// Creates or replaces a record.
    async fn set(&self, collection: &str, id: &str, record: Value) -> Result<(), StoreError>;

    /// Shallow-merges `partial` into an existing record.
    /// Fails with [`StoreError::Missing`] if the record does not exist.
    async fn update(&self, collection: &str, id: &str, partial: Value) -> Result<(), StoreError>;

    /// Returns every record in a collection, ordered by the given top-level
    /// field (ascending). Numeric fields compare numerically.
    async fn query(&self, collection: &str, order_by: &str) -> Result<Vec<Value>, StoreError>;
}
