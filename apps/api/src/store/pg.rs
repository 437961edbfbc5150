//! Postgres-backed document store. Records live in a single JSONB
//! `documents` table keyed by `(collection, id)`; `update` is a JSONB
//! shallow merge and `query` orders by a field inside the document.

use async_trait::async_trait;
use serde_json::Value;
use sqlx::PgPool;
use sqlx::Row;

use super::{DocumentStore, StoreError};

pub struct PgDocumentStore {
    pool: PgPool,
}

impl PgDocumentStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Creates the documents table if it does not exist yet.
    pub async fn ensure_schema(&self) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS documents (
                collection TEXT NOT NULL,
                id TEXT NOT NULL,
                data JSONB NOT NULL,
                PRIMARY KEY (collection, id)
            )
            "#,
        )
        .execute(&self.pool)
        .await?;
        Ok(())
    }
}

#[async_trait]
impl DocumentStore for PgDocumentStore {
    async fn get(&self, collection: &str, id: &str) -> Result<Option<Value>, StoreError> {
        let row = sqlx::query(
            "SELECT data FROM documents WHERE collection = $1 AND id = $2",
        )
        .bind(collection)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| r.get::<Value, _>("data")))
    }

    async fn set(&self, collection: &str, id: &str, record: Value) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            INSERT INTO documents (collection, id, data)
            VALUES ($1, $2, $3)
            ON CONFLICT (collection, id) DO UPDATE SET data = EXCLUDED.data
            "#,
        )
        .bind(collection)
        .bind(id)
        .bind(record)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn update(&self, collection: &str, id: &str, partial: Value) -> Result<(), StoreError> {
        // `||` is a shallow merge: top-level fields of $3 win.
        let result = sqlx::query(
            "UPDATE documents SET data = data || $3 WHERE collection = $1 AND id = $2",
        )
        .bind(collection)
        .bind(id)
        .bind(partial)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::Missing {
                collection: collection.to_string(),
                id: id.to_string(),
            });
        }
        Ok(())
    }

    async fn query(&self, collection: &str, order_by: &str) -> Result<Vec<Value>, StoreError> {
        // JSONB ordering compares numbers numerically, which is what the
        // epoch-millis `createdAt` field relies on.
        let rows = sqlx::query(
            "SELECT data FROM documents WHERE collection = $1 ORDER BY data -> $2 ASC",
        )
        .bind(collection)
        .bind(order_by)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|r| r.get::<Value, _>("data")).collect())
    }
}
