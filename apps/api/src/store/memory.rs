//! In-memory document store. Backs demo mode (no `DATABASE_URL`) and the
//! test suite. Durability is explicitly out of scope — everything is lost
//! on restart.

use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap};

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::RwLock;

use super::{DocumentStore, StoreError};

#[derive(Default)]
pub struct MemoryDocumentStore {
    collections: RwLock<HashMap<String, BTreeMap<String, Value>>>,
}

impl MemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DocumentStore for MemoryDocumentStore {
    async fn get(&self, collection: &str, id: &str) -> Result<Option<Value>, StoreError> {
        let collections = self.collections.read().await;
        Ok(collections
            .get(collection)
            .and_then(|records| records.get(id))
            .cloned())
    }

    async fn set(&self, collection: &str, id: &str, record: Value) -> Result<(), StoreError> {
        let mut collections = self.collections.write().await;
        collections
            .entry(collection.to_string())
            .or_default()
            .insert(id.to_string(), record);
        Ok(())
    }

    async fn update(&self, collection: &str, id: &str, partial: Value) -> Result<(), StoreError> {
        let mut collections = self.collections.write().await;
        let record = collections
            .get_mut(collection)
            .and_then(|records| records.get_mut(id))
            .ok_or_else(|| StoreError::Missing {
                collection: collection.to_string(),
                id: id.to_string(),
            })?;

        merge_fields(record, partial);
        Ok(())
    }

    async fn query(&self, collection: &str, order_by: &str) -> Result<Vec<Value>, StoreError> {
        let collections = self.collections.read().await;
        let mut records: Vec<Value> = collections
            .get(collection)
            .map(|records| records.values().cloned().collect())
            .unwrap_or_default();

        records.sort_by(|a, b| compare_fields(a.get(order_by), b.get(order_by)));
        Ok(records)
    }
}

/// Shallow merge: top-level fields of `partial` overwrite the record's.
fn merge_fields(record: &mut Value, partial: Value) {
    match (record, partial) {
        (Value::Object(existing), Value::Object(incoming)) => {
            for (key, value) in incoming {
                existing.insert(key, value);
            }
        }
        (record, partial) => *record = partial,
    }
}

fn compare_fields(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    match (a, b) {
        (Some(Value::Number(x)), Some(Value::Number(y))) => x
            .as_f64()
            .partial_cmp(&y.as_f64())
            .unwrap_or(Ordering::Equal),
        (Some(Value::String(x)), Some(Value::String(y))) => x.cmp(y),
        (Some(_), None) => Ordering::Greater,
        (None, Some(_)) => Ordering::Less,
        _ => Ordering::Equal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_get_returns_none_for_absent_record() {
        let store = MemoryDocumentStore::new();
        assert!(store.get("freelancers", "1").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_set_then_get_round_trips() {
        let store = MemoryDocumentStore::new();
        store
            .set("freelancers", "1", json!({"id": "1", "name": "Elena"}))
            .await
            .unwrap();

        let record = store.get("freelancers", "1").await.unwrap().unwrap();
        assert_eq!(record["name"], "Elena");
    }

    #[tokio::test]
    async fn test_update_merges_without_clobbering_other_fields() {
        let store = MemoryDocumentStore::new();
        store
            .set("freelancers", "1", json!({"id": "1", "name": "Elena", "rate": 85.0}))
            .await
            .unwrap();

        store
            .update("freelancers", "1", json!({"rate": 95.0}))
            .await
            .unwrap();

        let record = store.get("freelancers", "1").await.unwrap().unwrap();
        assert_eq!(record["rate"], 95.0);
        assert_eq!(record["name"], "Elena");
    }

    #[tokio::test]
    async fn test_update_missing_record_fails() {
        let store = MemoryDocumentStore::new();
        let result = store.update("freelancers", "nope", json!({"rate": 1.0})).await;
        assert!(matches!(result, Err(StoreError::Missing { .. })));
    }

    #[tokio::test]
    async fn test_query_orders_numerically() {
        let store = MemoryDocumentStore::new();
        // Insertion order deliberately scrambled; 2 > 10 lexicographically
        // but the order-by must compare numbers as numbers.
        store
            .set("m", "a", json!({"createdAt": 10, "text": "second"}))
            .await
            .unwrap();
        store
            .set("m", "b", json!({"createdAt": 2, "text": "first"}))
            .await
            .unwrap();
        store
            .set("m", "c", json!({"createdAt": 30, "text": "third"}))
            .await
            .unwrap();

        let records = store.query("m", "createdAt").await.unwrap();
        let texts: Vec<&str> = records
            .iter()
            .map(|r| r["text"].as_str().unwrap())
            .collect();
        assert_eq!(texts, vec!["first", "second", "third"]);
    }

    #[tokio::test]
    async fn test_query_unknown_collection_is_empty() {
        let store = MemoryDocumentStore::new();
        assert!(store.query("nothing", "createdAt").await.unwrap().is_empty());
    }
}
