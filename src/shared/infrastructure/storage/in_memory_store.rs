use async_trait::async_trait;
use dashmap::DashMap;
use tracing::debug;

use super::document_store::DocumentStore;
use crate::shared::errors::AppResult;

/// In-memory document store backed by a concurrent map.
///
/// Used by tests and as a session-scoped store when persistence across
/// restarts is not wanted.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    documents: DashMap<String, String>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self {
            documents: DashMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

#[async_trait]
impl DocumentStore for InMemoryStore {
    async fn get(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.documents.get(key).map(|entry| entry.value().clone()))
    }

    async fn put(&self, key: &str, payload: &str) -> AppResult<()> {
        debug!("memory store: put '{}' ({} bytes)", key, payload.len());
        self.documents.insert(key.to_string(), payload.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> AppResult<()> {
        self.documents.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_put_get_roundtrip() {
        let store = InMemoryStore::new();
        store.put("favorites:alice", r#"{"lists":[]}"#).await.unwrap();

        let loaded = store.get("favorites:alice").await.unwrap();
        assert_eq!(loaded.as_deref(), Some(r#"{"lists":[]}"#));
    }

    #[tokio::test]
    async fn test_get_missing_key_is_none() {
        let store = InMemoryStore::new();
        assert!(store.get("nope").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_put_replaces_previous_document() {
        let store = InMemoryStore::new();
        store.put("k", "v1").await.unwrap();
        store.put("k", "v2").await.unwrap();

        assert_eq!(store.get("k").await.unwrap().as_deref(), Some("v2"));
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn test_remove_is_idempotent() {
        let store = InMemoryStore::new();
        store.put("k", "v").await.unwrap();
        store.remove("k").await.unwrap();
        store.remove("k").await.unwrap();

        assert!(store.get("k").await.unwrap().is_none());
    }
}
