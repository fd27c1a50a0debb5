use async_trait::async_trait;

use crate::shared::errors::AppResult;

/// Key-value document storage for UI-owned state.
///
/// Payloads are JSON strings; (de)serialization stays with the caller so the
/// store itself has no knowledge of domain types.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Fetch the document stored under `key`, if any.
    async fn get(&self, key: &str) -> AppResult<Option<String>>;

    /// Store `payload` under `key`, replacing any previous document.
    async fn put(&self, key: &str, payload: &str) -> AppResult<()>;

    /// Remove the document under `key`. Removing a missing key is not an error.
    async fn remove(&self, key: &str) -> AppResult<()>;
}
