use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::modules::favorites::domain::entities::favorite_list::FavoritesState;
use crate::modules::favorites::domain::repositories::favorites_repository::FavoritesRepository;
use crate::shared::errors::AppResult;
use crate::shared::infrastructure::storage::DocumentStore;

/// Favorites persistence over the local document store.
///
/// One document per session under the `favorites:` namespace, mirroring the
/// browser-local-storage keying of the web client.
pub struct StoredFavoritesRepository {
    store: Arc<dyn DocumentStore>,
}

impl StoredFavoritesRepository {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    fn key(session: &str) -> String {
        format!("favorites:{}", session)
    }
}

#[async_trait]
impl FavoritesRepository for StoredFavoritesRepository {
    async fn load(&self, session: &str) -> AppResult<Option<FavoritesState>> {
        let Some(payload) = self.store.get(&Self::key(session)).await? else {
            return Ok(None);
        };
        let state: FavoritesState = serde_json::from_str(&payload)?;
        debug!(
            "loaded favorites for '{}' ({} lists)",
            session,
            state.lists.len()
        );
        Ok(Some(state))
    }

    async fn save(&self, session: &str, state: &FavoritesState) -> AppResult<()> {
        let payload = serde_json::to_string(state)?;
        self.store.put(&Self::key(session), &payload).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::favorites::domain::entities::favorite_list::FavoriteList;
    use crate::shared::infrastructure::storage::InMemoryStore;
    use uuid::Uuid;

    #[tokio::test]
    async fn test_load_missing_session_is_none() {
        let repo = StoredFavoritesRepository::new(Arc::new(InMemoryStore::new()));
        assert!(repo.load("nobody").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_save_load_roundtrip() {
        let repo = StoredFavoritesRepository::new(Arc::new(InMemoryStore::new()));

        let mut state = FavoritesState::default();
        let mut list = FavoriteList::new("Favorites".to_string());
        list.add_club(Uuid::new_v4());
        state.lists.push(list);

        repo.save("user-1", &state).await.unwrap();
        let loaded = repo.load("user-1").await.unwrap().unwrap();

        assert_eq!(loaded.lists.len(), 1);
        assert_eq!(loaded.lists[0].club_ids.len(), 1);
    }

    #[tokio::test]
    async fn test_corrupt_payload_is_an_error() {
        let store = Arc::new(InMemoryStore::new());
        store.put("favorites:user-1", "not json").await.unwrap();

        let repo = StoredFavoritesRepository::new(store);
        assert!(repo.load("user-1").await.is_err());
    }
}
