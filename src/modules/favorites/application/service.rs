use std::sync::Arc;

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::modules::favorites::domain::entities::favorite_list::{FavoriteList, FavoritesState};
use crate::modules::favorites::domain::repositories::favorites_repository::FavoritesRepository;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::Validator;
use crate::{log_debug, log_info};

/// Favorites and custom lists for one session.
///
/// State lives in memory behind defined action methods and is written back
/// through the injected repository after every mutation; there is no ambient
/// singleton. Create one instance per session via [`FavoritesService::load`].
pub struct FavoritesService {
    repo: Arc<dyn FavoritesRepository>,
    session: String,
    state: RwLock<FavoritesState>,
}

impl FavoritesService {
    /// Name of the implicit list used by the one-tap favorite toggle.
    pub const DEFAULT_LIST: &'static str = "Favorites";

    /// Create the session store, loading any previously persisted state.
    pub async fn load(repo: Arc<dyn FavoritesRepository>, session: impl Into<String>) -> AppResult<Self> {
        let session = session.into();
        Validator::validate_session_key(&session)?;

        let state = repo.load(&session).await?.unwrap_or_default();
        log_debug!(
            "FAVORITES: session '{}' loaded with {} lists",
            session,
            state.lists.len()
        );

        Ok(Self {
            repo,
            session,
            state: RwLock::new(state),
        })
    }

    pub async fn create_list(
        &self,
        name: String,
        description: Option<String>,
    ) -> AppResult<FavoriteList> {
        Validator::validate_list_name(&name)?;

        let mut state = self.state.write().await;
        if state.find_by_name(&name).is_some() {
            return Err(AppError::ValidationError(format!(
                "List with name '{}' already exists",
                name
            )));
        }

        let mut list = FavoriteList::new(name);
        if let Some(desc) = description {
            list = list.with_description(desc);
        }

        state.lists.push(list.clone());
        self.persist(&state).await?;

        log_info!("FAVORITES: created list '{}'", list.name);
        Ok(list)
    }

    pub async fn lists(&self) -> Vec<FavoriteList> {
        self.state.read().await.lists.clone()
    }

    pub async fn get_list(&self, id: &Uuid) -> Option<FavoriteList> {
        self.state.read().await.find_by_id(id).cloned()
    }

    pub async fn update_list(
        &self,
        id: &Uuid,
        name: Option<String>,
        description: Option<String>,
    ) -> AppResult<FavoriteList> {
        let mut state = self.state.write().await;

        if let Some(new_name) = &name {
            Validator::validate_list_name(new_name)?;
            if let Some(existing) = state.find_by_name(new_name) {
                if existing.id != *id {
                    return Err(AppError::ValidationError(format!(
                        "List with name '{}' already exists",
                        new_name
                    )));
                }
            }
        }

        let list = state
            .find_by_id_mut(id)
            .ok_or_else(|| AppError::NotFound(format!("List with ID {} not found", id)))?;

        if let Some(new_name) = name {
            list.rename(new_name);
        }
        if description.is_some() {
            list.update_description(description);
        }
        let updated = list.clone();

        self.persist(&state).await?;
        Ok(updated)
    }

    pub async fn delete_list(&self, id: &Uuid) -> AppResult<()> {
        let mut state = self.state.write().await;

        let original_len = state.lists.len();
        state.lists.retain(|list| list.id != *id);
        if state.lists.len() == original_len {
            return Err(AppError::NotFound(format!("List with ID {} not found", id)));
        }

        self.persist(&state).await?;
        log_info!("FAVORITES: deleted list {}", id);
        Ok(())
    }

    /// Add a club to a list. Returns false when it was already there.
    pub async fn add_club(&self, list_id: &Uuid, club_id: Uuid) -> AppResult<bool> {
        let mut state = self.state.write().await;
        let list = state
            .find_by_id_mut(list_id)
            .ok_or_else(|| AppError::NotFound(format!("List with ID {} not found", list_id)))?;

        let added = list.add_club(club_id);
        if added {
            self.persist(&state).await?;
        }
        Ok(added)
    }

    /// Remove a club from a list. Returns false when it was not there.
    pub async fn remove_club(&self, list_id: &Uuid, club_id: &Uuid) -> AppResult<bool> {
        let mut state = self.state.write().await;
        let list = state
            .find_by_id_mut(list_id)
            .ok_or_else(|| AppError::NotFound(format!("List with ID {} not found", list_id)))?;

        let removed = list.remove_club(club_id);
        if removed {
            self.persist(&state).await?;
        }
        Ok(removed)
    }

    /// One-tap toggle against the implicit default list, creating it on
    /// first use. Returns true when the club is now a favorite.
    pub async fn toggle_favorite(&self, club_id: Uuid) -> AppResult<bool> {
        let mut state = self.state.write().await;

        if state.find_by_name(Self::DEFAULT_LIST).is_none() {
            state
                .lists
                .push(FavoriteList::new(Self::DEFAULT_LIST.to_string()));
        }

        let list = state
            .lists
            .iter_mut()
            .find(|list| list.name == Self::DEFAULT_LIST)
            .expect("default list was just ensured");

        let now_favorite = if list.contains_club(&club_id) {
            list.remove_club(&club_id);
            false
        } else {
            list.add_club(club_id);
            true
        };

        self.persist(&state).await?;
        Ok(now_favorite)
    }

    pub async fn is_favorite(&self, club_id: &Uuid) -> bool {
        self.state
            .read()
            .await
            .find_by_name(Self::DEFAULT_LIST)
            .map(|list| list.contains_club(club_id))
            .unwrap_or(false)
    }

    async fn persist(&self, state: &FavoritesState) -> AppResult<()> {
        self.repo.save(&self.session, state).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::favorites::domain::repositories::favorites_repository::MockFavoritesRepository;
    use crate::modules::favorites::infrastructure::persistence::StoredFavoritesRepository;
    use crate::shared::infrastructure::storage::InMemoryStore;

    async fn service() -> FavoritesService {
        let store = Arc::new(InMemoryStore::new());
        let repo = Arc::new(StoredFavoritesRepository::new(store));
        FavoritesService::load(repo, "user-1").await.unwrap()
    }

    #[tokio::test]
    async fn test_create_list_rejects_duplicates() {
        let service = service().await;
        service.create_list("Weekend".to_string(), None).await.unwrap();

        let err = service.create_list("Weekend".to_string(), None).await;
        assert!(matches!(err, Err(AppError::ValidationError(_))));
    }

    #[tokio::test]
    async fn test_create_list_validates_name() {
        let service = service().await;
        assert!(service.create_list("".to_string(), None).await.is_err());
        assert!(service.create_list("bad/name".to_string(), None).await.is_err());
    }

    #[tokio::test]
    async fn test_add_and_remove_club() {
        let service = service().await;
        let list = service.create_list("Weekend".to_string(), None).await.unwrap();
        let club_id = Uuid::new_v4();

        assert!(service.add_club(&list.id, club_id).await.unwrap());
        assert!(!service.add_club(&list.id, club_id).await.unwrap());
        assert!(service.remove_club(&list.id, &club_id).await.unwrap());
        assert!(!service.remove_club(&list.id, &club_id).await.unwrap());
    }

    #[tokio::test]
    async fn test_add_club_to_missing_list_fails() {
        let service = service().await;
        let err = service.add_club(&Uuid::new_v4(), Uuid::new_v4()).await;
        assert!(matches!(err, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_toggle_favorite_creates_default_list() {
        let service = service().await;
        let club_id = Uuid::new_v4();

        assert!(service.toggle_favorite(club_id).await.unwrap());
        assert!(service.is_favorite(&club_id).await);
        assert!(!service.toggle_favorite(club_id).await.unwrap());
        assert!(!service.is_favorite(&club_id).await);

        let lists = service.lists().await;
        assert_eq!(lists.len(), 1);
        assert_eq!(lists[0].name, FavoritesService::DEFAULT_LIST);
    }

    #[tokio::test]
    async fn test_update_list_rename_and_conflict() {
        let service = service().await;
        let a = service.create_list("A".to_string(), None).await.unwrap();
        let _b = service.create_list("B".to_string(), None).await.unwrap();

        let renamed = service
            .update_list(&a.id, Some("A2".to_string()), Some("desc".to_string()))
            .await
            .unwrap();
        assert_eq!(renamed.name, "A2");
        assert_eq!(renamed.description.as_deref(), Some("desc"));

        let conflict = service.update_list(&a.id, Some("B".to_string()), None).await;
        assert!(conflict.is_err());
    }

    #[tokio::test]
    async fn test_delete_list() {
        let service = service().await;
        let list = service.create_list("Gone".to_string(), None).await.unwrap();

        service.delete_list(&list.id).await.unwrap();
        assert!(service.get_list(&list.id).await.is_none());
        assert!(service.delete_list(&list.id).await.is_err());
    }

    #[tokio::test]
    async fn test_state_survives_reload() {
        let store = Arc::new(InMemoryStore::new());
        let repo = Arc::new(StoredFavoritesRepository::new(store.clone()));

        let club_id = Uuid::new_v4();
        {
            let service = FavoritesService::load(repo.clone(), "user-1").await.unwrap();
            service.toggle_favorite(club_id).await.unwrap();
        }

        let reloaded = FavoritesService::load(repo, "user-1").await.unwrap();
        assert!(reloaded.is_favorite(&club_id).await);
    }

    #[tokio::test]
    async fn test_sessions_are_isolated() {
        let store = Arc::new(InMemoryStore::new());
        let repo = Arc::new(StoredFavoritesRepository::new(store));

        let alice = FavoritesService::load(repo.clone(), "alice").await.unwrap();
        let bob = FavoritesService::load(repo, "bob").await.unwrap();

        let club_id = Uuid::new_v4();
        alice.toggle_favorite(club_id).await.unwrap();

        assert!(alice.is_favorite(&club_id).await);
        assert!(!bob.is_favorite(&club_id).await);
    }

    #[tokio::test]
    async fn test_every_mutation_persists() {
        let mut mock = MockFavoritesRepository::new();
        mock.expect_load().returning(|_| Ok(None));
        // create + toggle = two saves
        mock.expect_save().times(2).returning(|_, _| Ok(()));

        let service = FavoritesService::load(Arc::new(mock), "user-1").await.unwrap();
        service.create_list("Weekend".to_string(), None).await.unwrap();
        service.toggle_favorite(Uuid::new_v4()).await.unwrap();
    }
}
