use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

use crate::modules::favorites::domain::entities::favorite_list::FavoritesState;
use crate::shared::errors::AppResult;

/// Persistence boundary for the favorites state, keyed by session.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait FavoritesRepository: Send + Sync {
    async fn load(&self, session: &str) -> AppResult<Option<FavoritesState>>;

    async fn save(&self, session: &str, state: &FavoritesState) -> AppResult<()>;
}
