use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

use crate::modules::notifications::domain::entities::notification::NotificationsState;
use crate::shared::errors::AppResult;

/// Persistence boundary for the notification panel, keyed by session.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait NotificationsRepository: Send + Sync {
    async fn load(&self, session: &str) -> AppResult<Option<NotificationsState>>;

    async fn save(&self, session: &str, state: &NotificationsState) -> AppResult<()>;
}
