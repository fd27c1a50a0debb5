use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::modules::notifications::domain::entities::notification::NotificationsState;
use crate::modules::notifications::domain::repositories::notifications_repository::NotificationsRepository;
use crate::shared::errors::AppResult;
use crate::shared::infrastructure::storage::DocumentStore;

/// Notification persistence over the local document store, one document per
/// session under the `notifications:` namespace.
pub struct StoredNotificationsRepository {
    store: Arc<dyn DocumentStore>,
}

impl StoredNotificationsRepository {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    fn key(session: &str) -> String {
        format!("notifications:{}", session)
    }
}

#[async_trait]
impl NotificationsRepository for StoredNotificationsRepository {
    async fn load(&self, session: &str) -> AppResult<Option<NotificationsState>> {
        let Some(payload) = self.store.get(&Self::key(session)).await? else {
            return Ok(None);
        };
        let state: NotificationsState = serde_json::from_str(&payload)?;
        debug!(
            "loaded notifications for '{}' ({} entries)",
            session,
            state.notifications.len()
        );
        Ok(Some(state))
    }

    async fn save(&self, session: &str, state: &NotificationsState) -> AppResult<()> {
        let payload = serde_json::to_string(state)?;
        self.store.put(&Self::key(session), &payload).await
    }
}
