use std::sync::Arc;

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::modules::notifications::domain::entities::notification::{
    Notification, NotificationKind, NotificationsState,
};
use crate::modules::notifications::domain::repositories::notifications_repository::NotificationsRepository;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::Validator;
use crate::log_debug;

/// Notification panel state for one session.
///
/// Same shape as the favorites store: in-memory state mutated only through
/// action methods, persisted through the injected repository on every change.
pub struct NotificationCenter {
    repo: Arc<dyn NotificationsRepository>,
    session: String,
    state: RwLock<NotificationsState>,
}

impl NotificationCenter {
    pub async fn load(
        repo: Arc<dyn NotificationsRepository>,
        session: impl Into<String>,
    ) -> AppResult<Self> {
        let session = session.into();
        Validator::validate_session_key(&session)?;

        let state = repo.load(&session).await?.unwrap_or_default();
        log_debug!(
            "NOTIFICATIONS: session '{}' loaded with {} entries ({} unread)",
            session,
            state.notifications.len(),
            state.unread_count()
        );

        Ok(Self {
            repo,
            session,
            state: RwLock::new(state),
        })
    }

    pub async fn push(
        &self,
        kind: NotificationKind,
        title: impl Into<String>,
        body: impl Into<String>,
    ) -> AppResult<Notification> {
        let notification = Notification::new(kind, title, body);

        let mut state = self.state.write().await;
        state.notifications.push(notification.clone());
        self.persist(&state).await?;

        Ok(notification)
    }

    /// Notifications newest-first, the panel's display order.
    pub async fn list(&self) -> Vec<Notification> {
        let state = self.state.read().await;
        let mut notifications = state.notifications.clone();
        notifications.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        notifications
    }

    pub async fn unread_count(&self) -> usize {
        self.state.read().await.unread_count()
    }

    pub async fn mark_read(&self, id: &Uuid) -> AppResult<()> {
        let mut state = self.state.write().await;
        let notification = state
            .find_by_id_mut(id)
            .ok_or_else(|| AppError::NotFound(format!("Notification {} not found", id)))?;

        if !notification.read {
            notification.mark_read();
            self.persist(&state).await?;
        }
        Ok(())
    }

    pub async fn mark_all_read(&self) -> AppResult<usize> {
        let mut state = self.state.write().await;
        let mut changed = 0;
        for notification in state.notifications.iter_mut().filter(|n| !n.read) {
            notification.mark_read();
            changed += 1;
        }
        if changed > 0 {
            self.persist(&state).await?;
        }
        Ok(changed)
    }

    pub async fn dismiss(&self, id: &Uuid) -> AppResult<()> {
        let mut state = self.state.write().await;
        let original_len = state.notifications.len();
        state.notifications.retain(|n| n.id != *id);
        if state.notifications.len() == original_len {
            return Err(AppError::NotFound(format!("Notification {} not found", id)));
        }
        self.persist(&state).await
    }

    async fn persist(&self, state: &NotificationsState) -> AppResult<()> {
        self.repo.save(&self.session, state).await
    }
}
