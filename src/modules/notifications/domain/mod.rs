pub mod entities;
pub mod repositories;

// Re-exports for easy access
pub use entities::notification::{Notification, NotificationKind, NotificationsState};
pub use repositories::notifications_repository::NotificationsRepository;
