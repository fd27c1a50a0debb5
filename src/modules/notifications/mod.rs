pub mod application;
pub mod domain;
pub mod infrastructure;

// Re-exports for easy external access
pub use application::service::NotificationCenter;
pub use domain::{Notification, NotificationKind, NotificationsRepository, NotificationsState};
pub use infrastructure::persistence::StoredNotificationsRepository;
