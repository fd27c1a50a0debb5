pub mod notifications_repository;

pub use notifications_repository::NotificationsRepository;
