pub mod persistence;

pub use persistence::StoredNotificationsRepository;
