pub mod application;
pub mod domain;
pub mod infrastructure;

// Re-exports for easy external access
pub use application::service::FavoritesService;
pub use domain::{FavoriteList, FavoritesRepository, FavoritesState};
pub use infrastructure::persistence::StoredFavoritesRepository;
