pub mod entities;
pub mod repositories;

// Re-exports for easy access
pub use entities::favorite_list::{FavoriteList, FavoritesState};
pub use repositories::favorites_repository::FavoritesRepository;
