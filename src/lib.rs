pub mod modules;
pub mod shared;

// Re-exports for embedders: the engine surface plus the state containers.
pub use modules::club::{Club, ClubTier, Coordinates, Location, ServiceOffering};
pub use modules::discovery::{
    DiscoveryPipeline, DiscoveryService, DiscoverySink, SearchFilters, SearchRequest, SortKey,
    SortOrder, SortSelection, ViewMode,
};
pub use modules::favorites::FavoritesService;
pub use modules::notifications::NotificationCenter;
pub use shared::errors::{AppError, AppResult};
