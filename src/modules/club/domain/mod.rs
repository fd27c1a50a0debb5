pub mod entities;
pub mod value_objects;

// Re-exports for easy access
pub use entities::club::{
    Club, ClubStats, ClubStatus, Location, MemberStats, OccupancyStats, RatingStats,
    ServiceOffering,
};
pub use value_objects::club_tier::ClubTier;
pub use value_objects::coordinates::Coordinates;
