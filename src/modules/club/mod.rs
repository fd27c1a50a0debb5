pub mod domain;

// Re-exports for easy external access
pub use domain::{
    Club, ClubStats, ClubStatus, ClubTier, Coordinates, Location, MemberStats, OccupancyStats,
    RatingStats, ServiceOffering,
};
