pub mod club_tier;
pub mod coordinates;

pub use club_tier::ClubTier;
pub use coordinates::Coordinates;
