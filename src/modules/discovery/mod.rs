pub mod application;
pub mod domain;

// Re-exports for easy external access
pub use application::presenter::{
    ClubCard, ClubRow, DisplayItem, ResultsNotice, ResultsPresenter, SearchPresentation, ViewMode,
};
pub use application::service::{DiscoveryService, DiscoverySink, SearchRequest};
pub use domain::services::discovery_pipeline::{DiscoveryPipeline, PipelineOutcome};
pub use domain::services::matcher::{
    ClubMatcher, FieldMatch, FieldWeights, MatchOutcome, MatcherConfig, MatcherConfigBuilder,
    ScoredClub, SearchField, WeightedFuzzyMatcher,
};
pub use domain::value_objects::{Availability, SearchFilters, SortKey, SortOrder, SortSelection};
