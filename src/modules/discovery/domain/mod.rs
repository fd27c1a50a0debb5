pub mod services;
pub mod value_objects;

// Re-exports for easy access
pub use services::discovery_pipeline::{DiscoveryPipeline, PipelineOutcome};
pub use value_objects::{Availability, SearchFilters, SortKey, SortOrder, SortSelection};
