pub mod discovery_pipeline;
pub mod filter_evaluator;
pub mod matcher;
pub mod metrics;
pub mod sorter;

// Re-export main types
pub use discovery_pipeline::{DiscoveryPipeline, PipelineOutcome};
pub use filter_evaluator::FilterEvaluator;
pub use matcher::{
    ClubMatcher, FieldMatch, FieldWeights, MatchOutcome, MatcherConfig, MatcherConfigBuilder,
    ScoredClub, SearchField, WeightedFuzzyMatcher,
};
pub use metrics::{MetricsBuilder, PipelineMetrics, StageTimer};
pub use sorter::ResultSorter;
