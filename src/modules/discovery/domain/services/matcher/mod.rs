/// Query matcher module: turns free-text input into a score-ordered
/// candidate set via weighted fuzzy matching over club fields.
///
/// # Architecture
///
/// - **Strategy Pattern**: `SimilarityStrategy` for pluggable matching algorithms
/// - **Builder Pattern**: `QueryNormalizer` for composable text transformations
/// - **Configuration Pattern**: `MatcherConfig` for externalized weights and thresholds
/// - **Capability trait**: `ClubMatcher` so the concrete matcher is swappable
///   without touching filter or sort logic
pub mod config;
pub mod query_normalizer;
pub mod similarity_strategy;
pub mod weighted_matcher;

// Re-export main types
pub use config::{FieldWeights, MatcherConfig, MatcherConfigBuilder};
pub use query_normalizer::{
    LowercaseTransform, NormalizeWhitespaceTransform, QueryNormalizer, RemoveSpecialCharsTransform,
    RemoveStopWordsTransform, TextTransformation,
};
pub use similarity_strategy::{
    HybridStrategy, JaroWinklerStrategy, LevenshteinStrategy, SimilarityStrategy,
};
pub use weighted_matcher::{
    ClubMatcher, FieldMatch, MatchOutcome, ScoredClub, SearchField, WeightedFuzzyMatcher,
};
