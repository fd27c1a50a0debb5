use strsim::{jaro_winkler, normalized_levenshtein};

/// Strategy for calculating similarity between two strings
///
/// This trait enables different similarity algorithms to be used interchangeably,
/// making the matcher testable and extensible.
pub trait SimilarityStrategy: Send + Sync {
    /// Calculate similarity between query and target
    ///
    /// Returns a value between 0.0 (completely different) and 1.0 (identical)
    fn calculate(&self, query: &str, target: &str) -> f64;

    /// Get the name of this strategy for logging/debugging
    fn name(&self) -> &'static str;
}

/// Jaro-Winkler similarity strategy
///
/// Particularly good for short strings and names (like club names).
/// Gives more weight to matching prefixes.
#[derive(Debug, Clone)]
pub struct JaroWinklerStrategy;

impl SimilarityStrategy for JaroWinklerStrategy {
    fn calculate(&self, query: &str, target: &str) -> f64 {
        jaro_winkler(query, target)
    }

    fn name(&self) -> &'static str {
        "JaroWinkler"
    }
}

/// Normalized Levenshtein similarity strategy
///
/// Good for detecting typos and character-level differences.
/// Normalized to 0.0-1.0 range.
#[derive(Debug, Clone)]
pub struct LevenshteinStrategy;

impl SimilarityStrategy for LevenshteinStrategy {
    fn calculate(&self, query: &str, target: &str) -> f64 {
        normalized_levenshtein(query, target)
    }

    fn name(&self) -> &'static str {
        "Levenshtein"
    }
}

/// Hybrid strategy that combines multiple strategies with weighted average
pub struct HybridStrategy {
    strategies: Vec<(Box<dyn SimilarityStrategy>, f64)>,
}

impl HybridStrategy {
    /// Create a new hybrid strategy
    ///
    /// # Arguments
    /// * `strategies` - Vec of (strategy, weight) tuples. Weights must sum to 1.0
    ///
    /// # Panics
    /// Panics if weights don't sum to approximately 1.0
    pub fn new(strategies: Vec<(Box<dyn SimilarityStrategy>, f64)>) -> Self {
        let weight_sum: f64 = strategies.iter().map(|(_, w)| w).sum();
        assert!(
            (weight_sum - 1.0).abs() < 0.01,
            "Strategy weights must sum to 1.0, got {}",
            weight_sum
        );
        Self { strategies }
    }

    /// Create a default hybrid with Jaro-Winkler (70%) + Levenshtein (30%)
    pub fn default_hybrid() -> Self {
        Self::new(vec![
            (Box::new(JaroWinklerStrategy), 0.7),
            (Box::new(LevenshteinStrategy), 0.3),
        ])
    }
}

impl SimilarityStrategy for HybridStrategy {
    fn calculate(&self, query: &str, target: &str) -> f64 {
        self.strategies
            .iter()
            .map(|(strategy, weight)| strategy.calculate(query, target) * weight)
            .sum()
    }

    fn name(&self) -> &'static str {
        "Hybrid"
    }
}
