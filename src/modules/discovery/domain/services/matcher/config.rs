use serde::{Deserialize, Serialize};

/// Relative weight of each searchable club field.
///
/// Weights scale a field's similarity contribution; the club name dominates,
/// descriptive text and city count double, everything else is baseline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldWeights {
    pub name: f64,
    pub description: f64,
    pub city: f64,
    pub address: f64,
    pub highlights: f64,
    pub service_names: f64,
    pub features: f64,
}

impl FieldWeights {
    pub fn max_weight(&self) -> f64 {
        [
            self.name,
            self.description,
            self.city,
            self.address,
            self.highlights,
            self.service_names,
            self.features,
        ]
        .into_iter()
        .fold(0.0, f64::max)
    }

    fn all(&self) -> [f64; 7] {
        [
            self.name,
            self.description,
            self.city,
            self.address,
            self.highlights,
            self.service_names,
            self.features,
        ]
    }
}

impl Default for FieldWeights {
    fn default() -> Self {
        Self {
            name: 3.0,
            description: 2.0,
            city: 2.0,
            address: 1.0,
            highlights: 1.5,
            service_names: 1.0,
            features: 1.0,
        }
    }
}

/// Configuration for the weighted fuzzy matcher
///
/// Externalizes all magic numbers, thresholds, and rules to make the matcher
/// configurable and testable.
#[derive(Debug, Clone)]
pub struct MatcherConfig {
    // Fuzzy matching configuration
    /// Weight for Jaro-Winkler similarity (0.0 to 1.0)
    pub jaro_winkler_weight: f64,

    /// Weight for Levenshtein similarity (0.0 to 1.0)
    pub levenshtein_weight: f64,

    /// A field counts as matched when its similarity reaches this value
    pub min_similarity: f64,

    /// Query tokens shorter than this are not fuzzy-scored
    pub min_token_length: usize,

    // Field configuration
    pub weights: FieldWeights,

    /// Stop words removed from query and field text (e.g., "the", "de")
    pub stop_words: Vec<String>,
}

impl MatcherConfig {
    /// Creates a new configuration with sensible production defaults
    pub fn new() -> Self {
        Self {
            // Jaro-Winkler is better for names, so weight it higher
            jaro_winkler_weight: 0.7,
            levenshtein_weight: 0.3,

            min_similarity: 0.6,
            min_token_length: 2,

            weights: FieldWeights::default(),

            // Common stop words across the bilingual club catalogue
            stop_words: vec![
                "the".to_string(),
                "a".to_string(),
                "an".to_string(),
                "de".to_string(),
                "del".to_string(),
                "la".to_string(),
                "el".to_string(),
            ],
        }
    }

    /// Creates a minimal configuration for testing
    #[cfg(test)]
    pub fn minimal() -> Self {
        Self {
            jaro_winkler_weight: 0.5,
            levenshtein_weight: 0.5,
            min_similarity: 0.5,
            min_token_length: 1,
            weights: FieldWeights::default(),
            stop_words: vec![],
        }
    }

    /// Validates the configuration
    pub fn validate(&self) -> Result<(), String> {
        let weight_sum = self.jaro_winkler_weight + self.levenshtein_weight;
        if (weight_sum - 1.0).abs() > 0.01 {
            return Err(format!(
                "Fuzzy matching weights must sum to 1.0, got {}",
                weight_sum
            ));
        }

        if self.jaro_winkler_weight < 0.0 || self.levenshtein_weight < 0.0 {
            return Err("Fuzzy matching weights must be non-negative".to_string());
        }

        if !(0.0..=1.0).contains(&self.min_similarity) {
            return Err(format!(
                "min_similarity must be within 0.0..=1.0, got {}",
                self.min_similarity
            ));
        }

        if self.min_token_length == 0 {
            return Err("min_token_length must be > 0".to_string());
        }

        if self.weights.all().iter().any(|w| *w < 0.0) {
            return Err("Field weights must be non-negative".to_string());
        }

        if self.weights.max_weight() == 0.0 {
            return Err("At least one field weight must be positive".to_string());
        }

        Ok(())
    }
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for MatcherConfig to make test setup easier
#[derive(Default)]
pub struct MatcherConfigBuilder {
    config: MatcherConfig,
}

impl MatcherConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: MatcherConfig::new(),
        }
    }

    pub fn jaro_winkler_weight(mut self, weight: f64) -> Self {
        self.config.jaro_winkler_weight = weight;
        self
    }

    pub fn levenshtein_weight(mut self, weight: f64) -> Self {
        self.config.levenshtein_weight = weight;
        self
    }

    pub fn min_similarity(mut self, threshold: f64) -> Self {
        self.config.min_similarity = threshold;
        self
    }

    pub fn min_token_length(mut self, length: usize) -> Self {
        self.config.min_token_length = length;
        self
    }

    pub fn weights(mut self, weights: FieldWeights) -> Self {
        self.config.weights = weights;
        self
    }

    pub fn stop_words(mut self, words: Vec<String>) -> Self {
        self.config.stop_words = words;
        self
    }

    pub fn build(self) -> Result<MatcherConfig, String> {
        self.config.validate()?;
        Ok(self.config)
    }
}
