use crate::modules::club::Club;
use crate::modules::discovery::domain::services::matcher::{
    config::MatcherConfig, query_normalizer::QueryNormalizer, similarity_strategy::HybridStrategy,
    similarity_strategy::JaroWinklerStrategy, similarity_strategy::LevenshteinStrategy,
    similarity_strategy::SimilarityStrategy,
};
use crate::shared::errors::{AppError, AppResult};

/// Club field a query can match against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchField {
    Name,
    Description,
    City,
    Address,
    Highlight,
    ServiceName,
    Feature,
}

impl SearchField {
    pub fn label(&self) -> &'static str {
        match self {
            SearchField::Name => "name",
            SearchField::Description => "description",
            SearchField::City => "city",
            SearchField::Address => "address",
            SearchField::Highlight => "highlight",
            SearchField::ServiceName => "service",
            SearchField::Feature => "feature",
        }
    }
}

/// Positional match metadata kept for result highlighting.
#[derive(Debug, Clone)]
pub struct FieldMatch {
    pub field: SearchField,
    /// Similarity of the best value of this field, 0.0..=1.0.
    pub similarity: f64,
    /// Index of the matched value for multi-valued fields (highlights,
    /// services, features); 0 for scalar fields.
    pub value_index: usize,
    /// The word that matched best, for highlighting.
    pub term: String,
}

/// A candidate annotated with its match score.
///
/// `score` follows a distance-like convention: lower is better, `None` means
/// the candidate passed through unscored (empty or unscorable query).
/// `distance_km` is filled by the filter stage when a user location is known.
#[derive(Debug, Clone)]
pub struct ScoredClub {
    pub club: Club,
    pub score: Option<f64>,
    pub distance_km: Option<f64>,
    pub matches: Vec<FieldMatch>,
}

impl ScoredClub {
    pub fn unscored(club: Club) -> Self {
        Self {
            club,
            score: None,
            distance_km: None,
            matches: Vec::new(),
        }
    }
}

/// Result of the matching stage.
#[derive(Debug, Clone)]
pub struct MatchOutcome {
    pub candidates: Vec<ScoredClub>,
    /// False when the query was empty or every token was below the minimum
    /// scorable length; the candidates then passed through unscored.
    pub query_scored: bool,
}

/// Pluggable matching capability: free text in, scored candidates out.
///
/// Keeping this behind a trait means the concrete matcher is swappable
/// without touching filter or sort logic.
pub trait ClubMatcher: Send + Sync {
    fn score(&self, query: &str, clubs: &[Club]) -> MatchOutcome;

    /// Get the name of this matcher for logging/debugging
    fn name(&self) -> &'static str;
}

/// Weighted fuzzy matcher over club fields.
///
/// Field similarity is the better of whole-string similarity and the mean of
/// per-token best-word similarities, so both full phrases and single typo'd
/// words rank well. A club is a candidate when at least one field reaches
/// `min_similarity`; its score is derived from the best weighted field.
pub struct WeightedFuzzyMatcher {
    config: MatcherConfig,
    normalizer: QueryNormalizer,
    strategy: Box<dyn SimilarityStrategy>,
}

impl WeightedFuzzyMatcher {
    /// Create a matcher with default configuration
    pub fn new() -> Self {
        let config = MatcherConfig::default();
        let normalizer = QueryNormalizer::default_pipeline(config.stop_words.clone());
        let strategy = Box::new(HybridStrategy::default_hybrid());

        Self {
            config,
            normalizer,
            strategy,
        }
    }

    /// Create a matcher with custom configuration
    pub fn with_config(config: MatcherConfig) -> AppResult<Self> {
        config.validate().map_err(AppError::ValidationError)?;

        let normalizer = QueryNormalizer::default_pipeline(config.stop_words.clone());
        let strategy: Box<dyn SimilarityStrategy> = Box::new(HybridStrategy::new(vec![
            (Box::new(JaroWinklerStrategy), config.jaro_winkler_weight),
            (Box::new(LevenshteinStrategy), config.levenshtein_weight),
        ]));

        Ok(Self {
            config,
            normalizer,
            strategy,
        })
    }

    pub fn config(&self) -> &MatcherConfig {
        &self.config
    }

    /// Query tokens long enough to be fuzzy-scored.
    fn scorable_tokens(&self, normalized_query: &str) -> Vec<String> {
        normalized_query
            .split_whitespace()
            .filter(|t| t.chars().count() >= self.config.min_token_length)
            .map(|t| t.to_string())
            .collect()
    }

    /// Similarity between the query and one field value.
    ///
    /// Returns the similarity plus the best-matching word for highlighting.
    fn value_similarity(
        &self,
        tokens: &[String],
        normalized_query: &str,
        raw_value: &str,
    ) -> Option<(f64, String)> {
        let normalized_value = self.normalizer.normalize(raw_value);
        if normalized_value.is_empty() {
            return None;
        }

        let full = self
            .strategy
            .calculate(normalized_query, &normalized_value);

        let words: Vec<&str> = normalized_value.split_whitespace().collect();
        let mut token_sum = 0.0;
        let mut best_word = normalized_value.clone();
        let mut best_word_sim = 0.0;

        for token in tokens {
            let mut token_best = 0.0;
            for word in &words {
                let sim = self.strategy.calculate(token, word);
                if sim > token_best {
                    token_best = sim;
                }
                if sim > best_word_sim {
                    best_word_sim = sim;
                    best_word = (*word).to_string();
                }
            }
            token_sum += token_best;
        }

        let token_mean = token_sum / tokens.len() as f64;
        let similarity = full.max(token_mean);

        log::trace!(
            "Similarity: '{}' <-> '{}' = {:.3} (strategy: {})",
            normalized_query,
            normalized_value,
            similarity,
            self.strategy.name()
        );

        Some((similarity, best_word))
    }

    /// Best similarity over a multi-valued field, with the winning index.
    fn best_of<'a, I>(
        &self,
        tokens: &[String],
        normalized_query: &str,
        values: I,
    ) -> Option<(f64, usize, String)>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut best: Option<(f64, usize, String)> = None;
        for (index, value) in values.into_iter().enumerate() {
            if let Some((sim, term)) = self.value_similarity(tokens, normalized_query, value) {
                if best.as_ref().map_or(true, |(b, _, _)| sim > *b) {
                    best = Some((sim, index, term));
                }
            }
        }
        best
    }

    /// Score one club against the query. None = not a candidate.
    fn score_club(
        &self,
        tokens: &[String],
        normalized_query: &str,
        club: &Club,
    ) -> Option<(f64, Vec<FieldMatch>)> {
        let weights = &self.config.weights;

        // Features iterate in sorted order so value indices are deterministic.
        let mut features: Vec<&str> = club.features.iter().map(String::as_str).collect();
        features.sort_unstable();

        let fields: [(SearchField, f64, Option<(f64, usize, String)>); 7] = [
            (
                SearchField::Name,
                weights.name,
                self.best_of(tokens, normalized_query, [club.name.as_str()]),
            ),
            (
                SearchField::Description,
                weights.description,
                self.best_of(
                    tokens,
                    normalized_query,
                    club.description.as_deref().into_iter(),
                ),
            ),
            (
                SearchField::City,
                weights.city,
                self.best_of(tokens, normalized_query, [club.location.city.as_str()]),
            ),
            (
                SearchField::Address,
                weights.address,
                self.best_of(tokens, normalized_query, [club.location.address.as_str()]),
            ),
            (
                SearchField::Highlight,
                weights.highlights,
                self.best_of(
                    tokens,
                    normalized_query,
                    club.highlights.iter().map(String::as_str),
                ),
            ),
            (
                SearchField::ServiceName,
                weights.service_names,
                self.best_of(
                    tokens,
                    normalized_query,
                    club.services.iter().map(|s| s.name.as_str()),
                ),
            ),
            (
                SearchField::Feature,
                weights.features,
                self.best_of(tokens, normalized_query, features.iter().copied()),
            ),
        ];

        let max_weight = weights.max_weight();
        let mut matches = Vec::new();
        let mut best_weighted = 0.0_f64;

        for (field, weight, result) in fields {
            let Some((similarity, value_index, term)) = result else {
                continue;
            };
            if similarity < self.config.min_similarity {
                continue;
            }

            best_weighted = best_weighted.max(similarity * weight / max_weight);
            matches.push(FieldMatch {
                field,
                similarity,
                value_index,
                term,
            });
        }

        if matches.is_empty() {
            return None;
        }

        let score = (1.0 - best_weighted).clamp(0.0, 1.0);
        Some((score, matches))
    }
}

impl Default for WeightedFuzzyMatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl ClubMatcher for WeightedFuzzyMatcher {
    fn score(&self, query: &str, clubs: &[Club]) -> MatchOutcome {
        let normalized_query = self.normalizer.normalize(query);
        let tokens = self.scorable_tokens(&normalized_query);

        // Blank or too-short queries pass the collection through untouched;
        // the presentation layer owns the "type more" messaging.
        if tokens.is_empty() {
            return MatchOutcome {
                candidates: clubs.iter().cloned().map(ScoredClub::unscored).collect(),
                query_scored: false,
            };
        }

        let mut candidates: Vec<ScoredClub> = clubs
            .iter()
            .filter_map(|club| {
                self.score_club(&tokens, &normalized_query, club)
                    .map(|(score, matches)| ScoredClub {
                        club: club.clone(),
                        score: Some(score),
                        distance_km: None,
                        matches,
                    })
            })
            .collect();

        // Best match first; ties keep collection order (stable sort).
        candidates.sort_by(|a, b| {
            a.score
                .partial_cmp(&b.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        log::debug!(
            "MATCHER: '{}' -> {} of {} candidates (strategy: {})",
            query,
            candidates.len(),
            clubs.len(),
            self.strategy.name()
        );

        MatchOutcome {
            candidates,
            query_scored: true,
        }
    }

    fn name(&self) -> &'static str {
        "WeightedFuzzy"
    }
}
