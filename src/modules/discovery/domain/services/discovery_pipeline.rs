use crate::modules::club::{Club, Coordinates};
use crate::modules::discovery::domain::services::{
    filter_evaluator::FilterEvaluator,
    matcher::{ClubMatcher, MatcherConfig, ScoredClub, WeightedFuzzyMatcher},
    metrics::{MetricsBuilder, PipelineMetrics, StageTimer},
    sorter::ResultSorter,
};
use crate::modules::discovery::domain::value_objects::{SearchFilters, SortSelection};
use crate::shared::errors::AppResult;

/// Result of one pipeline run.
#[derive(Debug, Clone)]
pub struct PipelineOutcome {
    /// Filtered candidates in final display order.
    pub results: Vec<ScoredClub>,
    /// False when the query was blank or unscorably short and the collection
    /// passed through the matcher untouched.
    pub query_scored: bool,
    pub metrics: PipelineMetrics,
}

/// The club discovery pipeline: matcher -> filter evaluator -> sorter.
///
/// Each run is a pure function of (clubs, query, filters, sort, location);
/// no stage mutates shared state, so overlapping runs are safe to discard.
///
/// # Design Patterns:
/// - **Chain of Responsibility**: pipeline stages
/// - **Strategy**: pluggable matcher behind `ClubMatcher`
/// - **Configuration**: externalized matcher settings
/// - **Metrics**: observable via `PipelineMetrics`
pub struct DiscoveryPipeline {
    matcher: Box<dyn ClubMatcher>,
    filter: FilterEvaluator,
    sorter: ResultSorter,
}

impl DiscoveryPipeline {
    /// Create a pipeline with the default weighted fuzzy matcher
    pub fn new() -> Self {
        Self {
            matcher: Box::new(WeightedFuzzyMatcher::new()),
            filter: FilterEvaluator::new(),
            sorter: ResultSorter::new(),
        }
    }

    /// Create a pipeline with custom matcher configuration
    pub fn with_config(config: MatcherConfig) -> AppResult<Self> {
        Ok(Self {
            matcher: Box::new(WeightedFuzzyMatcher::with_config(config)?),
            filter: FilterEvaluator::new(),
            sorter: ResultSorter::new(),
        })
    }

    /// Create a pipeline with a custom matcher implementation
    pub fn with_matcher(matcher: Box<dyn ClubMatcher>) -> Self {
        Self {
            matcher,
            filter: FilterEvaluator::new(),
            sorter: ResultSorter::new(),
        }
    }

    /// Run all stages in order:
    /// 1. Fuzzy-match the query against the collection
    /// 2. Apply the conjunctive filter set
    /// 3. Sort by the selected key and order
    pub fn run(
        &self,
        clubs: &[Club],
        query: &str,
        filters: &SearchFilters,
        selection: &SortSelection,
        user_location: Option<&Coordinates>,
    ) -> PipelineOutcome {
        let mut metrics_builder = MetricsBuilder::new();
        metrics_builder.start_pipeline();
        metrics_builder.input_count(clubs.len());

        log::debug!(
            "PIPELINE: Starting run over {} clubs (query: '{}')",
            clubs.len(),
            query
        );

        // Stage 1: text matching
        let timer = StageTimer::start("Matching");
        let match_outcome = self.matcher.score(query, clubs);
        timer.stop_builder(&mut metrics_builder);

        let matched = match_outcome.candidates;
        metrics_builder.matched_count(matched.len());
        log::debug!("PIPELINE: Matched {} candidates", matched.len());

        // Stage 2: conjunctive filters
        let timer = StageTimer::start("Filtering");
        let before_filter = matched.len();
        let mut retained = self.filter.apply(matched, filters, user_location);
        timer.stop_builder(&mut metrics_builder);

        metrics_builder.filtered_count(before_filter - retained.len());
        log::debug!(
            "PIPELINE: Filtered to {} results ({} removed)",
            retained.len(),
            before_filter - retained.len()
        );

        // Stage 3: ordering
        let timer = StageTimer::start("Sorting");
        self.sorter.sort(&mut retained, selection);
        timer.stop_builder(&mut metrics_builder);

        metrics_builder.output_count(retained.len());
        metrics_builder.stop_pipeline();
        let metrics = metrics_builder.build();

        log::trace!("\n{}", metrics.report());

        PipelineOutcome {
            results: retained,
            query_scored: match_outcome.query_scored,
            metrics,
        }
    }
}

impl Default for DiscoveryPipeline {
    fn default() -> Self {
        Self::new()
    }
}
