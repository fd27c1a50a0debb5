use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::modules::club::ClubTier;
use crate::modules::discovery::domain::services::discovery_pipeline::PipelineOutcome;
use crate::modules::discovery::domain::services::matcher::ScoredClub;
use crate::modules::discovery::domain::value_objects::SearchFilters;

/// How the result list is rendered. Affects only per-item display shape,
/// never membership or ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewMode {
    Grid,
    List,
}

/// Degenerate-result messaging decided by the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResultsNotice {
    /// The query was present but too short to fuzzy-score.
    QueryTooShort,
    /// A query produced zero matches: suggest different terms.
    NoMatchesForQuery,
    /// No query, but the filter set excluded everything: suggest loosening
    /// filters.
    NoMatchesAdjustFilters,
}

/// Rich card for the grid view.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClubCard {
    pub id: Uuid,
    pub name: String,
    pub tier: ClubTier,
    pub tier_badge_color: String,
    pub rating_value: f32,
    pub rating_count: u32,
    pub member_total: u32,
    pub distance_km: Option<f64>,
    pub is_open: bool,
    pub status_text: String,
    pub feature_tags: Vec<String>,
    pub top_highlight: Option<String>,
}

/// Compact row for the list view.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClubRow {
    pub id: Uuid,
    pub name: String,
    pub tier: ClubTier,
    pub city: String,
    pub address: String,
    pub rating_value: f32,
    pub distance_km: Option<f64>,
    pub is_open: bool,
    pub description_snippet: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DisplayItem {
    Card(ClubCard),
    Row(ClubRow),
}

/// Shaped output of one pipeline run, ready for rendering.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchPresentation {
    pub items: Vec<DisplayItem>,
    pub total: usize,
    pub notice: Option<ResultsNotice>,
}

const SNIPPET_MAX_CHARS: usize = 120;

/// Shapes pipeline results for the selected view mode.
///
/// Windowing/pagination is left to the rendering layer; the full ordered
/// sequence is always returned.
#[derive(Debug, Clone, Default)]
pub struct ResultsPresenter;

impl ResultsPresenter {
    pub fn new() -> Self {
        Self
    }

    pub fn present(
        &self,
        outcome: &PipelineOutcome,
        query: &str,
        filters: &SearchFilters,
        view_mode: ViewMode,
    ) -> SearchPresentation {
        let items = outcome
            .results
            .iter()
            .map(|candidate| match view_mode {
                ViewMode::Grid => DisplayItem::Card(Self::card(candidate)),
                ViewMode::List => DisplayItem::Row(Self::row(candidate)),
            })
            .collect();

        SearchPresentation {
            items,
            total: outcome.results.len(),
            notice: Self::notice(outcome, query, filters),
        }
    }

    fn notice(
        outcome: &PipelineOutcome,
        query: &str,
        filters: &SearchFilters,
    ) -> Option<ResultsNotice> {
        let has_query = !query.trim().is_empty();

        if has_query && !outcome.query_scored {
            return Some(ResultsNotice::QueryTooShort);
        }
        if !outcome.results.is_empty() {
            return None;
        }
        if has_query {
            Some(ResultsNotice::NoMatchesForQuery)
        } else if !filters.is_unconstrained() {
            Some(ResultsNotice::NoMatchesAdjustFilters)
        } else {
            None
        }
    }

    fn card(candidate: &ScoredClub) -> ClubCard {
        let club = &candidate.club;
        let mut feature_tags: Vec<String> = club.features.iter().cloned().collect();
        feature_tags.sort_unstable();

        ClubCard {
            id: club.id,
            name: club.name.clone(),
            tier: club.tier,
            tier_badge_color: club.tier.badge_color().to_string(),
            rating_value: club.stats.rating.value,
            rating_count: club.stats.rating.count,
            member_total: club.stats.members.total,
            distance_km: candidate.distance_km,
            is_open: club.status.is_open,
            status_text: club.status.status_text.clone(),
            feature_tags,
            top_highlight: club.highlights.first().cloned(),
        }
    }

    fn row(candidate: &ScoredClub) -> ClubRow {
        let club = &candidate.club;
        ClubRow {
            id: club.id,
            name: club.name.clone(),
            tier: club.tier,
            city: club.location.city.clone(),
            address: club.location.address.clone(),
            rating_value: club.stats.rating.value,
            distance_km: candidate.distance_km,
            is_open: club.status.is_open,
            description_snippet: club.description.as_deref().map(Self::snippet),
        }
    }

    fn snippet(text: &str) -> String {
        if text.chars().count() <= SNIPPET_MAX_CHARS {
            return text.to_string();
        }
        let cut: String = text.chars().take(SNIPPET_MAX_CHARS).collect();
        format!("{}…", cut.trim_end())
    }
}
