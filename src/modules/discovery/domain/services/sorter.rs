use std::cmp::Ordering;

use crate::modules::discovery::domain::services::matcher::ScoredClub;
use crate::modules::discovery::domain::value_objects::{SortKey, SortOrder, SortSelection};

/// Orders the filtered candidate set by the selected key.
///
/// Sorting is stable: candidates that compare equal keep their incoming
/// order, so repeated runs over identical input never thrash.
#[derive(Debug, Clone, Default)]
pub struct ResultSorter;

impl ResultSorter {
    pub fn new() -> Self {
        Self
    }

    pub fn sort(&self, results: &mut [ScoredClub], selection: &SortSelection) {
        results.sort_by(|a, b| {
            let ordering = Self::compare(a, b, selection.key);
            match selection.order {
                SortOrder::Ascending => ordering,
                SortOrder::Descending => ordering.reverse(),
            }
        });
    }

    /// Comparator in each key's natural ascending reading.
    fn compare(a: &ScoredClub, b: &ScoredClub, key: SortKey) -> Ordering {
        match key {
            SortKey::Relevance => Self::compare_relevance(a, b),
            SortKey::Rating => Self::compare_f32(a.club.stats.rating.value, b.club.stats.rating.value),
            SortKey::Members => a.club.stats.members.total.cmp(&b.club.stats.members.total),
            SortKey::Distance => Self::compare_distance(a, b),
            SortKey::Name => a
                .club
                .name
                .to_lowercase()
                .cmp(&b.club.name.to_lowercase()),
        }
    }

    /// Match score ascending when available (lower = better); unscored runs
    /// fall through to the rating tie-break, best rated first.
    fn compare_relevance(a: &ScoredClub, b: &ScoredClub) -> Ordering {
        let score_cmp = match (a.score, b.score) {
            (Some(sa), Some(sb)) => sa.partial_cmp(&sb).unwrap_or(Ordering::Equal),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        };
        if score_cmp != Ordering::Equal {
            return score_cmp;
        }
        // Tiebreaker: rating descending
        Self::compare_f32(b.club.stats.rating.value, a.club.stats.rating.value)
    }

    /// Candidates without a distance sort last and equal among themselves.
    fn compare_distance(a: &ScoredClub, b: &ScoredClub) -> Ordering {
        let da = a.distance_km.unwrap_or(f64::MAX);
        let db = b.distance_km.unwrap_or(f64::MAX);
        da.partial_cmp(&db).unwrap_or(Ordering::Equal)
    }

    fn compare_f32(a: f32, b: f32) -> Ordering {
        a.partial_cmp(&b).unwrap_or(Ordering::Equal)
    }
}
