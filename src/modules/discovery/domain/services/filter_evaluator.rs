use crate::modules::club::{Club, Coordinates};
use crate::modules::discovery::domain::services::matcher::ScoredClub;
use crate::modules::discovery::domain::value_objects::{Availability, SearchFilters};

/// Reduces the candidate set to clubs satisfying every active predicate.
///
/// Predicates are evaluated independently and conjunctively; empty sets and
/// zero thresholds mean "no constraint". All checks are null-safe and the
/// evaluator never fails: malformed filter values simply produce (possibly
/// empty) results.
#[derive(Debug, Clone, Default)]
pub struct FilterEvaluator;

impl FilterEvaluator {
    pub fn new() -> Self {
        Self
    }

    /// Apply the filter set, annotating retained candidates with their
    /// distance from the user when a location is known.
    pub fn apply(
        &self,
        candidates: Vec<ScoredClub>,
        filters: &SearchFilters,
        user_location: Option<&Coordinates>,
    ) -> Vec<ScoredClub> {
        candidates
            .into_iter()
            .filter_map(|mut candidate| {
                if !self.matches(&candidate.club, filters, user_location) {
                    return None;
                }
                candidate.distance_km =
                    user_location.and_then(|loc| candidate.club.distance_from(loc));
                Some(candidate)
            })
            .collect()
    }

    /// True when the club satisfies every active predicate.
    pub fn matches(
        &self,
        club: &Club,
        filters: &SearchFilters,
        user_location: Option<&Coordinates>,
    ) -> bool {
        self.matches_tier(club, filters)
            && self.matches_features(club, filters)
            && self.matches_services(club, filters)
            && self.matches_rating(club, filters)
            && self.matches_members(club, filters)
            && self.matches_verified(club, filters)
            && self.matches_availability(club, filters)
            && self.within_distance(club, filters, user_location)
    }

    fn matches_tier(&self, club: &Club, filters: &SearchFilters) -> bool {
        filters.tier.is_empty() || filters.tier.contains(&club.tier)
    }

    fn matches_features(&self, club: &Club, filters: &SearchFilters) -> bool {
        filters.features.iter().all(|f| club.has_feature(f))
    }

    fn matches_services(&self, club: &Club, filters: &SearchFilters) -> bool {
        filters
            .services
            .iter()
            .all(|id| club.has_available_service(id))
    }

    fn matches_rating(&self, club: &Club, filters: &SearchFilters) -> bool {
        filters.min_rating <= 0.0 || club.stats.rating.value >= filters.min_rating
    }

    fn matches_members(&self, club: &Club, filters: &SearchFilters) -> bool {
        filters.min_members == 0 || club.stats.members.total >= filters.min_members
    }

    fn matches_verified(&self, club: &Club, filters: &SearchFilters) -> bool {
        match filters.verified {
            None => true,
            Some(wanted) => club.verified == wanted,
        }
    }

    fn matches_availability(&self, club: &Club, filters: &SearchFilters) -> bool {
        match filters.availability {
            Availability::All => true,
            Availability::Open => club.status.is_open,
            // TODO: wire a per-slot availability check once the reservations
            // feed exposes today's free slots; until then this applies no
            // additional constraint.
            Availability::AvailableToday => true,
        }
    }

    /// Clubs without coordinates are never distance-filtered out: absence of
    /// location data must not hide a club.
    fn within_distance(
        &self,
        club: &Club,
        filters: &SearchFilters,
        user_location: Option<&Coordinates>,
    ) -> bool {
        let (Some(max_km), Some(user)) = (filters.max_distance_km, user_location) else {
            return true;
        };
        match club.distance_from(user) {
            Some(distance) => distance <= max_km,
            None => true,
        }
    }
}
