use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::modules::club::ClubTier;

/// Availability constraint selected in the filter panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Availability {
    All,
    Open,
    AvailableToday,
}

impl Default for Availability {
    fn default() -> Self {
        Availability::All
    }
}

/// Structured predicates applied conjunctively over the candidate set.
///
/// A fresh value is built per pipeline invocation from current UI state and
/// never mutated in place; every filter change produces a new configuration.
/// Empty sets and zero thresholds mean "no constraint".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchFilters {
    /// Retain clubs whose tier is in this set (empty = all tiers).
    pub tier: HashSet<ClubTier>,
    /// Every listed feature must be present on the club.
    pub features: HashSet<String>,
    /// Every listed service id must exist on the club with `available = true`.
    pub services: HashSet<String>,
    pub min_rating: f32,
    /// Only applied when the caller supplies a user location.
    pub max_distance_km: Option<f64>,
    pub availability: Availability,
    pub min_members: u32,
    /// None = don't care.
    pub verified: Option<bool>,
}

impl SearchFilters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tier(mut self, tier: ClubTier) -> Self {
        self.tier.insert(tier);
        self
    }

    pub fn with_feature(mut self, feature: impl Into<String>) -> Self {
        self.features.insert(feature.into());
        self
    }

    pub fn with_service(mut self, service_id: impl Into<String>) -> Self {
        self.services.insert(service_id.into());
        self
    }

    pub fn with_min_rating(mut self, min_rating: f32) -> Self {
        self.min_rating = min_rating;
        self
    }

    pub fn with_max_distance_km(mut self, km: f64) -> Self {
        self.max_distance_km = Some(km);
        self
    }

    pub fn with_availability(mut self, availability: Availability) -> Self {
        self.availability = availability;
        self
    }

    pub fn with_min_members(mut self, min_members: u32) -> Self {
        self.min_members = min_members;
        self
    }

    pub fn with_verified(mut self, verified: bool) -> Self {
        self.verified = Some(verified);
        self
    }

    /// True when no predicate constrains the candidate set.
    pub fn is_unconstrained(&self) -> bool {
        self.tier.is_empty()
            && self.features.is_empty()
            && self.services.is_empty()
            && self.min_rating == 0.0
            && self.max_distance_km.is_none()
            && self.availability == Availability::All
            && self.min_members == 0
            && self.verified.is_none()
    }
}
