use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::modules::club::domain::value_objects::{ClubTier, Coordinates};
use crate::shared::errors::AppResult;
use crate::shared::utils::Validator;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub city: String,
    pub address: String,
    pub coordinates: Option<Coordinates>,
}

/// A bookable service a club offers (court rental, lessons, equipment, ...).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceOffering {
    pub id: String,
    pub name: String,
    pub available: bool,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingStats {
    pub value: f32,
    pub count: u32,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberStats {
    pub total: u32,
    pub growth: f32,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OccupancyStats {
    pub average: f32,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClubStats {
    pub rating: RatingStats,
    pub members: MemberStats,
    pub occupancy: OccupancyStats,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClubStatus {
    pub is_open: bool,
    pub status_text: String,
}

impl Default for ClubStatus {
    fn default() -> Self {
        Self {
            is_open: false,
            status_text: "Closed".to_string(),
        }
    }
}

/// Read-only club projection consumed by the discovery pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Club {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub tier: ClubTier,
    pub location: Location,
    pub features: HashSet<String>,
    pub services: Vec<ServiceOffering>,
    pub stats: ClubStats,
    pub status: ClubStatus,
    pub verified: bool,
    pub highlights: Vec<String>,
}

impl Club {
    pub fn new(name: impl Into<String>, tier: ClubTier, city: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            description: None,
            tier,
            location: Location {
                city: city.into(),
                address: String::new(),
                coordinates: None,
            },
            features: HashSet::new(),
            services: Vec::new(),
            stats: ClubStats::default(),
            status: ClubStatus::default(),
            verified: false,
            highlights: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.location.address = address.into();
        self
    }

    pub fn with_coordinates(mut self, coordinates: Coordinates) -> Self {
        self.location.coordinates = Some(coordinates);
        self
    }

    pub fn with_features<I, S>(mut self, features: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.features = features.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_service(mut self, id: impl Into<String>, name: impl Into<String>, available: bool) -> Self {
        self.services.push(ServiceOffering {
            id: id.into(),
            name: name.into(),
            available,
        });
        self
    }

    pub fn with_rating(mut self, value: f32, count: u32) -> Self {
        self.stats.rating = RatingStats { value, count };
        self
    }

    pub fn with_members(mut self, total: u32, growth: f32) -> Self {
        self.stats.members = MemberStats { total, growth };
        self
    }

    pub fn with_occupancy(mut self, average: f32) -> Self {
        self.stats.occupancy = OccupancyStats { average };
        self
    }

    pub fn with_status(mut self, is_open: bool, status_text: impl Into<String>) -> Self {
        self.status = ClubStatus {
            is_open,
            status_text: status_text.into(),
        };
        self
    }

    pub fn with_verified(mut self, verified: bool) -> Self {
        self.verified = verified;
        self
    }

    pub fn with_highlights<I, S>(mut self, highlights: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.highlights = highlights.into_iter().map(Into::into).collect();
        self
    }

    pub fn has_feature(&self, feature: &str) -> bool {
        self.features.contains(feature)
    }

    /// True when the club has a service with this id and it is bookable.
    pub fn has_available_service(&self, service_id: &str) -> bool {
        self.services
            .iter()
            .any(|s| s.id == service_id && s.available)
    }

    /// Distance from a user location, if the club has coordinates.
    pub fn distance_from(&self, user_location: &Coordinates) -> Option<f64> {
        self.location
            .coordinates
            .as_ref()
            .map(|c| c.distance_km(user_location))
    }

    pub fn validate(&self) -> AppResult<()> {
        Validator::validate_club_name(&self.name)?;
        Validator::validate_rating(self.stats.rating.value)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_club() -> Club {
        Club::new("Club Padel Madrid", ClubTier::Elite, "Madrid")
            .with_address("Calle de la Raqueta 12")
            .with_rating(4.8, 230)
            .with_members(500, 4.2)
            .with_features(["parking", "indoor"])
            .with_service("court-rental", "Court rental", true)
            .with_service("lessons", "Padel lessons", false)
            .with_status(true, "Open until 23:00")
            .with_verified(true)
    }

    #[test]
    fn test_builder_produces_valid_club() {
        let club = sample_club();
        assert!(club.validate().is_ok());
        assert_eq!(club.tier, ClubTier::Elite);
        assert_eq!(club.stats.members.total, 500);
    }

    #[test]
    fn test_feature_lookup() {
        let club = sample_club();
        assert!(club.has_feature("parking"));
        assert!(!club.has_feature("sauna"));
    }

    #[test]
    fn test_available_service_requires_available_flag() {
        let club = sample_club();
        assert!(club.has_available_service("court-rental"));
        assert!(!club.has_available_service("lessons"));
        assert!(!club.has_available_service("spa"));
    }

    #[test]
    fn test_distance_from_requires_coordinates() {
        let user = Coordinates::new(40.4, -3.7).unwrap();
        let club = sample_club();
        assert!(club.distance_from(&user).is_none());

        let club = club.with_coordinates(Coordinates::new(40.5, -3.6).unwrap());
        let d = club.distance_from(&user).unwrap();
        assert!(d > 0.0 && d < 30.0);
    }

    #[test]
    fn test_invalid_rating_fails_validation() {
        let club = sample_club().with_rating(5.5, 10);
        assert!(club.validate().is_err());
    }

    #[test]
    fn test_serde_camel_case() {
        let club = sample_club();
        let json = serde_json::to_string(&club).unwrap();
        assert!(json.contains("\"isOpen\""));
        assert!(json.contains("\"statusText\""));
    }
}
