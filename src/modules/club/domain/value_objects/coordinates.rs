use serde::{Deserialize, Serialize};

use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::geo::haversine_km;

/// WGS-84 position. Validated at construction so every stored value is a
/// usable point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    pub fn new(lat: f64, lng: f64) -> AppResult<Self> {
        if !(-90.0..=90.0).contains(&lat) {
            return Err(AppError::ValidationError(format!(
                "Latitude {} out of range (-90..=90)",
                lat
            )));
        }
        if !(-180.0..=180.0).contains(&lng) {
            return Err(AppError::ValidationError(format!(
                "Longitude {} out of range (-180..=180)",
                lng
            )));
        }
        Ok(Self { lat, lng })
    }

    /// Great-circle distance to another point, in kilometers.
    pub fn distance_km(&self, other: &Coordinates) -> f64 {
        haversine_km(self.lat, self.lng, other.lat, other.lng)
    }
}
