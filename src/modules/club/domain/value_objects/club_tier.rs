use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::shared::errors::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClubTier {
    Basic,
    Premium,
    Elite,
}

impl ClubTier {
    pub fn display_name(&self) -> &'static str {
        match self {
            ClubTier::Basic => "Basic",
            ClubTier::Premium => "Premium",
            ClubTier::Elite => "Elite",
        }
    }

    /// Badge color used by the result cards.
    pub fn badge_color(&self) -> &'static str {
        match self {
            ClubTier::Basic => "#9CA3AF",   // Gray
            ClubTier::Premium => "#8B5CF6", // Violet
            ClubTier::Elite => "#F59E0B",   // Amber
        }
    }

    pub fn level(&self) -> u8 {
        match self {
            ClubTier::Basic => 1,
            ClubTier::Premium => 2,
            ClubTier::Elite => 3,
        }
    }
}

impl Default for ClubTier {
    fn default() -> Self {
        ClubTier::Basic
    }
}

impl fmt::Display for ClubTier {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for ClubTier {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "basic" => Ok(ClubTier::Basic),
            "premium" => Ok(ClubTier::Premium),
            "elite" => Ok(ClubTier::Elite),
            other => Err(AppError::InvalidInput(format!(
                "Unknown club tier: '{}'",
                other
            ))),
        }
    }
}
