use regex::Regex;

use crate::shared::errors::AppError;

pub struct Validator;

impl Validator {
    pub fn validate_club_name(name: &str) -> Result<(), AppError> {
        if name.is_empty() {
            return Err(AppError::ValidationError(
                "Club name cannot be empty".to_string(),
            ));
        }
        if name.len() > 255 {
            return Err(AppError::ValidationError(
                "Club name too long (max 255 characters)".to_string(),
            ));
        }
        Ok(())
    }

    pub fn validate_rating(rating: f32) -> Result<(), AppError> {
        if !(0.0..=5.0).contains(&rating) {
            return Err(AppError::ValidationError(
                "Rating must be between 0 and 5".to_string(),
            ));
        }
        Ok(())
    }

    pub fn validate_list_name(name: &str) -> Result<(), AppError> {
        if name.is_empty() {
            return Err(AppError::ValidationError(
                "List name cannot be empty".to_string(),
            ));
        }
        if name.len() > 100 {
            return Err(AppError::ValidationError(
                "List name too long (max 100 characters)".to_string(),
            ));
        }

        // Check for valid characters (alphanumeric, spaces, and some special characters)
        let re = Regex::new(r"^[a-zA-Z0-9\s\-_]+$").unwrap();
        if !re.is_match(name) {
            return Err(AppError::ValidationError(
                "List name contains invalid characters".to_string(),
            ));
        }
        Ok(())
    }

    pub fn validate_session_key(key: &str) -> Result<(), AppError> {
        if key.trim().is_empty() {
            return Err(AppError::ValidationError(
                "Session key cannot be empty".to_string(),
            ));
        }
        let re = Regex::new(r"^[a-zA-Z0-9\-_:.]+$").unwrap();
        if !re.is_match(key) {
            return Err(AppError::ValidationError(
                "Session key contains invalid characters".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_club_name_rules() {
        assert!(Validator::validate_club_name("Club Padel Madrid").is_ok());
        assert!(Validator::validate_club_name("").is_err());
        assert!(Validator::validate_club_name(&"x".repeat(256)).is_err());
    }

    #[test]
    fn test_rating_bounds() {
        assert!(Validator::validate_rating(0.0).is_ok());
        assert!(Validator::validate_rating(5.0).is_ok());
        assert!(Validator::validate_rating(-0.1).is_err());
        assert!(Validator::validate_rating(5.1).is_err());
    }

    #[test]
    fn test_list_name_rules() {
        assert!(Validator::validate_list_name("My Favorites").is_ok());
        assert!(Validator::validate_list_name("week-end_2024").is_ok());
        assert!(Validator::validate_list_name("").is_err());
        assert!(Validator::validate_list_name("bad/name").is_err());
        assert!(Validator::validate_list_name(&"x".repeat(101)).is_err());
    }

    #[test]
    fn test_session_key_rules() {
        assert!(Validator::validate_session_key("user:1234.session").is_ok());
        assert!(Validator::validate_session_key("  ").is_err());
        assert!(Validator::validate_session_key("bad key").is_err());
    }
}
