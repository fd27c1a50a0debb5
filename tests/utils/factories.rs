use padelyzer_discovery::modules::club::{Club, ClubTier, Coordinates};

/// The two-club scenario catalogue used across the discovery tests.
pub fn scenario_catalogue() -> Vec<Club> {
    vec![
        Club::new("Club Padel Madrid", ClubTier::Elite, "Madrid")
            .with_description("Premier padel facility in the city center")
            .with_address("Calle de la Raqueta 12")
            .with_rating(4.8, 230)
            .with_members(500, 4.2)
            .with_features(["parking", "indoor", "wifi"])
            .with_service("court-rental", "Court rental", true)
            .with_service("lessons", "Padel lessons", true)
            .with_status(true, "Open until 23:00")
            .with_verified(true),
        Club::new("Club Deportivo", ClubTier::Basic, "Valencia")
            .with_description("Neighborhood sports club")
            .with_rating(3.2, 41)
            .with_members(50, 0.5)
            .with_features(["outdoor"])
            .with_service("court-rental", "Court rental", false)
            .with_status(false, "Opens at 09:00")
            .with_verified(false),
    ]
}

/// A larger catalogue with known coordinates around Madrid.
pub fn geo_catalogue() -> Vec<Club> {
    vec![
        Club::new("Centro Indoor", ClubTier::Premium, "Madrid")
            .with_rating(4.2, 88)
            .with_coordinates(Coordinates::new(40.42, -3.70).unwrap()),
        Club::new("Norte Padel", ClubTier::Premium, "Madrid")
            .with_rating(4.0, 60)
            .with_coordinates(Coordinates::new(40.48, -3.69).unwrap()),
        // No coordinates on purpose: must never be distance-filtered
        Club::new("Sin Mapa", ClubTier::Basic, "Madrid").with_rating(3.9, 12),
        Club::new("Barcelona Costa", ClubTier::Elite, "Barcelona")
            .with_rating(4.9, 300)
            .with_coordinates(Coordinates::new(41.3874, 2.1686).unwrap()),
    ]
}

pub fn user_in_madrid() -> Coordinates {
    Coordinates::new(40.4168, -3.7038).unwrap()
}
