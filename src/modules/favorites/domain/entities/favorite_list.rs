use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteList {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub club_ids: Vec<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl FavoriteList {
    pub fn new(name: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name,
            description: None,
            club_ids: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn with_description(mut self, description: String) -> Self {
        self.description = Some(description);
        self
    }

    pub fn add_club(&mut self, club_id: Uuid) -> bool {
        if !self.club_ids.contains(&club_id) {
            self.club_ids.push(club_id);
            self.updated_at = Utc::now();
            true
        } else {
            false
        }
    }

    pub fn remove_club(&mut self, club_id: &Uuid) -> bool {
        let original_len = self.club_ids.len();
        self.club_ids.retain(|id| id != club_id);

        if self.club_ids.len() < original_len {
            self.updated_at = Utc::now();
            true
        } else {
            false
        }
    }

    pub fn contains_club(&self, club_id: &Uuid) -> bool {
        self.club_ids.contains(club_id)
    }

    pub fn rename(&mut self, new_name: String) {
        self.name = new_name;
        self.updated_at = Utc::now();
    }

    pub fn update_description(&mut self, description: Option<String>) {
        self.description = description;
        self.updated_at = Utc::now();
    }
}

/// Full favorites state for one session: what gets serialized to local
/// storage on every mutation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FavoritesState {
    pub lists: Vec<FavoriteList>,
}

impl FavoritesState {
    pub fn find_by_id(&self, id: &Uuid) -> Option<&FavoriteList> {
        self.lists.iter().find(|list| list.id == *id)
    }

    pub fn find_by_id_mut(&mut self, id: &Uuid) -> Option<&mut FavoriteList> {
        self.lists.iter_mut().find(|list| list.id == *id)
    }

    pub fn find_by_name(&self, name: &str) -> Option<&FavoriteList> {
        self.lists.iter().find(|list| list.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_club_is_idempotent() {
        let mut list = FavoriteList::new("Favorites".to_string());
        let club_id = Uuid::new_v4();

        assert!(list.add_club(club_id));
        assert!(!list.add_club(club_id));
        assert_eq!(list.club_ids.len(), 1);
    }

    #[test]
    fn test_remove_club_reports_change() {
        let mut list = FavoriteList::new("Favorites".to_string());
        let club_id = Uuid::new_v4();
        list.add_club(club_id);

        assert!(list.remove_club(&club_id));
        assert!(!list.remove_club(&club_id));
        assert!(list.club_ids.is_empty());
    }

    #[test]
    fn test_contains_club() {
        let mut list = FavoriteList::new("Favorites".to_string());
        let club_id = Uuid::new_v4();
        assert!(!list.contains_club(&club_id));
        list.add_club(club_id);
        assert!(list.contains_club(&club_id));
    }

    #[test]
    fn test_state_lookups() {
        let mut state = FavoritesState::default();
        let list = FavoriteList::new("Weekend crew".to_string());
        let id = list.id;
        state.lists.push(list);

        assert!(state.find_by_id(&id).is_some());
        assert!(state.find_by_name("Weekend crew").is_some());
        assert!(state.find_by_name("Other").is_none());
    }

    #[test]
    fn test_state_serde_roundtrip() {
        let mut state = FavoritesState::default();
        let mut list = FavoriteList::new("Favorites".to_string()).with_description("mine".into());
        list.add_club(Uuid::new_v4());
        state.lists.push(list);

        let json = serde_json::to_string(&state).unwrap();
        let back: FavoritesState = serde_json::from_str(&json).unwrap();
        assert_eq!(back.lists.len(), 1);
        assert_eq!(back.lists[0].club_ids.len(), 1);
        assert_eq!(back.lists[0].description.as_deref(), Some("mine"));
    }
}
