use serde::{Deserialize, Serialize};

/// Key the result list is ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    Relevance,
    Rating,
    Members,
    Distance,
    Name,
}

impl SortKey {
    /// Natural direction applied when the key is first selected.
    ///
    /// Score- and distance-like keys read best-first ascending; popularity
    /// keys descending; name is plain lexicographic.
    pub fn default_order(&self) -> SortOrder {
        match self {
            SortKey::Relevance => SortOrder::Ascending,
            SortKey::Rating => SortOrder::Descending,
            SortKey::Members => SortOrder::Descending,
            SortKey::Distance => SortOrder::Ascending,
            SortKey::Name => SortOrder::Ascending,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    Ascending,
    Descending,
}

impl SortOrder {
    pub fn toggled(&self) -> SortOrder {
        match self {
            SortOrder::Ascending => SortOrder::Descending,
            SortOrder::Descending => SortOrder::Ascending,
        }
    }
}

/// Current sort state, owned by the UI layer.
///
/// Re-selecting the active key flips the order; selecting a new key resets
/// to that key's natural default direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SortSelection {
    pub key: SortKey,
    pub order: SortOrder,
}

impl SortSelection {
    pub fn new(key: SortKey) -> Self {
        Self {
            key,
            order: key.default_order(),
        }
    }

    pub fn select(&mut self, key: SortKey) {
        if self.key == key {
            self.order = self.order.toggled();
        } else {
            self.key = key;
            self.order = key.default_order();
        }
    }
}

impl Default for SortSelection {
    fn default() -> Self {
        Self::new(SortKey::Relevance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_natural_defaults() {
        assert_eq!(SortKey::Relevance.default_order(), SortOrder::Ascending);
        assert_eq!(SortKey::Rating.default_order(), SortOrder::Descending);
        assert_eq!(SortKey::Members.default_order(), SortOrder::Descending);
        assert_eq!(SortKey::Distance.default_order(), SortOrder::Ascending);
        assert_eq!(SortKey::Name.default_order(), SortOrder::Ascending);
    }

    #[test]
    fn test_reselecting_same_key_flips_order() {
        let mut selection = SortSelection::new(SortKey::Rating);
        assert_eq!(selection.order, SortOrder::Descending);

        selection.select(SortKey::Rating);
        assert_eq!(selection.order, SortOrder::Ascending);

        selection.select(SortKey::Rating);
        assert_eq!(selection.order, SortOrder::Descending);
    }

    #[test]
    fn test_selecting_new_key_resets_to_default() {
        let mut selection = SortSelection::new(SortKey::Rating);
        selection.select(SortKey::Rating); // flips to ascending
        selection.select(SortKey::Name);

        assert_eq!(selection.key, SortKey::Name);
        assert_eq!(selection.order, SortOrder::Ascending);
    }
}
