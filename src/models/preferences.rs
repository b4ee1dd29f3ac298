//! The user's in-progress preference draft
//!
//! The draft is created empty when the wizard starts, mutated as each step
//! is confirmed, and read once in full when recommendations are requested.
//! Field names follow the backend's wire format (camelCase).

use serde::{Deserialize, Serialize};

/// Default time period when the user leaves it unset
pub const ANY_TIME_PERIOD: &str = "any";

/// Default rating preference when the user leaves it unset
pub const ANY_RATING: &str = "any-rating";

/// Default popularity preference when the user leaves it unset
pub const ANY_POPULARITY: &str = "any";

/// The mutable preference record built across wizard steps
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreferenceDraft {
    /// Which recommendation strategy the user picked on the intro step
    pub recommendation_type: String,

    /// The strategy-specific refinement (mood, discovery type, region, ...)
    pub sub_type: String,

    /// Selected genres, in display order
    pub genre: Vec<String>,

    /// Release period filter
    pub time_period: String,

    /// Rating filter
    pub rating: String,

    /// Popularity filter
    pub popularity: String,
}

impl Default for PreferenceDraft {
    fn default() -> Self {
        Self {
            recommendation_type: String::new(),
            sub_type: String::new(),
            genre: Vec::new(),
            time_period: ANY_TIME_PERIOD.to_string(),
            rating: ANY_RATING.to_string(),
            popularity: ANY_POPULARITY.to_string(),
        }
    }
}

impl PreferenceDraft {
    /// Create an empty draft with the default filters
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset the draft to its initial state ("start over")
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_draft() {
        let draft = PreferenceDraft::new();
        assert!(draft.recommendation_type.is_empty());
        assert!(draft.sub_type.is_empty());
        assert!(draft.genre.is_empty());
        assert_eq!(draft.time_period, "any");
        assert_eq!(draft.rating, "any-rating");
        assert_eq!(draft.popularity, "any");
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut draft = PreferenceDraft::new();
        draft.recommendation_type = "mood".to_string();
        draft.sub_type = "happy".to_string();
        draft.genre = vec!["Comedy".to_string()];
        draft.rating = "high-rated".to_string();

        draft.reset();
        assert_eq!(draft, PreferenceDraft::default());
    }

    #[test]
    fn test_wire_format_field_names() {
        let mut draft = PreferenceDraft::new();
        draft.recommendation_type = "content".to_string();
        draft.sub_type = "classic".to_string();
        draft.genre = vec!["Action".to_string(), "Comedy".to_string()];

        let json: serde_json::Value = serde_json::to_value(&draft).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "recommendationType": "content",
                "subType": "classic",
                "genre": ["Action", "Comedy"],
                "timePeriod": "any",
                "rating": "any-rating",
                "popularity": "any",
            })
        );
    }
}
