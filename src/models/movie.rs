//! Server-supplied movie records
//!
//! Movies arrive as a JSON array from the recommendation backend and are
//! only ever rendered, never mutated locally.

use serde::{Deserialize, Serialize};

/// A single recommended movie
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    /// Movie title
    pub title: String,

    /// Release year
    #[serde(default)]
    pub year: i32,

    /// Average vote on a 0-10 scale
    #[serde(default)]
    pub rating: f64,

    /// Plot summary
    #[serde(default)]
    pub overview: String,

    /// Genres in display order
    #[serde(default)]
    pub genres: Vec<String>,

    /// Poster image path; the renderer substitutes a placeholder when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub poster_path: Option<String>,

    /// Regional cinema label; the renderer substitutes a default when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
}

impl Movie {
    /// Rating formatted to one decimal place
    pub fn rating_display(&self) -> String {
        format!("{:.1}", self.rating)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_record() {
        let json = r#"{
            "title": "Inception",
            "year": 2010,
            "rating": 8.36,
            "overview": "A thief who steals corporate secrets.",
            "genres": ["Action", "Science Fiction"],
            "region": "Hollywood",
            "posterPath": "/static/img/inception.jpg"
        }"#;

        let movie: Movie = serde_json::from_str(json).unwrap();
        assert_eq!(movie.title, "Inception");
        assert_eq!(movie.year, 2010);
        assert_eq!(movie.rating_display(), "8.4");
        assert_eq!(movie.genres.len(), 2);
        assert_eq!(movie.poster_path.as_deref(), Some("/static/img/inception.jpg"));
    }

    #[test]
    fn test_deserialize_sparse_record() {
        // Poster and region are optional on the wire
        let json = r#"{"title": "Obscure Gem", "year": 1987, "rating": 7.0,
                       "overview": "", "genres": []}"#;

        let movie: Movie = serde_json::from_str(json).unwrap();
        assert!(movie.poster_path.is_none());
        assert!(movie.region.is_none());
    }

    #[test]
    fn test_rating_display_rounds() {
        let movie = Movie {
            title: "x".into(),
            year: 2000,
            rating: 6.97,
            overview: String::new(),
            genres: vec![],
            poster_path: None,
            region: None,
        };
        assert_eq!(movie.rating_display(), "7.0");
    }
}
