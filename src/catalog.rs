//! Static selection-card catalog
//!
//! The wizard's choices are fixed configuration data: the recommendation
//! types, each type's sub-type options, the genre list, and the filter
//! options on the preferences form. The catalog is materialized into
//! selection-card groups at startup.

/// A selectable choice before it is materialized into a card
#[derive(Debug, Clone, Copy)]
pub struct CardSpec {
    /// Value submitted to the backend
    pub value: &'static str,
    /// Short label shown on the card
    pub label: &'static str,
    /// One-line description shown under the label
    pub blurb: &'static str,
}

/// Recommendation types offered on the intro step
pub static RECOMMENDATION_TYPES: &[CardSpec] = &[
    CardSpec {
        value: "content",
        label: "By Content",
        blurb: "Movies similar to ones you already like",
    },
    CardSpec {
        value: "mood",
        label: "By Mood",
        blurb: "Match a movie to how you feel right now",
    },
    CardSpec {
        value: "discovery",
        label: "Discovery",
        blurb: "Hidden gems and films off the beaten path",
    },
    CardSpec {
        value: "regional",
        label: "Regional Cinema",
        blurb: "Explore film industries around the world",
    },
];

/// Sub-types for content-based recommendations
pub static CONTENT_TYPES: &[CardSpec] = &[
    CardSpec {
        value: "classic",
        label: "Classics",
        blurb: "Time-tested favorites",
    },
    CardSpec {
        value: "blockbuster",
        label: "Blockbusters",
        blurb: "Big-budget crowd pleasers",
    },
    CardSpec {
        value: "indie",
        label: "Indie",
        blurb: "Independent productions",
    },
    CardSpec {
        value: "acclaimed",
        label: "Critically Acclaimed",
        blurb: "Loved by the critics",
    },
];

/// Moods for mood-based recommendations
pub static MOODS: &[CardSpec] = &[
    CardSpec {
        value: "happy",
        label: "Happy",
        blurb: "Something light and fun",
    },
    CardSpec {
        value: "sad",
        label: "Melancholic",
        blurb: "A good cry",
    },
    CardSpec {
        value: "excited",
        label: "Excited",
        blurb: "High energy, big thrills",
    },
    CardSpec {
        value: "relaxed",
        label: "Relaxed",
        blurb: "Easy, unhurried viewing",
    },
    CardSpec {
        value: "thoughtful",
        label: "Thoughtful",
        blurb: "Something to chew on",
    },
    CardSpec {
        value: "romantic",
        label: "Romantic",
        blurb: "Love is in the air",
    },
];

/// Discovery styles
pub static DISCOVERY_TYPES: &[CardSpec] = &[
    CardSpec {
        value: "hidden",
        label: "Hidden Gems",
        blurb: "Highly rated but rarely seen",
    },
    CardSpec {
        value: "underrated",
        label: "Underrated",
        blurb: "Better than their buzz",
    },
    CardSpec {
        value: "cult",
        label: "Cult Classics",
        blurb: "Older films with devoted followings",
    },
    CardSpec {
        value: "awards",
        label: "Award Winners",
        blurb: "The decorated ones",
    },
];

/// Regional cinema options
pub static REGIONS: &[CardSpec] = &[
    CardSpec {
        value: "Bollywood",
        label: "Bollywood",
        blurb: "Hindi-language cinema",
    },
    CardSpec {
        value: "Tollywood",
        label: "Tollywood",
        blurb: "Telugu-language cinema",
    },
    CardSpec {
        value: "Kollywood",
        label: "Kollywood",
        blurb: "Tamil-language cinema",
    },
    CardSpec {
        value: "Hollywood",
        label: "Hollywood",
        blurb: "Western cinema",
    },
];

/// The fixed genre list, plus a wildcard entry
pub static GENRES: &[CardSpec] = &[
    CardSpec { value: "Action", label: "Action", blurb: "" },
    CardSpec { value: "Adventure", label: "Adventure", blurb: "" },
    CardSpec { value: "Animation", label: "Animation", blurb: "" },
    CardSpec { value: "Comedy", label: "Comedy", blurb: "" },
    CardSpec { value: "Crime", label: "Crime", blurb: "" },
    CardSpec { value: "Documentary", label: "Documentary", blurb: "" },
    CardSpec { value: "Drama", label: "Drama", blurb: "" },
    CardSpec { value: "Family", label: "Family", blurb: "" },
    CardSpec { value: "Fantasy", label: "Fantasy", blurb: "" },
    CardSpec { value: "History", label: "History", blurb: "" },
    CardSpec { value: "Horror", label: "Horror", blurb: "" },
    CardSpec { value: "Music", label: "Music", blurb: "" },
    CardSpec { value: "Mystery", label: "Mystery", blurb: "" },
    CardSpec { value: "Romance", label: "Romance", blurb: "" },
    CardSpec { value: "Science Fiction", label: "Science Fiction", blurb: "" },
    CardSpec { value: "Thriller", label: "Thriller", blurb: "" },
    CardSpec { value: "War", label: "War", blurb: "" },
    CardSpec { value: "Western", label: "Western", blurb: "" },
    CardSpec {
        value: "any",
        label: "Any genre",
        blurb: "I'm open to anything",
    },
];

/// Release period filter options
pub static TIME_PERIODS: &[CardSpec] = &[
    CardSpec {
        value: "any",
        label: "Any period",
        blurb: "",
    },
    CardSpec {
        value: "classic",
        label: "Classic",
        blurb: "Before 2000",
    },
    CardSpec {
        value: "modern",
        label: "Modern",
        blurb: "2000 - 2019",
    },
    CardSpec {
        value: "recent",
        label: "Recent",
        blurb: "2020 and later",
    },
];

/// Rating filter options
pub static RATINGS: &[CardSpec] = &[
    CardSpec {
        value: "any-rating",
        label: "Any rating",
        blurb: "",
    },
    CardSpec {
        value: "high-rated",
        label: "Highly rated",
        blurb: "7.0 and above",
    },
];

/// Popularity filter options
pub static POPULARITY: &[CardSpec] = &[
    CardSpec {
        value: "any",
        label: "Any popularity",
        blurb: "",
    },
    CardSpec {
        value: "popular",
        label: "Popular",
        blurb: "Widely watched",
    },
    CardSpec {
        value: "lesser-known",
        label: "Lesser-known",
        blurb: "Off the radar",
    },
];

/// Look up the display label for a recommendation type value
pub fn recommendation_type_label(value: &str) -> Option<&'static str> {
    RECOMMENDATION_TYPES
        .iter()
        .find(|spec| spec.value == value)
        .map(|spec| spec.label)
}

/// Check whether a value is one of the selectable genres
pub fn is_known_genre(value: &str) -> bool {
    GENRES.iter().any(|spec| spec.value == value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_genre_catalog_size() {
        // 18 fixed genres plus the "any" wildcard
        assert_eq!(GENRES.len(), 19);
        assert_eq!(GENRES.last().unwrap().value, "any");
    }

    #[test]
    fn test_known_genres() {
        assert!(is_known_genre("Science Fiction"));
        assert!(is_known_genre("any"));
        assert!(!is_known_genre("Telenovela"));
    }

    #[test]
    fn test_recommendation_type_labels() {
        assert_eq!(recommendation_type_label("mood"), Some("By Mood"));
        assert_eq!(recommendation_type_label("nonsense"), None);
    }

    #[test]
    fn test_filter_defaults_present() {
        assert!(TIME_PERIODS.iter().any(|s| s.value == "any"));
        assert!(RATINGS.iter().any(|s| s.value == "any-rating"));
        assert!(POPULARITY.iter().any(|s| s.value == "any"));
    }
}
