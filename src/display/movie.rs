//! Movie display formatting
//!
//! Formats recommendation results for terminal output. These functions are
//! pure text builders; the TUI results view and the CLI `recommend` command
//! both render from them.

use crate::models::Movie;

/// Message shown when the backend returns no matches
pub const NO_RESULTS_MESSAGE: &str =
    "No recommendations found matching your criteria. Try adjusting your preferences.";

/// Presentation defaults applied to incomplete movie records
#[derive(Debug, Clone)]
pub struct RenderDefaults {
    /// Poster path substituted when a movie has none
    pub placeholder_poster_path: String,
    /// Region label substituted when a movie has none
    pub default_region: String,
}

impl Default for RenderDefaults {
    fn default() -> Self {
        Self {
            placeholder_poster_path: "/static/img/no-poster.jpg".to_string(),
            default_region: "Hollywood".to_string(),
        }
    }
}

/// Poster path for a movie, falling back to the placeholder
pub fn poster_path<'a>(movie: &'a Movie, defaults: &'a RenderDefaults) -> &'a str {
    movie
        .poster_path
        .as_deref()
        .unwrap_or(&defaults.placeholder_poster_path)
}

/// Region label for a movie, falling back to the default
pub fn region_label<'a>(movie: &'a Movie, defaults: &'a RenderDefaults) -> &'a str {
    movie.region.as_deref().unwrap_or(&defaults.default_region)
}

/// Format one movie as a block of card lines
pub fn format_movie_card(movie: &Movie, defaults: &RenderDefaults) -> Vec<String> {
    let mut lines = Vec::new();

    lines.push(format!("{} ({})", movie.title, movie.year));
    lines.push(format!(
        "  * {}  |  {}",
        movie.rating_display(),
        region_label(movie, defaults)
    ));
    if !movie.genres.is_empty() {
        lines.push(format!("  [{}]", movie.genres.join("] [")));
    }
    lines.push(format!("  Poster: {}", poster_path(movie, defaults)));
    if !movie.overview.is_empty() {
        lines.push(format!("  {}", movie.overview));
    }

    lines
}

/// Format a full result list for plain-text output
pub fn format_movie_list(movies: &[Movie], defaults: &RenderDefaults) -> String {
    if movies.is_empty() {
        return NO_RESULTS_MESSAGE.to_string();
    }

    let mut output = String::new();
    for (i, movie) in movies.iter().enumerate() {
        if i > 0 {
            output.push('\n');
        }
        for line in format_movie_card(movie, defaults) {
            output.push_str(&line);
            output.push('\n');
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(poster: Option<&str>, region: Option<&str>) -> Movie {
        Movie {
            title: "Test Movie".to_string(),
            year: 2015,
            rating: 7.25,
            overview: "A movie about testing.".to_string(),
            genres: vec!["Drama".to_string(), "Mystery".to_string()],
            poster_path: poster.map(String::from),
            region: region.map(String::from),
        }
    }

    #[test]
    fn test_empty_list_renders_no_results_message() {
        let output = format_movie_list(&[], &RenderDefaults::default());
        assert_eq!(output, NO_RESULTS_MESSAGE);
    }

    #[test]
    fn test_card_applies_fallbacks() {
        let defaults = RenderDefaults::default();
        let lines = format_movie_card(&movie(None, None), &defaults);

        assert!(lines.iter().any(|l| l.contains("/static/img/no-poster.jpg")));
        assert!(lines.iter().any(|l| l.contains("Hollywood")));
    }

    #[test]
    fn test_card_uses_supplied_fields() {
        let defaults = RenderDefaults::default();
        let lines = format_movie_card(
            &movie(Some("/static/img/test.jpg"), Some("Kollywood")),
            &defaults,
        );

        assert_eq!(lines[0], "Test Movie (2015)");
        assert!(lines.iter().any(|l| l.contains("/static/img/test.jpg")));
        assert!(lines.iter().any(|l| l.contains("Kollywood")));
        assert!(lines.iter().any(|l| l.contains("[Drama] [Mystery]")));
    }

    #[test]
    fn test_rating_formatted_to_one_decimal() {
        let lines = format_movie_card(&movie(None, None), &RenderDefaults::default());
        assert!(lines[1].contains("7.2"));
        assert!(!lines[1].contains("7.25"));
    }

    #[test]
    fn test_list_formats_every_movie() {
        let defaults = RenderDefaults::default();
        let movies = vec![movie(None, None), movie(None, Some("Bollywood"))];
        let output = format_movie_list(&movies, &defaults);

        assert_eq!(output.matches("Test Movie (2015)").count(), 2);
        assert!(output.contains("Bollywood"));
    }
}
