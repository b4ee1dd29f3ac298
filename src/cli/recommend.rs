//! Non-interactive recommendation command
//!
//! Submits a fully specified preference set from flags, skipping the
//! wizard. Inputs are validated against the same catalog and state machine
//! the TUI uses.

use clap::Args;

use crate::catalog;
use crate::client::RecommendationClient;
use crate::config::Settings;
use crate::display::movie::{format_movie_list, RenderDefaults};
use crate::error::{ReelGuideError, ReelGuideResult};
use crate::wizard::WizardMachine;

/// Arguments for the `recommend` command
#[derive(Args, Debug)]
pub struct RecommendArgs {
    /// Recommendation type (content, mood, discovery, regional)
    #[arg(short = 't', long = "type")]
    pub recommendation_type: String,

    /// Type-specific refinement (e.g. "classic", "happy", "hidden", "Bollywood")
    #[arg(short = 's', long)]
    pub sub_type: String,

    /// Genre to include (repeat for several; "any" for no preference)
    #[arg(short, long = "genre", required = true)]
    pub genres: Vec<String>,

    /// Release period (any, classic, modern, recent)
    #[arg(long, default_value = "any")]
    pub time_period: String,

    /// Rating preference (any-rating, high-rated)
    #[arg(long, default_value = "any-rating")]
    pub rating: String,

    /// Popularity preference (any, popular, lesser-known)
    #[arg(long, default_value = "any")]
    pub popularity: String,
}

/// Handle the `recommend` command
pub fn handle_recommend(settings: &Settings, args: RecommendArgs) -> ReelGuideResult<()> {
    for genre in &args.genres {
        if !catalog::is_known_genre(genre) {
            return Err(ReelGuideError::Validation(format!(
                "Unknown genre: '{}'. Run 'reelguide genres' to see the list.",
                genre
            )));
        }
    }
    validate_choice("time period", &args.time_period, catalog::TIME_PERIODS)?;
    validate_choice("rating preference", &args.rating, catalog::RATINGS)?;
    validate_choice("popularity preference", &args.popularity, catalog::POPULARITY)?;

    // Drive the wizard machine so the CLI path enforces the same
    // step-by-step validation as the TUI.
    let mut machine = WizardMachine::new();
    machine.confirm_intro(&args.recommendation_type)?;
    machine.confirm_detail(&args.sub_type)?;
    machine.confirm_genres(args.genres)?;
    let draft = machine.submit(args.time_period, args.rating, args.popularity);

    println!("Fetching recommendations from {} ...", settings.api_base_url);
    println!();

    let client = RecommendationClient::new(settings.recommendations_url());
    let movies = client.fetch(&draft)?;

    let defaults = RenderDefaults {
        placeholder_poster_path: settings.placeholder_poster_path.clone(),
        default_region: settings.default_region.clone(),
    };
    println!("{}", format_movie_list(&movies, &defaults));

    Ok(())
}

/// Handle the `genres` command
pub fn handle_genres() {
    println!("Selectable genres:");
    for spec in catalog::GENRES {
        if spec.blurb.is_empty() {
            println!("  {}", spec.value);
        } else {
            println!("  {} - {}", spec.value, spec.blurb);
        }
    }
}

fn validate_choice(
    what: &str,
    value: &str,
    allowed: &[catalog::CardSpec],
) -> ReelGuideResult<()> {
    if allowed.iter().any(|spec| spec.value == value) {
        Ok(())
    } else {
        let values: Vec<&str> = allowed.iter().map(|spec| spec.value).collect();
        Err(ReelGuideError::Validation(format!(
            "Invalid {}: '{}'. Valid values: {}",
            what,
            value,
            values.join(", ")
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_choice_accepts_catalog_values() {
        assert!(validate_choice("time period", "classic", catalog::TIME_PERIODS).is_ok());
        assert!(validate_choice("rating preference", "high-rated", catalog::RATINGS).is_ok());
    }

    #[test]
    fn test_validate_choice_rejects_unknown() {
        let err = validate_choice("time period", "medieval", catalog::TIME_PERIODS).unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("medieval"));
    }
}
