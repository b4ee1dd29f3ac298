use anyhow::Result;
use clap::{Parser, Subcommand};

use reelguide::cli::{handle_genres, handle_recommend, RecommendArgs};
use reelguide::config::{paths::ReelGuidePaths, settings::Settings};
use reelguide::tui::run_tui;

#[derive(Parser)]
#[command(
    name = "reelguide",
    version,
    about = "Terminal-based movie recommendation wizard",
    long_about = "ReelGuide is a terminal client for a movie-recommendation \
                  service. A short wizard collects your preferences (type, \
                  mood, genres, filters), sends them to the backend, and \
                  shows the recommended movies as cards."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive wizard
    #[command(alias = "ui")]
    Tui,

    /// Fetch recommendations non-interactively from flags
    Recommend(RecommendArgs),

    /// List the selectable genres
    Genres,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = ReelGuidePaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    match cli.command {
        Some(Commands::Tui) | None => {
            run_tui(&settings)?;
        }
        Some(Commands::Recommend(args)) => {
            handle_recommend(&settings, args)?;
        }
        Some(Commands::Genres) => {
            handle_genres();
        }
        Some(Commands::Config) => {
            println!("ReelGuide Configuration");
            println!("=======================");
            println!("Config directory: {}", paths.config_dir().display());
            println!("Initialized:      {}", paths.is_initialized());
            println!();
            println!("Settings:");
            println!("  API base URL:       {}", settings.api_base_url);
            println!("  Placeholder poster: {}", settings.placeholder_poster_path);
            println!("  Default region:     {}", settings.default_region);
        }
    }

    Ok(())
}
