//! User settings for ReelGuide
//!
//! Manages user preferences including the recommendation API endpoint and
//! the presentation defaults applied to incomplete movie records.

use serde::{Deserialize, Serialize};

use super::paths::ReelGuidePaths;
use crate::error::ReelGuideError;

/// User settings for ReelGuide
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Base URL of the recommendation backend
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Poster path used when a movie arrives without one
    #[serde(default = "default_placeholder_poster")]
    pub placeholder_poster_path: String,

    /// Region label used when a movie arrives without one
    #[serde(default = "default_region")]
    pub default_region: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_api_base_url() -> String {
    "http://localhost:5000".to_string()
}

fn default_placeholder_poster() -> String {
    "/static/img/no-poster.jpg".to_string()
}

fn default_region() -> String {
    "Hollywood".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            api_base_url: default_api_base_url(),
            placeholder_poster_path: default_placeholder_poster(),
            default_region: default_region(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &ReelGuidePaths) -> Result<Self, ReelGuideError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| ReelGuideError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                ReelGuideError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Create default settings. Don't save yet - let caller decide
            // when to persist.
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &ReelGuidePaths) -> Result<(), ReelGuideError> {
        // Ensure the config directory exists
        paths.ensure_directories()?;

        let settings_path = paths.settings_file();
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| ReelGuideError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(&settings_path, contents)
            .map_err(|e| ReelGuideError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }

    /// Full URL of the recommendations endpoint
    pub fn recommendations_url(&self) -> String {
        format!(
            "{}/api/recommendations",
            self.api_base_url.trim_end_matches('/')
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.api_base_url, "http://localhost:5000");
        assert_eq!(settings.placeholder_poster_path, "/static/img/no-poster.jpg");
        assert_eq!(settings.default_region, "Hollywood");
    }

    #[test]
    fn test_recommendations_url_strips_trailing_slash() {
        let mut settings = Settings::default();
        settings.api_base_url = "http://example.com/".to_string();
        assert_eq!(
            settings.recommendations_url(),
            "http://example.com/api/recommendations"
        );
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ReelGuidePaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.api_base_url = "http://movies.local:8080".to_string();

        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.api_base_url, "http://movies.local:8080");
    }

    #[test]
    fn test_serde_round_trip() {
        let settings = Settings::default();
        let json = serde_json::to_string(&settings).unwrap();
        let deserialized: Settings = serde_json::from_str(&json).unwrap();
        assert_eq!(settings.default_region, deserialized.default_region);
    }
}
