//! Path management for ReelGuide
//!
//! Provides XDG-compliant path resolution for the configuration directory.
//!
//! ## Path Resolution Order
//!
//! 1. `REELGUIDE_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/reelguide` or `~/.config/reelguide`
//! 3. Windows: `%APPDATA%\reelguide`

use std::path::PathBuf;

use crate::error::ReelGuideError;

/// Manages all paths used by ReelGuide
#[derive(Debug, Clone)]
pub struct ReelGuidePaths {
    /// Base directory for all ReelGuide data
    base_dir: PathBuf,
}

impl ReelGuidePaths {
    /// Create a new ReelGuidePaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, ReelGuideError> {
        let base_dir = if let Ok(custom) = std::env::var("REELGUIDE_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create ReelGuidePaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/reelguide/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the config directory (same as base for simplicity)
    pub fn config_dir(&self) -> PathBuf {
        self.base_dir.clone()
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), ReelGuideError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| ReelGuideError::Io(format!("Failed to create base directory: {}", e)))?;

        Ok(())
    }

    /// Check if ReelGuide has been initialized (config file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

/// Resolve the default data directory path based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, ReelGuideError> {
    // Unix (Linux/macOS): Use XDG_CONFIG_HOME if set, otherwise ~/.config
    let config_base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").expect("HOME environment variable not set");
            PathBuf::from(home).join(".config")
        });
    Ok(config_base.join("reelguide"))
}

/// Resolve the default data directory path based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, ReelGuideError> {
    // Windows: Use APPDATA
    let appdata = std::env::var("APPDATA")
        .map_err(|_| ReelGuideError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("reelguide"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ReelGuidePaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let base = temp_dir.path().join("nested").join("reelguide");
        let paths = ReelGuidePaths::with_base_dir(base.clone());

        paths.ensure_directories().unwrap();

        assert!(base.exists());
        assert!(!paths.is_initialized());
    }
}
