//! Custom error types for ReelGuide
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for ReelGuide operations
#[derive(Error, Debug)]
pub enum ReelGuideError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors (e.g. no selection made at a required step)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Recommendation fetch errors (transport failures and non-success
    /// HTTP statuses are treated uniformly)
    #[error("Fetch error: {0}")]
    Fetch(String),

    /// TUI errors
    #[error("TUI error: {0}")]
    Tui(String),
}

impl ReelGuideError {
    /// Create a validation error for a step with no selection
    pub fn nothing_selected(what: impl Into<String>) -> Self {
        Self::Validation(format!("Please select {}", what.into()))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this is a fetch error
    pub fn is_fetch(&self) -> bool {
        matches!(self, Self::Fetch(_))
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for ReelGuideError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ReelGuideError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<reqwest::Error> for ReelGuideError {
    fn from(err: reqwest::Error) -> Self {
        Self::Fetch(err.to_string())
    }
}

/// Result type alias for ReelGuide operations
pub type ReelGuideResult<T> = Result<T, ReelGuideError>;
