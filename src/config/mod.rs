//! Configuration module for ReelGuide
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::ReelGuidePaths;
pub use settings::Settings;
