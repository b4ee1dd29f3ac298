//! Core data models for ReelGuide

pub mod movie;
pub mod preferences;

pub use movie::Movie;
pub use preferences::PreferenceDraft;
