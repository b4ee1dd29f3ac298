//! CLI commands for ReelGuide

pub mod recommend;

pub use recommend::{handle_genres, handle_recommend, RecommendArgs};
