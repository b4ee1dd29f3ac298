//! ReelGuide - Terminal-based movie recommendation wizard
//!
//! This library provides the core functionality for ReelGuide, a terminal
//! client for a movie-recommendation backend. A multi-step wizard collects
//! the user's preferences, submits them to the backend as a single JSON
//! request, and renders the returned movie cards.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: The preference draft and the server-supplied movie records
//! - `catalog`: Static selection-card catalog
//! - `wizard`: The step state machine and selection-card model
//! - `client`: The recommendation backend client
//! - `display`: Plain-text result formatting
//! - `cli`: Non-interactive commands
//! - `tui`: The interactive wizard
//!
//! # Example
//!
//! ```rust,ignore
//! use reelguide::config::{paths::ReelGuidePaths, settings::Settings};
//!
//! let paths = ReelGuidePaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! ```

pub mod catalog;
pub mod cli;
pub mod client;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod tui;
pub mod wizard;

pub use error::ReelGuideError;
