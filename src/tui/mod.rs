//! Terminal User Interface module
//!
//! This module provides the interactive wizard TUI for ReelGuide using
//! ratatui: the step views, the card-grid interaction, and the results
//! rendering.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Layout
pub mod layout;

pub use app::App;
pub use terminal::run_tui;
