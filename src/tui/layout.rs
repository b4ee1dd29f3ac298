//! Layout definitions for the TUI
//!
//! Defines the overall layout structure: progress strip, step body,
//! status bar.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout regions for the wizard
pub struct WizardLayout {
    /// Progress bar and step indicators at the top
    pub progress: Rect,
    /// Active step content
    pub body: Rect,
    /// Status bar at the bottom
    pub status_bar: Rect,
}

impl WizardLayout {
    /// Calculate layout from available area
    pub fn new(area: Rect) -> Self {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4), // Progress strip
                Constraint::Min(5),    // Step body
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        Self {
            progress: vertical[0],
            body: vertical[1],
            status_bar: vertical[2],
        }
    }
}

/// Layout for the preferences form: one region per filter group
pub struct PreferencesLayout {
    pub time_period: Rect,
    pub rating: Rect,
    pub popularity: Rect,
}

impl PreferencesLayout {
    /// Calculate preferences form layout
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(5),
                Constraint::Length(5),
                Constraint::Min(5),
            ])
            .split(area);

        Self {
            time_period: chunks[0],
            rating: chunks[1],
            popularity: chunks[2],
        }
    }
}

/// Create a fixed-size centered rect for dialogs
pub fn centered_rect_fixed(width: u16, height: u16, r: Rect) -> Rect {
    let x = r.x + (r.width.saturating_sub(width)) / 2;
    let y = r.y + (r.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(r.width), height.min(r.height))
}
