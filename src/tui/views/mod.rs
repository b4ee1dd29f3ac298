//! TUI Views module
//!
//! One view per wizard step plus the progress strip and status bar. The
//! render dispatch enforces the single-active-step invariant: exactly one
//! step body is drawn per frame.

pub mod cards;
pub mod progress;
pub mod results;
pub mod status_bar;
pub mod steps;

use ratatui::Frame;

use super::app::App;
use super::layout::WizardLayout;
use super::widgets::alert;
use crate::wizard::machine::Step;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &mut App) {
    let layout = WizardLayout::new(frame.area());

    // Progress strip (Results is not on the progress scale)
    match app.machine.progress_step() {
        Some(step_number) => progress::render(frame, step_number, layout.progress),
        None => progress::render_results_header(frame, layout.progress),
    }

    // Active step body
    match app.machine.step() {
        Step::Intro => steps::render_intro(frame, app, layout.body),
        Step::Detail(kind) => steps::render_detail(frame, app, kind, layout.body),
        Step::GenrePicker => steps::render_genre_picker(frame, app, layout.body),
        Step::PreferencesForm => steps::render_preferences(frame, app, layout.body),
        Step::Results => results::render(frame, app, layout.body),
    }

    // Status bar
    status_bar::render(frame, app, layout.status_bar);

    // Blocking alert on top of everything
    if let Some(ref current) = app.alert {
        alert::render(frame, current, frame.area());
    }
}
