//! Step body views
//!
//! One render function per wizard step. Exactly one of these runs per
//! frame, for the machine's active step.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::App;
use crate::tui::layout::PreferencesLayout;
use crate::wizard::machine::DetailKind;

use super::cards::{render_card_grid, render_card_row};

/// Split a step body into a prompt line and the card area
fn prompt_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(4)])
        .split(area);
    (chunks[0], chunks[1])
}

fn render_prompt(frame: &mut Frame, text: &str, area: Rect) {
    let paragraph = Paragraph::new(text).style(Style::default().fg(Color::White));
    frame.render_widget(paragraph, area);
}

/// Intro step: pick a recommendation type
pub fn render_intro(frame: &mut Frame, app: &App, area: Rect) {
    let (prompt, body) = prompt_layout(area);
    render_prompt(
        frame,
        "How would you like your recommendations picked?",
        prompt,
    );
    render_card_grid(frame, &app.groups.intro, 2, body);
}

/// Detail step: pick the type-specific refinement
pub fn render_detail(frame: &mut Frame, app: &App, kind: DetailKind, area: Rect) {
    let (prompt, body) = prompt_layout(area);
    let text = match kind {
        DetailKind::Content => "What kind of movies are you after?",
        DetailKind::Mood => "How are you feeling right now?",
        DetailKind::Discovery => "What kind of discovery sounds fun?",
        DetailKind::Regional => "Which film industry would you like to explore?",
    };
    render_prompt(frame, text, prompt);
    render_card_grid(frame, app.groups.detail(kind), 2, body);
}

/// Genre picker: multi-select over the genre catalog
pub fn render_genre_picker(frame: &mut Frame, app: &App, area: Rect) {
    let (prompt, body) = prompt_layout(area);
    let count = app.groups.genres.read_multi().len();
    let text = if count == 0 {
        "Pick one or more genres (Space toggles, Enter confirms)".to_string()
    } else {
        format!("Pick one or more genres ({} selected)", count)
    };
    render_prompt(frame, &text, prompt);
    render_card_grid(frame, &app.groups.genres, 3, body);
}

/// Preferences form: period, rating and popularity filters
pub fn render_preferences(frame: &mut Frame, app: &App, area: Rect) {
    let (prompt, body) = prompt_layout(area);
    render_prompt(
        frame,
        "Fine-tune your preferences, then press Enter to get recommendations",
        prompt,
    );

    let layout = PreferencesLayout::new(body);
    render_card_row(
        frame,
        &app.groups.time_period,
        "Time period",
        app.prefs_focus == 0,
        layout.time_period,
    );
    render_card_row(
        frame,
        &app.groups.rating,
        "Rating",
        app.prefs_focus == 1,
        layout.rating,
    );
    render_card_row(
        frame,
        &app.groups.popularity,
        "Popularity",
        app.prefs_focus == 2,
        layout.popularity,
    );
}
