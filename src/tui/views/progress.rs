//! Progress strip
//!
//! A progress bar plus the four step indicators. Results is not part of
//! the progress scale; the strip is replaced by a plain header there.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

use crate::wizard::machine::{indicator_state, progress_percent, IndicatorState, PROGRESS_STEPS};

/// Labels for the four progress steps
static STEP_LABELS: [&str; PROGRESS_STEPS as usize] = ["Type", "Details", "Genres", "Preferences"];

/// Render the progress strip for the given 1-based step number
pub fn render(frame: &mut Frame, active_step: u8, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(1)])
        .split(area);

    let percent = progress_percent(active_step);
    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" ReelGuide ")
                .borders(Borders::ALL),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .label(format!("{:.1}%", percent))
        .ratio((percent / 100.0).clamp(0.0, 1.0));
    frame.render_widget(gauge, chunks[0]);

    // Step indicators: completed, active, upcoming
    let mut spans = Vec::new();
    for (i, label) in STEP_LABELS.iter().enumerate() {
        let number = (i + 1) as u8;
        let style = match indicator_state(number, active_step) {
            IndicatorState::Completed => Style::default().fg(Color::Green),
            IndicatorState::Active => Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            IndicatorState::Upcoming => Style::default().fg(Color::DarkGray),
        };
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(format!("{} {}", number, label), style));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), chunks[1]);
}

/// Render the results header shown instead of the progress strip
pub fn render_results_header(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(" ReelGuide ")
        .borders(Borders::ALL);
    let paragraph = Paragraph::new("Your Recommendations").block(block);
    frame.render_widget(paragraph, area);
}
