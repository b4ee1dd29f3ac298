//! Status bar view
//!
//! Shows startup warnings and transient status messages on the left,
//! step-appropriate key hints on the right.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::App;
use crate::wizard::machine::Step;

/// Render the status bar
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let mut spans = Vec::new();

    if let Some(warning) = app.startup_warnings.first() {
        spans.push(Span::styled(
            format!(" ! {}", warning),
            Style::default().fg(Color::Red),
        ));
    } else if let Some(ref message) = app.status_message {
        spans.push(Span::styled(
            format!(" {}", message),
            Style::default().fg(Color::Yellow),
        ));
    }

    let hints = match app.machine.step() {
        Step::Intro => " arrows:Move  Space:Select  Enter:Next  q:Quit ",
        Step::Detail(_) | Step::GenrePicker => {
            " arrows:Move  Space:Select  Enter:Next  Esc:Back  q:Quit "
        }
        Step::PreferencesForm => {
            " Tab:Group  arrows:Move  Space:Select  Enter:Get Recommendations  Esc:Back  q:Quit "
        }
        Step::Results => " j/k:Move  m:Save  w:Watch  r:Refine  s:Start Over  q:Quit ",
    };

    let left_len: usize = spans.iter().map(|s| s.content.len()).sum();
    let padding_len = (area.width as usize)
        .saturating_sub(left_len)
        .saturating_sub(hints.len());
    spans.push(Span::raw(" ".repeat(padding_len.max(1))));
    spans.push(Span::styled(hints, Style::default().fg(Color::White)));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
