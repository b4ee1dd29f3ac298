//! Blocking alert dialog
//!
//! Shown for validation failures: the suppressed step transition stays
//! suppressed and all other input is swallowed until the user dismisses it.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::tui::app::Alert;
use crate::tui::layout::centered_rect_fixed;

/// Render the alert dialog centered over the given area
pub fn render(frame: &mut Frame, alert: &Alert, area: Rect) {
    let width = 50.min(area.width.saturating_sub(4)).max(20);
    let dialog = centered_rect_fixed(width, 7, area);

    frame.render_widget(Clear, dialog);

    let block = Block::default()
        .title(format!(" {} ", alert.title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));

    let lines = vec![
        Line::from(alert.message.clone()),
        Line::from(""),
        Line::from(Span::styled(
            "[Enter] OK",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
    ];

    let paragraph = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    frame.render_widget(paragraph, dialog);
}
