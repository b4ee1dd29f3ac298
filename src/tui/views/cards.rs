//! Selection-card grid rendering
//!
//! Renders a card group as a fixed-column grid. The cursor card is
//! reversed; selected cards are highlighted and marked.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::wizard::selection::CardGroup;

/// Height of one rendered card, borders included
const CARD_HEIGHT: u16 = 4;

/// Render a card group as a grid with the given column count
pub fn render_card_grid(frame: &mut Frame, group: &CardGroup, columns: usize, area: Rect) {
    if group.is_empty() || area.width == 0 {
        return;
    }

    let columns = columns.max(1).min(group.len());
    let card_width = area.width / columns as u16;
    if card_width < 8 {
        return;
    }

    // Scroll whole rows so the cursor row stays on screen
    let visible_rows = (area.height / CARD_HEIGHT).max(1) as usize;
    let cursor_row = group.cursor / columns;
    let row_offset = cursor_row.saturating_sub(visible_rows.saturating_sub(1));

    for (index, card) in group.cards.iter().enumerate() {
        let row = index / columns;
        if row < row_offset {
            continue;
        }
        let row = (row - row_offset) as u16;
        let col = (index % columns) as u16;

        let x = area.x + col * card_width;
        let y = area.y + row * CARD_HEIGHT;
        if y + CARD_HEIGHT > area.y + area.height {
            // Grid taller than the viewport; clip the remainder
            break;
        }
        let rect = Rect::new(x, y, card_width, CARD_HEIGHT);

        let is_cursor = index == group.cursor;
        let border_style = if card.selected {
            Style::default().fg(Color::Yellow)
        } else if is_cursor {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let mut label_style = Style::default().fg(Color::White);
        if card.selected {
            label_style = label_style.fg(Color::Yellow).add_modifier(Modifier::BOLD);
        }
        if is_cursor {
            label_style = label_style.add_modifier(Modifier::REVERSED);
        }

        let marker = if card.selected { "[x] " } else { "" };
        let mut lines = vec![Line::styled(format!("{}{}", marker, card.label), label_style)];
        if !card.blurb.is_empty() {
            lines.push(Line::styled(
                card.blurb.clone(),
                Style::default().fg(Color::DarkGray),
            ));
        }

        let paragraph = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style),
        );
        frame.render_widget(paragraph, rect);
    }
}

/// Render a one-row card strip (used by the preferences form groups)
pub fn render_card_row(
    frame: &mut Frame,
    group: &CardGroup,
    title: &str,
    focused: bool,
    area: Rect,
) {
    let border_style = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let block = Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(border_style);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if group.is_empty() || inner.width == 0 {
        return;
    }

    let mut spans = Vec::new();
    for (index, card) in group.cards.iter().enumerate() {
        if index > 0 {
            spans.push(ratatui::text::Span::raw("  "));
        }

        let mut style = Style::default().fg(Color::White);
        if card.selected {
            style = style.fg(Color::Yellow).add_modifier(Modifier::BOLD);
        }
        if focused && index == group.cursor {
            style = style.add_modifier(Modifier::REVERSED);
        }

        let marker = if card.selected { "(o) " } else { "( ) " };
        spans.push(ratatui::text::Span::styled(
            format!("{}{}", marker, card.label),
            style,
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), inner);
}
