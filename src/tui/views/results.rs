//! Results view
//!
//! Renders the returned movie cards, replacing any previous content. While
//! the request is outstanding a loading indicator is shown; a failed fetch
//! replaces the loading text inline.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::display::movie::{poster_path, region_label, RenderDefaults, NO_RESULTS_MESSAGE};
use crate::models::Movie;
use crate::tui::app::{App, FetchState};

/// Height of one rendered movie card, borders included
const CARD_HEIGHT: u16 = 7;

/// Render the results view
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    match &app.fetch {
        FetchState::Idle | FetchState::Loading => {
            render_message(frame, "Finding movies for you...", Color::Cyan, area);
        }
        FetchState::Failed(detail) => {
            render_failure(frame, detail, area);
        }
        FetchState::Loaded(movies) => {
            if movies.is_empty() {
                render_message(frame, NO_RESULTS_MESSAGE, Color::White, area);
            } else {
                render_movie_cards(frame, app, movies, area);
            }
        }
    }
}

fn render_message(frame: &mut Frame, message: &str, color: Color, area: Rect) {
    let paragraph = Paragraph::new(message)
        .style(Style::default().fg(color))
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

fn render_failure(frame: &mut Frame, detail: &str, area: Rect) {
    let lines = vec![
        Line::styled(
            "Sorry, there was an error getting your recommendations. Please try again.",
            Style::default().fg(Color::Red),
        ),
        Line::styled(detail.to_string(), Style::default().fg(Color::DarkGray)),
    ];
    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

fn render_movie_cards(frame: &mut Frame, app: &App, movies: &[Movie], area: Rect) {
    let defaults = app.render_defaults();

    // Keep the highlighted card on screen
    let visible = (area.height / CARD_HEIGHT).max(1) as usize;
    let offset = app
        .results_cursor
        .saturating_sub(visible.saturating_sub(1));

    for (slot, (index, movie)) in movies.iter().enumerate().skip(offset).enumerate() {
        let y = area.y + (slot as u16) * CARD_HEIGHT;
        if y + CARD_HEIGHT > area.y + area.height {
            break;
        }
        let rect = Rect::new(area.x, y, area.width, CARD_HEIGHT);
        render_movie_card(frame, app, index, movie, &defaults, rect);
    }
}

fn render_movie_card(
    frame: &mut Frame,
    app: &App,
    index: usize,
    movie: &Movie,
    defaults: &RenderDefaults,
    area: Rect,
) {
    let highlighted = index == app.results_cursor;
    let bookmarked = app.bookmarks.contains(&index);

    let border_style = if highlighted {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let bookmark = if bookmarked { " [saved]" } else { "" };
    let title = format!(" {} ({}){} ", movie.title, movie.year, bookmark);

    let meta = Line::from(vec![
        Span::styled(
            format!("* {}", movie.rating_display()),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  |  "),
        Span::styled(
            region_label(movie, defaults).to_string(),
            Style::default().fg(Color::Green),
        ),
        Span::raw("  |  "),
        Span::styled(
            poster_path(movie, defaults).to_string(),
            Style::default().fg(Color::DarkGray),
        ),
    ]);

    let genres = Line::from(
        movie
            .genres
            .iter()
            .map(|genre| {
                Span::styled(
                    format!("[{}] ", genre),
                    Style::default().fg(Color::Magenta),
                )
            })
            .collect::<Vec<_>>(),
    );

    let lines = vec![
        meta,
        genres,
        Line::styled(movie.overview.clone(), Style::default().fg(Color::White)),
    ];

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(border_style),
        )
        .wrap(Wrap { trim: true });

    frame.render_widget(paragraph, area);
}
