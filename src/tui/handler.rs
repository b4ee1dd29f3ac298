//! Event handler for the TUI
//!
//! Routes keyboard events to wizard actions based on the active step.
//! Validation failures surface as a blocking alert; the suppressed
//! transition is simply not taken.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};

use crate::wizard::machine::Step;

use super::app::{Alert, App, PREFS_GROUPS};
use super::event::Event;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Tick => Ok(()),
        Event::Resize(_, _) => Ok(()),
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    // A blocking alert swallows everything until dismissed
    if app.has_alert() {
        if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
            app.dismiss_alert();
        }
        return Ok(());
    }

    // Global keys
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => {
            app.quit();
            return Ok(());
        }
        _ => {}
    }

    match app.machine.step() {
        Step::Results => handle_results_key(app, key),
        Step::PreferencesForm => handle_preferences_key(app, key),
        _ => handle_card_step_key(app, key),
    }
}

/// Handle keys on the card-picking steps (Intro, Detail, GenrePicker)
fn handle_card_step_key(app: &mut App, key: KeyEvent) -> Result<()> {
    let columns = app.active_columns();

    match key.code {
        // Cursor movement over the card grid
        KeyCode::Char('h') | KeyCode::Left => {
            if let Some(group) = app.active_group_mut() {
                group.cursor_left();
            }
        }
        KeyCode::Char('l') | KeyCode::Right => {
            if let Some(group) = app.active_group_mut() {
                group.cursor_right();
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            if let Some(group) = app.active_group_mut() {
                group.cursor_up(columns);
            }
        }
        KeyCode::Char('j') | KeyCode::Down => {
            if let Some(group) = app.active_group_mut() {
                group.cursor_down(columns);
            }
        }

        // Select the card under the cursor
        KeyCode::Char(' ') => {
            app.clear_status();
            if let Some(group) = app.active_group_mut() {
                group.select_at_cursor();
            }
        }

        // Confirm the step
        KeyCode::Enter | KeyCode::Char('n') => {
            confirm_active_step(app);
        }

        // Go back
        KeyCode::Esc | KeyCode::Char('b') => {
            app.clear_status();
            app.machine.go_back();
        }

        _ => {}
    }

    Ok(())
}

/// Confirm the active card step, surfacing validation errors as alerts
fn confirm_active_step(app: &mut App) {
    app.clear_status();

    let result = match app.machine.step() {
        Step::Intro => {
            let selection = app.groups.intro.read_single();
            app.machine.confirm_intro(&selection)
        }
        Step::Detail(kind) => {
            let selection = app.groups.detail(kind).read_single();
            app.machine.confirm_detail(&selection)
        }
        Step::GenrePicker => {
            let selection = app.groups.genres.read_multi();
            app.machine.confirm_genres(selection)
        }
        _ => Ok(()),
    };

    if let Err(err) = result {
        app.show_alert(Alert::from_error(&err));
    }
}

/// Handle keys on the preferences form
fn handle_preferences_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        // Cycle focus through the three filter groups
        KeyCode::Tab | KeyCode::Char('j') | KeyCode::Down => {
            app.prefs_focus = (app.prefs_focus + 1) % PREFS_GROUPS;
        }
        KeyCode::BackTab | KeyCode::Char('k') | KeyCode::Up => {
            app.prefs_focus = (app.prefs_focus + PREFS_GROUPS - 1) % PREFS_GROUPS;
        }

        // Move within the focused group
        KeyCode::Char('h') | KeyCode::Left => {
            if let Some(group) = app.active_group_mut() {
                group.cursor_left();
            }
        }
        KeyCode::Char('l') | KeyCode::Right => {
            if let Some(group) = app.active_group_mut() {
                group.cursor_right();
            }
        }

        // Select the option under the cursor
        KeyCode::Char(' ') => {
            if let Some(group) = app.active_group_mut() {
                group.select_at_cursor();
            }
        }

        // Submit: the one network call
        KeyCode::Enter => {
            app.submit();
        }

        // Back to the genre picker
        KeyCode::Esc | KeyCode::Char('b') => {
            app.machine.go_back();
        }

        _ => {}
    }

    Ok(())
}

/// Handle keys on the results view
fn handle_results_key(app: &mut App, key: KeyEvent) -> Result<()> {
    let count = app.result_count();

    match key.code {
        KeyCode::Char('j') | KeyCode::Down => {
            if app.results_cursor + 1 < count {
                app.results_cursor += 1;
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            if app.results_cursor > 0 {
                app.results_cursor -= 1;
            }
        }

        // Local-only actions on the highlighted card
        KeyCode::Char('m') => {
            app.toggle_bookmark();
        }
        KeyCode::Char('w') | KeyCode::Enter => {
            app.watch_selected();
        }

        // Start over: draft reset, back to Intro
        KeyCode::Char('s') => {
            app.start_over();
        }
        // Refine: back to the preferences form, draft retained
        KeyCode::Char('r') => {
            app.refine();
        }

        _ => {}
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::tui::app::FetchState;
    use crossterm::event::{KeyEventKind, KeyEventState, KeyModifiers};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn test_confirm_without_selection_raises_alert() {
        let settings = Settings::default();
        let mut app = App::new(&settings);

        handle_key_event(&mut app, key(KeyCode::Enter)).unwrap();
        assert!(app.has_alert());
        assert_eq!(app.machine.step(), Step::Intro);

        // Alert blocks navigation until dismissed
        handle_key_event(&mut app, key(KeyCode::Char(' '))).unwrap();
        assert_eq!(app.groups.intro.read_single(), "");

        handle_key_event(&mut app, key(KeyCode::Enter)).unwrap();
        assert!(!app.has_alert());
    }

    #[test]
    fn test_select_and_advance() {
        let settings = Settings::default();
        let mut app = App::new(&settings);

        // Select "content" (first intro card) and confirm
        handle_key_event(&mut app, key(KeyCode::Char(' '))).unwrap();
        handle_key_event(&mut app, key(KeyCode::Enter)).unwrap();

        assert!(matches!(app.machine.step(), Step::Detail(_)));
        assert_eq!(app.machine.draft().recommendation_type, "content");
    }

    #[test]
    fn test_back_from_detail() {
        let settings = Settings::default();
        let mut app = App::new(&settings);
        app.groups.intro.select(1);
        handle_key_event(&mut app, key(KeyCode::Enter)).unwrap();

        handle_key_event(&mut app, key(KeyCode::Esc)).unwrap();
        assert_eq!(app.machine.step(), Step::Intro);
    }

    #[test]
    fn test_quit_key() {
        let settings = Settings::default();
        let mut app = App::new(&settings);
        handle_key_event(&mut app, key(KeyCode::Char('q'))).unwrap();
        assert!(app.should_quit);
    }

    #[test]
    fn test_results_navigation_and_bookmark() {
        let settings = Settings::default();
        let mut app = App::new(&settings);
        app.machine.confirm_intro("mood").unwrap();
        app.machine.confirm_detail("happy").unwrap();
        app.machine.confirm_genres(vec!["Comedy".into()]).unwrap();
        app.machine
            .submit(String::new(), String::new(), String::new());

        let movie = crate::models::Movie {
            title: "Airplane!".into(),
            year: 1980,
            rating: 7.7,
            overview: String::new(),
            genres: vec!["Comedy".into()],
            poster_path: None,
            region: None,
        };
        app.fetch = FetchState::Loaded(vec![movie.clone(), movie]);

        handle_key_event(&mut app, key(KeyCode::Char('j'))).unwrap();
        assert_eq!(app.results_cursor, 1);

        handle_key_event(&mut app, key(KeyCode::Char('m'))).unwrap();
        assert!(app.bookmarks.contains(&1));

        handle_key_event(&mut app, key(KeyCode::Char('r'))).unwrap();
        assert_eq!(app.machine.step(), Step::PreferencesForm);
        assert_eq!(app.machine.draft().sub_type, "happy");
    }

    #[test]
    fn test_start_over_from_results() {
        let settings = Settings::default();
        let mut app = App::new(&settings);
        app.machine.confirm_intro("mood").unwrap();
        app.machine.confirm_detail("happy").unwrap();
        app.machine.confirm_genres(vec!["Comedy".into()]).unwrap();
        app.machine
            .submit(String::new(), String::new(), String::new());

        handle_key_event(&mut app, key(KeyCode::Char('s'))).unwrap();
        assert_eq!(app.machine.step(), Step::Intro);
        assert!(app.machine.draft().sub_type.is_empty());
    }
}
