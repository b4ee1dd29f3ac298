//! Application state for the TUI
//!
//! The App struct holds all state needed for rendering and handling events:
//! the wizard state machine, the materialized card groups, and the state of
//! the one outstanding network call.

use std::collections::HashSet;
use std::sync::mpsc;
use std::thread;

use crate::catalog;
use crate::client::RecommendationClient;
use crate::config::Settings;
use crate::display::movie::RenderDefaults;
use crate::error::ReelGuideError;
use crate::models::Movie;
use crate::wizard::machine::{DetailKind, Step, WizardMachine};
use crate::wizard::selection::{CardGroup, SelectionMode};

/// State of the recommendation fetch
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState {
    /// No request issued yet
    Idle,
    /// A request is outstanding; the results area shows a loading indicator
    Loading,
    /// The last request resolved with a movie list
    Loaded(Vec<Movie>),
    /// The last request failed; the message replaces the loading text
    Failed(String),
}

/// A blocking alert dialog; the suppressed transition stays suppressed
/// until the user dismisses it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub title: String,
    pub message: String,
}

impl Alert {
    /// Build an alert from a validation error
    pub fn from_error(error: &ReelGuideError) -> Self {
        let title = if error.is_validation() {
            "Selection Required"
        } else {
            "Error"
        };
        let message = match error {
            ReelGuideError::Validation(msg) => msg.clone(),
            other => other.to_string(),
        };
        Self {
            title: title.to_string(),
            message,
        }
    }
}

/// Which filter group of the preferences form has focus
pub const PREFS_GROUPS: usize = 3;

/// The card groups backing every wizard step
pub struct StepGroups {
    pub intro: CardGroup,
    pub content: CardGroup,
    pub mood: CardGroup,
    pub discovery: CardGroup,
    pub regional: CardGroup,
    pub genres: CardGroup,
    pub time_period: CardGroup,
    pub rating: CardGroup,
    pub popularity: CardGroup,
}

impl StepGroups {
    /// Materialize all groups from the static catalog
    pub fn from_catalog() -> Self {
        let mut groups = Self {
            intro: CardGroup::from_specs(catalog::RECOMMENDATION_TYPES, SelectionMode::Single),
            content: CardGroup::from_specs(catalog::CONTENT_TYPES, SelectionMode::Single),
            mood: CardGroup::from_specs(catalog::MOODS, SelectionMode::Single),
            discovery: CardGroup::from_specs(catalog::DISCOVERY_TYPES, SelectionMode::Single),
            regional: CardGroup::from_specs(catalog::REGIONS, SelectionMode::Single),
            genres: CardGroup::from_specs(catalog::GENRES, SelectionMode::Multi),
            time_period: CardGroup::from_specs(catalog::TIME_PERIODS, SelectionMode::Single),
            rating: CardGroup::from_specs(catalog::RATINGS, SelectionMode::Single),
            popularity: CardGroup::from_specs(catalog::POPULARITY, SelectionMode::Single),
        };
        groups.preselect_filter_defaults();
        groups
    }

    /// Pre-select the "any" filters the draft defaults to
    fn preselect_filter_defaults(&mut self) {
        self.time_period.preselect("any");
        self.rating.preselect("any-rating");
        self.popularity.preselect("any");
    }

    /// The group backing a detail step
    pub fn detail(&self, kind: DetailKind) -> &CardGroup {
        match kind {
            DetailKind::Content => &self.content,
            DetailKind::Mood => &self.mood,
            DetailKind::Discovery => &self.discovery,
            DetailKind::Regional => &self.regional,
        }
    }

    /// Mutable access to the group backing a detail step
    pub fn detail_mut(&mut self, kind: DetailKind) -> &mut CardGroup {
        match kind {
            DetailKind::Content => &mut self.content,
            DetailKind::Mood => &mut self.mood,
            DetailKind::Discovery => &mut self.discovery,
            DetailKind::Regional => &mut self.regional,
        }
    }

    /// Clear every selection (start over)
    pub fn clear_all(&mut self) {
        self.intro.clear();
        self.content.clear();
        self.mood.clear();
        self.discovery.clear();
        self.regional.clear();
        self.genres.clear();
        self.time_period.clear();
        self.rating.clear();
        self.popularity.clear();
        self.preselect_filter_defaults();
    }
}

/// Result of one background fetch, tagged with its request generation
type FetchMessage = (u64, Result<Vec<Movie>, ReelGuideError>);

/// Main application state
pub struct App<'a> {
    /// Application settings
    pub settings: &'a Settings,

    /// The wizard state machine
    pub machine: WizardMachine,

    /// Card groups for every step
    pub groups: StepGroups,

    /// Whether the app should quit
    pub should_quit: bool,

    /// State of the recommendation fetch
    pub fetch: FetchState,

    /// Focused filter group on the preferences form (0..PREFS_GROUPS)
    pub prefs_focus: usize,

    /// Selected movie card on the results view
    pub results_cursor: usize,

    /// Locally bookmarked result indices; never persisted or transmitted
    pub bookmarks: HashSet<usize>,

    /// Blocking alert dialog, if any
    pub alert: Option<Alert>,

    /// Transient status message
    pub status_message: Option<String>,

    /// Warnings collected while materializing the card catalog
    pub startup_warnings: Vec<String>,

    fetch_tx: mpsc::Sender<FetchMessage>,
    fetch_rx: mpsc::Receiver<FetchMessage>,
    fetch_generation: u64,
}

impl<'a> App<'a> {
    /// Create a new App instance
    pub fn new(settings: &'a Settings) -> Self {
        let groups = StepGroups::from_catalog();
        let (fetch_tx, fetch_rx) = mpsc::channel();

        let mut app = Self {
            settings,
            machine: WizardMachine::new(),
            groups,
            should_quit: false,
            fetch: FetchState::Idle,
            prefs_focus: 0,
            results_cursor: 0,
            bookmarks: HashSet::new(),
            alert: None,
            status_message: None,
            startup_warnings: Vec::new(),
            fetch_tx,
            fetch_rx,
            fetch_generation: 0,
        };
        app.check_catalog();
        app
    }

    /// Record a warning for any catalog group that materialized empty.
    /// The affected step is inert for the session rather than fatal.
    fn check_catalog(&mut self) {
        let checks: [(&str, bool); 6] = [
            ("recommendation types", self.groups.intro.is_empty()),
            ("content options", self.groups.content.is_empty()),
            ("moods", self.groups.mood.is_empty()),
            ("discovery options", self.groups.discovery.is_empty()),
            ("regions", self.groups.regional.is_empty()),
            ("genres", self.groups.genres.is_empty()),
        ];
        for (name, empty) in checks {
            if empty {
                self.startup_warnings
                    .push(format!("No {} available; that step is disabled", name));
            }
        }
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Set a transient status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Clear the status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Show a blocking alert
    pub fn show_alert(&mut self, alert: Alert) {
        self.alert = Some(alert);
    }

    /// Dismiss the blocking alert
    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }

    /// Whether an alert is being shown
    pub fn has_alert(&self) -> bool {
        self.alert.is_some()
    }

    /// Presentation defaults for movie rendering, from settings
    pub fn render_defaults(&self) -> RenderDefaults {
        RenderDefaults {
            placeholder_poster_path: self.settings.placeholder_poster_path.clone(),
            default_region: self.settings.default_region.clone(),
        }
    }

    /// The card group the cursor operates on for the active step, if any
    pub fn active_group_mut(&mut self) -> Option<&mut CardGroup> {
        match self.machine.step() {
            Step::Intro => Some(&mut self.groups.intro),
            Step::Detail(kind) => Some(self.groups.detail_mut(kind)),
            Step::GenrePicker => Some(&mut self.groups.genres),
            Step::PreferencesForm => Some(match self.prefs_focus {
                0 => &mut self.groups.time_period,
                1 => &mut self.groups.rating,
                _ => &mut self.groups.popularity,
            }),
            Step::Results => None,
        }
    }

    /// Grid column count used for cursor movement on the active step
    pub fn active_columns(&self) -> usize {
        match self.machine.step() {
            Step::GenrePicker => 3,
            Step::PreferencesForm => self.active_group_len(),
            _ => 2,
        }
    }

    fn active_group_len(&self) -> usize {
        match self.prefs_focus {
            0 => self.groups.time_period.len(),
            1 => self.groups.rating.len(),
            _ => self.groups.popularity.len(),
        }
    }

    /// Submit the preferences form: record the filter selections, move the
    /// machine to Results and issue the one network call on a worker
    /// thread. Ignored while a request is already outstanding.
    pub fn submit(&mut self) {
        if self.fetch == FetchState::Loading {
            self.set_status("Still fetching, hold on...");
            return;
        }

        let draft = self.machine.submit(
            self.groups.time_period.read_single(),
            self.groups.rating.read_single(),
            self.groups.popularity.read_single(),
        );

        self.fetch = FetchState::Loading;
        self.results_cursor = 0;
        self.bookmarks.clear();
        self.fetch_generation += 1;

        let generation = self.fetch_generation;
        let tx = self.fetch_tx.clone();
        let client = RecommendationClient::new(self.settings.recommendations_url());

        thread::spawn(move || {
            let result = client.fetch(&draft);
            // The receiver is gone when the app has quit; nothing to do.
            let _ = tx.send((generation, result));
        });
    }

    /// Drain finished fetches. Responses from superseded requests (an
    /// earlier generation) are dropped.
    pub fn poll_fetch(&mut self) {
        while let Ok((generation, result)) = self.fetch_rx.try_recv() {
            if generation != self.fetch_generation {
                continue;
            }
            self.fetch = match result {
                Ok(movies) => FetchState::Loaded(movies),
                Err(err) => FetchState::Failed(err.to_string()),
            };
        }
    }

    /// "Start over" from Results. The in-flight request (if any) cannot be
    /// aborted; bumping the generation drops its eventual response.
    pub fn start_over(&mut self) {
        self.machine.start_over();
        self.groups.clear_all();
        self.fetch = FetchState::Idle;
        self.fetch_generation += 1;
        self.results_cursor = 0;
        self.bookmarks.clear();
        self.prefs_focus = 0;
        self.clear_status();
    }

    /// "Refine" from Results: back to the form with the draft retained
    pub fn refine(&mut self) {
        self.machine.refine();
        self.clear_status();
    }

    /// Number of movies currently shown on the results view
    pub fn result_count(&self) -> usize {
        match &self.fetch {
            FetchState::Loaded(movies) => movies.len(),
            _ => 0,
        }
    }

    /// Toggle the bookmark on the highlighted result card
    pub fn toggle_bookmark(&mut self) {
        if self.result_count() == 0 {
            return;
        }
        let index = self.results_cursor;
        if !self.bookmarks.insert(index) {
            self.bookmarks.remove(&index);
        }
    }

    /// "Watch" the highlighted result; purely a local notice
    pub fn watch_selected(&mut self) {
        if let FetchState::Loaded(movies) = &self.fetch {
            if let Some(movie) = movies.get(self.results_cursor) {
                let message = format!(
                    "This would start \"{}\" in a real application.",
                    movie.title
                );
                self.set_status(message);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> Settings {
        Settings::default()
    }

    #[test]
    fn test_new_app_starts_at_intro() {
        let settings = settings();
        let app = App::new(&settings);
        assert_eq!(app.machine.step(), Step::Intro);
        assert_eq!(app.fetch, FetchState::Idle);
        assert!(app.startup_warnings.is_empty());
    }

    #[test]
    fn test_filter_groups_preselect_defaults() {
        let settings = settings();
        let app = App::new(&settings);
        assert_eq!(app.groups.time_period.read_single(), "any");
        assert_eq!(app.groups.rating.read_single(), "any-rating");
        assert_eq!(app.groups.popularity.read_single(), "any");
    }

    #[test]
    fn test_start_over_clears_selections() {
        let settings = settings();
        let mut app = App::new(&settings);

        app.groups.intro.select(0);
        app.machine.confirm_intro("content").unwrap();
        app.machine.confirm_detail("classic").unwrap();
        app.machine.confirm_genres(vec!["Action".into()]).unwrap();
        app.machine
            .submit(String::new(), String::new(), String::new());

        app.start_over();
        assert_eq!(app.machine.step(), Step::Intro);
        assert_eq!(app.groups.intro.read_single(), "");
        assert!(app.groups.genres.read_multi().is_empty());
        // Filter defaults come back after the reset
        assert_eq!(app.groups.rating.read_single(), "any-rating");
    }

    #[test]
    fn test_bookmark_toggles() {
        let settings = settings();
        let mut app = App::new(&settings);
        app.fetch = FetchState::Loaded(vec![Movie {
            title: "Heat".into(),
            year: 1995,
            rating: 7.9,
            overview: String::new(),
            genres: vec![],
            poster_path: None,
            region: None,
        }]);

        app.toggle_bookmark();
        assert!(app.bookmarks.contains(&0));
        app.toggle_bookmark();
        assert!(!app.bookmarks.contains(&0));
    }

    #[test]
    fn test_submit_ignored_while_fetch_outstanding() {
        let settings = settings();
        let mut app = App::new(&settings);

        app.machine.confirm_intro("content").unwrap();
        app.machine.confirm_detail("classic").unwrap();
        app.machine.confirm_genres(vec!["Action".into()]).unwrap();
        assert_eq!(app.machine.step(), Step::PreferencesForm);

        app.fetch = FetchState::Loading;
        let generation = app.fetch_generation;

        app.submit();
        assert_eq!(app.machine.step(), Step::PreferencesForm);
        assert_eq!(app.fetch_generation, generation);
        assert_eq!(app.fetch, FetchState::Loading);
    }

    #[test]
    fn test_failed_fetch_keeps_step_and_draft() {
        let settings = settings();
        let mut app = App::new(&settings);

        app.machine.confirm_intro("mood").unwrap();
        app.machine.confirm_detail("happy").unwrap();
        app.machine.confirm_genres(vec!["Comedy".into()]).unwrap();
        let draft = app
            .machine
            .submit(String::new(), String::new(), String::new());
        app.fetch = FetchState::Loading;

        app.fetch_tx
            .send((
                app.fetch_generation,
                Err(ReelGuideError::Fetch("connection refused".into())),
            ))
            .unwrap();
        app.poll_fetch();

        assert!(matches!(app.fetch, FetchState::Failed(_)));
        assert_eq!(app.machine.step(), Step::Results);
        assert_eq!(app.machine.draft(), &draft);
    }

    #[test]
    fn test_stale_fetch_response_dropped() {
        let settings = settings();
        let mut app = App::new(&settings);

        // Simulate a response from a request that was superseded by
        // "start over".
        let stale_generation = app.fetch_generation;
        app.start_over();
        app.fetch_tx.send((stale_generation, Ok(vec![]))).unwrap();

        app.poll_fetch();
        assert_eq!(app.fetch, FetchState::Idle);
    }
}
