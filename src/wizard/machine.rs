//! The wizard step state machine
//!
//! A pure state machine over the wizard's steps, driven by discrete user
//! actions. It owns the preference draft and enforces the invariant that
//! exactly one step is active at any time. No I/O and no rendering happen
//! here; validation failures suppress the transition and leave the draft
//! untouched.

use crate::error::{ReelGuideError, ReelGuideResult};
use crate::models::PreferenceDraft;

/// Which detail step a recommendation type leads to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailKind {
    Content,
    Mood,
    Discovery,
    Regional,
}

impl DetailKind {
    /// Map a recommendation-type value to its detail step
    pub fn for_type(value: &str) -> Option<Self> {
        match value {
            "content" => Some(Self::Content),
            "mood" => Some(Self::Mood),
            "discovery" => Some(Self::Discovery),
            "regional" => Some(Self::Regional),
            _ => None,
        }
    }

    /// What the detail step asks the user to pick
    pub fn prompt(&self) -> &'static str {
        match self {
            Self::Content => "an option",
            Self::Mood => "your mood",
            Self::Discovery => "a discovery type",
            Self::Regional => "a region",
        }
    }
}

/// One of the wizard's steps; exactly one is active at any time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Pick a recommendation type
    Intro,
    /// Pick the type-specific refinement
    Detail(DetailKind),
    /// Pick one or more genres
    GenrePicker,
    /// Tune period/rating/popularity filters and submit
    PreferencesForm,
    /// Rendered recommendations
    Results,
}

/// Visual state of one progress-strip indicator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndicatorState {
    Completed,
    Active,
    Upcoming,
}

/// Number of steps on the progress scale (Results is not part of it)
pub const PROGRESS_STEPS: u8 = 4;

/// Progress percentage for a 1-based step number
pub fn progress_percent(step_number: u8) -> f64 {
    f64::from(step_number.saturating_sub(1)) * 33.3
}

/// Visual state of indicator `indicator` (1-based) when `active` is the
/// current step number
pub fn indicator_state(indicator: u8, active: u8) -> IndicatorState {
    if indicator < active {
        IndicatorState::Completed
    } else if indicator == active {
        IndicatorState::Active
    } else {
        IndicatorState::Upcoming
    }
}

/// The wizard state machine
#[derive(Debug, Clone)]
pub struct WizardMachine {
    /// The active step
    step: Step,
    /// The in-progress preference draft
    draft: PreferenceDraft,
    /// Which detail step the genre picker was entered from. The picker is
    /// shared across four entry paths, so "back" needs this to return to
    /// the right one.
    origin: Option<DetailKind>,
}

impl Default for WizardMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl WizardMachine {
    /// Create a machine at the intro step with an empty draft
    pub fn new() -> Self {
        Self {
            step: Step::Intro,
            draft: PreferenceDraft::new(),
            origin: None,
        }
    }

    /// The currently active step
    pub fn step(&self) -> Step {
        self.step
    }

    /// The in-progress draft
    pub fn draft(&self) -> &PreferenceDraft {
        &self.draft
    }

    /// 1-based step number on the progress scale, or `None` for Results
    pub fn progress_step(&self) -> Option<u8> {
        match self.step {
            Step::Intro => Some(1),
            Step::Detail(_) => Some(2),
            Step::GenrePicker => Some(3),
            Step::PreferencesForm => Some(4),
            Step::Results => None,
        }
    }

    /// Confirm the intro step with the selected recommendation type.
    ///
    /// An empty selection is a validation error; the transition is
    /// suppressed and the draft is unchanged.
    pub fn confirm_intro(&mut self, selection: &str) -> ReelGuideResult<()> {
        debug_assert_eq!(self.step, Step::Intro);

        if selection.is_empty() {
            return Err(ReelGuideError::nothing_selected("a recommendation type"));
        }
        let kind = DetailKind::for_type(selection).ok_or_else(|| {
            ReelGuideError::Validation(format!("Unknown recommendation type: '{}'", selection))
        })?;

        self.draft.recommendation_type = selection.to_string();
        self.origin = Some(kind);
        self.step = Step::Detail(kind);
        Ok(())
    }

    /// Confirm a detail step with the selected sub-type
    pub fn confirm_detail(&mut self, selection: &str) -> ReelGuideResult<()> {
        let kind = match self.step {
            Step::Detail(kind) => kind,
            _ => return Err(ReelGuideError::Validation("Not on a detail step".into())),
        };

        if selection.is_empty() {
            return Err(ReelGuideError::nothing_selected(kind.prompt()));
        }

        self.draft.sub_type = selection.to_string();
        self.step = Step::GenrePicker;
        Ok(())
    }

    /// Confirm the genre picker; the genre list must be non-empty
    pub fn confirm_genres(&mut self, selection: Vec<String>) -> ReelGuideResult<()> {
        debug_assert_eq!(self.step, Step::GenrePicker);

        if selection.is_empty() {
            return Err(ReelGuideError::nothing_selected("at least one genre"));
        }

        self.draft.genre = selection;
        self.step = Step::PreferencesForm;
        Ok(())
    }

    /// Submit the preferences form. Empty filter selections fall back to
    /// their defaults. Returns a snapshot of the finished draft for the
    /// network call and moves to Results.
    pub fn submit(
        &mut self,
        time_period: String,
        rating: String,
        popularity: String,
    ) -> PreferenceDraft {
        debug_assert_eq!(self.step, Step::PreferencesForm);

        if !time_period.is_empty() {
            self.draft.time_period = time_period;
        }
        if !rating.is_empty() {
            self.draft.rating = rating;
        }
        if !popularity.is_empty() {
            self.draft.popularity = popularity;
        }

        self.step = Step::Results;
        self.draft.clone()
    }

    /// Go back one step. A no-op on Intro and Results.
    pub fn go_back(&mut self) {
        self.step = match self.step {
            Step::Intro => Step::Intro,
            Step::Detail(_) => Step::Intro,
            Step::GenrePicker => match self.origin {
                Some(kind) => Step::Detail(kind),
                // Unreachable through normal navigation; fall back to Intro
                None => Step::Intro,
            },
            Step::PreferencesForm => Step::GenrePicker,
            Step::Results => Step::Results,
        };
    }

    /// "Start over" from Results: reset the draft and return to Intro
    pub fn start_over(&mut self) {
        self.draft.reset();
        self.origin = None;
        self.step = Step::Intro;
    }

    /// "Refine" from Results: return to the preferences form, draft retained
    pub fn refine(&mut self) {
        self.step = Step::PreferencesForm;
    }
}
