//! TUI state algebra: pure types, zero effects.
//!
//! These types define the entire UI state space. The transition function
//! and the rendering layer both program against them. Screen variants
//! carry only per-screen transient state (focus, cursors); the form entity
//! and its error map are shared and live in [`App`].

use crossterm::event::KeyEvent;
use time::Date;

use crate::catalog::ALLOWED_START_DATES;
use crate::form::{FieldErrors, RegistrationForm, SubmissionPhase};

// ============================================================================
// APP EVENTS
// ============================================================================

/// Everything the event loop can receive from its channel.
///
/// Two producers feed a single mpsc channel:
/// - A key reader thread sends `Key` variants
/// - The submission timer thread sends `SubmitDone`
#[derive(Debug)]
pub enum AppEvent {
    /// A terminal key event from the crossterm reader thread.
    Key(KeyEvent),
    /// The simulated submission round trip finished.
    ///
    /// Carries the token issued when the submission started, so completions
    /// from superseded submissions can be recognized and dropped.
    SubmitDone { token: u64 },
}

// ============================================================================
// APPLICATION STATE
// ============================================================================

/// Top-level TUI model.
///
/// Owns the shared data (the form entity and its error map) and the
/// current screen. The effects layer reads this to know what to render.
#[derive(Debug)]
pub struct App {
    /// Current screen — carries per-screen transient state.
    pub screen: Screen,

    /// The registration form, shared across screens.
    pub form: RegistrationForm,

    /// Field errors from the last submit attempt. Derived state: only a
    /// validation pass writes it, only the post-submit reset clears it.
    pub errors: FieldErrors,

    /// Token of the submission currently in flight. Bumped on every
    /// accepted submit; completions carrying an older token are stale.
    pub submit_token: u64,

    /// Set to true when the app should exit on the next tick.
    pub should_quit: bool,
}

impl App {
    /// Fresh app: empty form, no errors, focus on the course field.
    pub fn new() -> Self {
        App {
            screen: Screen::default(),
            form: RegistrationForm::new(),
            errors: FieldErrors::new(),
            submit_token: 0,
            should_quit: false,
        }
    }

    /// The explicit submission lifecycle phase, derived from the screen.
    pub fn phase(&self) -> SubmissionPhase {
        self.screen.phase()
    }
}

impl Default for App {
    fn default() -> Self {
        App::new()
    }
}

// ============================================================================
// FOCUS
// ============================================================================

/// Which form widget currently has keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Course,
    Subject,
    StartDate,
    Notes,
    Submit,
}

impl Focus {
    /// Next widget in tab order, wrapping at the end.
    pub fn next(self) -> Focus {
        match self {
            Focus::Course => Focus::Subject,
            Focus::Subject => Focus::StartDate,
            Focus::StartDate => Focus::Notes,
            Focus::Notes => Focus::Submit,
            Focus::Submit => Focus::Course,
        }
    }

    /// Previous widget in tab order, wrapping at the start.
    pub fn prev(self) -> Focus {
        match self {
            Focus::Course => Focus::Submit,
            Focus::Subject => Focus::Course,
            Focus::StartDate => Focus::Subject,
            Focus::Notes => Focus::StartDate,
            Focus::Submit => Focus::Notes,
        }
    }
}

// ============================================================================
// SCREENS
// ============================================================================

/// The current UI screen.
///
/// Each variant is a state in the form's state machine. Overlay variants
/// (subject menu, date picker) carry their own cursor; the form data they
/// edit lives in [`App::form`].
#[derive(Debug, Clone, PartialEq)]
pub enum Screen {
    /// The registration form, editable.
    Form { focus: Focus },

    /// Subject dropdown open. Cursor indexes the current course's options.
    SubjectMenu { cursor: usize },

    /// Date picker open. The cursor date is what Enter would select.
    DatePicker { cursor: Date },

    /// Submission accepted; the simulated round trip is pending. Input is
    /// ignored until the timer fires (UI affordance only — the form data
    /// itself is not locked).
    Submitting,

    /// Success dialog up. The form was already reset before this screen
    /// became visible, so closing it changes nothing else.
    Success,
}

/// Default screen is the form with the course field focused.
impl Default for Screen {
    fn default() -> Self {
        Screen::Form { focus: Focus::Course }
    }
}

impl Screen {
    /// Form screen focused on a given widget.
    pub fn form(focus: Focus) -> Self {
        Screen::Form { focus }
    }

    /// Subject menu opened at the top.
    pub fn subject_menu() -> Self {
        Screen::SubjectMenu { cursor: 0 }
    }

    /// Date picker with the cursor on a sensible starting date: the
    /// already-chosen date if any, else the first offered date.
    pub fn date_picker(current: Option<Date>) -> Self {
        Screen::DatePicker {
            cursor: current.unwrap_or(ALLOWED_START_DATES[0]),
        }
    }

    /// Map the screen onto the explicit submission phase.
    pub fn phase(&self) -> SubmissionPhase {
        match self {
            Screen::Submitting => SubmissionPhase::Submitting,
            Screen::Success => SubmissionPhase::Done,
            _ => SubmissionPhase::Idle,
        }
    }
}

// ============================================================================
// ACTIONS
// ============================================================================

/// Semantic user action, decoupled from raw key events.
///
/// The effects layer maps key presses to Actions (context-sensitively,
/// since the notes field consumes printable characters). The transition
/// function decides what each Action means per Screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Move focus / cursor up.
    MoveUp,
    /// Move focus / cursor down.
    MoveDown,
    /// Move left: previous radio option, previous calendar day.
    MoveLeft,
    /// Move right: next radio option, next calendar day.
    MoveRight,
    /// Focus the next widget in tab order.
    FocusNext,
    /// Focus the previous widget in tab order.
    FocusPrev,
    /// Activate the focused widget: toggle radio, open dropdown/picker,
    /// confirm a menu choice, press the submit button, close the dialog.
    Activate,
    /// Dismiss an overlay / close the success dialog.
    Back,
    /// Pick a course directly by its position (1-3).
    NumberKey(u8),
    /// Type a character into the notes field.
    Insert(char),
    /// Delete the last notes character.
    Backspace,
    /// Quit the application.
    Quit,
}

// ============================================================================
// TRANSITIONS
// ============================================================================

/// Result of a pure state transition.
///
/// The update function returns this. The effects boundary inspects it
/// to decide what to render and which side effects to execute.
#[derive(Debug, PartialEq)]
pub enum Transition {
    /// Render this screen (may be the same or a different screen).
    Screen(Screen),
    /// Quit the application.
    Quit,
    /// Execute a side effect. The effects layer handles it.
    Effect(Effect),
}

/// Side effect requested by a pure transition.
///
/// Pure code never executes these — it only describes them.
#[derive(Debug, PartialEq)]
pub enum Effect {
    /// Start the simulated submission round trip. The effects boundary
    /// switches to [`Screen::Submitting`], issues a fresh token, and arms
    /// the delay timer.
    BeginSubmit,
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn new_app_is_idle_and_empty() {
        let app = App::new();
        assert_eq!(app.screen, Screen::Form { focus: Focus::Course });
        assert_eq!(app.form, RegistrationForm::new());
        assert!(app.errors.is_empty());
        assert_eq!(app.phase(), SubmissionPhase::Idle);
        assert!(!app.should_quit);
    }

    #[test]
    fn focus_tab_order_round_trips() {
        let order = [
            Focus::Course,
            Focus::Subject,
            Focus::StartDate,
            Focus::Notes,
            Focus::Submit,
        ];
        for f in order {
            assert_eq!(f.next().prev(), f);
        }
        assert_eq!(Focus::Submit.next(), Focus::Course);
        assert_eq!(Focus::Course.prev(), Focus::Submit);
    }

    #[test]
    fn date_picker_opens_on_chosen_date() {
        let chosen = date!(2020 - 03 - 01);
        assert_eq!(
            Screen::date_picker(Some(chosen)),
            Screen::DatePicker { cursor: chosen }
        );
    }

    #[test]
    fn date_picker_defaults_to_first_offered_date() {
        assert_eq!(
            Screen::date_picker(None),
            Screen::DatePicker { cursor: ALLOWED_START_DATES[0] }
        );
    }

    #[test]
    fn screen_phase_mapping() {
        assert_eq!(Screen::default().phase(), SubmissionPhase::Idle);
        assert_eq!(Screen::subject_menu().phase(), SubmissionPhase::Idle);
        assert_eq!(Screen::Submitting.phase(), SubmissionPhase::Submitting);
        assert_eq!(Screen::Success.phase(), SubmissionPhase::Done);
    }

    #[test]
    fn action_equality_for_matching() {
        assert_eq!(Action::Insert('x'), Action::Insert('x'));
        assert_ne!(Action::Insert('x'), Action::Insert('y'));
        assert_eq!(Action::NumberKey(2), Action::NumberKey(2));
    }
}
