//! Pure state transitions: (Screen, Action) → Transition.
//!
//! This is the core logic of the form. Fully testable without a terminal.
//! Each screen defines which actions it accepts; unhandled actions return
//! the current screen unchanged (no-op). Field edits mutate the form
//! entity directly but never validate — validation happens only on submit.

use time::Duration;

use crate::catalog::{slugify, subject_options, COURSES};
use crate::form::{FieldErrors, RegistrationForm};
use crate::validate::validate;

use super::state::{Action, App, Effect, Focus, Screen, Transition};

/// Pure state transition function.
///
/// Given the current screen, an action, the form entity, and the error
/// map, produces the next transition. The effects boundary interprets
/// the result.
pub fn update(
    screen: Screen,
    action: &Action,
    form: &mut RegistrationForm,
    errors: &mut FieldErrors,
) -> Transition {
    match screen {
        Screen::Form { focus } => update_form(focus, action, form, errors),
        Screen::SubjectMenu { cursor } => update_subject_menu(cursor, action, form),
        Screen::DatePicker { cursor } => update_date_picker(cursor, action, form),
        // Submitting is driven by the timer, not user actions
        Screen::Submitting => noop(screen, action),
        Screen::Success => update_success(action),
    }
}

/// Handle the submission timer firing.
///
/// A completion is honored only if its token matches the in-flight
/// submission and the app is still on the submitting screen; anything
/// else is a stale timer from a superseded submission. The form reset
/// happens strictly before the success dialog becomes visible, so the
/// dialog never flashes stale field contents.
pub fn handle_submit_done(app: &mut App, token: u64) {
    if token != app.submit_token || app.screen != Screen::Submitting {
        return;
    }
    app.form.reset();
    app.errors.clear();
    app.screen = Screen::Success;
}

// ============================================================================
// PER-SCREEN HANDLERS
// ============================================================================

/// The form itself: focus movement plus per-widget editing.
fn update_form(
    focus: Focus,
    action: &Action,
    form: &mut RegistrationForm,
    errors: &mut FieldErrors,
) -> Transition {
    match action {
        Action::Quit => return Transition::Quit,
        Action::FocusNext | Action::MoveDown => {
            return Transition::Screen(Screen::form(focus.next()));
        }
        Action::FocusPrev | Action::MoveUp => {
            return Transition::Screen(Screen::form(focus.prev()));
        }
        _ => {}
    }

    match focus {
        Focus::Course => update_course_field(action, form),
        Focus::Subject => match action {
            Action::Activate => Transition::Screen(subject_menu_at_selection(form)),
            _ => stay(focus),
        },
        Focus::StartDate => match action {
            Action::Activate => Transition::Screen(Screen::date_picker(form.start_date)),
            _ => stay(focus),
        },
        Focus::Notes => match action {
            Action::Insert(c) => {
                form.push_note_char(*c);
                stay(focus)
            }
            Action::Backspace => {
                form.pop_note_char();
                stay(focus)
            }
            _ => stay(focus),
        },
        Focus::Submit => match action {
            Action::Activate => {
                *errors = validate(form);
                if errors.is_empty() {
                    Transition::Effect(Effect::BeginSubmit)
                } else {
                    stay(focus)
                }
            }
            _ => stay(focus),
        },
    }
}

/// Course radio group: left/right cycles, 1-3 picks directly.
fn update_course_field(action: &Action, form: &mut RegistrationForm) -> Transition {
    match action {
        Action::MoveRight | Action::Activate => {
            let next = match form.course {
                Some(c) => c.next(),
                None => COURSES[0],
            };
            form.set_course(next);
        }
        Action::MoveLeft => {
            let prev = match form.course {
                Some(c) => c.prev(),
                None => COURSES[COURSES.len() - 1],
            };
            form.set_course(prev);
        }
        Action::NumberKey(n) => {
            if let Some(&course) = (*n as usize)
                .checked_sub(1)
                .and_then(|i| COURSES.get(i))
            {
                form.set_course(course);
            }
        }
        _ => {}
    }
    stay(Focus::Course)
}

/// Subject dropdown: cursor movement, Enter selects, Esc cancels.
fn update_subject_menu(
    cursor: usize,
    action: &Action,
    form: &mut RegistrationForm,
) -> Transition {
    let options = subject_options(form.course);
    let len = options.len();

    match action {
        Action::MoveUp => Transition::Screen(Screen::SubjectMenu {
            cursor: cursor.saturating_sub(1),
        }),
        Action::MoveDown => {
            let new_cursor = if len == 0 { 0 } else { (cursor + 1).min(len - 1) };
            Transition::Screen(Screen::SubjectMenu { cursor: new_cursor })
        }
        Action::Activate => {
            if let Some(label) = options.get(cursor) {
                form.set_subject(slugify(label));
            }
            Transition::Screen(Screen::form(Focus::Subject))
        }
        Action::Back => Transition::Screen(Screen::form(Focus::Subject)),
        Action::Quit => Transition::Quit,
        _ => Transition::Screen(Screen::SubjectMenu { cursor }),
    }
}

/// Date picker: arrows move by day/week, Enter picks, Esc cancels.
fn update_date_picker(
    cursor: time::Date,
    action: &Action,
    form: &mut RegistrationForm,
) -> Transition {
    let moved = |d: Option<time::Date>| {
        Transition::Screen(Screen::DatePicker {
            cursor: d.unwrap_or(cursor),
        })
    };

    match action {
        Action::MoveLeft => moved(cursor.previous_day()),
        Action::MoveRight => moved(cursor.next_day()),
        Action::MoveUp => moved(cursor.checked_sub(Duration::weeks(1))),
        Action::MoveDown => moved(cursor.checked_add(Duration::weeks(1))),
        Action::Activate => {
            form.set_start_date(Some(cursor));
            Transition::Screen(Screen::form(Focus::StartDate))
        }
        Action::Back => Transition::Screen(Screen::form(Focus::StartDate)),
        Action::Quit => Transition::Quit,
        _ => Transition::Screen(Screen::DatePicker { cursor }),
    }
}

/// Success dialog: any dismissal returns to the (already reset) form.
fn update_success(action: &Action) -> Transition {
    match action {
        Action::Activate | Action::Back => Transition::Screen(Screen::default()),
        Action::Quit => Transition::Quit,
        _ => Transition::Screen(Screen::Success),
    }
}

/// No-op handler: only Quit is accepted.
fn noop(screen: Screen, action: &Action) -> Transition {
    match action {
        Action::Quit => Transition::Quit,
        _ => Transition::Screen(screen),
    }
}

// ============================================================================
// HELPERS
// ============================================================================

fn stay(focus: Focus) -> Transition {
    Transition::Screen(Screen::form(focus))
}

/// Open the subject menu with the cursor on the currently chosen subject.
fn subject_menu_at_selection(form: &RegistrationForm) -> Screen {
    let cursor = match (&form.subject, form.course) {
        (Some(slug), Some(course)) => course
            .subjects()
            .iter()
            .position(|label| slugify(label) == *slug)
            .unwrap_or(0),
        _ => 0,
    };
    Screen::SubjectMenu { cursor }
}

// ============================================================================
// TESTS
// ============================================================================
