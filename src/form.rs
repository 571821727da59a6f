//! The registration form entity: owned field state and its lifecycle.
//!
//! One in-memory entity for the lifetime of the session. Mutation is
//! confined to the designated setters here; validation lives in
//! [`crate::validate`] and only reads.

use std::collections::BTreeMap;

use time::Date;

use crate::catalog::Course;

// ============================================================================
// FIELD KEYS
// ============================================================================

/// The form fields that can carry a validation error.
///
/// Ordered so error maps iterate top-to-bottom in form layout order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Field {
    Course,
    Subject,
    StartDate,
    Notes,
}

/// Field → human-readable message, recomputed on every validation pass.
pub type FieldErrors = BTreeMap<Field, String>;

// ============================================================================
// SUBMISSION PHASE
// ============================================================================

/// The submission lifecycle, made explicit rather than derived from a
/// boolean and a pending timeout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionPhase {
    /// Editable; no submission in flight.
    Idle,
    /// Submission accepted, simulated round trip pending.
    Submitting,
    /// Round trip finished; the success dialog is up.
    Done,
}

// ============================================================================
// FORM ENTITY
// ============================================================================

/// All user-entered registration state.
///
/// Created empty when the view mounts, mutated in place by field-change
/// events, reset to empty on successful submission.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegistrationForm {
    /// Selected course; `None` until the user picks a radio option.
    pub course: Option<Course>,
    /// Selected subject slug; valid only relative to `course`.
    pub subject: Option<String>,
    /// Chosen start date; accepted only if on the catalog allow-list.
    pub start_date: Option<Date>,
    /// Optional free-text notes.
    pub notes: String,
}

impl RegistrationForm {
    /// Empty form, as on first render.
    pub fn new() -> Self {
        Self::default()
    }

    /// Select a course. Switching to a different course drops any chosen
    /// subject: the old selection no longer exists in the new option list.
    pub fn set_course(&mut self, course: Course) {
        if self.course != Some(course) {
            self.subject = None;
        }
        self.course = Some(course);
    }

    /// Select a subject by slug.
    pub fn set_subject(&mut self, slug: impl Into<String>) {
        self.subject = Some(slug.into());
    }

    /// Set or clear the start date.
    pub fn set_start_date(&mut self, date: Option<Date>) {
        self.start_date = date;
    }

    /// Append one character to the notes.
    pub fn push_note_char(&mut self, c: char) {
        self.notes.push(c);
    }

    /// Delete the last character of the notes, if any.
    pub fn pop_note_char(&mut self) {
        self.notes.pop();
    }

    /// Notes length in characters, the unit the length rule is stated in.
    pub fn notes_len(&self) -> usize {
        self.notes.chars().count()
    }

    /// Return every field to its empty initial state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_form_is_empty() {
        let form = RegistrationForm::new();
        assert_eq!(form.course, None);
        assert_eq!(form.subject, None);
        assert_eq!(form.start_date, None);
        assert!(form.notes.is_empty());
    }

    #[test]
    fn changing_course_clears_subject() {
        let mut form = RegistrationForm::new();
        form.set_course(Course::ComputerSciences);
        form.set_subject("web-development");

        form.set_course(Course::EnglishLiterature);
        assert_eq!(form.course, Some(Course::EnglishLiterature));
        assert_eq!(form.subject, None);
    }

    #[test]
    fn reselecting_same_course_keeps_subject() {
        let mut form = RegistrationForm::new();
        form.set_course(Course::EnglishLiterature);
        form.set_subject("poetry");

        form.set_course(Course::EnglishLiterature);
        assert_eq!(form.subject.as_deref(), Some("poetry"));
    }

    #[test]
    fn notes_editing() {
        let mut form = RegistrationForm::new();
        form.push_note_char('h');
        form.push_note_char('i');
        assert_eq!(form.notes, "hi");
        form.pop_note_char();
        assert_eq!(form.notes, "h");
        form.pop_note_char();
        form.pop_note_char(); // pop on empty is a no-op
        assert!(form.notes.is_empty());
    }

    #[test]
    fn notes_len_counts_chars_not_bytes() {
        let mut form = RegistrationForm::new();
        for _ in 0..5 {
            form.push_note_char('é');
        }
        assert_eq!(form.notes_len(), 5);
        assert_eq!(form.notes.len(), 10);
    }

    #[test]
    fn reset_returns_to_initial_state() {
        let mut form = RegistrationForm::new();
        form.set_course(Course::TechnicalReportWriting);
        form.set_subject("short-reports");
        form.set_start_date(Some(time::macros::date!(2019 - 12 - 20)));
        form.push_note_char('x');

        form.reset();
        assert_eq!(form, RegistrationForm::new());
    }

    #[test]
    fn field_order_matches_layout() {
        assert!(Field::Course < Field::Subject);
        assert!(Field::Subject < Field::StartDate);
        assert!(Field::StartDate < Field::Notes);
    }
}
