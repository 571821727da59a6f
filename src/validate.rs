//! Submit-time validation: pure functions over the form entity.
//!
//! All applicable errors are collected in one pass — no short-circuit.
//! Nothing here mutates; the caller decides what to do with the map.

use crate::catalog::is_allowed_start_date;
use crate::form::{Field, FieldErrors, RegistrationForm};

/// Inclusive notes length bounds, in characters. Applied only when the
/// notes field is non-empty.
pub const NOTES_MIN_LEN: usize = 20;
pub const NOTES_MAX_LEN: usize = 500;

/// Validate the form, returning every field error found.
///
/// The returned map is empty iff the form is valid. Deterministic and
/// idempotent: the same form state always yields the same map.
pub fn validate(form: &RegistrationForm) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if form.course.is_none() {
        errors.insert(Field::Course, "Please choose course.".into());
    }

    // The two subject rules are mutually exclusive: both require the
    // subject to be unset, and they split on whether a course is chosen.
    if form.course.is_none() && form.subject.is_none() {
        errors.insert(Field::Subject, "Please choose any course first.".into());
    }

    if form.course.is_some() && form.subject.is_none() {
        errors.insert(Field::Subject, "Please choose any subject.".into());
    }

    match form.start_date {
        None => {
            errors.insert(Field::StartDate, "Please enter start date.".into());
        }
        // One global allow-list; the message wording predates that and
        // blames the course/subject pairing.
        Some(date) if !is_allowed_start_date(date) => {
            errors.insert(
                Field::StartDate,
                "Your selected course and subject is not offered beginning from your selected date."
                    .into(),
            );
        }
        Some(_) => {}
    }

    let notes_len = form.notes_len();
    if notes_len > 0 && !(NOTES_MIN_LEN..=NOTES_MAX_LEN).contains(&notes_len) {
        errors.insert(
            Field::Notes,
            "Min length: 20 characters, Max length: 500 characters.".into(),
        );
    }

    errors
}

/// Convenience: whether the form would pass validation.
pub fn is_valid(form: &RegistrationForm) -> bool {
    validate(form).is_empty()
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Course;
    use time::macros::date;

    /// A form that passes every rule.
    fn valid_form() -> RegistrationForm {
        let mut form = RegistrationForm::new();
        form.set_course(Course::ComputerSciences);
        form.set_subject("web-development");
        form.set_start_date(Some(date!(2019 - 12 - 20)));
        for c in "Looking forward to this course".chars() {
            form.push_note_char(c);
        }
        form
    }

    fn notes_of_len(n: usize) -> String {
        "a".repeat(n)
    }

    #[test]
    fn empty_form_reports_course_subject_and_date() {
        let errors = validate(&RegistrationForm::new());

        assert_eq!(errors.get(&Field::Course).map(String::as_str), Some("Please choose course."));
        assert_eq!(
            errors.get(&Field::Subject).map(String::as_str),
            Some("Please choose any course first.")
        );
        assert_eq!(
            errors.get(&Field::StartDate).map(String::as_str),
            Some("Please enter start date.")
        );
        // Empty notes are fine.
        assert!(!errors.contains_key(&Field::Notes));
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn no_course_always_pairs_both_course_errors() {
        // With subject unset and no course, both the course-missing and
        // choose-course-first errors must appear together.
        let mut form = RegistrationForm::new();
        form.set_start_date(Some(date!(2020 - 01 - 15)));
        let errors = validate(&form);

        assert!(errors.contains_key(&Field::Course));
        assert_eq!(
            errors.get(&Field::Subject).map(String::as_str),
            Some("Please choose any course first.")
        );
    }

    #[test]
    fn course_without_subject_reports_choose_subject() {
        let mut form = valid_form();
        form.subject = None;
        let errors = validate(&form);

        assert_eq!(
            errors.get(&Field::Subject).map(String::as_str),
            Some("Please choose any subject.")
        );
        assert!(!errors.contains_key(&Field::Course));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn valid_form_has_no_errors() {
        assert!(is_valid(&valid_form()));
    }

    #[test]
    fn disallowed_date_reports_offering_error() {
        let mut form = valid_form();
        form.set_start_date(Some(date!(2020 - 01 - 01)));
        let errors = validate(&form);

        assert_eq!(
            errors.get(&Field::StartDate).map(String::as_str),
            Some("Your selected course and subject is not offered beginning from your selected date.")
        );
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn allowed_date_valid_for_every_course_and_subject() {
        for course in crate::catalog::COURSES {
            for label in course.subjects() {
                let mut form = RegistrationForm::new();
                form.set_course(course);
                form.set_subject(crate::catalog::slugify(label));
                form.set_start_date(Some(date!(2020 - 01 - 15)));
                assert!(is_valid(&form), "{:?}/{} should be valid", course, label);
            }
        }
    }

    #[test]
    fn disallowed_date_invalid_for_every_course_and_subject() {
        for course in crate::catalog::COURSES {
            for label in course.subjects() {
                let mut form = RegistrationForm::new();
                form.set_course(course);
                form.set_subject(crate::catalog::slugify(label));
                form.set_start_date(Some(date!(2020 - 01 - 01)));
                let errors = validate(&form);
                assert!(errors.contains_key(&Field::StartDate));
            }
        }
    }

    #[test]
    fn notes_length_boundaries() {
        let mut form = valid_form();

        for (len, ok) in [(19, false), (20, true), (500, true), (501, false)] {
            form.notes = notes_of_len(len);
            assert_eq!(
                is_valid(&form),
                ok,
                "notes of length {} should be {}",
                len,
                if ok { "valid" } else { "invalid" }
            );
        }
    }

    #[test]
    fn short_notes_message() {
        let mut form = valid_form();
        form.notes = notes_of_len(5);
        let errors = validate(&form);
        assert_eq!(
            errors.get(&Field::Notes).map(String::as_str),
            Some("Min length: 20 characters, Max length: 500 characters.")
        );
    }

    #[test]
    fn empty_notes_are_optional() {
        let mut form = valid_form();
        form.notes.clear();
        assert!(is_valid(&form));
    }

    #[test]
    fn validate_is_idempotent() {
        let mut form = RegistrationForm::new();
        form.set_course(Course::EnglishLiterature);
        form.notes = notes_of_len(3);

        let first = validate(&form);
        let second = validate(&form);
        assert_eq!(first, second);
    }

    #[test]
    fn all_errors_collected_not_short_circuited() {
        let mut form = RegistrationForm::new();
        form.notes = notes_of_len(10);
        let errors = validate(&form);

        // Course, subject, date, and notes all at once.
        assert_eq!(errors.len(), 4);
    }
}
