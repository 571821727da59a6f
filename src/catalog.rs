//! Course catalog: the fixed enrollment domain data.
//!
//! Pure data and functions — no I/O, easily testable. Everything the form
//! offers (courses, their subjects, the start dates on which enrollment is
//! open) is a process-wide constant defined here.

use time::macros::date;
use time::Date;

// ============================================================================
// COURSES
// ============================================================================

/// Top-level enrollment category. Exactly one of three fixed values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Course {
    TechnicalReportWriting,
    EnglishLiterature,
    ComputerSciences,
}

/// All courses in presentation order (radio-group order).
pub const COURSES: [Course; 3] = [
    Course::TechnicalReportWriting,
    Course::EnglishLiterature,
    Course::ComputerSciences,
];

impl Course {
    /// Display label for the radio group.
    pub fn label(self) -> &'static str {
        match self {
            Course::TechnicalReportWriting => "Technical Report Writing",
            Course::EnglishLiterature => "English Literature",
            Course::ComputerSciences => "Computer Sciences",
        }
    }

    /// Stable identifier for the course.
    pub fn slug(self) -> &'static str {
        match self {
            Course::TechnicalReportWriting => "technical-report-writing",
            Course::EnglishLiterature => "english-literature",
            Course::ComputerSciences => "computer-sciences",
        }
    }

    /// The fixed, ordered subject list for this course.
    pub fn subjects(self) -> &'static [&'static str; 3] {
        match self {
            Course::TechnicalReportWriting => {
                &["Short Reports", "Annual Reports", "Presentations"]
            }
            Course::EnglishLiterature => &["Poetry", "Short Stories", "Drama"],
            Course::ComputerSciences => &[
                "Web Development",
                "Desktop Software Development",
                "Research and Analysis",
            ],
        }
    }

    /// Next course in radio-group order, wrapping at the end.
    pub fn next(self) -> Course {
        match self {
            Course::TechnicalReportWriting => Course::EnglishLiterature,
            Course::EnglishLiterature => Course::ComputerSciences,
            Course::ComputerSciences => Course::TechnicalReportWriting,
        }
    }

    /// Previous course in radio-group order, wrapping at the start.
    pub fn prev(self) -> Course {
        match self {
            Course::TechnicalReportWriting => Course::ComputerSciences,
            Course::EnglishLiterature => Course::TechnicalReportWriting,
            Course::ComputerSciences => Course::EnglishLiterature,
        }
    }
}

// ============================================================================
// SUBJECTS
// ============================================================================

/// Subject options for the dropdown, derived from the selected course.
///
/// Pure and total: `None` (no course chosen yet) yields an empty slice.
pub fn subject_options(course: Option<Course>) -> &'static [&'static str] {
    match course {
        Some(c) => c.subjects(),
        None => &[],
    }
}

/// Derive a stable slug from a subject label.
///
/// Lowercase, every space replaced with a hyphen:
/// "Desktop Software Development" → "desktop-software-development".
pub fn slugify(label: &str) -> String {
    label.to_lowercase().replace(' ', "-")
}

/// Find the display label for a subject slug within a course.
pub fn subject_label(course: Course, slug: &str) -> Option<&'static str> {
    course
        .subjects()
        .iter()
        .copied()
        .find(|label| slugify(label) == slug)
}

// ============================================================================
// START DATES
// ============================================================================

/// The calendar dates on which any course/subject may begin.
///
/// A single global allow-list, independent of course and subject.
pub const ALLOWED_START_DATES: [Date; 3] = [
    date!(2019 - 12 - 20),
    date!(2020 - 01 - 15),
    date!(2020 - 03 - 01),
];

/// Whether enrollment is offered beginning on the given date.
pub fn is_allowed_start_date(date: Date) -> bool {
    ALLOWED_START_DATES.contains(&date)
}

/// Format a start date as DD-MM-YYYY, the catalog's canonical form.
pub fn format_start_date(date: Date) -> String {
    format!(
        "{:02}-{:02}-{}",
        date.day(),
        date.month() as u8,
        date.year()
    )
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subject_options_exact_per_course() {
        assert_eq!(
            subject_options(Some(Course::TechnicalReportWriting)),
            &["Short Reports", "Annual Reports", "Presentations"]
        );
        assert_eq!(
            subject_options(Some(Course::EnglishLiterature)),
            &["Poetry", "Short Stories", "Drama"]
        );
        assert_eq!(
            subject_options(Some(Course::ComputerSciences)),
            &[
                "Web Development",
                "Desktop Software Development",
                "Research and Analysis"
            ]
        );
    }

    #[test]
    fn subject_options_empty_without_course() {
        assert!(subject_options(None).is_empty());
    }

    #[test]
    fn slugify_replaces_every_space() {
        assert_eq!(slugify("Web Development"), "web-development");
        assert_eq!(
            slugify("Desktop Software Development"),
            "desktop-software-development"
        );
        assert_eq!(slugify("Research and Analysis"), "research-and-analysis");
    }

    #[test]
    fn slugify_lowercases() {
        assert_eq!(slugify("Poetry"), "poetry");
        assert_eq!(slugify("Short Reports"), "short-reports");
    }

    #[test]
    fn subject_label_round_trips_slugs() {
        for course in COURSES {
            for label in course.subjects() {
                assert_eq!(subject_label(course, &slugify(label)), Some(*label));
            }
        }
    }

    #[test]
    fn subject_label_rejects_foreign_slug() {
        assert_eq!(subject_label(Course::EnglishLiterature, "web-development"), None);
    }

    #[test]
    fn course_cycling_wraps_both_ways() {
        for course in COURSES {
            assert_eq!(course.next().prev(), course);
            assert_eq!(course.prev().next(), course);
        }
        assert_eq!(
            Course::ComputerSciences.next(),
            Course::TechnicalReportWriting
        );
    }

    #[test]
    fn course_slugs_are_stable() {
        assert_eq!(
            Course::TechnicalReportWriting.slug(),
            "technical-report-writing"
        );
        assert_eq!(Course::EnglishLiterature.slug(), "english-literature");
        assert_eq!(Course::ComputerSciences.slug(), "computer-sciences");
    }

    #[test]
    fn allowed_dates_format_as_expected() {
        let formatted: Vec<String> = ALLOWED_START_DATES
            .iter()
            .map(|d| format_start_date(*d))
            .collect();
        assert_eq!(formatted, ["20-12-2019", "15-01-2020", "01-03-2020"]);
    }

    #[test]
    fn allow_list_membership() {
        assert!(is_allowed_start_date(date!(2020 - 01 - 15)));
        assert!(!is_allowed_start_date(date!(2020 - 01 - 01)));
    }
}
