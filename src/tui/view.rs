//! Pure rendering: map App state to ratatui widget trees.
//!
//! The form is always rendered as the backdrop; overlay screens (subject
//! menu, date picker, success dialog) draw a centered popup on top of it.
//! Widget-building functions are pure (state in, widgets out); the only
//! effect is `Frame::render_widget()` writing to the terminal buffer.

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::calendar::{CalendarEventStore, Monthly};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use crate::catalog::{
    format_start_date, subject_label, subject_options, ALLOWED_START_DATES, COURSES,
};
use crate::form::{Field, RegistrationForm};
use crate::validate::NOTES_MAX_LEN;

use super::state::{App, Focus, Screen};
use super::theme;

// ============================================================================
// DISPATCH
// ============================================================================

/// Render the current screen to the terminal frame.
pub fn render(app: &App, frame: &mut Frame) {
    let area = frame.area();

    // Common layout: title bar at top, content in middle, help at bottom
    let chunks = Layout::vertical([
        Constraint::Length(1), // title
        Constraint::Min(0),    // content
        Constraint::Length(1), // help
    ])
    .split(area);

    frame.render_widget(render_title(&app.screen), chunks[0]);
    frame.render_widget(render_help(&app.screen), chunks[2]);

    render_form(app, frame, chunks[1]);

    match &app.screen {
        Screen::SubjectMenu { cursor } => render_subject_menu(app, *cursor, frame),
        Screen::DatePicker { cursor } => render_date_picker(*cursor, frame),
        Screen::Success => render_success(frame),
        _ => {}
    }
}

// ============================================================================
// SHARED LAYOUT
// ============================================================================

/// Title bar showing the app name and screen-specific context.
fn render_title(screen: &Screen) -> Paragraph<'static> {
    let title_text = match screen {
        Screen::Submitting => "course-enroll — submitting",
        _ => "course-enroll — Course Registration",
    };

    Paragraph::new(Line::from(Span::styled(title_text, theme::STYLE_TITLE)))
}

/// Help line showing available keybindings for the current screen.
fn render_help(screen: &Screen) -> Paragraph<'static> {
    let help_text = match screen {
        Screen::Form { focus: Focus::Course } => {
            "[Tab/j/k] fields  [←/→/1-3] choose course  [q] quit"
        }
        Screen::Form { focus: Focus::Notes } => {
            "[type] edit notes  [Backspace] delete  [Tab/↑↓] fields  [^C] quit"
        }
        Screen::Form { focus: Focus::Submit } => "[Enter] submit  [Tab/j/k] fields  [q] quit",
        Screen::Form { .. } => "[Tab/j/k] fields  [Enter] open  [q] quit",
        Screen::SubjectMenu { .. } => "[j/k] move  [Enter] select  [Esc] cancel",
        Screen::DatePicker { .. } => "[←→] day  [↑↓] week  [Enter] select  [Esc] cancel",
        Screen::Submitting => "",
        Screen::Success => "[Enter] close",
    };

    Paragraph::new(Span::styled(help_text, theme::STYLE_HELP))
}

// ============================================================================
// THE FORM
// ============================================================================

/// Render the registration form with inline validation errors.
fn render_form(app: &App, frame: &mut Frame, area: Rect) {
    let focus = match &app.screen {
        Screen::Form { focus } => Some(*focus),
        _ => None,
    };
    let form = &app.form;

    let mut lines: Vec<Line> = vec![Line::from("")];

    // -- Courses (radio group) --
    lines.push(field_label("Courses", focus == Some(Focus::Course)));
    for course in COURSES {
        let selected = form.course == Some(course);
        let mark = if selected {
            Span::styled("(•) ", theme::STYLE_CHECKED)
        } else {
            Span::styled("( ) ", theme::STYLE_UNCHECKED)
        };
        lines.push(Line::from(vec![
            Span::raw("    "),
            mark,
            Span::raw(course.label()),
        ]));
    }
    push_error(&mut lines, app, Field::Course);
    lines.push(Line::from(""));

    // -- Subject (dropdown) --
    lines.push(field_label("Subject", focus == Some(Focus::Subject)));
    let subject_line = match (form.course, form.subject.as_deref()) {
        (Some(course), Some(slug)) => match subject_label(course, slug) {
            Some(label) => Span::styled(format!("    {} ▾", label), theme::STYLE_IMPORTANT),
            None => Span::styled("    Choose subject ▾", theme::STYLE_DIM),
        },
        _ => Span::styled("    Choose subject ▾", theme::STYLE_DIM),
    };
    lines.push(Line::from(subject_line));
    push_error(&mut lines, app, Field::Subject);
    lines.push(Line::from(""));

    // -- Start date --
    lines.push(field_label("Start Date", focus == Some(Focus::StartDate)));
    let date_line = match form.start_date {
        Some(date) => Span::styled(
            format!("    {}", format_start_date(date)),
            theme::STYLE_IMPORTANT,
        ),
        None => Span::styled("    Start Date", theme::STYLE_DIM),
    };
    lines.push(Line::from(date_line));
    push_error(&mut lines, app, Field::StartDate);
    lines.push(Line::from(""));

    // -- Notes --
    lines.push(Line::from(vec![
        field_label_span("Notes", focus == Some(Focus::Notes)),
        Span::styled(
            format!("  ({}/{})", form.notes_len(), NOTES_MAX_LEN),
            theme::STYLE_DIM,
        ),
    ]));
    lines.push(notes_line(form, focus == Some(Focus::Notes)));
    push_error(&mut lines, app, Field::Notes);
    lines.push(Line::from(""));

    // -- Submit button --
    let button = if app.screen == Screen::Submitting {
        Span::styled("  [ Submitting… ]", theme::STYLE_DIM)
    } else if focus == Some(Focus::Submit) {
        Span::styled("  [ Submit ]", theme::STYLE_FOCUS)
    } else {
        Span::styled("  [ Submit ]", theme::STYLE_INTERACTIVE)
    };
    lines.push(Line::from(button));

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

/// A field label row, reversed when focused.
fn field_label(text: &'static str, focused: bool) -> Line<'static> {
    Line::from(field_label_span(text, focused))
}

fn field_label_span(text: &'static str, focused: bool) -> Span<'static> {
    let style = if focused {
        theme::STYLE_FOCUS
    } else {
        theme::STYLE_IMPORTANT
    };
    Span::styled(format!("  {}", text), style)
}

/// The notes text with a trailing cursor mark while editing.
fn notes_line(form: &RegistrationForm, focused: bool) -> Line<'static> {
    let mut spans = vec![Span::raw("    ")];
    if form.notes.is_empty() && !focused {
        spans.push(Span::styled(
            "Any additional notes here.",
            theme::STYLE_DIM,
        ));
    } else {
        spans.push(Span::raw(form.notes.clone()));
        if focused {
            spans.push(Span::styled("▏", theme::STYLE_INTERACTIVE));
        }
    }
    Line::from(spans)
}

/// Append the field's inline error line, if any.
fn push_error(lines: &mut Vec<Line<'static>>, app: &App, field: Field) {
    if let Some(message) = app.errors.get(&field) {
        lines.push(Line::from(Span::styled(
            format!("    {}", message),
            theme::STYLE_ERROR,
        )));
    }
}

// ============================================================================
// OVERLAY: SUBJECT MENU
// ============================================================================

fn render_subject_menu(app: &App, cursor: usize, frame: &mut Frame) {
    let options = subject_options(app.form.course);

    let height = (options.len().max(1) + 2) as u16;
    let area = centered_rect(40, height, frame.area());
    frame.render_widget(Clear, area);

    let mut lines: Vec<Line> = Vec::new();
    if options.is_empty() {
        lines.push(Line::from(Span::styled(
            " (choose a course first)",
            theme::STYLE_DIM,
        )));
    }
    for (i, label) in options.iter().enumerate() {
        let line = Line::from(format!(" {}", label));
        lines.push(if i == cursor {
            line.style(theme::STYLE_CURSOR)
        } else {
            line
        });
    }

    let menu = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(Span::styled("Choose subject", theme::STYLE_TITLE)),
    );
    frame.render_widget(menu, area);
}

// ============================================================================
// OVERLAY: DATE PICKER
// ============================================================================

fn render_date_picker(cursor: time::Date, frame: &mut Frame) {
    let area = centered_rect(30, 13, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled("Start Date", theme::STYLE_TITLE));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::vertical([
        Constraint::Min(8),    // calendar
        Constraint::Length(3), // offered-dates hint
    ])
    .split(inner);

    // Offered dates stay highlighted; the cursor wins when it sits on one.
    let mut events = CalendarEventStore::default();
    for date in ALLOWED_START_DATES {
        events.add(date, theme::STYLE_CHECKED);
    }
    events.add(cursor, theme::STYLE_CURSOR);

    let calendar = Monthly::new(cursor, events)
        .show_month_header(theme::STYLE_TITLE)
        .show_weekdays_header(theme::STYLE_DIM)
        .default_style(ratatui::style::Style::new());
    frame.render_widget(calendar, chunks[0]);

    let offered: Vec<String> = ALLOWED_START_DATES
        .iter()
        .map(|d| format_start_date(*d))
        .collect();
    let hint = Paragraph::new(vec![
        Line::from(Span::styled("Offered from:", theme::STYLE_DIM)),
        Line::from(Span::styled(offered.join("  "), theme::STYLE_SUCCESS)),
    ])
    .wrap(Wrap { trim: false });
    frame.render_widget(hint, chunks[1]);
}

// ============================================================================
// OVERLAY: SUCCESS DIALOG
// ============================================================================

fn render_success(frame: &mut Frame) {
    let area = centered_rect(50, 6, frame.area());
    frame.render_widget(Clear, area);

    let dialog = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            " Your course has been successfully registered.",
            theme::STYLE_SUCCESS,
        )),
        Line::from(""),
        Line::from(Span::styled(" [Enter] Close", theme::STYLE_HELP)),
    ])
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(Span::styled("Success!", theme::STYLE_TITLE)),
    );
    frame.render_widget(dialog, area);
}

// ============================================================================
// HELPERS
// ============================================================================

/// A fixed-size rect centered in `area`, clamped to fit.
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

// ============================================================================
// TESTS
// ============================================================================
