//! Style constants for the form.
//!
//! Centralized color semantics, consumed by the rendering layer.
//!
//! - Green: success, offered dates
//! - Red: validation errors
//! - Cyan: interactive elements (keybinding hints, the submit button)
//! - Dim: de-emphasized (placeholders, help line)
//! - Reversed: the focused widget / cursor

use ratatui::style::{Color, Modifier, Style};

// ============================================================================
// SEMANTIC STYLES
// ============================================================================

/// Success / offered start dates — green.
pub const STYLE_SUCCESS: Style = Style::new().fg(Color::Green);

/// Validation error text — red.
pub const STYLE_ERROR: Style = Style::new().fg(Color::Red);

/// Interactive element / keybinding hint — cyan.
pub const STYLE_INTERACTIVE: Style = Style::new().fg(Color::Cyan);

/// De-emphasized text (placeholders, counters) — dark gray.
pub const STYLE_DIM: Style = Style::new().fg(Color::DarkGray);

/// Field labels and entered values — bold.
pub const STYLE_IMPORTANT: Style = Style::new().add_modifier(Modifier::BOLD);

// ============================================================================
// UI ELEMENT STYLES
// ============================================================================

/// Title bar / dialog headings.
pub const STYLE_TITLE: Style = Style::new().fg(Color::White).add_modifier(Modifier::BOLD);

/// The focused widget row.
pub const STYLE_FOCUS: Style = Style::new().add_modifier(Modifier::REVERSED);

/// Highlighted menu row / calendar cursor.
pub const STYLE_CURSOR: Style = Style::new().fg(Color::Black).bg(Color::Cyan);

/// Radio button: selected.
pub const STYLE_CHECKED: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);

/// Radio button: unselected.
pub const STYLE_UNCHECKED: Style = Style::new().fg(Color::DarkGray);

/// Footer / help line.
pub const STYLE_HELP: Style = Style::new().fg(Color::DarkGray);

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn semantic_styles_have_expected_colors() {
        assert_eq!(STYLE_SUCCESS.fg, Some(Color::Green));
        assert_eq!(STYLE_ERROR.fg, Some(Color::Red));
        assert_eq!(STYLE_INTERACTIVE.fg, Some(Color::Cyan));
        assert_eq!(STYLE_DIM.fg, Some(Color::DarkGray));
    }

    #[test]
    fn focus_style_is_reversed() {
        assert!(STYLE_FOCUS.add_modifier.contains(Modifier::REVERSED));
    }
}
