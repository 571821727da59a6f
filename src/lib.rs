//! course-enroll: a terminal course registration form.

pub mod catalog;
pub mod form;
pub mod tui;
pub mod validate;
