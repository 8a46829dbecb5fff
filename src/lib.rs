//! Interactive terminal date picker.
//!
//! Features:
//! - Day, week, month and year navigation from the keyboard
//! - Month and year moves clamp to the end of shorter months
//! - strftime-style output of the selected date

pub mod app;
pub mod args;
pub mod calendar;
pub mod error;
pub mod formatter;
pub mod keys;
pub mod picker;
pub mod terminal;
pub mod types;
