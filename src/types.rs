//! Type definitions and constants for the picker.

use chrono::{NaiveDate, Weekday};

/// Where the picker is drawn. The selected date always goes to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceKind {
    /// The controlling terminal (`/dev/tty`), falling back to stderr.
    Tty,
    /// Standard error.
    Stderr,
}

/// Picker configuration passed explicitly into the interaction loop.
#[derive(Clone, Debug)]
pub struct PickerContext {
    /// First day of the week (Monday or Sunday).
    pub week_start: Weekday,
    /// Whether to use ANSI attributes for highlighting.
    pub color: bool,
    /// Today's date, underlined in the grid.
    pub today: NaiveDate,
    /// strftime pattern used for the printed result.
    pub output_format: String,
    /// Display surface for the calendar.
    pub surface: SurfaceKind,
}

/// Calendar cells for a single month.
pub struct MonthData {
    pub year: i32,
    pub month: u32,
    pub days: Vec<Option<u32>>,
}

pub const CELLS_PER_MONTH: usize = 42; // 6 weeks × 7 days

/// Rendered width of a week row: seven 2-column cells with a separator column
/// on each side.
pub const GRID_WIDTH: usize = 22;

pub const DEFAULT_OUTPUT_FORMAT: &str = "%Y-%m-%d";

pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

// ANSI attributes
pub const COLOR_RESET: &str = "\x1b[0m";
pub const COLOR_REVERSE: &str = "\x1b[7m";
pub const COLOR_UNDERLINE: &str = "\x1b[4m";
pub const COLOR_RED: &str = "\x1b[91m";
pub const COLOR_TEAL: &str = "\x1b[96m";
pub const COLOR_SAND_YELLOW: &str = "\x1b[93m";
pub const COLOR_DIM: &str = "\x1b[2m";
