//! Command-line argument parsing using clap.
//!
//! The optional positional date accepts `YYYY-MM-DD` or a compact UTC
//! timestamp `YYYYMMDDThhmmssZ`.

use chrono::{NaiveDate, NaiveDateTime};
use clap::{Parser, ValueHint};

use crate::error::PickError;
use crate::formatter::parse_output_format;
use crate::types::{DEFAULT_OUTPUT_FORMAT, PickerContext, SurfaceKind};

/// Default log level when not specified.
const DEFAULT_LOG_LEVEL: &str = "info";

/// Default log file path (no logging to file).
const DEFAULT_LOG_FILE: &str = "/dev/null";

#[derive(Parser, Debug)]
#[command(name = "datepick")]
#[command(about = "Pick a date from an interactive calendar", long_about = None)]
#[command(version)]
#[command(after_help = HELP_MESSAGE)]
pub struct Args {
    /// Output date format (strftime pattern).
    #[arg(
        short = 'f',
        long,
        default_value = DEFAULT_OUTPUT_FORMAT,
        help_heading = "Output options",
        value_name = "pattern"
    )]
    pub format: String,

    /// Week starts on Sunday (default is Monday).
    #[arg(short = 's', long, overrides_with = "monday", help_heading = "Calendar options")]
    pub sunday: bool,

    /// Week starts on Monday (default).
    #[arg(short = 'm', long, overrides_with = "sunday", help_heading = "Calendar options")]
    pub monday: bool,

    /// Disable colorized output.
    #[arg(long, help_heading = "Output options")]
    pub no_color: bool,

    /// Draw the calendar on standard error instead of the terminal.
    #[arg(long, help_heading = "Output options")]
    pub stderr: bool,

    /// Set log level (trace, debug, info, warn, error).
    #[arg(short = 'L', long, default_value = DEFAULT_LOG_LEVEL, help_heading = "Logging")]
    pub log_level: String,

    /// Log file path (default: /dev/null for no logging).
    #[arg(short = 'F', long, default_value = DEFAULT_LOG_FILE, help_heading = "Logging", value_hint = ValueHint::FilePath)]
    pub log_file: String,

    /// Initial date (YYYY-MM-DD or YYYYMMDDThhmmssZ).
    #[arg(index = 1, value_name = "date", value_hint = ValueHint::Other)]
    pub date: Option<String>,
}

/// Help message displayed with --help.
const HELP_MESSAGE: &str = "Keys:
  Left/Right, h/l            Previous/next day
  Up/Down, k/j               Previous/next week
  PageUp/PageDown, [/]       Previous/next month
  Shift+PageUp/PageDown, {/} Previous/next year
  Enter                      Print the focused date and exit
  q, Esc, Ctrl+C             Exit without a date (status 1)

Examples:
  datepick                     Start at today
  datepick 2025-12-24          Start at December 24, 2025
  datepick 20250101T120000Z    Start at a UTC timestamp's date
  datepick -f '%d/%m/%Y'       Print the date as day/month/year";

impl Args {
    pub fn parse() -> Self {
        Parser::parse()
    }
}

impl PickerContext {
    pub fn new(args: &Args) -> Result<Self, PickError> {
        parse_output_format(&args.format)?;

        let color = !args.no_color && std::env::var_os("NO_COLOR").is_none();

        Ok(PickerContext {
            week_start: if args.sunday {
                chrono::Weekday::Sun
            } else {
                chrono::Weekday::Mon
            },
            color,
            today: get_today_date(),
            output_format: args.format.clone(),
            surface: if args.stderr {
                SurfaceKind::Stderr
            } else {
                SurfaceKind::Tty
            },
        })
    }
}

/// Get today's date, respecting DATEPICK_TEST_TIME environment variable for testing.
pub fn get_today_date() -> NaiveDate {
    if let Ok(test_time) = std::env::var("DATEPICK_TEST_TIME")
        && let Ok(date) = NaiveDate::parse_from_str(&test_time, "%Y-%m-%d")
    {
        return date;
    }
    chrono::Local::now().date_naive()
}

/// Check that `input` has digits everywhere except the given literal bytes.
fn has_shape(input: &str, len: usize, literals: &[(usize, u8)]) -> bool {
    input.len() == len
        && input.bytes().enumerate().all(|(i, b)| {
            match literals.iter().find(|(pos, _)| *pos == i) {
                Some((_, lit)) => b == *lit,
                None => b.is_ascii_digit(),
            }
        })
}

/// Parse the positional date argument.
///
/// The timestamp form validates its clock fields strictly and then drops
/// them; only the date is used.
pub fn parse_initial_date(input: &str) -> Result<NaiveDate, PickError> {
    let invalid = || PickError::InvalidInputDate(input.to_string());

    if has_shape(input, 10, &[(4, b'-'), (7, b'-')]) {
        return NaiveDate::parse_from_str(input, "%Y-%m-%d").map_err(|_| invalid());
    }

    if has_shape(input, 16, &[(8, b'T'), (15, b'Z')]) {
        return NaiveDateTime::parse_from_str(input, "%Y%m%dT%H%M%SZ")
            .map(|dt| dt.date())
            .map_err(|_| invalid());
    }

    Err(invalid())
}

/// Initial focused date: the positional argument, or `today`.
pub fn get_initial_date(args: &Args, today: NaiveDate) -> Result<NaiveDate, PickError> {
    match args.date.as_deref() {
        Some(input) => parse_initial_date(input),
        None => Ok(today),
    }
}
