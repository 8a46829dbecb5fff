//! Calendar model: focused date, selection state and date arithmetic.
//!
//! Day and week movement carries across month boundaries. Month and year
//! movement clamps the day-of-month to the length of the target month, so
//! Jan 31 + 1 month is Feb 28 (or 29), never Mar 3.

use chrono::{Datelike, Days, NaiveDate, Weekday};

use crate::keys::Command;
use crate::types::{CELLS_PER_MONTH, MonthData, PickerContext};

/// Check if a year is a leap year on the proleptic Gregorian calendar.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}

pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 30,
    }
}

/// Bound reached when arithmetic runs off chrono's representable range.
fn saturate(delta: i64) -> NaiveDate {
    if delta < 0 {
        NaiveDate::MIN
    } else {
        NaiveDate::MAX
    }
}

/// Shift a date by `delta` days, carrying over month and year boundaries.
pub fn shift_days(date: NaiveDate, delta: i64) -> NaiveDate {
    let days = Days::new(delta.unsigned_abs());
    let shifted = if delta < 0 {
        date.checked_sub_days(days)
    } else {
        date.checked_add_days(days)
    };
    shifted.unwrap_or_else(|| saturate(delta))
}

/// Build `year-month-day`, clamping `day` to the month length.
fn clamped_date(year: i64, month: u32, day: u32, delta: i64) -> NaiveDate {
    let Ok(year) = i32::try_from(year) else {
        return saturate(delta);
    };
    let day = day.min(days_in_month(year, month));
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_else(|| saturate(delta))
}

/// Shift a date by `delta` months, clamping the day-of-month.
pub fn shift_months(date: NaiveDate, delta: i64) -> NaiveDate {
    let index = i64::from(date.year()) * 12 + i64::from(date.month0());
    let target = index.saturating_add(delta);
    let year = target.div_euclid(12);
    let month = target.rem_euclid(12) as u32 + 1;
    clamped_date(year, month, date.day(), delta)
}

/// Shift a date by `delta` years; Feb 29 becomes Feb 28 in non-leap years.
pub fn shift_years(date: NaiveDate, delta: i64) -> NaiveDate {
    let year = i64::from(date.year()).saturating_add(delta);
    clamped_date(year, date.month(), date.day(), delta)
}

/// Year and month currently on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearMonth {
    pub year: i32,
    pub month: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionMode {
    Browsing,
    DateSelected,
}

/// State of the picker. Every operation consumes the state and returns the
/// next one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarState {
    focused: NaiveDate,
    mode: SelectionMode,
}

impl CalendarState {
    pub fn new(focused: NaiveDate) -> Self {
        CalendarState {
            focused,
            mode: SelectionMode::Browsing,
        }
    }

    pub fn focused(&self) -> NaiveDate {
        self.focused
    }

    pub fn mode(&self) -> SelectionMode {
        self.mode
    }

    pub fn is_selected(&self) -> bool {
        self.mode == SelectionMode::DateSelected
    }

    /// Month displayed by the renderer; always the focused date's month.
    pub fn view_anchor(&self) -> YearMonth {
        YearMonth {
            year: self.focused.year(),
            month: self.focused.month(),
        }
    }

    fn with_focus(self, focused: NaiveDate) -> Self {
        CalendarState { focused, ..self }
    }

    pub fn move_day(self, delta: i64) -> Self {
        self.with_focus(shift_days(self.focused, delta))
    }

    pub fn move_week(self, delta: i64) -> Self {
        self.with_focus(shift_days(self.focused, delta.saturating_mul(7)))
    }

    pub fn move_month(self, delta: i64) -> Self {
        self.with_focus(shift_months(self.focused, delta))
    }

    pub fn move_year(self, delta: i64) -> Self {
        self.with_focus(shift_years(self.focused, delta))
    }

    pub fn select(self) -> Self {
        CalendarState {
            mode: SelectionMode::DateSelected,
            ..self
        }
    }

    /// Cancelling ends the loop; the state itself is unchanged.
    pub fn cancel(self) -> Self {
        self
    }

    pub fn apply(self, command: Command) -> Self {
        match command {
            Command::MoveDay(delta) => self.move_day(delta),
            Command::MoveWeek(delta) => self.move_week(delta),
            Command::MoveMonth(delta) => self.move_month(delta),
            Command::MoveYear(delta) => self.move_year(delta),
            Command::Select => self.select(),
            Command::Cancel => self.cancel(),
            Command::Ignore => self,
        }
    }
}

impl MonthData {
    /// Build the 6x7 grid for a month, aligned to the context's week start.
    pub fn new(ctx: &PickerContext, year: i32, month: u32) -> Self {
        let days_in_month = days_in_month(year, month);
        let first_day = NaiveDate::from_ymd_opt(year, month, 1)
            .map(|d| d.weekday())
            .unwrap_or(Weekday::Mon);

        let offset = match ctx.week_start {
            Weekday::Sun => first_day.num_days_from_sunday() as usize,
            _ => first_day.num_days_from_monday() as usize,
        };

        let mut days: Vec<Option<u32>> = Vec::with_capacity(CELLS_PER_MONTH);
        days.extend(std::iter::repeat_n(None, offset));
        days.extend((1..=days_in_month).map(Some));
        days.resize(CELLS_PER_MONTH, None);

        MonthData { year, month, days }
    }

    /// Number of week rows actually occupied by days.
    pub fn week_rows(&self) -> usize {
        let last = self.days.iter().rposition(Option::is_some).unwrap_or(0);
        last / 7 + 1
    }
}
