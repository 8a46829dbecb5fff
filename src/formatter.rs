//! Calendar rendering and output formatting.

use std::fmt::Write as _;

use chrono::format::{Item, StrftimeItems};
use chrono::{Datelike, NaiveDate, NaiveTime, Weekday};
use unicode_width::UnicodeWidthStr;

use crate::calendar::CalendarState;
use crate::error::PickError;
use crate::keys::KEY_HELP;
use crate::types::{
    COLOR_DIM, COLOR_RED, COLOR_RESET, COLOR_REVERSE, COLOR_SAND_YELLOW, COLOR_TEAL,
    COLOR_UNDERLINE, GRID_WIDTH, MONTH_NAMES, MonthData, PickerContext,
};

pub fn get_month_name(month: u32) -> &'static str {
    MONTH_NAMES[(month.clamp(1, 12) - 1) as usize]
}

/// Format month header "Month Year" centered over the grid.
pub fn format_month_header(year: i32, month: u32, width: usize, color: bool) -> String {
    let header = format!("{} {}", get_month_name(month), year);
    let centered = center_text(&header, width);
    if color {
        format!("{}{}{}", COLOR_TEAL, centered, COLOR_RESET)
    } else {
        centered
    }
}

/// Center text within a specified width, accounting for Unicode character widths.
pub fn center_text(text: &str, width: usize) -> String {
    let text_width = text.width();
    if text_width >= width {
        return text.to_string();
    }
    let total_padding = width - text_width;
    let left_padding = total_padding.div_ceil(2);
    let right_padding = total_padding - left_padding;
    format!(
        "{}{}{}",
        " ".repeat(left_padding),
        text,
        " ".repeat(right_padding)
    )
}

/// Get weekday order based on week start day.
pub fn get_weekday_order(week_start: Weekday) -> [Weekday; 7] {
    let mut order = [week_start; 7];
    for i in 1..7 {
        order[i] = order[i - 1].succ();
    }
    order
}

/// Get 2-character weekday abbreviation.
pub fn get_weekday_short_name(weekday: Weekday) -> String {
    weekday.to_string().chars().take(2).collect()
}

fn is_weekend(weekday: Weekday) -> bool {
    matches!(weekday, Weekday::Sat | Weekday::Sun)
}

/// Join seven 2-column cells into a row of [`GRID_WIDTH`] columns.
///
/// Without color the marked cell is framed by brackets in the separator
/// columns around it.
fn join_cells(cells: &[String], marked: Option<usize>) -> String {
    let mut separators = [' '; 8];
    if let Some(i) = marked {
        separators[i] = '[';
        separators[i + 1] = ']';
    }

    let mut line = String::with_capacity(GRID_WIDTH);
    for (i, cell) in cells.iter().enumerate() {
        line.push(separators[i]);
        line.push_str(cell);
    }
    line.push(separators[cells.len()]);
    line
}

/// Format weekday header row.
pub fn format_weekday_headers(ctx: &PickerContext) -> String {
    let names: Vec<String> = get_weekday_order(ctx.week_start)
        .iter()
        .map(|&w| get_weekday_short_name(w))
        .collect();
    let row = join_cells(&names, None);

    if ctx.color {
        format!("{}{}{}", COLOR_SAND_YELLOW, row, COLOR_RESET)
    } else {
        row
    }
}

/// Format day cell with highlighting.
///
/// Priority: focused > today > weekend > regular
fn format_day(ctx: &PickerContext, date: NaiveDate, focused: NaiveDate) -> String {
    let day_str = format!("{:>2}", date.day());
    if !ctx.color {
        return day_str;
    }

    if date == focused {
        format!("{}{}{}", COLOR_REVERSE, day_str, COLOR_RESET)
    } else if date == ctx.today {
        format!("{}{}{}", COLOR_UNDERLINE, day_str, COLOR_RESET)
    } else if is_weekend(date.weekday()) {
        format!("{}{}{}", COLOR_RED, day_str, COLOR_RESET)
    } else {
        day_str
    }
}

/// Format the focused month as a grid of lines.
pub fn format_month_grid(ctx: &PickerContext, state: &CalendarState) -> Vec<String> {
    let anchor = state.view_anchor();
    let focused = state.focused();
    let month = MonthData::new(ctx, anchor.year, anchor.month);

    let mut lines = Vec::with_capacity(8);
    lines.push(format_month_header(
        month.year,
        month.month,
        GRID_WIDTH,
        ctx.color,
    ));
    lines.push(format_weekday_headers(ctx));

    for week in month.days.chunks(7).take(month.week_rows()) {
        let mut marked = None;
        let cells: Vec<String> = week
            .iter()
            .enumerate()
            .map(|(i, cell)| {
                let date = cell.and_then(|d| NaiveDate::from_ymd_opt(month.year, month.month, d));
                match date {
                    Some(date) => {
                        if date == focused && !ctx.color {
                            marked = Some(i);
                        }
                        format_day(ctx, date, focused)
                    }
                    None => "  ".to_string(),
                }
            })
            .collect();
        lines.push(join_cells(&cells, marked));
    }

    lines
}

/// Full frame shown by the picker: month grid, focused date, key help.
pub fn render_picker(ctx: &PickerContext, state: &CalendarState) -> Vec<String> {
    let mut lines = format_month_grid(ctx, state);
    lines.push(String::new());

    let focused = state.focused().format("%A, %Y-%m-%d").to_string();
    lines.push(center_text(&focused, GRID_WIDTH));

    if ctx.color {
        lines.push(format!("{}{}{}", COLOR_DIM, KEY_HELP, COLOR_RESET));
    } else {
        lines.push(KEY_HELP.to_string());
    }
    lines
}

/// Parse a strftime pattern, rejecting unknown specifiers.
pub fn parse_output_format(pattern: &str) -> Result<Vec<Item<'_>>, PickError> {
    let items: Vec<Item<'_>> = StrftimeItems::new(pattern).collect();
    if items.iter().any(|item| matches!(item, Item::Error)) {
        return Err(PickError::InvalidFormat(pattern.to_string()));
    }
    Ok(items)
}

/// Format the selected date with a strftime pattern.
///
/// The date is formatted as midnight UTC so time and zone specifiers are
/// always available.
pub fn format_date(date: NaiveDate, pattern: &str) -> Result<String, PickError> {
    let items = parse_output_format(pattern)?;
    let datetime = date.and_time(NaiveTime::MIN).and_utc();

    let mut out = String::new();
    write!(out, "{}", datetime.format_with_items(items.iter()))
        .map_err(|_| PickError::InvalidFormat(pattern.to_string()))?;
    Ok(out)
}
