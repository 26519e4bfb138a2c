//! Monday-first month grids and date keys.
//!
//! Months are zero-based throughout (`0` = January) to match the grid's
//! navigation state; chrono is used for weekday and leap-year queries.

use crate::{CalendarCell, Error, Result, Schedule};
use chrono::{Datelike, NaiveDate};
use serde::Serialize;

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

/// Column headers for a Monday-first grid
pub const WEEKDAY_LABELS: [&str; 7] = ["MON", "TUE", "WED", "THU", "FRI", "SAT", "SUN"];

/// Short weekday names indexed by days from Sunday
pub const DAY_SHORT: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

pub fn month_name(month0: u32) -> Option<&'static str> {
    MONTH_NAMES.get(month0 as usize).copied()
}

fn first_of_month(year: i32, month0: u32) -> Result<NaiveDate> {
    if month0 > 11 {
        return Err(Error::InvalidMonth {
            year,
            month: month0,
        });
    }
    NaiveDate::from_ymd_opt(year, month0 + 1, 1).ok_or(Error::InvalidMonth {
        year,
        month: month0,
    })
}

/// Length of a month known to be in `0..=11`
fn month_length(year: i32, month0: u32) -> u32 {
    match month0 + 1 {
        4 | 6 | 9 | 11 => 30,
        2 if NaiveDate::from_ymd_opt(year, 2, 29).is_some() => 29,
        2 => 28,
        _ => 31,
    }
}

pub fn days_in_month(year: i32, month0: u32) -> Result<u32> {
    first_of_month(year, month0)?;
    Ok(month_length(year, month0))
}

/// Weekday of the 1st, counted from Sunday (0 = Sunday .. 6 = Saturday)
pub fn first_weekday(year: i32, month0: u32) -> Result<u32> {
    Ok(first_of_month(year, month0)?.weekday().num_days_from_sunday())
}

/// Build the Monday-first grid for a month.
///
/// Leading cells are the last days of the previous month, trailing cells
/// the first days of the next; the result is the shortest whole number of
/// weeks covering the month.
pub fn build_month_grid(year: i32, month0: u32) -> Result<Vec<CalendarCell>> {
    let leading = (first_weekday(year, month0)? + 6) % 7;
    let days = month_length(year, month0);

    let (prev_year, prev_month) = advance_month(year, month0, -1);
    let prev_days = month_length(prev_year, prev_month);

    let mut cells = Vec::with_capacity(42);
    cells.extend((prev_days - leading + 1..=prev_days).map(CalendarCell::adjacent));
    cells.extend((1..=days).map(CalendarCell::current));

    let remainder = cells.len() % 7;
    if remainder != 0 {
        let trailing = (7 - remainder) as u32;
        cells.extend((1..=trailing).map(CalendarCell::adjacent));
    }

    tracing::debug!(
        year,
        month = month0,
        leading,
        cells = cells.len(),
        "built month grid"
    );

    Ok(cells)
}

/// Canonical `YYYY-MM-DD` key for a day; `month0` is rendered one-based.
pub fn date_key(year: i32, month0: u32, day: u32) -> String {
    format!("{:04}-{:02}-{:02}", year, month0 + 1, day)
}

pub fn date_key_for(date: NaiveDate) -> String {
    date_key(date.year(), date.month0(), date.day())
}

/// Move `delta` months forward (or back, if negative), wrapping the year.
pub fn advance_month(year: i32, month0: u32, delta: i32) -> (i32, u32) {
    let total = i64::from(year) * 12 + i64::from(month0) + i64::from(delta);
    (total.div_euclid(12) as i32, total.rem_euclid(12) as u32)
}

// ============================================================================
// Cell Marking
// ============================================================================

/// A grid cell annotated for rendering
#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq)]
pub struct MarkedCell {
    #[serde(flatten)]
    pub cell: CalendarCell,
    pub has_workout: bool,
    pub selected: bool,
    pub today: bool,
}

/// Annotate a grid for `year`/`month0` against a schedule.
///
/// Padding cells from adjacent months never carry a mark.
pub fn mark_cells(
    cells: &[CalendarCell],
    year: i32,
    month0: u32,
    schedule: &Schedule,
    selected_day: Option<u32>,
    today: NaiveDate,
) -> Vec<MarkedCell> {
    let is_today_month = today.year() == year && today.month0() == month0;

    cells
        .iter()
        .map(|&cell| {
            let in_month = cell.belongs_to_displayed_month;
            let day = cell.day_of_month;
            MarkedCell {
                cell,
                has_workout: in_month && schedule.get(&date_key(year, month0, day)).is_some(),
                selected: in_month && selected_day == Some(day),
                today: in_month && is_today_month && today.day() == day,
            }
        })
        .collect()
}
