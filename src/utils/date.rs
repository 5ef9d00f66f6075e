use crate::errors::{AppError, AppResult};
use chrono::{Datelike, Month, NaiveDate};

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// Like `parse_date`, but as an `AppResult` for CLI arguments.
pub fn require_date(s: &str) -> AppResult<NaiveDate> {
    parse_date(s).ok_or_else(|| AppError::InvalidDate(s.to_string()))
}

/// Month number (1-12) from an English month name.
/// `Jul`, `jul`, `JULY` all give 7.
pub fn month_from_name(s: &str) -> Option<u32> {
    s.trim().parse::<Month>().ok().map(|m| m.number_from_month())
}

/// Full English month name ("July") for 1-12.
pub fn month_name(month: u32) -> Option<&'static str> {
    let m = Month::try_from(u8::try_from(month).ok()?).ok()?;
    Some(m.name())
}

pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    Some((next - first).num_days() as u32)
}

pub fn month_bounds(year: i32, month: u32) -> Option<(NaiveDate, NaiveDate)> {
    let last = days_in_month(year, month)?;
    Some((
        NaiveDate::from_ymd_opt(year, month, 1)?,
        NaiveDate::from_ymd_opt(year, month, last)?,
    ))
}

pub fn in_month(date: &NaiveDate, year: i32, month: u32) -> bool {
    date.year() == year && date.month() == month
}
