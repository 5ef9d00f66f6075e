use crate::core::range::query_range;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::calendar::{CalendarGrid, DayCell, Week, WeekRoster, WeekRow};
use crate::models::shift::ShiftAssignment;
use crate::utils::date::{days_in_month, in_month, month_bounds};
use chrono::{Datelike, Days, NaiveDate};
use std::collections::{BTreeMap, HashMap};

/// Lay out `shifts` for `month`/`year` as Monday-first weeks.
///
/// Shifts outside the month are ignored. Each day keeps every
/// `employee:code` token in the order encountered.
pub fn render(shifts: &[ShiftAssignment], month: u32, year: i32) -> AppResult<CalendarGrid> {
    let last_day = days_in_month(year, month).ok_or_else(|| {
        AppError::MalformedInput(format!("invalid month {} for year {}", month, year))
    })?;

    let mut by_day: HashMap<u32, Vec<String>> = HashMap::new();
    for s in shifts.iter().filter(|s| in_month(&s.date, year, month)) {
        by_day.entry(s.date.day()).or_default().push(s.token());
    }

    // Column of day 1 (0 = Monday); safe because days_in_month validated the month.
    let lead = NaiveDate::from_ymd_opt(year, month, 1)
        .map(|d| d.weekday().num_days_from_monday() as usize)
        .unwrap_or(0);

    let mut cells: Vec<DayCell> = Vec::with_capacity(42);
    cells.extend(std::iter::repeat_n(DayCell::Outside, lead));
    for day in 1..=last_day {
        cells.push(DayCell::Day {
            day,
            entries: by_day.remove(&day).unwrap_or_default(),
        });
    }
    while cells.len() % 7 != 0 {
        cells.push(DayCell::Outside);
    }

    let weeks = cells
        .chunks(7)
        .map(|chunk| Week {
            days: std::array::from_fn(|i| chunk[i].clone()),
        })
        .collect();

    Ok(CalendarGrid { year, month, weeks })
}

/// Seven days starting at `start`, one row per employee identifier
/// (sorted lexically). A later shift for the same key wins.
pub fn week_view(shifts: &[ShiftAssignment], start: NaiveDate) -> AppResult<WeekRoster> {
    let days = week_days(start)?;
    let end = days[6];

    let mut rows: BTreeMap<String, [Option<String>; 7]> = BTreeMap::new();
    for s in shifts.iter().filter(|s| s.date >= start && s.date <= end) {
        let col = (s.date - start).num_days() as usize;
        rows.entry(s.employee_id.clone()).or_default()[col] = Some(s.code.clone());
    }

    Ok(WeekRoster {
        days,
        rows: rows
            .into_iter()
            .map(|(employee_id, codes)| WeekRow { employee_id, codes })
            .collect(),
    })
}

fn week_days(start: NaiveDate) -> AppResult<[NaiveDate; 7]> {
    let mut days = [start; 7];
    for (i, d) in days.iter_mut().enumerate() {
        *d = start
            .checked_add_days(Days::new(i as u64))
            .ok_or_else(|| AppError::InvalidDate(format!("{} + {} days", start, i)))?;
    }
    Ok(days)
}

/// Store-backed views.
pub struct CalendarLogic;

impl CalendarLogic {
    /// Month view of the stored roster.
    pub fn render_month(pool: &DbPool, month: u32, year: i32) -> AppResult<CalendarGrid> {
        let (first, last) = month_bounds(year, month).ok_or_else(|| {
            AppError::MalformedInput(format!("invalid month {} for year {}", month, year))
        })?;

        let shifts = query_range(pool, first, last)?;
        render(&shifts, month, year)
    }

    /// Seven-day roster of the stored shifts from `start`.
    pub fn render_week(pool: &DbPool, start: NaiveDate) -> AppResult<WeekRoster> {
        let days = week_days(start)?;
        let shifts = query_range(pool, days[0], days[6])?;
        week_view(&shifts, start)
    }
}
