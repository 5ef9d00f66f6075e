//! Inclusive date-range retrieval, from the store or from memory.

use crate::db::pool::DbPool;
use crate::db::queries::load_shifts_between;
use crate::errors::{AppResult, ensure_range};
use crate::models::shift::ShiftAssignment;
use chrono::NaiveDate;

/// Stored shifts with `start <= date <= end`, ascending by date.
/// Shifts on the same date keep storage order.
pub fn query_range(
    pool: &DbPool,
    start: NaiveDate,
    end: NaiveDate,
) -> AppResult<Vec<ShiftAssignment>> {
    ensure_range(start, end)?;
    load_shifts_between(&pool.conn, &start, &end)
}

/// Same contract as [`query_range`] over an in-memory list.
/// Shifts on the same date keep input order.
pub fn filter_range(
    shifts: &[ShiftAssignment],
    start: NaiveDate,
    end: NaiveDate,
) -> AppResult<Vec<ShiftAssignment>> {
    ensure_range(start, end)?;

    let mut out: Vec<ShiftAssignment> = shifts
        .iter()
        .filter(|s| s.date >= start && s.date <= end)
        .cloned()
        .collect();

    out.sort_by_key(|s| s.date);
    Ok(out)
}
