// src/export/long.rs

use crate::errors::{AppResult, ensure_range};
use crate::models::shift::ShiftAssignment;
use chrono::NaiveDate;
use csv::WriterBuilder;
use serde::Serialize;
use std::io::Write;

/// Fixed header of the long CSV format.
pub const LONG_HEADER: [&str; 3] = ["Employee ID", "Date", "Shift"];

/// One flat export row: employee, ISO date, shift code.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct LongRow {
    pub employee_id: String,
    pub date: String,
    pub shift: String,
}

impl LongRow {
    pub fn to_record(&self) -> [&str; 3] {
        [self.employee_id.as_str(), self.date.as_str(), self.shift.as_str()]
    }
}

/// Keep assignments with `start <= date <= end`, sorted by employee
/// identifier (lexical) then date, as flat rows.
///
/// Not the inverse of `import::wide::decode`: the output is one row per
/// assignment, not one row per employee.
pub fn encode(
    shifts: &[ShiftAssignment],
    start: NaiveDate,
    end: NaiveDate,
) -> AppResult<Vec<LongRow>> {
    ensure_range(start, end)?;

    let mut selected: Vec<&ShiftAssignment> = shifts
        .iter()
        .filter(|s| s.date >= start && s.date <= end)
        .collect();

    selected.sort_by(|a, b| {
        a.employee_id
            .cmp(&b.employee_id)
            .then_with(|| a.date.cmp(&b.date))
    });

    Ok(selected
        .into_iter()
        .map(|s| LongRow {
            employee_id: s.employee_id.clone(),
            date: s.date_str(),
            shift: s.code.clone(),
        })
        .collect())
}

/// Header row, then one record per row. The header is written even when
/// `rows` is empty.
pub fn write_long_csv<W: Write>(writer: W, rows: &[LongRow]) -> AppResult<()> {
    let mut wtr = WriterBuilder::new().has_headers(false).from_writer(writer);

    wtr.write_record(LONG_HEADER)?;
    for row in rows {
        wtr.write_record(row.to_record())?;
    }

    wtr.flush()?;
    Ok(())
}
