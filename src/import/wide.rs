// src/import/wide.rs

use crate::errors::{AppError, AppResult};
use crate::models::shift::ShiftAssignment;
use crate::utils::date::{days_in_month, month_from_name};
use chrono::NaiveDate;
use csv::{ReaderBuilder, StringRecord, Trim};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Decode a "wide" month grid.
///
/// Layout:
/// ```text
/// Jul
/// ,Mon,Tue,Wed,...
/// E001,AL,,EC
/// ```
/// - row 1: month name (`Jul`, `July`, case-insensitive)
/// - row 2: weekday labels, ignored
/// - next rows: employee identifier, then one cell per day of month
///
/// Every non-empty cell becomes one assignment dated `year`/month/column.
/// Output follows row order, then day order.
pub fn decode<R: Read>(reader: R, year: i32) -> AppResult<Vec<ShiftAssignment>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let mut records = rdr.records();

    // 1️⃣ Month row
    let month_row = match records.next() {
        Some(r) => r.map_err(malformed)?,
        None => {
            return Err(AppError::MalformedInput(
                "missing month row (row 1)".into(),
            ));
        }
    };

    let month_label = month_row.get(0).unwrap_or("").trim_start_matches('\u{feff}');
    let month = month_from_name(month_label).ok_or_else(|| {
        AppError::MalformedInput(format!("unknown month '{}' in row 1", month_label))
    })?;

    let last_day = days_in_month(year, month).ok_or_else(|| {
        AppError::MalformedInput(format!("invalid year {} for month {}", year, month))
    })?;

    // 2️⃣ Weekday header: informational only
    if records.next().transpose().map_err(malformed)?.is_none() {
        return Ok(Vec::new());
    }

    // 3️⃣ Employee rows
    let mut out = Vec::new();

    for rec in records {
        let rec = rec.map_err(malformed)?;
        let line = rec.position().map(|p| p.line()).unwrap_or(0);

        if is_blank(&rec) {
            continue;
        }

        let employee_id = rec.get(0).unwrap_or("");
        if employee_id.is_empty() {
            return Err(AppError::MalformedInput(format!(
                "row {}: shifts without an employee identifier",
                line
            )));
        }

        for (col, cell) in rec.iter().enumerate().skip(1) {
            if cell.is_empty() {
                continue;
            }

            let day = col as u32;
            if day > last_day {
                return Err(AppError::MalformedInput(format!(
                    "row {}: day {} exceeds the {} days of {}-{:02}",
                    line, day, last_day, year, month
                )));
            }

            let date = NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
                AppError::MalformedInput(format!("row {}: invalid day {}", line, day))
            })?;

            out.push(ShiftAssignment::new(employee_id, date, cell)?);
        }
    }

    Ok(out)
}

/// `decode` over a file on disk.
pub fn decode_file(path: &Path, year: i32) -> AppResult<Vec<ShiftAssignment>> {
    let file = File::open(path)?;
    decode(file, year)
}

fn is_blank(rec: &StringRecord) -> bool {
    rec.iter().all(|c| c.is_empty())
}

fn malformed(e: csv::Error) -> AppError {
    AppError::MalformedInput(format!("unreadable CSV: {}", e))
}
