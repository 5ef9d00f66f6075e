use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::upsert_shift;
use crate::errors::AppResult;
use crate::import::wide::decode_file;
use crate::models::shift::ShiftAssignment;
use chrono::NaiveDate;
use std::collections::HashSet;
use std::path::Path;

/// Outcome of an import, for the CLI summary line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportSummary {
    /// Distinct (employee, date) keys written.
    pub stored: usize,
    pub employees: usize,
}

pub struct ImportLogic;

impl ImportLogic {
    /// Decode the wide grid at `path` for `year` and store every assignment.
    ///
    /// The whole file is written in one transaction: a failing row leaves
    /// the store as it was before the import.
    pub fn import_file(pool: &mut DbPool, path: &Path, year: i32) -> AppResult<ImportSummary> {
        let shifts = decode_file(path, year)?;
        Self::store(pool, &shifts, &path.display().to_string())
    }

    /// Upsert already decoded assignments.
    pub fn store(
        pool: &mut DbPool,
        shifts: &[ShiftAssignment],
        source: &str,
    ) -> AppResult<ImportSummary> {
        pool.with_transaction(|tx| {
            for s in shifts {
                upsert_shift(tx, s)?;
            }

            // a key repeated in the input is stored once (last code wins)
            let keys: HashSet<(&str, NaiveDate)> = shifts
                .iter()
                .map(|s| (s.employee_id.as_str(), s.date))
                .collect();
            let employees: HashSet<&str> = keys.iter().map(|(id, _)| *id).collect();

            let summary = ImportSummary {
                stored: keys.len(),
                employees: employees.len(),
            };

            ttlog(
                tx,
                "import",
                source,
                &format!(
                    "{} shifts for {} employees",
                    summary.stored, summary.employees
                ),
            )?;

            Ok(summary)
        })
    }
}
