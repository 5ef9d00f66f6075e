// src/export/logic.rs

use crate::core::range::query_range;
use crate::core::shift::ShiftLogic;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::long::encode;
use crate::export::range::parse_range;
use crate::export::xlsx::export_xlsx;
use crate::ui::messages::warning;
use chrono::NaiveDate;
use std::path::Path;

/// High-level export entry points.
pub struct ExportLogic;

impl ExportLogic {
    /// Long-form CSV of the shifts in `[start, end]`.
    /// Returns the number of data rows written (header excluded).
    pub fn export_range(
        pool: &DbPool,
        start: NaiveDate,
        end: NaiveDate,
        path: &Path,
    ) -> AppResult<usize> {
        Self::write(pool, ExportFormat::Csv, Some((start, end)), path)
    }

    /// CLI export.
    ///
    /// - `format`: explicit format, or inferred from the file extension
    /// - `file`: absolute path of the output file
    /// - `range`: `None` / `"all"` for everything, otherwise a
    ///   `--range` expression (see `export::range::parse_range`)
    pub fn export(
        pool: &DbPool,
        format: Option<ExportFormat>,
        file: &str,
        range: &Option<String>,
        force: bool,
    ) -> AppResult<usize> {
        let path = Path::new(file);

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "output file path must be absolute: {file}"
            )));
        }

        let format = match format {
            Some(f) => f,
            None => ExportFormat::from_path(path)?,
        };

        let bounds = match range {
            None => None,
            Some(r) if r.eq_ignore_ascii_case("all") => None,
            Some(r) => Some(parse_range(r)?),
        };

        ensure_writable(path, force)?;

        Self::write(pool, format, bounds, path)
    }

    fn write(
        pool: &DbPool,
        format: ExportFormat,
        bounds: Option<(NaiveDate, NaiveDate)>,
        path: &Path,
    ) -> AppResult<usize> {
        let (shifts, (start, end)) = match bounds {
            Some((start, end)) => (query_range(pool, start, end)?, (start, end)),
            None => (ShiftLogic::list_all(pool)?, (NaiveDate::MIN, NaiveDate::MAX)),
        };

        let rows = encode(&shifts, start, end)?;

        if rows.is_empty() {
            warning("No shifts found for selected range.");
        }

        match format {
            ExportFormat::Csv => export_csv(&rows, path)?,
            ExportFormat::Json => export_json(&rows, path)?,
            ExportFormat::Xlsx => export_xlsx(&rows, path)?,
        }

        let target = path.display().to_string();
        let message = match bounds {
            Some((s, e)) => format!("{} rows ({}) {}..{}", rows.len(), format.as_str(), s, e),
            None => format!("{} rows ({}) all dates", rows.len(), format.as_str()),
        };
        ttlog(&pool.conn, "export", &target, &message)?;

        Ok(rows.len())
    }
}
