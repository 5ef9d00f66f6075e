// src/export/json_csv.rs

use crate::errors::{AppError, AppResult};
use crate::export::long::{LongRow, write_long_csv};
use crate::export::notify_export_success;
use crate::ui::messages::info;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Export JSON pretty-printed.
pub(crate) fn export_json(rows: &[LongRow], path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let json_data = serde_json::to_string_pretty(rows)
        .map_err(|e| AppError::Export(format!("JSON serialization error: {e}")))?;

    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;

    notify_export_success("JSON", path);
    Ok(())
}

/// Export long-form CSV with the fixed `Employee ID,Date,Shift` header.
pub(crate) fn export_csv(rows: &[LongRow], path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let file = File::create(path)?;
    write_long_csv(BufWriter::new(file), rows)?;

    notify_export_success("CSV", path);
    Ok(())
}
