use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use std::fs;
use std::path::{Path, PathBuf};
use zip::ZipWriter;
use zip::write::FileOptions;

pub struct BackupLogic;

impl BackupLogic {
    /// Copy the database file at `db_path` to `dest`, optionally zipped.
    /// Returns the path actually written.
    ///
    /// Overwrite confirmation is the caller's job.
    pub fn backup(
        pool: &DbPool,
        db_path: &str,
        dest: &Path,
        compress: bool,
    ) -> AppResult<PathBuf> {
        let src = Path::new(db_path);

        if !src.exists() {
            return Err(AppError::NotFound(format!(
                "database file {}",
                src.display()
            )));
        }

        if let Some(parent) = dest.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let final_path = if compress {
            compress_backup(src, dest)?
        } else {
            fs::copy(src, dest)?;
            dest.to_path_buf()
        };

        ttlog(
            &pool.conn,
            "backup",
            &final_path.to_string_lossy(),
            if compress {
                "Backup created and compressed"
            } else {
                "Backup created"
            },
        )?;

        Ok(final_path)
    }
}

/// Write `src` into a .zip next to `dest` (same stem).
fn compress_backup(src: &Path, dest: &Path) -> AppResult<PathBuf> {
    let zip_path = dest.with_extension("zip");
    let file = fs::File::create(&zip_path)?;
    let mut zip = ZipWriter::new(file);

    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    let entry_name = dest
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "rroster.sqlite".to_string());

    let mut f = fs::File::open(src)?;
    zip.start_file(entry_name, options)
        .map_err(std::io::Error::other)?;

    std::io::copy(&mut f, &mut zip)?;
    zip.finish().map_err(std::io::Error::other)?;

    Ok(zip_path)
}
