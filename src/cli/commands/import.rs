use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::import::ImportLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::import::decode_file;
use crate::ui::messages::{header, info, success, warning};
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Import {
        file,
        year,
        dry_run,
    } = cmd
    {
        let path = expand_tilde(file);

        if *dry_run {
            let shifts = decode_file(&path, *year)?;
            header(format!("{} (dry run)", path.display()));
            for s in &shifts {
                println!("{}  {}  {}", s.employee_id, s.date_str(), s.code);
            }
            info(format!("{} shifts decoded, nothing stored.", shifts.len()));
            return Ok(());
        }

        info(format!("Importing {} for year {}…", path.display(), year));

        let mut pool = DbPool::new(&cfg.database)?;
        let summary = ImportLogic::import_file(&mut pool, &path, *year)?;
        pool.close()?;

        if summary.stored == 0 {
            warning("The file contains no shifts.");
        } else {
            success(format!(
                "Imported {} shifts for {} employees.",
                summary.stored, summary.employees
            ));
        }
    }

    Ok(())
}
