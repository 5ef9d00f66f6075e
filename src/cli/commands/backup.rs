use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::backup::BackupLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::export::fs_utils::ensure_writable;
use crate::ui::messages::success;
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Backup {
        file,
        compress,
        force,
    } = cmd
    {
        let dest = expand_tilde(file);
        let written = if *compress {
            dest.with_extension("zip")
        } else {
            dest.clone()
        };
        ensure_writable(&written, *force)?;

        let pool = DbPool::new(&cfg.database)?;
        let final_path = BackupLogic::backup(&pool, &cfg.database, &dest, *compress)?;

        success(format!("Backup created: {}", final_path.display()));
    }

    Ok(())
}
