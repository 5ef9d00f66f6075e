use crate::cli::parser::{Commands, ShiftAction};
use crate::config::Config;
use crate::core::shift::ShiftLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::date::require_date;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Shift { action } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;

        match action {
            ShiftAction::Add {
                employee,
                date,
                code,
            } => {
                let d = require_date(date)?;
                match ShiftLogic::add(&mut pool, employee, d, code)? {
                    Some(old) => success(format!(
                        "Shift for {} on {} changed from {} to {}.",
                        employee,
                        d,
                        old,
                        code.trim()
                    )),
                    None => success(format!(
                        "Shift {} added for {} on {}.",
                        code.trim(),
                        employee,
                        d
                    )),
                }
            }

            ShiftAction::Edit {
                employee,
                date,
                code,
            } => {
                let d = require_date(date)?;
                ShiftLogic::edit(&mut pool, employee, d, code)?;
                success(format!(
                    "Shift for {} on {} updated to {}.",
                    employee,
                    d,
                    code.trim()
                ));
            }

            ShiftAction::Del { employee, date } => {
                let d = require_date(date)?;
                ShiftLogic::delete(&mut pool, employee, d)?;
                success(format!("Shift for {} on {} deleted.", employee, d));
            }
        }

        pool.close()?;
    }

    Ok(())
}
