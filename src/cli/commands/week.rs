use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calendar::CalendarLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::calendar_view::render_week;
use crate::ui::messages::{header, info};
use crate::utils::date::require_date;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Week { start } = cmd {
        let start = require_date(start)?;

        let pool = DbPool::new(&cfg.database)?;
        let roster = CalendarLogic::render_week(&pool, start)?;

        if roster.rows.is_empty() {
            info(format!(
                "No shifts between {} and {}.",
                roster.days[0], roster.days[6]
            ));
            return Ok(());
        }

        header(format!("Week {} → {}", roster.days[0], roster.days[6]));
        print!("{}", render_week(&roster));
    }
    Ok(())
}
