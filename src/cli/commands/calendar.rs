use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calendar::CalendarLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::calendar_view::render_text;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Calendar {
        month,
        year,
        width,
        expand,
    } = cmd
    {
        let pool = DbPool::new(&cfg.database)?;
        let grid = CalendarLogic::render_month(&pool, *month, *year)?;

        let cell_width = width.unwrap_or(cfg.calendar_cell_width);
        let expand = *expand || cfg.expand_calendar;

        println!();
        print!("{}", render_text(&grid, cell_width, expand));
    }
    Ok(())
}
