use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::range::query_range;
use crate::core::shift::ShiftLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::export::range::parse_range;
use crate::models::shift::ShiftAssignment;
use crate::ui::messages::{header, info};
use crate::utils::formatting::separator;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { range } = cmd {
        let pool = DbPool::new(&cfg.database)?;

        let (title, shifts) = match range.as_deref() {
            None => ("All shifts".to_string(), ShiftLogic::list_all(&pool)?),
            Some(r) if r.eq_ignore_ascii_case("all") => {
                ("All shifts".to_string(), ShiftLogic::list_all(&pool)?)
            }
            Some(r) => {
                let (start, end) = parse_range(r)?;
                (
                    format!("Shifts {} → {}", start, end),
                    query_range(&pool, start, end)?,
                )
            }
        };

        if shifts.is_empty() {
            info("No shifts found for selected range.");
            return Ok(());
        }

        header(title);
        print_shifts(&shifts, &cfg.separator_char);
    }
    Ok(())
}

fn print_shifts(shifts: &[ShiftAssignment], sep: &str) {
    let mut table = Table::new(vec![
        Column::new("Date"),
        Column::new("Weekday"),
        Column::new("Employee"),
        Column::new("Shift"),
    ]);

    for s in shifts {
        table.add_row(vec![
            s.date_str(),
            s.date.format("%a").to_string(),
            s.employee_id.clone(),
            s.code.clone(),
        ]);
    }

    let rendered = table.render();
    let width = rendered.lines().map(|l| l.trim_end().len()).max().unwrap_or(0);

    print!("{}", rendered);
    println!("{}", separator(sep, width));
    println!("{} shifts", shifts.len());
}
