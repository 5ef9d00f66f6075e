use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use rusqlite::OptionalExtension;
use std::fs;

/// Counters shown by `db --info`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DbStats {
    pub employees: i64,
    pub shifts: i64,
    pub rostered_ids: i64,
    pub first_date: Option<String>,
    pub last_date: Option<String>,
}

pub fn collect(pool: &DbPool) -> AppResult<DbStats> {
    let conn = &pool.conn;

    let employees: i64 = conn.query_row("SELECT COUNT(*) FROM employees", [], |row| row.get(0))?;
    let shifts: i64 = conn.query_row("SELECT COUNT(*) FROM shifts", [], |row| row.get(0))?;
    let rostered_ids: i64 = conn.query_row(
        "SELECT COUNT(DISTINCT employee_id) FROM shifts",
        [],
        |row| row.get(0),
    )?;

    let first_date: Option<String> = conn
        .query_row(
            "SELECT shift_date FROM shifts ORDER BY shift_date ASC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    let last_date: Option<String> = conn
        .query_row(
            "SELECT shift_date FROM shifts ORDER BY shift_date DESC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    Ok(DbStats {
        employees,
        shifts,
        rostered_ids,
        first_date,
        last_date,
    })
}

pub fn print_db_info(pool: &DbPool, db_path: &str) -> AppResult<()> {
    let stats = collect(pool)?;

    println!();

    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_kb = (file_size as f64) / 1024.0;

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.1} KB", CYAN, RESET, file_kb);
    println!(
        "{}• Employees:{} {}{}{}",
        CYAN, RESET, GREEN, stats.employees, RESET
    );
    println!(
        "{}• Shifts:{} {}{}{} ({} distinct ids)",
        CYAN, RESET, GREEN, stats.shifts, RESET, stats.rostered_ids
    );

    let placeholder = format!("{GREY}--{RESET}");
    println!("{}• Date range:{}", CYAN, RESET);
    println!(
        "    from: {}",
        stats.first_date.as_deref().unwrap_or(&placeholder)
    );
    println!(
        "    to:   {}",
        stats.last_date.as_deref().unwrap_or(&placeholder)
    );

    println!();
    Ok(())
}
