use crate::db::migrate::run_pending_migrations;
use crate::errors::AppResult;
use rusqlite::Connection;

/// Initialize the database.
/// Delegates all schema creation / upgrades to the migration engine.
pub fn init_db(conn: &Connection) -> AppResult<()> {
    // Shifts only soft-reference employees (see migrate.rs), but keep
    // SQLite's FK enforcement on for any future constraint.
    conn.execute_batch("PRAGMA foreign_keys = ON;")?;

    run_pending_migrations(conn)?;
    Ok(())
}
