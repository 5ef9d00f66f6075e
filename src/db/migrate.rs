use crate::errors::{AppError, AppResult};
use crate::models::group::Group;
use crate::ui::messages::{success, warning};
use chrono::NaiveDate;
use rusqlite::{Connection, OptionalExtension, params};

const LEGACY_IMPORT_VERSION: &str = "20241020_0001_import_nurse_schedule";

/// Ensure that the `log` table exists.
fn ensure_log_table(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn table_exists(conn: &Connection, name: &str) -> AppResult<bool> {
    let mut stmt = conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name=?1")?;
    let exists: Option<String> = stmt.query_row([name], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

/// `employees` and `shifts`.
///
/// `shifts.employee_id` is an opaque text identifier: imported grids use
/// external ids (e.g. `E001`) that need not exist in `employees`, so there
/// is no foreign key. Removing an employee deletes the shifts recorded
/// under its numeric id in the same transaction (see core::employee).
fn create_roster_tables(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS employees (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            name        TEXT NOT NULL,
            group_name  TEXT NOT NULL CHECK(group_name IN ('A','B','C')),
            created_at  TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS shifts (
            employee_id TEXT NOT NULL,
            shift_date  TEXT NOT NULL,
            shift_code  TEXT NOT NULL CHECK(length(trim(shift_code)) > 0),
            PRIMARY KEY (employee_id, shift_date)
        );

        CREATE INDEX IF NOT EXISTS idx_shifts_date ON shifts(shift_date);
        "#,
    )?;
    Ok(())
}

fn migration_applied(conn: &Connection, version: &str) -> AppResult<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn backup_before_migration(db_path: &str) -> AppResult<()> {
    use chrono::Local;
    use std::fs::{self, File};
    use std::io::Write;
    use zip::CompressionMethod;
    use zip::ZipWriter;
    use zip::write::FileOptions;

    let backup_err = |stage: &str, e: &dyn std::fmt::Display| {
        AppError::Migration(format!("backup failed ({}): {}", stage, e))
    };

    let backup_name = format!(
        "{}-backup_db_pre_roster_import.zip",
        Local::now().format("%Y%m%d_%H%M%S")
    );

    let parent = std::path::Path::new(db_path)
        .parent()
        .unwrap_or_else(|| std::path::Path::new("."));
    let backup_path = parent.join(&backup_name);

    let file = File::create(&backup_path).map_err(|e| backup_err("create", &e))?;
    let mut zip = ZipWriter::new(file);

    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(CompressionMethod::Deflated);

    zip.start_file("database.sqlite", options)
        .map_err(|e| backup_err("start_file", &e))?;

    let db_content = fs::read(db_path).map_err(|e| backup_err("read", &e))?;
    zip.write_all(&db_content)
        .map_err(|e| backup_err("write_all", &e))?;
    zip.finish().map_err(|e| backup_err("finish", &e))?;

    success(format!("📦 Backup created: {}", backup_path.display()));
    Ok(())
}

struct LegacyNurse {
    id: i64,
    name: String,
    group: String,
}

struct LegacyShift {
    nurse_id: i64,
    date: String,
    code: String,
}

fn load_legacy_nurses(conn: &Connection) -> AppResult<Vec<LegacyNurse>> {
    let mut stmt = conn.prepare(
        "SELECT nurse_id, IFNULL(name, ''), IFNULL(group_name, '') FROM nurses ORDER BY nurse_id",
    )?;
    let rows = stmt.query_map([], |row| {
        Ok(LegacyNurse {
            id: row.get(0)?,
            name: row.get(1)?,
            group: row.get(2)?,
        })
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

fn load_legacy_schedule(conn: &Connection) -> AppResult<Vec<LegacyShift>> {
    let mut stmt = conn.prepare(
        "SELECT nurse_id, CAST(shift_date AS TEXT), IFNULL(shift_type, '')
         FROM schedule ORDER BY rowid",
    )?;
    let rows = stmt.query_map([], |row| {
        Ok(LegacyShift {
            nurse_id: row.get(0)?,
            date: row.get(1)?,
            code: row.get(2)?,
        })
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Legacy dates were stored as typed; `2024-7-2` is accepted and
/// rewritten as `2024-07-02`.
fn normalize_legacy_date(raw: &str) -> Option<String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .ok()
        .map(|d| d.format("%Y-%m-%d").to_string())
}

/// Move data from the first-generation schema (`nurses` + `schedule`,
/// whose foreign key pointed at a non-existent `nurses.id` column) into
/// `employees` + `shifts`, then drop the old tables.
///
/// Every legacy row must be representable: an unknown group or an
/// unreadable date aborts with `AppError::Migration` and leaves the old
/// tables untouched. Shifts with an empty code carried no assignment and
/// are skipped with a warning.
fn migrate_legacy_schedule(conn: &Connection) -> AppResult<()> {
    let has_nurses = table_exists(conn, "nurses")?;
    let has_schedule = table_exists(conn, "schedule")?;

    if !has_nurses && !has_schedule {
        return Ok(());
    }
    if migration_applied(conn, LEGACY_IMPORT_VERSION)? {
        return Ok(());
    }

    let nurses = if has_nurses {
        load_legacy_nurses(conn)?
    } else {
        Vec::new()
    };
    let schedule = if has_schedule {
        load_legacy_schedule(conn)?
    } else {
        Vec::new()
    };

    let mut problems = Vec::new();
    let mut employees = Vec::with_capacity(nurses.len());
    for n in &nurses {
        match Group::from_code(&n.group) {
            Some(g) => employees.push((n, g)),
            None => problems.push(format!("nurse {} has group '{}'", n.id, n.group)),
        }
    }

    let mut shifts = Vec::with_capacity(schedule.len());
    let mut empty_codes = 0usize;
    for s in &schedule {
        let code = s.code.trim();
        if code.is_empty() {
            empty_codes += 1;
            continue;
        }
        match normalize_legacy_date(&s.date) {
            Some(date) => shifts.push((s.nurse_id.to_string(), date, code)),
            None => problems.push(format!(
                "schedule row for nurse {} has date '{}'",
                s.nurse_id, s.date
            )),
        }
    }

    if !problems.is_empty() {
        return Err(AppError::Migration(format!(
            "legacy nurse schedule not migrated, fix these rows first: {}",
            problems.join("; ")
        )));
    }

    warning("Legacy nurse schedule detected, creating safety backup before migration...");

    let db_path: String = conn
        .query_row("PRAGMA database_list;", [], |row| row.get::<_, String>(2))
        .unwrap_or_default();

    if db_path.is_empty() {
        warning("Could not determine DB path, backup skipped.");
    } else {
        backup_before_migration(&db_path)?;
    }

    // FK enforcement is toggled outside the transaction: the legacy
    // foreign key is unresolvable and would block the drops
    conn.execute_batch("PRAGMA foreign_keys = OFF;")?;
    let copied = copy_legacy_rows(conn, &employees, &shifts, has_nurses, has_schedule);
    conn.execute_batch("PRAGMA foreign_keys = ON;")?;
    copied?;

    if empty_codes > 0 {
        warning(format!(
            "{} legacy schedule rows without a shift code were skipped.",
            empty_codes
        ));
    }

    success(format!(
        "Migration applied: {} → {} employees, {} shifts",
        LEGACY_IMPORT_VERSION,
        employees.len(),
        shifts.len()
    ));

    Ok(())
}

fn copy_legacy_rows(
    conn: &Connection,
    employees: &[(&LegacyNurse, Group)],
    shifts: &[(String, String, &str)],
    has_nurses: bool,
    has_schedule: bool,
) -> AppResult<()> {
    let tx = conn.unchecked_transaction()?;

    for (n, g) in employees {
        tx.execute(
            "INSERT OR IGNORE INTO employees (id, name, group_name, created_at)
             VALUES (?1, ?2, ?3, datetime('now'))",
            params![n.id, n.name, g.to_db_str()],
        )?;
    }

    for (employee_id, date, code) in shifts {
        tx.execute(
            "INSERT INTO shifts (employee_id, shift_date, shift_code)
             VALUES (?1, ?2, ?3)
             ON CONFLICT(employee_id, shift_date) DO UPDATE SET shift_code = excluded.shift_code",
            params![employee_id, date, code],
        )?;
    }

    if has_schedule {
        tx.execute_batch("DROP TABLE schedule;")?;
    }
    if has_nurses {
        tx.execute_batch("DROP TABLE nurses;")?;
    }

    tx.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        params![
            LEGACY_IMPORT_VERSION,
            format!(
                "Imported legacy nurses/schedule tables ({} employees, {} shifts)",
                employees.len(),
                shifts.len()
            )
        ],
    )?;

    tx.commit()?;
    Ok(())
}

/// Public entry point: run all pending migrations.
///
/// Called by db::init_db() every time a store is opened.
pub fn run_pending_migrations(conn: &Connection) -> AppResult<()> {
    ensure_log_table(conn)?;
    create_roster_tables(conn)?;
    migrate_legacy_schedule(conn)?;
    Ok(())
}
