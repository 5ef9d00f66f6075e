use crate::errors::{AppError, AppResult};
use crate::models::employee::Employee;
use crate::models::group::Group;
use crate::models::shift::ShiftAssignment;
use chrono::NaiveDate;
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

fn date_str(d: &NaiveDate) -> String {
    d.format("%Y-%m-%d").to_string()
}

fn conversion_err(e: AppError) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(e))
}

// ---------------------------
// Shifts
// ---------------------------

pub fn map_shift(row: &Row) -> Result<ShiftAssignment> {
    let date_raw: String = row.get("shift_date")?;
    let date = NaiveDate::parse_from_str(&date_raw, "%Y-%m-%d")
        .map_err(|_| conversion_err(AppError::InvalidDate(date_raw.clone())))?;

    Ok(ShiftAssignment {
        employee_id: row.get("employee_id")?,
        date,
        code: row.get("shift_code")?,
    })
}

/// Insert or overwrite the shift stored under `(employee_id, date)`.
/// The row keeps its storage position when overwritten.
pub fn upsert_shift(conn: &Connection, shift: &ShiftAssignment) -> AppResult<()> {
    let mut stmt = conn.prepare_cached(
        "INSERT INTO shifts (employee_id, shift_date, shift_code)
         VALUES (?1, ?2, ?3)
         ON CONFLICT(employee_id, shift_date) DO UPDATE SET shift_code = excluded.shift_code",
    )?;
    stmt.execute(params![shift.employee_id, shift.date_str(), shift.code])?;
    Ok(())
}

/// Returns the number of updated rows (0 when the key is absent).
pub fn update_shift_code(
    conn: &Connection,
    employee_id: &str,
    date: &NaiveDate,
    code: &str,
) -> AppResult<usize> {
    let n = conn.execute(
        "UPDATE shifts SET shift_code = ?1 WHERE employee_id = ?2 AND shift_date = ?3",
        params![code, employee_id, date_str(date)],
    )?;
    Ok(n)
}

/// Returns the number of deleted rows (0 when the key is absent).
pub fn delete_shift(conn: &Connection, employee_id: &str, date: &NaiveDate) -> AppResult<usize> {
    let n = conn.execute(
        "DELETE FROM shifts WHERE employee_id = ?1 AND shift_date = ?2",
        params![employee_id, date_str(date)],
    )?;
    Ok(n)
}

pub fn delete_shifts_for_employee(conn: &Connection, employee_id: &str) -> AppResult<usize> {
    let n = conn.execute("DELETE FROM shifts WHERE employee_id = ?1", [employee_id])?;
    Ok(n)
}

pub fn load_shift(
    conn: &Connection,
    employee_id: &str,
    date: &NaiveDate,
) -> AppResult<Option<ShiftAssignment>> {
    let shift = conn
        .query_row(
            "SELECT employee_id, shift_date, shift_code FROM shifts
             WHERE employee_id = ?1 AND shift_date = ?2",
            params![employee_id, date_str(date)],
            map_shift,
        )
        .optional()?;
    Ok(shift)
}

/// Every stored shift, by date then storage order.
pub fn load_all_shifts(conn: &Connection) -> AppResult<Vec<ShiftAssignment>> {
    let mut stmt = conn.prepare(
        "SELECT employee_id, shift_date, shift_code FROM shifts
         ORDER BY shift_date ASC, rowid ASC",
    )?;

    let rows = stmt.query_map([], map_shift)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Shifts with `start <= date <= end`. ISO text dates compare
/// chronologically, so BETWEEN works on the stored column directly.
pub fn load_shifts_between(
    conn: &Connection,
    start: &NaiveDate,
    end: &NaiveDate,
) -> AppResult<Vec<ShiftAssignment>> {
    let mut stmt = conn.prepare(
        "SELECT employee_id, shift_date, shift_code FROM shifts
         WHERE shift_date BETWEEN ?1 AND ?2
         ORDER BY shift_date ASC, rowid ASC",
    )?;

    let rows = stmt.query_map(params![date_str(start), date_str(end)], map_shift)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

// ---------------------------
// Employees
// ---------------------------

pub fn map_employee(row: &Row) -> Result<Employee> {
    let group_raw: String = row.get("group_name")?;
    let group = Group::from_db_str(&group_raw)
        .ok_or_else(|| conversion_err(AppError::InvalidGroup(group_raw.clone())))?;

    Ok(Employee {
        id: row.get("id")?,
        name: row.get("name")?,
        group,
        created_at: row.get("created_at")?,
    })
}

/// Insert and return the auto-assigned id.
pub fn insert_employee(conn: &Connection, emp: &Employee) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO employees (name, group_name, created_at) VALUES (?1, ?2, ?3)",
        params![emp.name, emp.group.to_db_str(), emp.created_at],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn load_employee(conn: &Connection, id: i64) -> AppResult<Option<Employee>> {
    let emp = conn
        .query_row(
            "SELECT id, name, group_name, created_at FROM employees WHERE id = ?1",
            [id],
            map_employee,
        )
        .optional()?;
    Ok(emp)
}

pub fn load_employees(conn: &Connection) -> AppResult<Vec<Employee>> {
    let mut stmt =
        conn.prepare("SELECT id, name, group_name, created_at FROM employees ORDER BY id ASC")?;

    let rows = stmt.query_map([], map_employee)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn delete_employee(conn: &Connection, id: i64) -> AppResult<usize> {
    let n = conn.execute("DELETE FROM employees WHERE id = ?1", [id])?;
    Ok(n)
}
