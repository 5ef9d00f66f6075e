use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::{
    delete_shift, load_all_shifts, load_shift, update_shift_code, upsert_shift,
};
use crate::errors::{AppError, AppResult};
use crate::models::shift::ShiftAssignment;
use chrono::NaiveDate;

/// Manual edits of single assignments.
pub struct ShiftLogic;

impl ShiftLogic {
    /// Store a shift. An existing shift for the same employee and date is
    /// overwritten. Returns the previous code, if any.
    pub fn add(
        pool: &mut DbPool,
        employee_id: &str,
        date: NaiveDate,
        code: &str,
    ) -> AppResult<Option<String>> {
        let shift = ShiftAssignment::new(employee_id, date, code)?;

        pool.with_transaction(|tx| {
            let previous = load_shift(tx, &shift.employee_id, &date)?.map(|s| s.code);
            upsert_shift(tx, &shift)?;

            let message = match &previous {
                Some(old) => format!("{} → {}", old, shift.code),
                None => shift.code.clone(),
            };
            ttlog(
                tx,
                "add_shift",
                &format!("{}@{}", shift.employee_id, shift.date_str()),
                &message,
            )?;

            Ok(previous)
        })
    }

    /// Change the code of an existing shift.
    pub fn edit(
        pool: &mut DbPool,
        employee_id: &str,
        date: NaiveDate,
        new_code: &str,
    ) -> AppResult<()> {
        let shift = ShiftAssignment::new(employee_id, date, new_code)?;

        pool.with_transaction(|tx| {
            if update_shift_code(tx, &shift.employee_id, &date, &shift.code)? == 0 {
                return Err(not_found(&shift.employee_id, &date));
            }
            ttlog(
                tx,
                "edit_shift",
                &format!("{}@{}", shift.employee_id, shift.date_str()),
                &shift.code,
            )?;
            Ok(())
        })
    }

    pub fn delete(pool: &mut DbPool, employee_id: &str, date: NaiveDate) -> AppResult<()> {
        let employee_id = employee_id.trim();

        pool.with_transaction(|tx| {
            if delete_shift(tx, employee_id, &date)? == 0 {
                return Err(not_found(employee_id, &date));
            }
            ttlog(
                tx,
                "del_shift",
                &format!("{}@{}", employee_id, date),
                "Shift deleted",
            )?;
            Ok(())
        })
    }

    pub fn get(
        pool: &DbPool,
        employee_id: &str,
        date: NaiveDate,
    ) -> AppResult<Option<ShiftAssignment>> {
        load_shift(&pool.conn, employee_id.trim(), &date)
    }

    pub fn list_all(pool: &DbPool) -> AppResult<Vec<ShiftAssignment>> {
        load_all_shifts(&pool.conn)
    }
}

fn not_found(employee_id: &str, date: &NaiveDate) -> AppError {
    AppError::NotFound(format!("no shift for employee '{}' on {}", employee_id, date))
}
