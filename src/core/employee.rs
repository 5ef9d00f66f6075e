use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::{
    delete_employee, delete_shifts_for_employee, insert_employee, load_employee, load_employees,
};
use crate::errors::{AppError, AppResult};
use crate::models::employee::Employee;
use crate::models::group::Group;

pub struct EmployeeLogic;

impl EmployeeLogic {
    pub fn add(pool: &mut DbPool, name: &str, group: Group) -> AppResult<Employee> {
        let mut emp = Employee::new(name, group);
        if emp.name.is_empty() {
            return Err(AppError::MalformedInput("employee name is empty".into()));
        }

        pool.with_transaction(|tx| {
            emp.id = insert_employee(tx, &emp)?;
            ttlog(
                tx,
                "add_employee",
                &emp.id.to_string(),
                &format!("{} (group {})", emp.name, emp.group.code()),
            )?;
            Ok(())
        })?;

        Ok(emp)
    }

    /// Remove an employee and the shifts recorded under its id.
    /// Returns the removed employee and the number of removed shifts.
    pub fn remove(pool: &mut DbPool, id: i64) -> AppResult<(Employee, usize)> {
        pool.with_transaction(|tx| {
            let emp = load_employee(tx, id)?
                .ok_or_else(|| AppError::NotFound(format!("employee {}", id)))?;

            let removed_shifts = delete_shifts_for_employee(tx, &emp.shift_key())?;
            delete_employee(tx, id)?;

            ttlog(
                tx,
                "remove_employee",
                &id.to_string(),
                &format!("{} ({} shifts removed)", emp.name, removed_shifts),
            )?;

            Ok((emp, removed_shifts))
        })
    }

    pub fn list(pool: &DbPool) -> AppResult<Vec<Employee>> {
        load_employees(&pool.conn)
    }
}
