use crate::cli::commands::ask_confirmation;
use crate::cli::parser::{Commands, EmployeeAction};
use crate::config::Config;
use crate::core::employee::EmployeeLogic;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::group::Group;
use crate::ui::messages::{header, info, success};
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Employee { action } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;

        match action {
            EmployeeAction::Add { name, group } => {
                let group =
                    Group::from_code(group).ok_or_else(|| AppError::InvalidGroup(group.clone()))?;
                let emp = EmployeeLogic::add(&mut pool, name, group)?;
                success(format!(
                    "Employee {} added to group {} with id {}.",
                    emp.name,
                    emp.group.code(),
                    emp.id
                ));
            }

            EmployeeAction::Remove { id, force } => {
                let prompt = format!(
                    "Remove employee {} and every shift stored under that id? This action is irreversible.",
                    id
                );
                if !*force && !ask_confirmation(&prompt) {
                    info("Operation cancelled.");
                    return Ok(());
                }

                let (emp, shifts) = EmployeeLogic::remove(&mut pool, *id)?;
                success(format!(
                    "Employee {} ({}) removed, {} shifts deleted.",
                    id, emp.name, shifts
                ));
            }

            EmployeeAction::List => {
                let employees = EmployeeLogic::list(&pool)?;
                if employees.is_empty() {
                    info("No employees stored.");
                    return Ok(());
                }

                header("Employees");
                let mut table = Table::new(vec![
                    Column::new("ID"),
                    Column::new("Name"),
                    Column::new("Group"),
                    Column::new("Weight"),
                ]);
                for e in &employees {
                    table.add_row(vec![
                        e.id.to_string(),
                        e.name.clone(),
                        e.group.code().to_string(),
                        e.group.weight().to_string(),
                    ]);
                }
                print!("{}", table.render());
            }
        }

        pool.close()?;
    }

    Ok(())
}
