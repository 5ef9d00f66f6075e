use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;
use serde::Serialize;

/// One shift code for one employee on one date.
/// `(employee_id, date)` is the unique key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ShiftAssignment {
    pub employee_id: String,
    pub date: NaiveDate,
    pub code: String,
}

impl ShiftAssignment {
    /// Build an assignment, trimming identifier and code.
    /// Both must be non-empty.
    pub fn new(employee_id: &str, date: NaiveDate, code: &str) -> AppResult<Self> {
        let employee_id = employee_id.trim();
        let code = code.trim();

        if employee_id.is_empty() {
            return Err(AppError::MalformedInput(format!(
                "empty employee identifier for {}",
                date
            )));
        }
        if code.is_empty() {
            return Err(AppError::MalformedInput(format!(
                "empty shift code for {} on {}",
                employee_id, date
            )));
        }

        Ok(Self {
            employee_id: employee_id.to_string(),
            date,
            code: code.to_string(),
        })
    }

    /// Display token used by the calendar: `employee:code`.
    pub fn token(&self) -> String {
        format!("{}:{}", self.employee_id, self.code)
    }

    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}
