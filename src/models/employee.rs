use super::group::Group;
use chrono::Local;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Employee {
    pub id: i64,            // ⇔ employees.id (auto-assigned)
    pub name: String,       // ⇔ employees.name
    pub group: Group,       // ⇔ employees.group_name ('A','B','C')
    pub created_at: String, // ⇔ employees.created_at (RFC 3339)
}

impl Employee {
    /// New, not yet stored employee (`id = 0` until inserted).
    pub fn new(name: &str, group: Group) -> Self {
        Self {
            id: 0,
            name: name.trim().to_string(),
            group,
            created_at: Local::now().to_rfc3339(),
        }
    }

    /// Identifier used as `shifts.employee_id` for this employee.
    pub fn shift_key(&self) -> String {
        self.id.to_string()
    }
}
