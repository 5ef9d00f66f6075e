use serde::{Deserialize, Serialize};

/// Employee classification used by the (external) fairness logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Group {
    A,
    B,
    C,
}

impl Group {
    pub fn code(&self) -> &'static str {
        match self {
            Group::A => "A",
            Group::B => "B",
            Group::C => "C",
        }
    }

    /// Scheduling weight. Metadata only, nothing in this crate enforces it.
    pub fn weight(&self) -> i32 {
        match self {
            Group::A => -1,
            Group::B => 1,
            Group::C => -1,
        }
    }

    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        self.code()
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "A" => Some(Group::A),
            "B" => Some(Group::B),
            "C" => Some(Group::C),
            _ => None,
        }
    }

    /// Helper: convert input code from CLI (lowercase or uppercase)
    pub fn from_code(code: &str) -> Option<Self> {
        Group::from_db_str(&code.trim().to_uppercase())
    }
}
