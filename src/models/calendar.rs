//! Transient calendar views built from shift assignments.

use chrono::NaiveDate;

/// A single cell of a Monday-first month layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DayCell {
    /// Padding before day 1 or after the last day.
    Outside,
    /// Day of month with its full `employee:code` tokens, in encounter order.
    Day { day: u32, entries: Vec<String> },
}

impl DayCell {
    pub fn day(&self) -> Option<u32> {
        match self {
            DayCell::Outside => None,
            DayCell::Day { day, .. } => Some(*day),
        }
    }

    pub fn entries(&self) -> &[String] {
        match self {
            DayCell::Outside => &[],
            DayCell::Day { entries, .. } => entries,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Week {
    pub days: [DayCell; 7],
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarGrid {
    pub year: i32,
    pub month: u32,
    pub weeks: Vec<Week>,
}

impl CalendarGrid {
    /// Tokens recorded for a day of month (empty when none or out of range).
    pub fn entries_for(&self, day: u32) -> &[String] {
        self.weeks
            .iter()
            .flat_map(|w| w.days.iter())
            .find(|c| c.day() == Some(day))
            .map(|c| c.entries())
            .unwrap_or(&[])
    }

    /// (week index, column index) of a day of month. Column 0 is Monday.
    pub fn position_of(&self, day: u32) -> Option<(usize, usize)> {
        for (w, week) in self.weeks.iter().enumerate() {
            if let Some(c) = week.days.iter().position(|cell| cell.day() == Some(day)) {
                return Some((w, c));
            }
        }
        None
    }
}

/// Seven consecutive days, one row per employee identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekRoster {
    pub days: [NaiveDate; 7],
    pub rows: Vec<WeekRow>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekRow {
    pub employee_id: String,
    pub codes: [Option<String>; 7],
}
