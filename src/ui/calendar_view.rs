//! Text rendering of calendar views.
//!
//! Truncation happens only here: `CalendarGrid` always carries the full
//! tokens.

use crate::models::calendar::{CalendarGrid, DayCell, WeekRoster};
use crate::utils::date::month_name;
use crate::utils::formatting::{center, pad_left, pad_right, truncate_width};
use crate::utils::table::{Column, Table};

const WEEKDAYS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// Width of one rendered day: "dd " + tokens + " ".
fn cell_total(cell_width: usize) -> usize {
    2 + 1 + cell_width + 1
}

/// Render `grid` as text.
///
/// - compact (`expand == false`): one line per week, each day shows its
///   tokens joined by `,` and cut to `cell_width` columns
/// - expanded: one line per token, each token cut to `cell_width`
pub fn render_text(grid: &CalendarGrid, cell_width: usize, expand: bool) -> String {
    let cell_width = cell_width.max(1);
    let total = cell_total(cell_width);
    let mut out = String::new();

    let title = format!("{} {}", month_name(grid.month).unwrap_or("?"), grid.year);
    out.push_str(center(&title, total * 7).trim_end());
    out.push('\n');

    let header: String = WEEKDAYS.iter().map(|d| pad_right(d, total)).collect();
    out.push_str(header.trim_end());
    out.push('\n');

    for week in &grid.weeks {
        let lines = if expand {
            week.days
                .iter()
                .map(|c| c.entries().len())
                .max()
                .unwrap_or(0)
                .max(1)
        } else {
            1
        };

        for line in 0..lines {
            let mut row = String::new();
            for cell in &week.days {
                row.push_str(&render_cell(cell, line, cell_width, expand));
            }
            out.push_str(row.trim_end());
            out.push('\n');
        }
    }

    out
}

fn render_cell(cell: &DayCell, line: usize, cell_width: usize, expand: bool) -> String {
    let total = cell_total(cell_width);

    let DayCell::Day { day, entries } = cell else {
        return " ".repeat(total);
    };

    let number = if line == 0 {
        pad_left(&day.to_string(), 2)
    } else {
        "  ".to_string()
    };

    let text = if expand {
        entries.get(line).cloned().unwrap_or_default()
    } else {
        entries.join(",")
    };

    format!(
        "{} {} ",
        number,
        pad_right(&truncate_width(&text, cell_width), cell_width)
    )
}

/// Render a seven-day roster as a table, `--` for days without a shift.
pub fn render_week(roster: &WeekRoster) -> String {
    let mut columns = vec![Column::new("Employee")];
    for d in &roster.days {
        columns.push(Column::new(&d.format("%a %m-%d").to_string()));
    }

    let mut table = Table::new(columns);
    for row in &roster.rows {
        let mut cells = vec![row.employee_id.clone()];
        cells.extend(
            row.codes
                .iter()
                .map(|c| c.clone().unwrap_or_else(|| "--".to_string())),
        );
        table.add_row(cells);
    }

    table.render()
}
