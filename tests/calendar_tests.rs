use chrono::NaiveDate;
use rroster::core::calendar::{CalendarLogic, render, week_view};
use rroster::core::shift::ShiftLogic;
use rroster::db::pool::DbPool;
use rroster::errors::AppError;
use rroster::models::calendar::DayCell;
use rroster::models::shift::ShiftAssignment;
use rroster::ui::calendar_view::{render_text, render_week};

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn shift(emp: &str, date: NaiveDate, code: &str) -> ShiftAssignment {
    ShiftAssignment::new(emp, date, code).unwrap()
}

#[test]
fn july_2024_starts_on_monday() {
    let grid = render(&[shift("E001", d(2024, 7, 1), "AL")], 7, 2024).unwrap();

    assert_eq!(grid.position_of(1), Some((0, 0)));
    assert_eq!(grid.entries_for(1), ["E001:AL".to_string()]);
    // 31 days starting on Monday fill 5 rows
    assert_eq!(grid.weeks.len(), 5);
    assert_eq!(grid.weeks[4].days[2].day(), Some(31));
    assert_eq!(grid.weeks[4].days[3], DayCell::Outside);
}

#[test]
fn september_2024_starts_on_sunday() {
    let grid = render(&[], 9, 2024).unwrap();

    assert_eq!(grid.position_of(1), Some((0, 6)));
    for col in 0..6 {
        assert_eq!(grid.weeks[0].days[col], DayCell::Outside);
    }
    assert_eq!(grid.position_of(30), Some((5, 0)));
    assert_eq!(grid.weeks.len(), 6);
}

#[test]
fn every_token_is_kept_in_encounter_order() {
    let shifts = vec![
        shift("E002", d(2024, 7, 4), "O"),
        shift("E001", d(2024, 7, 4), "PH"),
        shift("E003", d(2024, 8, 4), "N"),
    ];
    let grid = render(&shifts, 7, 2024).unwrap();

    assert_eq!(
        grid.entries_for(4),
        ["E002:O".to_string(), "E001:PH".to_string()]
    );
    assert!(grid.entries_for(5).is_empty());
}

#[test]
fn invalid_month_is_rejected() {
    assert!(matches!(
        render(&[], 13, 2024).unwrap_err(),
        AppError::MalformedInput(_)
    ));
}

#[test]
fn compact_text_truncates_but_grid_keeps_tokens() {
    let shifts = vec![
        shift("E001", d(2024, 7, 1), "AL"),
        shift("E002", d(2024, 7, 1), "EC"),
    ];
    let grid = render(&shifts, 7, 2024).unwrap();
    let text = render_text(&grid, 5, false);
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines[0].trim(), "July 2024");
    assert!(lines[1].starts_with("Mon"));
    assert!(lines[2].starts_with(" 1 E001: "));
    assert!(!text.contains("E002"));

    assert_eq!(grid.entries_for(1).len(), 2);
}

#[test]
fn expanded_text_shows_each_token_on_its_own_line() {
    let shifts = vec![
        shift("E1", d(2024, 7, 1), "AL"),
        shift("E2", d(2024, 7, 1), "EC"),
    ];
    let grid = render(&shifts, 7, 2024).unwrap();
    let text = render_text(&grid, 6, true);
    let lines: Vec<&str> = text.lines().collect();

    assert!(lines[2].starts_with(" 1 E1:AL"));
    assert!(lines[3].starts_with("   E2:EC"));
}

#[test]
fn week_view_places_codes_by_offset() {
    let shifts = vec![
        shift("E002", d(2024, 7, 3), "O"),
        shift("E001", d(2024, 7, 1), "AL"),
        shift("E001", d(2024, 7, 7), "EC"),
        shift("E001", d(2024, 7, 8), "X"),
    ];
    let roster = week_view(&shifts, d(2024, 7, 1)).unwrap();

    assert_eq!(roster.days[6], d(2024, 7, 7));
    assert_eq!(roster.rows.len(), 2);
    assert_eq!(roster.rows[0].employee_id, "E001");
    assert_eq!(roster.rows[0].codes[0].as_deref(), Some("AL"));
    assert_eq!(roster.rows[0].codes[6].as_deref(), Some("EC"));
    assert_eq!(roster.rows[1].codes[2].as_deref(), Some("O"));
    assert_eq!(roster.rows[1].codes[0], None);

    let text = render_week(&roster);
    assert!(text.contains("E001"));
    assert!(text.contains("--"));
}

#[test]
fn store_backed_views_use_stored_shifts() {
    let mut pool = DbPool::in_memory().unwrap();
    ShiftLogic::add(&mut pool, "E001", d(2024, 7, 1), "AL").unwrap();
    ShiftLogic::add(&mut pool, "E001", d(2024, 6, 30), "N").unwrap();

    let grid = CalendarLogic::render_month(&pool, 7, 2024).unwrap();
    assert_eq!(grid.entries_for(1), ["E001:AL".to_string()]);

    let roster = CalendarLogic::render_week(&pool, d(2024, 6, 30)).unwrap();
    assert_eq!(roster.rows[0].codes[0].as_deref(), Some("N"));
    assert_eq!(roster.rows[0].codes[1].as_deref(), Some("AL"));
}
