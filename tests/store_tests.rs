use chrono::NaiveDate;
use rroster::core::employee::EmployeeLogic;
use rroster::core::import::ImportLogic;
use rroster::core::range::{filter_range, query_range};
use rroster::core::shift::ShiftLogic;
use rroster::db::pool::DbPool;
use rroster::errors::AppError;
use rroster::export::ExportLogic;
use rroster::models::group::Group;
use rroster::models::shift::ShiftAssignment;

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn shift(emp: &str, date: NaiveDate, code: &str) -> ShiftAssignment {
    ShiftAssignment::new(emp, date, code).unwrap()
}

#[test]
fn stored_shift_is_returned_by_range() {
    let mut pool = DbPool::in_memory().unwrap();
    ShiftLogic::add(&mut pool, "E001", d(2024, 7, 1), "AL").unwrap();

    let got = query_range(&pool, d(2024, 7, 1), d(2024, 7, 1)).unwrap();
    assert_eq!(got, vec![shift("E001", d(2024, 7, 1), "AL")]);
}

#[test]
fn second_write_for_same_day_overwrites() {
    let mut pool = DbPool::in_memory().unwrap();

    let first = ShiftLogic::add(&mut pool, "E001", d(2024, 7, 1), "AL").unwrap();
    let second = ShiftLogic::add(&mut pool, "E001", d(2024, 7, 1), "EC").unwrap();

    assert_eq!(first, None);
    assert_eq!(second.as_deref(), Some("AL"));

    let got = query_range(&pool, d(2024, 7, 1), d(2024, 7, 31)).unwrap();
    assert_eq!(got, vec![shift("E001", d(2024, 7, 1), "EC")]);
}

#[test]
fn range_is_inclusive_and_sorted() {
    let mut pool = DbPool::in_memory().unwrap();
    let shifts = vec![
        shift("E001", d(2024, 7, 10), "C"),
        shift("E002", d(2024, 6, 30), "X"),
        shift("E001", d(2024, 7, 1), "A"),
        shift("E002", d(2024, 7, 31), "D"),
        shift("E002", d(2024, 7, 1), "B"),
        shift("E001", d(2024, 8, 1), "Y"),
    ];
    ImportLogic::store(&mut pool, &shifts, "test").unwrap();

    let got = query_range(&pool, d(2024, 7, 1), d(2024, 7, 31)).unwrap();
    let codes: Vec<&str> = got.iter().map(|s| s.code.as_str()).collect();

    // same-date shifts keep insertion order
    assert_eq!(codes, vec!["A", "B", "C", "D"]);
}

#[test]
fn empty_range_result_is_not_an_error() {
    let pool = DbPool::in_memory().unwrap();
    let got = query_range(&pool, d(2024, 1, 1), d(2024, 12, 31)).unwrap();
    assert!(got.is_empty());
}

#[test]
fn inverted_range_is_rejected() {
    let pool = DbPool::in_memory().unwrap();
    let err = query_range(&pool, d(2024, 7, 2), d(2024, 7, 1)).unwrap_err();
    assert!(matches!(err, AppError::InvalidRange { .. }));

    let err = filter_range(&[], d(2024, 7, 2), d(2024, 7, 1)).unwrap_err();
    assert!(matches!(err, AppError::InvalidRange { .. }));
}

#[test]
fn filter_range_matches_store_contract() {
    let shifts = vec![
        shift("E002", d(2024, 7, 2), "B"),
        shift("E001", d(2024, 7, 1), "A"),
        shift("E003", d(2024, 7, 2), "C"),
        shift("E001", d(2024, 7, 3), "Z"),
    ];

    let got = filter_range(&shifts, d(2024, 7, 1), d(2024, 7, 2)).unwrap();
    let codes: Vec<&str> = got.iter().map(|s| s.code.as_str()).collect();
    assert_eq!(codes, vec!["A", "B", "C"]);
}

#[test]
fn edit_and_delete_missing_shift_report_not_found() {
    let mut pool = DbPool::in_memory().unwrap();

    let err = ShiftLogic::edit(&mut pool, "E001", d(2024, 7, 1), "AL").unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));

    let err = ShiftLogic::delete(&mut pool, "E001", d(2024, 7, 1)).unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
}

#[test]
fn edit_then_delete_shift() {
    let mut pool = DbPool::in_memory().unwrap();
    ShiftLogic::add(&mut pool, "E001", d(2024, 7, 1), "AL").unwrap();

    ShiftLogic::edit(&mut pool, "E001", d(2024, 7, 1), "PH").unwrap();
    let got = ShiftLogic::get(&pool, "E001", d(2024, 7, 1)).unwrap();
    assert_eq!(got.map(|s| s.code).as_deref(), Some("PH"));

    ShiftLogic::delete(&mut pool, "E001", d(2024, 7, 1)).unwrap();
    assert!(ShiftLogic::list_all(&pool).unwrap().is_empty());
}

#[test]
fn empty_code_is_rejected() {
    let mut pool = DbPool::in_memory().unwrap();
    let err = ShiftLogic::add(&mut pool, "E001", d(2024, 7, 1), "  ").unwrap_err();
    assert!(matches!(err, AppError::MalformedInput(_)));
}

#[test]
fn failed_import_leaves_store_untouched() {
    let mut pool = DbPool::in_memory().unwrap();
    ShiftLogic::add(&mut pool, "E001", d(2024, 7, 1), "AL").unwrap();

    // bypass the constructor so the store's own check rejects the row
    let bad = ShiftAssignment {
        employee_id: "E002".into(),
        date: d(2024, 7, 3),
        code: " ".into(),
    };
    let shifts = vec![shift("E001", d(2024, 7, 1), "EC"), bad];

    assert!(ImportLogic::store(&mut pool, &shifts, "test").is_err());

    let got = ShiftLogic::list_all(&pool).unwrap();
    assert_eq!(got, vec![shift("E001", d(2024, 7, 1), "AL")]);
}

#[test]
fn import_summary_counts_distinct_employees() {
    let mut pool = DbPool::in_memory().unwrap();
    let shifts = vec![
        shift("E001", d(2024, 7, 1), "AL"),
        shift("E001", d(2024, 7, 3), "EC"),
        shift("E002", d(2024, 7, 2), "O"),
    ];

    let summary = ImportLogic::store(&mut pool, &shifts, "test").unwrap();
    assert_eq!(summary.stored, 3);
    assert_eq!(summary.employees, 2);
}

#[test]
fn repeated_key_in_one_import_is_counted_once() {
    let mut pool = DbPool::in_memory().unwrap();
    let shifts = vec![
        shift("E001", d(2024, 7, 1), "AL"),
        shift("E001", d(2024, 7, 1), "EC"),
    ];

    let summary = ImportLogic::store(&mut pool, &shifts, "test").unwrap();
    assert_eq!(summary.stored, 1);
    assert_eq!(summary.employees, 1);

    let got = ShiftLogic::list_all(&pool).unwrap();
    assert_eq!(got, vec![shift("E001", d(2024, 7, 1), "EC")]);
}

#[test]
fn employees_are_added_listed_and_removed_with_their_shifts() {
    let mut pool = DbPool::in_memory().unwrap();

    let anna = EmployeeLogic::add(&mut pool, " Anna ", Group::A).unwrap();
    let bruno = EmployeeLogic::add(&mut pool, "Bruno", Group::C).unwrap();
    assert_eq!(anna.name, "Anna");
    assert_ne!(anna.id, bruno.id);

    let key = anna.shift_key();
    ShiftLogic::add(&mut pool, &key, d(2024, 7, 1), "AL").unwrap();
    ShiftLogic::add(&mut pool, &key, d(2024, 7, 2), "EC").unwrap();
    ShiftLogic::add(&mut pool, &bruno.shift_key(), d(2024, 7, 1), "O").unwrap();

    let (removed, shifts) = EmployeeLogic::remove(&mut pool, anna.id).unwrap();
    assert_eq!(removed.name, "Anna");
    assert_eq!(shifts, 2);

    let left = EmployeeLogic::list(&pool).unwrap();
    assert_eq!(left.len(), 1);
    assert_eq!(left[0].group, Group::C);

    let remaining = ShiftLogic::list_all(&pool).unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].employee_id, bruno.shift_key());
}

#[test]
fn removing_unknown_employee_is_not_found() {
    let mut pool = DbPool::in_memory().unwrap();
    let err = EmployeeLogic::remove(&mut pool, 42).unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
}

#[test]
fn empty_employee_name_is_rejected() {
    let mut pool = DbPool::in_memory().unwrap();
    let err = EmployeeLogic::add(&mut pool, "   ", Group::B).unwrap_err();
    assert!(matches!(err, AppError::MalformedInput(_)));
}

#[test]
fn export_range_writes_long_csv() {
    let mut pool = DbPool::in_memory().unwrap();
    let shifts = vec![
        shift("E002", d(2024, 7, 2), "O"),
        shift("E001", d(2024, 7, 1), "AL"),
        shift("E001", d(2024, 8, 1), "N"),
    ];
    ImportLogic::store(&mut pool, &shifts, "test").unwrap();

    let path = std::env::temp_dir().join("store_export_range.csv");
    let written = ExportLogic::export_range(&pool, d(2024, 7, 1), d(2024, 7, 31), &path).unwrap();
    assert_eq!(written, 2);

    let content = std::fs::read_to_string(&path).unwrap();
    assert_eq!(
        content,
        "Employee ID,Date,Shift\nE001,2024-07-01,AL\nE002,2024-07-02,O\n"
    );
}

/// Create a first-generation database (`nurses` + `schedule`) at a temp path.
fn legacy_db(name: &str, rows_sql: &str) -> std::path::PathBuf {
    let path = std::env::temp_dir().join(format!("{}_legacy_rroster.sqlite", name));
    std::fs::remove_file(&path).ok();

    let conn = rusqlite::Connection::open(&path).unwrap();
    conn.execute_batch(
        "CREATE TABLE nurses (
             nurse_id INTEGER PRIMARY KEY AUTOINCREMENT,
             name TEXT,
             group_name TEXT NOT NULL
         );
         CREATE TABLE schedule (
             nurse_id INTEGER NOT NULL,
             shift_date DATE NOT NULL,
             shift_type TEXT NOT NULL,
             PRIMARY KEY (nurse_id, shift_date),
             FOREIGN KEY (nurse_id) REFERENCES nurses (id)
         );",
    )
    .unwrap();
    conn.execute_batch("PRAGMA foreign_keys = OFF;").unwrap();
    conn.execute_batch(rows_sql).unwrap();
    path
}

fn legacy_row_count(path: &std::path::Path, table: &str) -> i64 {
    let conn = rusqlite::Connection::open(path).unwrap();
    conn.query_row(&format!("SELECT COUNT(*) FROM {}", table), [], |r| r.get(0))
        .unwrap()
}

#[test]
fn legacy_nurse_schedule_is_migrated_on_open() {
    let path = legacy_db(
        "migrated",
        "INSERT INTO nurses (name, group_name) VALUES ('Anna', 'b');
         INSERT INTO schedule VALUES (1, '2024-07-01', 'AL');
         INSERT INTO schedule VALUES (1, '2024-7-2', 'EC');
         INSERT INTO schedule VALUES (1, '2024-07-03', ' ');",
    );

    let pool = DbPool::new(&path.to_string_lossy()).unwrap();

    let employees = EmployeeLogic::list(&pool).unwrap();
    assert_eq!(employees.len(), 1);
    assert_eq!(employees[0].group, Group::B);

    // unpadded legacy dates are stored in ISO form, so ranges find them
    let july = query_range(&pool, d(2024, 7, 1), d(2024, 7, 31)).unwrap();
    assert_eq!(
        july,
        vec![
            shift("1", d(2024, 7, 1), "AL"),
            shift("1", d(2024, 7, 2), "EC"),
        ]
    );
    pool.close().unwrap();

    // reopening is a no-op
    let pool = DbPool::new(&path.to_string_lossy()).unwrap();
    assert_eq!(ShiftLogic::list_all(&pool).unwrap().len(), 2);
}

#[test]
fn legacy_nurse_with_unknown_group_blocks_migration() {
    let path = legacy_db(
        "bad_group",
        "INSERT INTO nurses (name, group_name) VALUES ('Ann', 'A');
         INSERT INTO nurses (name, group_name) VALUES ('Bob', 'D');
         INSERT INTO schedule VALUES (2, '2024-07-01', 'N');",
    );

    let err = DbPool::new(&path.to_string_lossy()).err().unwrap();
    match err {
        AppError::Migration(msg) => assert!(msg.contains("nurse 2 has group 'D'")),
        other => panic!("unexpected error: {other}"),
    }

    // nothing was moved or dropped
    assert_eq!(legacy_row_count(&path, "nurses"), 2);
    assert_eq!(legacy_row_count(&path, "schedule"), 1);
    assert_eq!(legacy_row_count(&path, "employees"), 0);
}

#[test]
fn legacy_shift_with_unreadable_date_blocks_migration() {
    let path = legacy_db(
        "bad_date",
        "INSERT INTO nurses (name, group_name) VALUES ('Ann', 'A');
         INSERT INTO schedule VALUES (1, 'next monday', 'AL');",
    );

    let err = DbPool::new(&path.to_string_lossy()).err().unwrap();
    assert!(matches!(err, AppError::Migration(_)));
    assert_eq!(legacy_row_count(&path, "schedule"), 1);
}
