#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub const JULY_GRID: &str = "\
Jul
,Mon,Tue,Wed,Thu,Fri,Sat,Sun
E001,AL,,EC
E002,,O,,PH
";

pub fn rro() -> Command {
    cargo_bin_cmd!("rroster")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rroster.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Write `content` to a temp CSV file and return its path
pub fn temp_csv(name: &str, content: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_grid.csv", name));
    fs::write(&path, content).expect("write temp csv");
    path.to_string_lossy().to_string()
}

/// Initialize DB and import the July 2024 sample grid
pub fn init_db_with_data(name: &str) -> String {
    let db_path = setup_test_db(name);

    rro()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    let grid = temp_csv(name, JULY_GRID);
    rro()
        .args(["--db", &db_path, "import", "--file", &grid, "--year", "2024"])
        .assert()
        .success();

    db_path
}
