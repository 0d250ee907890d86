#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use flightlog::models::log_row::LogRow;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn fl() -> Command {
    cargo_bin_cmd!("flightlog")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_flightlog.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_flightlog_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize a DB and add two timed loads
pub fn init_db_with_loads(db_path: &str) {
    fl().args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    for args in [
        vec!["add"],
        vec!["set", "1", "takeoff", "10:10"],
        vec!["set", "1", "landing", "11:40"],
        vec!["set", "1", "pax", "4"],
        vec!["add"],
        vec!["set", "2", "takeoff", "12:00"],
        vec!["set", "2", "landing", "12:25"],
        vec!["set", "2", "pax", "2"],
    ] {
        fl().args(["--db", db_path]).args(&args).assert().success();
    }
}

/// Row with a load label and everything else empty
pub fn row(load: &str) -> LogRow {
    LogRow::with_load(load)
}
