#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn mlg() -> Command {
    cargo_bin_cmd!("messlog")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_messlog.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_messlog_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

pub fn init_db(db_path: &str) {
    mlg()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

pub fn register(db_path: &str, id: &str, name: &str, roll_no: &str) {
    mlg()
        .args([
            "--db",
            db_path,
            "register",
            id,
            "--name",
            name,
            "--roll-no",
            roll_no,
            "--semester",
            "3",
            "--fee-paid",
            "Yes",
        ])
        .assert()
        .success();
}

pub fn mark_at(db_path: &str, id: &str, at: &str) {
    mlg()
        .args(["--db", db_path, "mark", id, "--at", at])
        .assert()
        .success();
}

/// Initialize DB with two students and a small set of scans:
///
/// - S1 eats breakfast and dinner on 2024-05-01, lunch on 2024-05-02
/// - S2 eats lunch on 2024-05-01 (twice) and scans once outside any window
pub fn init_db_with_data(db_path: &str) {
    init_db(db_path);

    register(db_path, "S1", "Asha Rao", "R-001");
    register(db_path, "S2", "Vikram Nair", "R-002");

    mark_at(db_path, "S1", "2024-05-01 08:00");
    mark_at(db_path, "S1", "2024-05-01 19:45");
    mark_at(db_path, "S1", "2024-05-02 12:30 PM");
    mark_at(db_path, "S2", "2024-05-01 12:05");
    mark_at(db_path, "S2", "2024-05-01 13:55:30");
    mark_at(db_path, "S2", "2024-05-01 10:00");
}
