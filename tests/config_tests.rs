use predicates::str::contains;
use std::env;
use std::fs;
use std::path::PathBuf;

mod common;
use common::mlg;

/// Fresh empty directory inside the system temp dir
fn fresh_dir(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_messlog", name));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create temp dir");
    path
}

#[test]
fn test_relative_db_is_the_same_file_for_every_command() {
    let home = fresh_dir("relative_db_home");
    let cwd = fresh_dir("relative_db_cwd");

    let run = |args: &[&str]| {
        let mut cmd = mlg();
        cmd.env("HOME", &home)
            .env("APPDATA", &home)
            .current_dir(&cwd)
            .args(args);
        cmd
    };

    run(&["--db", "rel.sqlite", "--test", "init"])
        .assert()
        .success();

    run(&[
        "--db",
        "rel.sqlite",
        "register",
        "S1",
        "--name",
        "Asha Rao",
        "--roll-no",
        "R-001",
    ])
    .assert()
    .success();

    run(&["--db", "rel.sqlite", "details", "S1"])
        .assert()
        .success()
        .stdout(contains("Asha Rao"));

    assert!(!cwd.join("rel.sqlite").exists());
}
