use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{init_db, init_db_with_data, mlg, register, setup_test_db};

#[test]
fn test_mark_reports_meal() {
    let db_path = setup_test_db("mark_reports_meal");
    init_db(&db_path);
    register(&db_path, "S1", "Asha Rao", "R-001");

    mlg()
        .args(["--db", &db_path, "mark", "S1", "--at", "2024-05-01 7:45 PM"])
        .assert()
        .success()
        .stdout(contains("Attendance marked").and(contains("Dinner")));
}

#[test]
fn test_mark_outside_windows_warns() {
    let db_path = setup_test_db("mark_outside_windows");
    init_db(&db_path);
    register(&db_path, "S1", "Asha Rao", "R-001");

    mlg()
        .args(["--db", &db_path, "mark", "S1", "--at", "2024-05-01 10:00"])
        .assert()
        .success()
        .stdout(contains("outside every meal window"));
}

#[test]
fn test_mark_unknown_student_fails() {
    let db_path = setup_test_db("mark_unknown_student");
    init_db(&db_path);

    mlg()
        .args(["--db", &db_path, "mark", "S9", "--at", "2024-05-01 08:00"])
        .assert()
        .failure()
        .stderr(contains("Student not found"));
}

#[test]
fn test_mark_bad_timestamp_fails() {
    let db_path = setup_test_db("mark_bad_timestamp");
    init_db(&db_path);
    register(&db_path, "S1", "Asha Rao", "R-001");

    mlg()
        .args(["--db", &db_path, "mark", "S1", "--at", "2024-05-01 13:00 PM"])
        .assert()
        .failure()
        .stderr(contains("Invalid timestamp"));
}

#[test]
fn test_track_by_unique_id() {
    let db_path = setup_test_db("track_by_unique_id");
    init_db_with_data(&db_path);

    mlg()
        .args(["--db", &db_path, "track", "S1"])
        .assert()
        .success()
        .stdout(
            contains("2024-05-01")
                .and(contains("2024-05-02"))
                .and(contains("R-001"))
                .and(contains("R-002").not())
                .and(contains("3 record(s)")),
        );
}

#[test]
fn test_track_by_meal() {
    let db_path = setup_test_db("track_by_meal");
    init_db_with_data(&db_path);

    mlg()
        .args(["--db", &db_path, "track", "--by", "meal", "lunch"])
        .assert()
        .success()
        .stdout(contains("3 record(s)"));
}

#[test]
fn test_track_by_date() {
    let db_path = setup_test_db("track_by_date");
    init_db_with_data(&db_path);

    mlg()
        .args(["--db", &db_path, "track", "--by", "date", "5/2/2024"])
        .assert()
        .success()
        .stdout(contains("1 record(s)").and(contains("2024-05-01").not()));
}

#[test]
fn test_grid_shows_meals_per_date() {
    let db_path = setup_test_db("grid_meals_per_date");
    init_db_with_data(&db_path);

    mlg()
        .args([
            "--db",
            &db_path,
            "grid",
            "--from",
            "2024-05-01",
            "--to",
            "2024-05-02",
        ])
        .assert()
        .success()
        .stdout(
            contains("Breakfast")
                .and(contains("Dinner"))
                .and(contains("2024-05-01"))
                .and(contains("2024-05-02"))
                .and(contains("Asha Rao"))
                .and(contains("Vikram Nair"))
                .and(contains("1 scan(s) fell outside")),
        );
}

#[test]
fn test_grid_range_limits_columns() {
    let db_path = setup_test_db("grid_range_limits");
    init_db_with_data(&db_path);

    mlg()
        .args([
            "--db",
            &db_path,
            "grid",
            "--from",
            "2024-05-02",
            "--to",
            "2024-05-02",
        ])
        .assert()
        .success()
        .stdout(contains("2024-05-02").and(contains("2024-05-01 ").not()));
}

#[test]
fn test_grid_missing_bound_shows_message() {
    let db_path = setup_test_db("grid_missing_bound");
    init_db_with_data(&db_path);

    mlg()
        .args(["--db", &db_path, "grid", "--from", "2024-05-01"])
        .assert()
        .success()
        .stderr(contains("Please select both"))
        .stdout(contains("Breakfast").not());
}

#[test]
fn test_grid_inverted_range_shows_message() {
    let db_path = setup_test_db("grid_inverted_range");
    init_db_with_data(&db_path);

    mlg()
        .args([
            "--db",
            &db_path,
            "grid",
            "--from",
            "2024-05-10",
            "--to",
            "2024-05-01",
        ])
        .assert()
        .success()
        .stderr(contains("is after"))
        .stdout(contains("Breakfast").not());
}

#[test]
fn test_grid_placeholder_for_unregistered_student() {
    let db_path = setup_test_db("grid_placeholder");
    init_db_with_data(&db_path);

    mlg()
        .args(["--db", &db_path, "unregister", "S2", "--yes"])
        .assert()
        .success();

    mlg()
        .args([
            "--db",
            &db_path,
            "grid",
            "--from",
            "2024-05-01",
            "--to",
            "2024-05-02",
        ])
        .assert()
        .success()
        .stdout(
            contains("N/A")
                .and(contains("Vikram Nair").not())
                .and(contains("No student profile for: S2")),
        );
}
