use chrono::NaiveDate;
use messlog::core::attendance::{MarkLogic, SearchColumn, TrackLogic};
use messlog::core::grid::GridLogic;
use messlog::core::range::DateRange;
use messlog::core::student::StudentLogic;
use messlog::db::initialize::init_db;
use messlog::db::log::load_log;
use messlog::db::pool::DbPool;
use messlog::db::queries::{count_attendance, load_attendance, load_attendance_by_date};
use messlog::errors::AppError;
use messlog::models::daily_record::Mark;
use messlog::models::meal_slot::MealSlot;
use messlog::models::student::{StudentPatch, StudentProfile};
use messlog::utils::time::parse_timestamp;

fn fresh_pool() -> DbPool {
    let pool = DbPool::in_memory().expect("open in-memory db");
    init_db(&pool.conn).expect("init schema");
    pool
}

fn student(id: &str, name: &str, roll_no: &str) -> StudentProfile {
    StudentProfile {
        unique_id: id.to_string(),
        name: name.to_string(),
        roll_no: roll_no.to_string(),
        branch: "ECE".to_string(),
        semester: "5".to_string(),
        phone_no: "9800000000".to_string(),
        fee_paid: "No".to_string(),
        photo_ref: Some("photos/s1.jpg".to_string()),
    }
}

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

#[test]
fn test_register_and_details() {
    let mut pool = fresh_pool();
    let s1 = student("S1", "Asha Rao", "R-001");

    StudentLogic::register(&mut pool, &s1).unwrap();
    assert_eq!(StudentLogic::details(&mut pool, "S1").unwrap(), s1);

    let dup = StudentLogic::register(&mut pool, &s1);
    assert!(matches!(dup, Err(AppError::DuplicateStudent(_))));

    let missing = StudentLogic::details(&mut pool, "NOPE");
    assert!(matches!(missing, Err(AppError::StudentNotFound(_))));
}

#[test]
fn test_register_requires_identity() {
    let mut pool = fresh_pool();
    let res = StudentLogic::register(&mut pool, &student("S1", "  ", "R-001"));
    assert!(matches!(res, Err(AppError::InvalidStudent(_))));
}

#[test]
fn test_update_applies_only_given_fields() {
    let mut pool = fresh_pool();
    StudentLogic::register(&mut pool, &student("S1", "Asha Rao", "R-001")).unwrap();

    let patch = StudentPatch {
        fee_paid: Some("Yes".to_string()),
        ..Default::default()
    };
    let updated = StudentLogic::update(&mut pool, "S1", &patch).unwrap();

    assert_eq!(updated.fee_paid, "Yes");
    assert_eq!(updated.name, "Asha Rao");
    assert_eq!(StudentLogic::details(&mut pool, "S1").unwrap().fee_paid, "Yes");
}

#[test]
fn test_mark_requires_registered_student() {
    let mut pool = fresh_pool();
    let at = parse_timestamp("2024-05-01 08:00").unwrap();

    let res = MarkLogic::mark(&mut pool, "S9", "Present", at);
    assert!(matches!(res, Err(AppError::StudentNotFound(_))));
}

#[test]
fn test_mark_stores_scan_and_reports_meal() {
    let mut pool = fresh_pool();
    StudentLogic::register(&mut pool, &student("S1", "Asha Rao", "R-001")).unwrap();

    let (ev, slot) = MarkLogic::mark(
        &mut pool,
        "S1",
        "Present",
        parse_timestamp("2024-05-01 7:45 PM").unwrap(),
    )
    .unwrap();

    assert_eq!(slot, MealSlot::Dinner);
    assert!(ev.id > 0);
    assert_eq!(ev.roll_no, "R-001");
    assert_eq!(count_attendance(&pool.conn, "S1").unwrap(), 1);

    let stored = load_attendance_by_date(&pool.conn, &d(2024, 5, 1)).unwrap();
    assert_eq!(stored, vec![ev]);

    let log = load_log(&pool.conn).unwrap();
    assert!(log.iter().any(|e| e.operation == "mark"));
}

#[test]
fn test_grid_from_store_keeps_history_of_removed_students() {
    let mut pool = fresh_pool();
    StudentLogic::register(&mut pool, &student("S1", "Asha Rao", "R-001")).unwrap();
    StudentLogic::register(&mut pool, &student("S2", "Vikram Nair", "R-002")).unwrap();

    for (id, at) in [
        ("S1", "2024-05-01 08:00"),
        ("S1", "2024-05-02 12:30"),
        ("S2", "2024-05-01 17:10"),
    ] {
        MarkLogic::mark(&mut pool, id, "Present", parse_timestamp(at).unwrap()).unwrap();
    }

    assert!(StudentLogic::unregister(&mut pool, "S2").unwrap());
    assert!(!StudentLogic::unregister(&mut pool, "S2").unwrap());

    let grid = GridLogic::load(&mut pool).unwrap();
    assert_eq!(grid.dates, vec![d(2024, 5, 1), d(2024, 5, 2)]);
    assert_eq!(grid.missing_profiles(), vec!["S2"]);
    assert_eq!(
        grid.students["S2"].day(&d(2024, 5, 1)).get(MealSlot::Snacks),
        Mark::Present
    );
    assert_eq!(grid.students["S2"].identity("N/A").name, "N/A");

    let range = DateRange::from_input(Some("2024-05-02"), Some("2024-05-02")).unwrap();
    assert_eq!(GridLogic::columns(&grid, Some(&range)), vec![d(2024, 5, 2)]);
    assert_eq!(GridLogic::columns(&grid, None).len(), 2);
}

#[test]
fn test_unreadable_rows_are_skipped() {
    let mut pool = fresh_pool();
    StudentLogic::register(&mut pool, &student("S1", "Asha Rao", "R-001")).unwrap();
    MarkLogic::mark(
        &mut pool,
        "S1",
        "Present",
        parse_timestamp("2024-05-01 08:00").unwrap(),
    )
    .unwrap();

    pool.conn
        .execute(
            "INSERT INTO attendance (unique_id, name, roll_no, status, date, time, created_at)
             VALUES ('S1', 'Asha Rao', 'R-001', 'Present', 'not-a-date', '08:00:00', '')",
            [],
        )
        .unwrap();

    let all = load_attendance(&pool.conn, None).unwrap();
    assert_eq!(all.len(), 1);
}

#[test]
fn test_track_search_and_grouping() {
    let mut pool = fresh_pool();
    StudentLogic::register(&mut pool, &student("S1", "Asha Rao", "R-001")).unwrap();
    StudentLogic::register(&mut pool, &student("S2", "Vikram Nair", "R-102")).unwrap();

    for (id, at) in [
        ("S1", "2024-05-01 08:00"),
        ("S2", "2024-05-01 12:30"),
        ("S1", "2024-05-02 19:45"),
    ] {
        MarkLogic::mark(&mut pool, id, "Present", parse_timestamp(at).unwrap()).unwrap();
    }

    let all = load_attendance(&pool.conn, None).unwrap();

    let by_id = TrackLogic::search(&all, SearchColumn::UniqueId, "S1").unwrap();
    assert_eq!(by_id.len(), 2);

    let by_roll = TrackLogic::search(&all, SearchColumn::RollNo, "102").unwrap();
    assert_eq!(by_roll.len(), 1);

    let dinners = TrackLogic::search(&all, SearchColumn::Meal, "DINNER").unwrap();
    assert_eq!(dinners.len(), 1);

    let on_day = TrackLogic::search(&all, SearchColumn::Date, "5/1/2024").unwrap();
    assert_eq!(on_day.len(), 2);

    let bad = TrackLogic::search(&all, SearchColumn::Date, "first of may");
    assert!(matches!(bad, Err(AppError::InvalidDate(_))));

    let everything = TrackLogic::search(&all, SearchColumn::Meal, "").unwrap();
    let groups = TrackLogic::group_by_date(&everything);
    assert_eq!(groups.keys().copied().collect::<Vec<_>>(), vec![d(2024, 5, 1), d(2024, 5, 2)]);
    assert_eq!(groups[&d(2024, 5, 1)].len(), 2);
}

#[test]
fn test_rows_with_wrong_column_type_are_skipped() {
    let mut pool = fresh_pool();
    StudentLogic::register(&mut pool, &student("S1", "Asha Rao", "R-001")).unwrap();
    MarkLogic::mark(
        &mut pool,
        "S1",
        "Present",
        parse_timestamp("2024-05-01 12:30").unwrap(),
    )
    .unwrap();

    // time scritto come BLOB da un DB modificato a mano
    pool.conn
        .execute(
            "INSERT INTO attendance (unique_id, name, roll_no, status, date, time, created_at)
             VALUES ('S1', 'Asha Rao', 'R-001', 'Present', '2024-05-01', X'0800', '')",
            [],
        )
        .unwrap();

    let all = load_attendance(&pool.conn, None).unwrap();
    assert_eq!(all.len(), 1);

    let grid = GridLogic::load(&mut pool).unwrap();
    assert_eq!(
        grid.students["S1"].day(&d(2024, 5, 1)).get(MealSlot::Lunch),
        Mark::Present
    );
}
