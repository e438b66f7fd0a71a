use chrono::{NaiveDate, NaiveDateTime};
use messlog::core::range::{DateRange, filter_dates};
use messlog::errors::AppError;
use messlog::utils::time::parse_timestamp;

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn ts(s: &str) -> NaiveDateTime {
    parse_timestamp(s).unwrap()
}

#[test]
fn test_end_day_is_fully_included() {
    let all = vec![ts("2024-03-01 23:00"), ts("2024-03-02 00:00")];
    let kept = filter_dates(
        &all,
        Some(ts("2024-02-01 15:00")),
        Some(ts("2024-03-01 09:00")),
    )
    .unwrap();

    assert_eq!(kept, vec![ts("2024-03-01 23:00")]);
}

#[test]
fn test_start_day_is_fully_included() {
    let all = vec![d(2024, 4, 30), d(2024, 5, 1), d(2024, 5, 2)];
    let kept = filter_dates(
        &all,
        Some(ts("2024-05-01 18:00")),
        Some(ts("2024-05-01 08:00")),
    )
    .unwrap();

    assert_eq!(kept, vec![d(2024, 5, 1)]);
}

#[test]
fn test_inverted_range_is_rejected() {
    let all = vec![d(2024, 5, 1)];
    let res = filter_dates(
        &all,
        Some(ts("2024-05-10 00:00")),
        Some(ts("2024-05-01 00:00")),
    );
    assert!(matches!(res, Err(AppError::InvalidRange(_))));
}

#[test]
fn test_missing_bound_is_rejected() {
    let all = vec![d(2024, 5, 1)];

    let res = filter_dates(&all, None, Some(ts("2024-05-01 00:00")));
    match res {
        Err(AppError::InvalidRange(msg)) => {
            assert_eq!(msg, "Please select both \"from\" and \"to\" dates.")
        }
        other => panic!("unexpected result: {other:?}"),
    }

    assert!(matches!(
        filter_dates(&all, Some(ts("2024-05-01 00:00")), None),
        Err(AppError::InvalidRange(_))
    ));
}

#[test]
fn test_empty_input_stays_empty() {
    let all: Vec<NaiveDate> = Vec::new();
    let kept = filter_dates(
        &all,
        Some(ts("2024-05-01 00:00")),
        Some(ts("2024-05-31 00:00")),
    )
    .unwrap();
    assert!(kept.is_empty());
}

#[test]
fn test_from_input_accepts_both_date_styles() {
    let r = DateRange::from_input(Some("5/1/2024"), Some("2024-05-03")).unwrap();
    assert_eq!(r.first_day(), d(2024, 5, 1));
    assert_eq!(r.last_day(), d(2024, 5, 3));

    assert!(matches!(
        DateRange::from_input(Some("yesterday"), Some("2024-05-03")),
        Err(AppError::InvalidRange(_))
    ));
}

#[test]
fn test_range_expressions() {
    let year = DateRange::parse_expr("2024").unwrap();
    assert_eq!(year.first_day(), d(2024, 1, 1));
    assert_eq!(year.last_day(), d(2024, 12, 31));

    let feb = DateRange::parse_expr("2024-02").unwrap();
    assert_eq!(feb.last_day(), d(2024, 2, 29));

    let span = DateRange::parse_expr("2024-05-01:2024-05-15").unwrap();
    assert!(span.contains(&ts("2024-05-15 23:59")));
    assert!(!span.contains(&ts("2024-05-16 00:00")));

    assert!(DateRange::parse_expr("2024:2024-05").is_err());
    assert!(DateRange::parse_expr("2024-13").is_err());
    assert!(DateRange::parse_expr("2025:2024").is_err());
    assert!(DateRange::parse_expr("20é4").is_err());
}

#[test]
fn test_single_day_range_keeps_late_evening() {
    let all = vec![
        ts("2024-02-29 23:59"),
        ts("2024-03-01 23:00"),
        ts("2024-03-02 00:00"),
    ];
    let kept = filter_dates(
        &all,
        Some(ts("2024-03-01 00:00")),
        Some(ts("2024-03-01 00:00")),
    )
    .unwrap();

    assert_eq!(kept, vec![ts("2024-03-01 23:00")]);
}
