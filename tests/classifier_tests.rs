use chrono::{NaiveDate, NaiveTime};
use messlog::core::classifier::{MEAL_WINDOWS, classify, classify_at, classify_clock, window_for};
use messlog::models::meal_slot::MealSlot;
use messlog::utils::time::{parse_clock, parse_timestamp};

fn t(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

#[test]
fn test_window_boundaries_are_half_open() {
    assert_eq!(classify(t(7, 29)), MealSlot::NoMeal);
    assert_eq!(classify(t(7, 30)), MealSlot::Breakfast);
    assert_eq!(classify(t(9, 29)), MealSlot::Breakfast);
    assert_eq!(classify(t(9, 30)), MealSlot::NoMeal);

    assert_eq!(classify(t(12, 0)), MealSlot::Lunch);
    assert_eq!(classify(t(13, 59)), MealSlot::Lunch);
    assert_eq!(classify(t(14, 0)), MealSlot::NoMeal);

    assert_eq!(classify(t(17, 0)), MealSlot::Snacks);
    assert_eq!(classify(t(18, 0)), MealSlot::NoMeal);

    assert_eq!(classify(t(19, 30)), MealSlot::Dinner);
    assert_eq!(classify(t(20, 59)), MealSlot::Dinner);
    assert_eq!(classify(t(21, 0)), MealSlot::NoMeal);
}

#[test]
fn test_seconds_do_not_move_a_scan_out_of_its_window() {
    let late = NaiveTime::from_hms_opt(9, 29, 59).unwrap();
    assert_eq!(classify(late), MealSlot::Breakfast);
}

#[test]
fn test_every_minute_of_the_day_is_classified() {
    let mut meals = 0;
    for minute in 0..1440u32 {
        let slot = classify(t(minute / 60, minute % 60));
        if slot.is_meal() {
            meals += 1;
        }
    }
    // 120 + 120 + 60 + 90
    assert_eq!(meals, 390);
}

#[test]
fn test_windows_do_not_overlap() {
    for (i, a) in MEAL_WINDOWS.iter().enumerate() {
        for b in MEAL_WINDOWS.iter().skip(i + 1) {
            assert!(a.end <= b.start, "{} overlaps {}", a.slot, b.slot);
        }
    }
    assert_eq!(window_for(MealSlot::Dinner).unwrap().label(), "19:30-21:00");
    assert!(window_for(MealSlot::NoMeal).is_none());
}

#[test]
fn test_twelve_hour_clock_strings() {
    assert_eq!(classify_clock("8:05:12 AM"), MealSlot::Breakfast);
    assert_eq!(classify_clock("12:30 PM"), MealSlot::Lunch);
    assert_eq!(classify_clock("5:15 pm"), MealSlot::Snacks);
    assert_eq!(classify_clock("7:45 PM"), MealSlot::Dinner);
    // 12 AM is midnight
    assert_eq!(parse_clock("12:10 AM"), Some(t(0, 10)));
    assert_eq!(classify_clock("12:10 AM"), MealSlot::NoMeal);
}

#[test]
fn test_twenty_four_hour_clock_strings() {
    assert_eq!(classify_clock("19:45"), MealSlot::Dinner);
    assert_eq!(classify_clock("07:30:00"), MealSlot::Breakfast);
    assert_eq!(parse_clock("0:00"), Some(t(0, 0)));
}

#[test]
fn test_unreadable_clock_is_no_meal() {
    assert_eq!(classify_clock(""), MealSlot::NoMeal);
    assert_eq!(classify_clock("lunch time"), MealSlot::NoMeal);
    assert_eq!(classify_clock("25:00"), MealSlot::NoMeal);
    assert_eq!(classify_clock("13:00 PM"), MealSlot::NoMeal);
    assert_eq!(classify_clock("0:30 AM"), MealSlot::NoMeal);
    assert_eq!(classify_clock("8:61"), MealSlot::NoMeal);
}

#[test]
fn test_timestamp_date_is_ignored() {
    let a = parse_timestamp("2024-05-01 08:00").unwrap();
    let b = parse_timestamp("12/31/1999 8:00 AM").unwrap();
    assert_eq!(classify_at(&a), MealSlot::Breakfast);
    assert_eq!(classify_at(&b), MealSlot::Breakfast);
    assert_eq!(b.date(), NaiveDate::from_ymd_opt(1999, 12, 31).unwrap());

    let iso = parse_timestamp("2024-05-01T19:45").unwrap();
    assert_eq!(classify_at(&iso), MealSlot::Dinner);
}

#[test]
fn test_twelve_hour_breakfast_boundaries() {
    assert_eq!(classify_clock("07:30:00 AM"), MealSlot::Breakfast);
    assert_eq!(classify_clock("07:29:59 AM"), MealSlot::NoMeal);
    assert_eq!(classify_clock("09:29:59 AM"), MealSlot::Breakfast);
    assert_eq!(classify_clock("09:30:00 AM"), MealSlot::NoMeal);
}
