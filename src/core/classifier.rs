//! Meal classification: maps a time of day to the mess slot it belongs to.

use crate::models::meal_slot::MealSlot;
use crate::utils::time::{minutes_of_day, parse_clock};
use chrono::{NaiveDateTime, NaiveTime};

/// Half-open serving window `[start, end)` in minutes since midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MealWindow {
    pub slot: MealSlot,
    pub start: u32,
    pub end: u32,
}

impl MealWindow {
    pub fn contains(&self, minute: u32) -> bool {
        minute >= self.start && minute < self.end
    }

    /// "07:30-09:30"
    pub fn label(&self) -> String {
        format!(
            "{:02}:{:02}-{:02}:{:02}",
            self.start / 60,
            self.start % 60,
            self.end / 60,
            self.end % 60
        )
    }
}

/// Institutional serving hours. Evaluated in order, first match wins.
pub const MEAL_WINDOWS: [MealWindow; 4] = [
    MealWindow {
        slot: MealSlot::Breakfast,
        start: 450, // 07:30
        end: 570,   // 09:30
    },
    MealWindow {
        slot: MealSlot::Lunch,
        start: 720, // 12:00
        end: 840,   // 14:00
    },
    MealWindow {
        slot: MealSlot::Snacks,
        start: 1020, // 17:00
        end: 1080,   // 18:00
    },
    MealWindow {
        slot: MealSlot::Dinner,
        start: 1170, // 19:30
        end: 1260,   // 21:00
    },
];

pub fn classify(time: NaiveTime) -> MealSlot {
    let minute = minutes_of_day(time);

    MEAL_WINDOWS
        .iter()
        .find(|w| w.contains(minute))
        .map(|w| w.slot)
        .unwrap_or(MealSlot::NoMeal)
}

/// Classify a full timestamp; the date part is ignored.
pub fn classify_at(ts: &NaiveDateTime) -> MealSlot {
    classify(ts.time())
}

/// Classify a raw clock string ("8:05:12 AM", "19:45", ...).
/// Unparseable input is `NoMeal`, never an error.
pub fn classify_clock(s: &str) -> MealSlot {
    parse_clock(s).map(classify).unwrap_or(MealSlot::NoMeal)
}

pub fn window_for(slot: MealSlot) -> Option<&'static MealWindow> {
    MEAL_WINDOWS.iter().find(|w| w.slot == slot)
}
