//! Console messages: one coloured icon per line, errors on stderr.

use crate::core::classifier::MEAL_WINDOWS;
use crate::models::meal_slot::MealSlot;
use std::fmt;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

const FG_BLUE: &str = "\x1b[34m";
const FG_CYAN: &str = "\x1b[36m";
const FG_GREEN: &str = "\x1b[32m";
const FG_YELLOW: &str = "\x1b[33m";
const FG_RED: &str = "\x1b[31m";

fn line(color: &str, icon: &str, msg: impl fmt::Display) -> String {
    format!("{color}{BOLD}{icon}{RESET} {msg}")
}

pub fn info<T: fmt::Display>(msg: T) {
    println!("{}", line(FG_BLUE, "ℹ️", msg));
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{}", line(FG_GREEN, "✅", msg));
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{}", line(FG_YELLOW, "⚠️", msg));
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{}", line(FG_RED, "❌", msg));
}

/// Section header (a date in `track`, the grid title, ...)
pub fn header<T: fmt::Display>(msg: T) {
    println!("{FG_BLUE}{BOLD}====================== {msg}{RESET}");
}

/// Meal a scan counts for. Outside every window the serving hours are
/// listed so the operator can see why nothing was counted.
pub fn meal(slot: MealSlot) {
    if slot.is_meal() {
        println!("{}", line(FG_CYAN, "🍽️", format!("Meal: {slot}")));
        return;
    }

    let hours: Vec<String> = MEAL_WINDOWS
        .iter()
        .map(|w| format!("{} {}", w.slot, w.label()))
        .collect();
    warning(format!(
        "Scan is outside every meal window ({}); it will not count for any meal.",
        hours.join(", ")
    ));
}
