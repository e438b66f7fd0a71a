//! Time utilities: parsing wall-clock strings (12h and 24h) and full timestamps.

use crate::utils::date::parse_date;
use chrono::{NaiveDateTime, NaiveTime, Timelike};
use regex::Regex;
use std::sync::LazyLock;

static CLOCK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{1,2}):(\d{2})(?::(\d{2}))?\s*([AaPp][Mm])?$").expect("valid clock pattern")
});

/// Parse a wall-clock string.
///
/// Accepted shapes:
/// - `H:MM`, `HH:MM:SS`            → 24-hour clock (hour 0..=23)
/// - `H:MM AM`, `HH:MM:SS PM`      → 12-hour clock (hour 1..=12)
///
/// 12 AM is midnight (hour 0), 12 PM stays noon. Returns `None` for
/// anything else, including out-of-range fields.
pub fn parse_clock(s: &str) -> Option<NaiveTime> {
    let caps = CLOCK_RE.captures(s.trim())?;

    let mut hour: u32 = caps[1].parse().ok()?;
    let minute: u32 = caps[2].parse().ok()?;
    let second: u32 = match caps.get(3) {
        Some(m) => m.as_str().parse().ok()?,
        None => 0,
    };

    if let Some(marker) = caps.get(4) {
        if !(1..=12).contains(&hour) {
            return None;
        }
        let is_pm = marker.as_str().eq_ignore_ascii_case("pm");
        if is_pm && hour < 12 {
            hour += 12;
        }
        if !is_pm && hour == 12 {
            hour = 0;
        }
    }

    // from_hms_opt rifiuta già ore >= 24 e minuti/secondi >= 60
    NaiveTime::from_hms_opt(hour, minute, second)
}

/// Parse `<date> <clock>` (or `<date>T<clock>`), e.g. `2024-05-01 08:00 AM`,
/// `5/1/2024 13:05:00`, `2024-05-01T19:45`.
pub fn parse_timestamp(s: &str) -> Option<NaiveDateTime> {
    let (date_part, clock_part) = s
        .trim()
        .split_once(|c: char| c == 'T' || c.is_whitespace())?;

    let date = parse_date(date_part)?;
    let time = parse_clock(clock_part)?;
    Some(date.and_time(time))
}

/// Minutes elapsed since midnight, seconds are dropped.
pub fn minutes_of_day(t: NaiveTime) -> u32 {
    t.hour() * 60 + t.minute()
}

/// Local wall-clock time truncated to whole seconds.
pub fn now() -> NaiveDateTime {
    let now = chrono::Local::now().naive_local();
    now.with_nanosecond(0).unwrap_or(now)
}
