// src/export/excel_date.rs

use chrono::{NaiveDate, NaiveTime, Timelike};

/// Excel serial of a calendar day (days since 1899-12-30).
pub(crate) fn date_to_excel_serial(d: &NaiveDate) -> Option<f64> {
    let excel_epoch = NaiveDate::from_ymd_opt(1899, 12, 30)?;
    Some((*d - excel_epoch).num_days() as f64)
}

/// Excel serial of a time of day (fraction of 24h).
pub(crate) fn time_to_excel_serial(t: &NaiveTime) -> f64 {
    t.num_seconds_from_midnight() as f64 / 86400.0
}

/// Interpreta una cella testuale dell'export come data o ora,
/// restituendo formato numerico + seriale Excel.
pub(crate) fn parse_to_excel_date(s: &str) -> Option<(&'static str, f64)> {
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return date_to_excel_serial(&d).map(|serial| ("yyyy-mm-dd", serial));
    }

    if let Ok(t) = NaiveTime::parse_from_str(s, "%H:%M:%S") {
        return Some(("hh:mm:ss", time_to_excel_serial(&t)));
    }

    None
}
