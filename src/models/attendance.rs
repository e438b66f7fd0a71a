use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::Serialize;

/// A single scan at the mess counter.
///
/// Events are append-only: once stored they are never edited. The meal slot
/// is not part of the record, it is always derived from `timestamp`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttendanceEvent {
    pub id: i64,                  // ⇔ attendance.id
    pub student_id: String,       // ⇔ attendance.unique_id
    pub name: String,             // ⇔ attendance.name (snapshot at scan time)
    pub roll_no: String,          // ⇔ attendance.roll_no
    pub timestamp: NaiveDateTime, // ⇔ attendance.date + attendance.time
    pub recorded_status: String,  // ⇔ attendance.status (e.g. "Present")
}

impl AttendanceEvent {
    /// Build an event that has not been stored yet (`id = 0`).
    pub fn new(
        student_id: &str,
        name: &str,
        roll_no: &str,
        timestamp: NaiveDateTime,
        recorded_status: &str,
    ) -> Self {
        Self {
            id: 0,
            student_id: student_id.to_string(),
            name: name.to_string(),
            roll_no: roll_no.to_string(),
            timestamp,
            recorded_status: recorded_status.to_string(),
        }
    }

    pub fn date(&self) -> NaiveDate {
        self.timestamp.date()
    }

    pub fn time(&self) -> NaiveTime {
        self.timestamp.time()
    }

    /// Calendar date as stored and displayed everywhere ("YYYY-MM-DD").
    pub fn date_str(&self) -> String {
        self.timestamp.format("%Y-%m-%d").to_string()
    }

    pub fn time_str(&self) -> String {
        self.timestamp.format("%H:%M:%S").to_string()
    }
}
