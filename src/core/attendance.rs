use crate::core::classifier::classify_at;
use crate::db::log::audit_quiet;
use crate::db::pool::DbPool;
use crate::db::queries::{insert_attendance, load_student};
use crate::errors::{AppError, AppResult};
use crate::models::attendance::AttendanceEvent;
use crate::models::meal_slot::MealSlot;
use crate::utils::date::parse_date;
use chrono::{NaiveDate, NaiveDateTime};
use clap::ValueEnum;
use std::collections::BTreeMap;

/// Scan logic for the `mark` command.
pub struct MarkLogic;

impl MarkLogic {
    /// Append a scan for a registered student at `at`.
    ///
    /// Returns the stored event together with the meal it counts for.
    pub fn mark(
        pool: &mut DbPool,
        unique_id: &str,
        status: &str,
        at: NaiveDateTime,
    ) -> AppResult<(AttendanceEvent, MealSlot)> {
        let unique_id = unique_id.trim();
        if unique_id.is_empty() {
            return Err(AppError::InvalidStudent("unique ID is required".into()));
        }
        if status.trim().is_empty() {
            return Err(AppError::InvalidStudent("status is required".into()));
        }

        let student = load_student(&pool.conn, unique_id)?
            .ok_or_else(|| AppError::StudentNotFound(unique_id.to_string()))?;

        let mut ev = AttendanceEvent::new(
            &student.unique_id,
            &student.name,
            &student.roll_no,
            at,
            status.trim(),
        );
        ev.id = insert_attendance(&pool.conn, &ev)?;

        let slot = classify_at(&ev.timestamp);

        audit_quiet(
            &pool.conn,
            "mark",
            unique_id,
            &format!("{} {} → {}", ev.date_str(), ev.time_str(), slot),
        );

        Ok((ev, slot))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum SearchColumn {
    UniqueId,
    RollNo,
    Meal,
    Date,
}

/// Search and grouping over the raw attendance log.
pub struct TrackLogic;

impl TrackLogic {
    /// Filter events on one column.
    ///
    /// - `unique-id`, `roll-no`: substring match
    /// - `meal`: case-insensitive substring of the derived meal name
    /// - `date`: same calendar day (`YYYY-MM-DD` or `M/D/YYYY`)
    ///
    /// An empty query keeps everything.
    pub fn search(
        events: &[AttendanceEvent],
        column: SearchColumn,
        query: &str,
    ) -> AppResult<Vec<AttendanceEvent>> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(events.to_vec());
        }

        let out = match column {
            SearchColumn::UniqueId => events
                .iter()
                .filter(|e| e.student_id.contains(query))
                .cloned()
                .collect(),
            SearchColumn::RollNo => events
                .iter()
                .filter(|e| e.roll_no.contains(query))
                .cloned()
                .collect(),
            SearchColumn::Meal => {
                let q = query.to_lowercase();
                events
                    .iter()
                    .filter(|e| {
                        classify_at(&e.timestamp)
                            .as_str()
                            .to_lowercase()
                            .contains(&q)
                    })
                    .cloned()
                    .collect()
            }
            SearchColumn::Date => {
                let day =
                    parse_date(query).ok_or_else(|| AppError::InvalidDate(query.to_string()))?;
                events
                    .iter()
                    .filter(|e| e.date() == day)
                    .cloned()
                    .collect()
            }
        };

        Ok(out)
    }

    /// Group events by calendar day, days ascending, events in input order.
    pub fn group_by_date(events: &[AttendanceEvent]) -> BTreeMap<NaiveDate, Vec<AttendanceEvent>> {
        let mut groups: BTreeMap<NaiveDate, Vec<AttendanceEvent>> = BTreeMap::new();
        for ev in events {
            groups.entry(ev.date()).or_default().push(ev.clone());
        }
        groups
    }
}
