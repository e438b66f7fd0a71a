// src/export/model.rs

use crate::config::Config;
use crate::core::aggregator::{AttendanceGrid, IdentityFields};
use crate::models::attendance::AttendanceEvent;
use crate::models::daily_record::{DailyMealRecord, Mark};
use crate::models::meal_slot::MealSlot;
use crate::utils::date::format_date;
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;

/// Struttura “piatta” per l'export degli scan grezzi: una riga per evento.
#[derive(Serialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceExport {
    pub unique_id: String,
    pub name: String,
    pub roll_no: String,
    pub date: String,
    pub time: String,
    pub status: String,
}

impl From<&AttendanceEvent> for AttendanceExport {
    fn from(ev: &AttendanceEvent) -> Self {
        Self {
            unique_id: ev.student_id.clone(),
            name: ev.name.clone(),
            roll_no: ev.roll_no.clone(),
            date: ev.date_str(),
            time: ev.time_str(),
            status: ev.recorded_status.clone(),
        }
    }
}

/// Header per CSV / XLSX
pub(crate) fn get_headers() -> Vec<&'static str> {
    vec!["uniqueId", "name", "rollNo", "date", "time", "status"]
}

pub(crate) fn event_to_row(e: &AttendanceExport) -> Vec<String> {
    vec![
        e.unique_id.clone(),
        e.name.clone(),
        e.roll_no.clone(),
        e.date.clone(),
        e.time.clone(),
        e.status.clone(),
    ]
}

// ---------------------------
// Meal grid
// ---------------------------

pub const IDENTITY_HEADERS: [&str; 4] = ["Roll No", "Name", "Semester", "Fee Paid"];

/// Two-level header of the meal grid: the identity block, then one group per
/// date spanning its Breakfast / Lunch / Snacks / Dinner columns.
///
/// Terminal table, CSV and XLSX all build their header from here.
pub struct GridHeader {
    /// (label, span); the identity block has an empty label.
    pub groups: Vec<(String, usize)>,
    pub columns: Vec<String>,
}

impl GridHeader {
    pub fn new(dates: &[NaiveDate]) -> Self {
        let mut groups = vec![(String::new(), IDENTITY_HEADERS.len())];
        let mut columns: Vec<String> = IDENTITY_HEADERS.iter().map(|h| h.to_string()).collect();

        for d in dates {
            groups.push((format_date(d), MealSlot::MEALS.len()));
            columns.extend(MealSlot::MEALS.iter().map(|m| m.as_str().to_string()));
        }

        Self { groups, columns }
    }

    /// Single-row header for flat formats: "2024-05-01 Breakfast", ...
    pub fn flat(&self) -> Vec<String> {
        let mut out = Vec::with_capacity(self.columns.len());
        let mut col = 0;
        for (label, span) in &self.groups {
            for c in &self.columns[col..col + span] {
                if label.is_empty() {
                    out.push(c.clone());
                } else {
                    out.push(format!("{label} {c}"));
                }
            }
            col += span;
        }
        out
    }
}

/// One student row of the grid, restricted to the selected date columns.
pub struct GridRow {
    pub student_id: String,
    pub identity: IdentityFields,
    /// One entry per date column, in column order.
    pub days: Vec<DailyMealRecord>,
}

impl GridRow {
    pub fn cells(&self, cfg: &Config) -> Vec<String> {
        let mut out = vec![
            self.identity.roll_no.clone(),
            self.identity.name.clone(),
            self.identity.semester.clone(),
            self.identity.fee_paid.clone(),
        ];
        for day in &self.days {
            out.extend(day.marks().iter().map(|m| mark_label(*m, cfg)));
        }
        out
    }
}

pub fn mark_label(m: Mark, cfg: &Config) -> String {
    match m {
        Mark::Present => cfg.present_mark.clone(),
        Mark::Absent => cfg.absent_mark.clone(),
    }
}

pub fn grid_rows(grid: &AttendanceGrid, dates: &[NaiveDate], placeholder: &str) -> Vec<GridRow> {
    grid.students
        .values()
        .map(|s| GridRow {
            student_id: s.student_id.clone(),
            identity: s.identity(placeholder),
            days: dates.iter().map(|d| s.day(d)).collect(),
        })
        .collect()
}

/// JSON shape of the grid export.
#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct GridExport {
    pub dates: Vec<String>,
    pub students: Vec<GridStudentExport>,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct GridStudentExport {
    pub unique_id: String,
    pub roll_no: String,
    pub name: String,
    pub semester: String,
    pub fee_paid: String,
    pub days: BTreeMap<String, DailyMealRecord>,
}

impl GridExport {
    pub fn new(dates: &[NaiveDate], rows: &[GridRow]) -> Self {
        Self {
            dates: dates.iter().map(format_date).collect(),
            students: rows
                .iter()
                .map(|r| GridStudentExport {
                    unique_id: r.student_id.clone(),
                    roll_no: r.identity.roll_no.clone(),
                    name: r.identity.name.clone(),
                    semester: r.identity.semester.clone(),
                    fee_paid: r.identity.fee_paid.clone(),
                    days: dates
                        .iter()
                        .zip(&r.days)
                        .map(|(d, rec)| (format_date(d), *rec))
                        .collect(),
                })
                .collect(),
        }
    }
}
