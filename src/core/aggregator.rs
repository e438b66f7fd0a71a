//! Aggregation of raw scans into the per-student, per-day meal grid.

use crate::core::classifier::classify_at;
use crate::models::attendance::AttendanceEvent;
use crate::models::daily_record::DailyMealRecord;
use crate::models::meal_slot::MealSlot;
use crate::models::student::StudentProfile;
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet, HashMap};

/// Source of student metadata used to decorate grid rows.
pub trait ProfileLookup {
    fn lookup(&self, student_id: &str) -> Option<&StudentProfile>;
}

impl ProfileLookup for HashMap<String, StudentProfile> {
    fn lookup(&self, student_id: &str) -> Option<&StudentProfile> {
        self.get(student_id)
    }
}

impl ProfileLookup for BTreeMap<String, StudentProfile> {
    fn lookup(&self, student_id: &str) -> Option<&StudentProfile> {
        self.get(student_id)
    }
}

/// The four identity columns that lead every grid row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IdentityFields {
    pub roll_no: String,
    pub name: String,
    pub semester: String,
    pub fee_paid: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct StudentAttendance {
    pub student_id: String,
    /// `None` when the lookup had no profile for this id.
    pub profile: Option<StudentProfile>,
    pub days: BTreeMap<NaiveDate, DailyMealRecord>,
    /// Scans that fell outside every serving window.
    pub unclassified: Vec<AttendanceEvent>,
}

impl StudentAttendance {
    fn new(student_id: &str) -> Self {
        Self {
            student_id: student_id.to_string(),
            profile: None,
            days: BTreeMap::new(),
            unclassified: Vec::new(),
        }
    }

    /// Record for `date`, all-absent when the student never showed up.
    pub fn day(&self, date: &NaiveDate) -> DailyMealRecord {
        self.days.get(date).copied().unwrap_or_default()
    }

    pub fn identity(&self, placeholder: &str) -> IdentityFields {
        match &self.profile {
            Some(p) => IdentityFields {
                roll_no: or_placeholder(&p.roll_no, placeholder),
                name: or_placeholder(&p.name, placeholder),
                semester: or_placeholder(&p.semester, placeholder),
                fee_paid: or_placeholder(&p.fee_paid, placeholder),
            },
            None => IdentityFields {
                roll_no: placeholder.to_string(),
                name: placeholder.to_string(),
                semester: placeholder.to_string(),
                fee_paid: placeholder.to_string(),
            },
        }
    }
}

fn or_placeholder(v: &str, placeholder: &str) -> String {
    if v.trim().is_empty() {
        placeholder.to_string()
    } else {
        v.to_string()
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct AttendanceGrid {
    pub students: BTreeMap<String, StudentAttendance>,
    /// Every date seen across all students, ascending.
    pub dates: Vec<NaiveDate>,
}

impl AttendanceGrid {
    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    pub fn unclassified_count(&self) -> usize {
        self.students.values().map(|s| s.unclassified.len()).sum()
    }

    /// Ids referenced by events but missing from the profile lookup.
    pub fn missing_profiles(&self) -> Vec<&str> {
        self.students
            .values()
            .filter(|s| s.profile.is_none())
            .map(|s| s.student_id.as_str())
            .collect()
    }
}

/// Build the meal grid from a complete snapshot of events.
///
/// The meal slot of every event is derived from its timestamp; any stored
/// status is ignored here. Duplicate scans in one slot collapse to a single
/// `Present`. Students without a profile are kept with `profile = None`.
pub fn aggregate<L: ProfileLookup + ?Sized>(
    events: &[AttendanceEvent],
    lookup: &L,
) -> AttendanceGrid {
    let mut students: BTreeMap<String, StudentAttendance> = BTreeMap::new();
    let mut dates: BTreeSet<NaiveDate> = BTreeSet::new();

    for ev in events {
        let date = ev.date();
        let slot = classify_at(&ev.timestamp);

        let entry = students
            .entry(ev.student_id.clone())
            .or_insert_with(|| StudentAttendance::new(&ev.student_id));

        // la data entra comunque in colonna, anche per uno scan fuori orario
        dates.insert(date);
        let record = entry.days.entry(date).or_default();

        if slot == MealSlot::NoMeal {
            entry.unclassified.push(ev.clone());
            continue;
        }

        record.mark_present(slot);
    }

    for (id, student) in students.iter_mut() {
        student.profile = lookup.lookup(id).cloned();
    }

    AttendanceGrid {
        students,
        dates: dates.into_iter().collect(),
    }
}

/// Distinct student ids referenced by `events`, in first-seen order.
pub fn referenced_ids(events: &[AttendanceEvent]) -> Vec<String> {
    let mut seen = BTreeSet::new();
    let mut out = Vec::new();
    for ev in events {
        if seen.insert(ev.student_id.as_str()) {
            out.push(ev.student_id.clone());
        }
    }
    out
}
