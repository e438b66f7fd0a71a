use crate::errors::{AppError, AppResult};
use crate::models::attendance::AttendanceEvent;
use crate::models::student::StudentProfile;
use crate::ui::messages::warning;
use crate::utils::time::parse_clock;
use chrono::{Local, NaiveDate};
use rusqlite::{Connection, OptionalExtension, Result, Row, params, params_from_iter};
use std::collections::HashMap;

// ---------------------------
// Students
// ---------------------------

fn map_student(row: &Row) -> Result<StudentProfile> {
    Ok(StudentProfile {
        unique_id: row.get("unique_id")?,
        name: row.get("name")?,
        roll_no: row.get("roll_no")?,
        branch: row.get("branch")?,
        semester: row.get("semester")?,
        phone_no: row.get("phone_no")?,
        fee_paid: row.get("fee_paid")?,
        photo_ref: row.get("photo_ref")?,
    })
}

pub fn student_exists(conn: &Connection, unique_id: &str) -> AppResult<bool> {
    let mut stmt = conn.prepare_cached("SELECT 1 FROM students WHERE unique_id = ?1")?;
    Ok(stmt.exists([unique_id])?)
}

pub fn insert_student(conn: &Connection, s: &StudentProfile) -> AppResult<()> {
    conn.execute(
        "INSERT INTO students (unique_id, name, roll_no, branch, semester, phone_no, fee_paid, photo_ref, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
        params![
            s.unique_id,
            s.name,
            s.roll_no,
            s.branch,
            s.semester,
            s.phone_no,
            s.fee_paid,
            s.photo_ref,
            Local::now().to_rfc3339(),
        ],
    )?;
    Ok(())
}

pub fn load_student(conn: &Connection, unique_id: &str) -> AppResult<Option<StudentProfile>> {
    let mut stmt = conn.prepare_cached("SELECT * FROM students WHERE unique_id = ?1")?;
    Ok(stmt.query_row([unique_id], map_student).optional()?)
}

/// Update every field except the id and the photo reference.
pub fn update_student(conn: &Connection, s: &StudentProfile) -> AppResult<usize> {
    let n = conn.execute(
        "UPDATE students
         SET name = ?1, roll_no = ?2, branch = ?3,
             semester = ?4, phone_no = ?5, fee_paid = ?6
         WHERE unique_id = ?7",
        params![
            s.name,
            s.roll_no,
            s.branch,
            s.semester,
            s.phone_no,
            s.fee_paid,
            s.unique_id,
        ],
    )?;
    Ok(n)
}

pub fn delete_student(conn: &Connection, unique_id: &str) -> AppResult<usize> {
    let n = conn.execute("DELETE FROM students WHERE unique_id = ?1", [unique_id])?;
    Ok(n)
}

/// Load the profiles of all `ids` in one query. Unknown ids are simply absent
/// from the returned map.
pub fn load_profiles(
    conn: &Connection,
    ids: &[String],
) -> AppResult<HashMap<String, StudentProfile>> {
    let mut out = HashMap::new();
    if ids.is_empty() {
        return Ok(out);
    }

    // Crea una lista di placeholder: ?, ?, ?, ...
    let placeholders = vec!["?"; ids.len()].join(",");
    let sql = format!("SELECT * FROM students WHERE unique_id IN ({placeholders})");

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map(params_from_iter(ids.iter()), map_student)?;

    for r in rows {
        let p = r?;
        out.insert(p.unique_id.clone(), p);
    }
    Ok(out)
}

// ---------------------------
// Attendance
// ---------------------------

fn conversion_error(err: AppError) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(err))
}

pub fn map_attendance(row: &Row) -> Result<AttendanceEvent> {
    let date_str: String = row.get("date")?;
    let time_str: String = row.get("time")?;

    let date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d")
        .map_err(|_| conversion_error(AppError::InvalidDate(date_str.clone())))?;

    // older rows may still carry a 12-hour clock ("8:05:12 AM")
    let time =
        parse_clock(&time_str).ok_or_else(|| conversion_error(AppError::InvalidTime(time_str)))?;

    Ok(AttendanceEvent {
        id: row.get("id")?,
        student_id: row.get("unique_id")?,
        name: row.get("name")?,
        roll_no: row.get("roll_no")?,
        timestamp: date.and_time(time),
        recorded_status: row.get("status")?,
    })
}

/// Append a scan. Returns the new row id.
pub fn insert_attendance(conn: &Connection, ev: &AttendanceEvent) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO attendance (unique_id, name, roll_no, status, date, time, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![
            ev.student_id,
            ev.name,
            ev.roll_no,
            ev.recorded_status,
            ev.date_str(),
            ev.time_str(),
            Local::now().to_rfc3339(),
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Load the attendance log, optionally restricted to `[start, end]` (days,
/// inclusive), ordered chronologically.
///
/// Rows whose date or time cannot be read are skipped with a warning; any
/// other database error aborts the load.
pub fn load_attendance(
    conn: &Connection,
    bounds: Option<(NaiveDate, NaiveDate)>,
) -> AppResult<Vec<AttendanceEvent>> {
    let (sql, args): (&str, Vec<String>) = match bounds {
        None => (
            "SELECT * FROM attendance ORDER BY date ASC, time ASC, id ASC",
            Vec::new(),
        ),
        Some((start, end)) => (
            "SELECT * FROM attendance
             WHERE date BETWEEN ?1 AND ?2
             ORDER BY date ASC, time ASC, id ASC",
            vec![
                start.format("%Y-%m-%d").to_string(),
                end.format("%Y-%m-%d").to_string(),
            ],
        ),
    };

    let mut stmt = conn.prepare(sql)?;
    let rows = stmt.query_map(params_from_iter(args.iter()), map_attendance)?;

    let mut out = Vec::new();
    for r in rows {
        match r {
            Ok(ev) => out.push(ev),
            Err(rusqlite::Error::FromSqlConversionFailure(_, _, e)) => {
                warning(format!("Skipping unreadable attendance row: {e}"));
            }
            // NULL o BLOB in una colonna di testo (DB modificato a mano)
            Err(rusqlite::Error::InvalidColumnType(_, column, ty)) => {
                warning(format!(
                    "Skipping unreadable attendance row: column '{column}' holds {ty}"
                ));
            }
            Err(e) => return Err(e.into()),
        }
    }
    Ok(out)
}

pub fn load_attendance_by_date(
    conn: &Connection,
    date: &NaiveDate,
) -> AppResult<Vec<AttendanceEvent>> {
    load_attendance(conn, Some((*date, *date)))
}

pub fn count_attendance(conn: &Connection, unique_id: &str) -> AppResult<i64> {
    let n = conn.query_row(
        "SELECT COUNT(*) FROM attendance WHERE unique_id = ?1",
        [unique_id],
        |row| row.get(0),
    )?;
    Ok(n)
}
