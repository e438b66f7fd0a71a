use crate::errors::AppResult;
use rusqlite::Connection;

/// Create the schema if it is not there yet. Safe to run on every `init`.
pub fn init_db(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS students (
            unique_id  TEXT PRIMARY KEY,
            name       TEXT NOT NULL,
            roll_no    TEXT NOT NULL,
            branch     TEXT NOT NULL DEFAULT '',
            semester   TEXT NOT NULL DEFAULT '',
            phone_no   TEXT NOT NULL DEFAULT '',
            fee_paid   TEXT NOT NULL DEFAULT '',
            photo_ref  TEXT,
            created_at TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS attendance (
            id         INTEGER PRIMARY KEY AUTOINCREMENT,
            unique_id  TEXT NOT NULL,
            name       TEXT NOT NULL,
            roll_no    TEXT NOT NULL,
            status     TEXT NOT NULL,
            date       TEXT NOT NULL,
            time       TEXT NOT NULL,
            created_at TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_attendance_date_time ON attendance(date, time);
        CREATE INDEX IF NOT EXISTS idx_attendance_unique_id ON attendance(unique_id);

        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}
