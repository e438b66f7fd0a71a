use crate::db::log::audit_quiet;
use crate::db::pool::DbPool;
use crate::db::queries::{
    delete_student, insert_student, load_student, student_exists, update_student,
};
use crate::errors::{AppError, AppResult};
use crate::models::student::{StudentPatch, StudentProfile};

/// High-level business logic for the student registry.
pub struct StudentLogic;

impl StudentLogic {
    pub fn register(pool: &mut DbPool, profile: &StudentProfile) -> AppResult<()> {
        for (field, value) in [
            ("unique ID", &profile.unique_id),
            ("name", &profile.name),
            ("roll number", &profile.roll_no),
        ] {
            if value.trim().is_empty() {
                return Err(AppError::InvalidStudent(format!("{field} is required")));
            }
        }

        if student_exists(&pool.conn, &profile.unique_id)? {
            return Err(AppError::DuplicateStudent(profile.unique_id.clone()));
        }

        insert_student(&pool.conn, profile)?;

        audit_quiet(
            &pool.conn,
            "register",
            &profile.unique_id,
            &format!("Registered {} ({})", profile.name, profile.roll_no),
        );
        Ok(())
    }

    /// Remove a student. Returns `false` when no such student existed.
    ///
    /// Past attendance rows are kept: they keep showing up in grids, with
    /// placeholder identity fields.
    pub fn unregister(pool: &mut DbPool, unique_id: &str) -> AppResult<bool> {
        let removed = delete_student(&pool.conn, unique_id)? > 0;

        if removed {
            audit_quiet(&pool.conn, "unregister", unique_id, "Student removed");
        }
        Ok(removed)
    }

    pub fn update(
        pool: &mut DbPool,
        unique_id: &str,
        patch: &StudentPatch,
    ) -> AppResult<StudentProfile> {
        let mut profile = Self::details(pool, unique_id)?;

        if patch.is_empty() {
            return Ok(profile);
        }

        patch.apply_to(&mut profile);
        if profile.name.trim().is_empty() || profile.roll_no.trim().is_empty() {
            return Err(AppError::InvalidStudent(
                "name and roll number cannot be empty".into(),
            ));
        }

        update_student(&pool.conn, &profile)?;

        audit_quiet(&pool.conn, "update", unique_id, "Student details updated");
        Ok(profile)
    }

    pub fn details(pool: &mut DbPool, unique_id: &str) -> AppResult<StudentProfile> {
        load_student(&pool.conn, unique_id)?
            .ok_or_else(|| AppError::StudentNotFound(unique_id.to_string()))
    }
}
