use crate::core::aggregator::{AttendanceGrid, aggregate, referenced_ids};
use crate::core::range::DateRange;
use crate::db::pool::DbPool;
use crate::db::queries::{load_attendance, load_profiles};
use crate::errors::AppResult;
use chrono::NaiveDate;

/// Loads a consistent snapshot from the store and aggregates it.
pub struct GridLogic;

impl GridLogic {
    /// Build the grid over the whole attendance log.
    ///
    /// The full event snapshot and every referenced profile are loaded
    /// before aggregation starts; nothing is returned on a load failure.
    pub fn load(pool: &mut DbPool) -> AppResult<AttendanceGrid> {
        let events = load_attendance(&pool.conn, None)?;
        if events.is_empty() {
            return Ok(AttendanceGrid::default());
        }

        let ids = referenced_ids(&events);
        let profiles = load_profiles(&pool.conn, &ids)?;

        Ok(aggregate(&events, &profiles))
    }

    /// Date columns to show: all of them, or the ones inside `range`.
    /// Student rows are never dropped by the range.
    pub fn columns(grid: &AttendanceGrid, range: Option<&DateRange>) -> Vec<NaiveDate> {
        match range {
            Some(r) => r.filter(&grid.dates),
            None => grid.dates.clone(),
        }
    }
}
