// src/export/logic.rs

use crate::config::Config;
use crate::core::grid::GridLogic;
use crate::core::range::DateRange;
use crate::db::log::audit_quiet;
use crate::db::pool::DbPool;
use crate::db::queries::load_attendance;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_grid_csv, export_json};
use crate::export::model::{AttendanceExport, GridExport, GridHeader, grid_rows};
use crate::export::xlsx::{export_grid_xlsx, export_xlsx};
use crate::ui::messages::warning;
use crate::utils::path::resolve_output;
use std::path::Path;

/// Logica di alto livello per l'export.
pub struct ExportLogic;

impl ExportLogic {
    /// Export the attendance log.
    ///
    /// - `format`: csv | json | xlsx
    /// - `file`: absolute output path (`~/` is expanded)
    /// - `range`: `None`, `"all"` or a range expression (`YYYY`, `YYYY-MM`,
    ///   `YYYY-MM-DD`, or `start:end` of the same shape)
    /// - `grid`: export the aggregated meal grid instead of one row per scan
    pub fn export(
        pool: &mut DbPool,
        cfg: &Config,
        format: &ExportFormat,
        file: &str,
        range: &Option<String>,
        grid: bool,
        force: bool,
    ) -> AppResult<()> {
        let path = resolve_output(file).ok_or_else(|| {
            AppError::Export(format!("Output file path must be absolute: {file}"))
        })?;

        let date_range: Option<DateRange> = match range {
            None => None,
            Some(r) if r.eq_ignore_ascii_case("all") => None,
            Some(r) => Some(DateRange::parse_expr(r)?),
        };

        ensure_writable(&path, force)?;

        let written = if grid {
            Self::export_grid(pool, cfg, format, &path, date_range.as_ref())?
        } else {
            Self::export_events(pool, format, &path, date_range.as_ref())?
        };

        if written > 0 {
            let what = if grid { "grid rows" } else { "events" };
            audit_quiet(
                &pool.conn,
                "export",
                format.as_str(),
                &format!("{written} {what} → {}", path.display()),
            );
        }

        Ok(())
    }

    /// One row per raw scan. Returns the number of rows written.
    fn export_events(
        pool: &mut DbPool,
        format: &ExportFormat,
        path: &Path,
        range: Option<&DateRange>,
    ) -> AppResult<usize> {
        let bounds = range.map(|r| (r.first_day(), r.last_day()));
        let events = load_attendance(&pool.conn, bounds)?;

        if events.is_empty() {
            warning("No attendance records found for selected range.");
            return Ok(0);
        }

        let rows: Vec<AttendanceExport> = events.iter().map(AttendanceExport::from).collect();

        match format {
            ExportFormat::Csv => export_csv(&rows, path)?,
            ExportFormat::Json => export_json(&rows, path)?,
            ExportFormat::Xlsx => export_xlsx(&rows, path)?,
        }

        Ok(rows.len())
    }

    /// One row per student, four meal columns per date. Returns the number of
    /// student rows written.
    fn export_grid(
        pool: &mut DbPool,
        cfg: &Config,
        format: &ExportFormat,
        path: &Path,
        range: Option<&DateRange>,
    ) -> AppResult<usize> {
        let grid = GridLogic::load(pool)?;
        let dates = GridLogic::columns(&grid, range);

        if grid.is_empty() || dates.is_empty() {
            warning("No attendance records found for selected range.");
            return Ok(0);
        }

        let header = GridHeader::new(&dates);
        let rows = grid_rows(&grid, &dates, &cfg.placeholder);

        match format {
            ExportFormat::Csv => export_grid_csv(&header, &rows, cfg, path)?,
            ExportFormat::Json => export_json(&GridExport::new(&dates, &rows), path)?,
            ExportFormat::Xlsx => export_grid_xlsx(&header, &rows, cfg, path)?,
        }

        Ok(rows.len())
    }
}
