// src/export/json_csv.rs

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::export::model::{GridHeader, GridRow};
use crate::export::{AttendanceExport, notify_export_success};
use crate::ui::messages::info;
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Export JSON pretty-printed (scan grezzi o griglia).
pub(crate) fn export_json<T: Serialize + ?Sized>(data: &T, path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let json_data = serde_json::to_string_pretty(data)
        .map_err(|e| AppError::Export(format!("JSON serialization error: {e}")))?;

    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;

    notify_export_success("JSON", path);
    Ok(())
}

/// Export CSV (header incluso grazie a serde).
pub(crate) fn export_csv(events: &[AttendanceExport], path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let mut wtr = csv::Writer::from_path(path)
        .map_err(|e| AppError::Export(format!("CSV open error: {e}")))?;

    for item in events {
        wtr.serialize(item)
            .map_err(|e| AppError::Export(format!("CSV write error: {e}")))?;
    }

    wtr.flush()
        .map_err(|e| AppError::Export(format!("CSV flush error: {e}")))?;

    notify_export_success("CSV", path);
    Ok(())
}

/// Export CSV della griglia: header piatto ("2024-05-01 Breakfast", ...).
pub(crate) fn export_grid_csv(
    header: &GridHeader,
    rows: &[GridRow],
    cfg: &Config,
    path: &Path,
) -> AppResult<()> {
    info(format!("Exporting meal grid to CSV: {}", path.display()));

    let mut wtr = csv::Writer::from_path(path)
        .map_err(|e| AppError::Export(format!("CSV open error: {e}")))?;

    wtr.write_record(header.flat())
        .map_err(|e| AppError::Export(format!("CSV write error: {e}")))?;

    for r in rows {
        wtr.write_record(r.cells(cfg))
            .map_err(|e| AppError::Export(format!("CSV write error: {e}")))?;
    }

    wtr.flush()
        .map_err(|e| AppError::Export(format!("CSV flush error: {e}")))?;

    notify_export_success("CSV (meal grid)", path);
    Ok(())
}
