// src/export/xlsx.rs

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::export::excel_date::parse_to_excel_date;
use crate::export::model::{GridHeader, GridRow, event_to_row, get_headers};
use crate::export::{AttendanceExport, notify_export_success};
use crate::models::meal_slot::MealSlot;
use crate::ui::messages::info;
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, FormatPattern, Workbook, Worksheet};
use std::path::Path;
use unicode_width::UnicodeWidthStr;

const BAND1: Color = Color::RGB(0xEAF3FB);
const BAND2: Color = Color::RGB(0xFFFFFF);
const PRESENT_BG: Color = Color::RGB(0xC6EFCE);

/// Last column of an XLSX sheet (XFD).
const MAX_COL: u16 = 16_383;

/// Columns of the raw export holding a date or a time.
const DATE_TIME_COLUMNS: [usize; 2] = [3, 4];

fn header_format() -> Format {
    Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(0x2F75B5))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin)
        .set_align(FormatAlign::Center)
}

fn cell_format(bg: Color) -> Format {
    Format::new()
        .set_background_color(bg)
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin)
}

/// Export XLSX degli scan grezzi, con styling e auto-larghezza colonne.
pub(crate) fn export_xlsx(events: &[AttendanceExport], path: &Path) -> AppResult<()> {
    info(format!("Exporting to XLSX: {}", path.display()));

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name("Attendance").map_err(to_app_error)?;

    // ---------------------------
    // Header
    // ---------------------------
    let headers = get_headers();
    let hdr = header_format();

    for (col, header) in headers.iter().enumerate() {
        worksheet
            .write_with_format(0, col_index(col)?, *header, &hdr)
            .map_err(to_app_error)?;
    }

    worksheet.set_freeze_panes(1, 0).map_err(to_app_error)?;

    let mut col_widths: Vec<usize> = headers.iter().map(|h| UnicodeWidthStr::width(*h)).collect();

    // ---------------------------
    // Scrittura righe
    // ---------------------------
    for (row_index, ev) in events.iter().enumerate() {
        let row = (row_index + 1) as u32;
        let band = if row_index % 2 == 0 { BAND1 } else { BAND2 };

        for (col, value) in event_to_row(ev).iter().enumerate() {
            let typed = if DATE_TIME_COLUMNS.contains(&col) {
                parse_to_excel_date(value)
            } else {
                None
            };

            match typed {
                Some((num_format, serial)) => {
                    let fmt = cell_format(band).set_num_format(num_format);
                    worksheet
                        .write_with_format(row, col_index(col)?, serial, &fmt)
                        .map_err(to_app_error)?;
                }
                // ID e roll number restano testo anche se numerici
                None => {
                    worksheet
                        .write_with_format(row, col_index(col)?, value.as_str(), &cell_format(band))
                        .map_err(to_app_error)?;
                }
            }

            col_widths[col] = col_widths[col].max(UnicodeWidthStr::width(value.as_str()));
        }
    }

    set_widths(worksheet, &col_widths)?;
    workbook.save(path).map_err(to_app_error)?;

    notify_export_success("XLSX", path);
    Ok(())
}

/// Export XLSX della griglia pasti: riga 0 con le date unite sulle quattro
/// colonne dei pasti, riga 1 con le intestazioni di colonna.
pub(crate) fn export_grid_xlsx(
    header: &GridHeader,
    rows: &[GridRow],
    cfg: &Config,
    path: &Path,
) -> AppResult<()> {
    info(format!("Exporting meal grid to XLSX: {}", path.display()));
    col_index(header.columns.len().saturating_sub(1))?;

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name("Meal grid").map_err(to_app_error)?;

    let hdr = header_format();

    // ---------------------------
    // Group header (dates)
    // ---------------------------
    let mut col: usize = 0;
    for (label, span) in &header.groups {
        let first = col_index(col)?;
        let last = col_index(col + span - 1)?;
        if label.is_empty() {
            for c in first..=last {
                worksheet.write_blank(0, c, &hdr).map_err(to_app_error)?;
            }
        } else {
            worksheet
                .merge_range(0, first, 0, last, label, &hdr)
                .map_err(to_app_error)?;
        }
        col += span;
    }

    for (c, h) in header.columns.iter().enumerate() {
        worksheet
            .write_with_format(1, col_index(c)?, h.as_str(), &hdr)
            .map_err(to_app_error)?;
    }

    let identity_cols = header.groups.first().map(|(_, span)| *span).unwrap_or(0);
    worksheet
        .set_freeze_panes(2, col_index(identity_cols)?)
        .map_err(to_app_error)?;

    let mut col_widths: Vec<usize> = header
        .columns
        .iter()
        .map(|h| UnicodeWidthStr::width(h.as_str()))
        .collect();

    // ---------------------------
    // Righe studenti
    // ---------------------------
    for (row_index, r) in rows.iter().enumerate() {
        let row = (row_index + 2) as u32;
        let band = if row_index % 2 == 0 { BAND1 } else { BAND2 };

        for (c, value) in r.cells(cfg).iter().enumerate() {
            let fmt = if c >= identity_cols && is_present_cell(r, c - identity_cols) {
                cell_format(PRESENT_BG).set_align(FormatAlign::Center)
            } else if c >= identity_cols {
                cell_format(band).set_align(FormatAlign::Center)
            } else {
                cell_format(band)
            };

            worksheet
                .write_with_format(row, col_index(c)?, value.as_str(), &fmt)
                .map_err(to_app_error)?;

            if let Some(w) = col_widths.get_mut(c) {
                *w = (*w).max(UnicodeWidthStr::width(value.as_str()));
            }
        }
    }

    set_widths(worksheet, &col_widths)?;
    workbook.save(path).map_err(to_app_error)?;

    notify_export_success("XLSX (meal grid)", path);
    Ok(())
}

/// `offset` counts meal cells from the first date column.
fn is_present_cell(r: &GridRow, offset: usize) -> bool {
    let per_day = MealSlot::MEALS.len();
    r.days
        .get(offset / per_day)
        .map(|day| day.marks()[offset % per_day].is_present())
        .unwrap_or(false)
}

fn set_widths(worksheet: &mut Worksheet, widths: &[usize]) -> AppResult<()> {
    for (c, w) in widths.iter().enumerate() {
        worksheet
            .set_column_width(col_index(c)?, *w as f64 + 2.0)
            .map_err(to_app_error)?;
    }
    Ok(())
}

/// Worksheet column index; a grid wider than Excel allows is an error.
fn col_index(col: usize) -> AppResult<u16> {
    u16::try_from(col)
        .ok()
        .filter(|c| *c <= MAX_COL)
        .ok_or_else(|| AppError::Export(format!("too many columns for a worksheet ({})", col + 1)))
}

fn to_app_error<E: std::fmt::Display>(e: E) -> AppError {
    AppError::Export(e.to_string())
}
