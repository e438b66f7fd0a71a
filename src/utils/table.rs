//! Table rendering utilities for CLI outputs.
//!
//! Column widths are computed from the visible width of the content, so cells
//! may carry ANSI colours without breaking the alignment.

use crate::utils::formatting::visible_width;

pub struct Column {
    pub header: String,
}

/// A header cell spanning `span` consecutive columns (e.g. a date over its
/// four meal columns).
pub struct Group {
    pub label: String,
    pub span: usize,
}

pub struct Table {
    pub columns: Vec<Column>,
    pub groups: Vec<Group>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new<S: Into<String>>(headers: Vec<S>) -> Self {
        Self {
            columns: headers
                .into_iter()
                .map(|h| Column { header: h.into() })
                .collect(),
            groups: Vec::new(),
            rows: Vec::new(),
        }
    }

    pub fn with_groups(mut self, groups: Vec<Group>) -> Self {
        self.groups = groups;
        self
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self
            .columns
            .iter()
            .map(|c| visible_width(&c.header))
            .collect();

        for row in &self.rows {
            for (i, cell) in row.iter().enumerate().take(widths.len()) {
                widths[i] = widths[i].max(visible_width(cell));
            }
        }

        // un gruppo troppo largo allarga l'ultima colonna che copre
        let mut col = 0;
        for g in &self.groups {
            if g.span == 0 || col + g.span > widths.len() {
                break;
            }
            let spanned: usize = widths[col..col + g.span].iter().sum::<usize>() + g.span - 1;
            let label = visible_width(&g.label);
            if label > spanned {
                widths[col + g.span - 1] += label - spanned;
            }
            col += g.span;
        }

        widths
    }

    pub fn render(&self) -> String {
        let widths = self.widths();
        let mut out = String::new();

        // Group header
        if !self.groups.is_empty() {
            let mut col = 0;
            for g in &self.groups {
                if col + g.span > widths.len() {
                    break;
                }
                let spanned: usize = widths[col..col + g.span].iter().sum::<usize>() + g.span - 1;
                out.push_str(&pad(&g.label, spanned));
                out.push_str(" | ");
                col += g.span;
            }
            out.push('\n');
        }

        // Header
        for (col, w) in self.columns.iter().zip(&widths) {
            out.push_str(&pad(&col.header, *w));
            out.push(' ');
        }
        out.push('\n');

        let total: usize = widths.iter().map(|w| w + 1).sum();
        out.push_str(&"-".repeat(total));
        out.push('\n');

        // Rows
        for row in &self.rows {
            for (i, w) in widths.iter().enumerate() {
                let cell = row.get(i).map(String::as_str).unwrap_or("");
                out.push_str(&pad(cell, *w));
                out.push(' ');
            }
            out.push('\n');
        }

        out
    }
}

fn pad(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(visible_width(s));
    format!("{s}{}", " ".repeat(fill))
}
