/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

/// Colore per una cella della griglia pasti: presente → verde, assente → grigio.
pub fn colorize_mark(value: &str, present: bool) -> String {
    if present {
        format!("{GREEN}{value}{RESET}")
    } else {
        format!("{GREY}{value}{RESET}")
    }
}

/// Grey for placeholders ("N/A", empty), plain text otherwise.
pub fn colorize_optional(value: &str, placeholder: &str) -> String {
    if value.trim().is_empty() || value == placeholder {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}

/// Meal column: no-meal scans in yellow so they stand out.
pub fn colorize_meal(value: &str, is_meal: bool) -> String {
    if is_meal {
        format!("{CYAN}{value}{RESET}")
    } else {
        format!("{YELLOW}{value}{RESET}")
    }
}
