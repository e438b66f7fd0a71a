use crate::core::attendance::SearchColumn;
use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for messlog
/// CLI application to track mess-hall meal attendance with SQLite
#[derive(Parser)]
#[command(
    name = "messlog",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple mess attendance CLI: register students, mark meal scans and build daily meal grids using SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Register a new student
    Register {
        /// Unique ID printed on the student's card
        unique_id: String,

        #[arg(long)]
        name: String,

        #[arg(long = "roll-no")]
        roll_no: String,

        #[arg(long, default_value = "")]
        branch: String,

        #[arg(long, default_value = "")]
        semester: String,

        #[arg(long = "phone", default_value = "")]
        phone_no: String,

        #[arg(long = "fee-paid", default_value = "")]
        fee_paid: String,

        /// Path or URL of the student's photo (stored as a reference only)
        #[arg(long = "photo")]
        photo: Option<String>,
    },

    /// Remove a student from the registry (attendance history is kept)
    Unregister {
        unique_id: String,

        /// Do not ask for confirmation
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Update the details of a registered student
    Update {
        unique_id: String,

        #[arg(long)]
        name: Option<String>,

        #[arg(long = "roll-no")]
        roll_no: Option<String>,

        #[arg(long)]
        branch: Option<String>,

        #[arg(long)]
        semester: Option<String>,

        #[arg(long = "phone")]
        phone_no: Option<String>,

        #[arg(long = "fee-paid")]
        fee_paid: Option<String>,
    },

    /// Show the details of a student
    Details { unique_id: String },

    /// Mark attendance for a student (scan at the mess counter)
    Mark {
        unique_id: String,

        /// Status stored with the scan (default from config: "Present")
        #[arg(long)]
        status: Option<String>,

        /// Scan time instead of now.
        ///
        /// Formats: "YYYY-MM-DD HH:MM[:SS]", "YYYY-MM-DD hh:mm[:ss] AM|PM",
        /// "M/D/YYYY HH:MM"
        #[arg(long, value_name = "TIMESTAMP")]
        at: Option<String>,
    },

    /// Browse and search the raw attendance log, grouped by date
    Track {
        /// Column to search on
        #[arg(long = "by", value_enum, default_value = "unique-id")]
        by: SearchColumn,

        /// Text to search for (a date for --by date); omit to list everything
        query: Option<String>,
    },

    /// Show the meal grid (one row per student, four meals per date)
    Grid {
        /// First day to show (YYYY-MM-DD or M/D/YYYY)
        #[arg(long)]
        from: Option<String>,

        /// Last day to show, included
        #[arg(long)]
        to: Option<String>,
    },

    /// Export attendance data in various formats
    Export {
        /// Export format: csv, json, xlsx
        #[arg(long, value_name = "FORMAT", value_enum, default_value = "csv")]
        format: ExportFormat,

        /// Output file path (absolute path required)
        #[arg(long, value_name = "FILE")]
        file: String,

        /// Date range to export.
        ///
        /// Supported formats:
        /// - YYYY                  → entire year (e.g. "2025")
        /// - YYYY-MM               → entire month (e.g. "2025-06")
        /// - YYYY-MM-DD            → specific day  (e.g. "2025-06-18")
        ///
        /// Ranges (start:end) in the same format:
        /// - YYYY:YYYY, YYYY-MM:YYYY-MM, YYYY-MM-DD:YYYY-MM-DD
        ///
        /// Special value:
        /// - all                   → the entire log
        ///
        /// If omitted, all records in the database are exported.
        #[arg(
            long,
            value_name = "RANGE",
            help = "Filter export by year/month/day or a custom range"
        )]
        range: Option<String>,

        /// Export the aggregated meal grid instead of one row per scan
        #[arg(long)]
        grid: bool,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Show the internal log
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },
}
