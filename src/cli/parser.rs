use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rRoster
#[derive(Parser)]
#[command(
    name = "rroster",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple roster CLI: import monthly shift grids, query date ranges and render calendars using SQLite",
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
        #[arg(long = "print", help = "Print the current configuration")]
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

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal audit log
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, help = "Write a .zip archive instead of a plain copy")]
        compress: bool,

        #[arg(long, short = 'f', help = "Overwrite without asking")]
        force: bool,
    },

    /// Manage employees
    Employee {
        #[command(subcommand)]
        action: EmployeeAction,
    },

    /// Add, edit or delete single shifts
    Shift {
        #[command(subcommand)]
        action: ShiftAction,
    },

    /// Import a monthly shift grid (wide CSV)
    Import {
        #[arg(long, value_name = "FILE")]
        file: String,

        /// Year of the month named in the first row of the file
        #[arg(long)]
        year: i32,

        #[arg(long = "dry-run", help = "Decode and print, do not store")]
        dry_run: bool,
    },

    /// Export shifts as flat rows (Employee ID, Date, Shift)
    Export {
        #[arg(long, value_enum, help = "Output format (default: from file extension)")]
        format: Option<ExportFormat>,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(
            long,
            value_name = "RANGE",
            help = "Filter export by year/month/day or a custom range (A:B)"
        )]
        range: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// List stored shifts
    List {
        #[arg(
            long,
            short,
            help = "Filter by year/month/day or a custom range (A:B)"
        )]
        range: Option<String>,
    },

    /// Show a month as a calendar
    Calendar {
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..=12))]
        month: u32,

        #[arg(long)]
        year: i32,

        #[arg(long, help = "Characters per day (default from config)")]
        width: Option<usize>,

        #[arg(long, help = "One line per shift instead of truncating")]
        expand: bool,
    },

    /// Show seven days of roster starting at a date
    Week {
        /// First day (YYYY-MM-DD)
        start: String,
    },
}

#[derive(Subcommand)]
pub enum EmployeeAction {
    /// Add an employee
    Add {
        name: String,

        #[arg(long, short, help = "Group: A, B or C")]
        group: String,
    },

    /// Remove an employee (and the shifts stored under its id)
    Remove {
        id: i64,

        #[arg(long, short = 'f', help = "Do not ask for confirmation")]
        force: bool,
    },

    /// List employees
    List,
}

#[derive(Subcommand)]
pub enum ShiftAction {
    /// Add a shift (overwrites an existing one for the same day)
    Add {
        employee: String,
        /// Date (YYYY-MM-DD)
        date: String,
        code: String,
    },

    /// Change the code of an existing shift
    Edit {
        employee: String,
        /// Date (YYYY-MM-DD)
        date: String,
        code: String,
    },

    /// Delete a shift
    Del {
        employee: String,
        /// Date (YYYY-MM-DD)
        date: String,
    },
}
