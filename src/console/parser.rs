use crate::core::report::ReportPeriod;
use crate::export::{ExportDataset, ExportFormat};
use crate::models::UserRole;
use clap::{Parser, Subcommand};

/// One console input line.
#[derive(Parser, Debug)]
#[command(
    name = "timberops>",
    no_binary_name = true,
    disable_version_flag = true,
    help_template = "Commands:\n{subcommands}"
)]
pub struct ConsoleLine {
    #[command(subcommand)]
    pub command: ConsoleCommand,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum ConsoleCommand {
    /// Open the form for a new work log entry
    New,

    /// Open the form pre-filled with an existing entry
    Edit { id: String },

    /// Set a form field: date, type, length, width, thickness, pieces, unit, notes
    Set {
        field: String,

        /// New value; omit to clear the field
        #[arg(num_args = 0.., trailing_var_arg = true, allow_hyphen_values = true)]
        value: Vec<String>,
    },

    /// Attach an image to the open form
    Photo {
        path: Option<String>,

        #[arg(long, conflicts_with = "path", help = "Remove the attached photo")]
        clear: bool,
    },

    /// Show the open form
    Show,

    /// Save the open form
    Submit,

    /// Close the open form without saving
    Cancel,

    /// Delete a work log entry
    #[command(alias = "del")]
    Delete { id: String },

    /// List work log entries, newest first
    #[command(alias = "ls")]
    List {
        #[arg(long, help = "Only entries in YYYY, YYYY-MM, YYYY-MM-DD or start:end")]
        range: Option<String>,
    },

    /// Daily attendance
    #[command(subcommand)]
    Attendance(AttendanceCommand),

    /// Production/attendance report
    Report {
        #[arg(value_enum, default_value = "daily")]
        period: ReportPeriod,
    },

    /// Today's figures
    Dashboard {
        #[arg(long, help = "Another day (YYYY-MM-DD)")]
        date: Option<String>,
    },

    /// Show the navigation menu for your role
    Nav,

    /// Manage employees
    #[command(subcommand)]
    Employees(EmployeeCommand),

    /// Export session data to a file
    Export {
        #[arg(value_enum)]
        dataset: ExportDataset,

        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE", help = "Absolute output path")]
        file: String,

        #[arg(long, help = "Work log only: YYYY, YYYY-MM, YYYY-MM-DD or start:end")]
        range: Option<String>,

        #[arg(long, value_enum, default_value = "daily", help = "Report only")]
        period: ReportPeriod,

        #[arg(long, short = 'f', help = "Overwrite an existing file")]
        force: bool,
    },

    /// Print the session's operation log
    Log,

    /// Leave the console
    #[command(alias = "exit")]
    Quit,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum AttendanceCommand {
    /// Switch the sheet to another date (YYYY-MM-DD or 'today')
    Date { date: String },

    /// Mark an employee present (by id or full name)
    Present { employee: String },

    /// Mark an employee absent
    Absent { employee: String },

    /// Record time in (HH:MM)
    In { employee: String, time: String },

    /// Record time out (HH:MM)
    Out { employee: String, time: String },

    /// Show the sheet
    Show,

    /// Save the sheet
    Save,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum EmployeeCommand {
    /// List employees
    List,

    /// Add an employee (quote names with spaces)
    Add {
        name: String,

        #[arg(long, value_enum, default_value = "worker")]
        role: UserRole,
    },

    /// Remove an employee by id
    Remove { id: String },
}
