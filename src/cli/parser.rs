use crate::core::report::ReportPeriod;
use crate::export::ExportFormat;
use crate::models::UserRole;
use clap::{Parser, Subcommand};

/// Command-line interface definition for TimberOps
#[derive(Parser, Debug)]
#[command(
    name = "timberops",
    version = env!("CARGO_PKG_VERSION"),
    about = "Sawmill operations console: work logs with board-feet calculation, attendance and reports",
    long_about = None
)]
pub struct Cli {
    /// Use this configuration file instead of ~/.timberops/timberops.conf
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    /// Sign in with this role instead of the configured default
    #[arg(global = true, long = "role", value_enum)]
    pub role: Option<UserRole>,

    /// Run in test mode (built-in defaults, no config file read or written)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    /// Pretend today is this date (YYYY-MM-DD)
    #[arg(global = true, long = "today", hide = true)]
    pub today: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write a default configuration file
    Init {
        #[arg(long, help = "Overwrite an existing configuration file")]
        force: bool,
    },

    /// Show or edit the configuration file
    Config {
        #[arg(long = "print", help = "Print the effective configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(long = "editor", help = "Editor to use instead of $EDITOR")]
        editor: Option<String>,
    },

    /// Start an interactive console session (type 'help' inside)
    Console,

    /// Calculate board feet from dimensions in inches
    Calc {
        #[arg(long, short = 'l', help = "Length (in)")]
        length: String,

        #[arg(long, short = 'w', help = "Width (in)")]
        width: String,

        #[arg(long, short = 't', help = "Thickness (in)")]
        thickness: String,

        #[arg(long, short = 'p', help = "Number of pieces")]
        pieces: String,
    },

    /// Show a production/attendance report
    Report {
        #[arg(value_enum, default_value = "daily")]
        period: ReportPeriod,

        #[arg(long, value_enum, requires = "file", help = "Also export the report")]
        export: Option<ExportFormat>,

        #[arg(long, value_name = "FILE", help = "Absolute output path for --export")]
        file: Option<String>,

        #[arg(long, short = 'f', help = "Overwrite an existing output file")]
        force: bool,
    },

    /// Show the default attendance roster for a date
    Roster {
        #[arg(long, help = "Date (YYYY-MM-DD), defaults to today")]
        date: Option<String>,
    },

    /// Show the navigation menu visible to the current role
    Nav,
}
