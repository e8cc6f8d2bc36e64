//! TimberOps library root.
//! Exposes the CLI parser, the high-level `run()` function and the
//! sawmill work-log, attendance and reporting modules.

pub mod cli;
pub mod config;
pub mod console;
pub mod core;
pub mod errors;
pub mod export;
pub mod logging;
pub mod models;
pub mod ui;
pub mod utils;

use chrono::NaiveDate;
use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::{AppError, AppResult};
use std::path::PathBuf;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config, today: NaiveDate) -> AppResult<()> {
    match &cli.command {
        Commands::Init { .. } => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(cli, cfg),
        Commands::Console => cli::commands::console::handle(cli, cfg, today),
        Commands::Calc { .. } => cli::commands::calc::handle(&cli.command),
        Commands::Report { .. } => cli::commands::report::handle(cli, cfg),
        Commands::Roster { .. } => cli::commands::roster::handle(cli, cfg, today),
        Commands::Nav => cli::commands::nav::handle(cli, cfg),
    }
}

/// Config file in effect: `--config`, or the standard location.
pub fn config_path(cli: &Cli) -> PathBuf {
    cli.config
        .as_deref()
        .map(utils::path::expand_tilde)
        .unwrap_or_else(Config::config_file)
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    logging::init();

    let cli = Cli::parse();

    // test mode never touches the user's config file
    let cfg = if cli.test {
        Config::default()
    } else {
        Config::load_from(&config_path(&cli))?
    };

    let today = match &cli.today {
        Some(s) => {
            utils::date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.clone()))?
        }
        None => utils::date::today(),
    };

    tracing::debug!(command = ?cli.command, %today, "dispatching");
    dispatch(&cli, &cfg, today)
}
