use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::attendance::materialize;
use crate::core::nav::Page;
use crate::errors::{AppError, AppResult};
use crate::ui::views::{ViewStyle, render_attendance};
use crate::utils::date::parse_date;
use chrono::NaiveDate;

/// Handle the `roster` subcommand: the default sheet for one date, every
/// employee absent.
pub fn handle(cli: &Cli, cfg: &Config, today: NaiveDate) -> AppResult<()> {
    let Commands::Roster { date } = &cli.command else {
        return Ok(());
    };

    cfg.session(cli.role).require(Page::Attendance)?;

    let date = match date {
        Some(s) => parse_date(s).ok_or_else(|| AppError::InvalidDate(s.clone()))?,
        None => today,
    };

    let sheet = materialize(&cfg.employees, date, &[]);
    let style = ViewStyle {
        date_pattern: cfg.date_display.clone(),
        separator: cfg.separator(),
    };
    print!("{}", render_attendance(date, &sheet, &style));
    Ok(())
}
