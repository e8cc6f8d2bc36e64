use crate::cli::parser::Cli;
use crate::config::Config;
use crate::console::{self, session::Session};
use crate::errors::AppResult;
use chrono::NaiveDate;
use std::io;

/// Handle the `console` subcommand: one session over stdin.
pub fn handle(cli: &Cli, cfg: &Config, today: NaiveDate) -> AppResult<()> {
    let ctx = cfg.session(cli.role);
    tracing::info!(role = %ctx.role(), %today, "console session started");

    let mut session = Session::new(cfg, ctx, today);
    console::run(&mut session, io::stdin().lock())
}
