use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::views::render_nav;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    print!("{}", render_nav(&cfg.session(cli.role)));
    Ok(())
}
