use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};

/// Handle the `init` command
///
/// Writes `~/.timberops/timberops.conf` (or the `--config` path) with the
/// built-in defaults: sample data, the demo employee roster and the admin
/// identity.
pub fn handle(cli: &Cli) -> AppResult<()> {
    let force = matches!(cli.command, Commands::Init { force: true });

    if cli.test {
        info("Test mode: no configuration file written.");
        return Ok(());
    }

    let path = crate::config_path(cli);
    if path.exists() && !force {
        return Err(AppError::Config(format!(
            "'{}' already exists (use --force to overwrite)",
            path.display()
        )));
    }

    println!("⚙️  Initializing TimberOps…");
    let cfg = Config::write_default(&path)?;
    println!("📄 Config file : {}", path.display());
    println!("👥 Employees   : {}", cfg.employees.len());

    success("TimberOps initialization completed!");
    Ok(())
}
