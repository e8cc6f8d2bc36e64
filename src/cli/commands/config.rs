use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{error, success, warning};
use std::path::Path;
use std::process::Command;

/// Handle the `config` subcommand
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let Commands::Config {
        print_config,
        edit_config,
        editor,
    } = &cli.command
    else {
        return Ok(());
    };

    if *print_config {
        println!("📄 Current configuration:\n");
        println!("{}", serde_yaml::to_string(cfg)?);
    }

    if *edit_config {
        edit(&crate::config_path(cli), editor.as_deref());
    }

    Ok(())
}

fn platform_editor() -> String {
    std::env::var("EDITOR")
        .or_else(|_| std::env::var("VISUAL"))
        .unwrap_or_else(|_| {
            if cfg!(target_os = "windows") {
                "notepad".to_string()
            } else {
                "nano".to_string()
            }
        })
}

fn launch(editor: &str, path: &Path) -> bool {
    matches!(Command::new(editor).arg(path).status(), Ok(s) if s.success())
}

/// Opens the file in the requested editor, falling back to the platform
/// default when it cannot be started.
fn edit(path: &Path, requested: Option<&str>) {
    let default_editor = platform_editor();
    let editor = requested.unwrap_or(&default_editor);

    if launch(editor, path) {
        success(format!("Configuration file edited using '{editor}'"));
        return;
    }
    if editor == default_editor {
        error(format!("Failed to edit configuration file using '{editor}'"));
        return;
    }

    warning(format!(
        "Editor '{editor}' not available, falling back to '{default_editor}'"
    ));
    if launch(&default_editor, path) {
        success(format!(
            "Configuration file edited using fallback '{default_editor}'"
        ));
    } else {
        error(format!(
            "Failed to edit configuration file using fallback '{default_editor}'"
        ));
    }
}
