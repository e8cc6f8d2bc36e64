use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::nav::Page;
use crate::core::report::series;
use crate::errors::AppResult;
use crate::export::{ExportLogic, ExportRequest, ReportExport};
use crate::ui::views::{ViewStyle, render_report};

/// Handle the `report` subcommand
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let Commands::Report {
        period,
        export,
        file,
        force,
    } = &cli.command
    else {
        return Ok(());
    };

    cfg.session(cli.role).require(Page::Reports)?;

    let rows = series(*period);
    let style = ViewStyle {
        date_pattern: cfg.date_display.clone(),
        separator: cfg.separator(),
    };
    print!("{}", render_report(*period, &rows, &style));

    if let (Some(format), Some(file)) = (export, file) {
        let req = ExportRequest {
            format: *format,
            file: file.clone(),
            force: *force,
            interactive: true,
        };
        let out: Vec<ReportExport> = rows.iter().map(ReportExport::from).collect();
        ExportLogic::export(&out, &req, "Report")?;
    }
    Ok(())
}
