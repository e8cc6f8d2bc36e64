// src/export/logic.rs

use crate::errors::{AppError, AppResult};
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::xlsx::export_xlsx;
use crate::export::{ExportFormat, ExportRow};
use crate::ui::messages::warning;
use crate::utils::path::expand_tilde;
use std::path::PathBuf;

/// Where and how to write one export.
#[derive(Debug, Clone)]
pub struct ExportRequest {
    pub format: ExportFormat,
    pub file: String,
    pub force: bool,
    /// Ask before overwriting (top-level CLI) instead of failing (console).
    pub interactive: bool,
}

impl ExportRequest {
    /// Output path; must be absolute once `~` is expanded.
    pub fn resolve_path(&self) -> AppResult<PathBuf> {
        let path = expand_tilde(&self.file);
        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "output file path must be absolute: {}",
                self.file
            )));
        }
        Ok(path)
    }
}

/// High-level export logic.
pub struct ExportLogic;

impl ExportLogic {
    /// Writes `rows` in the requested format. Returns the number of rows
    /// written; an empty dataset writes nothing and returns 0.
    pub fn export<T: ExportRow>(rows: &[T], req: &ExportRequest, sheet_name: &str) -> AppResult<usize> {
        let path = req.resolve_path()?;
        ensure_writable(&path, req.force, req.interactive)?;

        if rows.is_empty() {
            warning("No rows to export for the selected data.");
            return Ok(0);
        }

        tracing::info!(
            format = req.format.as_str(),
            rows = rows.len(),
            path = %path.display(),
            "export started"
        );

        match req.format {
            ExportFormat::Csv => export_csv(rows, &path)?,
            ExportFormat::Json => export_json(rows, &path)?,
            ExportFormat::Xlsx => export_xlsx(rows, &path, sheet_name)?,
        }

        Ok(rows.len())
    }
}
