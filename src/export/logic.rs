// src/export/logic.rs

use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::{ReportExport, analysis_to_rows};
use crate::models::Analysis;
use crate::utils::path::expand_tilde;
use tracing::debug;

/// High-level export of the hourly report.
pub struct ExportLogic;

impl ExportLogic {
    /// Write `analysis` to `file`.
    ///
    /// - `format`: `None` infers csv/json from the extension
    /// - `force`: overwrite without asking
    pub fn export(
        analysis: &Analysis,
        format: Option<ExportFormat>,
        file: &str,
        force: bool,
    ) -> AppResult<()> {
        let path = expand_tilde(file);
        let format = match format {
            Some(f) => f,
            None => ExportFormat::from_path(&path)?,
        };
        debug!(format = format.as_str(), path = %path.display(), "export");

        ensure_writable(&path, force)?;

        match format {
            ExportFormat::Csv => export_csv(&analysis_to_rows(analysis), &path)?,
            ExportFormat::Json => export_json(&ReportExport::from(analysis), &path)?,
        }

        Ok(())
    }
}
