mod csv;
mod json;

use crate::errors::{AppError, AppResult};
use crate::models::bucket::Report;
use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

/// Common completion message for exports.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

/// Write a report to `path` in the requested format. Refuses to overwrite
/// an existing file unless `force` is set.
pub fn write_report(
    format: ExportFormat,
    path: &Path,
    report: &Report,
    party_a_name: &str,
    party_b_name: &str,
    force: bool,
) -> AppResult<()> {
    if path.exists() && !force {
        return Err(AppError::Export(format!(
            "file already exists: {} (use --force to overwrite)",
            path.display()
        )));
    }

    match format {
        ExportFormat::Csv => csv::write_csv(path, report, party_a_name, party_b_name)?,
        ExportFormat::Json => json::write_json(path, report)?,
    }

    notify_export_success(format.as_str(), path);
    Ok(())
}
