use crate::errors::{AppError, AppResult};
use crate::models::bucket::Report;
use std::path::Path;

/// Write the full report (rows + totals) as pretty-printed JSON. Values are
/// left unrounded; JSON consumers do their own presentation.
pub fn write_json(path: &Path, report: &Report) -> AppResult<()> {
    let json = serde_json::to_string_pretty(report).map_err(|e| AppError::Export(e.to_string()))?;
    std::fs::write(path, json)?;
    Ok(())
}
