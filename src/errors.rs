//! Unified application error type.
//! All modules (core, cli, export, utils) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Calendar source
    // ---------------------------
    #[error("Calendar error: {0}")]
    Calendar(String),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid month selection: {0}")]
    InvalidMonth(String),

    #[error("Invalid classification pattern '{0}': {1}")]
    InvalidPattern(String, regex::Error),

    #[error("Invalid weight: {0} (weights must be > 0)")]
    InvalidWeight(f64),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
