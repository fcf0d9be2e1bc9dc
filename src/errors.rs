//! Unified application error type.
//! All modules (input, core, export, cli) return AppError to keep the error
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

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    // ---------------------------
    // Parsing / validation errors
    // ---------------------------
    #[error("Invalid time in field '{field}': {value:?}")]
    Parse { field: String, value: String },

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("{source_name} row {row}: {source}")]
    Record {
        source_name: String,
        row: usize,
        source: Box<AppError>,
    },

    // ---------------------------
    // Analysis errors
    // ---------------------------
    #[error("No hour has a positive labour/sales ratio")]
    NoPositiveRatio,

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
    #[error("Export format not supported: {0}")]
    InvalidExportFormat(String),

    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

impl AppError {
    pub fn parse(field: impl Into<String>, value: impl Into<String>) -> Self {
        AppError::Parse {
            field: field.into(),
            value: value.into(),
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
