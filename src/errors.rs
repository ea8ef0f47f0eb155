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
    // Input document
    // ---------------------------
    #[error("Error parsing JSON file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid Timeline format: {0}")]
    InputShape(String),

    #[error("Please provide a JSON file: {0}")]
    NotJsonFile(String),

    // ---------------------------
    // Record-level errors
    // ---------------------------
    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),

    #[error("Invalid record: {0}")]
    InvalidRecord(String),

    #[error("Record #{index}: {source}")]
    AtRecord {
        index: usize,
        #[source]
        source: Box<AppError>,
    },

    // ---------------------------
    // User input
    // ---------------------------
    #[error("Invalid date format: {0} (expected YYYY-MM-DD)")]
    InvalidDate(String),

    #[error("Invalid month format: {0} (expected YYYY-MM)")]
    InvalidMonth(String),

    // ---------------------------
    // Selection errors
    // ---------------------------
    #[error("Please select a date first")]
    NoDateSelected,

    #[error("No records found for date {0}")]
    NoRecordsForDate(String),

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
}

impl AppError {
    /// True for errors tied to a single input record, which the
    /// `skip_invalid_records` policy is allowed to drop.
    pub fn is_record_error(&self) -> bool {
        matches!(
            self,
            AppError::InvalidTimestamp(_) | AppError::InvalidRecord(_)
        )
    }

    /// Attach the position of the offending record in the input sequence.
    pub fn at_record(self, index: usize) -> Self {
        AppError::AtRecord {
            index,
            source: Box::new(self),
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
