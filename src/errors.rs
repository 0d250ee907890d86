//! Unified application error type.
//! All modules (db, core, export, cli) return AppError to keep the error
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
    // Storage-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Stored data error: {0}")]
    Json(#[from] serde_json::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid time format: {0} (expected HH:MM)")]
    InvalidTime(String),

    #[error("Invalid count: '{0}' (expected a whole number or nothing)")]
    InvalidCount(String),

    #[error("Unknown row field: {0}")]
    UnknownField(String),

    // ---------------------------
    // Sheet logic errors
    // ---------------------------
    #[error("The sheet is closed: start a new flight before editing")]
    SheetClosed,

    #[error("No row with load '{0}'")]
    RowNotFound(String),

    #[error("More than one FERRY row in the imported data")]
    DuplicateFerry,

    // ---------------------------
    // Import errors
    // ---------------------------
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("CSV header mismatch: {0}")]
    CsvHeader(String),

    #[error("CSV line {line}: {message}")]
    CsvRow { line: usize, message: String },

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Export / print errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    #[error("Print error: {0}")]
    Print(String),
}

pub type AppResult<T> = Result<T, AppError>;
