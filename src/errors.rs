//! Unified application error type.
//! All modules (intake, session, chart, export, cli) return AppError to keep
//! the error handling consistent and easy to manage.

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
    // Input / serialization
    // ---------------------------
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // ---------------------------
    // Editing errors
    // ---------------------------
    #[error("Invalid edit: {0}")]
    InvalidEdit(String),

    #[error("Invalid row number: {0}")]
    InvalidRow(usize),

    // ---------------------------
    // Rendering errors
    // ---------------------------
    #[error("Chart rendering error: {0}")]
    Chart(String),

    #[error("Image error: {0}")]
    Image(String),

    #[error("Cannot generate report: No site data provided")]
    EmptyTable,

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_yaml::Error),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    #[error("PDF generation failed: {0}")]
    PdfGeneration(#[source] Box<AppError>),
}

pub type AppResult<T> = Result<T, AppError>;
