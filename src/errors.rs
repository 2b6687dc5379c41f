//! Unified application error type.
//! All modules (source, core, cli, export) return AppError to keep the error
//! handling consistent and easy to manage.

use crate::source::SourceError;
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
    // Row source
    // ---------------------------
    #[error("Failed to read attendance rows: {0}")]
    Source(#[from] SourceError),

    // ---------------------------
    // Input validation
    // ---------------------------
    #[error("Invalid month (expected YYYY-MM): {0}")]
    InvalidMonth(String),

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

pub type AppResult<T> = Result<T, AppError>;
