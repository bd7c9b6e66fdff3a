//! Unified application error type.
//! Every layer (db, store, core, cli, export) returns AppError so that
//! `main` has a single place to report failures.

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
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    // ---------------------------
    // Timer / store logic
    // ---------------------------
    #[error("Cannot {operation} while the timer is {state}")]
    InvalidTransition {
        operation: &'static str,
        state: &'static str,
    },

    #[error("No ticket with id {0}")]
    TicketNotFound(i64),

    #[error("Nothing is staged for deletion")]
    NothingStaged,

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Configuration format error: {0}")]
    ConfigFormat(#[from] serde_yaml::Error),

    // ---------------------------
    // Export / backup errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Archive error: {0}")]
    Zip(#[from] zip::result::ZipError),
}

pub type AppResult<T> = Result<T, AppError>;
