//! Error types for table and configuration loading

use thiserror::Error;

/// Errors raised while reading one of the external lookup tables.
///
/// These never escape per-record classification: the table builder turns
/// them into a warning and an empty table.
#[derive(Error, Debug)]
pub enum TableLoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Malformed {table} table entry {key:?}: {reason}")]
    Shape {
        table: &'static str,
        key: String,
        reason: String,
    },
}

/// Errors raised while reading a classifier configuration document
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}
