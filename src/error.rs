//! Error types for the advocate search server.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! The search core itself is total; only the store and configuration boundaries fail.

use thiserror::Error;

/// Errors that can occur when reading from or writing to the advocate store.
#[derive(Error, Debug)]
pub enum StoreError {
    /// SQLite rejected a statement or a connection failed
    #[error("Database error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// A JSON column could not be encoded or decoded
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A stored row does not fit the advocate shape
    #[error("Invalid row: {0}")]
    InvalidRow(String),

    /// Resource not found
    #[error("Resource not found: {0}")]
    NotFound(String),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with StoreError
pub type StoreResult<T> = Result<T, StoreError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
