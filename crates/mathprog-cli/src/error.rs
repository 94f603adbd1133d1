//! Error handling module for the mpscan CLI.
//!
//! This module provides custom error types using `thiserror` for structured
//! error handling throughout the application.

use thiserror::Error;

/// Main error type for the mpscan CLI application.
#[derive(Error, Debug)]
pub enum MpscanError {
    /// Error when a requested token kind name is not recognized.
    #[error("Invalid token kind: {0} (expected string, number, or end-of-token)")]
    UnknownKind(String),

    /// Error when input validation fails.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Error when file operations fail.
    #[error("File operation failed: {0}")]
    FileOperation(String),

    /// Error when the logging system cannot be initialized.
    #[error("Logging error: {0}")]
    Logging(String),

    /// Error when IO operations fail.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error when JSON serialization fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias using MpscanError.
pub type Result<T> = std::result::Result<T, MpscanError>;
