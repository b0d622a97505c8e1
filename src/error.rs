//! Error types and handling for fsweep
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for fsweep operations
#[derive(Error, Diagnostic, Debug)]
pub enum FsweepError {
    // Stat / enumeration errors
    #[error("Failed to stat path: {path}")]
    #[diagnostic(code(fsweep::fs::stat_failed))]
    StatFailed { path: String, reason: String },

    #[error("Failed to read directory: {path}")]
    #[diagnostic(
        code(fsweep::fs::read_dir_failed),
        help("Check that the path exists and is a readable directory")
    )]
    ReadDirFailed { path: String, reason: String },

    // File errors
    #[error("File '{path}' is a directory but should be a file")]
    #[diagnostic(
        code(fsweep::fs::expected_file),
        help("Pass the path of a regular file, not a directory")
    )]
    ExpectedFile { path: String },

    #[error("Failed to read file: {path}")]
    #[diagnostic(code(fsweep::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write file: {path}")]
    #[diagnostic(code(fsweep::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("Failed to create directory: {path}")]
    #[diagnostic(code(fsweep::fs::create_dir_failed))]
    CreateDirFailed { path: String, reason: String },

    // JSON errors
    #[error("Failed to parse JSON file: {path}")]
    #[diagnostic(code(fsweep::json::parse_failed))]
    JsonParseFailed { path: String, reason: String },

    #[error("Failed to serialize value to JSON: {reason}")]
    #[diagnostic(code(fsweep::json::serialize_failed))]
    JsonSerializeFailed { reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(fsweep::fs::io_error))]
    IoError { message: String },
}

impl From<std::io::Error> for FsweepError {
    fn from(err: std::io::Error) -> Self {
        FsweepError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for FsweepError {
    fn from(err: serde_json::Error) -> Self {
        FsweepError::JsonParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, FsweepError>;
