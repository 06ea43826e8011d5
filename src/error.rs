//! Error types and handling for Unfurl
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! Parsing and repair failures are the only fatal conditions in the core
//! pipeline. A truncated response that repair manages to recover is not an
//! error; it comes back as a normal [`crate::ParsedResponse`] with
//! `truncated: true`. Sanitization, extraction, and resolution are total
//! functions and have no variants here.

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for Unfurl operations
#[derive(Error, Diagnostic, Debug)]
pub enum RecoveryError {
    // Parse errors
    #[error("No JSON object found in response")]
    #[diagnostic(
        code(unfurl::parse::no_json_found),
        help("The model may not support structured generation; try one that can emit JSON")
    )]
    NoJsonFound,

    #[error("Response was truncated and could not be repaired")]
    #[diagnostic(
        code(unfurl::parse::truncated_unrecoverable),
        help("Try a shorter prompt or a different model")
    )]
    TruncatedUnrecoverable,

    #[error("Response contained no usable code files")]
    #[diagnostic(
        code(unfurl::parse::empty_file_set),
        help("Try a model better suited to code generation")
    )]
    EmptyFileSet,

    // Registry errors
    #[error("Registry file not found: {path}")]
    #[diagnostic(
        code(unfurl::registry::not_found),
        help("Check that the registry path is correct")
    )]
    RegistryNotFound { path: String },

    #[error("Failed to parse registry file: {path}")]
    #[diagnostic(
        code(unfurl::registry::parse_failed),
        help("Registry files are YAML with a top-level `packages` list")
    )]
    RegistryParseFailed { path: String, reason: String },

    // File system errors
    #[error("Failed to read file: {path}")]
    #[diagnostic(code(unfurl::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write file: {path}")]
    #[diagnostic(code(unfurl::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(unfurl::fs::io_error))]
    IoError { message: String },
}

impl From<std::io::Error> for RecoveryError {
    fn from(err: std::io::Error) -> Self {
        RecoveryError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for RecoveryError {
    fn from(err: serde_yaml::Error) -> Self {
        RecoveryError::RegistryParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for RecoveryError {
    fn from(err: serde_json::Error) -> Self {
        RecoveryError::IoError {
            message: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, RecoveryError>;
