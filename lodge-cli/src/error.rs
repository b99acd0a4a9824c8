//! CLI-specific error types with exit codes.
//!
//! This module wraps library errors and maps every failure to a process
//! exit code and to the status code reported in the JSON error envelope.

use std::fmt;

use lodge::{Error as LibError, ErrorKind};

/// CLI-specific error type with exit code mapping.
#[derive(Debug)]
pub enum CliError {
    /// Library error (wrapped).
    Library(LibError),

    /// I/O error.
    Io(std::io::Error),

    /// Timeout waiting for the database lock.
    Timeout(u64),

    /// Data directory not found (and auto-init disabled).
    NoDataDirectory,

    /// Configuration error.
    Config(String),

    /// Semantic failure (e.g. the requested period is not free).
    SemanticFailure(String),
}

impl CliError {
    /// Get the appropriate exit code for this error.
    ///
    /// Exit codes:
    /// - 0: Success (not an error)
    /// - 1: Booking conflict or failed availability check
    /// - 2: Timeout waiting for database lock
    /// - 3: No data directory found
    /// - 4: Invalid input
    /// - 5: I/O error
    /// - 6: Other storage error
    /// - 7: Configuration error
    /// - 8: Reservation not found
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::SemanticFailure(_) => 1,
            CliError::Library(lib_err) => match lib_err.kind() {
                ErrorKind::Conflict => 1,
                ErrorKind::InvalidInput => 4,
                ErrorKind::Storage => 6,
                ErrorKind::NotFound => 8,
            },
            CliError::Timeout(_) => 2,
            CliError::NoDataDirectory => 3,
            CliError::Io(_) => 5,
            CliError::Config(_) => 7,
        }
    }

    /// Get the HTTP-style status code reported alongside the message.
    pub fn status_code(&self) -> u16 {
        match self {
            CliError::Library(e) => e.status_code(),
            CliError::Config(_) => ErrorKind::InvalidInput.status_code(),
            CliError::SemanticFailure(_) => ErrorKind::Conflict.status_code(),
            CliError::Io(_) | CliError::Timeout(_) | CliError::NoDataDirectory => {
                ErrorKind::Storage.status_code()
            }
        }
    }

    /// Render the error as the `{"error": ..., "status": ...}` envelope.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": self.to_string(),
            "status": self.status_code(),
        })
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Library(e) => write!(f, "{e}"),
            CliError::Io(e) => write!(f, "I/O error: {e}"),
            CliError::Timeout(seconds) => {
                write!(f, "Timeout waiting for database lock after {seconds}s")
            }
            CliError::NoDataDirectory => {
                write!(
                    f,
                    "Data directory not found (use --data-dir or enable auto-init)"
                )
            }
            CliError::Config(msg) => write!(f, "Configuration error: {msg}"),
            CliError::SemanticFailure(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Library(e) => Some(e),
            CliError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<LibError> for CliError {
    fn from(e: LibError) -> Self {
        match e {
            LibError::LockTimeout { seconds } => CliError::Timeout(seconds),
            LibError::DataDirectoryNotFound { .. } => CliError::NoDataDirectory,
            LibError::Configuration(inner) => CliError::Config(inner.to_string()),
            other => CliError::Library(other),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        CliError::Io(e)
    }
}
