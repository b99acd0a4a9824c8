//! Error types for the lodge library.
//!
//! This module provides the error hierarchy for all booking operations,
//! using `thiserror` for ergonomic error handling. Every variant belongs to
//! exactly one [`ErrorKind`], which is what callers branch on.

use std::path::PathBuf;

use thiserror::Error;

use crate::reservation::{Reservation, ReservationId};

/// Result type alias for operations that may fail with a lodge error.
///
/// # Examples
///
/// ```
/// use lodge::{Error, Result};
///
/// fn example_operation() -> Result<i64> {
///     Ok(42)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the lodge library.
#[derive(Debug, Error)]
pub enum Error {
    /// A request field failed validation.
    #[error("invalid {field}: {message}")]
    InvalidInput {
        /// The field that failed validation, using its wire name.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// No reservation exists with the given id.
    #[error("reservation #{id} not found")]
    NotFound {
        /// The id that was looked up.
        id: ReservationId,
    },

    /// The requested period overlaps an existing reservation.
    #[error("the selected period is already booked: {details}")]
    Conflict {
        /// Details about the reservation that holds the period.
        details: String,
    },

    /// A database error occurred.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// A configuration file could not be parsed.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A database lock timeout occurred.
    #[error("database lock timeout after {seconds}s")]
    LockTimeout {
        /// The number of seconds waited before timing out.
        seconds: u64,
    },

    /// The data directory was not found and auto-initialization is disabled.
    #[error("data directory not found: {}", path.display())]
    DataDirectoryNotFound {
        /// The expected path to the data directory.
        path: PathBuf,
    },

    /// Database corruption was detected.
    #[error("database corruption detected: {details}")]
    DatabaseCorruption {
        /// Details about the corruption.
        details: String,
    },

    /// An unsupported schema version was encountered.
    #[error("unsupported schema version: expected {expected}, found {found}")]
    UnsupportedSchemaVersion {
        /// The expected schema version.
        expected: i32,
        /// The schema version found in the database.
        found: i32,
    },
}

/// The four failure classes every [`Error`] falls into.
///
/// The presentation layer translates these into status codes; see
/// [`ErrorKind::status_code`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed id, empty name, malformed date, or an empty stay.
    InvalidInput,
    /// Operating on an id that does not exist.
    NotFound,
    /// The period overlaps another reservation.
    Conflict,
    /// The store failed (connectivity, locking, corruption, I/O).
    Storage,
}

impl ErrorKind {
    /// Returns the HTTP status code the booking API answers with.
    ///
    /// Conflicts are reported as `400` together with the "already booked"
    /// message rather than `409`.
    ///
    /// # Examples
    ///
    /// ```
    /// use lodge::ErrorKind;
    ///
    /// assert_eq!(ErrorKind::NotFound.status_code(), 404);
    /// assert_eq!(ErrorKind::Conflict.status_code(), 400);
    /// assert_eq!(ErrorKind::Storage.status_code(), 500);
    /// ```
    #[must_use]
    pub const fn status_code(self) -> u16 {
        match self {
            Self::InvalidInput | Self::Conflict => 400,
            Self::NotFound => 404,
            Self::Storage => 500,
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput => write!(f, "invalid input"),
            Self::NotFound => write!(f, "not found"),
            Self::Conflict => write!(f, "conflict"),
            Self::Storage => write!(f, "storage"),
        }
    }
}

impl Error {
    /// Builds an [`Error::InvalidInput`] for the given field.
    pub(crate) fn invalid(field: &str, message: impl Into<String>) -> Self {
        Self::InvalidInput {
            field: field.to_string(),
            message: message.into(),
        }
    }

    /// Builds an [`Error::Conflict`] describing the reservation in the way.
    #[must_use]
    pub fn already_booked(existing: &Reservation) -> Self {
        Self::Conflict {
            details: format!(
                "reservation #{} ({}) holds {}",
                existing.id(),
                existing.name(),
                existing.stay()
            ),
        }
    }

    /// Returns the failure class of this error.
    ///
    /// # Examples
    ///
    /// ```
    /// use lodge::{Error, ErrorKind};
    ///
    /// let err = Error::Conflict { details: "2024-01-01 to 2024-01-05".into() };
    /// assert_eq!(err.kind(), ErrorKind::Conflict);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidInput { .. } | Self::Configuration(_) => ErrorKind::InvalidInput,
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::Conflict { .. } => ErrorKind::Conflict,
            Self::Database(_)
            | Self::Io(_)
            | Self::LockTimeout { .. }
            | Self::DataDirectoryNotFound { .. }
            | Self::DatabaseCorruption { .. }
            | Self::UnsupportedSchemaVersion { .. } => ErrorKind::Storage,
        }
    }

    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        self.kind().status_code()
    }

    /// Check if error indicates the reservation does not exist.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self.kind(), ErrorKind::NotFound)
    }

    /// Check if error indicates an overlapping reservation.
    #[must_use]
    pub const fn is_conflict(&self) -> bool {
        matches!(self.kind(), ErrorKind::Conflict)
    }
}
