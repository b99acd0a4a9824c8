//! Database configuration and connection parameters.
//!
//! This module provides configuration types for database connections,
//! including path resolution and connection parameters.

use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{Error, Result};

/// File name of the reservation database inside the data directory.
pub const DATABASE_FILE: &str = "lodge.db";

/// Configuration for database connections.
///
/// # Examples
///
/// ```
/// use lodge::database::DatabaseConfig;
/// use std::time::Duration;
///
/// let config = DatabaseConfig::new("/tmp/lodge.db")
///     .with_busy_timeout(Duration::from_secs(10));
/// assert_eq!(config.busy_timeout, Duration::from_secs(10));
/// ```
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// Path to the database file.
    pub path: PathBuf,
    /// How long a writer waits for the database lock.
    pub busy_timeout: Duration,
    /// Whether to create the database (and its directory) if missing.
    pub auto_create: bool,
    /// Whether to open the database in read-only mode.
    pub read_only: bool,
}

impl DatabaseConfig {
    /// Creates a configuration with a 5 second busy timeout and
    /// auto-creation enabled.
    #[must_use]
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            busy_timeout: Duration::from_millis(5000),
            auto_create: true,
            read_only: false,
        }
    }

    /// Creates a configuration for the database file inside `data_dir`.
    #[must_use]
    pub fn in_data_dir(data_dir: impl AsRef<Path>) -> Self {
        Self::new(data_dir.as_ref().join(DATABASE_FILE))
    }

    /// Sets the busy timeout duration.
    #[must_use]
    pub fn with_busy_timeout(mut self, timeout: Duration) -> Self {
        self.busy_timeout = timeout;
        self
    }

    /// Disables creation of a missing database.
    ///
    /// Opening then fails with [`Error::DataDirectoryNotFound`] when the
    /// data directory does not exist.
    #[must_use]
    pub fn without_auto_create(mut self) -> Self {
        self.auto_create = false;
        self
    }

    /// Configures the database to be opened in read-only mode.
    ///
    /// Read-only implies no auto-creation.
    #[must_use]
    pub fn read_only(mut self) -> Self {
        self.read_only = true;
        self.auto_create = false;
        self
    }
}

/// Returns the default data directory, `~/.lodge`.
///
/// # Errors
///
/// Returns an error if the home directory cannot be determined.
pub fn default_data_dir() -> Result<PathBuf> {
    home::home_dir()
        .map(|home| home.join(".lodge"))
        .ok_or_else(|| Error::invalid("home_directory", "cannot determine home directory"))
}

/// Resolves the data directory from `LODGE_DATA_DIR` or the default.
///
/// # Errors
///
/// Returns an error if `LODGE_DATA_DIR` is unset and the home directory
/// cannot be determined.
pub fn resolve_data_dir() -> Result<PathBuf> {
    match std::env::var_os("LODGE_DATA_DIR") {
        Some(dir) if !dir.is_empty() => Ok(PathBuf::from(dir)),
        _ => default_data_dir(),
    }
}

/// Resolves the database path: `$LODGE_DATA_DIR/lodge.db` if set,
/// `~/.lodge/lodge.db` otherwise.
///
/// # Errors
///
/// Returns an error if the data directory cannot be resolved.
pub fn resolve_database_path() -> Result<PathBuf> {
    Ok(resolve_data_dir()?.join(DATABASE_FILE))
}
