//! Database connection management.
//!
//! This module provides the main database handle with the PRAGMA settings
//! needed for concurrent writers across processes.

use rusqlite::{Connection, OpenFlags};

use crate::error::{Error, Result};

use super::config::DatabaseConfig;

/// A `SQLite` connection holding the reservation store.
///
/// Each handle owns its own connection. Several handles, in one process or
/// many, may point at the same file; writes are serialized by `SQLite`.
///
/// # Examples
///
/// ```no_run
/// use lodge::database::{Database, DatabaseConfig};
///
/// let db = Database::open(DatabaseConfig::new("/tmp/lodge.db")).unwrap();
/// ```
#[derive(Debug)]
pub struct Database {
    pub(super) conn: Connection,
    pub(super) config: DatabaseConfig,
}

impl Database {
    /// Opens the database, creating it if allowed, and verifies the schema.
    ///
    /// WAL journaling and the configured busy timeout are applied on every
    /// open.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DataDirectoryNotFound`] if the file's directory is
    /// missing and auto-creation is off, or a database error if the file
    /// cannot be opened or its schema is incompatible.
    pub fn open(config: DatabaseConfig) -> Result<Self> {
        if let Some(parent) = config.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                if config.auto_create {
                    std::fs::create_dir_all(parent)?;
                } else {
                    return Err(Error::DataDirectoryNotFound {
                        path: parent.to_path_buf(),
                    });
                }
            }
        }

        let flags = if config.read_only {
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX
        } else {
            OpenFlags::SQLITE_OPEN_READ_WRITE
                | OpenFlags::SQLITE_OPEN_CREATE
                | OpenFlags::SQLITE_OPEN_NO_MUTEX
        };

        let conn = Connection::open_with_flags(&config.path, flags)?;
        conn.busy_timeout(config.busy_timeout)?;

        // journal_mode answers with a row, so it cannot go through execute
        if !config.read_only {
            let _: String = conn.query_row("PRAGMA journal_mode = WAL", [], |row| row.get(0))?;
            conn.execute_batch("PRAGMA synchronous = NORMAL")?;
        }

        if config.read_only {
            let version = super::migrations::get_schema_version(&conn)?;
            if version != super::schema::CURRENT_SCHEMA_VERSION {
                return Err(Error::UnsupportedSchemaVersion {
                    expected: super::schema::CURRENT_SCHEMA_VERSION,
                    found: version,
                });
            }
        } else {
            super::migrations::check_schema_compatibility(&conn)?;
        }

        log::debug!("opened reservation database at {}", config.path.display());
        Ok(Self { conn, config })
    }

    /// Opens a private in-memory database with the schema applied.
    ///
    /// # Errors
    ///
    /// Returns a database error if the schema cannot be created.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        super::migrations::initialize_schema(&conn)?;
        Ok(Self {
            conn,
            config: DatabaseConfig::new(":memory:"),
        })
    }

    /// Returns the configuration this handle was opened with.
    #[must_use]
    pub const fn config(&self) -> &DatabaseConfig {
        &self.config
    }

    /// Returns a reference to the underlying `SQLite` connection.
    ///
    /// The connection implements [`Store`](crate::Store), so it can be used
    /// directly for reads.
    #[must_use]
    pub const fn connection(&self) -> &Connection {
        &self.conn
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_database_open() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("test.db");

        let db = Database::open(DatabaseConfig::new(&path)).unwrap();
        assert!(path.exists());

        let journal_mode: String = db
            .connection()
            .query_row("PRAGMA journal_mode", [], |row| row.get(0))
            .unwrap();
        assert_eq!(journal_mode.to_lowercase(), "wal");
    }

    #[test]
    fn test_database_auto_create_directory() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("subdir").join("test.db");

        let _db = Database::open(DatabaseConfig::new(&path)).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_database_missing_directory_without_auto_create() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing").join("test.db");

        let err = Database::open(DatabaseConfig::new(&path).without_auto_create()).unwrap_err();
        assert!(matches!(err, Error::DataDirectoryNotFound { .. }));
        assert!(!path.exists());
    }

    #[test]
    fn test_database_read_only() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("test.db");
        Database::open(DatabaseConfig::new(&path)).unwrap();

        let db = Database::open(DatabaseConfig::new(&path).read_only()).unwrap();
        let result = db.connection().execute("CREATE TABLE scratch (id INTEGER)", []);
        assert!(result.is_err());
    }

    #[test]
    fn test_database_in_memory() {
        let db = Database::open_in_memory().unwrap();
        let count: i64 = db
            .connection()
            .query_row("SELECT COUNT(*) FROM reservations", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 0);
    }
}
