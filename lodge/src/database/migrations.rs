//! Database schema management and migrations.
//!
//! This module handles database schema initialization and version checking.

use rusqlite::Connection;

use crate::error::{Error, Result};

use super::schema::{
    CREATE_END_INDEX, CREATE_INSERT_OVERLAP_TRIGGER, CREATE_METADATA_TABLE,
    CREATE_RESERVATIONS_TABLE, CREATE_START_INDEX, CREATE_UPDATE_OVERLAP_TRIGGER,
    CURRENT_SCHEMA_VERSION, INSERT_SCHEMA_VERSION, SELECT_SCHEMA_VERSION,
};

/// Initializes the database schema.
///
/// This function creates all tables, indices, triggers and metadata for a
/// fresh database in one batch.
///
/// # Errors
///
/// Returns an error if any SQL statement fails to execute.
///
/// # Examples
///
/// ```
/// use rusqlite::Connection;
/// use lodge::database::migrations::initialize_schema;
///
/// let conn = Connection::open_in_memory().unwrap();
/// initialize_schema(&conn).unwrap();
/// ```
pub fn initialize_schema(conn: &Connection) -> Result<()> {
    conn.execute(CREATE_METADATA_TABLE, [])?;
    conn.execute(CREATE_RESERVATIONS_TABLE, [])?;

    conn.execute(CREATE_START_INDEX, [])?;
    conn.execute(CREATE_END_INDEX, [])?;

    conn.execute_batch(CREATE_INSERT_OVERLAP_TRIGGER)?;
    conn.execute_batch(CREATE_UPDATE_OVERLAP_TRIGGER)?;

    conn.execute(INSERT_SCHEMA_VERSION, [CURRENT_SCHEMA_VERSION])?;

    log::debug!("initialized reservation schema v{CURRENT_SCHEMA_VERSION}");
    Ok(())
}

/// Gets the current schema version from the database.
///
/// # Errors
///
/// Returns an error if the query fails for reasons other than
/// "no rows returned" or a missing metadata table (both mean version 0).
pub fn get_schema_version(conn: &Connection) -> Result<i32> {
    match conn.query_row(SELECT_SCHEMA_VERSION, [], |row| {
        let value: String = row.get(0)?;
        value
            .parse::<i32>()
            .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))
    }) {
        Ok(version) => Ok(version),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(0),
        Err(e) => {
            // "no such table" surfaces as a generic SQLITE_ERROR
            if let rusqlite::Error::SqliteFailure(ref sqlite_err, _) = e {
                if sqlite_err.code == rusqlite::ErrorCode::Unknown {
                    return Ok(0);
                }
            }
            Err(e.into())
        }
    }
}

/// Checks schema compatibility and initializes if needed.
///
/// A fresh database (version 0) is initialized. Any other version must
/// match [`CURRENT_SCHEMA_VERSION`] exactly.
///
/// # Errors
///
/// Returns [`Error::UnsupportedSchemaVersion`] if the stored version differs,
/// or a database error if initialization or the version query fails.
pub fn check_schema_compatibility(conn: &Connection) -> Result<()> {
    let version = get_schema_version(conn)?;

    if version == 0 {
        initialize_schema(conn)?;
    } else if version != CURRENT_SCHEMA_VERSION {
        return Err(Error::UnsupportedSchemaVersion {
            expected: CURRENT_SCHEMA_VERSION,
            found: version,
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_connection() -> Connection {
        Connection::open_in_memory().unwrap()
    }

    #[test]
    fn test_initialize_schema() {
        let conn = create_test_connection();
        initialize_schema(&conn).unwrap();

        let version = get_schema_version(&conn).unwrap();
        assert_eq!(version, CURRENT_SCHEMA_VERSION);

        let count: i32 = conn
            .query_row("SELECT COUNT(*) FROM reservations", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 0);
    }

    #[test]
    fn test_get_schema_version_uninitialized() {
        let conn = create_test_connection();
        assert_eq!(get_schema_version(&conn).unwrap(), 0);
    }

    #[test]
    fn test_check_schema_compatibility_fresh_database() {
        let conn = create_test_connection();
        check_schema_compatibility(&conn).unwrap();
        assert_eq!(get_schema_version(&conn).unwrap(), CURRENT_SCHEMA_VERSION);
    }

    #[test]
    fn test_check_schema_compatibility_is_idempotent() {
        let conn = create_test_connection();
        check_schema_compatibility(&conn).unwrap();
        check_schema_compatibility(&conn).unwrap();
    }

    #[test]
    fn test_check_schema_compatibility_newer_version() {
        let conn = create_test_connection();
        initialize_schema(&conn).unwrap();

        conn.execute(
            "UPDATE metadata SET value = '999' WHERE key = 'schema_version'",
            [],
        )
        .unwrap();

        let err = check_schema_compatibility(&conn).unwrap_err();
        assert!(matches!(
            err,
            Error::UnsupportedSchemaVersion {
                expected: CURRENT_SCHEMA_VERSION,
                found: 999
            }
        ));
    }

    #[test]
    fn test_schema_creates_indices_and_triggers() {
        let conn = create_test_connection();
        initialize_schema(&conn).unwrap();

        let index_count: i32 = conn
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE type = 'index' AND name LIKE 'idx_reservations_%'",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(index_count, 2);

        let trigger_count: i32 = conn
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE type = 'trigger' AND name LIKE 'reservations_no_overlap_%'",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(trigger_count, 2);
    }

    #[test]
    fn test_schema_rejects_empty_stay() {
        let conn = create_test_connection();
        initialize_schema(&conn).unwrap();

        let result = conn.execute(
            "INSERT INTO reservations (name, start_date, end_date, created_at) VALUES ('Kim', '2024-01-05', '2024-01-05', 0)",
            [],
        );
        assert!(result.is_err());
    }
}
