//! Database schema definitions and SQL constants.
//!
//! This module contains all SQL table definitions, indices, triggers and
//! statements used by the reservation store.

/// Current schema version for the database.
///
/// This version is stored in the metadata table and is used to ensure
/// compatibility between the database and the application.
pub const CURRENT_SCHEMA_VERSION: i32 = 1;

/// Message raised by the overlap triggers.
///
/// The store translates constraint failures carrying this text into
/// conflicts.
pub const OVERLAP_MESSAGE: &str = "reservation period overlaps an existing reservation";

/// SQL statement to create the metadata table.
pub const CREATE_METADATA_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS metadata (
        key TEXT PRIMARY KEY NOT NULL,
        value TEXT NOT NULL
    )";

/// SQL statement to create the reservations table.
///
/// Dates are stored as `YYYY-MM-DD` text, which sorts in calendar order.
/// `AUTOINCREMENT` keeps ids of deleted reservations from being reused.
pub const CREATE_RESERVATIONS_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS reservations (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL CHECK (length(trim(name)) > 0),
        start_date TEXT NOT NULL,
        end_date TEXT NOT NULL,
        created_at INTEGER NOT NULL,
        CHECK (start_date < end_date)
    )";

/// SQL statement to create an index on the `start_date` column.
pub const CREATE_START_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_reservations_start ON reservations(start_date)";

/// SQL statement to create an index on the `end_date` column.
pub const CREATE_END_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_reservations_end ON reservations(end_date)";

/// Trigger rejecting inserts that overlap any stored reservation.
pub const CREATE_INSERT_OVERLAP_TRIGGER: &str = r"
    CREATE TRIGGER IF NOT EXISTS reservations_no_overlap_insert
    BEFORE INSERT ON reservations
    WHEN EXISTS (
        SELECT 1 FROM reservations
        WHERE start_date <= NEW.end_date AND NEW.start_date <= end_date
    )
    BEGIN
        SELECT RAISE(ABORT, 'reservation period overlaps an existing reservation');
    END";

/// Trigger rejecting date changes that overlap any other reservation.
pub const CREATE_UPDATE_OVERLAP_TRIGGER: &str = r"
    CREATE TRIGGER IF NOT EXISTS reservations_no_overlap_update
    BEFORE UPDATE OF start_date, end_date ON reservations
    WHEN EXISTS (
        SELECT 1 FROM reservations
        WHERE id != NEW.id
          AND start_date <= NEW.end_date AND NEW.start_date <= end_date
    )
    BEGIN
        SELECT RAISE(ABORT, 'reservation period overlaps an existing reservation');
    END";

/// SQL statement to select the schema version from the metadata table.
pub const SELECT_SCHEMA_VERSION: &str = "SELECT value FROM metadata WHERE key = 'schema_version'";

/// SQL statement to insert or update the schema version in the metadata table.
pub const INSERT_SCHEMA_VERSION: &str =
    "INSERT OR REPLACE INTO metadata (key, value) VALUES ('schema_version', ?)";

/// SQL statement to insert a reservation and return the stored row.
pub const INSERT_RESERVATION: &str = r"
    INSERT INTO reservations (name, start_date, end_date, created_at)
    VALUES (?1, ?2, ?3, ?4)
    RETURNING id, name, start_date, end_date, created_at
";

/// SQL statement to replace name and dates of a reservation.
pub const UPDATE_RESERVATION: &str = r"
    UPDATE reservations
    SET name = ?2, start_date = ?3, end_date = ?4
    WHERE id = ?1
    RETURNING id, name, start_date, end_date, created_at
";

/// SQL statement to delete a reservation by id.
pub const DELETE_RESERVATION: &str = "DELETE FROM reservations WHERE id = ?";

/// SQL statement to list all reservations in calendar order.
pub const LIST_RESERVATIONS: &str = r"
    SELECT id, name, start_date, end_date, created_at
    FROM reservations
    ORDER BY start_date, id
";

/// SQL statement to select a reservation by id.
pub const SELECT_RESERVATION: &str = r"
    SELECT id, name, start_date, end_date, created_at
    FROM reservations
    WHERE id = ?
";

/// SQL statement to find one reservation overlapping `[?1, ?2]`.
///
/// `?3` is the id to skip; `NULL` skips nothing.
pub const SELECT_CONFLICTING: &str = r"
    SELECT id, name, start_date, end_date, created_at
    FROM reservations
    WHERE start_date <= ?2 AND ?1 <= end_date
      AND (?3 IS NULL OR id != ?3)
    ORDER BY start_date, id
    LIMIT 1
";

/// SQL statement to list reservations touching the window `[?1, ?2]`.
pub const SELECT_IN_WINDOW: &str = r"
    SELECT id, name, start_date, end_date, created_at
    FROM reservations
    WHERE start_date <= ?2 AND ?1 <= end_date
    ORDER BY start_date, id
";
