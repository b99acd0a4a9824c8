//! Shared test utilities for database unit tests.

use tempfile::tempdir;

use crate::database::{Database, DatabaseConfig};
use crate::reservation::{Booking, BookingRequest};

/// Creates a temporary file-backed test database.
///
/// # Panics
///
/// Panics if the temporary directory or database cannot be created.
#[must_use]
pub fn create_test_database() -> Database {
    let dir = tempdir().unwrap();
    let path = dir.path().join("test.db");
    let db = Database::open(DatabaseConfig::new(path)).unwrap();

    // Keep the directory alive for the life of the test
    std::mem::forget(dir);

    db
}

/// Builds a validated booking from wire strings.
///
/// # Panics
///
/// Panics if the input does not validate.
#[must_use]
pub fn booking(name: &str, start: &str, end: &str) -> Booking {
    BookingRequest::new(name, start, end).normalize().unwrap()
}
