//! Common test utilities for integration tests.

#![allow(dead_code)]

use std::path::Path;

use lodge::config::Config;
use lodge::database::{Database, DatabaseConfig};
use lodge::{BookingRequest, ReservationService};
use tempfile::TempDir;

/// Opens a service over a fresh database in a temporary directory.
///
/// The directory lives as long as the returned `TempDir`.
pub fn create_test_service() -> (TempDir, ReservationService) {
    let dir = tempfile::tempdir().unwrap();
    let service = open_service(dir.path());
    (dir, service)
}

/// Opens a service over the database in `data_dir` with default settings.
pub fn open_service(data_dir: &Path) -> ReservationService {
    ReservationService::open(data_dir, &Config::default()).unwrap()
}

/// Opens a raw database handle on the file in `data_dir`.
pub fn open_database(data_dir: &Path) -> Database {
    Database::open(DatabaseConfig::in_data_dir(data_dir)).unwrap()
}

/// Shorthand for a booking request.
pub fn request(name: &str, start: &str, end: &str) -> BookingRequest {
    BookingRequest::new(name, start, end)
}
