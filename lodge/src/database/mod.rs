//! Database layer for persistent storage of reservations.
//!
//! This module provides the SQLite-backed [`Store`](crate::Store):
//! connection management, schema versioning, record operations and the
//! immediate write transactions that serialize conflicting writers.
//!
//! Overlaps are refused twice. The service checks for a conflicting
//! reservation inside [`Database::write`], and the schema carries
//! `BEFORE INSERT`/`BEFORE UPDATE` triggers that abort any overlapping write
//! that reaches the table by another path.
//!
//! # Examples
//!
//! ```no_run
//! use lodge::database::{Database, DatabaseConfig};
//! use lodge::{BookingRequest, Store};
//!
//! let mut db = Database::open(DatabaseConfig::new("/tmp/lodge.db")).unwrap();
//!
//! let booking = BookingRequest::new("Kim", "2024-01-01", "2024-01-05")
//!     .normalize()
//!     .unwrap();
//! db.write(|store| store.insert(&booking)).unwrap();
//!
//! for reservation in db.connection().find_all().unwrap() {
//!     println!("{reservation:?}");
//! }
//! ```

mod config;
mod connection;
pub mod migrations;
mod operations;
mod schema;
mod transaction;

#[cfg(test)]
pub(crate) mod test_util;

pub use config::{
    default_data_dir, resolve_data_dir, resolve_database_path, DatabaseConfig, DATABASE_FILE,
};
pub use connection::Database;

pub use migrations::{check_schema_compatibility, get_schema_version, initialize_schema};
pub use schema::CURRENT_SCHEMA_VERSION;
