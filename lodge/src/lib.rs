#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # lodge
//!
//! A booking calendar for a single vacation house.
//!
//! This library stores reservations, each a named closed interval of
//! calendar days, and guarantees that no two reservations share a day.
//!
//! ## Core Types
//!
//! - [`CalendarDate`] and [`Stay`]: calendar days and validated intervals
//! - [`Reservation`], [`ReservationId`] and [`BookingRequest`]: the record
//!   and the input that creates or replaces it
//! - [`ReservationService`]: create, update, delete, get and list
//! - [`Store`] and [`Database`]: persistence
//! - [`Error`], [`ErrorKind`] and [`Result`]: error handling types
//! - [`Logger`] and [`LogLevel`]: logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use lodge::{BookingRequest, ReservationService};
//!
//! let mut service = ReservationService::in_memory().unwrap();
//! let stay = service
//!     .create(&BookingRequest::new("Kim", "2024-07-01", "2024-07-08"))
//!     .unwrap();
//! assert_eq!(stay.stay().nights(), 7);
//! ```

pub mod availability;
pub mod config;
pub mod database;
pub mod date;
pub mod error;
pub mod logging;
pub mod reservation;
pub mod service;
pub mod stay;
pub mod store;

// Re-export key types at crate root for convenience
pub use config::{Config, ConfigBuilder};
pub use database::{Database, DatabaseConfig};
pub use date::CalendarDate;
pub use error::{Error, ErrorKind, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use reservation::{Booking, BookingRequest, Reservation, ReservationId};
pub use service::{BookingPolicy, ReservationService};
pub use stay::Stay;
pub use store::Store;
