//! Record operations for reservations.
//!
//! [`Store`] is implemented directly on [`rusqlite::Connection`]. Inside
//! [`Database::write`] the closure receives the open transaction as a
//! `&Connection`, so every statement issued through the store runs under the
//! write lock.

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, ErrorCode, OptionalExtension, Row};

use crate::error::{Error, Result};
use crate::reservation::{Booking, Reservation, ReservationId};
use crate::stay::Stay;
use crate::store::Store;

use super::connection::Database;
use super::schema::{
    DELETE_RESERVATION, INSERT_RESERVATION, LIST_RESERVATIONS, OVERLAP_MESSAGE,
    SELECT_CONFLICTING, SELECT_IN_WINDOW, SELECT_RESERVATION, UPDATE_RESERVATION,
};

/// Deserializes a reservation from a database row.
///
/// Expects row fields in this order: id, name, `start_date`, `end_date`,
/// `created_at`.
fn row_to_reservation(row: &Row<'_>) -> rusqlite::Result<Reservation> {
    let id: ReservationId = row.get(0)?;
    let name: String = row.get(1)?;
    let start = row.get(2)?;
    let end = row.get(3)?;
    let created_secs: i64 = row.get(4)?;

    let stay = Stay::new(start, end)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(2, rusqlite::types::Type::Text, Box::new(e)))?;
    let created_at = DateTime::<Utc>::from_timestamp(created_secs, 0).ok_or_else(|| {
        rusqlite::Error::IntegralValueOutOfRange(4, created_secs)
    })?;

    Ok(Reservation::from_parts(id, name, stay, created_at))
}

/// Translates a `SQLite` failure into the library error taxonomy.
///
/// Trigger aborts carrying [`OVERLAP_MESSAGE`] become conflicts; damaged
/// files become corruption errors; everything else stays a database error.
pub(super) fn classify(err: rusqlite::Error, stay: Option<&Stay>) -> Error {
    if let rusqlite::Error::SqliteFailure(ref failure, ref message) = err {
        match failure.code {
            ErrorCode::ConstraintViolation
                if message.as_deref().is_some_and(|m| m.contains(OVERLAP_MESSAGE)) =>
            {
                let details = match stay {
                    Some(stay) => format!("{stay} overlaps an existing reservation"),
                    None => OVERLAP_MESSAGE.to_string(),
                };
                return Error::Conflict { details };
            }
            ErrorCode::DatabaseCorrupt | ErrorCode::NotADatabase => {
                return Error::DatabaseCorruption {
                    details: err.to_string(),
                };
            }
            _ => {}
        }
    }
    Error::Database(err)
}

impl Store for Connection {
    fn find_all(&self) -> Result<Vec<Reservation>> {
        let mut stmt = self.prepare_cached(LIST_RESERVATIONS)?;
        let rows = stmt.query_map([], row_to_reservation)?;
        rows.collect::<rusqlite::Result<Vec<_>>>()
            .map_err(|e| classify(e, None))
    }

    fn find_by_id(&self, id: ReservationId) -> Result<Option<Reservation>> {
        self.query_row(SELECT_RESERVATION, params![id], row_to_reservation)
            .optional()
            .map_err(|e| classify(e, None))
    }

    fn find_conflicting(
        &self,
        stay: &Stay,
        exclude: Option<ReservationId>,
    ) -> Result<Option<Reservation>> {
        self.query_row(
            SELECT_CONFLICTING,
            params![stay.start(), stay.end(), exclude],
            row_to_reservation,
        )
        .optional()
        .map_err(|e| classify(e, None))
    }

    fn insert(&self, booking: &Booking) -> Result<Reservation> {
        let stay = booking.stay();
        let created_secs = Utc::now().timestamp();
        self.query_row(
            INSERT_RESERVATION,
            params![booking.name(), stay.start(), stay.end(), created_secs],
            row_to_reservation,
        )
        .map_err(|e| classify(e, Some(&stay)))
    }

    fn replace(&self, id: ReservationId, booking: &Booking) -> Result<Option<Reservation>> {
        let stay = booking.stay();
        self.query_row(
            UPDATE_RESERVATION,
            params![id, booking.name(), stay.start(), stay.end()],
            row_to_reservation,
        )
        .optional()
        .map_err(|e| classify(e, Some(&stay)))
    }

    fn remove(&self, id: ReservationId) -> Result<bool> {
        let rows = self
            .execute(DELETE_RESERVATION, params![id])
            .map_err(|e| classify(e, None))?;
        Ok(rows > 0)
    }
}

impl Database {
    /// Lists reservations that share at least one day with `window`,
    /// ordered by start date.
    ///
    /// # Errors
    ///
    /// Returns a database error if the query fails.
    pub fn reservations_between(&self, window: &Stay) -> Result<Vec<Reservation>> {
        let mut stmt = self.conn.prepare_cached(SELECT_IN_WINDOW)?;
        let rows = stmt.query_map(params![window.start(), window.end()], row_to_reservation)?;
        rows.collect::<rusqlite::Result<Vec<_>>>()
            .map_err(|e| classify(e, None))
    }

    /// Counts stored reservations.
    ///
    /// # Errors
    ///
    /// Returns a database error if the query fails.
    pub fn count(&self) -> Result<u64> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM reservations", [], |row| row.get(0))?;
        Ok(u64::try_from(count).unwrap_or_default())
    }
}
