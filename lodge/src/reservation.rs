//! Reservation types.
//!
//! This module provides the persisted [`Reservation`] record, its
//! [`ReservationId`], and the request types that carry raw input into the
//! service: [`BookingRequest`] (unvalidated, wire-shaped) and [`Booking`]
//! (trimmed name plus normalized [`Stay`]).

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use rusqlite::types::{FromSql, FromSqlResult, ToSql, ToSqlOutput, ValueRef};
use serde::{Deserialize, Serialize};

use crate::date::CalendarDate;
use crate::error::{Error, Result};
use crate::stay::Stay;

/// Identifier of a stored reservation, always a positive integer.
///
/// # Examples
///
/// ```
/// use lodge::ReservationId;
///
/// let id: ReservationId = "42".parse().unwrap();
/// assert_eq!(id.value(), 42);
///
/// assert!("0".parse::<ReservationId>().is_err());
/// assert!("abc".parse::<ReservationId>().is_err());
/// assert!(ReservationId::try_from(-3).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct ReservationId(i64);

impl ReservationId {
    /// Returns the raw integer value.
    #[must_use]
    pub const fn value(self) -> i64 {
        self.0
    }
}

impl TryFrom<i64> for ReservationId {
    type Error = Error;

    fn try_from(value: i64) -> Result<Self> {
        if value > 0 {
            Ok(Self(value))
        } else {
            Err(Error::invalid(
                "id",
                format!("{value} is not a positive integer"),
            ))
        }
    }
}

impl FromStr for ReservationId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let value = s
            .trim()
            .parse::<i64>()
            .map_err(|_| Error::invalid("id", format!("'{s}' is not a reservation id")))?;
        Self::try_from(value)
    }
}

impl fmt::Display for ReservationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl ToSql for ReservationId {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.0))
    }
}

impl FromSql for ReservationId {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        i64::column_result(value).and_then(|raw| {
            Self::try_from(raw).map_err(|_| rusqlite::types::FromSqlError::OutOfRange(raw))
        })
    }
}

/// A stored booking of the house.
///
/// Serializes to the wire form used by the booking API:
///
/// ```json
/// {"id":1,"name":"Kim","startDate":"2024-01-01","endDate":"2024-01-05","createdAt":"2024-01-01T09:00:00Z"}
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    id: ReservationId,
    name: String,
    #[serde(flatten)]
    stay: Stay,
    created_at: DateTime<Utc>,
}

impl Reservation {
    /// Assembles a reservation from stored parts.
    ///
    /// Only stores should call this; everything else receives reservations
    /// from the service.
    #[must_use]
    pub fn from_parts(
        id: ReservationId,
        name: String,
        stay: Stay,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            stay,
            created_at,
        }
    }

    /// Returns the store-assigned id.
    #[must_use]
    pub const fn id(&self) -> ReservationId {
        self.id
    }

    /// Returns the occupant's display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the booked interval.
    #[must_use]
    pub const fn stay(&self) -> Stay {
        self.stay
    }

    /// Returns the first booked day.
    #[must_use]
    pub const fn start_date(&self) -> CalendarDate {
        self.stay.start()
    }

    /// Returns the last booked day.
    #[must_use]
    pub const fn end_date(&self) -> CalendarDate {
        self.stay.end()
    }

    /// Returns when the reservation was created.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

/// Raw booking input as it arrives on the wire.
///
/// Nothing is validated until [`BookingRequest::normalize`] runs.
///
/// # Examples
///
/// ```
/// use lodge::BookingRequest;
///
/// let request = BookingRequest::new("  Kim ", "2024-01-01", "2024-01-05");
/// let booking = request.normalize().unwrap();
/// assert_eq!(booking.name(), "Kim");
/// assert_eq!(booking.stay().nights(), 4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    /// Occupant name.
    pub name: String,
    /// First day, any form accepted by [`CalendarDate::normalize`].
    pub start_date: String,
    /// Last day, any form accepted by [`CalendarDate::normalize`].
    pub end_date: String,
}

impl BookingRequest {
    /// Creates a request from raw parts.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        start_date: impl Into<String>,
        end_date: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            start_date: start_date.into(),
            end_date: end_date.into(),
        }
    }

    /// Validates the request and reduces its dates to calendar days.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if the name is blank, a date is
    /// malformed, or the end date is not after the start date.
    pub fn normalize(&self) -> Result<Booking> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(Error::invalid("name", "name must be non-empty"));
        }
        let stay = Stay::parse(&self.start_date, &self.end_date)?;
        Ok(Booking {
            name: name.to_string(),
            stay,
        })
    }
}

/// A validated booking, ready to be written to a store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Booking {
    name: String,
    stay: Stay,
}

impl Booking {
    /// Creates a booking from an already validated stay.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if the name is blank after trimming.
    pub fn new(name: &str, stay: Stay) -> Result<Self> {
        let name = name.trim();
        if name.is_empty() {
            return Err(Error::invalid("name", "name must be non-empty"));
        }
        Ok(Self {
            name: name.to_string(),
            stay,
        })
    }

    /// Returns the trimmed occupant name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the requested interval.
    #[must_use]
    pub const fn stay(&self) -> Stay {
        self.stay
    }
}
