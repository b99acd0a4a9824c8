//! Calendar dates without a time of day.
//!
//! Every date that enters the library, whether from the wire, the CLI, or
//! the database, goes through [`CalendarDate::normalize`]. Nothing inside the
//! crate compares timestamps; comparisons are on the (year, month, day)
//! triple only.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Datelike, Days, Local, NaiveDate, NaiveDateTime};
use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{Error, Result};

/// Wire format for dates.
pub const WIRE_FORMAT: &str = "%Y-%m-%d";

/// Earliest year a date may carry. The four-digit wire form sorts as text
/// in calendar order only within these bounds.
pub const MIN_YEAR: i32 = 0;

/// Latest year a date may carry.
pub const MAX_YEAR: i32 = 9999;

const NAIVE_DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// A day on the calendar, with no time-of-day and no time zone.
///
/// # Examples
///
/// ```
/// use lodge::CalendarDate;
///
/// let date = CalendarDate::from_ymd(2024, 1, 5).unwrap();
/// assert_eq!(date.to_string(), "2024-01-05");
/// assert_eq!("2024-01-05".parse::<CalendarDate>().unwrap(), date);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    /// Creates a date from its components.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if the components do not name a real
    /// day (e.g. February 30th) or the year lies outside
    /// [`MIN_YEAR`]..=[`MAX_YEAR`].
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self> {
        let date = NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
            Error::invalid("date", format!("{year}-{month}-{day} is not a calendar day"))
        })?;
        Self::within_range("date", date)
    }

    fn within_range(field: &str, date: NaiveDate) -> Result<Self> {
        if (MIN_YEAR..=MAX_YEAR).contains(&date.year()) {
            Ok(Self(date))
        } else {
            Err(Error::invalid(
                field,
                format!("year {} is outside {MIN_YEAR:04}..={MAX_YEAR}", date.year()),
            ))
        }
    }

    /// Reduces a date representation to a calendar day.
    ///
    /// Accepted inputs:
    /// - `YYYY-MM-DD`
    /// - RFC 3339 date-times such as `2024-01-05T00:00:00+09:00`; the day is
    ///   the one written in the value's own offset, never shifted into UTC or
    ///   the local zone
    /// - naive date-times such as `2024-01-05T13:45:00` or `2024-01-05 13:45`
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if the input is empty, matches none
    /// of the accepted forms, or names a year outside
    /// [`MIN_YEAR`]..=[`MAX_YEAR`].
    ///
    /// # Examples
    ///
    /// ```
    /// use lodge::CalendarDate;
    ///
    /// let plain = CalendarDate::normalize("2024-01-05").unwrap();
    /// let seoul_midnight = CalendarDate::normalize("2024-01-05T00:00:00+09:00").unwrap();
    /// assert_eq!(plain, seoul_midnight);
    /// ```
    pub fn normalize(input: &str) -> Result<Self> {
        Self::normalize_field("date", input)
    }

    /// Like [`CalendarDate::normalize`], naming `field` in the error.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] for `field` if the input cannot be read
    /// as a date.
    pub fn normalize_field(field: &str, input: &str) -> Result<Self> {
        let input = input.trim();
        if input.is_empty() {
            return Err(Error::invalid(field, "date is required"));
        }

        let date = NaiveDate::parse_from_str(input, WIRE_FORMAT)
            .ok()
            .or_else(|| {
                DateTime::parse_from_rfc3339(input)
                    .ok()
                    .map(|datetime| datetime.date_naive())
            })
            .or_else(|| {
                NAIVE_DATETIME_FORMATS
                    .iter()
                    .find_map(|format| NaiveDateTime::parse_from_str(input, format).ok())
                    .map(|datetime| datetime.date())
            })
            .ok_or_else(|| Error::invalid(field, format!("'{input}' is not a YYYY-MM-DD date")))?;

        Self::within_range(field, date)
    }

    /// Returns today's date in the local time zone of the process.
    #[must_use]
    pub fn today() -> Self {
        Self(Local::now().date_naive())
    }

    /// Returns the year.
    #[must_use]
    pub fn year(self) -> i32 {
        self.0.year()
    }

    /// Returns the month, 1-based.
    #[must_use]
    pub fn month(self) -> u32 {
        self.0.month()
    }

    /// Returns the day of the month, 1-based.
    #[must_use]
    pub fn day(self) -> u32 {
        self.0.day()
    }

    /// Returns the number of days since 0001-01-01 (which is day 1).
    #[must_use]
    pub fn day_number(self) -> i32 {
        self.0.num_days_from_ce()
    }

    /// Returns the following day, or `None` after 9999-12-31.
    #[must_use]
    pub fn succ(self) -> Option<Self> {
        self.plus_days(1)
    }

    /// Returns the date `days` days later, or `None` past 9999-12-31.
    #[must_use]
    pub fn plus_days(self, days: u64) -> Option<Self> {
        self.0
            .checked_add_days(Days::new(days))
            .and_then(|date| Self::try_from(date).ok())
    }

    /// Returns the inner `chrono` date.
    #[must_use]
    pub const fn as_naive(self) -> NaiveDate {
        self.0
    }
}

impl TryFrom<NaiveDate> for CalendarDate {
    type Error = Error;

    fn try_from(date: NaiveDate) -> Result<Self> {
        Self::within_range("date", date)
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(WIRE_FORMAT))
    }
}

impl FromStr for CalendarDate {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::normalize(s)
    }
}

impl Serialize for CalendarDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for CalendarDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::normalize(&raw).map_err(serde::de::Error::custom)
    }
}

impl ToSql for CalendarDate {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.to_string()))
    }
}

impl FromSql for CalendarDate {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        let text = value.as_str()?;
        let date = NaiveDate::parse_from_str(text, WIRE_FORMAT)
            .map_err(|e| FromSqlError::Other(Box::new(e)))?;
        Self::try_from(date).map_err(|e| FromSqlError::Other(Box::new(e)))
    }
}

#[cfg(test)]
mod proptests;
