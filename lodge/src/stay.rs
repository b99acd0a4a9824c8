//! Booked date intervals and the overlap rule.
//!
//! A [`Stay`] is a closed interval `[start, end]` of calendar days with
//! `start < end`. Two stays overlap when they share at least one day,
//! including a shared endpoint: a stay ending on day X and another starting
//! on day X conflict.

use std::fmt;

use serde::Serialize;

use crate::date::CalendarDate;
use crate::error::{Error, Result};

/// A validated date interval of at least one night.
///
/// # Examples
///
/// ```
/// use lodge::{CalendarDate, Stay};
///
/// let first = Stay::parse("2024-01-01", "2024-01-05").unwrap();
/// let second = Stay::parse("2024-01-05", "2024-01-10").unwrap();
/// let third = Stay::parse("2024-01-06", "2024-01-10").unwrap();
///
/// assert!(first.overlaps(&second));
/// assert!(!first.overlaps(&third));
/// assert_eq!(first.nights(), 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Stay {
    start_date: CalendarDate,
    end_date: CalendarDate,
}

impl Stay {
    /// Creates a stay from two normalized dates.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] on `endDate` if `end` is not strictly
    /// after `start`.
    pub fn new(start: CalendarDate, end: CalendarDate) -> Result<Self> {
        if start >= end {
            return Err(Error::invalid(
                "endDate",
                format!("end date {end} must be after start date {start}"),
            ));
        }
        Ok(Self {
            start_date: start,
            end_date: end,
        })
    }

    /// Normalizes two raw date inputs and builds a stay from them.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if either date is malformed or the
    /// interval is empty.
    pub fn parse(start: &str, end: &str) -> Result<Self> {
        let start = CalendarDate::normalize_field("startDate", start)?;
        let end = CalendarDate::normalize_field("endDate", end)?;
        Self::new(start, end)
    }

    /// Returns the first day of the stay.
    #[must_use]
    pub const fn start(&self) -> CalendarDate {
        self.start_date
    }

    /// Returns the last day of the stay.
    #[must_use]
    pub const fn end(&self) -> CalendarDate {
        self.end_date
    }

    /// Returns whether two closed intervals share at least one day.
    ///
    /// `[s1, e1]` and `[s2, e2]` overlap iff `s1 <= e2 && s2 <= e1`.
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start_date <= other.end_date && other.start_date <= self.end_date
    }

    /// Returns whether `date` lies within the stay, endpoints included.
    #[must_use]
    pub fn contains(&self, date: CalendarDate) -> bool {
        self.start_date <= date && date <= self.end_date
    }

    /// Returns the number of nights (`end - start` in days).
    #[must_use]
    pub fn nights(&self) -> u32 {
        u32::try_from(self.end_date.day_number() - self.start_date.day_number()).unwrap_or(0)
    }

    /// Iterates over every day of the stay, both endpoints included.
    pub fn days(&self) -> impl Iterator<Item = CalendarDate> {
        let end = self.end_date;
        std::iter::successors(Some(self.start_date), move |day| {
            day.succ().filter(|next| *next <= end)
        })
    }
}

impl fmt::Display for Stay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}", self.start_date, self.end_date)
    }
}

#[cfg(test)]
mod proptests;

#[cfg(test)]
mod tests {
    use super::*;

    fn stay(start: &str, end: &str) -> Stay {
        Stay::parse(start, end).unwrap()
    }

    #[test]
    fn test_equal_dates_are_invalid() {
        let err = Stay::parse("2024-01-05", "2024-01-05").unwrap_err();
        assert!(matches!(err, Error::InvalidInput { ref field, .. } if field == "endDate"));
    }

    #[test]
    fn test_reversed_dates_are_invalid() {
        assert!(Stay::parse("2024-01-10", "2024-01-05").is_err());
    }

    #[test]
    fn test_malformed_start_names_start_field() {
        let err = Stay::parse("soon", "2024-01-05").unwrap_err();
        assert!(matches!(err, Error::InvalidInput { ref field, .. } if field == "startDate"));
    }

    // The six boundary arrangements of A = [2024-01-01, 2024-01-05].
    #[test]
    fn test_overlap_boundary_cases() {
        let a = stay("2024-01-01", "2024-01-05");

        // B starts on A's last day
        assert!(a.overlaps(&stay("2024-01-05", "2024-01-10")));
        // B starts the day after A ends
        assert!(!a.overlaps(&stay("2024-01-06", "2024-01-10")));
        // B ends on A's first day
        assert!(a.overlaps(&stay("2023-12-28", "2024-01-01")));
        // B ends the day before A starts
        assert!(!a.overlaps(&stay("2023-12-28", "2023-12-31")));
        // B inside A
        assert!(a.overlaps(&stay("2024-01-02", "2024-01-03")));
        // B contains A
        assert!(a.overlaps(&stay("2023-12-31", "2024-01-06")));
    }

    #[test]
    fn test_overlap_is_reflexive() {
        let a = stay("2024-01-01", "2024-01-05");
        assert!(a.overlaps(&a));
    }

    #[test]
    fn test_contains_includes_endpoints() {
        let a = stay("2024-01-01", "2024-01-05");
        assert!(a.contains(a.start()));
        assert!(a.contains(a.end()));
        assert!(!a.contains(CalendarDate::from_ymd(2024, 1, 6).unwrap()));
    }

    #[test]
    fn test_nights_and_days() {
        let a = stay("2024-02-27", "2024-03-01");
        assert_eq!(a.nights(), 3);
        let days: Vec<String> = a.days().map(|d| d.to_string()).collect();
        assert_eq!(
            days,
            vec!["2024-02-27", "2024-02-28", "2024-02-29", "2024-03-01"]
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(
            stay("2024-01-01", "2024-01-05").to_string(),
            "2024-01-01 to 2024-01-05"
        );
    }

    #[test]
    fn test_serializes_camel_case() {
        let json = serde_json::to_value(stay("2024-01-01", "2024-01-05")).unwrap();
        assert_eq!(json["startDate"], "2024-01-01");
        assert_eq!(json["endDate"], "2024-01-05");
    }
}
