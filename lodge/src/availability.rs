//! Read-only availability views over a snapshot of reservations.
//!
//! These answer display questions: who is in the house on a given day,
//! where a proposed stay first runs into someone else, what a month looks
//! like. They work on a list taken earlier and can be stale by the time a
//! booking is submitted; only the service's transactional check decides.

use chrono::{Months, NaiveDate};
use serde::Serialize;

use crate::date::CalendarDate;
use crate::error::{Error, Result};
use crate::reservation::{Reservation, ReservationId};
use crate::stay::Stay;

/// Returns the reservation occupying `date`, if any.
///
/// Both the first and the last day of a stay count as occupied.
///
/// # Examples
///
/// ```
/// use lodge::availability::occupant_on;
/// use lodge::CalendarDate;
///
/// let date = CalendarDate::from_ymd(2024, 1, 5).unwrap();
/// assert!(occupant_on(&[], date).is_none());
/// ```
#[must_use]
pub fn occupant_on(reservations: &[Reservation], date: CalendarDate) -> Option<&Reservation> {
    reservations.iter().find(|r| r.stay().contains(date))
}

/// Returns the earliest day of `stay` already held by another reservation.
///
/// The reservation with id `exclude` is ignored, so a reservation being
/// edited does not block itself.
#[must_use]
pub fn first_blocked_day(
    reservations: &[Reservation],
    stay: &Stay,
    exclude: Option<ReservationId>,
) -> Option<CalendarDate> {
    reservations
        .iter()
        .filter(|r| Some(r.id()) != exclude)
        .filter(|r| r.stay().overlaps(stay))
        .map(|r| r.start_date().max(stay.start()))
        .min()
}

/// Parses a `YYYY-MM` month designation.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] on `month` if the text is malformed, the
/// year is not four digits, or the month is out of range.
///
/// # Examples
///
/// ```
/// use lodge::availability::parse_month;
///
/// assert_eq!(parse_month("2024-02").unwrap(), (2024, 2));
/// assert!(parse_month("2024-13").is_err());
/// ```
pub fn parse_month(input: &str) -> Result<(i32, u32)> {
    let invalid = || Error::invalid("month", format!("'{input}' is not a YYYY-MM month"));
    let (year, month) = input.trim().split_once('-').ok_or_else(invalid)?;
    if year.len() != 4 || !year.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    let year: i32 = year.parse().map_err(|_| invalid())?;
    let month: u32 = month.parse().map_err(|_| invalid())?;
    if NaiveDate::from_ymd_opt(year, month, 1).is_none() {
        return Err(invalid());
    }
    Ok((year, month))
}

/// Who holds a booked day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Occupant {
    /// Reservation id.
    pub id: ReservationId,
    /// Occupant name.
    pub name: String,
}

/// Occupancy of one calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DayStatus {
    /// The day.
    pub date: CalendarDate,
    /// The reservation holding the day; `None` when free.
    pub booked_by: Option<Occupant>,
}

impl DayStatus {
    /// Returns whether the day is free.
    #[must_use]
    pub const fn is_free(&self) -> bool {
        self.booked_by.is_none()
    }
}

/// Day-by-day occupancy of one month.
///
/// # Examples
///
/// ```
/// use lodge::availability::MonthView;
///
/// let view = MonthView::build(2024, 2, &[]).unwrap();
/// assert_eq!(view.days().len(), 29);
/// assert_eq!(view.booked_days(), 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthView {
    year: i32,
    month: u32,
    days: Vec<DayStatus>,
}

impl MonthView {
    /// Builds the view for `year`-`month` from a reservation snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if the month does not exist.
    pub fn build(year: i32, month: u32, reservations: &[Reservation]) -> Result<Self> {
        let window = Self::window(year, month)?;
        let days = window
            .days()
            .map(|date| DayStatus {
                date,
                booked_by: occupant_on(reservations, date).map(|r| Occupant {
                    id: r.id(),
                    name: r.name().to_string(),
                }),
            })
            .collect();
        Ok(Self { year, month, days })
    }

    /// Returns the first through last day of `year`-`month` as a stay.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if the month does not exist.
    pub fn window(year: i32, month: u32) -> Result<Stay> {
        let first = NaiveDate::from_ymd_opt(year, month, 1)
            .ok_or_else(|| Error::invalid("month", format!("{year}-{month:02} is not a month")))?;
        let last = first
            .checked_add_months(Months::new(1))
            .and_then(|next| next.pred_opt())
            .ok_or_else(|| Error::invalid("month", format!("{year}-{month:02} is out of range")))?;
        Stay::new(CalendarDate::try_from(first)?, CalendarDate::try_from(last)?)
    }

    /// Returns the year.
    #[must_use]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Returns the month, 1-based.
    #[must_use]
    pub const fn month(&self) -> u32 {
        self.month
    }

    /// Returns one status per day of the month, in order.
    #[must_use]
    pub fn days(&self) -> &[DayStatus] {
        &self.days
    }

    /// Returns how many days of the month are booked.
    #[must_use]
    pub fn booked_days(&self) -> usize {
        self.days.iter().filter(|day| !day.is_free()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn reservation(id: i64, name: &str, start: &str, end: &str) -> Reservation {
        Reservation::from_parts(
            ReservationId::try_from(id).unwrap(),
            name.to_string(),
            Stay::parse(start, end).unwrap(),
            Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        )
    }

    fn date(s: &str) -> CalendarDate {
        s.parse().unwrap()
    }

    fn snapshot() -> Vec<Reservation> {
        vec![
            reservation(1, "Kim", "2024-01-01", "2024-01-05"),
            reservation(2, "Lee", "2024-01-10", "2024-01-12"),
        ]
    }

    #[test]
    fn test_occupant_on_endpoints() {
        let reservations = snapshot();
        assert_eq!(occupant_on(&reservations, date("2024-01-01")).map(Reservation::name), Some("Kim"));
        assert_eq!(occupant_on(&reservations, date("2024-01-05")).map(Reservation::name), Some("Kim"));
        assert!(occupant_on(&reservations, date("2024-01-06")).is_none());
        assert_eq!(occupant_on(&reservations, date("2024-01-12")).map(Reservation::name), Some("Lee"));
    }

    #[test]
    fn test_first_blocked_day() {
        let reservations = snapshot();

        let free = Stay::parse("2024-01-06", "2024-01-09").unwrap();
        assert_eq!(first_blocked_day(&reservations, &free, None), None);

        let into_lee = Stay::parse("2024-01-07", "2024-01-20").unwrap();
        assert_eq!(first_blocked_day(&reservations, &into_lee, None), Some(date("2024-01-10")));

        let across_both = Stay::parse("2023-12-30", "2024-01-11").unwrap();
        assert_eq!(
            first_blocked_day(&reservations, &across_both, None),
            Some(date("2024-01-01"))
        );

        let inside_kim = Stay::parse("2024-01-02", "2024-01-04").unwrap();
        assert_eq!(
            first_blocked_day(&reservations, &inside_kim, None),
            Some(date("2024-01-02"))
        );
    }

    #[test]
    fn test_first_blocked_day_excludes_self() {
        let reservations = snapshot();
        let moved = Stay::parse("2024-01-03", "2024-01-08").unwrap();
        let kim = ReservationId::try_from(1).unwrap();
        assert_eq!(first_blocked_day(&reservations, &moved, Some(kim)), None);
    }

    #[test]
    fn test_month_view() {
        let view = MonthView::build(2024, 1, &snapshot()).unwrap();
        assert_eq!(view.days().len(), 31);
        assert_eq!(view.booked_days(), 5 + 3);

        let first = &view.days()[0];
        assert_eq!(first.date, date("2024-01-01"));
        assert_eq!(first.booked_by.as_ref().map(|o| o.name.as_str()), Some("Kim"));
        assert!(view.days()[5].is_free());
    }

    #[test]
    fn test_month_view_spanning_reservation() {
        let reservations = vec![reservation(3, "Park", "2023-12-28", "2024-01-02")];
        let december = MonthView::build(2023, 12, &reservations).unwrap();
        assert_eq!(december.booked_days(), 4);
        let january = MonthView::build(2024, 1, &reservations).unwrap();
        assert_eq!(january.booked_days(), 2);
    }

    #[test]
    fn test_month_window() {
        let window = MonthView::window(2023, 2).unwrap();
        assert_eq!(window.to_string(), "2023-02-01 to 2023-02-28");
        assert!(MonthView::window(2024, 0).is_err());
        assert!(MonthView::window(10_000, 1).is_err());
        assert!(MonthView::window(-1, 12).is_err());

        let window = MonthView::window(9999, 12).unwrap();
        assert_eq!(window.to_string(), "9999-12-01 to 9999-12-31");
    }

    #[test]
    fn test_parse_month() {
        assert_eq!(parse_month("2024-12").unwrap(), (2024, 12));
        assert_eq!(parse_month("0000-01").unwrap(), (0, 1));
        for bad in [
            "2024",
            "2024-00",
            "24-1x",
            "",
            "2024-01-01",
            "+10000-01",
            "10000-01",
            "-0001-01",
            "+2024-01",
        ] {
            assert!(parse_month(bad).is_err(), "{bad:?} should be rejected");
        }
    }
}
