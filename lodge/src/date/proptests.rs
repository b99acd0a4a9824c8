//! Property-based tests for `CalendarDate`.

use super::{CalendarDate, MAX_YEAR, MIN_YEAR};
use chrono::NaiveDate;
use proptest::prelude::*;

// Strategy for generating every accepted calendar day
fn date_strategy() -> impl Strategy<Value = CalendarDate> {
    (MIN_YEAR..=MAX_YEAR, 1u32..=12, 1u32..=31).prop_filter_map(
        "not a calendar day",
        |(y, m, d)| CalendarDate::from_ymd(y, m, d).ok(),
    )
}

// Years chrono can represent but the calendar refuses
fn out_of_range_year() -> impl Strategy<Value = i32> {
    prop_oneof![-200_000i32..MIN_YEAR, (MAX_YEAR + 1)..200_000]
}

// Offsets from -12:00 to +14:00 in whole quarter hours
fn offset_strategy() -> impl Strategy<Value = String> {
    (-48i32..=56).prop_map(|quarters| {
        let minutes = quarters * 15;
        let sign = if minutes < 0 { '-' } else { '+' };
        let minutes = minutes.abs();
        format!("{sign}{:02}:{:02}", minutes / 60, minutes % 60)
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    // Formatting and parsing back is the identity
    #[test]
    fn wire_string_round_trip(date in date_strategy()) {
        let wire = date.to_string();
        prop_assert_eq!(wire.len(), 10);
        prop_assert_eq!(CalendarDate::normalize(&wire).unwrap(), date);
    }

    // Any time of day in any offset normalizes to the day as written
    #[test]
    fn datetime_in_any_offset_keeps_its_day(
        date in date_strategy(),
        hour in 0u32..24,
        minute in 0u32..60,
        offset in offset_strategy(),
    ) {
        let input = format!("{date}T{hour:02}:{minute:02}:00{offset}");
        prop_assert_eq!(CalendarDate::normalize(&input).unwrap(), date);
    }

    // Ordering of dates matches ordering of day numbers
    #[test]
    fn ordering_matches_day_numbers(a in date_strategy(), b in date_strategy()) {
        prop_assert_eq!(a.cmp(&b), a.day_number().cmp(&b.day_number()));
    }

    // Wire strings sort lexicographically in calendar order (the store relies on it)
    #[test]
    fn wire_strings_sort_like_dates(a in date_strategy(), b in date_strategy()) {
        prop_assert_eq!(a.cmp(&b), a.to_string().cmp(&b.to_string()));
    }

    // Every year chrono accepts outside the four-digit range is refused
    #[test]
    fn out_of_range_years_are_invalid(year in out_of_range_year(), month in 1u32..=12) {
        let naive = NaiveDate::from_ymd_opt(year, month, 1).unwrap();
        let wire = naive.format("%Y-%m-%d").to_string();
        prop_assert!(CalendarDate::normalize(&wire).is_err());
        prop_assert!(CalendarDate::try_from(naive).is_err());
        prop_assert!(CalendarDate::from_ymd(year, month, 1).is_err());
    }
}
