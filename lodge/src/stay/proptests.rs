//! Property-based tests for the overlap rule.

use super::Stay;
use crate::CalendarDate;
use proptest::prelude::*;
use std::collections::HashSet;

// Stays starting within 2024 and lasting up to three weeks
fn stay_strategy() -> impl Strategy<Value = Stay> {
    (0u64..366, 1u64..21).prop_map(|(offset, nights)| {
        let base = CalendarDate::from_ymd(2024, 1, 1).unwrap();
        let start = base.plus_days(offset).unwrap();
        let end = start.plus_days(nights).unwrap();
        Stay::new(start, end).unwrap()
    })
}

// start-in-range OR end-in-range OR containment
fn three_branch_overlap(a: &Stay, b: &Stay) -> bool {
    let start_inside = a.start() <= b.start() && b.start() <= a.end();
    let end_inside = a.start() <= b.end() && b.end() <= a.end();
    let contains = b.start() <= a.start() && a.end() <= b.end();
    start_inside || end_inside || contains
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 5000,
        .. ProptestConfig::default()
    })]

    // Overlap does not depend on argument order
    #[test]
    fn overlap_is_symmetric(a in stay_strategy(), b in stay_strategy()) {
        prop_assert_eq!(a.overlaps(&b), b.overlaps(&a));
    }

    // The two-inequality test agrees with the three-branch disjunction
    #[test]
    fn overlap_matches_three_branch_form(a in stay_strategy(), b in stay_strategy()) {
        prop_assert_eq!(a.overlaps(&b), three_branch_overlap(&a, &b));
    }

    // Overlap means the stays share at least one calendar day
    #[test]
    fn overlap_matches_shared_day(a in stay_strategy(), b in stay_strategy()) {
        let days_a: HashSet<CalendarDate> = a.days().collect();
        let shares_day = b.days().any(|day| days_a.contains(&day));
        prop_assert_eq!(a.overlaps(&b), shares_day);
    }

    // Every day yielded by days() is contained, and there are nights + 1 of them
    #[test]
    fn days_cover_the_closed_interval(a in stay_strategy()) {
        let days: Vec<CalendarDate> = a.days().collect();
        prop_assert_eq!(days.len(), a.nights() as usize + 1);
        prop_assert!(days.iter().all(|day| a.contains(*day)));
        prop_assert_eq!(days.first().copied(), Some(a.start()));
        prop_assert_eq!(days.last().copied(), Some(a.end()));
    }
}
