//! Race condition tests for the booking service.
//!
//! Each thread opens its own database handle on the same file, the way
//! separate processes would, and tries to book an overlapping period. The
//! immediate write transaction serializes the check-then-insert sequence,
//! so exactly one booking may win.

mod common;

use std::sync::{Arc, Barrier};
use std::thread;

use common::{open_service, request};
use lodge::ErrorKind;

const CONTENDERS: usize = 8;

fn race<F>(data_dir: &std::path::Path, attempt: F) -> Vec<lodge::Result<lodge::Reservation>>
where
    F: Fn(usize, &mut lodge::ReservationService) -> lodge::Result<lodge::Reservation>
        + Send
        + Sync
        + 'static,
{
    let barrier = Arc::new(Barrier::new(CONTENDERS));
    let attempt = Arc::new(attempt);

    let handles: Vec<_> = (0..CONTENDERS)
        .map(|i| {
            let barrier = Arc::clone(&barrier);
            let attempt = Arc::clone(&attempt);
            let data_dir = data_dir.to_path_buf();
            thread::spawn(move || {
                let mut service = open_service(&data_dir);
                barrier.wait();
                attempt(i, &mut service)
            })
        })
        .collect();

    handles.into_iter().map(|h| h.join().unwrap()).collect()
}

fn assert_single_winner(results: &[lodge::Result<lodge::Reservation>]) {
    let winners = results.iter().filter(|r| r.is_ok()).count();
    assert_eq!(winners, 1, "exactly one booking must win: {results:?}");

    for result in results {
        if let Err(err) = result {
            assert_eq!(
                err.kind(),
                ErrorKind::Conflict,
                "losers must see a conflict, got: {err}"
            );
        }
    }
}

#[test]
fn test_concurrent_identical_bookings() {
    let dir = tempfile::tempdir().unwrap();
    // create the schema before the threads race to open it
    drop(open_service(dir.path()));

    let results = race(dir.path(), |i, service| {
        service.create(&request(&format!("guest {i}"), "2024-08-01", "2024-08-07"))
    });

    assert_single_winner(&results);
    assert_eq!(open_service(dir.path()).list().unwrap().len(), 1);
}

#[test]
fn test_concurrent_staggered_overlapping_bookings() {
    let dir = tempfile::tempdir().unwrap();
    drop(open_service(dir.path()));

    // every pair of these stays shares at least 2024-08-10
    let results = race(dir.path(), |i, service| {
        let start = format!("2024-08-{:02}", 3 + i);
        let end = format!("2024-08-{:02}", 10 + i);
        service.create(&request(&format!("guest {i}"), &start, &end))
    });

    assert_single_winner(&results);
}

#[test]
fn test_concurrent_updates_into_the_same_gap() {
    let dir = tempfile::tempdir().unwrap();
    let mut setup = open_service(dir.path());
    let ids: Vec<_> = (0..CONTENDERS)
        .map(|i| {
            let start = format!("2024-{:02}-01", i + 1);
            let end = format!("2024-{:02}-05", i + 1);
            setup
                .create(&request(&format!("guest {i}"), &start, &end))
                .unwrap()
                .id()
        })
        .collect();
    drop(setup);

    let ids = Arc::new(ids);
    let results = race(dir.path(), move |i, service| {
        service.update(ids[i], &request(&format!("guest {i}"), "2024-12-20", "2024-12-27"))
    });

    assert_single_winner(&results);
}

#[test]
fn test_disjoint_concurrent_bookings_all_succeed() {
    let dir = tempfile::tempdir().unwrap();
    drop(open_service(dir.path()));

    let results = race(dir.path(), |i, service| {
        let start = format!("2024-09-{:02}", 1 + 3 * i);
        let end = format!("2024-09-{:02}", 2 + 3 * i);
        service.create(&request(&format!("guest {i}"), &start, &end))
    });

    assert!(results.iter().all(Result::is_ok), "{results:?}");
    assert_eq!(open_service(dir.path()).list().unwrap().len(), CONTENDERS);
}
