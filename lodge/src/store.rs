//! The persistence seam consumed by the reservation service.
//!
//! A [`Store`] gives record-level access to the reservation collection. The
//! service never holds a store across calls; it borrows one for the length of
//! a single operation, inside a write transaction for mutations. The SQLite
//! implementation lives in [`crate::database`] and is implemented directly on
//! [`rusqlite::Connection`], so a `Transaction` can be used wherever a store
//! is expected.

use crate::error::Result;
use crate::reservation::{Booking, Reservation, ReservationId};
use crate::stay::Stay;

/// Record access to the reservation collection.
#[cfg_attr(test, mockall::automock)]
pub trait Store {
    /// Returns every reservation ordered by ascending start date.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the collection cannot be read.
    fn find_all(&self) -> Result<Vec<Reservation>>;

    /// Returns the reservation with `id`, if any.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the lookup fails.
    fn find_by_id(&self, id: ReservationId) -> Result<Option<Reservation>>;

    /// Returns one reservation whose interval overlaps `stay`, skipping the
    /// reservation with id `exclude`.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the query fails.
    fn find_conflicting(
        &self,
        stay: &Stay,
        exclude: Option<ReservationId>,
    ) -> Result<Option<Reservation>>;

    /// Persists a new reservation, assigning its id and creation time.
    ///
    /// # Errors
    ///
    /// Returns a conflict if the store itself rejects an overlapping
    /// interval, or a storage error if the write fails.
    fn insert(&self, booking: &Booking) -> Result<Reservation>;

    /// Replaces name and dates of reservation `id`; `None` if it is absent.
    ///
    /// # Errors
    ///
    /// Returns a conflict if the store itself rejects an overlapping
    /// interval, or a storage error if the write fails.
    fn replace(&self, id: ReservationId, booking: &Booking) -> Result<Option<Reservation>>;

    /// Removes reservation `id`, returning whether it existed.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the delete fails.
    fn remove(&self, id: ReservationId) -> Result<bool>;
}
