//! The reservation service.
//!
//! [`ReservationService`] owns every reservation invariant: names are
//! trimmed and non-empty, dates are normalized once at entry, stays last at
//! least one night, and no two stored stays share a day. Mutations run the
//! conflict check and the write inside one immediate transaction, so two
//! callers racing for the same period cannot both succeed.
//!
//! The check-then-write steps are also available as free functions over any
//! [`Store`] ([`book`], [`rebook`], [`cancel`]), which is what the service
//! calls inside its transaction.

use crate::config::Config;
use crate::database::{Database, DatabaseConfig};
use crate::date::CalendarDate;
use crate::error::{Error, Result};
use crate::reservation::{Booking, BookingRequest, Reservation, ReservationId};
use crate::stay::Stay;
use crate::store::Store;

use std::path::Path;
use std::time::Duration;

/// Business rules applied before a booking reaches the store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BookingPolicy {
    /// Refuse stays that start before today.
    pub reject_past_dates: bool,
}

impl BookingPolicy {
    /// Derives the policy from configuration.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self {
            reject_past_dates: config.rejects_past_dates(),
        }
    }

    /// Checks `booking` against the policy as of `today`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] on `startDate` if past dates are
    /// refused and the stay starts before `today`.
    pub fn check(&self, booking: &Booking, today: CalendarDate) -> Result<()> {
        if self.reject_past_dates && booking.stay().start() < today {
            return Err(Error::invalid(
                "startDate",
                format!("{} is in the past", booking.stay().start()),
            ));
        }
        Ok(())
    }
}

/// Stores `booking` unless its stay overlaps an existing reservation.
///
/// # Errors
///
/// Returns [`Error::Conflict`] naming the reservation in the way, or any
/// store error.
pub fn book<S: Store + ?Sized>(store: &S, booking: &Booking) -> Result<Reservation> {
    if let Some(existing) = store.find_conflicting(&booking.stay(), None)? {
        log::info!(
            "refused {} for {}: overlaps reservation #{}",
            booking.stay(),
            booking.name(),
            existing.id()
        );
        return Err(Error::already_booked(&existing));
    }
    store.insert(booking)
}

/// Replaces reservation `id` with `booking`, ignoring `id` itself when
/// looking for overlaps.
///
/// # Errors
///
/// Returns [`Error::NotFound`] if `id` does not exist, [`Error::Conflict`]
/// if another reservation overlaps, or any store error.
pub fn rebook<S: Store + ?Sized>(
    store: &S,
    id: ReservationId,
    booking: &Booking,
) -> Result<Reservation> {
    if store.find_by_id(id)?.is_none() {
        return Err(Error::NotFound { id });
    }
    if let Some(existing) = store.find_conflicting(&booking.stay(), Some(id))? {
        log::info!(
            "refused moving #{id} to {}: overlaps reservation #{}",
            booking.stay(),
            existing.id()
        );
        return Err(Error::already_booked(&existing));
    }
    store.replace(id, booking)?.ok_or(Error::NotFound { id })
}

/// Removes reservation `id`.
///
/// # Errors
///
/// Returns [`Error::NotFound`] if `id` does not exist, or any store error.
pub fn cancel<S: Store + ?Sized>(store: &S, id: ReservationId) -> Result<()> {
    if store.remove(id)? {
        Ok(())
    } else {
        Err(Error::NotFound { id })
    }
}

/// Reservation lifecycle operations over a SQLite store.
///
/// # Examples
///
/// ```
/// use lodge::{BookingRequest, ReservationService};
///
/// let mut service = ReservationService::in_memory().unwrap();
///
/// let first = service
///     .create(&BookingRequest::new("Kim", "2024-01-01", "2024-01-05"))
///     .unwrap();
/// assert_eq!(service.get(first.id()).unwrap(), first);
///
/// // 2024-01-05 is Kim's last day
/// let err = service
///     .create(&BookingRequest::new("Lee", "2024-01-05", "2024-01-10"))
///     .unwrap_err();
/// assert!(err.is_conflict());
///
/// service
///     .create(&BookingRequest::new("Lee", "2024-01-06", "2024-01-10"))
///     .unwrap();
/// assert_eq!(service.list().unwrap().len(), 2);
/// ```
#[derive(Debug)]
pub struct ReservationService {
    db: Database,
    policy: BookingPolicy,
}

impl ReservationService {
    /// Creates a service over an open database.
    #[must_use]
    pub const fn new(db: Database, policy: BookingPolicy) -> Self {
        Self { db, policy }
    }

    /// Opens the database in `data_dir` using the lock wait, auto-init and
    /// booking policy from `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened.
    pub fn open(data_dir: &Path, config: &Config) -> Result<Self> {
        let mut db_config = DatabaseConfig::in_data_dir(data_dir)
            .with_busy_timeout(Duration::from_secs(config.lock_wait_seconds()));
        if !config.autoinit() {
            db_config = db_config.without_auto_create();
        }
        let db = Database::open(db_config)?;
        Ok(Self::new(db, BookingPolicy::from_config(config)))
    }

    /// Creates a service over a private in-memory database.
    ///
    /// # Errors
    ///
    /// Returns an error if the schema cannot be created.
    pub fn in_memory() -> Result<Self> {
        Ok(Self::new(Database::open_in_memory()?, BookingPolicy::default()))
    }

    /// Returns the underlying database.
    #[must_use]
    pub const fn database(&self) -> &Database {
        &self.db
    }

    /// Returns the booking policy in force.
    #[must_use]
    pub const fn policy(&self) -> BookingPolicy {
        self.policy
    }

    /// Lists every reservation ordered by start date.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the store cannot be read.
    pub fn list(&self) -> Result<Vec<Reservation>> {
        self.db.connection().find_all()
    }

    /// Fetches one reservation.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if `id` does not exist.
    pub fn get(&self, id: ReservationId) -> Result<Reservation> {
        self.db
            .connection()
            .find_by_id(id)?
            .ok_or(Error::NotFound { id })
    }

    /// Validates `request` and stores it if the period is free.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] for a blank name, malformed date or
    /// empty stay, [`Error::Conflict`] if the period overlaps an existing
    /// reservation, or a storage error.
    pub fn create(&mut self, request: &BookingRequest) -> Result<Reservation> {
        let booking = self.admit(request)?;
        let stored = self.db.write(|store| book(store, &booking))?;
        log::info!(
            "booked #{} for {} ({})",
            stored.id(),
            stored.name(),
            stored.stay()
        );
        Ok(stored)
    }

    /// Replaces name and dates of reservation `id`.
    ///
    /// The reservation's own current interval never counts as a conflict.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] for invalid input, [`Error::NotFound`]
    /// if `id` does not exist, [`Error::Conflict`] if another reservation
    /// overlaps, or a storage error.
    pub fn update(&mut self, id: ReservationId, request: &BookingRequest) -> Result<Reservation> {
        let booking = self.admit(request)?;
        let stored = self.db.write(|store| rebook(store, id, &booking))?;
        log::info!("updated #{id} to {} ({})", stored.name(), stored.stay());
        Ok(stored)
    }

    /// Deletes reservation `id` permanently.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if `id` does not exist, or a storage error.
    pub fn delete(&mut self, id: ReservationId) -> Result<()> {
        self.db.write(|store| cancel(store, id))?;
        log::info!("deleted #{id}");
        Ok(())
    }

    /// Looks up a reservation overlapping `stay`, skipping `exclude`.
    ///
    /// This is a read-only hint; only [`create`](Self::create) and
    /// [`update`](Self::update) decide whether a booking is accepted.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the query fails.
    pub fn find_conflict(
        &self,
        stay: &Stay,
        exclude: Option<ReservationId>,
    ) -> Result<Option<Reservation>> {
        self.db.connection().find_conflicting(stay, exclude)
    }

    /// Lists reservations sharing at least one day with `window`.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the query fails.
    pub fn list_between(&self, window: &Stay) -> Result<Vec<Reservation>> {
        self.db.reservations_between(window)
    }

    fn admit(&self, request: &BookingRequest) -> Result<Booking> {
        let booking = request.normalize()?;
        self.policy.check(&booking, CalendarDate::today())?;
        log::debug!("normalized booking for {}: {}", booking.name(), booking.stay());
        Ok(booking)
    }
}
