//! Write transactions.
//!
//! Every mutation runs inside a `BEGIN IMMEDIATE` transaction, which takes
//! the database write lock before the first statement. A conflict check and
//! the write that follows it therefore see the same state, even when other
//! processes write to the same file.

use rusqlite::{Connection, ErrorCode, TransactionBehavior};

use crate::error::{Error, Result};

use super::connection::Database;

/// Returns true if `err` reports that another writer held the lock.
fn is_busy(err: &Error) -> bool {
    match err {
        Error::Database(rusqlite::Error::SqliteFailure(failure, _)) => matches!(
            failure.code,
            ErrorCode::DatabaseBusy | ErrorCode::DatabaseLocked
        ),
        _ => false,
    }
}

impl Database {
    /// Runs `f` inside an immediate write transaction.
    ///
    /// The transaction commits if `f` returns `Ok` and rolls back otherwise.
    /// If the write lock cannot be taken within the busy timeout, the call
    /// fails with [`Error::LockTimeout`].
    ///
    /// # Errors
    ///
    /// Returns whatever `f` returns, a lock timeout, or a database error if
    /// the transaction cannot begin or commit.
    ///
    /// # Examples
    ///
    /// ```
    /// use lodge::database::Database;
    /// use lodge::{BookingRequest, Store};
    ///
    /// let mut db = Database::open_in_memory().unwrap();
    /// let booking = BookingRequest::new("Kim", "2024-01-01", "2024-01-05")
    ///     .normalize()
    ///     .unwrap();
    /// let stored = db.write(|store| store.insert(&booking)).unwrap();
    /// assert_eq!(stored.name(), "Kim");
    /// ```
    pub fn write<T>(&mut self, f: impl FnOnce(&Connection) -> Result<T>) -> Result<T> {
        let seconds = self.config.busy_timeout.as_secs();
        let lock_timeout = |err: Error| {
            if is_busy(&err) {
                log::warn!("gave up waiting for the database write lock after {seconds}s");
                Error::LockTimeout { seconds }
            } else {
                err
            }
        };

        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)
            .map_err(|e| lock_timeout(e.into()))?;

        let value = f(&tx).map_err(lock_timeout)?;

        tx.commit().map_err(|e| lock_timeout(e.into()))?;
        Ok(value)
    }
}
