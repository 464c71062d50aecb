//! One gated transaction per operation.

use tokio::sync::MutexGuard;

use crate::error::DatabaseError;

/// An open `BEGIN IMMEDIATE` transaction holding the store gate.
///
/// Consumed by [`UnitOfWork::finish`], which commits on `Ok` and rolls back
/// on `Err`. Nothing written through it is visible to other units of work
/// until it commits.
pub struct UnitOfWork<'a> {
    tx: libsql::Transaction,
    _gate: MutexGuard<'a, ()>,
}

impl<'a> UnitOfWork<'a> {
    pub(crate) fn new(tx: libsql::Transaction, gate: MutexGuard<'a, ()>) -> Self {
        Self { tx, _gate: gate }
    }

    /// The connection to run statements on, scoped to this transaction.
    #[must_use]
    pub fn conn(&self) -> &libsql::Connection {
        &self.tx
    }

    /// Commit if `result` is `Ok`, roll back otherwise, and hand the result back.
    ///
    /// # Errors
    ///
    /// Returns the original error on rollback, or `DatabaseError` if the
    /// commit itself fails.
    pub async fn finish<T>(self, result: Result<T, DatabaseError>) -> Result<T, DatabaseError> {
        match result {
            Ok(value) => {
                self.tx.commit().await?;
                Ok(value)
            }
            Err(error) => {
                if let Err(rollback_error) = self.tx.rollback().await {
                    tracing::warn!(%error, %rollback_error, "rollback failed");
                }
                Err(error)
            }
        }
    }
}
