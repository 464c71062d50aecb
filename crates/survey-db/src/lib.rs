//! # survey-db
//!
//! libSQL storage for users, forms, assignments, and the normalized form
//! structure (sections, fields, options, responses).
//!
//! `SurveyDb` is the explicitly constructed store handle. `SurveyService`
//! wraps it and hosts every operation as an `impl SurveyService` block in
//! [`repos`]. Each operation runs inside one [`UnitOfWork`].

pub mod error;
pub mod helpers;
mod migrations;
pub mod repos;
pub mod service;
mod unit_of_work;
pub mod updates;

#[cfg(test)]
mod test_support;

use error::DatabaseError;
use std::time::Duration;

use libsql::Builder;
use tokio::sync::Mutex;

pub use unit_of_work::UnitOfWork;

/// Store handle owning the libSQL database and its single connection.
///
/// Safe to share across tasks by reference or behind `Arc`; units of work on
/// the shared connection are serialized by an internal gate. Handles on the
/// same file elsewhere are serialized by SQLite's write lock, waited on for
/// up to the configured busy timeout.
pub struct SurveyDb {
    #[allow(dead_code)]
    db: libsql::Database,
    conn: libsql::Connection,
    gate: Mutex<()>,
}

/// How long a unit of work waits for another handle's write lock before
/// giving up with `SQLITE_BUSY`.
pub const DEFAULT_BUSY_TIMEOUT: Duration = Duration::from_secs(5);

impl SurveyDb {
    /// Open a local database at the given path (`":memory:"` for tests).
    ///
    /// Enables foreign keys, waits up to [`DEFAULT_BUSY_TIMEOUT`] for
    /// other writers, and runs migrations automatically.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened or
    /// migrations fail.
    pub async fn open_local(path: &str) -> Result<Self, DatabaseError> {
        Self::open_local_with_timeout(path, DEFAULT_BUSY_TIMEOUT).await
    }

    /// Same as [`Self::open_local`] with an explicit busy timeout.
    ///
    /// Other handles on the same file (another process, or another
    /// `SurveyDb`) are serialized by SQLite's write lock; `busy_timeout`
    /// bounds how long `begin()` waits for it.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened, a pragma
    /// is rejected, or migrations fail.
    pub async fn open_local_with_timeout(
        path: &str,
        busy_timeout: Duration,
    ) -> Result<Self, DatabaseError> {
        let db = Builder::new_local(path).build().await?;
        let conn = db.connect()?;

        // Must be per-connection in SQLite, and outside any transaction.
        conn.execute("PRAGMA foreign_keys = ON", ())
            .await
            .map_err(|e| DatabaseError::Migration(format!("PRAGMA foreign_keys: {e}")))?;

        // The pragma echoes the new value back as a row.
        let busy_ms = i32::try_from(busy_timeout.as_millis()).unwrap_or(i32::MAX);
        {
            let mut rows = conn
                .query(&format!("PRAGMA busy_timeout = {busy_ms}"), ())
                .await
                .map_err(|e| DatabaseError::Migration(format!("PRAGMA busy_timeout: {e}")))?;
            while rows.next().await?.is_some() {}
        }

        let survey_db = Self {
            db,
            conn,
            gate: Mutex::new(()),
        };
        survey_db.run_migrations().await?;
        tracing::debug!(path, busy_ms, "survey database opened");
        Ok(survey_db)
    }

    /// The raw connection, outside any unit of work.
    #[cfg(test)]
    pub(crate) const fn conn(&self) -> &libsql::Connection {
        &self.conn
    }

    /// Start a unit of work: wait for the gate, then `BEGIN IMMEDIATE`.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the transaction cannot be started.
    pub async fn begin(&self) -> Result<UnitOfWork<'_>, DatabaseError> {
        let guard = self.gate.lock().await;
        let tx = self
            .conn
            .transaction_with_behavior(libsql::TransactionBehavior::Immediate)
            .await?;
        Ok(UnitOfWork::new(tx, guard))
    }
}
