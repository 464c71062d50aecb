//! Service layer hosting every survey operation.
//!
//! `SurveyService` owns the injected `SurveyDb` handle. All repo methods are
//! implemented as `impl SurveyService` blocks under [`crate::repos`]; each one
//! follows the same protocol:
//! 1. Begin a unit of work (gate + `BEGIN IMMEDIATE`)
//! 2. Run the guard checks and SQL on the unit's connection
//! 3. Commit on `Ok`, roll back on `Err`

use crate::SurveyDb;
use crate::error::DatabaseError;

/// Entry point for user, form, assignment, and form-structure operations.
pub struct SurveyService {
    db: SurveyDb,
}

impl SurveyService {
    /// Wrap an already opened store handle.
    #[must_use]
    pub const fn new(db: SurveyDb) -> Self {
        Self { db }
    }

    /// Open a local database and wrap it.
    ///
    /// # Arguments
    ///
    /// * `db_path` - Path to the libSQL database file, or `":memory:"` for tests.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened.
    pub async fn new_local(db_path: &str) -> Result<Self, DatabaseError> {
        Ok(Self::new(SurveyDb::open_local(db_path).await?))
    }

    /// Access the underlying store handle.
    #[must_use]
    pub const fn db(&self) -> &SurveyDb {
        &self.db
    }
}
