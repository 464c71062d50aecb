//! Database error types for survey-db.

use thiserror::Error;

/// Errors from database operations.
///
/// Missing rows and invalid state strings are not errors at this layer; they
/// come back as `None` or `false`. Everything here means the store itself
/// could not complete the request.
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// A SQL query failed or returned malformed data.
    #[error("Query failed: {0}")]
    Query(String),

    /// Schema migration failed.
    #[error("Migration failed: {0}")]
    Migration(String),

    /// Expected a result row but none was returned.
    #[error("No result returned")]
    NoResult,

    /// Invalid state encountered (e.g., bad data in DB).
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// A uniqueness constraint rejected the write.
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Underlying libSQL error.
    #[error("libSQL error: {0}")]
    LibSql(#[source] libsql::Error),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl DatabaseError {
    /// Whether this error is a uniqueness collision.
    #[must_use]
    pub const fn is_conflict(&self) -> bool {
        matches!(self, Self::Conflict(_))
    }
}

/// `SQLite` reports both `UNIQUE` and composite `PRIMARY KEY` violations with
/// this message prefix.
fn is_unique_violation(e: &libsql::Error) -> bool {
    e.to_string().contains("UNIQUE constraint failed")
}

impl From<libsql::Error> for DatabaseError {
    fn from(e: libsql::Error) -> Self {
        if is_unique_violation(&e) {
            Self::Conflict(e.to_string())
        } else {
            Self::LibSql(e)
        }
    }
}

impl From<serde_json::Error> for DatabaseError {
    fn from(e: serde_json::Error) -> Self {
        Self::Query(format!("JSON encoding failed: {e}"))
    }
}
