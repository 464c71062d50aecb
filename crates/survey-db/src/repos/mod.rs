//! Repository modules implementing the survey operations.
//!
//! Each module adds methods to `SurveyService` via `impl SurveyService` blocks.
//! Free functions taking a `&libsql::Connection` do the SQL so several of them
//! can share one unit of work.

pub mod assignment;
pub mod field;
pub mod form;
pub mod response;
pub mod section;
pub mod user;
