//! Update builder types for entity mutations.
//!
//! Each builder produces an update struct with `Option` fields. Only `Some`
//! fields generate SET clauses in the dynamic UPDATE SQL; `None` leaves the
//! column untouched.

pub mod field;
pub mod form;
pub mod section;
pub mod user;
