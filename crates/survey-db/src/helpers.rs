//! Row-to-entity parsing helpers.
//!
//! Every repo converts `libsql::Row` (column-indexed) into typed entity
//! structs. These helpers isolate the parsing logic: datetimes in either
//! RFC 3339 or `SQLite`'s `datetime('now')` format, snake_case enums, JSON
//! documents stored as TEXT, and integer booleans.

use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::error::DatabaseError;

/// Parse a required TEXT column as `DateTime<Utc>`.
///
/// Handles both RFC 3339 (`"2026-02-09T14:30:00+00:00"`) and `SQLite`'s default
/// format (`"2026-02-09 14:30:00"`).
///
/// # Errors
///
/// Returns `DatabaseError::Query` if the string cannot be parsed as either format.
pub fn parse_datetime(s: &str) -> Result<DateTime<Utc>, DatabaseError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    chrono::NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
        .map(|naive| naive.and_utc())
        .map_err(|e| DatabaseError::Query(format!("Failed to parse datetime '{s}': {e}")))
}

/// Parse a TEXT column into a serde-deserializable enum.
///
/// Works with the survey-core state enums, which use `snake_case` names.
///
/// # Errors
///
/// Returns `DatabaseError::Query` if the string does not match any enum variant.
pub fn parse_enum<T: serde::de::DeserializeOwned>(s: &str) -> Result<T, DatabaseError> {
    serde_json::from_value(Value::String(s.to_string()))
        .map_err(|e| DatabaseError::Query(format!("Failed to parse enum from '{s}': {e}")))
}

/// Parse a required JSON document stored as TEXT.
///
/// # Errors
///
/// Returns `DatabaseError::Query` if the column contains invalid JSON.
pub fn parse_json(s: &str) -> Result<Value, DatabaseError> {
    serde_json::from_str(s).map_err(|e| DatabaseError::Query(format!("Invalid JSON in column: {e}")))
}

/// Extract an optional JSON value from a nullable TEXT column.
///
/// # Errors
///
/// Returns `DatabaseError::Query` if a non-empty string contains invalid JSON.
pub fn parse_optional_json(s: Option<&str>) -> Result<Option<Value>, DatabaseError> {
    match s {
        Some(s) if !s.is_empty() => parse_json(s).map(Some),
        _ => Ok(None),
    }
}

/// Encode an optional JSON payload for a nullable TEXT column.
///
/// A JSON `null` is stored as SQL `NULL`, so it reads back as `None`.
///
/// # Errors
///
/// Returns `DatabaseError::Query` if the value cannot be serialized.
pub fn json_column(value: Option<&Value>) -> Result<Option<String>, DatabaseError> {
    match value {
        Some(v) if !v.is_null() => Ok(Some(serde_json::to_string(v)?)),
        _ => Ok(None),
    }
}

/// Read a nullable TEXT column.
///
/// `row.get::<String>(idx)` on a NULL column returns an error, not `""`.
///
/// # Errors
///
/// Returns `DatabaseError` if the column read fails.
pub fn get_opt_string(row: &libsql::Row, idx: i32) -> Result<Option<String>, DatabaseError> {
    Ok(row.get::<Option<String>>(idx)?)
}

/// Read an INTEGER column holding `0`/`1` as `bool`.
///
/// # Errors
///
/// Returns `DatabaseError` if the column read fails.
pub fn get_bool(row: &libsql::Row, idx: i32) -> Result<bool, DatabaseError> {
    Ok(row.get::<i64>(idx)? != 0)
}

/// Run a `SELECT 1 ...` probe and report whether it produced a row.
///
/// # Errors
///
/// Returns `DatabaseError` if the query fails.
pub async fn row_exists(
    conn: &libsql::Connection,
    sql: &str,
    params: impl libsql::params::IntoParams,
) -> Result<bool, DatabaseError> {
    let mut rows = conn.query(sql, params).await?;
    Ok(rows.next().await?.is_some())
}

/// Run a `SELECT COUNT(*) ...` query.
///
/// # Errors
///
/// Returns `DatabaseError::NoResult` if the query yields no row.
pub async fn count_rows(conn: &libsql::Connection, sql: &str) -> Result<u64, DatabaseError> {
    let mut rows = conn.query(sql, ()).await?;
    let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
    let count = row.get::<i64>(0)?;
    u64::try_from(count).map_err(|e| DatabaseError::InvalidState(format!("negative count: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use survey_core::enums::{AssignmentState, FormState};

    #[test]
    fn parses_both_datetime_formats() {
        let rfc = parse_datetime("2026-02-09T14:30:00+00:00").unwrap();
        let sqlite = parse_datetime("2026-02-09 14:30:00").unwrap();
        assert_eq!(rfc, sqlite);
        assert!(parse_datetime("yesterday").is_err());
    }

    #[test]
    fn parses_state_enums() {
        let state: AssignmentState = parse_enum("in_progress").unwrap();
        assert_eq!(state, AssignmentState::InProgress);
        let state: FormState = parse_enum("finished").unwrap();
        assert_eq!(state, FormState::Finished);
        assert!(parse_enum::<FormState>("archived").is_err());
    }

    #[test]
    fn json_null_is_stored_as_sql_null() {
        assert_eq!(json_column(None).unwrap(), None);
        assert_eq!(json_column(Some(&Value::Null)).unwrap(), None);
        assert_eq!(
            json_column(Some(&serde_json::json!({"q": [1]}))).unwrap().as_deref(),
            Some(r#"{"q":[1]}"#)
        );
    }

    #[test]
    fn optional_json_roundtrip() {
        assert_eq!(parse_optional_json(None).unwrap(), None);
        assert_eq!(parse_optional_json(Some("")).unwrap(), None);
        assert_eq!(
            parse_optional_json(Some(r#"{"a":1}"#)).unwrap(),
            Some(serde_json::json!({"a": 1}))
        );
        assert!(parse_optional_json(Some("{not json")).is_err());
    }
}
