use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One submission of a structured survey.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Response {
    pub id: i64,
    pub created_at: DateTime<Utc>,
}

/// A single-valued answer to a field within a response.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct FieldValue {
    pub id: i64,
    pub response_id: i64,
    pub field_id: i64,
    pub value: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// One chosen option of a multi-select field within a response.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct MultipleFieldValue {
    pub response_id: i64,
    pub field_id: i64,
    pub option_id: i64,
    pub created_at: DateTime<Utc>,
}
