use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// An ordered group of fields within a survey layout.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Section {
    pub id: i64,
    pub title: String,
    pub order_index: i64,
    pub created_at: DateTime<Utc>,
}
