use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A kind of input (text, number, select, ...) with an optional config schema.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct FieldType {
    pub id: i64,
    pub type_name: String,
    pub config_schema: Option<Value>,
    pub created_at: DateTime<Utc>,
}

/// One input within a section.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Field {
    pub id: i64,
    pub section_id: i64,
    pub field_type_id: i64,
    pub name: String,
    pub label: String,
    pub required: bool,
    pub order_index: i64,
    pub config: Option<Value>,
    pub created_at: DateTime<Utc>,
    /// Choices for select-like fields, ordered by `order_index`.
    #[serde(default)]
    pub options: Vec<FieldOption>,
}

/// Input for creating a field.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct NewField {
    pub section_id: i64,
    pub field_type_id: i64,
    pub name: String,
    pub label: String,
    #[serde(default)]
    pub required: bool,
    pub order_index: i64,
    pub config: Option<Value>,
}

/// One selectable choice of a field.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct FieldOption {
    pub id: i64,
    pub field_id: i64,
    pub value: String,
    pub label: String,
    pub order_index: i64,
    pub created_at: DateTime<Utc>,
}
