use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::enums::FormState;

/// A survey definition.
///
/// `structure` is an arbitrary nested JSON document describing the survey
/// fields; the store never looks inside it.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Form {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub structure: Value,
    pub category: String,
    pub state: FormState,
}
