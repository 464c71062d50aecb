use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A person forms can be assigned to.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub name: String,
    /// Free-form classification tag (e.g. `"student"`, `"staff"`).
    pub category: String,
}
