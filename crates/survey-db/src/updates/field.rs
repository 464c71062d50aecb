//! Field update builder.

use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_index: Option<i64>,
    /// `Some(None)` clears the config.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<Option<Value>>,
}

#[derive(Default)]
pub struct FieldUpdateBuilder(FieldUpdate);

impl FieldUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self(FieldUpdate::default())
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.0.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.0.label = Some(label.into());
        self
    }

    #[must_use]
    pub fn required(mut self, required: bool) -> Self {
        self.0.required = Some(required);
        self
    }

    #[must_use]
    pub fn order_index(mut self, order_index: i64) -> Self {
        self.0.order_index = Some(order_index);
        self
    }

    #[must_use]
    pub fn config(mut self, config: Option<Value>) -> Self {
        self.0.config = Some(config);
        self
    }

    #[must_use]
    pub fn build(self) -> FieldUpdate {
        self.0
    }
}
