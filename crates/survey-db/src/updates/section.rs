//! Section update builder.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_index: Option<i64>,
}

#[derive(Default)]
pub struct SectionUpdateBuilder(SectionUpdate);

impl SectionUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self(SectionUpdate::default())
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.0.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn order_index(mut self, order_index: i64) -> Self {
        self.0.order_index = Some(order_index);
        self
    }

    #[must_use]
    pub fn build(self) -> SectionUpdate {
        self.0
    }
}
