use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::enums::{AssignmentState, FormState};

/// The rich association between one user and one form.
///
/// Identified by `(user_id, form_id)`; there is no surrogate id.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Assignment {
    pub user_id: i64,
    pub form_id: i64,
    pub state: AssignmentState,
    /// Captured when the form is assigned.
    pub begin_payload: Option<Value>,
    /// Captured on completion or later state updates.
    pub response_payload: Option<Value>,
}

/// A user's view of one assigned form: form attributes joined with the
/// assignment's state and payloads.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct AssignmentView {
    pub form_id: i64,
    pub title: String,
    pub description: String,
    pub category: String,
    pub form_state: FormState,
    pub user_form_state: AssignmentState,
    pub begin_payload: Option<Value>,
    pub response_payload: Option<Value>,
}
