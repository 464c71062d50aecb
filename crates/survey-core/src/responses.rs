//! List envelopes returned as JSON by `survey user list` and `survey form list`.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{Form, User};

/// Response from `survey user list`.
///
/// `total` is the number of users in this page.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct UserList {
    pub total: usize,
    pub users: Vec<User>,
}

impl From<Vec<User>> for UserList {
    fn from(users: Vec<User>) -> Self {
        Self {
            total: users.len(),
            users,
        }
    }
}

/// Response from `survey form list`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct FormList {
    pub total: usize,
    pub forms: Vec<Form>,
}

impl From<Vec<Form>> for FormList {
    fn from(forms: Vec<Form>) -> Self {
        Self {
            total: forms.len(),
            forms,
        }
    }
}

/// Generic acknowledgement for operations that only report success.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct StatusResponse {
    pub status: String,
}

impl StatusResponse {
    #[must_use]
    pub fn new(status: impl Into<String>) -> Self {
        Self {
            status: status.into(),
        }
    }
}
