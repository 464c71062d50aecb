//! Cross-cutting error types for the survey store.
//!
//! Storage errors (`DatabaseError`) live in `survey-db`, configuration errors
//! in `survey-config`. Errors defined here can originate from any crate.

use thiserror::Error;

/// Errors that can be raised by any survey crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Entity lookup returned no result.
    #[error("Entity not found: {entity_type} {id}")]
    NotFound { entity_type: String, id: String },

    /// A state string does not belong to the enumerated set.
    #[error("Invalid {kind} '{value}': expected one of {expected}")]
    InvalidEnumValue {
        kind: &'static str,
        value: String,
        expected: String,
    },

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_names_entity_and_id() {
        let err = CoreError::NotFound {
            entity_type: "form".into(),
            id: "42".into(),
        };
        assert_eq!(err.to_string(), "Entity not found: form 42");
    }

    #[test]
    fn invalid_enum_lists_expected_values() {
        let err = CoreError::InvalidEnumValue {
            kind: "assignment state",
            value: "bogus".into(),
            expected: "initial, in_progress, finished, analyzed".into(),
        };
        assert!(err.to_string().starts_with("Invalid assignment state 'bogus'"));
    }

    #[test]
    fn other_is_transparent() {
        let err = CoreError::from(anyhow::anyhow!("disk gone"));
        assert_eq!(err.to_string(), "disk gone");
    }
}
