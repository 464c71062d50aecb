//! Workflow state enums for forms and assignments.
//!
//! Both enums use `snake_case` serialization and store the same string in SQL.
//! Transitions are unconstrained: any state may follow any other. Only the
//! initial state is fixed (`draft` for forms, `initial` for assignments).

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

// ---------------------------------------------------------------------------
// FormState
// ---------------------------------------------------------------------------

/// Lifecycle state of a form.
///
/// ```text
/// draft ↔ started ↔ finished
/// ```
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum FormState {
    #[default]
    Draft,
    Started,
    Finished,
}

impl FormState {
    pub const ALL: [Self; 3] = [Self::Draft, Self::Started, Self::Finished];

    /// Return the string representation used in SQL storage.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Started => "started",
            Self::Finished => "finished",
        }
    }
}

impl fmt::Display for FormState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FormState {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|state| state.as_str() == s)
            .ok_or_else(|| invalid("form state", s, &Self::ALL.map(Self::as_str)))
    }
}

// ---------------------------------------------------------------------------
// AssignmentState
// ---------------------------------------------------------------------------

/// Progress of one user through one assigned form.
///
/// ```text
/// initial → in_progress → finished → analyzed
/// ```
///
/// The arrow shows the usual order; the store accepts any state after any other.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum AssignmentState {
    #[default]
    Initial,
    InProgress,
    Finished,
    Analyzed,
}

impl AssignmentState {
    pub const ALL: [Self; 4] = [
        Self::Initial,
        Self::InProgress,
        Self::Finished,
        Self::Analyzed,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Initial => "initial",
            Self::InProgress => "in_progress",
            Self::Finished => "finished",
            Self::Analyzed => "analyzed",
        }
    }
}

impl fmt::Display for AssignmentState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AssignmentState {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|state| state.as_str() == s)
            .ok_or_else(|| invalid("assignment state", s, &Self::ALL.map(Self::as_str)))
    }
}

fn invalid(kind: &'static str, value: &str, expected: &[&str]) -> CoreError {
    CoreError::InvalidEnumValue {
        kind,
        value: value.to_string(),
        expected: expected.join(", "),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("draft", FormState::Draft)]
    #[case("started", FormState::Started)]
    #[case("finished", FormState::Finished)]
    fn form_state_parses_storage_strings(#[case] raw: &str, #[case] expected: FormState) {
        assert_eq!(raw.parse::<FormState>().unwrap(), expected);
        assert_eq!(expected.as_str(), raw);
    }

    #[rstest]
    #[case("archived")]
    #[case("Draft")]
    #[case("")]
    fn form_state_rejects_unknown(#[case] raw: &str) {
        let err = raw.parse::<FormState>().unwrap_err();
        assert!(matches!(err, CoreError::InvalidEnumValue { kind: "form state", .. }));
    }

    #[rstest]
    #[case("initial", AssignmentState::Initial)]
    #[case("in_progress", AssignmentState::InProgress)]
    #[case("finished", AssignmentState::Finished)]
    #[case("analyzed", AssignmentState::Analyzed)]
    fn assignment_state_parses_storage_strings(
        #[case] raw: &str,
        #[case] expected: AssignmentState,
    ) {
        assert_eq!(raw.parse::<AssignmentState>().unwrap(), expected);
        assert_eq!(expected.to_string(), raw);
    }

    #[test]
    fn assignment_state_rejects_unknown() {
        let err = "bogus".parse::<AssignmentState>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid assignment state 'bogus': expected one of initial, in_progress, finished, analyzed"
        );
    }

    #[test]
    fn defaults_are_initial_states() {
        assert_eq!(FormState::default(), FormState::Draft);
        assert_eq!(AssignmentState::default(), AssignmentState::Initial);
    }

    #[test]
    fn serde_matches_as_str() {
        for state in AssignmentState::ALL {
            let json = serde_json::to_value(state).unwrap();
            assert_eq!(json, serde_json::Value::String(state.as_str().into()));
        }
        for state in FormState::ALL {
            let json = serde_json::to_value(state).unwrap();
            assert_eq!(json, serde_json::Value::String(state.as_str().into()));
        }
    }
}
