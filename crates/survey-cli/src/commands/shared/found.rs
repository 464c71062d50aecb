use survey_core::errors::CoreError;

/// Turn an absent lookup into a not-found error so the process exits non-zero.
pub fn require_found<T>(value: Option<T>, entity_type: &str, id: impl ToString) -> anyhow::Result<T> {
    value.ok_or_else(|| {
        CoreError::NotFound {
            entity_type: entity_type.to_string(),
            id: id.to_string(),
        }
        .into()
    })
}

/// Same as [`require_found`] for operations that report presence as `bool`.
pub fn require_true(done: bool, entity_type: &str, id: impl ToString) -> anyhow::Result<()> {
    require_found(done.then_some(()), entity_type, id)
}
