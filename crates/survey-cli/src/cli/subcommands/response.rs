use clap::Subcommand;

/// Response commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ResponseCommands {
    /// Open an empty response.
    Create,
    /// Record a single-valued answer.
    Record {
        response_id: i64,
        field_id: i64,
        value: Option<String>,
    },
    /// Record one chosen option of a multi-select field.
    Choose {
        response_id: i64,
        field_id: i64,
        option_id: i64,
    },
    /// Show everything recorded against a response.
    Values { response_id: i64 },
    /// Delete a response.
    Delete { id: i64 },
}
