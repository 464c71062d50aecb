use clap::Subcommand;

/// Field commands.
#[derive(Clone, Debug, Subcommand)]
pub enum FieldCommands {
    /// Create a field in a section.
    Create {
        #[arg(long)]
        section: i64,
        #[arg(long = "type")]
        field_type: i64,
        #[arg(long)]
        name: String,
        #[arg(long)]
        label: String,
        #[arg(long)]
        required: bool,
        #[arg(long, default_value_t = 0)]
        order: i64,
        /// Field config as a JSON document
        #[arg(long)]
        config: Option<String>,
    },
    /// Get a field with its options.
    Get { id: i64 },
    /// List fields, or the fields of one section.
    List {
        #[arg(long)]
        section: Option<i64>,
        #[arg(long, default_value_t = 0)]
        skip: u32,
    },
    /// Update a field.
    Update {
        id: i64,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        label: Option<String>,
        #[arg(long)]
        required: Option<bool>,
        #[arg(long)]
        order: Option<i64>,
        /// Field config as a JSON document; `null` clears it
        #[arg(long)]
        config: Option<String>,
    },
    /// Delete a field.
    Delete { id: i64 },
    /// Add a selectable option to a field.
    AddOption {
        field_id: i64,
        #[arg(long)]
        value: String,
        #[arg(long)]
        label: String,
        #[arg(long, default_value_t = 0)]
        order: i64,
    },
}
