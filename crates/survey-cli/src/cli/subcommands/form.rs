use clap::Subcommand;

/// Form entity commands.
#[derive(Clone, Debug, Subcommand)]
pub enum FormCommands {
    /// Create a form in the draft state.
    Create {
        #[arg(long)]
        title: String,
        #[arg(long)]
        description: String,
        /// Form structure as a JSON document
        #[arg(long)]
        structure: String,
        #[arg(long)]
        category: String,
    },
    /// Get a form by ID.
    Get { id: i64 },
    /// List forms.
    List {
        #[arg(long, default_value_t = 0)]
        skip: u32,
    },
    /// Update a form. An unknown `--state` is ignored.
    Update {
        id: i64,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        structure: Option<String>,
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        state: Option<String>,
    },
    /// Delete a form and its assignments.
    Delete { id: i64 },
}
