use clap::Subcommand;

/// Section commands.
#[derive(Clone, Debug, Subcommand)]
pub enum SectionCommands {
    /// Create a section.
    Create {
        #[arg(long)]
        title: String,
        #[arg(long, default_value_t = 0)]
        order: i64,
    },
    /// Get a section by ID.
    Get { id: i64 },
    /// List sections.
    List {
        #[arg(long, default_value_t = 0)]
        skip: u32,
    },
    /// Update a section.
    Update {
        id: i64,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        order: Option<i64>,
    },
    /// Delete a section with its fields.
    Delete { id: i64 },
}
