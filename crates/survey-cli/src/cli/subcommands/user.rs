use clap::Subcommand;

/// User entity commands.
#[derive(Clone, Debug, Subcommand)]
pub enum UserCommands {
    /// Create a user.
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        category: String,
    },
    /// Get a user by ID.
    Get { id: i64 },
    /// List users.
    List {
        /// Rows to skip before the page starts
        #[arg(long, default_value_t = 0)]
        skip: u32,
    },
    /// Update a user.
    Update {
        id: i64,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        category: Option<String>,
    },
    /// Delete a user and its assignments.
    Delete { id: i64 },
}
