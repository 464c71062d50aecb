use clap::Subcommand;

/// Assignment commands.
#[derive(Clone, Debug, Subcommand)]
pub enum AssignmentCommands {
    /// Assign a form to a user.
    Assign {
        user_id: i64,
        form_id: i64,
        /// Begin payload as a JSON document
        #[arg(long)]
        begin: Option<String>,
    },
    /// Move an assignment to a new state.
    Update {
        user_id: i64,
        form_id: i64,
        /// initial, in_progress, finished, or analyzed
        state: String,
        /// Response payload as a JSON document
        #[arg(long)]
        response: Option<String>,
    },
    /// List the forms assigned to a user.
    List { user_id: i64 },
    /// Get one assignment.
    Get { user_id: i64, form_id: i64 },
    /// Remove an assignment.
    Remove { user_id: i64, form_id: i64 },
}
