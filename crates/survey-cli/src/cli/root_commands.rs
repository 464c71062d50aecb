use clap::Subcommand;

use crate::cli::subcommands::{
    AssignmentCommands, FieldCommands, FieldTypeCommands, FormCommands, ResponseCommands,
    SectionCommands, UserCommands,
};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Users.
    User {
        #[command(subcommand)]
        action: UserCommands,
    },
    /// Forms.
    Form {
        #[command(subcommand)]
        action: FormCommands,
    },
    /// User/form assignments and their workflow state.
    Assignment {
        #[command(subcommand)]
        action: AssignmentCommands,
    },
    /// Form sections.
    Section {
        #[command(subcommand)]
        action: SectionCommands,
    },
    /// Field type registry.
    FieldType {
        #[command(subcommand)]
        action: FieldTypeCommands,
    },
    /// Form fields and their options.
    Field {
        #[command(subcommand)]
        action: FieldCommands,
    },
    /// Structured responses.
    Response {
        #[command(subcommand)]
        action: ResponseCommands,
    },
}
