use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(command: Commands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::User { action } => commands::user::handle(&action, ctx, flags).await,
        Commands::Form { action } => commands::form::handle(&action, ctx, flags).await,
        Commands::Assignment { action } => commands::assignment::handle(&action, ctx, flags).await,
        Commands::Section { action } => commands::section::handle(&action, ctx, flags).await,
        Commands::FieldType { action } => commands::field_type::handle(&action, ctx, flags).await,
        Commands::Field { action } => commands::field::handle(&action, ctx, flags).await,
        Commands::Response { action } => commands::response::handle(&action, ctx, flags).await,
    }
}
