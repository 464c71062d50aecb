mod create;
mod delete;
mod get;
mod list;
mod update;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::UserCommands;
use crate::context::AppContext;

/// Handle `survey user`.
pub async fn handle(action: &UserCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        UserCommands::Create { name, category } => create::run(name, category, ctx, flags).await,
        UserCommands::Get { id } => get::run(*id, ctx, flags).await,
        UserCommands::List { skip } => list::run(*skip, ctx, flags).await,
        UserCommands::Update { id, name, category } => {
            update::run(*id, name.as_deref(), category.as_deref(), ctx, flags).await
        }
        UserCommands::Delete { id } => delete::run(*id, ctx, flags).await,
    }
}
