mod assign;
mod get;
mod list;
mod remove;
mod update;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::AssignmentCommands;
use crate::context::AppContext;

/// Handle `survey assignment`.
pub async fn handle(
    action: &AssignmentCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        AssignmentCommands::Assign {
            user_id,
            form_id,
            begin,
        } => assign::run(*user_id, *form_id, begin.as_deref(), ctx, flags).await,
        AssignmentCommands::Update {
            user_id,
            form_id,
            state,
            response,
        } => update::run(*user_id, *form_id, state, response.as_deref(), ctx, flags).await,
        AssignmentCommands::List { user_id } => list::run(*user_id, ctx, flags).await,
        AssignmentCommands::Get { user_id, form_id } => get::run(*user_id, *form_id, ctx, flags).await,
        AssignmentCommands::Remove { user_id, form_id } => {
            remove::run(*user_id, *form_id, ctx, flags).await
        }
    }
}
