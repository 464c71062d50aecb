mod create;
mod delete;
mod get;
mod list;
mod update;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::FormCommands;
use crate::context::AppContext;

/// Handle `survey form`.
pub async fn handle(action: &FormCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        FormCommands::Create {
            title,
            description,
            structure,
            category,
        } => create::run(title, description, structure, category, ctx, flags).await,
        FormCommands::Get { id } => get::run(*id, ctx, flags).await,
        FormCommands::List { skip } => list::run(*skip, ctx, flags).await,
        FormCommands::Update {
            id,
            title,
            description,
            structure,
            category,
            state,
        } => {
            update::run(
                *id,
                update::FormChanges {
                    title: title.as_deref(),
                    description: description.as_deref(),
                    structure: structure.as_deref(),
                    category: category.as_deref(),
                    state: state.as_deref(),
                },
                ctx,
                flags,
            )
            .await
        }
        FormCommands::Delete { id } => delete::run(*id, ctx, flags).await,
    }
}
