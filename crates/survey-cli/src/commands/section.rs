use survey_core::responses::StatusResponse;
use survey_db::updates::section::SectionUpdateBuilder;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::SectionCommands;
use crate::commands::shared::found::{require_found, require_true};
use crate::context::AppContext;
use crate::output::output;

/// Handle `survey section`.
pub async fn handle(action: &SectionCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        SectionCommands::Create { title, order } => {
            let section = ctx.service.create_section(title, *order).await?;
            output(&section, flags.format)
        }
        SectionCommands::Get { id } => {
            let section = require_found(ctx.service.get_section(*id).await?, "section", id)?;
            output(&section, flags.format)
        }
        SectionCommands::List { skip } => {
            let sections = ctx.service.list_sections(ctx.page(*skip, flags)).await?;
            output(&sections, flags.format)
        }
        SectionCommands::Update { id, title, order } => {
            let mut builder = SectionUpdateBuilder::new();
            if let Some(title) = title {
                builder = builder.title(title.as_str());
            }
            if let Some(order) = order {
                builder = builder.order_index(*order);
            }
            let section = require_found(
                ctx.service.update_section(*id, builder.build()).await?,
                "section",
                id,
            )?;
            output(&section, flags.format)
        }
        SectionCommands::Delete { id } => {
            require_true(ctx.service.delete_section(*id).await?, "section", id)?;
            output(&StatusResponse::new("deleted"), flags.format)
        }
    }
}
