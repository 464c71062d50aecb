use crate::cli::GlobalFlags;
use crate::cli::subcommands::FieldTypeCommands;
use crate::commands::shared::parse::parse_optional_json;
use crate::context::AppContext;
use crate::output::output;

/// Handle `survey field-type`.
pub async fn handle(
    action: &FieldTypeCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        FieldTypeCommands::Create { name, schema } => {
            let schema = parse_optional_json(schema.as_deref(), "schema")?;
            let field_type = ctx.service.create_field_type(name, schema.as_ref()).await?;
            output(&field_type, flags.format)
        }
        FieldTypeCommands::List { skip } => {
            let types = ctx.service.list_field_types(ctx.page(*skip, flags)).await?;
            output(&types, flags.format)
        }
    }
}
