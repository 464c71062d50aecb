use anyhow::bail;
use survey_core::entities::NewField;
use survey_core::responses::StatusResponse;
use survey_db::updates::field::FieldUpdateBuilder;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::FieldCommands;
use crate::commands::shared::found::{require_found, require_true};
use crate::commands::shared::parse::{parse_json, parse_optional_json};
use crate::context::AppContext;
use crate::output::output;

/// Handle `survey field`.
pub async fn handle(action: &FieldCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        FieldCommands::Create {
            section,
            field_type,
            name,
            label,
            required,
            order,
            config,
        } => {
            let new = NewField {
                section_id: *section,
                field_type_id: *field_type,
                name: name.clone(),
                label: label.clone(),
                required: *required,
                order_index: *order,
                config: parse_optional_json(config.as_deref(), "config")?,
            };
            let Some(field) = ctx.service.create_field(&new).await? else {
                bail!("field not created: section {section} or field type {field_type} does not exist");
            };
            output(&field, flags.format)
        }
        FieldCommands::Get { id } => {
            let field = require_found(ctx.service.get_field(*id).await?, "field", id)?;
            output(&field, flags.format)
        }
        FieldCommands::List { section, skip } => {
            let fields = match section {
                Some(section_id) => ctx.service.list_fields_for_section(*section_id).await?,
                None => ctx.service.list_fields(ctx.page(*skip, flags)).await?,
            };
            output(&fields, flags.format)
        }
        FieldCommands::Update {
            id,
            name,
            label,
            required,
            order,
            config,
        } => {
            let mut builder = FieldUpdateBuilder::new();
            if let Some(name) = name {
                builder = builder.name(name.as_str());
            }
            if let Some(label) = label {
                builder = builder.label(label.as_str());
            }
            if let Some(required) = required {
                builder = builder.required(*required);
            }
            if let Some(order) = order {
                builder = builder.order_index(*order);
            }
            if let Some(config) = config {
                let config = parse_json(config, "config")?;
                builder = builder.config((!config.is_null()).then_some(config));
            }
            let field = require_found(
                ctx.service.update_field(*id, builder.build()).await?,
                "field",
                id,
            )?;
            output(&field, flags.format)
        }
        FieldCommands::Delete { id } => {
            require_true(ctx.service.delete_field(*id).await?, "field", id)?;
            output(&StatusResponse::new("deleted"), flags.format)
        }
        FieldCommands::AddOption {
            field_id,
            value,
            label,
            order,
        } => {
            let option = require_found(
                ctx.service
                    .add_field_option(*field_id, value, label, *order)
                    .await?,
                "field",
                field_id,
            )?;
            output(&option, flags.format)
        }
    }
}
