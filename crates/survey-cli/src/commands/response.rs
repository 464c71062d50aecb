use anyhow::bail;
use serde::Serialize;
use survey_core::entities::{FieldValue, MultipleFieldValue};
use survey_core::responses::StatusResponse;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ResponseCommands;
use crate::commands::shared::found::require_true;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct ResponseValues {
    response_id: i64,
    values: Vec<FieldValue>,
    choices: Vec<MultipleFieldValue>,
}

/// Handle `survey response`.
pub async fn handle(action: &ResponseCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        ResponseCommands::Create => {
            let response = ctx.service.create_response().await?;
            output(&response, flags.format)
        }
        ResponseCommands::Record {
            response_id,
            field_id,
            value,
        } => {
            let Some(recorded) = ctx
                .service
                .record_field_value(*response_id, *field_id, value.as_deref())
                .await?
            else {
                bail!("value not recorded: response {response_id} or field {field_id} does not exist");
            };
            output(&recorded, flags.format)
        }
        ResponseCommands::Choose {
            response_id,
            field_id,
            option_id,
        } => {
            if !ctx
                .service
                .record_multiple_choice(*response_id, *field_id, *option_id)
                .await?
            {
                bail!(
                    "choice not recorded: missing response or field, option {option_id} is not on field {field_id}, or it was already chosen"
                );
            }
            output(&StatusResponse::new("recorded"), flags.format)
        }
        ResponseCommands::Values { response_id } => {
            let values = ctx.service.list_field_values(*response_id).await?;
            let choices = ctx.service.list_multiple_choices(*response_id).await?;
            output(
                &ResponseValues {
                    response_id: *response_id,
                    values,
                    choices,
                },
                flags.format,
            )
        }
        ResponseCommands::Delete { id } => {
            require_true(ctx.service.delete_response(*id).await?, "response", id)?;
            output(&StatusResponse::new("deleted"), flags.format)
        }
    }
}
