use anyhow::bail;
use survey_core::responses::StatusResponse;

use crate::cli::GlobalFlags;
use crate::commands::shared::parse::parse_optional_json;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    user_id: i64,
    form_id: i64,
    state: &str,
    response: Option<&str>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let response_payload = parse_optional_json(response, "response")?;
    if !ctx
        .service
        .update_assignment_state(user_id, form_id, state, response_payload)
        .await?
    {
        bail!(
            "assignment {user_id}/{form_id} was not updated: unknown state '{state}' or no such assignment"
        );
    }
    output(&StatusResponse::new("updated"), flags.format)
}
