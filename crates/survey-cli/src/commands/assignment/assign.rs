use anyhow::bail;
use survey_core::responses::StatusResponse;

use crate::cli::GlobalFlags;
use crate::commands::shared::parse::parse_optional_json;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    user_id: i64,
    form_id: i64,
    begin: Option<&str>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let begin_payload = parse_optional_json(begin, "begin")?;
    if !ctx
        .service
        .assign_form_to_user(user_id, form_id, begin_payload)
        .await?
    {
        bail!(
            "form {form_id} was not assigned to user {user_id}: the user or form is missing, or the pair is already assigned"
        );
    }
    output(&StatusResponse::new("assigned"), flags.format)
}
