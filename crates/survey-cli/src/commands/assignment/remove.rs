use survey_core::responses::StatusResponse;

use crate::cli::GlobalFlags;
use crate::commands::shared::found::require_true;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(user_id: i64, form_id: i64, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    require_true(
        ctx.service.remove_assignment(user_id, form_id).await?,
        "assignment",
        format!("{user_id}/{form_id}"),
    )?;
    output(&StatusResponse::new("removed"), flags.format)
}
