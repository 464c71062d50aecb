use survey_core::responses::StatusResponse;

use crate::cli::GlobalFlags;
use crate::commands::shared::found::require_true;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(id: i64, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    require_true(ctx.service.delete_user(id).await?, "user", id)?;
    output(&StatusResponse::new("deleted"), flags.format)
}
