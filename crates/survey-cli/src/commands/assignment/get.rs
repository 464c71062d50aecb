use crate::cli::GlobalFlags;
use crate::commands::shared::found::require_found;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(user_id: i64, form_id: i64, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let assignment = require_found(
        ctx.service.get_assignment(user_id, form_id).await?,
        "assignment",
        format!("{user_id}/{form_id}"),
    )?;
    output(&assignment, flags.format)
}
