use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(user_id: i64, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let assignments = ctx.service.list_assignments_for_user(user_id).await?;
    output(&assignments, flags.format)
}
