use crate::cli::GlobalFlags;
use crate::commands::shared::found::require_found;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(id: i64, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let user = require_found(ctx.service.get_user(id).await?, "user", id)?;
    output(&user, flags.format)
}
