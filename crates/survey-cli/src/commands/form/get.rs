use crate::cli::GlobalFlags;
use crate::commands::shared::found::require_found;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(id: i64, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let form = require_found(ctx.service.get_form(id).await?, "form", id)?;
    output(&form, flags.format)
}
