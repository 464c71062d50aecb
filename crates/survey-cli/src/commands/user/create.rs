use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(name: &str, category: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let user = ctx.service.create_user(name, category).await?;
    output(&user, flags.format)
}
