use survey_core::responses::UserList;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(skip: u32, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let users = ctx.service.list_users(ctx.page(skip, flags)).await?;
    output(&UserList::from(users), flags.format)
}
