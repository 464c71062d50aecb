use survey_db::updates::user::UserUpdateBuilder;

use crate::cli::GlobalFlags;
use crate::commands::shared::found::require_found;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    id: i64,
    name: Option<&str>,
    category: Option<&str>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let mut builder = UserUpdateBuilder::new();
    if let Some(name) = name {
        builder = builder.name(name);
    }
    if let Some(category) = category {
        builder = builder.category(category);
    }

    let user = require_found(ctx.service.update_user(id, builder.build()).await?, "user", id)?;
    output(&user, flags.format)
}
