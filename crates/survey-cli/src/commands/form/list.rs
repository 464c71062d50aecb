use survey_core::responses::FormList;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(skip: u32, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let forms = ctx.service.list_forms(ctx.page(skip, flags)).await?;
    output(&FormList::from(forms), flags.format)
}
