use crate::cli::GlobalFlags;
use crate::commands::shared::parse::parse_json;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    title: &str,
    description: &str,
    structure: &str,
    category: &str,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let structure = parse_json(structure, "structure")?;
    let form = ctx
        .service
        .create_form(title, description, &structure, category)
        .await?;
    output(&form, flags.format)
}
