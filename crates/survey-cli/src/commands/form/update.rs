use survey_db::updates::form::{FormUpdate, FormUpdateBuilder};

use crate::cli::GlobalFlags;
use crate::commands::shared::found::require_found;
use crate::commands::shared::parse::parse_json;
use crate::context::AppContext;
use crate::output::output;

/// Raw `survey form update` arguments.
#[derive(Debug, Default)]
pub struct FormChanges<'a> {
    pub title: Option<&'a str>,
    pub description: Option<&'a str>,
    pub structure: Option<&'a str>,
    pub category: Option<&'a str>,
    pub state: Option<&'a str>,
}

pub async fn run(
    id: i64,
    changes: FormChanges<'_>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let update = build_update(&changes)?;
    let form = require_found(ctx.service.update_form(id, update).await?, "form", id)?;
    output(&form, flags.format)
}

fn build_update(changes: &FormChanges<'_>) -> anyhow::Result<FormUpdate> {
    let mut builder = FormUpdateBuilder::new();
    if let Some(title) = changes.title {
        builder = builder.title(title);
    }
    if let Some(description) = changes.description {
        builder = builder.description(description);
    }
    if let Some(structure) = changes.structure {
        builder = builder.structure(parse_json(structure, "structure")?);
    }
    if let Some(category) = changes.category {
        builder = builder.category(category);
    }
    // Passed through unvalidated; the store ignores states it does not know.
    if let Some(state) = changes.state {
        builder = builder.state(state);
    }
    Ok(builder.build())
}
