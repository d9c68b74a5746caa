use super::HandlerContext;
use crate::presentation::presenters::{present_recipe_in, present_saved};
use crate::presentation::view_models::SaveAction;
use anyhow::{Context, Result};
use cocina_types::RecipeDraft;

pub fn handle(
    ctx: &HandlerContext,
    url: &str,
    tags: Option<String>,
    source: Option<String>,
) -> Result<()> {
    let mut draft = RecipeDraft::default();
    if let Some(tags) = tags {
        draft = draft.with_tags_text(&tags);
    }
    if let Some(source) = source {
        draft = draft.with_source(source);
    }

    let extractor = ctx.workspace.extractor();
    let outcome = ctx
        .workspace
        .import(ctx.user.clone(), url, draft, extractor.as_ref())?;

    if let Some(warning) = &outcome.warning {
        ctx.warn(&format!("could not extract recipe details: {}", warning));
    }

    let records = ctx.gateway().load()?;
    let view = present_recipe_in(&records, &outcome.recipe.storage_id)
        .with_context(|| format!("Recipe {} vanished after saving", outcome.recipe.storage_id))?;

    ctx.render(present_saved(view, SaveAction::Imported, outcome.warning))
}
