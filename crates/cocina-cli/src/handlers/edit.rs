use super::HandlerContext;
use crate::args::RecipeFieldArgs;
use crate::presentation::presenters::{present_edit_handoff, present_recipe_in, present_saved};
use crate::presentation::view_models::SaveAction;
use anyhow::{Context, Result, bail};
use cocina_runtime::resolve_image;
use cocina_types::StorageId;

/// Without field flags this is the edit handoff alone: the current values are
/// shown and nothing is written.
pub fn handle(
    ctx: &HandlerContext,
    storage_id: &str,
    title: Option<String>,
    fields: &RecipeFieldArgs,
) -> Result<()> {
    let storage_id = StorageId::new(storage_id.trim());
    let gateway = ctx.gateway();

    let Some(request) = gateway.edit(&storage_id)? else {
        bail!("No recipe with id {} in {}'s collection", storage_id, ctx.user);
    };

    if title.is_none() && fields.is_empty() {
        let records = gateway.load()?;
        let display_id = present_recipe_in(&records, &storage_id)
            .and_then(|view| view.display_id)
            .unwrap_or_default();
        return ctx.render(present_edit_handoff(&request, display_id));
    }

    let mut draft = fields.apply_to(request.draft);
    if let Some(title) = title {
        if title.trim().is_empty() {
            bail!("A recipe needs a title");
        }
        draft = draft.with_title(title);
    }
    if let Some(image) = &fields.image {
        let image = resolve_image(image).with_context(|| format!("Failed to read image {}", image))?;
        draft = draft.with_image(Some(image));
    }

    let Some(updated) = gateway.update(&storage_id, &draft)? else {
        bail!("Recipe {} was removed while editing", storage_id);
    };

    let records = gateway.load()?;
    let view = present_recipe_in(&records, &updated.storage_id)
        .with_context(|| format!("Recipe {} vanished after saving", updated.storage_id))?;
    ctx.render(present_saved(view, SaveAction::Updated, None))
}
