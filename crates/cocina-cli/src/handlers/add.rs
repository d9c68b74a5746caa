use super::HandlerContext;
use crate::args::RecipeFieldArgs;
use crate::presentation::presenters::{present_recipe_in, present_saved};
use crate::presentation::view_models::SaveAction;
use anyhow::{Context, Result, bail};
use cocina_runtime::resolve_image;
use cocina_types::RecipeDraft;

pub fn handle(ctx: &HandlerContext, title: String, fields: &RecipeFieldArgs) -> Result<()> {
    if title.trim().is_empty() {
        bail!("A recipe needs a title");
    }

    let mut draft = fields.apply_to(RecipeDraft::default().with_title(title));
    if let Some(image) = &fields.image {
        let image = resolve_image(image).with_context(|| format!("Failed to read image {}", image))?;
        draft = draft.with_image(Some(image));
    }

    let gateway = ctx.gateway();
    let recipe = gateway.add(&draft).context("Failed to save recipe")?;
    let records = gateway.load()?;
    let view = present_recipe_in(&records, &recipe.storage_id)
        .with_context(|| format!("Recipe {} vanished after saving", recipe.storage_id))?;

    ctx.render(present_saved(view, SaveAction::Added, None))
}
