use super::HandlerContext;
use crate::presentation::presenters::present_recipe_in;
use crate::presentation::view_models::CommandResultViewModel;
use anyhow::{Result, bail};
use cocina_types::StorageId;

pub fn handle(ctx: &HandlerContext, storage_id: &str) -> Result<()> {
    let storage_id = StorageId::new(storage_id.trim());
    let records = ctx.gateway().load()?;

    let Some(view) = present_recipe_in(&records, &storage_id) else {
        bail!("No recipe with id {} in {}'s collection", storage_id, ctx.user);
    };
    ctx.render(CommandResultViewModel::new(view))
}
