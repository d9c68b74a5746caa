use super::HandlerContext;
use crate::presentation::presenters::present_delete_result;
use anyhow::Result;
use cocina_types::StorageId;

pub fn handle(ctx: &HandlerContext, storage_id: &str) -> Result<()> {
    let storage_id = StorageId::new(storage_id.trim());
    let outcome = ctx.gateway().delete(&storage_id)?;
    ctx.render(present_delete_result(&storage_id, &outcome))
}
