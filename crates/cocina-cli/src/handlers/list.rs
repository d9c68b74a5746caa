use super::HandlerContext;
use crate::args::ListArgs;
use crate::presentation::presenters::present_collection_page;
use anyhow::Result;
use cocina_engine::ViewState;
use cocina_types::SortDirection;

pub fn handle(ctx: &HandlerContext, args: &ListArgs) -> Result<()> {
    let state = list_state(ctx.workspace.initial_state(), args);
    let model = ctx.workspace.render(&ctx.user, &state)?;
    ctx.render(present_collection_page(&model, &ctx.user, None))
}

/// Fold the flags into a view state. The page is applied last since filter
/// and mode changes reset it.
fn list_state(initial: ViewState, args: &ListArgs) -> ViewState {
    let mut state = initial;
    if let Some(page_size) = args.page_size {
        state = state.with_page_size(page_size);
    }
    if let Some(mode) = args.mode {
        state = state.with_mode(mode.into());
    }
    for (field, query) in args.filters() {
        state = state.with_filter(field, query);
    }

    let column = args.sort.map(Into::into).unwrap_or(state.sort.column);
    let direction = args.order.map(Into::into).unwrap_or(SortDirection::Asc);
    if args.sort.is_some() || args.order.is_some() {
        state = state.with_sort(column, direction);
    }

    state.with_page(args.page)
}
