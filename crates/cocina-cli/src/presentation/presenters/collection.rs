use cocina_engine::{RenderModel, RenderRow, project};
use cocina_types::{Recipe, UserId};
use std::path::PathBuf;

use super::recipe::present_recipe;
use crate::presentation::view_models::{
    CollectionPageViewModel, CommandResultViewModel, ExportViewModel, Guidance,
    RecipeRowViewModel, RecipeViewModel, SortViewModel, StatusBadge,
};

pub fn present_collection_page(
    model: &RenderModel,
    user: &UserId,
    session_id: Option<&str>,
) -> CommandResultViewModel<CollectionPageViewModel> {
    let sort = model.sort();
    let content = CollectionPageViewModel {
        user: user.to_string(),
        session_id: session_id.map(str::to_string),
        mode: model.mode(),
        sort: SortViewModel {
            column: sort.column,
            direction: sort.direction,
        },
        filters: model
            .state
            .filters
            .active()
            .map(|(field, query)| (field.key().to_string(), query.to_string()))
            .collect(),
        page: model.current_page(),
        total_pages: model.total_pages(),
        page_size: model.page.page_size,
        total_items: model.total_items,
        collection_size: model.collection_size,
        rows: model.rows.iter().map(present_row).collect(),
    };

    let mut result = CommandResultViewModel::new(content);
    if model.collection_size == 0 {
        result = result.with_suggestion(
            Guidance::new("Add your first recipe").with_command("cocina add --title \"...\""),
        );
    } else if model.page.has_next() {
        result = result.with_suggestion(
            Guidance::new("Next page")
                .with_command(format!("cocina list --page {}", model.current_page() + 1)),
        );
    }
    result
}

fn present_row(row: &RenderRow) -> RecipeRowViewModel {
    RecipeRowViewModel {
        display_id: row.display_id,
        storage_id: row.recipe.storage_id.to_string(),
        date_added: row.date_added.clone(),
        date_added_ts: row.date_added_ts,
        name: row.name.clone(),
        source: row.source.clone(),
        tags: row.tags.clone(),
        url: row.recipe.url.clone(),
        ingredient_count: row.recipe.ingredients.len(),
        step_count: row.recipe.steps.len(),
        has_image: row.recipe.image.as_deref().is_some_and(|i| !i.is_empty()),
    }
}

/// Every record in display-id order, for export.
pub fn present_export(records: &[Recipe]) -> Vec<RecipeViewModel> {
    let mut rows = project(records);
    rows.sort_by_key(|row| row.display_id);
    rows.iter().map(present_recipe).collect()
}

pub fn present_export_done(path: PathBuf, exported: usize) -> CommandResultViewModel<ExportViewModel> {
    CommandResultViewModel::new(ExportViewModel { path, exported })
        .with_badge(StatusBadge::success("Export complete"))
}
