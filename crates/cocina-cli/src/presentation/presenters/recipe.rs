use cocina_engine::{DeleteOutcome, EditRequest, ViewRow, project};
use cocina_types::{Recipe, StorageId};

use crate::presentation::view_models::recipe::SaveAction;
use crate::presentation::view_models::{
    CommandResultViewModel, DeleteResultViewModel, EditHandoffViewModel, Guidance,
    RecipeSavedViewModel, RecipeViewModel, StatusBadge,
};

pub fn present_recipe(row: &ViewRow<'_>) -> RecipeViewModel {
    let recipe = row.recipe;
    RecipeViewModel {
        storage_id: recipe.storage_id.to_string(),
        display_id: Some(row.display_id),
        date_added: row.date_added().to_string(),
        title: recipe.title.clone(),
        source: recipe.source.clone(),
        date: recipe.date.clone(),
        url: recipe.url.clone(),
        ingredients: recipe.ingredients.clone(),
        steps: recipe.steps.clone(),
        tags: recipe.tags.clone(),
        has_image: recipe.image.as_deref().is_some_and(|i| !i.is_empty()),
    }
}

/// Locate one record in its collection, numbered against the whole set.
pub fn present_recipe_in(records: &[Recipe], storage_id: &StorageId) -> Option<RecipeViewModel> {
    project(records)
        .iter()
        .find(|row| &row.recipe.storage_id == storage_id)
        .map(present_recipe)
}

pub fn present_saved(
    recipe: RecipeViewModel,
    action: SaveAction,
    warning: Option<String>,
) -> CommandResultViewModel<RecipeSavedViewModel> {
    let badge = match (&warning, action) {
        (Some(_), _) => StatusBadge::warning("Saved without extracted details"),
        (None, SaveAction::Updated) => StatusBadge::success("Recipe updated"),
        (None, _) => StatusBadge::success("Recipe saved"),
    };
    let guide = if warning.is_some() {
        Guidance::new("Fill in the missing fields").with_command(format!(
            "cocina edit {} --ingredients \"...\" --steps \"...\"",
            recipe.storage_id
        ))
    } else {
        Guidance::new("View it").with_command(format!("cocina show {}", recipe.storage_id))
    };

    CommandResultViewModel::new(RecipeSavedViewModel {
        action,
        recipe,
        warning,
    })
    .with_badge(badge)
    .with_suggestion(guide)
}

pub fn present_delete_result(
    storage_id: &StorageId,
    outcome: &DeleteOutcome,
) -> CommandResultViewModel<DeleteResultViewModel> {
    let (deleted, title, badge) = match outcome {
        DeleteOutcome::Deleted(recipe) => (
            true,
            Some(recipe.title.clone()),
            StatusBadge::success("Recipe deleted"),
        ),
        DeleteOutcome::NotFound => (false, None, StatusBadge::info("Nothing deleted")),
    };

    CommandResultViewModel::new(DeleteResultViewModel {
        storage_id: storage_id.to_string(),
        deleted,
        title,
    })
    .with_badge(badge)
}

pub fn present_edit_handoff(
    request: &EditRequest,
    display_id: usize,
) -> CommandResultViewModel<EditHandoffViewModel> {
    let draft = &request.draft;
    CommandResultViewModel::new(EditHandoffViewModel {
        storage_id: request.storage_id.to_string(),
        display_id,
        title: draft.title.clone(),
        source: draft.source.clone(),
        date: draft.date.clone(),
        url: draft.url.clone(),
        ingredients: draft.ingredients.join("\n"),
        steps: draft.steps.join("\n"),
        tags: draft.tags.join(", "),
    })
    .with_suggestion(
        Guidance::new("Save changes")
            .with_command(format!("cocina edit {} --title \"...\"", request.storage_id)),
    )
}
