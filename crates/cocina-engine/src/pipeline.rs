use cocina_types::{PresentationMode, Recipe};
use serde::Serialize;
use std::fmt;
use tracing::debug;

use crate::filter::apply_filters;
use crate::paginator::{PageInfo, paginate};
use crate::projector::{ViewRow, project};
use crate::sort::{SortSpec, sort_rows};
use crate::state::ViewState;

/// Stages of one render cycle, in the order they run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RenderPhase {
    Idle,
    Projecting,
    Filtering,
    Sorting,
    Paginating,
    Rendered,
}

impl fmt::Display for RenderPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RenderPhase::Idle => "idle",
            RenderPhase::Projecting => "projecting",
            RenderPhase::Filtering => "filtering",
            RenderPhase::Sorting => "sorting",
            RenderPhase::Paginating => "paginating",
            RenderPhase::Rendered => "rendered",
        };
        write!(f, "{}", name)
    }
}

/// A row on the rendered page: display fields plus the raw record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderRow {
    pub display_id: usize,
    pub date_added_ts: i64,
    pub date_added: String,
    pub name: String,
    pub source: String,
    pub tags: Vec<String>,
    pub recipe: Recipe,
}

impl RenderRow {
    fn from_view(row: &ViewRow<'_>) -> Self {
        Self {
            display_id: row.display_id,
            date_added_ts: row.date_added_ts,
            date_added: row.date_added().to_string(),
            name: row.recipe.title.trim().to_string(),
            source: row.recipe.source.trim().to_string(),
            tags: row.recipe.tags.clone(),
            recipe: row.recipe.clone(),
        }
    }
}

/// Everything a renderer needs for one cycle.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderModel {
    pub rows: Vec<RenderRow>,
    /// Rows that passed the filters (across all pages).
    pub total_items: usize,
    /// Size of the whole collection before filtering.
    pub collection_size: usize,
    pub page: PageInfo,
    /// The state this model was rendered with, page already clamped.
    pub state: ViewState,
}

impl RenderModel {
    pub fn mode(&self) -> PresentationMode {
        self.state.mode
    }

    pub fn sort(&self) -> SortSpec {
        self.state.sort
    }

    pub fn current_page(&self) -> usize {
        self.page.current_page
    }

    pub fn total_pages(&self) -> usize {
        self.page.total_pages
    }

    pub fn display_ids(&self) -> Vec<usize> {
        self.rows.iter().map(|row| row.display_id).collect()
    }
}

/// Run one complete render cycle.
///
/// Pure function of the record set and the view state: project the full set,
/// filter, sort, then cut the requested page. The returned model carries the
/// state with `current_page` clamped to the pages that exist.
pub fn render(records: &[Recipe], state: &ViewState) -> RenderModel {
    enter(RenderPhase::Projecting);
    let rows = project(records);

    enter(RenderPhase::Filtering);
    let mut rows = apply_filters(rows, &state.filters);

    enter(RenderPhase::Sorting);
    sort_rows(&mut rows, state.sort);

    enter(RenderPhase::Paginating);
    let (page, slice) = paginate(&rows, state.current_page, state.page_size);
    let model = RenderModel {
        rows: slice.iter().map(RenderRow::from_view).collect(),
        total_items: page.total_items,
        collection_size: records.len(),
        page,
        state: state.clamped(page.total_pages),
    };

    enter(RenderPhase::Rendered);
    debug!(
        collection = model.collection_size,
        matching = model.total_items,
        page = model.page.current_page,
        pages = model.page.total_pages,
        "render cycle complete"
    );
    model
}

fn enter(phase: RenderPhase) {
    debug!(%phase, "render phase");
}

#[cfg(test)]
mod tests {
    use super::*;
    use cocina_types::{SortDirection, ViewField};

    fn collection(n: usize) -> Vec<Recipe> {
        (1..=n)
            .map(|i| {
                let mut recipe = Recipe::new(format!("id-{:03}", i));
                recipe.created_at = Some(i as i64 * 1_000);
                recipe.title = format!("Recipe {:03}", i);
                recipe
            })
            .collect()
    }

    #[test]
    fn test_render_empty_collection() {
        let model = render(&[], &ViewState::new());
        assert!(model.rows.is_empty());
        assert_eq!(model.total_items, 0);
        assert_eq!(model.total_pages(), 1);
        assert_eq!(model.current_page(), 1);
    }

    #[test]
    fn test_requesting_past_last_page_clamps() {
        let records = collection(45);
        let model = render(&records, &ViewState::new().with_page(4));

        assert_eq!(model.total_pages(), 3);
        assert_eq!(model.current_page(), 3);
        assert_eq!(model.state.current_page, 3);
        assert_eq!(model.display_ids(), vec![41, 42, 43, 44, 45]);
    }

    #[test]
    fn test_filter_counts_separately_from_collection() {
        let records = collection(30);
        let state = ViewState::new().with_filter(ViewField::Name, "recipe 01");
        let model = render(&records, &state);

        assert_eq!(model.collection_size, 30);
        assert_eq!(model.total_items, 10);
        assert_eq!(model.display_ids(), (10..=19).collect::<Vec<_>>());
    }

    #[test]
    fn test_model_reports_sort_and_mode() {
        let records = collection(3);
        let state = ViewState::new()
            .with_sort(ViewField::Name, SortDirection::Desc)
            .with_mode(PresentationMode::Table);
        let model = render(&records, &state);

        assert_eq!(model.mode(), PresentationMode::Table);
        assert_eq!(model.sort(), SortSpec::new(ViewField::Name, SortDirection::Desc));
        assert_eq!(model.display_ids(), vec![3, 2, 1]);
    }
}
