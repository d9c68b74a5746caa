use cocina_types::{PresentationMode, SortDirection, ViewField};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;

use super::{CreateView, ViewOptions};

// --------------------------------------------------------
// Data Definitions (ViewModels)
// --------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct CollectionPageViewModel {
    pub user: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
    pub mode: PresentationMode,
    pub sort: SortViewModel,
    /// Active filters only, keyed by column.
    pub filters: BTreeMap<String, String>,
    pub page: usize,
    pub total_pages: usize,
    pub page_size: usize,
    /// Rows matching the filters.
    pub total_items: usize,
    pub collection_size: usize,
    pub rows: Vec<RecipeRowViewModel>,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct SortViewModel {
    pub column: ViewField,
    pub direction: SortDirection,
}

#[derive(Debug, Serialize)]
pub struct RecipeRowViewModel {
    pub display_id: usize,
    pub storage_id: String,
    pub date_added: String,
    pub date_added_ts: i64,
    pub name: String,
    pub source: String,
    pub tags: Vec<String>,
    pub url: String,
    pub ingredient_count: usize,
    pub step_count: usize,
    pub has_image: bool,
}

#[derive(Debug, Serialize)]
pub struct ExportViewModel {
    pub path: PathBuf,
    pub exported: usize,
}

// --------------------------------------------------------
// CreateView Trait Implementations (Bridge to Views)
// --------------------------------------------------------

impl CreateView for CollectionPageViewModel {
    fn create_view<'a>(&'a self, options: ViewOptions) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::collection::{CardView, TableView};
        match self.mode {
            PresentationMode::Card => Box::new(CardView::new(self, options)),
            PresentationMode::Table => Box::new(TableView::new(self, options)),
        }
    }
}

impl CreateView for ExportViewModel {
    fn create_view<'a>(&'a self, _options: ViewOptions) -> Box<dyn fmt::Display + 'a> {
        Box::new(self)
    }
}

impl fmt::Display for ExportViewModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Exported {} recipe(s) to {}",
            self.exported,
            self.path.display()
        )
    }
}
