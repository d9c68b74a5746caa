use serde::Serialize;
use std::fmt;

use super::{CreateView, ViewOptions};

// --------------------------------------------------------
// Data Definitions (ViewModels)
// --------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct RecipeViewModel {
    pub storage_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_id: Option<usize>,
    pub date_added: String,
    pub title: String,
    pub source: String,
    pub date: String,
    pub url: String,
    pub ingredients: Vec<String>,
    pub steps: Vec<String>,
    pub tags: Vec<String>,
    pub has_image: bool,
}

#[derive(Debug, Serialize)]
pub struct RecipeSavedViewModel {
    pub action: SaveAction,
    pub recipe: RecipeViewModel,
    /// Extraction failure during an import; the recipe was saved anyway.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SaveAction {
    Added,
    Imported,
    Updated,
}

#[derive(Debug, Serialize)]
pub struct DeleteResultViewModel {
    pub storage_id: String,
    pub deleted: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

/// Fields handed to the editing flow for one record.
#[derive(Debug, Serialize)]
pub struct EditHandoffViewModel {
    pub storage_id: String,
    pub display_id: usize,
    pub title: String,
    pub source: String,
    pub date: String,
    pub url: String,
    pub ingredients: String,
    pub steps: String,
    pub tags: String,
}

// --------------------------------------------------------
// CreateView Trait Implementations (Bridge to Views)
// --------------------------------------------------------

impl CreateView for RecipeViewModel {
    fn create_view<'a>(&'a self, options: ViewOptions) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::recipe::RecipeDetailView;
        Box::new(RecipeDetailView::new(self, options))
    }
}

impl CreateView for RecipeSavedViewModel {
    fn create_view<'a>(&'a self, options: ViewOptions) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::recipe::RecipeSavedView;
        Box::new(RecipeSavedView::new(self, options))
    }
}

impl CreateView for DeleteResultViewModel {
    fn create_view<'a>(&'a self, _options: ViewOptions) -> Box<dyn fmt::Display + 'a> {
        Box::new(self)
    }
}

impl CreateView for EditHandoffViewModel {
    fn create_view<'a>(&'a self, options: ViewOptions) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::recipe::EditHandoffView;
        Box::new(EditHandoffView::new(self, options))
    }
}

impl fmt::Display for DeleteResultViewModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.title, self.deleted) {
            (Some(title), true) => writeln!(f, "Deleted \"{}\" ({})", title, self.storage_id),
            _ => writeln!(f, "No recipe with id {}; nothing deleted", self.storage_id),
        }
    }
}
