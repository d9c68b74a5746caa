pub mod collection;
pub mod common;
pub mod config;
pub mod recipe;
pub mod result;

use std::fmt;

pub use collection::{CollectionPageViewModel, ExportViewModel, RecipeRowViewModel, SortViewModel};
pub use common::{Guidance, StatusBadge, StatusLevel, ViewOptions};
pub use config::ConfigViewModel;
pub use recipe::{
    DeleteResultViewModel, EditHandoffViewModel, RecipeSavedViewModel, RecipeViewModel, SaveAction,
};
pub use result::CommandResultViewModel;

/// Bridge from a view model to its text rendering.
pub trait CreateView {
    fn create_view<'a>(&'a self, options: ViewOptions) -> Box<dyn fmt::Display + 'a>;
}
