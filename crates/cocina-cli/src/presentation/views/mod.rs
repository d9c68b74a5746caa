pub mod collection;
pub mod config;
pub mod recipe;

pub use collection::{CardView, TableView};
pub use config::ConfigView;
pub use recipe::{EditHandoffView, RecipeDetailView, RecipeSavedView};
