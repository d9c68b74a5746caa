mod draft;
mod extraction;
mod ids;
mod recipe;
mod view;

pub use draft::RecipeDraft;
pub use extraction::ExtractedRecipe;
pub use ids::{StorageId, UserId};
pub use recipe::Recipe;
pub use view::{PresentationMode, SortDirection, ViewField};
