pub mod collection;
pub mod config;
pub mod recipe;

pub use collection::{present_collection_page, present_export, present_export_done};
pub use config::present_config;
pub use recipe::{
    present_delete_result, present_edit_handoff, present_recipe, present_recipe_in, present_saved,
};
