use anyhow::Result;
use serde::Serialize;

use crate::presentation::view_models::{CommandResultViewModel, CreateView};

pub trait Renderer {
    fn render<T>(&self, result: CommandResultViewModel<T>) -> Result<()>
    where
        T: Serialize + CreateView;

    /// Non-fatal notice for the user; never part of the command's payload.
    fn warn(&self, message: &str);
}
