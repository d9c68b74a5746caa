use crate::presentation::view_models::{CommandResultViewModel, CreateView};
use crate::presentation::{ConsoleRenderer, Renderer};
use anyhow::Result;
use cocina_engine::MutationGateway;
use cocina_runtime::Cocina;
use cocina_store::Database;
use cocina_types::UserId;
use serde::Serialize;

/// What every collection command needs: the workspace, whose collection, and
/// where output goes.
pub struct HandlerContext<'a> {
    pub workspace: &'a Cocina,
    pub user: UserId,
    renderer: ConsoleRenderer,
}

impl<'a> HandlerContext<'a> {
    pub fn new(workspace: &'a Cocina, user: Option<&str>, json: bool) -> Self {
        Self {
            workspace,
            user: workspace.user(user),
            renderer: ConsoleRenderer::new(json),
        }
    }

    pub fn gateway(&self) -> MutationGateway<&'a Database> {
        self.workspace.gateway(self.user.clone())
    }

    pub fn render<T>(&self, view_model: CommandResultViewModel<T>) -> Result<()>
    where
        T: Serialize + CreateView,
    {
        self.renderer.render(view_model)
    }

    pub fn warn(&self, message: &str) {
        self.renderer.warn(message);
    }

    pub fn is_json(&self) -> bool {
        self.renderer.is_json()
    }
}
