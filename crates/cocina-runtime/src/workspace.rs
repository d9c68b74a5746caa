use crate::config::{Config, DATABASE_FILE};
use crate::import::{ImportOutcome, prepare_import};
use anyhow::{Context, Result};
use cocina_engine::{BrowseSession, MutationGateway, RenderModel, ViewState, render};
use cocina_extract::{Extractor, extractor_for};
use cocina_store::{Database, RecordStore};
use cocina_types::{RecipeDraft, UserId};
use std::path::PathBuf;
use tracing::debug;

/// Everything that lives in one data directory: the database and its config.
pub struct Cocina {
    db: Database,
    data_dir: PathBuf,
    config: Config,
}

impl Cocina {
    pub fn open(data_dir: PathBuf) -> Result<Self> {
        let config_path = Config::path_in(&data_dir);
        let config = Config::load_from(&config_path)
            .with_context(|| format!("Failed to load {}", config_path.display()))?;

        let db_path = data_dir.join(DATABASE_FILE);
        let db = Database::open(&db_path)
            .with_context(|| format!("Failed to open database at {}", db_path.display()))?;

        Ok(Self {
            db,
            data_dir,
            config,
        })
    }

    pub fn database_path(&self) -> PathBuf {
        self.data_dir.join(DATABASE_FILE)
    }

    pub fn user(&self, explicit: Option<&str>) -> UserId {
        self.config.resolve_user(explicit)
    }

    pub fn gateway(&self, user: UserId) -> MutationGateway<&Database> {
        MutationGateway::new(&self.db, user)
    }

    /// Starting view state with the configured page size.
    pub fn initial_state(&self) -> ViewState {
        ViewState::new().with_page_size(self.config.page_size())
    }

    pub fn new_session_id() -> String {
        uuid::Uuid::new_v4().to_string()
    }

    pub fn browse(
        &self,
        user: UserId,
        session_id: &str,
        state: ViewState,
    ) -> Result<BrowseSession<&Database>> {
        BrowseSession::open(&self.db, user, session_id, state)
            .context("Failed to open browse session")
    }

    /// Forget the presentation mode remembered for an ended session.
    pub fn end_session(&self, session_id: &str) -> Result<()> {
        let removed = self
            .db
            .clear_session(session_id)
            .with_context(|| format!("Failed to clear session {}", session_id))?;
        debug!(session = session_id, removed, "session preferences cleared");
        Ok(())
    }

    /// One render cycle over the user's collection.
    pub fn render(&self, user: &UserId, state: &ViewState) -> Result<RenderModel> {
        let records = self
            .db
            .load(user)
            .with_context(|| format!("Failed to load collection for {}", user))?;
        Ok(render(&records, state))
    }

    /// Extractor as configured: remote service or local page parser.
    pub fn extractor(&self) -> Box<dyn Extractor> {
        let extractor = &self.config.extractor;
        extractor_for(extractor.endpoint.as_deref(), extractor.timeout())
    }

    /// Extract `url` into `draft` and store the result as a new record.
    ///
    /// An extraction failure does not abort the import; it comes back as a
    /// warning on the outcome.
    pub fn import(
        &self,
        user: UserId,
        url: &str,
        draft: RecipeDraft,
        extractor: &dyn Extractor,
    ) -> Result<ImportOutcome> {
        let prepared = prepare_import(url, draft, extractor)?;
        let recipe = self
            .gateway(user)
            .add(&prepared.draft)
            .context("Failed to save imported recipe")?;

        Ok(ImportOutcome {
            recipe,
            extracted: prepared.extracted,
            warning: prepared.warning,
        })
    }
}
