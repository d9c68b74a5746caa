use cocina_types::{PresentationMode, Recipe, UserId};
use rusqlite::Connection;
use std::path::Path;
use tracing::debug;

use crate::queries::{collection, session_pref};
use crate::schema;
use crate::{ModeStore, RecordStore, Result};

pub struct Database {
    conn: Connection,
}

impl Database {
    pub fn open(db_path: &Path) -> Result<Self> {
        if let Some(parent) = db_path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }

        let conn = Connection::open(db_path)?;
        debug!(path = %db_path.display(), "opened recipe database");

        schema::init_schema(&conn)?;
        Ok(Self { conn })
    }

    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        schema::init_schema(&conn)?;
        Ok(Self { conn })
    }

    /// Forget everything remembered for a session that has ended.
    pub fn clear_session(&self, session_id: &str) -> Result<usize> {
        session_pref::clear_session(&self.conn, session_id)
    }
}

impl RecordStore for Database {
    fn load(&self, user: &UserId) -> Result<Vec<Recipe>> {
        collection::load(&self.conn, user)
    }

    fn save(&self, user: &UserId, records: &[Recipe]) -> Result<()> {
        collection::save(&self.conn, user, records)?;
        debug!(user = %user, count = records.len(), "saved collection");
        Ok(())
    }

    fn load_for_update(&self, user: &UserId) -> Result<Vec<Recipe>> {
        collection::load_for_update(&self.conn, user)
    }
}

impl ModeStore for Database {
    fn load_mode(&self, session_id: &str, user: &UserId) -> Result<Option<String>> {
        session_pref::get_mode(&self.conn, session_id, user)
    }

    fn save_mode(&self, session_id: &str, user: &UserId, mode: PresentationMode) -> Result<()> {
        session_pref::set_mode(&self.conn, session_id, user, mode)
    }
}
