use cocina_types::{PresentationMode, Recipe, UserId};
use std::cell::{Cell, RefCell};
use std::collections::{HashMap, HashSet};

use crate::{Error, ModeStore, RecordStore, Result};

/// Volatile store used by tests and throwaway sessions.
///
/// Single-threaded like the rest of the view pipeline. Counts writes so callers
/// can assert that no-op mutations really skip the save.
#[derive(Debug, Default)]
pub struct MemoryStore {
    collections: RefCell<HashMap<UserId, Vec<Recipe>>>,
    modes: RefCell<HashMap<(String, UserId), String>>,
    unreadable: RefCell<HashSet<UserId>>,
    saves: Cell<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(user: &UserId, records: Vec<Recipe>) -> Self {
        let store = Self::new();
        store.collections.borrow_mut().insert(user.clone(), records);
        store
    }

    /// Number of `save` calls served so far.
    pub fn save_count(&self) -> usize {
        self.saves.get()
    }

    /// Make the user's collection behave like a stored blob that no longer
    /// parses: `load` sees nothing, `load_for_update` fails.
    pub fn mark_unreadable(&self, user: &UserId) {
        self.unreadable.borrow_mut().insert(user.clone());
    }

    /// Store a raw, possibly unrecognized mode value.
    pub fn put_raw_mode(&self, session_id: &str, user: &UserId, value: &str) {
        self.modes
            .borrow_mut()
            .insert((session_id.to_string(), user.clone()), value.to_string());
    }
}

impl RecordStore for MemoryStore {
    fn load(&self, user: &UserId) -> Result<Vec<Recipe>> {
        if self.unreadable.borrow().contains(user) {
            return Ok(Vec::new());
        }
        Ok(self
            .collections
            .borrow()
            .get(user)
            .cloned()
            .unwrap_or_default())
    }

    fn save(&self, user: &UserId, records: &[Recipe]) -> Result<()> {
        self.collections
            .borrow_mut()
            .insert(user.clone(), records.to_vec());
        self.unreadable.borrow_mut().remove(user);
        self.saves.set(self.saves.get() + 1);
        Ok(())
    }

    fn load_for_update(&self, user: &UserId) -> Result<Vec<Recipe>> {
        if self.unreadable.borrow().contains(user) {
            return Err(Error::UnreadableCollection {
                user: user.to_string(),
                reason: "not a JSON array".to_string(),
            });
        }
        self.load(user)
    }
}

impl ModeStore for MemoryStore {
    fn load_mode(&self, session_id: &str, user: &UserId) -> Result<Option<String>> {
        Ok(self
            .modes
            .borrow()
            .get(&(session_id.to_string(), user.clone()))
            .cloned())
    }

    fn save_mode(&self, session_id: &str, user: &UserId, mode: PresentationMode) -> Result<()> {
        self.put_raw_mode(session_id, user, mode.as_str());
        Ok(())
    }
}
