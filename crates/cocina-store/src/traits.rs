use cocina_types::{PresentationMode, Recipe, UserId};

use crate::Result;

/// Durable mapping from a user to an ordered collection of recipes.
///
/// `save` replaces the whole collection and must persist exactly the order it
/// was given. There is no per-record locking: concurrent writers are
/// last-write-wins at collection granularity.
pub trait RecordStore {
    fn load(&self, user: &UserId) -> Result<Vec<Recipe>>;
    fn save(&self, user: &UserId, records: &[Recipe]) -> Result<()>;

    /// Load ahead of a `save`. Unlike `load`, a collection that cannot be
    /// read is an error rather than an empty list.
    fn load_for_update(&self, user: &UserId) -> Result<Vec<Recipe>> {
        self.load(user)
    }
}

/// Presentation mode remembered per user for one browsing session.
pub trait ModeStore {
    /// Raw stored value, if any. Callers map unknown values to the default.
    fn load_mode(&self, session_id: &str, user: &UserId) -> Result<Option<String>>;
    fn save_mode(&self, session_id: &str, user: &UserId, mode: PresentationMode) -> Result<()>;
}

impl<T: RecordStore + ?Sized> RecordStore for &T {
    fn load(&self, user: &UserId) -> Result<Vec<Recipe>> {
        (**self).load(user)
    }

    fn save(&self, user: &UserId, records: &[Recipe]) -> Result<()> {
        (**self).save(user, records)
    }

    fn load_for_update(&self, user: &UserId) -> Result<Vec<Recipe>> {
        (**self).load_for_update(user)
    }
}

impl<T: ModeStore + ?Sized> ModeStore for &T {
    fn load_mode(&self, session_id: &str, user: &UserId) -> Result<Option<String>> {
        (**self).load_mode(session_id, user)
    }

    fn save_mode(&self, session_id: &str, user: &UserId, mode: PresentationMode) -> Result<()> {
        (**self).save_mode(session_id, user, mode)
    }
}
