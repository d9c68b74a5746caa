use cocina_store::{RecordStore, Result};
use cocina_types::{Recipe, RecipeDraft, StorageId, UserId, now_millis};
use tracing::info;

/// Handoff to the editing flow for one record.
#[derive(Debug, Clone, PartialEq)]
pub struct EditRequest {
    pub storage_id: StorageId,
    pub draft: RecipeDraft,
    pub recipe: Recipe,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DeleteOutcome {
    Deleted(Recipe),
    NotFound,
}

impl DeleteOutcome {
    pub fn is_deleted(&self) -> bool {
        matches!(self, DeleteOutcome::Deleted(_))
    }
}

/// The only component allowed to change a user's collection.
///
/// Every mutation is a read-modify-write of the whole collection; the store
/// order is preserved except for the removed or appended entry. Mutations read
/// through [`RecordStore::load_for_update`], so a collection that no longer
/// parses is left alone instead of being replaced.
pub struct MutationGateway<S> {
    store: S,
    user: UserId,
}

impl<S: RecordStore> MutationGateway<S> {
    pub fn new(store: S, user: UserId) -> Self {
        Self { store, user }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn user(&self) -> &UserId {
        &self.user
    }

    pub fn load(&self) -> Result<Vec<Recipe>> {
        self.store.load(&self.user)
    }

    pub fn find(&self, storage_id: &StorageId) -> Result<Option<Recipe>> {
        Ok(self
            .load()?
            .into_iter()
            .find(|recipe| &recipe.storage_id == storage_id))
    }

    /// Start editing a record. Never writes.
    pub fn edit(&self, storage_id: &StorageId) -> Result<Option<EditRequest>> {
        Ok(self.find(storage_id)?.map(|recipe| EditRequest {
            storage_id: recipe.storage_id.clone(),
            draft: RecipeDraft::from_recipe(&recipe),
            recipe,
        }))
    }

    /// Remove exactly the record with `storage_id`.
    ///
    /// A missing id is a successful no-op and does not touch the store.
    pub fn delete(&self, storage_id: &StorageId) -> Result<DeleteOutcome> {
        let mut records = self.store.load_for_update(&self.user)?;
        let Some(index) = records.iter().position(|r| &r.storage_id == storage_id) else {
            return Ok(DeleteOutcome::NotFound);
        };

        let removed = records.remove(index);
        self.store.save(&self.user, &records)?;
        info!(user = %self.user, id = %storage_id, remaining = records.len(), "deleted recipe");
        Ok(DeleteOutcome::Deleted(removed))
    }

    pub fn add(&self, draft: &RecipeDraft) -> Result<Recipe> {
        self.add_at(draft, now_millis())
    }

    /// Append a new record as if created at `now_ms`.
    ///
    /// The storage id is the timestamp as decimal text, bumped until unique.
    /// `createdAt` never goes backwards within a collection.
    pub fn add_at(&self, draft: &RecipeDraft, now_ms: i64) -> Result<Recipe> {
        let mut records = self.store.load_for_update(&self.user)?;

        let mut candidate = now_ms;
        while records
            .iter()
            .any(|r| r.storage_id.as_str() == candidate.to_string())
        {
            candidate += 1;
        }

        let latest = records.iter().filter_map(|r| r.created_at).max();
        let created_at = match latest {
            Some(latest) if latest >= now_ms => latest + 1,
            _ => now_ms,
        };

        let mut recipe = Recipe::new(candidate.to_string());
        recipe.created_at = Some(created_at);
        draft.write_to(&mut recipe);

        records.push(recipe.clone());
        self.store.save(&self.user, &records)?;
        info!(user = %self.user, id = %recipe.storage_id, total = records.len(), "added recipe");
        Ok(recipe)
    }

    /// Finish an edit: replace the editable fields of an existing record.
    ///
    /// Returns `None` without writing when the id is unknown.
    pub fn update(&self, storage_id: &StorageId, draft: &RecipeDraft) -> Result<Option<Recipe>> {
        let mut records = self.store.load_for_update(&self.user)?;
        let Some(recipe) = records.iter_mut().find(|r| &r.storage_id == storage_id) else {
            return Ok(None);
        };

        draft.write_to(recipe);
        let updated = recipe.clone();
        self.store.save(&self.user, &records)?;
        info!(user = %self.user, id = %storage_id, "updated recipe");
        Ok(Some(updated))
    }
}
