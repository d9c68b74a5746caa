use cocina_store::{ModeStore, RecordStore, Result};
use cocina_types::{
    PresentationMode, Recipe, RecipeDraft, SortDirection, StorageId, UserId, ViewField,
};
use tracing::debug;

use crate::gateway::{DeleteOutcome, EditRequest, MutationGateway};
use crate::pipeline::{RenderModel, RenderPhase, render};
use crate::projector::project;
use crate::state::ViewState;

/// One browsing session over a user's collection.
///
/// Owns the current [`ViewState`] and the records as last loaded. Every
/// interaction runs a full render cycle; the stored state is the clamped one,
/// so navigating past either end leaves the page unchanged.
pub struct BrowseSession<S> {
    gateway: MutationGateway<S>,
    session_id: String,
    records: Vec<Recipe>,
    state: ViewState,
    model: RenderModel,
    phase: RenderPhase,
}

impl<S: RecordStore + ModeStore> BrowseSession<S> {
    /// Load the collection and the session's remembered mode, then render.
    pub fn open(store: S, user: UserId, session_id: &str, initial: ViewState) -> Result<Self> {
        let mut state = initial;
        if let Some(stored) = store.load_mode(session_id, &user)? {
            state.mode = PresentationMode::from_stored(Some(&stored));
        }

        let gateway = MutationGateway::new(store, user);
        let records = gateway.load()?;
        let model = render(&records, &state);

        debug!(session = session_id, records = records.len(), mode = %state.mode, "opened browse session");
        Ok(Self {
            gateway,
            session_id: session_id.to_string(),
            records,
            state: model.state.clone(),
            model,
            phase: RenderPhase::Rendered,
        })
    }

    pub fn model(&self) -> &RenderModel {
        &self.model
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Last completed phase of the render cycle.
    pub fn phase(&self) -> RenderPhase {
        self.phase
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    pub fn user(&self) -> &UserId {
        self.gateway.user()
    }

    pub fn records(&self) -> &[Recipe] {
        &self.records
    }

    pub fn set_filter(&mut self, field: ViewField, query: &str) -> &RenderModel {
        let next = self.state.with_filter(field, query);
        self.apply(next)
    }

    pub fn clear_filters(&mut self) -> &RenderModel {
        let next = self.state.with_filters(Default::default());
        self.apply(next)
    }

    /// Header click on `column`.
    pub fn sort_by(&mut self, column: ViewField) -> &RenderModel {
        let next = self.state.with_sort_toggled(column);
        self.apply(next)
    }

    pub fn sort_with(&mut self, column: ViewField, direction: SortDirection) -> &RenderModel {
        let next = self.state.with_sort(column, direction);
        self.apply(next)
    }

    pub fn goto_page(&mut self, page: usize) -> &RenderModel {
        let next = self.state.with_page(page);
        self.apply(next)
    }

    pub fn next_page(&mut self) -> &RenderModel {
        let next = self.state.next_page();
        self.apply(next)
    }

    pub fn prev_page(&mut self) -> &RenderModel {
        let next = self.state.prev_page();
        self.apply(next)
    }

    pub fn set_page_size(&mut self, page_size: usize) -> &RenderModel {
        let next = self.state.with_page_size(page_size);
        self.apply(next)
    }

    /// Switch renderer and remember the choice for this session.
    pub fn set_mode(&mut self, mode: PresentationMode) -> Result<&RenderModel> {
        self.gateway
            .store()
            .save_mode(&self.session_id, self.gateway.user(), mode)?;
        let next = self.state.with_mode(mode);
        Ok(self.apply(next))
    }

    /// Storage id of the record currently ranked `display_id`, if any.
    pub fn resolve_display_id(&self, display_id: usize) -> Option<StorageId> {
        project(&self.records)
            .into_iter()
            .find(|row| row.display_id == display_id)
            .map(|row| row.recipe.storage_id.clone())
    }

    pub fn edit(&self, storage_id: &StorageId) -> Result<Option<EditRequest>> {
        self.gateway.edit(storage_id)
    }

    pub fn update(&mut self, storage_id: &StorageId, draft: &RecipeDraft) -> Result<Option<Recipe>> {
        let updated = self.gateway.update(storage_id, draft)?;
        if updated.is_some() {
            self.reload()?;
        }
        Ok(updated)
    }

    pub fn add(&mut self, draft: &RecipeDraft) -> Result<Recipe> {
        let recipe = self.gateway.add(draft)?;
        self.reload()?;
        Ok(recipe)
    }

    /// Delete a record and re-run the whole pipeline: display ids and the
    /// page count are recomputed from the smaller set.
    pub fn delete(&mut self, storage_id: &StorageId) -> Result<DeleteOutcome> {
        let outcome = self.gateway.delete(storage_id)?;
        if outcome.is_deleted() {
            self.reload()?;
        }
        Ok(outcome)
    }

    /// Re-read the collection from the store and render again.
    pub fn reload(&mut self) -> Result<&RenderModel> {
        self.records = self.gateway.load()?;
        let state = self.state.clone();
        Ok(self.apply(state))
    }

    fn apply(&mut self, next: ViewState) -> &RenderModel {
        self.phase = RenderPhase::Idle;
        self.model = render(&self.records, &next);
        self.state = self.model.state.clone();
        self.phase = RenderPhase::Rendered;
        &self.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cocina_store::MemoryStore;

    fn user() -> UserId {
        UserId::new("bob")
    }

    fn store_with(n: usize) -> MemoryStore {
        let records = (1..=n)
            .map(|i| {
                let mut recipe = Recipe::new(format!("{}", 1_000 + i));
                recipe.created_at = Some(i as i64);
                recipe.title = format!("Dish {:02}", i);
                recipe
            })
            .collect();
        MemoryStore::with_records(&user(), records)
    }

    #[test]
    fn test_open_uses_remembered_mode() {
        let store = store_with(3);
        store.put_raw_mode("s1", &user(), "table");

        let session = BrowseSession::open(&store, user(), "s1", ViewState::new()).unwrap();
        assert_eq!(session.model().mode(), PresentationMode::Table);
        assert_eq!(session.phase(), RenderPhase::Rendered);
    }

    #[test]
    fn test_unknown_stored_mode_falls_back_to_card() {
        let store = store_with(3);
        store.put_raw_mode("s1", &user(), "carousel");

        let initial = ViewState::new().with_mode(PresentationMode::Table);
        let session = BrowseSession::open(&store, user(), "s1", initial).unwrap();
        assert_eq!(session.state().mode, PresentationMode::Card);
    }

    #[test]
    fn test_mode_is_remembered_per_session() {
        let store = store_with(3);
        {
            let mut session = BrowseSession::open(&store, user(), "s1", ViewState::new()).unwrap();
            session.set_mode(PresentationMode::Table).unwrap();
        }

        let same = BrowseSession::open(&store, user(), "s1", ViewState::new()).unwrap();
        assert_eq!(same.state().mode, PresentationMode::Table);

        let other = BrowseSession::open(&store, user(), "s2", ViewState::new()).unwrap();
        assert_eq!(other.state().mode, PresentationMode::Card);
    }

    #[test]
    fn test_navigation_past_bounds_is_noop() {
        let store = store_with(45);
        let mut session = BrowseSession::open(&store, user(), "s", ViewState::new()).unwrap();

        session.prev_page();
        assert_eq!(session.state().current_page, 1);

        session.goto_page(3);
        session.next_page();
        assert_eq!(session.state().current_page, 3);

        session.prev_page();
        assert_eq!(session.state().current_page, 2);
    }

    #[test]
    fn test_delete_reranks_and_clamps() {
        let store = store_with(21);
        let mut session = BrowseSession::open(&store, user(), "s", ViewState::new()).unwrap();
        session.goto_page(2);
        assert_eq!(session.model().display_ids(), vec![21]);

        let last = session.resolve_display_id(21).unwrap();
        let outcome = session.delete(&last).unwrap();
        assert!(outcome.is_deleted());

        assert_eq!(session.model().total_pages(), 1);
        assert_eq!(session.state().current_page, 1);
        assert_eq!(session.model().total_items, 20);
    }

    #[test]
    fn test_delete_first_record_shifts_display_ids() {
        let store = store_with(3);
        let mut session = BrowseSession::open(&store, user(), "s", ViewState::new()).unwrap();

        session.delete(&StorageId::new("1001")).unwrap();

        let rows = &session.model().rows;
        let pairs: Vec<(usize, &str)> = rows
            .iter()
            .map(|r| (r.display_id, r.name.as_str()))
            .collect();
        assert_eq!(pairs, vec![(1, "Dish 02"), (2, "Dish 03")]);
    }

    #[test]
    fn test_sort_keeps_page_but_filter_resets_it() {
        let store = store_with(45);
        let mut session = BrowseSession::open(&store, user(), "s", ViewState::new()).unwrap();

        session.goto_page(2);
        session.sort_by(ViewField::Name);
        assert_eq!(session.state().current_page, 2);

        session.set_filter(ViewField::Name, "dish");
        assert_eq!(session.state().current_page, 1);
    }
}
