use cocina_engine::{BrowseSession, Filters, ViewState, apply_filters, project, render};
use cocina_store::MemoryStore;
use cocina_types::{PresentationMode, Recipe, SortDirection, StorageId, UserId, ViewField};

fn recipe(id: &str, created_at: i64, title: &str, source: &str) -> Recipe {
    let mut recipe = Recipe::new(id);
    recipe.created_at = Some(created_at);
    recipe.title = title.to_string();
    recipe.source = source.to_string();
    recipe
}

fn three() -> Vec<Recipe> {
    vec![
        recipe("b", 200, "Bravas", "Bar Tomás"),
        recipe("a", 100, "Croquetas", "Abuela"),
        recipe("c", 300, "Bravas", "Casa"),
    ]
}

fn numbered(n: usize) -> Vec<Recipe> {
    (1..=n)
        .map(|i| recipe(&format!("r{:03}", i), i as i64 * 10, &format!("Plate {:03}", i), ""))
        .collect()
}

#[test]
fn display_ids_rank_by_date_added() {
    let records = three();
    let model = render(&records, &ViewState::new());

    let summary: Vec<String> = model
        .rows
        .iter()
        .map(|r| format!("{}={}", r.display_id, r.recipe.storage_id))
        .collect();
    insta::assert_snapshot!(summary.join(" "), @"1=a 2=b 3=c");
}

#[test]
fn name_desc_with_empty_source_filter_orders_ties_by_display_id() {
    let records = three();
    let state = ViewState::new()
        .with_filter(ViewField::Source, "")
        .with_sort(ViewField::Name, SortDirection::Desc);
    let model = render(&records, &state);

    let order: Vec<(usize, &str)> = model
        .rows
        .iter()
        .map(|r| (r.display_id, r.name.as_str()))
        .collect();
    assert_eq!(order, vec![(1, "Croquetas"), (2, "Bravas"), (3, "Bravas")]);
}

#[test]
fn display_ids_are_a_permutation_unaffected_by_filters() {
    let records = numbered(37);
    let mut ids: Vec<usize> = project(&records).iter().map(|r| r.display_id).collect();
    ids.sort_unstable();
    assert_eq!(ids, (1..=37).collect::<Vec<_>>());

    let unfiltered = render(&records, &ViewState::new().with_page_size(100));
    let filtered = render(
        &records,
        &ViewState::new()
            .with_page_size(100)
            .with_filter(ViewField::Name, "plate 02"),
    );
    for row in &filtered.rows {
        let original = unfiltered
            .rows
            .iter()
            .find(|r| r.recipe.storage_id == row.recipe.storage_id)
            .unwrap();
        assert_eq!(original.display_id, row.display_id);
    }
    assert_eq!(filtered.total_items, 10);
}

#[test]
fn empty_filters_return_full_set_in_store_order() {
    let records = three();
    let filters = Filters::new()
        .with(ViewField::Name, "")
        .with(ViewField::Tags, "  ");
    let rows = apply_filters(project(&records), &filters);

    let order: Vec<&str> = rows.iter().map(|r| r.recipe.storage_id.as_str()).collect();
    assert_eq!(order, vec!["b", "a", "c"]);
}

#[test]
fn ascending_and_descending_are_reverses_for_distinct_keys() {
    let mut records = numbered(12);
    for (i, recipe) in records.iter_mut().enumerate() {
        // Distinct keys in an order unrelated to insertion.
        let key = (i * 5) % 12;
        recipe.source = format!("Kitchen {:02}", key);
        recipe.tags = vec![format!("tag-{:02}", 11 - key)];
    }

    for column in ViewField::ALL {
        let asc = render(&records, &ViewState::new().with_sort(column, SortDirection::Asc));
        let desc = render(&records, &ViewState::new().with_sort(column, SortDirection::Desc));

        let mut reversed = desc.display_ids();
        reversed.reverse();
        assert_eq!(asc.display_ids(), reversed, "column {}", column);
    }
}

#[test]
fn forty_five_rows_paginate_into_three_pages() {
    let records = numbered(45);

    let model = render(&records, &ViewState::new().with_page(4));
    assert_eq!(model.total_pages(), 3);
    assert_eq!(model.current_page(), 3);
    assert_eq!(model.display_ids(), (41..=45).collect::<Vec<_>>());

    let first = render(&records, &ViewState::new());
    assert_eq!(first.rows.len(), 20);
    assert!(first.page.has_next());
}

#[test]
fn mode_switch_resets_page_and_keeps_filters_and_sort() {
    let user = UserId::new("carmen");
    let store = MemoryStore::with_records(&user, numbered(45));
    let mut session = BrowseSession::open(&store, user, "tab-1", ViewState::new()).unwrap();

    session.sort_with(ViewField::Name, SortDirection::Desc);
    session.set_filter(ViewField::Name, "plate");
    session.goto_page(2);
    assert_eq!(session.state().current_page, 2);

    let model = session.set_mode(PresentationMode::Table).unwrap();
    assert_eq!(model.mode(), PresentationMode::Table);
    assert_eq!(model.current_page(), 1);
    assert_eq!(model.sort().column, ViewField::Name);
    assert_eq!(model.sort().direction, SortDirection::Desc);
    assert_eq!(model.state.filters.get(ViewField::Name), "plate");
}

#[test]
fn deleting_reranks_remaining_records() {
    let user = UserId::new("carmen");
    let store = MemoryStore::with_records(&user, three());
    let mut session = BrowseSession::open(&store, user, "tab-1", ViewState::new()).unwrap();

    session.delete(&StorageId::new("a")).unwrap();

    let summary: Vec<(usize, String)> = session
        .model()
        .rows
        .iter()
        .map(|r| (r.display_id, r.recipe.storage_id.to_string()))
        .collect();
    assert_eq!(summary, vec![(1, "b".to_string()), (2, "c".to_string())]);
    assert_eq!(store.save_count(), 1);
}

#[test]
fn deleting_missing_record_changes_nothing() {
    let user = UserId::new("carmen");
    let store = MemoryStore::with_records(&user, three());
    let mut session = BrowseSession::open(&store, user, "tab-1", ViewState::new()).unwrap();

    let before = session.model().clone();
    let outcome = session.delete(&StorageId::new("zzz")).unwrap();

    assert!(!outcome.is_deleted());
    assert_eq!(session.model(), &before);
    assert_eq!(store.save_count(), 0);
}

#[test]
fn legacy_records_without_created_at_use_fallbacks() {
    let mut by_id = Recipe::new("1700000000000");
    by_id.title = "Numeric id".to_string();
    let mut by_date = Recipe::new("legacy");
    by_date.date = "2020-01-01".to_string();
    let unknown = Recipe::new("zz-unknown");

    let records = vec![by_id, by_date, unknown];
    let model = render(&records, &ViewState::new());

    let order: Vec<&str> = model.rows.iter().map(|r| r.recipe.storage_id.as_str()).collect();
    assert_eq!(order, vec!["zz-unknown", "legacy", "1700000000000"]);
    assert_eq!(model.rows[0].date_added, "1970-01-01");
    assert_eq!(model.rows[1].date_added, "2020-01-01");
}
