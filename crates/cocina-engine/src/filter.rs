use cocina_types::ViewField;
use serde::{Deserialize, Serialize};

use crate::projector::ViewRow;

/// One substring query per filterable column.
///
/// Queries are stored trimmed and lower-cased; an empty query places no
/// constraint on its column.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Filters {
    id: String,
    date_added: String,
    name: String,
    source: String,
    tags: String,
}

impl Filters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: ViewField) -> &str {
        match field {
            ViewField::Id => &self.id,
            ViewField::DateAdded => &self.date_added,
            ViewField::Name => &self.name,
            ViewField::Source => &self.source,
            ViewField::Tags => &self.tags,
        }
    }

    pub fn set(&mut self, field: ViewField, query: &str) {
        let normalized = query.trim().to_lowercase();
        let slot = match field {
            ViewField::Id => &mut self.id,
            ViewField::DateAdded => &mut self.date_added,
            ViewField::Name => &mut self.name,
            ViewField::Source => &mut self.source,
            ViewField::Tags => &mut self.tags,
        };
        *slot = normalized;
    }

    pub fn with(mut self, field: ViewField, query: &str) -> Self {
        self.set(field, query);
        self
    }

    /// Columns with a non-empty query, in column order.
    pub fn active(&self) -> impl Iterator<Item = (ViewField, &str)> {
        ViewField::ALL
            .into_iter()
            .map(|field| (field, self.get(field)))
            .filter(|(_, query)| !query.is_empty())
    }

    pub fn is_empty(&self) -> bool {
        self.active().next().is_none()
    }

    pub fn matches(&self, row: &ViewRow<'_>) -> bool {
        self.active()
            .all(|(field, query)| row.key(field).contains(query))
    }
}

/// Keep the rows that satisfy every active filter, preserving their order.
pub fn apply_filters<'a>(rows: Vec<ViewRow<'a>>, filters: &Filters) -> Vec<ViewRow<'a>> {
    if filters.is_empty() {
        return rows;
    }
    rows.into_iter().filter(|row| filters.matches(row)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projector::project;
    use cocina_types::Recipe;

    fn records() -> Vec<Recipe> {
        [
            ("1", "Tortilla de patatas", "Abuela", &["spanish", "eggs"][..]),
            ("2", "Shakshuka", "Ottolenghi", &["eggs", "brunch"][..]),
            ("3", "Gazpacho", "Abuela", &["cold", "soup"][..]),
        ]
        .into_iter()
        .map(|(id, title, source, tags)| {
            let mut recipe = Recipe::new(id);
            recipe.created_at = Some(id.parse::<i64>().unwrap());
            recipe.title = title.to_string();
            recipe.source = source.to_string();
            recipe.tags = tags.iter().map(|t| t.to_string()).collect();
            recipe
        })
        .collect()
    }

    fn ids(rows: &[ViewRow<'_>]) -> Vec<usize> {
        rows.iter().map(|r| r.display_id).collect()
    }

    #[test]
    fn test_empty_filters_keep_everything_in_order() {
        let records = records();
        let rows = apply_filters(project(&records), &Filters::new());
        assert_eq!(ids(&rows), vec![1, 2, 3]);
    }

    #[test]
    fn test_whitespace_only_query_is_inactive() {
        let filters = Filters::new().with(ViewField::Name, "   ");
        assert!(filters.is_empty());
    }

    #[test]
    fn test_query_is_case_insensitive_substring() {
        let records = records();
        let filters = Filters::new().with(ViewField::Name, "TORTI");
        let rows = apply_filters(project(&records), &filters);
        assert_eq!(ids(&rows), vec![1]);
    }

    #[test]
    fn test_filters_compose_with_and() {
        let records = records();
        let filters = Filters::new()
            .with(ViewField::Source, "abuela")
            .with(ViewField::Tags, "eggs");
        let rows = apply_filters(project(&records), &filters);
        assert_eq!(ids(&rows), vec![1]);
    }

    #[test]
    fn test_filtering_keeps_display_ids() {
        let records = records();
        let filters = Filters::new().with(ViewField::Tags, "soup");
        let rows = apply_filters(project(&records), &filters);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].display_id, 3);
        assert_eq!(rows[0].recipe.title, "Gazpacho");
    }

    #[test]
    fn test_id_filter_matches_display_id_text() {
        let records = records();
        let filters = Filters::new().with(ViewField::Id, "2");
        let rows = apply_filters(project(&records), &filters);
        assert_eq!(ids(&rows), vec![2]);
    }
}
