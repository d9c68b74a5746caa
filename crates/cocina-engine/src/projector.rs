use chrono::{DateTime, NaiveDate, NaiveDateTime};
use cocina_types::{Recipe, ViewField};

/// A recipe as seen by one render cycle.
///
/// Holds the comparable (lower-cased) projections used by the filter and sort
/// stages, plus the display id. Rebuilt on every cycle and never persisted.
#[derive(Debug, Clone)]
pub struct ViewRow<'a> {
    pub recipe: &'a Recipe,
    pub display_id: usize,
    pub date_added_ts: i64,
    id_key: String,
    date_key: String,
    name_key: String,
    source_key: String,
    tags_key: String,
}

impl<'a> ViewRow<'a> {
    fn new(recipe: &'a Recipe, date_added_ts: i64) -> Self {
        Self {
            recipe,
            display_id: 0,
            date_added_ts,
            id_key: String::new(),
            date_key: format_date(date_added_ts),
            name_key: recipe.title.trim().to_lowercase(),
            source_key: recipe.source.trim().to_lowercase(),
            tags_key: recipe.tags.join(", ").to_lowercase(),
        }
    }

    /// Normalized text of a column, as matched by filters and compared by sort.
    pub fn key(&self, field: ViewField) -> &str {
        match field {
            ViewField::Id => &self.id_key,
            ViewField::DateAdded => &self.date_key,
            ViewField::Name => &self.name_key,
            ViewField::Source => &self.source_key,
            ViewField::Tags => &self.tags_key,
        }
    }

    /// Calendar date of `date_added_ts`, `YYYY-MM-DD` in UTC.
    pub fn date_added(&self) -> &str {
        &self.date_key
    }
}

/// Project every record into a view row and number the whole set.
///
/// Display ids rank the full set by `(date_added_ts, storage_id)` ascending and
/// run `1..=N`. Rows come back in the store's order; only the numbering
/// follows the ranking.
pub fn project(records: &[Recipe]) -> Vec<ViewRow<'_>> {
    let mut rows: Vec<ViewRow<'_>> = records
        .iter()
        .map(|recipe| ViewRow::new(recipe, resolve_date_added(recipe)))
        .collect();

    let mut ranking: Vec<usize> = (0..rows.len()).collect();
    ranking.sort_by(|&a, &b| {
        rows[a]
            .date_added_ts
            .cmp(&rows[b].date_added_ts)
            .then_with(|| rows[a].recipe.storage_id.cmp(&rows[b].recipe.storage_id))
    });

    for (rank, index) in ranking.into_iter().enumerate() {
        let row = &mut rows[index];
        row.display_id = rank + 1;
        row.id_key = row.display_id.to_string();
    }

    rows
}

/// Timestamp (epoch ms) a recipe is considered added at.
///
/// Falls back from `createdAt` to a numeric storage id, then to the free-text
/// `date`, then to zero. Unknown dates therefore sort as the epoch.
pub fn resolve_date_added(recipe: &Recipe) -> i64 {
    if let Some(created_at) = recipe.created_at {
        return created_at;
    }
    if let Some(numeric) = recipe.storage_id.as_number() {
        return numeric as i64;
    }
    parse_date(&recipe.date).unwrap_or(0)
}

/// Best-effort parse of a user-entered date into epoch milliseconds.
pub fn parse_date(text: &str) -> Option<i64> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.timestamp_millis());
    }

    for format in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(text, format) {
            return Some(dt.and_utc().timestamp_millis());
        }
    }

    for format in ["%Y-%m-%d", "%d/%m/%Y"] {
        if let Ok(date) = NaiveDate::parse_from_str(text, format) {
            return date
                .and_hms_opt(0, 0, 0)
                .map(|dt| dt.and_utc().timestamp_millis());
        }
    }

    None
}

fn format_date(ts: i64) -> String {
    DateTime::from_timestamp_millis(ts)
        .map(|dt| dt.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recipe(id: &str, created_at: Option<i64>) -> Recipe {
        let mut recipe = Recipe::new(id);
        recipe.created_at = created_at;
        recipe
    }

    #[test]
    fn test_display_ids_follow_creation_order() {
        let records = vec![
            recipe("b", Some(200)),
            recipe("a", Some(100)),
            recipe("c", Some(300)),
        ];
        let rows = project(&records);

        let ids: Vec<(&str, usize)> = rows
            .iter()
            .map(|r| (r.recipe.storage_id.as_str(), r.display_id))
            .collect();
        assert_eq!(ids, vec![("b", 2), ("a", 1), ("c", 3)]);
    }

    #[test]
    fn test_ties_break_on_storage_id() {
        let records = vec![recipe("z", Some(5)), recipe("m", Some(5)), recipe("a", Some(5))];
        let rows = project(&records);

        assert_eq!(rows[0].display_id, 3);
        assert_eq!(rows[1].display_id, 2);
        assert_eq!(rows[2].display_id, 1);
    }

    #[test]
    fn test_date_added_fallback_chain() {
        assert_eq!(resolve_date_added(&recipe("x", Some(7))), 7);
        assert_eq!(resolve_date_added(&recipe("1700000000000", None)), 1_700_000_000_000);

        let mut dated = recipe("legacy", None);
        dated.date = "2024-03-01".to_string();
        assert_eq!(resolve_date_added(&dated), 1_709_251_200_000);

        let mut undated = recipe("legacy", None);
        undated.date = "sometime last spring".to_string();
        assert_eq!(resolve_date_added(&undated), 0);
    }

    #[test]
    fn test_parse_date_formats() {
        assert_eq!(parse_date("1970-01-02"), Some(86_400_000));
        assert_eq!(parse_date("02/01/1970"), Some(86_400_000));
        assert_eq!(parse_date("1970-01-01 00:00:01"), Some(1_000));
        assert_eq!(parse_date("1970-01-01T00:00:01+00:00"), Some(1_000));
        assert_eq!(parse_date("   "), None);
    }

    #[test]
    fn test_projected_keys_are_lowercase() {
        let mut record = recipe("1", Some(0));
        record.title = "  Pollo AL Ajillo ".to_string();
        record.source = "Mamá".to_string();
        record.tags = vec!["garlic".to_string(), "chicken".to_string()];
        let records = vec![record];
        let rows = project(&records);

        assert_eq!(rows[0].key(ViewField::Name), "pollo al ajillo");
        assert_eq!(rows[0].key(ViewField::Source), "mamá");
        assert_eq!(rows[0].key(ViewField::Tags), "garlic, chicken");
        assert_eq!(rows[0].key(ViewField::DateAdded), "1970-01-01");
        assert_eq!(rows[0].key(ViewField::Id), "1");
    }
}
