use cocina_types::{SortDirection, ViewField};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::projector::ViewRow;

/// Active sort column and direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    pub column: ViewField,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn new(column: ViewField, direction: SortDirection) -> Self {
        Self { column, direction }
    }

    /// Header click semantics: the active column flips direction, a new column
    /// starts ascending.
    pub fn toggled(self, column: ViewField) -> Self {
        if self.column == column {
            Self::new(column, self.direction.flipped())
        } else {
            Self::new(column, SortDirection::Asc)
        }
    }

    fn compare(&self, a: &ViewRow<'_>, b: &ViewRow<'_>) -> Ordering {
        let primary = match self.column {
            ViewField::Id => a.display_id.cmp(&b.display_id),
            ViewField::DateAdded => a.date_added_ts.cmp(&b.date_added_ts),
            field => a.key(field).cmp(b.key(field)),
        };

        let primary = match self.direction {
            SortDirection::Asc => primary,
            SortDirection::Desc => primary.reverse(),
        };

        // Ties always resolve by ascending display id, whatever the direction.
        primary.then_with(|| a.display_id.cmp(&b.display_id))
    }
}

pub fn sort_rows(rows: &mut [ViewRow<'_>], spec: SortSpec) {
    rows.sort_by(|a, b| spec.compare(a, b));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projector::project;
    use cocina_types::Recipe;

    fn records(titles: &[&str]) -> Vec<Recipe> {
        titles
            .iter()
            .enumerate()
            .map(|(i, title)| {
                let mut recipe = Recipe::new(format!("r{}", i));
                recipe.created_at = Some(1_000 * (i as i64 + 1));
                recipe.title = title.to_string();
                recipe
            })
            .collect()
    }

    fn titles<'a>(rows: &'a [ViewRow<'_>]) -> Vec<&'a str> {
        rows.iter().map(|r| r.recipe.title.as_str()).collect()
    }

    #[test]
    fn test_toggle_same_column_flips() {
        let spec = SortSpec::default();
        assert_eq!(spec.column, ViewField::DateAdded);
        assert_eq!(spec.direction, SortDirection::Asc);

        let flipped = spec.toggled(ViewField::DateAdded);
        assert_eq!(flipped.direction, SortDirection::Desc);
        assert_eq!(flipped.toggled(ViewField::DateAdded).direction, SortDirection::Asc);
    }

    #[test]
    fn test_toggle_new_column_resets_to_ascending() {
        let spec = SortSpec::new(ViewField::Name, SortDirection::Desc);
        let next = spec.toggled(ViewField::Source);
        assert_eq!(next, SortSpec::new(ViewField::Source, SortDirection::Asc));
    }

    #[test]
    fn test_name_sort_is_case_insensitive() {
        let records = records(&["banana bread", "Apple pie", "carrot cake"]);
        let mut rows = project(&records);
        sort_rows(&mut rows, SortSpec::new(ViewField::Name, SortDirection::Asc));
        assert_eq!(titles(&rows), vec!["Apple pie", "banana bread", "carrot cake"]);
    }

    #[test]
    fn test_ties_use_ascending_display_id_in_both_directions() {
        let records = records(&["Soup", "Soup", "Bread"]);

        let mut rows = project(&records);
        sort_rows(&mut rows, SortSpec::new(ViewField::Name, SortDirection::Desc));
        let order: Vec<usize> = rows.iter().map(|r| r.display_id).collect();
        assert_eq!(order, vec![1, 2, 3]);

        sort_rows(&mut rows, SortSpec::new(ViewField::Name, SortDirection::Asc));
        let order: Vec<usize> = rows.iter().map(|r| r.display_id).collect();
        assert_eq!(order, vec![3, 1, 2]);
    }

    #[test]
    fn test_descending_reverses_distinct_keys() {
        let mut records = records(&["d", "a", "c", "b"]);
        let sources = ["Mercado", "abuela", "Zoe", "casa"];
        let tags = [vec!["soup"], vec!["bread", "sweet"], vec!["rice"], vec!["bread"]];
        for ((recipe, source), tags) in records.iter_mut().zip(sources).zip(tags) {
            recipe.source = source.to_string();
            recipe.tags = tags.into_iter().map(str::to_string).collect();
        }

        for column in ViewField::ALL {
            let mut asc = project(&records);
            sort_rows(&mut asc, SortSpec::new(column, SortDirection::Asc));
            let mut desc = project(&records);
            sort_rows(&mut desc, SortSpec::new(column, SortDirection::Desc));

            let mut reversed: Vec<usize> = desc.iter().map(|r| r.display_id).collect();
            reversed.reverse();
            let ascending: Vec<usize> = asc.iter().map(|r| r.display_id).collect();
            assert_eq!(ascending, reversed, "column {}", column);
        }

        let mut by_tags = project(&records);
        sort_rows(&mut by_tags, SortSpec::new(ViewField::Tags, SortDirection::Asc));
        assert_eq!(titles(&by_tags), vec!["b", "a", "c", "d"]);
    }
}
