use anyhow::Result;
use std::io::Write;

use crate::presentation::view_models::RecipeViewModel;

const HEADER: [&str; 10] = [
    "display_id",
    "storage_id",
    "date_added",
    "title",
    "source",
    "date",
    "url",
    "tags",
    "ingredients",
    "steps",
];

/// Write recipes as CSV in the order given. Multi-line fields keep one entry
/// per line inside the quoted cell.
pub fn write_recipes<W: Write>(out: W, recipes: &[RecipeViewModel]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(out);
    wtr.write_record(HEADER)?;

    for recipe in recipes {
        let display_id = recipe
            .display_id
            .map(|id| id.to_string())
            .unwrap_or_default();
        wtr.write_record([
            display_id.as_str(),
            &recipe.storage_id,
            &recipe.date_added,
            &recipe.title,
            &recipe.source,
            &recipe.date,
            &recipe.url,
            &recipe.tags.join(", "),
            &recipe.ingredients.join("\n"),
            &recipe.steps.join("\n"),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
