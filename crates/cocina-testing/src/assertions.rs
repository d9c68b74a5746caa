//! Assertions over the JSON envelope printed with `--format json`.

use anyhow::{Context, Result, bail};
use serde_json::Value;

pub fn assert_status_ok(json: &Value) -> Result<()> {
    match json["status"].as_str() {
        Some("ok") => Ok(()),
        other => bail!("Expected status \"ok\", got {:?}", other),
    }
}

fn rows(json: &Value) -> Result<&Vec<Value>> {
    json["content"]["rows"]
        .as_array()
        .context("Expected 'content.rows' array in JSON")
}

/// Assert the rendered page holds `expected` rows.
pub fn assert_row_count(json: &Value, expected: usize) -> Result<()> {
    let rows = rows(json)?;
    if rows.len() != expected {
        bail!("Expected {} rows, got {}", expected, rows.len());
    }
    Ok(())
}

/// Row names in page order.
pub fn row_names(json: &Value) -> Result<Vec<String>> {
    rows(json)?
        .iter()
        .enumerate()
        .map(|(i, row)| {
            row["name"]
                .as_str()
                .map(String::from)
                .with_context(|| format!("Row {} missing name", i))
        })
        .collect()
}

/// Display ids in page order.
pub fn display_ids(json: &Value) -> Result<Vec<u64>> {
    rows(json)?
        .iter()
        .enumerate()
        .map(|(i, row)| {
            row["display_id"]
                .as_u64()
                .with_context(|| format!("Row {} missing display_id", i))
        })
        .collect()
}

/// Assert paging metadata: current page and page count.
pub fn assert_page(json: &Value, page: u64, total_pages: u64) -> Result<()> {
    let content = &json["content"];
    let actual = (content["page"].as_u64(), content["total_pages"].as_u64());
    if actual != (Some(page), Some(total_pages)) {
        bail!(
            "Expected page {}/{}, got {:?}/{:?}",
            page,
            total_pages,
            actual.0,
            actual.1
        );
    }
    Ok(())
}

/// Storage id of the recipe in an add/import/edit result.
pub fn saved_storage_id(json: &Value) -> Result<String> {
    json["content"]["recipe"]["storage_id"]
        .as_str()
        .map(String::from)
        .context("Expected 'content.recipe.storage_id' in JSON")
}
