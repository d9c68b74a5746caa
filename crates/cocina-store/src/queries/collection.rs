use cocina_types::{Recipe, UserId};
use rusqlite::{Connection, OptionalExtension, params};
use serde_json::Value;
use tracing::warn;

use crate::{Error, Result};

fn load_raw(conn: &Connection, user: &UserId) -> Result<Option<String>> {
    let raw = conn
        .query_row(
            "SELECT records FROM collections WHERE user_id = ?1",
            [user.as_str()],
            |row| row.get(0),
        )
        .optional()?;
    Ok(raw)
}

pub fn load(conn: &Connection, user: &UserId) -> Result<Vec<Recipe>> {
    let raw = load_raw(conn, user)?;
    Ok(raw.map(|json| decode(user, &json)).unwrap_or_default())
}

/// Load for a read-modify-write. A blob that is not a JSON array is an error
/// here instead of an empty collection, so it is never overwritten.
pub fn load_for_update(conn: &Connection, user: &UserId) -> Result<Vec<Recipe>> {
    let Some(json) = load_raw(conn, user)? else {
        return Ok(Vec::new());
    };

    let entries = parse_entries(&json).map_err(|reason| Error::UnreadableCollection {
        user: user.to_string(),
        reason,
    })?;
    Ok(decode_entries(user, entries))
}

pub fn save(conn: &Connection, user: &UserId, records: &[Recipe]) -> Result<()> {
    let json = serde_json::to_string(records)?;
    let now = chrono::Utc::now().to_rfc3339();

    conn.execute(
        r#"
        INSERT INTO collections (user_id, records, updated_at)
        VALUES (?1, ?2, ?3)
        ON CONFLICT(user_id) DO UPDATE SET
            records = ?2,
            updated_at = ?3
        "#,
        params![user.as_str(), json, now],
    )?;

    Ok(())
}

/// Decode a stored collection, keeping every entry that is at least an object.
pub(crate) fn decode(user: &UserId, json: &str) -> Vec<Recipe> {
    match parse_entries(json) {
        Ok(entries) => decode_entries(user, entries),
        Err(reason) => {
            warn!(user = %user, reason = %reason, "stored collection is unreadable; treating as empty");
            Vec::new()
        }
    }
}

fn parse_entries(json: &str) -> std::result::Result<Vec<Value>, String> {
    match serde_json::from_str::<Value>(json) {
        Ok(Value::Array(entries)) => Ok(entries),
        Ok(_) => Err("not a JSON array".to_string()),
        Err(err) => Err(format!("invalid JSON: {}", err)),
    }
}

fn decode_entries(user: &UserId, entries: Vec<Value>) -> Vec<Recipe> {
    entries
        .into_iter()
        .enumerate()
        .filter_map(|(index, entry)| match Recipe::from_value(entry) {
            Ok(recipe) => Some(recipe),
            Err(err) => {
                warn!(user = %user, index, error = %err, "skipping unreadable record");
                None
            }
        })
        .collect()
}
