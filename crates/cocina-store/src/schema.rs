use rusqlite::Connection;

use crate::{Error, Result};

// Schema version (increment when changing table definitions)
pub const SCHEMA_VERSION: i32 = 3;

// NOTE: Why one JSON blob per user (not one row per recipe)?
// - The view engine always needs the whole collection to derive display ids
// - `save` must persist the exact order it was handed, which a blob gives for free
// - Records written by older clients carry extra/missing keys; decoding on read
//   lets them degrade field by field instead of failing a migration
//
// `collections` is the only copy of the user's recipes and is never dropped.
// On a version change only `session_prefs` (throwaway per-session state) is
// rebuilt; `collections` is migrated in place or the open is refused.

pub fn init_schema(conn: &Connection) -> Result<()> {
    let current_version: i32 = conn.query_row("PRAGMA user_version", [], |row| row.get(0))?;

    if current_version > SCHEMA_VERSION {
        return Err(Error::SchemaTooNew {
            found: current_version,
            supported: SCHEMA_VERSION,
        });
    }

    if current_version != SCHEMA_VERSION {
        conn.execute_batch("DROP TABLE IF EXISTS session_prefs;")?;
        migrate_collections(conn)?;
    }

    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS collections (
            user_id TEXT PRIMARY KEY,
            records TEXT NOT NULL,
            updated_at TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS session_prefs (
            session_id TEXT NOT NULL,
            user_id TEXT NOT NULL,
            mode TEXT NOT NULL,
            updated_at TEXT NOT NULL,
            PRIMARY KEY (session_id, user_id)
        );
        "#,
    )?;

    conn.execute(&format!("PRAGMA user_version = {}", SCHEMA_VERSION), [])?;

    Ok(())
}

/// Bring an existing `collections` table up to the current layout without
/// touching its rows.
fn migrate_collections(conn: &Connection) -> Result<()> {
    let columns = table_columns(conn, "collections")?;
    if columns.is_empty() {
        return Ok(());
    }

    for required in ["user_id", "records"] {
        if !columns.iter().any(|c| c == required) {
            return Err(Error::IncompatibleSchema(format!(
                "table 'collections' has no '{}' column",
                required
            )));
        }
    }

    if !columns.iter().any(|c| c == "updated_at") {
        conn.execute_batch(
            "ALTER TABLE collections ADD COLUMN updated_at TEXT NOT NULL DEFAULT '';",
        )?;
    }

    Ok(())
}

fn table_columns(conn: &Connection, table: &str) -> Result<Vec<String>> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info({})", table))?;
    let columns = stmt
        .query_map([], |row| row.get::<_, String>(1))?
        .collect::<std::result::Result<Vec<_>, _>>()?;
    Ok(columns)
}
