use cocina_types::{PresentationMode, UserId};
use rusqlite::{Connection, OptionalExtension, params};

use crate::Result;

pub fn get_mode(conn: &Connection, session_id: &str, user: &UserId) -> Result<Option<String>> {
    let mode = conn
        .query_row(
            "SELECT mode FROM session_prefs WHERE session_id = ?1 AND user_id = ?2",
            params![session_id, user.as_str()],
            |row| row.get(0),
        )
        .optional()?;

    Ok(mode)
}

pub fn set_mode(
    conn: &Connection,
    session_id: &str,
    user: &UserId,
    mode: PresentationMode,
) -> Result<()> {
    let now = chrono::Utc::now().to_rfc3339();

    conn.execute(
        r#"
        INSERT INTO session_prefs (session_id, user_id, mode, updated_at)
        VALUES (?1, ?2, ?3, ?4)
        ON CONFLICT(session_id, user_id) DO UPDATE SET
            mode = ?3,
            updated_at = ?4
        "#,
        params![session_id, user.as_str(), mode.as_str(), now],
    )?;

    Ok(())
}

/// Drop preferences of sessions that are over; modes never outlive a session.
pub fn clear_session(conn: &Connection, session_id: &str) -> Result<usize> {
    let removed = conn.execute(
        "DELETE FROM session_prefs WHERE session_id = ?1",
        [session_id],
    )?;
    Ok(removed)
}
