use std::fmt;

/// Result type for cocina-store operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the store layer
#[derive(Debug)]
pub enum Error {
    /// Database operation failed
    Database(rusqlite::Error),

    /// A collection could not be encoded for writing
    Serialization(serde_json::Error),

    /// IO operation failed
    Io(std::io::Error),

    /// The database was written by a newer cocina
    SchemaTooNew { found: i32, supported: i32 },

    /// Existing tables cannot be migrated without losing data
    IncompatibleSchema(String),

    /// A stored collection cannot be read back, so it must not be rewritten
    UnreadableCollection { user: String, reason: String },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Database(err) => {
                let msg = err.to_string();
                if msg.contains("no such column") || msg.contains("no such table") {
                    write!(f, "Database schema mismatch: {}", msg)
                } else {
                    write!(f, "Database error: {}", err)
                }
            }
            Error::Serialization(err) => write!(f, "Serialization error: {}", err),
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::SchemaTooNew { found, supported } => write!(
                f,
                "Database schema version {} is newer than this build supports ({}); upgrade cocina",
                found, supported
            ),
            Error::IncompatibleSchema(msg) => {
                write!(f, "Database schema cannot be migrated: {}", msg)
            }
            Error::UnreadableCollection { user, reason } => write!(
                f,
                "Collection of {} cannot be read ({}); refusing to overwrite it",
                user, reason
            ),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Database(err) => Some(err),
            Error::Serialization(err) => Some(err),
            Error::Io(err) => Some(err),
            Error::SchemaTooNew { .. }
            | Error::IncompatibleSchema(_)
            | Error::UnreadableCollection { .. } => None,
        }
    }
}

impl From<rusqlite::Error> for Error {
    fn from(err: rusqlite::Error) -> Self {
        Error::Database(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}
