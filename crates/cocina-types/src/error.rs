use std::fmt;

/// Result type for cocina-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the types layer
#[derive(Debug)]
pub enum Error {
    /// A textual value could not be mapped to one of the closed view enums
    UnknownVariant { kind: &'static str, value: String },

    /// A persisted record was not a JSON object
    MalformedRecord(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnknownVariant { kind, value } => {
                write!(f, "Unknown {}: '{}'", kind, value)
            }
            Error::MalformedRecord(msg) => write!(f, "Malformed record: {}", msg),
        }
    }
}

impl std::error::Error for Error {}
