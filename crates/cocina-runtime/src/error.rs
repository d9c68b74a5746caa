use std::fmt;

/// Result type for cocina-runtime operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the runtime layer
#[derive(Debug)]
pub enum Error {
    /// Record store error
    Store(cocina_store::Error),

    /// Extraction error
    Extract(cocina_extract::Error),

    /// IO operation failed
    Io(std::io::Error),

    /// Configuration error
    Config(String),

    /// Input the runtime cannot act on (unreadable image, bad URL, ...)
    InvalidInput(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Store(err) => write!(f, "Store error: {}", err),
            Error::Extract(err) => write!(f, "Extraction error: {}", err),
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::Config(msg) => write!(f, "Configuration error: {}", msg),
            Error::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Store(err) => Some(err),
            Error::Extract(err) => Some(err),
            Error::Io(err) => Some(err),
            Error::Config(_) | Error::InvalidInput(_) => None,
        }
    }
}

impl From<cocina_store::Error> for Error {
    fn from(err: cocina_store::Error) -> Self {
        Error::Store(err)
    }
}

impl From<cocina_extract::Error> for Error {
    fn from(err: cocina_extract::Error) -> Self {
        Error::Extract(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}
