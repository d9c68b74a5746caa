use std::fmt;

/// Result type for cocina-extract operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while extracting a recipe from a URL
#[derive(Debug)]
pub enum Error {
    /// The URL could not be parsed or is not http(s)
    InvalidUrl(String),

    /// The server answered with a non-success status
    Status { code: u16, body: String },

    /// Connection, TLS or timeout failure
    Transport(String),

    /// The body was not what the extractor expected
    InvalidResponse(String),

    /// IO operation failed while reading a response
    Io(std::io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidUrl(msg) => write!(f, "Invalid URL: {}", msg),
            Error::Status { code, body } => {
                if body.is_empty() {
                    write!(f, "Extraction request failed with status {}", code)
                } else {
                    write!(f, "Extraction request failed with status {}: {}", code, body)
                }
            }
            Error::Transport(msg) => write!(f, "Network error: {}", msg),
            Error::InvalidResponse(msg) => write!(f, "Invalid extraction response: {}", msg),
            Error::Io(err) => write!(f, "IO error: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            Error::InvalidUrl(_)
            | Error::Status { .. }
            | Error::Transport(_)
            | Error::InvalidResponse(_) => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Error::InvalidUrl(err.to_string())
    }
}

impl From<ureq::Error> for Error {
    fn from(err: ureq::Error) -> Self {
        match err {
            ureq::Error::Status(code, resp) => Error::Status {
                code,
                body: resp.into_string().unwrap_or_default().trim().to_string(),
            },
            ureq::Error::Transport(transport) => Error::Transport(transport.to_string()),
        }
    }
}
