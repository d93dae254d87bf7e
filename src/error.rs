//! Unified error type for the storage and repository layers.

/// Things that can go wrong while serving a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Client-supplied payload failed a precondition (missing name).
    Validation(String),
    /// The referenced item id does not exist in the collection.
    NotFound,
    /// The stored document is not a valid JSON array of objects.
    CorruptStorage(String),
    /// File system problem (read, write, create).
    Io(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Validation(msg) => write!(f, "validation error: {msg}"),
            Error::NotFound => write!(f, "item not found"),
            Error::CorruptStorage(msg) => write!(f, "corrupt storage: {msg}"),
            Error::Io(msg) => write!(f, "i/o error: {msg}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

/// Result alias using our [`Error`] type.
pub type Result<T> = std::result::Result<T, Error>;
