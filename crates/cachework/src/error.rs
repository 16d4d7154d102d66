//! Error types for cachework

use std::fmt;
use std::io;

/// Result type alias for workload generation
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for workload generation
#[derive(Debug)]
pub enum Error {
    /// I/O error while creating or writing the workload file
    Io(io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::Io(err)
    }
}
