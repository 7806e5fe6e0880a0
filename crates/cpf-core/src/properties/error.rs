//! Properties error types

use thiserror::Error;

use crate::access::ReadAccessError;

/// Errors that can occur while loading properties
#[derive(Error, Debug)]
pub enum PropertiesError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Read access error: {0}")]
    Access(#[from] ReadAccessError),

    /// A `\u` escape without four hex digits
    #[error("Malformed \\uxxxx encoding on line {line}")]
    MalformedEscape { line: usize },
}

pub type PropertiesResult<T> = Result<T, PropertiesError>;
