//! Core traits and types for read access

use std::io::Read;

use thiserror::Error;

/// Errors that can occur while reading plugin content
#[derive(Error, Debug)]
pub enum ReadAccessError {
    #[error("File not found: {0}")]
    NotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Read access error: {0}")]
    Other(String),
}

pub type ReadAccessResult<T> = Result<T, ReadAccessError>;

/// Read-only view over a hierarchical store of files
///
/// Paths are relative to whatever root the implementation was given.
///
/// # Example
///
/// ```
/// use cpf_core::access::{ReadAccess, MemoryReadAccess};
///
/// let reader = MemoryReadAccess::new();
/// reader.put("config.properties", "key=value");
/// assert!(reader.file_exists("config.properties"));
/// ```
pub trait ReadAccess: Send + Sync {
    /// Short name of the backing store, used in log messages
    fn name(&self) -> &str;

    /// Whether `path` names an existing file
    fn file_exists(&self, path: &str) -> bool;

    /// Open `path` for reading
    ///
    /// The stream is closed when dropped.
    fn get_file_input_stream(&self, path: &str) -> ReadAccessResult<Box<dyn Read + Send>>;

    /// Read the whole file into memory
    fn read_bytes(&self, path: &str) -> ReadAccessResult<Vec<u8>> {
        let mut input = self.get_file_input_stream(path)?;
        let mut buf = Vec::new();
        input.read_to_end(&mut buf)?;
        Ok(buf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ReadAccessError::NotFound("config.properties".to_string());
        assert_eq!(err.to_string(), "File not found: config.properties");

        let io: ReadAccessError = std::io::Error::new(std::io::ErrorKind::Other, "disk gone").into();
        assert!(matches!(io, ReadAccessError::Io(_)));
        assert!(io.to_string().contains("disk gone"));
    }
}
