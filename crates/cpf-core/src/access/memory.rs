//! In-memory read access

use std::collections::HashMap;
use std::io::{Cursor, Read};

use parking_lot::RwLock;

use super::traits::{ReadAccess, ReadAccessError, ReadAccessResult};

/// In-memory file map for testing and ephemeral content
///
/// Paths are normalized by stripping a leading `/`.
#[derive(Debug, Default)]
pub struct MemoryReadAccess {
    files: RwLock<HashMap<String, Vec<u8>>>,
}

impl MemoryReadAccess {
    /// Create an empty reader
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a reader holding a single file
    pub fn with_file(path: &str, contents: impl Into<Vec<u8>>) -> Self {
        let reader = Self::new();
        reader.put(path, contents);
        reader
    }

    /// Add or replace a file
    pub fn put(&self, path: &str, contents: impl Into<Vec<u8>>) {
        self.files.write().insert(normalize(path), contents.into());
    }

    /// Remove a file, returning whether it existed
    pub fn remove(&self, path: &str) -> bool {
        self.files.write().remove(&normalize(path)).is_some()
    }

    pub fn len(&self) -> usize {
        self.files.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn normalize(path: &str) -> String {
    path.trim_start_matches('/').to_string()
}

impl ReadAccess for MemoryReadAccess {
    fn name(&self) -> &str {
        "memory"
    }

    fn file_exists(&self, path: &str) -> bool {
        self.files.read().contains_key(&normalize(path))
    }

    fn get_file_input_stream(&self, path: &str) -> ReadAccessResult<Box<dyn Read + Send>> {
        let files = self.files.read();
        files
            .get(&normalize(path))
            .map(|bytes| Box::new(Cursor::new(bytes.clone())) as Box<dyn Read + Send>)
            .ok_or_else(|| ReadAccessError::NotFound(path.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_read_access() {
        let reader = MemoryReadAccess::new();
        assert!(reader.is_empty());
        assert!(!reader.file_exists("config.properties"));

        reader.put("/config.properties", "a=1");
        assert!(reader.file_exists("config.properties"));
        assert_eq!(reader.read_bytes("config.properties").unwrap(), b"a=1");

        // Replace
        reader.put("config.properties", "a=2");
        assert_eq!(reader.len(), 1);
        assert_eq!(reader.read_bytes("/config.properties").unwrap(), b"a=2");

        assert!(reader.remove("config.properties"));
        assert!(!reader.remove("config.properties"));
    }

    #[test]
    fn test_missing_file() {
        let reader = MemoryReadAccess::with_file("a.properties", "x=y");
        assert!(matches!(
            reader.get_file_input_stream("b.properties"),
            Err(ReadAccessError::NotFound(p)) if p == "b.properties"
        ));
    }
}
