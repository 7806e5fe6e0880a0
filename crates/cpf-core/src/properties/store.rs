//! Thread-safe properties map

use std::collections::HashMap;
use std::io::Read;

use parking_lot::RwLock;

use super::error::PropertiesResult;
use super::parser;

/// String-to-string map that properties files are loaded into
///
/// Every `load` writes its pairs over whatever is already present, so the most
/// recently loaded file wins for duplicate keys.
///
/// # Example
///
/// ```
/// use cpf_core::properties::Properties;
///
/// let props = Properties::new();
/// props.load_str("a=1\nb=2").unwrap();
/// props.load_str("b=3").unwrap();
/// assert_eq!(props.get_property("b"), Some("3".to_string()));
/// ```
#[derive(Debug, Default)]
pub struct Properties {
    entries: RwLock<HashMap<String, String>>,
}

impl Properties {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store with initial values
    pub fn with_entries(initial: HashMap<String, String>) -> Self {
        Self {
            entries: RwLock::new(initial),
        }
    }

    /// Read a properties stream to the end and merge it in
    ///
    /// If the stream fails partway, the lines read completely before the
    /// failure are merged and the read error is returned. Malformed text
    /// merges nothing. The reader is consumed and dropped before returning.
    pub fn load(&self, mut input: impl Read) -> PropertiesResult<usize> {
        let mut bytes = Vec::new();
        let read = input.read_to_end(&mut bytes);
        drop(input);

        match read {
            Ok(_) => Ok(self.merge(parser::parse_bytes(&bytes)?)),
            Err(e) => {
                // The read error is the one reported, even if the partial text is malformed
                if let Ok(pairs) = parser::parse_truncated_bytes(&bytes) {
                    self.merge(pairs);
                }
                Err(e.into())
            }
        }
    }

    /// Merge properties text
    pub fn load_str(&self, text: &str) -> PropertiesResult<usize> {
        Ok(self.merge(parser::parse(text)?))
    }

    fn merge(&self, pairs: Vec<(String, String)>) -> usize {
        let count = pairs.len();
        self.entries.write().extend(pairs);
        count
    }

    pub fn get_property(&self, key: &str) -> Option<String> {
        self.entries.read().get(key).cloned()
    }

    /// Value for `key`, or `default` when absent
    pub fn get_property_or(&self, key: &str, default: &str) -> String {
        self.get_property(key).unwrap_or_else(|| default.to_string())
    }

    /// Set a value, returning the previous one
    pub fn set_property(&self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.entries.write().insert(key.into(), value.into())
    }

    pub fn remove_property(&self, key: &str) -> Option<String> {
        self.entries.write().remove(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.read().contains_key(key)
    }

    /// All keys, sorted
    pub fn keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.entries.read().keys().cloned().collect();
        keys.sort();
        keys
    }

    /// Copy of all entries
    pub fn snapshot(&self) -> HashMap<String, String> {
        self.entries.read().clone()
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.entries.write().clear();
    }
}
