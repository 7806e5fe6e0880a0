//! Read access over resources compiled into the plugin

use std::io::{Cursor, Read};

use super::traits::{ReadAccess, ReadAccessError, ReadAccessResult};

/// Base settings shipped with the crate
const BUNDLED_CONFIG: &[u8] = include_bytes!("../../resources/config.properties");

/// Read-only set of static resources
///
/// The equivalent of reading from the plugin's own archive: contents are fixed
/// at build time.
#[derive(Debug, Clone, Default)]
pub struct EmbeddedReadAccess {
    resources: Vec<(&'static str, &'static [u8])>,
}

impl EmbeddedReadAccess {
    /// Create a reader over the given `(path, contents)` pairs
    pub fn new(resources: Vec<(&'static str, &'static [u8])>) -> Self {
        Self { resources }
    }

    /// Reader over the resources bundled with this crate
    pub fn bundled() -> Self {
        Self::new(vec![("config.properties", BUNDLED_CONFIG)])
    }

    fn find(&self, path: &str) -> Option<&'static [u8]> {
        let path = path.trim_start_matches('/');
        self.resources
            .iter()
            .find(|(name, _)| *name == path)
            .map(|(_, contents)| *contents)
    }
}

impl ReadAccess for EmbeddedReadAccess {
    fn name(&self) -> &str {
        "embedded"
    }

    fn file_exists(&self, path: &str) -> bool {
        self.find(path).is_some()
    }

    fn get_file_input_stream(&self, path: &str) -> ReadAccessResult<Box<dyn Read + Send>> {
        self.find(path)
            .map(|contents| Box::new(Cursor::new(contents)) as Box<dyn Read + Send>)
            .ok_or_else(|| ReadAccessError::NotFound(path.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_config_present() {
        let reader = EmbeddedReadAccess::bundled();
        assert!(reader.file_exists("config.properties"));
        assert!(reader.file_exists("/config.properties"));
        assert!(!reader.file_exists("other.properties"));

        let bytes = reader.read_bytes("config.properties").unwrap();
        assert_eq!(bytes, BUNDLED_CONFIG);
    }

    #[test]
    fn test_custom_resources() {
        let reader = EmbeddedReadAccess::new(vec![("a.properties", b"a=1".as_slice())]);
        assert_eq!(reader.read_bytes("a.properties").unwrap(), b"a=1");
        assert!(matches!(
            reader.get_file_input_stream("b.properties"),
            Err(ReadAccessError::NotFound(_))
        ));

        let empty = EmbeddedReadAccess::default();
        assert!(!empty.file_exists("config.properties"));
    }
}
