//! Filesystem-backed read access

use std::fs::File;
use std::io::Read;
use std::path::PathBuf;

use super::traits::{ReadAccess, ReadAccessError, ReadAccessResult};

/// Reads files below a root directory
///
/// The root does not need to exist; every lookup under a missing root simply
/// reports the file as absent.
#[derive(Debug, Clone)]
pub struct FileReadAccess {
    root: PathBuf,
}

impl FileReadAccess {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Full path for a path relative to the root
    pub fn resolve(&self, path: &str) -> PathBuf {
        let relative = path.trim_start_matches('/');
        if relative.is_empty() {
            self.root.clone()
        } else {
            self.root.join(relative)
        }
    }
}

impl ReadAccess for FileReadAccess {
    fn name(&self) -> &str {
        "file"
    }

    fn file_exists(&self, path: &str) -> bool {
        self.resolve(path).is_file()
    }

    fn get_file_input_stream(&self, path: &str) -> ReadAccessResult<Box<dyn Read + Send>> {
        let full = self.resolve(path);
        if full.is_dir() {
            return Err(ReadAccessError::Other(format!("{} is a directory", full.display())));
        }
        match File::open(&full) {
            Ok(file) => Ok(Box::new(file)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(ReadAccessError::NotFound(full.display().to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }
}
