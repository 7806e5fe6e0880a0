//! Factories that hand out a plugin's readers

use std::path::{Path, PathBuf};
use std::sync::Arc;

use super::file::FileReadAccess;
use super::traits::ReadAccess;

/// Source of the readers a plugin may use
///
/// Implementations:
/// - `FileContentAccessFactory`: repository and system directories on disk
/// - Host adapters: repository APIs of the hosting server
pub trait ContentAccessFactory: Send + Sync {
    /// Reader rooted at `base_path`, relative to the plugin's repository folder
    fn plugin_repository_reader(&self, base_path: &str) -> Arc<dyn ReadAccess>;

    /// Reader rooted at `base_path`, relative to the plugin's system folder
    fn plugin_system_reader(&self, base_path: &str) -> Arc<dyn ReadAccess>;
}

/// Filesystem layout for one plugin
///
/// # Example
///
/// ```
/// use cpf_core::access::{ContentAccessFactory, FileContentAccessFactory};
///
/// let factory = FileContentAccessFactory::new("/srv/repo/cde", "/srv/system/cde");
/// // Shared settings live next to the plugin folder
/// let shared = factory.plugin_repository_reader("../cpf");
/// ```
#[derive(Debug, Clone)]
pub struct FileContentAccessFactory {
    plugin_repository_dir: PathBuf,
    plugin_system_dir: PathBuf,
}

impl FileContentAccessFactory {
    pub fn new(plugin_repository_dir: impl Into<PathBuf>, plugin_system_dir: impl Into<PathBuf>) -> Self {
        Self {
            plugin_repository_dir: plugin_repository_dir.into(),
            plugin_system_dir: plugin_system_dir.into(),
        }
    }

    pub fn plugin_repository_dir(&self) -> &Path {
        &self.plugin_repository_dir
    }

    pub fn plugin_system_dir(&self) -> &Path {
        &self.plugin_system_dir
    }
}

fn rooted(dir: &Path, base_path: &str) -> PathBuf {
    if base_path.is_empty() {
        dir.to_path_buf()
    } else {
        dir.join(base_path)
    }
}

impl ContentAccessFactory for FileContentAccessFactory {
    fn plugin_repository_reader(&self, base_path: &str) -> Arc<dyn ReadAccess> {
        Arc::new(FileReadAccess::new(rooted(&self.plugin_repository_dir, base_path)))
    }

    fn plugin_system_reader(&self, base_path: &str) -> Arc<dyn ReadAccess> {
        Arc::new(FileReadAccess::new(rooted(&self.plugin_system_dir, base_path)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_repository_reader_sibling_path() {
        let dir = tempdir().unwrap();
        let repo = dir.path().join("repo");
        fs::create_dir_all(repo.join("cde")).unwrap();
        fs::create_dir_all(repo.join("cpf")).unwrap();
        fs::write(repo.join("cpf").join("config.properties"), "shared=1").unwrap();

        let factory = FileContentAccessFactory::new(repo.join("cde"), dir.path().join("system"));
        assert_eq!(factory.plugin_repository_dir(), repo.join("cde").as_path());
        let shared = factory.plugin_repository_reader("../cpf");
        assert!(shared.file_exists("config.properties"));

        let own = factory.plugin_repository_reader("");
        assert!(!own.file_exists("config.properties"));
    }

    #[test]
    fn test_system_reader() {
        let dir = tempdir().unwrap();
        let system = dir.path().join("system").join("cde");
        fs::create_dir_all(&system).unwrap();
        fs::write(system.join("config.properties"), "local=1").unwrap();

        let factory = FileContentAccessFactory::new(dir.path().join("repo"), &system);
        assert_eq!(factory.plugin_system_dir(), system.as_path());

        let reader = factory.plugin_system_reader("");
        assert!(reader.file_exists("config.properties"));
        assert_eq!(reader.read_bytes("config.properties").unwrap(), b"local=1");
    }
}
