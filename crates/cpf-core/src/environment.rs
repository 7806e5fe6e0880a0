//! Process-wide plugin environment
//!
//! Holds the collaborators a plugin needs at runtime: its name, the factory for
//! its content readers and its logger. The environment is installed at most
//! once per process. Code that prefers injection can build a
//! `PluginEnvironment` and pass its parts around directly.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use once_cell::sync::OnceCell;

use crate::access::{ContentAccessFactory, FileContentAccessFactory};
use crate::logging::{ConsoleLogger, SharedLogger};

/// Plugin name used when `CPF_PLUGIN_NAME` is not set
pub const DEFAULT_PLUGIN_NAME: &str = "cpf";

static ENVIRONMENT: OnceCell<PluginEnvironment> = OnceCell::new();

/// Runtime collaborators of one plugin
pub struct PluginEnvironment {
    plugin_name: String,
    repository: Arc<dyn ContentAccessFactory>,
    logger: SharedLogger,
}

impl PluginEnvironment {
    pub fn new(
        plugin_name: impl Into<String>,
        repository: Arc<dyn ContentAccessFactory>,
        logger: SharedLogger,
    ) -> Self {
        Self {
            plugin_name: plugin_name.into(),
            repository,
            logger,
        }
    }

    /// Environment backed by plain directories
    ///
    /// The plugin's repository folder is `<repository_root>/<plugin_name>` and
    /// its system folder is `<system_root>/<plugin_name>`.
    pub fn from_dirs(
        plugin_name: impl Into<String>,
        repository_root: impl AsRef<Path>,
        system_root: impl AsRef<Path>,
        logger: SharedLogger,
    ) -> Self {
        let plugin_name = plugin_name.into();
        let factory = FileContentAccessFactory::new(
            repository_root.as_ref().join(&plugin_name),
            system_root.as_ref().join(&plugin_name),
        );
        Self::new(plugin_name, Arc::new(factory), logger)
    }

    /// Environment described by `CPF_*` variables
    ///
    /// - `CPF_PLUGIN_NAME`: plugin name (default `cpf`)
    /// - `CPF_REPOSITORY_DIR`: repository root (default: current directory)
    /// - `CPF_SYSTEM_DIR`: system root (default: `<config dir>/cpf/system`)
    /// - `CPF_DEBUG`: `1` or `true` enables debug logging
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Like `from_env`, reading variables through `lookup`
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let layout = EnvLayout::read(&lookup);
        Self::from_dirs(
            layout.plugin_name,
            layout.repository_root,
            layout.system_root,
            Arc::new(ConsoleLogger::from_lookup(&lookup)),
        )
    }

    /// Install the process-wide environment
    ///
    /// Fails, handing the environment back, if one is already installed.
    pub fn init(environment: PluginEnvironment) -> Result<(), PluginEnvironment> {
        ENVIRONMENT.set(environment)
    }

    /// The process-wide environment, created from `from_env` on first use
    pub fn current() -> &'static PluginEnvironment {
        ENVIRONMENT.get_or_init(Self::from_env)
    }

    /// Whether an environment has been installed or created yet
    pub fn is_initialized() -> bool {
        ENVIRONMENT.get().is_some()
    }

    pub fn plugin_name(&self) -> &str {
        &self.plugin_name
    }

    /// Factory for this plugin's repository and system readers
    pub fn repository(&self) -> &Arc<dyn ContentAccessFactory> {
        &self.repository
    }

    pub fn logger(&self) -> &SharedLogger {
        &self.logger
    }
}

impl std::fmt::Debug for PluginEnvironment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PluginEnvironment")
            .field("plugin_name", &self.plugin_name)
            .finish_non_exhaustive()
    }
}

/// Plugin name and roots resolved from `CPF_*` variables
#[derive(Debug, Clone, PartialEq, Eq)]
struct EnvLayout {
    plugin_name: String,
    repository_root: PathBuf,
    system_root: PathBuf,
}

impl EnvLayout {
    /// Blank values count as unset
    fn read(lookup: &impl Fn(&str) -> Option<String>) -> Self {
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        Self {
            plugin_name: var("CPF_PLUGIN_NAME").unwrap_or_else(|| DEFAULT_PLUGIN_NAME.to_string()),
            repository_root: var("CPF_REPOSITORY_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(default_repository_root),
            system_root: var("CPF_SYSTEM_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(default_system_root),
        }
    }
}

fn default_repository_root() -> PathBuf {
    std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
}

fn default_system_root() -> PathBuf {
    // XDG config directory on Linux, ~/Library/Application Support on macOS
    let config_dir = dirs::config_dir()
        .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")).join(".config"));
    config_dir.join("cpf").join("system")
}
