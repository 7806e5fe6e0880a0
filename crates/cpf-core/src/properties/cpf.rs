//! Layered CPF settings
//!
//! Settings come from up to three `config.properties` files, loaded in order:
//! 1. the copy bundled with the plugin
//! 2. the shared copy in the repository's `cpf` folder
//! 3. the plugin's own copy in its system folder
//!
//! Later files override earlier ones key by key. Missing files are skipped.
//! A read failure is logged, stops the sequence and keeps whatever was loaded
//! before it.

use std::sync::Arc;

use once_cell::sync::OnceCell;

use crate::access::{ContentAccessFactory, EmbeddedReadAccess, ReadAccess};
use crate::environment::PluginEnvironment;
use crate::logging::SharedLogger;
use crate::{log_debug, log_error};

use super::error::PropertiesResult;
use super::store::Properties;

/// Name of the settings file looked up in every location
pub const PROPERTIES_FILE: &str = "config.properties";

/// Repository path of the shared CPF folder, relative to the plugin's folder
const SHARED_SETTINGS_PATH: &str = "../cpf";

static INSTANCE: OnceCell<CpfProperties> = OnceCell::new();

/// The three locations settings are read from, lowest priority first
#[derive(Clone)]
pub struct PropertySources {
    /// Settings shipped inside the plugin
    pub bundled: Arc<dyn ReadAccess>,
    /// Settings shared by every CPF plugin
    pub global: Arc<dyn ReadAccess>,
    /// Settings for this plugin only
    pub plugin: Arc<dyn ReadAccess>,
}

impl PropertySources {
    pub fn new(bundled: Arc<dyn ReadAccess>, global: Arc<dyn ReadAccess>, plugin: Arc<dyn ReadAccess>) -> Self {
        Self { bundled, global, plugin }
    }

    /// Standard locations for a plugin
    pub fn from_factory(factory: &dyn ContentAccessFactory) -> Self {
        Self {
            bundled: Arc::new(EmbeddedReadAccess::bundled()),
            global: factory.plugin_repository_reader(SHARED_SETTINGS_PATH),
            plugin: factory.plugin_system_reader(""),
        }
    }
}

impl std::fmt::Debug for PropertySources {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PropertySources")
            .field("bundled", &self.bundled.name())
            .field("global", &self.global.name())
            .field("plugin", &self.plugin.name())
            .finish()
    }
}

/// Plugin settings with typed accessors
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use cpf_core::access::MemoryReadAccess;
/// use cpf_core::logging::NoOpLogger;
/// use cpf_core::properties::{CpfProperties, PropertySources};
///
/// let sources = PropertySources::new(
///     Arc::new(MemoryReadAccess::with_file("config.properties", "cache.enabled=true")),
///     Arc::new(MemoryReadAccess::new()),
///     Arc::new(MemoryReadAccess::with_file("config.properties", "cache.size=64")),
/// );
/// let settings = CpfProperties::from_sources(&sources, Arc::new(NoOpLogger::new()));
///
/// assert!(settings.get_boolean_property("cache.enabled", false));
/// assert_eq!(settings.get_int_property("cache.size", 16), 64);
/// ```
pub struct CpfProperties {
    properties: Properties,
    logger: SharedLogger,
}

impl CpfProperties {
    /// Process-wide settings, loaded from `PluginEnvironment::current()` on first use
    ///
    /// Concurrent first callers block until the single load finishes.
    pub fn instance() -> &'static CpfProperties {
        INSTANCE.get_or_init(|| {
            let environment = PluginEnvironment::current();
            Self::new(environment.repository().as_ref(), Arc::clone(environment.logger()))
        })
    }

    /// Load settings from the standard locations of a plugin
    pub fn new(factory: &dyn ContentAccessFactory, logger: SharedLogger) -> Self {
        Self::from_sources(&PropertySources::from_factory(factory), logger)
    }

    /// Load settings from explicit locations
    pub fn from_sources(sources: &PropertySources, logger: SharedLogger) -> Self {
        let settings = Self {
            properties: Properties::new(),
            logger,
        };
        settings.load_settings(sources);
        settings
    }

    fn load_settings(&self, sources: &PropertySources) {
        if let Err(e) = self.try_load_settings(sources) {
            log_error!(self.logger, "Failed to read CPF settings: {}", e);
        }
    }

    fn try_load_settings(&self, sources: &PropertySources) -> PropertiesResult<()> {
        // Should always be there
        if !self.load_properties(sources.bundled.as_ref(), PROPERTIES_FILE)? {
            self.logger.warn("No CPF base settings.");
        }

        if !self.load_properties(sources.global.as_ref(), PROPERTIES_FILE)? {
            log_debug!(self.logger, "No global CPF settings.");
        }

        if !self.load_properties(sources.plugin.as_ref(), PROPERTIES_FILE)? {
            log_debug!(self.logger, "No plugin-specific CPF settings.");
        }

        Ok(())
    }

    /// Merge `file_name` from `location`; `false` if it does not exist
    fn load_properties(&self, location: &dyn ReadAccess, file_name: &str) -> PropertiesResult<bool> {
        if !location.file_exists(file_name) {
            return Ok(false);
        }
        let input = location.get_file_input_stream(file_name)?;
        let count = self.properties.load(input)?;
        log_debug!(self.logger, "Loaded {} CPF settings from {} {}", count, location.name(), file_name);
        Ok(true)
    }

    /// The underlying properties map
    pub fn properties(&self) -> &Properties {
        &self.properties
    }

    pub fn get_property(&self, key: &str) -> Option<String> {
        self.properties.get_property(key)
    }

    pub fn get_property_or(&self, key: &str, default: &str) -> String {
        self.properties.get_property_or(key, default)
    }

    /// Override a value at runtime, returning the previous one
    pub fn set_property(&self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.properties.set_property(key, value)
    }

    /// Value of a non-empty property, `None` for absent or empty
    fn non_empty(&self, key: &str) -> Option<String> {
        self.properties.get_property(key).filter(|v| !v.is_empty())
    }

    /// Lenient boolean: only `true` (any case) is true, any other non-empty value is false
    pub fn get_boolean_property(&self, key: &str, default: bool) -> bool {
        match self.non_empty(key) {
            Some(value) => value.eq_ignore_ascii_case("true"),
            None => default,
        }
    }

    /// Integer value, or `default` when absent, empty or not a valid `i32`
    pub fn get_int_property(&self, key: &str, default: i32) -> i32 {
        if let Some(value) = self.non_empty(key) {
            match value.parse::<i32>() {
                Ok(parsed) => return parsed,
                Err(_) => log_error!(self.logger, "getIntProperty: {} is not a valid int value.", key),
            }
        }
        default
    }

    /// Long value, or `default` when absent, empty or not a valid `i64`
    pub fn get_long_property(&self, key: &str, default: i64) -> i64 {
        if let Some(value) = self.non_empty(key) {
            match value.parse::<i64>() {
                Ok(parsed) => return parsed,
                Err(_) => log_error!(self.logger, "getLongProperty: {} is not a valid long value.", key),
            }
        }
        default
    }
}

impl std::fmt::Debug for CpfProperties {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CpfProperties")
            .field("properties", &self.properties.len())
            .finish()
    }
}
