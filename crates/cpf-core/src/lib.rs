//! CPF Core
//!
//! Shared building blocks for plugins of the community plugin framework.
//!
//! ## Settings
//!
//! `CpfProperties` reads `config.properties` from the plugin bundle, from the
//! shared `cpf` repository folder and from the plugin's system folder. Each
//! later file overrides the earlier ones.
//!
//! ```rust,no_run
//! use cpf_core::CpfProperties;
//!
//! let settings = CpfProperties::instance();
//! let cache = settings.get_boolean_property("cache.enabled", true);
//! let size = settings.get_int_property("cache.size", 64);
//! ```
//!
//! ## Datasources
//!
//! `create_datasource` maps a type tag such as `"CDA"` to a descriptor.

pub mod logging;
pub mod access;
pub mod environment;
pub mod properties;
pub mod datasources;

// Re-export commonly used types
pub use logging::{Logger, LogLevel, SharedLogger, NoOpLogger, ConsoleLogger, RecordingLogger};

pub use access::{
    ReadAccess, ReadAccessError, ReadAccessResult,
    FileReadAccess, MemoryReadAccess, EmbeddedReadAccess,
    ContentAccessFactory, FileContentAccessFactory,
};

pub use environment::PluginEnvironment;

pub use properties::{
    Properties, PropertiesError, PropertiesResult,
    CpfProperties, PropertySources, PROPERTIES_FILE,
};

pub use datasources::{
    Datasource, DatasourceKind, CdaDatasource,
    create_datasource, supported_datasources,
};
