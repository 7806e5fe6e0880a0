//! Properties files and layered CPF settings
//!
//! - `parser`: the `.properties` text format
//! - `Properties`: a thread-safe string map that files are loaded into
//! - `CpfProperties`: the plugin's settings, loaded from several locations

pub mod parser;
mod error;
mod store;
mod cpf;

pub use error::{PropertiesError, PropertiesResult};
pub use store::Properties;
pub use cpf::{CpfProperties, PropertySources, PROPERTIES_FILE};
