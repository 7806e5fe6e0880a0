//! Read access to plugin content
//!
//! Settings never open files directly. They go through a `ReadAccess`, which
//! can be backed by:
//! - `FileReadAccess`: a directory on disk
//! - `MemoryReadAccess`: an in-memory map, for tests
//! - `EmbeddedReadAccess`: resources compiled into the plugin
//!
//! A `ContentAccessFactory` hands out the readers a plugin is allowed to see.

mod traits;
mod file;
mod memory;
mod embedded;
mod factory;

pub use traits::{ReadAccess, ReadAccessError, ReadAccessResult};
pub use file::FileReadAccess;
pub use memory::MemoryReadAccess;
pub use embedded::EmbeddedReadAccess;
pub use factory::{ContentAccessFactory, FileContentAccessFactory};
