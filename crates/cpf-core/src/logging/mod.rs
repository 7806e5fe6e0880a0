//! Logging abstractions
//!
//! Loading code never talks to a concrete sink; it receives a `Logger`.

mod traits;
mod noop;
mod console;
mod recording;

pub use traits::{Logger, LoggerExt, LogLevel, SharedLogger};
pub use noop::NoOpLogger;
pub use console::ConsoleLogger;
pub use recording::RecordingLogger;
