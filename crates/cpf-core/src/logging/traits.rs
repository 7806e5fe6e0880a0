//! Logger trait definition

use std::sync::Arc;

/// Log levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LogLevel {
    Debug = 1,
    Info = 2,
    Warn = 3,
    Error = 4,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogLevel::Debug => write!(f, "DEBUG"),
            LogLevel::Info => write!(f, "INFO"),
            LogLevel::Warn => write!(f, "WARN"),
            LogLevel::Error => write!(f, "ERROR"),
        }
    }
}

/// Leveled log output, injected into anything that needs to report
///
/// Implementations:
/// - `NoOpLogger`: Silent logger
/// - `ConsoleLogger`: Logs to stdout/stderr
/// - `RecordingLogger`: Keeps entries in memory for assertions
pub trait Logger: Send + Sync {
    /// Log a debug message
    fn debug(&self, message: &str);

    /// Log an info message
    fn info(&self, message: &str);

    /// Log a warning message
    fn warn(&self, message: &str);

    /// Log an error message
    fn error(&self, message: &str);

    /// Whether debug output is wanted at all
    ///
    /// Callers check this before building debug-only messages.
    fn is_debug_enabled(&self) -> bool {
        true
    }

    /// Log at the given level
    fn log(&self, level: LogLevel, message: &str) {
        match level {
            LogLevel::Debug => self.debug(message),
            LogLevel::Info => self.info(message),
            LogLevel::Warn => self.warn(message),
            LogLevel::Error => self.error(message),
        }
    }
}

/// Type alias for an Arc-wrapped logger
pub type SharedLogger = Arc<dyn Logger>;

/// Extension trait for logging with format arguments
pub trait LoggerExt: Logger {
    fn debug_fmt(&self, args: std::fmt::Arguments<'_>) {
        if self.is_debug_enabled() {
            self.debug(&args.to_string());
        }
    }

    fn info_fmt(&self, args: std::fmt::Arguments<'_>) {
        self.info(&args.to_string());
    }

    fn warn_fmt(&self, args: std::fmt::Arguments<'_>) {
        self.warn(&args.to_string());
    }

    fn error_fmt(&self, args: std::fmt::Arguments<'_>) {
        self.error(&args.to_string());
    }
}

impl<T: Logger + ?Sized> LoggerExt for T {}

/// Convenience macros for logging
#[macro_export]
macro_rules! log_debug {
    ($logger:expr, $($arg:tt)*) => {
        {
            let logger = &$logger;
            if logger.is_debug_enabled() {
                logger.debug(&format!($($arg)*));
            }
        }
    };
}

#[macro_export]
macro_rules! log_info {
    ($logger:expr, $($arg:tt)*) => {
        $logger.info(&format!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_warn {
    ($logger:expr, $($arg:tt)*) => {
        $logger.warn(&format!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_error {
    ($logger:expr, $($arg:tt)*) => {
        $logger.error(&format!($($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::RecordingLogger;

    #[test]
    fn test_log_levels_ordered() {
        assert!(LogLevel::Info > LogLevel::Debug);
        assert!(LogLevel::Warn > LogLevel::Info);
        assert!(LogLevel::Error > LogLevel::Warn);
        assert_eq!(LogLevel::Warn.to_string(), "WARN");
    }

    #[test]
    fn test_log_dispatches_by_level() {
        let logger = RecordingLogger::new();
        logger.log(LogLevel::Warn, "careful");
        logger.log(LogLevel::Error, "broken");

        assert_eq!(
            logger.entries(),
            vec![
                (LogLevel::Warn, "careful".to_string()),
                (LogLevel::Error, "broken".to_string()),
            ]
        );
    }

    #[test]
    fn test_macros_format() {
        let logger: SharedLogger = Arc::new(RecordingLogger::new());
        log_error!(logger, "{} is not a valid {} value.", "n", "int");
        log_debug!(logger, "loaded {}", 3);

        let recording = RecordingLogger::new();
        log_warn!(recording, "missing {}", "config.properties");
        assert!(recording.contains(LogLevel::Warn, "missing config.properties"));
    }

    #[test]
    fn test_debug_fmt_respects_debug_flag() {
        let logger = RecordingLogger::with_debug(false);
        logger.debug_fmt(format_args!("hidden"));
        logger.info_fmt(format_args!("shown"));

        assert_eq!(logger.entries(), vec![(LogLevel::Info, "shown".to_string())]);
    }
}
