//! Console logger implementation

use super::traits::Logger;

/// A logger that outputs to the console (stdout/stderr)
#[derive(Debug, Clone)]
pub struct ConsoleLogger {
    prefix: String,
    debug_enabled: bool,
}

impl Default for ConsoleLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsoleLogger {
    /// Create a console logger with the `[CPF]` prefix and debug output off
    pub fn new() -> Self {
        Self {
            prefix: "[CPF]".to_string(),
            debug_enabled: false,
        }
    }

    /// Create a console logger with a custom prefix
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            ..Self::new()
        }
    }

    /// Create a console logger whose debug output follows `CPF_DEBUG`
    ///
    /// `1` or `true` (any case) turns debug output on.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Like `from_env`, reading variables through `lookup`
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let debug_enabled = lookup("CPF_DEBUG")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);
        Self::new().with_debug(debug_enabled)
    }

    /// Turn debug output on or off
    pub fn with_debug(mut self, enabled: bool) -> Self {
        self.debug_enabled = enabled;
        self
    }
}

impl Logger for ConsoleLogger {
    fn debug(&self, message: &str) {
        if self.debug_enabled {
            eprintln!("{} DEBUG: {}", self.prefix, message);
        }
    }

    fn info(&self, message: &str) {
        println!("{} INFO: {}", self.prefix, message);
    }

    fn warn(&self, message: &str) {
        eprintln!("{} WARN: {}", self.prefix, message);
    }

    fn error(&self, message: &str) {
        eprintln!("{} ERROR: {}", self.prefix, message);
    }

    fn is_debug_enabled(&self) -> bool {
        self.debug_enabled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_console_logger_creation() {
        let logger = ConsoleLogger::new();
        assert_eq!(logger.prefix, "[CPF]");
        assert!(!logger.is_debug_enabled());

        let custom = ConsoleLogger::with_prefix("[cde]").with_debug(true);
        assert_eq!(custom.prefix, "[cde]");
        assert!(custom.is_debug_enabled());
    }

    #[test]
    fn test_debug_flag_from_lookup() {
        for on in ["1", "true", "TRUE", "True"] {
            let logger = ConsoleLogger::from_lookup(|name| (name == "CPF_DEBUG").then(|| on.to_string()));
            assert!(logger.is_debug_enabled(), "CPF_DEBUG={on}");
        }

        for off in ["0", "false", "yes", "", " true"] {
            let logger = ConsoleLogger::from_lookup(|name| (name == "CPF_DEBUG").then(|| off.to_string()));
            assert!(!logger.is_debug_enabled(), "CPF_DEBUG={off}");
        }

        assert!(!ConsoleLogger::from_lookup(|_| None).is_debug_enabled());
    }

    #[test]
    fn test_console_logger_logs() {
        // Only checks that nothing panics
        let logger = ConsoleLogger::new().with_debug(true);
        logger.debug("debug message");
        logger.info("info message");
        logger.warn("warn message");
        logger.error("error message");
    }
}
