//! In-memory logger that keeps what it was told

use parking_lot::Mutex;

use super::traits::{Logger, LogLevel};

/// Logger that records every entry in memory
///
/// Useful in tests that need to assert a warning or error was reported.
#[derive(Debug)]
pub struct RecordingLogger {
    entries: Mutex<Vec<(LogLevel, String)>>,
    debug_enabled: bool,
}

impl Default for RecordingLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordingLogger {
    /// Create a recording logger with debug output on
    pub fn new() -> Self {
        Self::with_debug(true)
    }

    /// Create a recording logger, choosing whether debug entries are kept
    pub fn with_debug(debug_enabled: bool) -> Self {
        Self {
            entries: Mutex::new(Vec::new()),
            debug_enabled,
        }
    }

    /// Snapshot of all recorded entries, oldest first
    pub fn entries(&self) -> Vec<(LogLevel, String)> {
        self.entries.lock().clone()
    }

    /// Messages recorded at exactly `level`
    pub fn messages(&self, level: LogLevel) -> Vec<String> {
        self.entries
            .lock()
            .iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, m)| m.clone())
            .collect()
    }

    /// Whether some entry at `level` contains `needle`
    pub fn contains(&self, level: LogLevel, needle: &str) -> bool {
        self.entries
            .lock()
            .iter()
            .any(|(l, m)| *l == level && m.contains(needle))
    }

    pub fn clear(&self) {
        self.entries.lock().clear();
    }

    fn record(&self, level: LogLevel, message: &str) {
        self.entries.lock().push((level, message.to_string()));
    }
}

impl Logger for RecordingLogger {
    fn debug(&self, message: &str) {
        if self.debug_enabled {
            self.record(LogLevel::Debug, message);
        }
    }

    fn info(&self, message: &str) {
        self.record(LogLevel::Info, message);
    }

    fn warn(&self, message: &str) {
        self.record(LogLevel::Warn, message);
    }

    fn error(&self, message: &str) {
        self.record(LogLevel::Error, message);
    }

    fn is_debug_enabled(&self) -> bool {
        self.debug_enabled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_in_order() {
        let logger = RecordingLogger::new();
        logger.debug("one");
        logger.error("two");

        assert_eq!(logger.entries().len(), 2);
        assert_eq!(logger.messages(LogLevel::Error), vec!["two".to_string()]);
        assert!(logger.contains(LogLevel::Debug, "on"));

        logger.clear();
        assert!(logger.entries().is_empty());
    }

    #[test]
    fn test_debug_disabled_drops_debug() {
        let logger = RecordingLogger::with_debug(false);
        logger.debug("dropped");
        logger.warn("kept");

        assert!(!logger.is_debug_enabled());
        assert_eq!(logger.entries(), vec![(LogLevel::Warn, "kept".to_string())]);
    }
}
