//! In-memory logger.

use std::fmt::Arguments;

use parking_lot::Mutex;

use crate::log::{LogLevel, Logger};

/// A logger that keeps every message in memory.
///
/// # Example
///
/// ```
/// use coverlayer::log::{CaptureLogger, LogLevel, Logger};
/// use coverlayer::log_warn;
///
/// let logger = CaptureLogger::new();
/// log_warn!(logger, "radius {} ignored", -1);
/// assert!(logger.contains(LogLevel::Warn, "radius -1 ignored"));
/// ```
#[derive(Debug, Default)]
pub struct CaptureLogger {
    entries: Mutex<Vec<(LogLevel, String)>>,
}

impl CaptureLogger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all captured messages, oldest first.
    pub fn entries(&self) -> Vec<(LogLevel, String)> {
        self.entries.lock().clone()
    }

    /// Returns true if a message at `level` contains `needle`.
    pub fn contains(&self, level: LogLevel, needle: &str) -> bool {
        self.entries
            .lock()
            .iter()
            .any(|(l, message)| *l == level && message.contains(needle))
    }

    pub fn clear(&self) {
        self.entries.lock().clear();
    }
}

impl Logger for CaptureLogger {
    fn log(&self, level: LogLevel, args: Arguments<'_>) {
        self.entries.lock().push((level, args.to_string()));
    }
}
