//! Tracing library adapter implementation.

use crate::log::{LogLevel, Logger};
use std::fmt::Arguments;

/// Logger implementation that delegates to the `tracing` crate.
///
/// Messages land on the `coverlayer::log` target, so they can be filtered
/// separately from the library's internal `tracing` events with
/// `RUST_LOG=coverlayer::log=debug`.
///
/// # Example
///
/// ```ignore
/// use coverlayer::log::{Logger, TracingLogger};
/// use std::sync::Arc;
///
/// // Assumes a tracing subscriber is already initialized
/// let logger: Arc<dyn Logger> = Arc::new(TracingLogger);
/// logger.info(format_args!("Coverage layer attached"));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl TracingLogger {
    pub fn new() -> Self {
        Self
    }
}

impl Logger for TracingLogger {
    fn log(&self, level: LogLevel, args: Arguments<'_>) {
        match level {
            LogLevel::Trace => tracing::trace!(target: "coverlayer::log", "{}", args),
            LogLevel::Debug => tracing::debug!(target: "coverlayer::log", "{}", args),
            LogLevel::Info => tracing::info!(target: "coverlayer::log", "{}", args),
            LogLevel::Warn => tracing::warn!(target: "coverlayer::log", "{}", args),
            LogLevel::Error => tracing::error!(target: "coverlayer::log", "{}", args),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tracing_logger_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<TracingLogger>();
    }

    #[test]
    fn test_tracing_logger_as_trait_object() {
        // No subscriber installed; calls must still be harmless
        let logger: Box<dyn Logger> = Box::new(TracingLogger::new());
        logger.info(format_args!("test info"));
        logger.debug(format_args!("test debug"));
    }
}
