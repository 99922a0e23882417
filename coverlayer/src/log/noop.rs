//! No-operation logger implementation.

use crate::log::{LogLevel, Logger};
use std::fmt::Arguments;

/// A logger that discards all messages.
///
/// # Example
///
/// ```
/// use coverlayer::layer::CoverageLayer;
/// use coverlayer::log::NoOpLogger;
/// use coverlayer::render::RenderConfig;
/// use std::sync::Arc;
///
/// let layer = CoverageLayer::new(RenderConfig::default()).with_logger(Arc::new(NoOpLogger));
/// assert!(!layer.has_data());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpLogger;

impl Logger for NoOpLogger {
    #[inline]
    fn log(&self, _level: LogLevel, _args: Arguments<'_>) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_noop_logger_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<NoOpLogger>();
    }

    #[test]
    fn test_noop_logger_as_trait_object() {
        let logger: Box<dyn Logger> = Box::new(NoOpLogger);
        logger.info(format_args!("dataset swapped"));
        logger.warn(format_args!("render skipped"));
        logger.trace(format_args!("trace message"));
    }
}
