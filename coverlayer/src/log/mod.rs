//! Logging abstraction layer.
//!
//! Components that report operational events (dataset swaps, redraw requests,
//! skipped renders) log through the [`Logger`] trait instead of calling
//! `tracing` directly, so hosts can route or silence layer messages.
//!
//! # Architecture
//!
//! - `Logger` trait: the interface components log through
//! - `TracingLogger`: production adapter that delegates to the `tracing` crate
//! - `NoOpLogger`: silent logger for tests and benchmarks
//! - `CaptureLogger`: keeps messages in memory so tests can assert on them
//!
//! # Usage
//!
//! ```
//! use coverlayer::log::{Logger, NoOpLogger};
//! use coverlayer::{log_debug, log_info};
//! use std::sync::Arc;
//!
//! struct TileCache {
//!     logger: Arc<dyn Logger>,
//! }
//!
//! impl TileCache {
//!     fn evict(&self, tiles: usize) {
//!         log_info!(self.logger, "Evicting {} tiles", tiles);
//!         log_debug!(self.logger, "Eviction done");
//!     }
//! }
//!
//! TileCache { logger: Arc::new(NoOpLogger) }.evict(3);
//! ```

mod capture;
mod noop;
mod tracing_adapter;
mod r#trait;

pub use capture::CaptureLogger;
pub use noop::NoOpLogger;
pub use r#trait::{LogLevel, Logger};
pub use tracing_adapter::TracingLogger;
