//! Coverage layer composition.
//!
//! [`CoverageLayer`] ties a dataset's spatial index and a [`RenderConfig`]
//! to a host map reached through the [`MapHost`] trait. The host supplies the
//! projection and receives redraw requests; the layer answers tile requests.
//!
//! ```text
//! host ──create_tile──▶ CoverageLayer ──render_tile──▶ RasterSurface
//!   ▲                     │  config (RwLock)
//!   └──request_redraw─────┤  index  (RwLock<Option<Arc<..>>>)
//!                         └─ logger (Arc<dyn Logger>)
//! ```
//!
//! [`RenderConfig`]: crate::render::RenderConfig

mod coverage;
mod error;
mod host;

pub use coverage::CoverageLayer;
pub use error::LayerError;
pub use host::MapHost;
