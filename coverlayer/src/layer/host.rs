//! Host map seam.

use crate::coord::Projection;

/// Services a coverage layer needs from the map displaying it.
///
/// # Example
///
/// ```
/// use coverlayer::coord::{Projection, WebMercator};
/// use coverlayer::layer::MapHost;
///
/// struct StaticMap {
///     projection: WebMercator,
/// }
///
/// impl MapHost for StaticMap {
///     fn projection(&self) -> &dyn Projection {
///         &self.projection
///     }
///
///     fn request_redraw(&self) {}
/// }
/// ```
pub trait MapHost: Send + Sync {
    /// Projection between geographic and zoom-level pixel coordinates.
    fn projection(&self) -> &dyn Projection;

    /// Ask the host to re-request every visible tile.
    fn request_redraw(&self);
}
