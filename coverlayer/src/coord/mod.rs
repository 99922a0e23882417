//! Coordinate conversion module
//!
//! Provides the geographic and pixel coordinate types shared by the index and
//! the renderer, plus the [`Projection`] seam through which the host map
//! converts between them. [`WebMercator`] is the standard spherical Mercator
//! projection used by Slippy Map tile pyramids.

mod types;

pub use types::{
    GeoBounds, LatLng, PixelPoint, TileCoord, DEFAULT_TILE_SIZE, MAX_LAT, MAX_LON, MIN_LAT,
    MIN_LON,
};

use std::f64::consts::PI;

/// Converts between geographic coordinates and zoom-level pixel space.
///
/// This is the host map's projection service. Implementations must be pure:
/// the same input always projects to the same output.
pub trait Projection: Send + Sync {
    /// Project a geographic position to pixel space at `zoom`.
    fn project(&self, location: LatLng, zoom: u8) -> PixelPoint;

    /// Inverse of [`Projection::project`].
    fn unproject(&self, pixel: PixelPoint, zoom: u8) -> LatLng;

    /// Edge length of one tile in pixels. Tiles are rendered at this size.
    fn tile_size(&self) -> u32;
}

/// Spherical Web Mercator projection.
///
/// The world at zoom `z` is `tile_size * 2^z` pixels square. Latitudes beyond
/// [`MAX_LAT`] are clamped, matching common web map behaviour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WebMercator {
    tile_size: u32,
}

impl WebMercator {
    /// Create a projection for tiles of `tile_size` pixels.
    pub fn new(tile_size: u32) -> Self {
        Self { tile_size }
    }

    /// Edge length of the whole world in pixels at `zoom`.
    #[inline]
    pub fn world_size(&self, zoom: u8) -> f64 {
        self.tile_size as f64 * 2.0_f64.powi(zoom as i32)
    }
}

impl Default for WebMercator {
    fn default() -> Self {
        Self::new(DEFAULT_TILE_SIZE)
    }
}

impl Projection for WebMercator {
    #[inline]
    fn project(&self, location: LatLng, zoom: u8) -> PixelPoint {
        let size = self.world_size(zoom);
        let lat = location.lat.clamp(MIN_LAT, MAX_LAT);

        let x = (location.lng + 180.0) / 360.0 * size;

        let sin_lat = (lat * PI / 180.0).sin();
        let y = (0.5 - ((1.0 + sin_lat) / (1.0 - sin_lat)).ln() / (4.0 * PI)) * size;

        PixelPoint::new(x, y)
    }

    #[inline]
    fn unproject(&self, pixel: PixelPoint, zoom: u8) -> LatLng {
        let size = self.world_size(zoom);

        let lng = pixel.x / size * 360.0 - 180.0;

        // Inverse Web Mercator
        let y = pixel.y / size;
        let lat_rad = (PI * (1.0 - 2.0 * y)).sinh().atan();

        LatLng::new(lat_rad * 180.0 / PI, lng)
    }

    fn tile_size(&self) -> u32 {
        self.tile_size
    }
}
