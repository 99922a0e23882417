//! Coverage tile rendering.
//!
//! Turns the points near a tile into circles on a [`RasterSurface`], either
//! cut out of a solid background ([`MaskMode::Mask`]) or painted onto a
//! transparent tile ([`MaskMode::Stamp`]). Radii are given in pixels or in
//! meters; meter radii are re-projected for every tile so ground coverage
//! stays constant across zoom levels.
//!
//! # Example
//!
//! ```
//! use coverlayer::coord::{TileCoord, WebMercator};
//! use coverlayer::dataset::Dataset;
//! use coverlayer::geo_index::IndexConfig;
//! use coverlayer::render::{render_tile, RasterTile, RenderConfig};
//!
//! let dataset = Dataset::from_json("[[0.0, 0.0]]").unwrap();
//! let index = dataset.build_index(&IndexConfig::default()).unwrap();
//! let config = RenderConfig::default().with_absolute_radius(false).with_radius(20.0);
//!
//! let mut tile = RasterTile::new(256).unwrap();
//! render_tile(&TileCoord::new(0, 0, 0), &config, Some(&index), &WebMercator::default(), &mut tile);
//!
//! // A hole at the point, mask everywhere else
//! assert_eq!(tile.pixel(128, 128).unwrap().a, 0);
//! assert_eq!(tile.pixel(10, 10).unwrap().a, 128);
//! ```

mod color;
mod config;
mod debug;
mod error;
mod radius;
mod raster;
mod renderer;
mod surface;

pub use color::{ParseColorError, Rgba};
pub use config::{MaskMode, RenderConfig};
pub use debug::{debug_label, draw_debug_overlay, DEBUG_COLOR};
pub use error::RenderError;
pub use radius::{meters_to_pixel_radius, EARTH_CIRCUMFERENCE_METERS, MIN_PIXEL_RADIUS};
pub use raster::RasterTile;
pub use renderer::render_tile;
pub use surface::{CompositeMode, RasterSurface};
