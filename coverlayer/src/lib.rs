//! coverlayer - Tiled coverage overlays for geographic point datasets
//!
//! Renders, for every map tile a host asks for, circles around the dataset
//! points near that tile. Circles are either cut out of a solid layer (mask
//! mode, showing uncovered areas) or painted onto a transparent tile (stamp
//! mode, showing covered areas). Radii are given in pixels or in meters.
//!
//! # Modules
//!
//! - [`coord`]: geographic and pixel coordinates, the [`coord::Projection`] seam
//! - [`geo_index`]: region quadtree answering "which points are near this tile"
//! - [`dataset`]: validated point datasets and their JSON input forms
//! - [`render`]: per-tile rendering onto a [`render::RasterSurface`]
//! - [`layer`]: [`layer::CoverageLayer`], binding data and appearance to a host map
//! - [`config`]: INI configuration file
//! - [`log`], [`logging`]: logger abstraction and subscriber setup
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use coverlayer::coord::{Projection, TileCoord, WebMercator};
//! use coverlayer::layer::{CoverageLayer, MapHost};
//! use coverlayer::render::{MaskMode, RenderConfig};
//!
//! struct Map(WebMercator);
//!
//! impl MapHost for Map {
//!     fn projection(&self) -> &dyn Projection {
//!         &self.0
//!     }
//!     fn request_redraw(&self) {}
//! }
//!
//! let layer = CoverageLayer::new(RenderConfig::default().with_mode(MaskMode::Stamp));
//! layer.attach(Arc::new(Map(WebMercator::default())));
//! layer.set_data_json("[[48.21033, 16.3614, 80]]").unwrap();
//!
//! let tile = layer.create_tile(&TileCoord::new(17873, 11361, 15)).unwrap();
//! let png = tile.encode_png().unwrap();
//! assert!(!png.is_empty());
//! ```

pub mod config;
pub mod coord;
pub mod dataset;
pub mod geo_index;
pub mod layer;
pub mod log;
pub mod logging;
pub mod render;

/// Version of the coverlayer library.
///
/// The version is defined in `Cargo.toml` and injected at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
