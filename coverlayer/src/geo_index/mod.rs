//! Spatial index for coverage datasets.
//!
//! The [`SpatialIndex`] is a region quadtree over [`Point`]s keyed by
//! longitude (x) and latitude (y). It answers the renderer's single question:
//! which points fall inside this tile's padded bounding box.
//!
//! # Architecture
//!
//! ```text
//! SpatialIndex (root Region = dataset bounds)
//! ├── SW ── points...
//! ├── SE ─┬─ SW ── points...
//! │       ├── SE
//! │       ├── NW
//! │       └── NE
//! ├── NW ── points...
//! └── NE ── points...
//! ```
//!
//! # Usage
//!
//! ```
//! use coverlayer::geo_index::{Point, Region, SpatialIndex};
//!
//! let mut index = SpatialIndex::build(Region::new(16.0, 48.0, 1.0, 1.0), 6, 6).unwrap();
//! index.insert(Point::new(48.21033, 16.3614).with_radius(80.0));
//!
//! let hits = index.query_range(&Region::new(16.3, 48.2, 0.1, 0.1));
//! assert_eq!(hits.len(), 1);
//! assert!(index.query_range(&Region::new(16.9, 48.9, 0.05, 0.05)).is_empty());
//! ```

mod error;
mod index;
mod point;
mod region;

pub use error::IndexError;
pub use index::{IndexConfig, SpatialIndex, DEFAULT_MAX_DEPTH, DEFAULT_MAX_POINTS_PER_NODE};
pub use point::{IndexedPoint, Point};
pub use region::{Region, PLACEHOLDER_EXTENT};
