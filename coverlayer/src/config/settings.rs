//! Settings structs for all configuration sections.
//!
//! The `[layer]` section maps onto [`RenderConfig`] and the `[index]` section
//! onto [`IndexConfig`]; both are owned by the modules that consume them.
//! Only settings without a home elsewhere live here.

use std::path::PathBuf;

use crate::coord::WebMercator;
use crate::geo_index::IndexConfig;
use crate::render::RenderConfig;

/// Complete configuration loaded from an INI file.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigFile {
    /// Layer appearance (`[layer]`)
    pub render: RenderConfig,
    /// Tile geometry of the host map (`[tiles]`)
    pub tiles: TileSettings,
    /// Spatial index tuning (`[index]`)
    pub index: IndexConfig,
    /// Log output location (`[logging]`)
    pub logging: LoggingSettings,
}

impl ConfigFile {
    /// Web Mercator projection for the configured tile size.
    ///
    /// Hosts hand this to the layer through [`MapHost::projection`], which
    /// makes it the single source of the tile size.
    ///
    /// [`MapHost::projection`]: crate::layer::MapHost::projection
    pub fn projection(&self) -> WebMercator {
        WebMercator::new(self.tiles.tile_size)
    }
}

/// Tile configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileSettings {
    /// Tile edge length in pixels
    pub tile_size: u32,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct LoggingSettings {
    /// Directory for log files
    pub directory: PathBuf,
    /// Log file name inside `directory`
    pub file: String,
}
