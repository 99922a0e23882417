//! Default values and constants for all configuration settings.
//!
//! Contains all `DEFAULT_*` constants, range limits, clamping helpers,
//! and the `ConfigFile::default()` implementation.

use std::path::PathBuf;

use super::settings::*;
use crate::geo_index::IndexConfig;
use crate::render::RenderConfig;

// =============================================================================
// Layer defaults
// =============================================================================

/// Default circle radius (meters when absolute, pixels otherwise).
pub const DEFAULT_RADIUS: f64 = 5.0;

/// Radius is interpreted in meters by default.
pub const DEFAULT_USE_ABSOLUTE_RADIUS: bool = true;

/// Default fill color (`#000`).
pub const DEFAULT_COLOR: &str = "#000";

/// Default layer opacity.
pub const DEFAULT_OPACITY: f32 = 0.5;

/// Default outline stroke width in pixels.
pub const DEFAULT_OUTLINE_WIDTH: f32 = 1.0;

// =============================================================================
// Tile defaults
// =============================================================================

/// Default tile edge length in pixels.
pub const DEFAULT_TILE_SIZE: u32 = crate::coord::DEFAULT_TILE_SIZE;

/// Largest accepted tile edge length.
pub const MAX_TILE_SIZE: u32 = 4096;

// =============================================================================
// Logging defaults
// =============================================================================

/// Default log directory.
pub const DEFAULT_LOG_DIRECTORY: &str = "logs";

/// Default log file name.
pub const DEFAULT_LOG_FILE: &str = "coverlayer.log";

// =============================================================================
// Helpers
// =============================================================================

/// Clamps opacity to `0.0..=1.0` and logs a warning if clamped.
pub(super) fn clamp_opacity(value: f32) -> f32 {
    if value < 0.0 {
        tracing::warn!(requested = value, "opacity below 0.0, clamping to 0.0");
        0.0
    } else if value > 1.0 {
        tracing::warn!(requested = value, "opacity above 1.0, clamping to 1.0");
        1.0
    } else {
        value
    }
}

impl Default for ConfigFile {
    fn default() -> Self {
        Self {
            render: RenderConfig::default(),
            tiles: TileSettings {
                tile_size: DEFAULT_TILE_SIZE,
            },
            index: IndexConfig::default(),
            logging: LoggingSettings {
                directory: PathBuf::from(DEFAULT_LOG_DIRECTORY),
                file: DEFAULT_LOG_FILE.to_string(),
            },
        }
    }
}
