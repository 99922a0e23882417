//! Render error types.

use thiserror::Error;

/// Errors raised while producing tile rasters.
#[derive(Debug, Error)]
pub enum RenderError {
    /// A raster cannot be allocated at this size
    #[error("Invalid tile size: {0} (must be between 1 and 4096)")]
    InvalidTileSize(u32),

    /// PNG encoding failed
    #[error("Failed to encode tile: {0}")]
    Encode(#[from] image::ImageError),
}
