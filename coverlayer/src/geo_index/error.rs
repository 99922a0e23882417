//! Error types for spatial index construction.

use thiserror::Error;

/// Errors returned when building a [`SpatialIndex`](super::SpatialIndex).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum IndexError {
    /// Root region has no usable area
    #[error("Invalid index region: width={width}, height={height} (both must be positive)")]
    InvalidRegion { width: f64, height: f64 },

    /// Node capacity of zero would subdivide forever
    #[error("Invalid node capacity: {0} (must be at least 1)")]
    InvalidCapacity(usize),
}
