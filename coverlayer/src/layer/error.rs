//! Layer error types.

use thiserror::Error;

use crate::dataset::DatasetError;
use crate::geo_index::IndexError;

/// Errors raised by [`CoverageLayer`](super::CoverageLayer) operations.
#[derive(Debug, Error)]
pub enum LayerError {
    /// Dataset input was rejected
    #[error(transparent)]
    Dataset(#[from] DatasetError),

    /// The spatial index could not be built
    #[error("Failed to build spatial index: {0}")]
    Index(#[from] IndexError),

    /// Radius must be a positive finite number
    #[error("Invalid radius: {0} (must be positive)")]
    InvalidRadius(f64),
}
