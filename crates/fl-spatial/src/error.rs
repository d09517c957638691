//! Spatial-subsystem error type.

use thiserror::Error;

/// Errors produced by `fl-spatial`.
#[derive(Debug, Error)]
pub enum SpatialError {
    #[error("grid cell size must be finite and positive, got {0}")]
    InvalidCellSize(f32),
}

pub type SpatialResult<T> = Result<T, SpatialError>;
