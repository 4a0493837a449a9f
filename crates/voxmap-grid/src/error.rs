//! Errors raised by grid writes and the operations built on them.

use std::error::Error;
use std::fmt;
use voxmap_geom::{Bounds, Coord};

/// Opaque failure reported by a custom [`Storage`](crate::Storage) backend.
#[derive(Debug)]
pub struct StorageError(Box<dyn Error + Send + Sync + 'static>);

impl StorageError {
    pub fn new(err: impl Into<Box<dyn Error + Send + Sync + 'static>>) -> Self {
        Self(err.into())
    }

    pub fn into_inner(self) -> Box<dyn Error + Send + Sync + 'static> {
        self.0
    }
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Error for StorageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(self.0.as_ref())
    }
}

#[derive(Debug)]
pub enum GridError {
    /// A write targeted a cell outside the grid's box.
    OutOfBounds { coord: Coord, bounds: Bounds },
    /// Copy between boxes of different per-axis extents.
    DimensionMismatch { dst: [u32; 3], src: [u32; 3] },
    /// Box with `min >= max` on some axis.
    EmptyBounds { min: Coord, max: Coord },
    /// Rasterizer endpoints further apart than `i32::MAX` on some axis.
    SpanTooLong { from: Coord, to: Coord },
    /// Attempt to store the out-of-bounds marker as a cell value.
    Sentinel { coord: Coord },
    Backend(StorageError),
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::OutOfBounds { coord, bounds } => {
                write!(f, "coordinate {} outside grid bounds {}", coord, bounds)
            }
            GridError::DimensionMismatch { dst, src } => write!(
                f,
                "grid extents differ: destination {:?} vs source {:?}",
                dst, src
            ),
            GridError::EmptyBounds { min, max } => {
                write!(f, "empty bounds: min {} must be below max {}", min, max)
            }
            GridError::SpanTooLong { from, to } => {
                write!(f, "span {} -> {} too long to rasterize", from, to)
            }
            GridError::Sentinel { coord } => {
                write!(f, "cannot store the out-of-bounds marker at {}", coord)
            }
            GridError::Backend(e) => write!(f, "storage backend: {}", e),
        }
    }
}

impl Error for GridError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            GridError::Backend(e) => Some(e),
            _ => None,
        }
    }
}

impl From<StorageError> for GridError {
    fn from(e: StorageError) -> Self {
        GridError::Backend(e)
    }
}
