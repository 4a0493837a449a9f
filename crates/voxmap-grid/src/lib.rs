//! Bounded views over sparse, shareable cell storage.
#![forbid(unsafe_code)]

mod bulk;
pub mod cell;
pub mod error;
pub mod grid;
pub mod storage;

pub use cell::Cell;
pub use error::{GridError, StorageError};
pub use grid::Grid;
pub use storage::{MapStorage, Storage};
pub use voxmap_geom::{Axis, Bounds, Coord, Direction};
