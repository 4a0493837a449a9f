//! Sparse bounded voxel grids with line/plane rasterizers and flood replace.
#![forbid(unsafe_code)]

pub mod scene;
pub mod slice;

pub use voxmap_flood as flood;
pub use voxmap_geom as geom;
pub use voxmap_grid as grid;
pub use voxmap_raster as raster;

pub use scene::{Scene, SceneOp};
pub use voxmap_flood::{FloodMode, FloodReport, flood_replace};
pub use voxmap_geom::{Axis, Bounds, Coord, Direction};
pub use voxmap_grid::{Cell, Grid, GridError, MapStorage, Storage, StorageError};
pub use voxmap_raster::{draw_line, draw_plane};
