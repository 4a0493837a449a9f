//! Run-based flood replace over a [`voxmap_grid::Grid`].
//!
//! Work is tracked per run of matching cells along the mode's forward axis
//! rather than per cell, and pending runs sit on an explicit worklist, so the
//! flood never recurses.
#![forbid(unsafe_code)]

pub mod engine;
pub mod mode;
pub mod region;

pub use engine::{
    FloodReport, flood_replace, flood_replace_3d, flood_replace_xy, flood_replace_yz,
    flood_replace_zx, paint_replace,
};
pub use mode::{FloodMode, ParseFloodModeError};
pub use region::Region;
