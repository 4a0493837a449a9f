//! Integer line and quad rasterizers writing into a [`voxmap_grid::Grid`].
#![forbid(unsafe_code)]

pub mod line;
pub mod plane;

pub use line::{LineIter, LineStep, draw_line, draw_line_func};
pub use plane::{draw_plane, draw_plane_func};

use voxmap_geom::Coord;
use voxmap_grid::{Grid, GridError, Storage};

/// Fails with `OutOfBounds` for the first point outside `grid`, then with
/// `SpanTooLong` when two points are more than `i32::MAX` apart on an axis.
pub(crate) fn check_points<T, S>(grid: &Grid<T, S>, points: &[Coord]) -> Result<(), GridError>
where
    T: Clone + PartialEq,
    S: Storage<T>,
{
    if let Some(&coord) = points.iter().find(|p| !grid.bounds().contains_coord(**p)) {
        return Err(GridError::OutOfBounds {
            coord,
            bounds: grid.bounds(),
        });
    }
    for (i, a) in points.iter().enumerate() {
        for b in &points[i + 1..] {
            if a.chebyshev(*b) > i32::MAX as u32 {
                return Err(GridError::SpanTooLong { from: *a, to: *b });
            }
        }
    }
    Ok(())
}
