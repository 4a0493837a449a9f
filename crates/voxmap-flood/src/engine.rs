use crate::mode::FloodMode;
use crate::region::Region;
use std::collections::VecDeque;
use voxmap_geom::Coord;
use voxmap_grid::{Grid, GridError, Storage};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FloodReport {
    /// Cells rewritten to the new value.
    pub painted: usize,
    /// Runs scanned and painted.
    pub regions: usize,
    /// Queued runs dropped because another run had already painted them.
    pub skipped: usize,
}

/// Replace the connected component of cells equal to the value under
/// `seed.anchor`, spreading along `mode`'s forward axis and its
/// [`spread`](FloodMode::spread) directions.
///
/// Nothing happens when the seed is outside the grid or already holds
/// `to_set`. Neighbours outside the grid read
/// [`Cell::OutOfBounds`](voxmap_grid::Cell::OutOfBounds), which never
/// matches, so the flood stops at the box edge on its own.
///
/// Every write lands inside the grid, so only a custom backend can make this
/// fail; its first error aborts the flood.
pub fn paint_replace<T, S>(
    grid: &mut Grid<T, S>,
    mode: FloodMode,
    to_set: T,
    seed: Region,
) -> Result<FloodReport, GridError>
where
    T: Clone + PartialEq,
    S: Storage<T>,
{
    let mut report = FloodReport::default();
    let to_replace = grid.get_at(seed.anchor);
    if to_replace.is_out_of_bounds() || to_replace.holds(&to_set) {
        return Ok(report);
    }
    let fwd = mode.forward();
    let spread = mode.spread();

    let mut work = VecDeque::from([seed]);
    while let Some(region) = work.pop_front() {
        if grid.get_at(region.anchor) != to_replace {
            report.skipped += 1;
            continue;
        }
        report.regions += 1;

        let mut back = 0;
        while grid.get_offset(region.anchor, fwd, -(back + 1)) == to_replace {
            back += 1;
        }
        let mut ahead = region.distance;
        while grid.get_offset(region.anchor, fwd, ahead) == to_replace {
            ahead += 1;
        }

        // One open child per spread direction; a miss closes it.
        let mut open: [Option<Region>; 4] = [None; 4];
        for i in -back..ahead {
            // Every offset in the run was read as a matching cell above.
            let Some(cell) = region.at(fwd, i) else { break };
            if let Err(e) = grid.set_at(cell, to_set.clone()) {
                log::warn!(
                    target: "flood",
                    "{} flood aborted at {} after {} cells: {}",
                    mode,
                    cell,
                    report.painted,
                    e
                );
                return Err(e);
            }
            report.painted += 1;
            for (slot, &dir) in spread.iter().enumerate() {
                let matched = cell.step(dir).filter(|next| {
                    !region.faces_parent(dir, i) && grid.get_at(*next) == to_replace
                });
                match (matched, &mut open[slot]) {
                    (Some(_), Some(child)) => child.extend(),
                    (Some(next), child) => *child = Some(Region::spawn(next, dir)),
                    (None, child) => work.extend(child.take()),
                }
            }
        }
        work.extend(open.into_iter().flatten());
    }
    log::debug!(
        target: "flood",
        "{} flood from {}: {} cells, {} runs, {} stale",
        mode,
        seed.anchor,
        report.painted,
        report.regions,
        report.skipped
    );
    Ok(report)
}

pub fn flood_replace<T, S>(
    grid: &mut Grid<T, S>,
    mode: FloodMode,
    origin: Coord,
    to_set: T,
) -> Result<FloodReport, GridError>
where
    T: Clone + PartialEq,
    S: Storage<T>,
{
    paint_replace(grid, mode, to_set, Region::seed(origin))
}

/// Flood within the X-Y plane through `(x, y, z)`.
pub fn flood_replace_xy<T, S>(
    grid: &mut Grid<T, S>,
    x: i32,
    y: i32,
    z: i32,
    to_set: T,
) -> Result<FloodReport, GridError>
where
    T: Clone + PartialEq,
    S: Storage<T>,
{
    flood_replace(grid, FloodMode::Xy, Coord::new(x, y, z), to_set)
}

/// Flood within the Y-Z plane through `(x, y, z)`.
pub fn flood_replace_yz<T, S>(
    grid: &mut Grid<T, S>,
    x: i32,
    y: i32,
    z: i32,
    to_set: T,
) -> Result<FloodReport, GridError>
where
    T: Clone + PartialEq,
    S: Storage<T>,
{
    flood_replace(grid, FloodMode::Yz, Coord::new(x, y, z), to_set)
}

/// Flood within the Z-X plane through `(x, y, z)`.
pub fn flood_replace_zx<T, S>(
    grid: &mut Grid<T, S>,
    x: i32,
    y: i32,
    z: i32,
    to_set: T,
) -> Result<FloodReport, GridError>
where
    T: Clone + PartialEq,
    S: Storage<T>,
{
    flood_replace(grid, FloodMode::Zx, Coord::new(x, y, z), to_set)
}

pub fn flood_replace_3d<T, S>(
    grid: &mut Grid<T, S>,
    x: i32,
    y: i32,
    z: i32,
    to_set: T,
) -> Result<FloodReport, GridError>
where
    T: Clone + PartialEq,
    S: Storage<T>,
{
    flood_replace(grid, FloodMode::Xyz, Coord::new(x, y, z), to_set)
}
