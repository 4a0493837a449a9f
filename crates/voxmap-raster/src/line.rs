//! 3D Bresenham line.

use crate::check_points;
use voxmap_geom::Coord;
use voxmap_grid::{Grid, GridError, Storage};

/// One emitted cell plus the stepping state that produced it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LineStep {
    pub pos: Coord,
    /// Per-axis error accumulators before this cell's update.
    pub errors: [i32; 3],
    /// Dominant-axis length `L`.
    pub length: i32,
}

/// Cells of the 26-connected line from `from` to `to`, both ends included.
///
/// Yields exactly `L + 1` steps where `L` is the largest per-axis distance.
/// Per-axis distances are clamped to `i32::MAX`; longer spans stop short of
/// `to` instead of overflowing.
#[derive(Clone, Debug)]
pub struct LineIter {
    pos: [i32; 3],
    steps: [i32; 3],
    deltas: [i32; 3],
    errors: [i32; 3],
    length: i32,
    remaining: u32,
}

impl LineIter {
    pub fn new(from: Coord, to: Coord) -> Self {
        let (a, b) = (from.to_array(), to.to_array());
        let mut steps = [0i32; 3];
        let mut deltas = [0i32; 3];
        let mut length = 0i32;
        for i in 0..3 {
            steps[i] = b[i].cmp(&a[i]) as i32;
            deltas[i] = b[i].abs_diff(a[i]).min(i32::MAX as u32) as i32;
            length = length.max(deltas[i]);
        }
        Self {
            pos: a,
            steps,
            deltas,
            errors: [length / 2; 3],
            length,
            remaining: length as u32 + 1,
        }
    }

    #[inline]
    pub fn length(&self) -> i32 {
        self.length
    }
}

impl Iterator for LineIter {
    type Item = LineStep;

    fn next(&mut self) -> Option<LineStep> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let step = LineStep {
            pos: Coord::from(self.pos),
            errors: self.errors,
            length: self.length,
        };
        for i in 0..3 {
            self.errors[i] -= self.deltas[i];
            if self.errors[i] < 0 {
                self.pos[i] += self.steps[i];
                self.errors[i] += self.length;
            }
        }
        Some(step)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for LineIter {}

/// Draw a line of `value` from `from` to `to`. Returns the number of cells written.
pub fn draw_line<T, S>(
    grid: &mut Grid<T, S>,
    from: Coord,
    to: Coord,
    value: T,
) -> Result<usize, GridError>
where
    T: Clone + PartialEq,
    S: Storage<T>,
{
    draw_line_func(grid, from, to, |_, _| value.clone())
}

/// Draw a line whose cell values come from `f(errors, length)`.
///
/// Both endpoints must lie inside the grid. Interior writes are not
/// pre-checked: a failing write aborts the line and earlier cells stay drawn.
pub fn draw_line_func<T, S, F>(
    grid: &mut Grid<T, S>,
    from: Coord,
    to: Coord,
    mut f: F,
) -> Result<usize, GridError>
where
    T: Clone + PartialEq,
    S: Storage<T>,
    F: FnMut([i32; 3], i32) -> T,
{
    check_points(grid, &[from, to])?;
    let mut written = 0usize;
    for step in LineIter::new(from, to) {
        grid.set_at(step.pos, f(step.errors, step.length))?;
        written += 1;
    }
    log::trace!(target: "raster", "line {} -> {}: {} cells", from, to, written);
    Ok(written)
}
