//! Quad rasterizer: two edges swept in lock-step, joined by a line at every step.
//!
//! The outer sweep is a 6-axis Bresenham walk over edge A (`c1 -> c2`) and
//! edge B (`c4 -> c3`). Each connecting line is a 3D Bresenham line whose
//! error terms are nudged by a 64-bit fixed-point drift derived from the
//! outer errors, so neighbouring connectors step at consistent places and the
//! surface does not tear between them.

use crate::check_points;
use voxmap_geom::Coord;
use voxmap_grid::{Grid, GridError, Storage};

/// Fill the quad `c1 c2 c3 c4` (perimeter order) with `value`.
///
/// The swept edges are `c1 -> c2` and `c4 -> c3`, so the corners go around
/// the quad. Callers used to the paired-edge convention, where `(c1, c2)` and
/// `(c3, c4)` are the two opposite edges walked in the same direction, must
/// swap `c3` and `c4`, or the connectors cross and draw a bowtie.
///
/// Returns the number of cell writes, counting cells touched by more than
/// one connecting line.
pub fn draw_plane<T, S>(
    grid: &mut Grid<T, S>,
    c1: Coord,
    c2: Coord,
    c3: Coord,
    c4: Coord,
    value: T,
) -> Result<usize, GridError>
where
    T: Clone + PartialEq,
    S: Storage<T>,
{
    draw_plane_func(grid, c1, c2, c3, c4, |_, _| value.clone())
}

/// Fill the quad `c1 c2 c3 c4` with values from `f(errors, length)`.
///
/// The connector endpoints receive the outer sweep's errors and length, the
/// interior cells of each connector its own.
pub fn draw_plane_func<T, S, F>(
    grid: &mut Grid<T, S>,
    c1: Coord,
    c2: Coord,
    c3: Coord,
    c4: Coord,
    mut f: F,
) -> Result<usize, GridError>
where
    T: Clone + PartialEq,
    S: Storage<T>,
    F: FnMut([i32; 3], i32) -> T,
{
    check_points(grid, &[c1, c2, c3, c4])?;

    // [0..3] walks edge A, [3..6] walks edge B.
    let mut pos = [c1.x, c1.y, c1.z, c4.x, c4.y, c4.z];
    let end = [c2.x, c2.y, c2.z, c3.x, c3.y, c3.z];
    let mut steps = [0i32; 6];
    let mut deltas = [0i32; 6];
    let mut length = 0i32;
    for i in 0..6 {
        let d = end[i] - pos[i];
        steps[i] = d.signum();
        deltas[i] = d.abs();
        length = length.max(deltas[i]);
    }
    let mut errors = [length / 2; 6];

    let mut writes = connector(grid, &pos, &errors, length, &mut f)?;
    for _ in 0..length {
        for a in 0..3 {
            let mut moved = false;
            for i in [a, a + 3] {
                errors[i] -= deltas[i];
                if errors[i] < 0 {
                    pos[i] += steps[i];
                    errors[i] += length;
                    moved = true;
                }
            }
            if moved {
                writes += connector(grid, &pos, &errors, length, &mut f)?;
            }
        }
    }
    log::trace!(target: "raster", "plane {} {} {} {}: {} writes", c1, c2, c3, c4, writes);
    Ok(writes)
}

/// Line from the A cursor `pos[0..3]` to the B cursor `pos[3..6]`.
fn connector<T, S, F>(
    grid: &mut Grid<T, S>,
    pos: &[i32; 6],
    outer: &[i32; 6],
    outer_len: i32,
    f: &mut F,
) -> Result<usize, GridError>
where
    T: Clone + PartialEq,
    S: Storage<T>,
    F: FnMut([i32; 3], i32) -> T,
{
    let mut cur = [pos[0], pos[1], pos[2]];
    let end = Coord::new(pos[3], pos[4], pos[5]);
    let mut steps = [0i32; 3];
    let mut deltas = [0i32; 3];
    let mut drift = [0i64; 3];
    let mut len = 0i32;
    let mut dominant = 0usize;
    for i in 0..3 {
        let d = pos[i + 3] - pos[i];
        steps[i] = d.signum();
        deltas[i] = d.abs();
        drift[i] = i64::from(outer_len / 2) + i64::from(outer[i + 3] - outer[i]);
        if deltas[i] > len {
            len = deltas[i];
            dominant = i;
        }
    }
    // Dominant axis first, then the larger of the other two (later axis on ties).
    let (p, q) = match dominant {
        0 => (1, 2),
        1 => (0, 2),
        _ => (0, 1),
    };
    let order = if deltas[p] > deltas[q] {
        [dominant, p, q]
    } else {
        [dominant, q, p]
    };

    let mut errors = [len / 2; 3];
    let mut scaled = [
        i64::from(outer[0]) * i64::from(len),
        i64::from(outer[1]) * i64::from(len),
        i64::from(outer[2]) * i64::from(len),
    ];
    let modulus = i64::from(outer_len) * i64::from(len);
    let mut left = deltas;

    grid.set_at(
        Coord::from(cur),
        f([outer[0], outer[1], outer[2]], outer_len),
    )?;
    let mut writes = 1usize;
    for _ in 0..len {
        for &k in &order {
            errors[k] -= deltas[k];
            if modulus > 0 {
                scaled[k] -= drift[k];
                if scaled[k] >= modulus {
                    scaled[k] -= modulus;
                    errors[k] -= 1;
                } else if scaled[k] < 0 {
                    scaled[k] += modulus;
                    errors[k] += 1;
                }
            }
            // Never step an axis past the connector's end.
            if errors[k] < 0 && left[k] > 0 {
                cur[k] += steps[k];
                errors[k] += len;
                left[k] -= 1;
                grid.set_at(Coord::from(cur), f(errors, len))?;
                writes += 1;
            }
        }
    }
    grid.set_at(end, f([outer[3], outer[4], outer[5]], outer_len))?;
    Ok(writes + 1)
}
