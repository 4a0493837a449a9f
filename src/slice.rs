use std::fmt::{self, Write};

use voxmap_geom::Coord;
use voxmap_grid::{Cell, Grid, GridError, Storage};

pub const ABSENT_GLYPH: char = '.';

/// Glyph for one cell: the first character of the value's `Display` form.
fn glyph<T: fmt::Display>(cell: &Cell<T>) -> char {
    match cell {
        Cell::Present(v) => v.to_string().chars().next().unwrap_or(' '),
        _ => ABSENT_GLYPH,
    }
}

/// Render the Z layer `z` as text, one line per row from the lowest Y up.
pub fn render_layer<T, S>(grid: &Grid<T, S>, z: i32) -> Result<String, GridError>
where
    T: Clone + PartialEq + fmt::Display,
    S: Storage<T>,
{
    let b = grid.bounds();
    if z < b.min.z || z >= b.max.z {
        return Err(GridError::OutOfBounds {
            coord: Coord::new(b.min.x, b.min.y, z),
            bounds: b,
        });
    }
    let mut out = String::new();
    write_layer(&mut out, grid, z);
    Ok(out)
}

/// Every Z layer, each preceded by a `z = N` header line.
pub fn render_all<T, S>(grid: &Grid<T, S>) -> String
where
    T: Clone + PartialEq + fmt::Display,
    S: Storage<T>,
{
    let b = grid.bounds();
    let mut out = String::new();
    for z in b.min.z..b.max.z {
        let _ = writeln!(out, "z = {z}");
        write_layer(&mut out, grid, z);
    }
    out
}

fn write_layer<T, S>(out: &mut String, grid: &Grid<T, S>, z: i32)
where
    T: Clone + PartialEq + fmt::Display,
    S: Storage<T>,
{
    let b = grid.bounds();
    for y in b.min.y..b.max.y {
        out.extend((b.min.x..b.max.x).map(|x| glyph(&grid.get(x, y, z))));
        out.push('\n');
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_rows_bottom_up() {
        let mut g: Grid<char> =
            Grid::from_extents(Coord::new(0, 0, 0), Coord::new(3, 2, 1)).unwrap();
        g.set(0, 0, 0, 'a').unwrap();
        g.set(2, 1, 0, 'b').unwrap();
        assert_eq!(render_layer(&g, 0).unwrap(), "a..\n..b\n");
    }

    #[test]
    fn multi_char_values_use_first_char() {
        let mut g: Grid<u32> =
            Grid::from_extents(Coord::new(-1, 0, 4), Coord::new(1, 1, 6)).unwrap();
        g.set(-1, 0, 5, 42).unwrap();
        assert_eq!(render_layer(&g, 4).unwrap(), "..\n");
        assert_eq!(render_layer(&g, 5).unwrap(), "4.\n");
        assert_eq!(render_all(&g), "z = 4\n..\nz = 5\n4.\n");
    }

    #[test]
    fn layer_outside_box_is_rejected() {
        let g: Grid<char> = Grid::from_extents(Coord::ORIGIN, Coord::new(2, 2, 2)).unwrap();
        assert!(matches!(render_layer(&g, 2), Err(GridError::OutOfBounds { .. })));
        assert!(render_layer(&g, -1).is_err());
    }

    #[test]
    fn renders_layers_at_the_lattice_edge() {
        let mut g: Grid<char> = Grid::from_extents(
            Coord::new(i32::MIN, 0, i32::MAX - 2),
            Coord::new(i32::MIN + 2, 1, i32::MAX),
        )
        .unwrap();
        g.set(i32::MIN, 0, i32::MAX - 1, 'e').unwrap();
        assert_eq!(render_all(&g), format!("z = {}\n..\nz = {}\ne.\n", i32::MAX - 2, i32::MAX - 1));
    }
}
