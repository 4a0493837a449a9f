use hashbrown::HashSet;
use proptest::prelude::*;
use voxmap_geom::{Axis, Bounds, Coord};
use voxmap_grid::{Cell, Grid};
use voxmap_raster::{LineIter, draw_line, draw_plane};

const N: i32 = 7;

fn inside() -> impl Strategy<Value = Coord> {
    (0..N, 0..N, 0..N).prop_map(|(x, y, z)| Coord::new(x, y, z))
}

fn far() -> impl Strategy<Value = Coord> {
    (-500i32..=500, -500i32..=500, -500i32..=500).prop_map(|(x, y, z)| Coord::new(x, y, z))
}

fn cube() -> Grid<u8> {
    Grid::from_extents(Coord::ORIGIN, Coord::new(N, N, N)).unwrap()
}

fn written(g: &Grid<u8>) -> HashSet<Coord> {
    g.bounds().iter().filter(|c| g.get_at(*c).is_present()).collect()
}

fn corner_box(cs: &[Coord]) -> Bounds {
    let mut min = cs[0];
    let mut max = cs[0];
    for c in cs {
        for a in Axis::ALL {
            min = min.with(a, min.get(a).min(c.get(a)));
            max = max.with(a, max.get(a).max(c.get(a)));
        }
    }
    Bounds::new(min, max + Coord::new(1, 1, 1))
}

proptest! {
    // L + 1 cells, both endpoints, 26-connected, no repeats
    #[test]
    fn line_shape(a in far(), b in far()) {
        let cells: Vec<Coord> = LineIter::new(a, b).map(|s| s.pos).collect();
        prop_assert_eq!(cells.len() as u32, a.chebyshev(b) + 1);
        prop_assert_eq!(cells[0], a);
        prop_assert_eq!(*cells.last().unwrap(), b);
        for w in cells.windows(2) {
            prop_assert_eq!(w[0].chebyshev(w[1]), 1);
        }
        let uniq: HashSet<Coord> = cells.iter().copied().collect();
        prop_assert_eq!(uniq.len(), cells.len());
    }

    // Reversing the endpoints covers a line of the same length
    #[test]
    fn line_reverse_same_length(a in far(), b in far()) {
        prop_assert_eq!(LineIter::new(a, b).len(), LineIter::new(b, a).len());
    }

    // draw_line writes exactly the iterator's cells
    #[test]
    fn draw_line_matches_iter(a in inside(), b in inside()) {
        let mut g = cube();
        let n = draw_line(&mut g, a, b, 1).unwrap();
        let expect: HashSet<Coord> = LineIter::new(a, b).map(|s| s.pos).collect();
        prop_assert_eq!(n, expect.len());
        prop_assert_eq!(written(&g), expect);
    }

    // Any in-bounds quad draws without error, touches its corners and stays in their box
    #[test]
    fn plane_touches_corners(c1 in inside(), c2 in inside(), c3 in inside(), c4 in inside()) {
        let mut g = cube();
        draw_plane(&mut g, c1, c2, c3, c4, 1).unwrap();
        let cells = written(&g);
        for c in [c1, c2, c3, c4] {
            prop_assert!(cells.contains(&c), "corner {} missing", c);
        }
        let bb = corner_box(&[c1, c2, c3, c4]);
        prop_assert!(cells.iter().all(|c| bb.contains_coord(*c)));
    }

    // Axis-aligned rectangles in each coordinate plane fill solid
    #[test]
    fn axis_rect_fills_solid(u0 in 0..N, u1 in 0..N, v0 in 0..N, v1 in 0..N, w in 0..N, plane in 0usize..3) {
        let at = |u: i32, v: i32| match plane {
            0 => Coord::new(u, v, w),
            1 => Coord::new(w, u, v),
            _ => Coord::new(v, w, u),
        };
        let mut g = cube();
        draw_plane(&mut g, at(u0, v0), at(u1, v0), at(u1, v1), at(u0, v1), 1).unwrap();
        let mut expect = HashSet::new();
        for u in u0.min(u1)..=u0.max(u1) {
            for v in v0.min(v1)..=v0.max(v1) {
                expect.insert(at(u, v));
            }
        }
        prop_assert_eq!(written(&g), expect);
    }
}

#[test]
fn tilted_square_covers_every_column() {
    let mut g = cube();
    draw_plane(
        &mut g,
        Coord::new(0, 0, 0),
        Coord::new(4, 0, 0),
        Coord::new(4, 4, 4),
        Coord::new(0, 4, 4),
        1,
    )
    .unwrap();
    for x in 0..5 {
        for y in 0..5 {
            assert_eq!(g.get(x, y, y), Cell::Present(1), "hole at ({x}, {y}, {y})");
        }
    }
    assert_eq!(written(&g).len(), 25);
}
