use proptest::prelude::*;
use voxmap_geom::{Axis, Bounds, Coord, Direction};

fn small_i32() -> impl Strategy<Value = i32> {
    -1_000i32..=1_000
}

fn arb_coord() -> impl Strategy<Value = Coord> {
    (small_i32(), small_i32(), small_i32()).prop_map(|(x, y, z)| Coord::new(x, y, z))
}

fn arb_bounds() -> impl Strategy<Value = Bounds> {
    (arb_coord(), 1i32..=6, 1i32..=6, 1i32..=6)
        .prop_map(|(min, ex, ey, ez)| Bounds::new(min, min + Coord::new(ex, ey, ez)))
}

proptest! {
    // Stepping then stepping back is the identity
    #[test]
    fn step_and_back(c in arb_coord(), axis in 0usize..3, positive in any::<bool>()) {
        let d = Direction::new(Axis::ALL[axis], positive);
        let n = c.step(d).unwrap();
        prop_assert_eq!(n.step(d.opposite()), Some(c));
        prop_assert_eq!(n.chebyshev(c), 1);
    }

    // Half-open: min is inside, max is outside on every axis
    #[test]
    fn half_open_edges(b in arb_bounds()) {
        prop_assert!(!b.is_empty());
        prop_assert!(b.contains_coord(b.min));
        prop_assert!(!b.contains_coord(b.max));
        for axis in Axis::ALL {
            let inner = b.min.with(axis, b.max.get(axis) - 1);
            prop_assert!(b.contains_coord(inner));
            prop_assert!(!b.contains_coord(b.min.with(axis, b.max.get(axis))));
            prop_assert!(!b.contains_coord(b.min.offset(axis, -1).unwrap()));
        }
    }

    // The iterator yields exactly the contained cells, each once
    #[test]
    fn iter_matches_contains(b in arb_bounds()) {
        let cells: Vec<Coord> = b.iter().collect();
        prop_assert_eq!(cells.len() as u64, b.volume());
        let mut sorted = cells.clone();
        sorted.sort_by_key(|c| c.to_array());
        sorted.dedup();
        prop_assert_eq!(sorted.len(), cells.len());
        prop_assert!(cells.iter().all(|c| b.contains_coord(*c)));
    }

    // Collapsing any axis makes the box empty
    #[test]
    fn collapsed_axis_is_empty(b in arb_bounds(), axis in 0usize..3) {
        let a = Axis::ALL[axis];
        let flat = Bounds::new(b.min, b.max.with(a, b.min.get(a)));
        prop_assert!(flat.is_empty());
        prop_assert_eq!(flat.volume(), 0);
        prop_assert_eq!(flat.iter().count(), 0);
    }
}
