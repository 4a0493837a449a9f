//! Integer lattice coordinates, axes, and half-open boxes.
#![forbid(unsafe_code)]

use core::fmt;
use core::ops::{Add, Sub};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }
}

/// One of the six unit steps along an axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Direction {
    pub axis: Axis,
    pub positive: bool,
}

impl Direction {
    pub const POS_X: Direction = Direction::new(Axis::X, true);
    pub const NEG_X: Direction = Direction::new(Axis::X, false);
    pub const POS_Y: Direction = Direction::new(Axis::Y, true);
    pub const NEG_Y: Direction = Direction::new(Axis::Y, false);
    pub const POS_Z: Direction = Direction::new(Axis::Z, true);
    pub const NEG_Z: Direction = Direction::new(Axis::Z, false);

    #[inline]
    pub const fn new(axis: Axis, positive: bool) -> Self {
        Self { axis, positive }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        Self {
            axis: self.axis,
            positive: !self.positive,
        }
    }

    #[inline]
    pub const fn sign(self) -> i32 {
        if self.positive { 1 } else { -1 }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "[i32; 3]", into = "[i32; 3]")]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
pub struct Coord {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl Coord {
    pub const ORIGIN: Coord = Coord { x: 0, y: 0, z: 0 };

    #[inline]
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub const fn get(self, axis: Axis) -> i32 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
        }
    }

    #[inline]
    pub fn with(self, axis: Axis, v: i32) -> Self {
        match axis {
            Axis::X => Self { x: v, ..self },
            Axis::Y => Self { y: v, ..self },
            Axis::Z => Self { z: v, ..self },
        }
    }

    /// Moves `delta` cells along `axis`; `None` when that leaves the `i32`
    /// lattice.
    #[inline]
    pub fn offset(self, axis: Axis, delta: i32) -> Option<Self> {
        self.get(axis)
            .checked_add(delta)
            .map(|v| self.with(axis, v))
    }

    #[inline]
    pub fn step(self, dir: Direction) -> Option<Self> {
        self.offset(dir.axis, dir.sign())
    }

    #[inline]
    pub const fn to_array(self) -> [i32; 3] {
        [self.x, self.y, self.z]
    }

    /// Largest per-axis distance (Chebyshev metric).
    #[inline]
    pub fn chebyshev(self, other: Coord) -> u32 {
        Axis::ALL
            .iter()
            .map(|&a| self.get(a).abs_diff(other.get(a)))
            .max()
            .unwrap_or(0)
    }
}

impl Add for Coord {
    type Output = Coord;
    #[inline]
    fn add(self, rhs: Coord) -> Coord {
        Coord::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Coord {
    type Output = Coord;
    #[inline]
    fn sub(self, rhs: Coord) -> Coord {
        Coord::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl From<[i32; 3]> for Coord {
    fn from(v: [i32; 3]) -> Self {
        Self::new(v[0], v[1], v[2])
    }
}

impl From<Coord> for [i32; 3] {
    fn from(c: Coord) -> Self {
        c.to_array()
    }
}

impl From<(i32, i32, i32)> for Coord {
    fn from(v: (i32, i32, i32)) -> Self {
        Self::new(v.0, v.1, v.2)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

/// Axis-aligned half-open box `[min, max)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Bounds {
    pub min: Coord,
    pub max: Coord,
}

impl Bounds {
    #[inline]
    pub const fn new(min: Coord, max: Coord) -> Self {
        Self { min, max }
    }

    /// True when some axis has `min >= max`, i.e. the box holds no cell.
    #[inline]
    pub fn is_empty(&self) -> bool {
        Axis::ALL
            .iter()
            .any(|&a| self.min.get(a) >= self.max.get(a))
    }

    #[inline]
    pub fn contains(&self, x: i32, y: i32, z: i32) -> bool {
        x >= self.min.x
            && x < self.max.x
            && y >= self.min.y
            && y < self.max.y
            && z >= self.min.z
            && z < self.max.z
    }

    #[inline]
    pub fn contains_coord(&self, c: Coord) -> bool {
        self.contains(c.x, c.y, c.z)
    }

    /// Per-axis size `max - min`, zero on collapsed axes. Unsigned so a box
    /// spanning the whole `i32` range still has a representable width.
    #[inline]
    pub fn extent(&self) -> [u32; 3] {
        Axis::ALL.map(|a| {
            let (lo, hi) = (self.min.get(a), self.max.get(a));
            if hi > lo { hi.abs_diff(lo) } else { 0 }
        })
    }

    /// Cell count, saturating at `u64::MAX`.
    pub fn volume(&self) -> u64 {
        self.extent()
            .iter()
            .fold(1u64, |acc, &e| acc.saturating_mul(u64::from(e)))
    }

    /// Offset of `c` from `min` on each axis. Only meaningful for cells
    /// inside the box.
    #[inline]
    pub fn local_offset(&self, c: Coord) -> [u32; 3] {
        Axis::ALL.map(|a| c.get(a).abs_diff(self.min.get(a)))
    }

    /// The cell `offset` steps up from `min`, or `None` when that is not a
    /// cell of the box.
    pub fn at_offset(&self, offset: [u32; 3]) -> Option<Coord> {
        let mut c = self.min;
        for a in Axis::ALL {
            let v = i64::from(self.min.get(a)) + i64::from(offset[a.index()]);
            if v >= i64::from(self.max.get(a)) {
                return None;
            }
            c = c.with(a, i32::try_from(v).ok()?);
        }
        Some(c)
    }

    /// Every cell of the box, x outermost and z innermost.
    pub fn iter(&self) -> impl Iterator<Item = Coord> + use<> {
        let b = *self;
        (b.min.x..b.max.x).flat_map(move |x| {
            (b.min.y..b.max.y)
                .flat_map(move |y| (b.min.z..b.max.z).map(move |z| Coord::new(x, y, z)))
        })
    }
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.min, self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn direction_opposite_flips_sign_only() {
        let d = Direction::POS_Y;
        assert_eq!(d.opposite(), Direction::NEG_Y);
        assert_eq!(d.opposite().opposite(), d);
        assert_eq!(Coord::ORIGIN.step(Direction::NEG_Z), Some(Coord::new(0, 0, -1)));
    }

    #[test]
    fn steps_off_the_lattice_are_none() {
        let low = Coord::new(i32::MIN, 0, 0);
        assert_eq!(low.step(Direction::NEG_X), None);
        assert_eq!(low.step(Direction::POS_X), Some(Coord::new(i32::MIN + 1, 0, 0)));
        assert_eq!(Coord::new(0, 0, i32::MAX).offset(Axis::Z, 1), None);
        assert_eq!(low.chebyshev(Coord::new(i32::MAX, 0, 0)), u32::MAX);
    }

    #[test]
    fn full_width_box_has_exact_extent() {
        let b = Bounds::new(Coord::new(i32::MIN, 0, 0), Coord::new(1, 2, 3));
        assert_eq!(b.extent(), [(1u32 << 31) + 1, 2, 3]);
        assert_eq!(b.volume(), ((1u64 << 31) + 1) * 6);
        assert_eq!(b.local_offset(Coord::new(0, 1, 2)), [1u32 << 31, 1, 2]);
        assert_eq!(b.at_offset([1u32 << 31, 1, 2]), Some(Coord::new(0, 1, 2)));
        assert_eq!(b.at_offset([0, 2, 0]), None);
        let whole = Bounds::new(
            Coord::new(i32::MIN, i32::MIN, i32::MIN),
            Coord::new(i32::MAX, i32::MAX, i32::MAX),
        );
        assert_eq!(whole.volume(), u64::MAX);
        let flat = Bounds::new(Coord::new(5, 0, 0), Coord::new(1, 1, 1));
        assert_eq!(flat.extent(), [0, 1, 1]);
        assert_eq!(flat.volume(), 0);
    }

    proptest! {
        // Any lattice point: a step either fails at the edge or round-trips
        #[test]
        fn step_round_trips_or_stops(
            c in any::<Coord>(),
            axis in 0usize..3,
            positive in any::<bool>(),
        ) {
            let d = Direction::new(Axis::ALL[axis], positive);
            match c.step(d) {
                Some(n) => {
                    prop_assert_eq!(n.step(d.opposite()), Some(c));
                    prop_assert_eq!(n.chebyshev(c), 1);
                }
                None => prop_assert_eq!(c.get(d.axis), if positive { i32::MAX } else { i32::MIN }),
            }
        }

        // local_offset and at_offset invert each other for cells of the box
        #[test]
        fn local_offsets_invert(min in any::<Coord>(), c in any::<Coord>()) {
            let b = Bounds::new(min, Coord::new(i32::MAX, i32::MAX, i32::MAX));
            if b.contains_coord(c) {
                prop_assert_eq!(b.at_offset(b.local_offset(c)), Some(c));
            }
        }
    }

    #[test]
    fn coord_deserializes_from_array() {
        #[derive(Deserialize)]
        struct Wrap {
            at: Coord,
        }
        let w: Wrap = toml::from_str("at = [3, -4, 5]").unwrap();
        assert_eq!(w.at, Coord::new(3, -4, 5));
    }

    #[test]
    fn bounds_iter_visits_volume_cells() {
        let b = Bounds::new(Coord::new(-1, 0, 2), Coord::new(1, 3, 4));
        let cells: Vec<Coord> = b.iter().collect();
        assert_eq!(cells.len() as u64, b.volume());
        assert_eq!(cells.first(), Some(&Coord::new(-1, 0, 2)));
        assert_eq!(cells.last(), Some(&Coord::new(0, 2, 3)));
        assert!(cells.iter().all(|c| b.contains_coord(*c)));
    }
}
