use voxmap_geom::{Axis, Coord, Direction};

/// A pending run of matching cells along the flood's forward axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Region {
    /// First known cell of the run.
    pub anchor: Coord,
    /// Cells known to match from `anchor` forward (at least 1). For a spawned
    /// region these are exactly the cells alongside its parent's run.
    pub distance: i32,
    /// Direction the region was spawned in from its parent; `None` for a seed.
    pub prev: Option<Direction>,
}

impl Region {
    pub fn seed(anchor: Coord) -> Self {
        Self {
            anchor,
            distance: 1,
            prev: None,
        }
    }

    pub(crate) fn spawn(anchor: Coord, prev: Direction) -> Self {
        Self {
            anchor,
            distance: 1,
            prev: Some(prev),
        }
    }

    #[inline]
    pub(crate) fn extend(&mut self) {
        self.distance += 1;
    }

    /// Cell `offset` steps from the anchor along `axis`, if it is on the
    /// `i32` lattice.
    #[inline]
    pub fn at(&self, axis: Axis, offset: i32) -> Option<Coord> {
        self.anchor.offset(axis, offset)
    }

    /// Whether looking in `dir` at `offset` would only see the parent's run.
    #[inline]
    pub(crate) fn faces_parent(&self, dir: Direction, offset: i32) -> bool {
        self.prev == Some(dir.opposite()) && (0..self.distance).contains(&offset)
    }
}
