/// What a grid read yields.
///
/// `Absent` and `OutOfBounds` are reserved markers: they compare unequal to
/// each other and to every `Present` value, so a flood seeded on empty space
/// still stops at the grid edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Cell<T> {
    /// In bounds but never written (or cleared).
    Absent,
    /// Outside the grid's box.
    OutOfBounds,
    Present(T),
}

impl<T> Cell<T> {
    #[inline]
    pub fn is_present(&self) -> bool {
        matches!(self, Cell::Present(_))
    }

    #[inline]
    pub fn is_absent(&self) -> bool {
        matches!(self, Cell::Absent)
    }

    #[inline]
    pub fn is_out_of_bounds(&self) -> bool {
        matches!(self, Cell::OutOfBounds)
    }

    #[inline]
    pub fn as_present(&self) -> Option<&T> {
        match self {
            Cell::Present(v) => Some(v),
            _ => None,
        }
    }

    #[inline]
    pub fn into_present(self) -> Option<T> {
        match self {
            Cell::Present(v) => Some(v),
            _ => None,
        }
    }
}

impl<T: PartialEq> Cell<T> {
    /// True when this cell holds exactly `value`.
    #[inline]
    pub fn holds(&self, value: &T) -> bool {
        matches!(self, Cell::Present(v) if v == value)
    }
}

impl<T> From<Option<T>> for Cell<T> {
    #[inline]
    fn from(v: Option<T>) -> Self {
        match v {
            Some(v) => Cell::Present(v),
            None => Cell::Absent,
        }
    }
}
