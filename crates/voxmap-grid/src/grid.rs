use crate::cell::Cell;
use crate::error::GridError;
use crate::storage::{MapStorage, Storage};
use std::cell::RefCell;
use std::marker::PhantomData;
use std::rc::Rc;
use voxmap_geom::{Axis, Bounds, Coord};

/// A bounded view onto shared cell storage.
///
/// Every read and write funnels through the view's half-open box. Views made
/// with [`Grid::sub_map`] (or `clone`) share the same storage: a write through
/// one is visible through all of them.
pub struct Grid<T, S = MapStorage<T>> {
    bounds: Bounds,
    store: Rc<RefCell<S>>,
    _cell: PhantomData<fn() -> T>,
}

impl<T: Clone + PartialEq> Grid<T> {
    /// Grid over a fresh [`MapStorage`].
    pub fn new(bounds: Bounds) -> Result<Self, GridError> {
        Self::with_storage(bounds, MapStorage::new())
    }

    pub fn from_extents(min: Coord, max: Coord) -> Result<Self, GridError> {
        Self::new(Bounds::new(min, max))
    }
}

impl<T: Clone + PartialEq, S: Storage<T>> Grid<T, S> {
    /// Grid over a caller-supplied backend.
    pub fn with_storage(bounds: Bounds, storage: S) -> Result<Self, GridError> {
        Self::with_shared(bounds, Rc::new(RefCell::new(storage)))
    }

    /// Grid over a backend handle that may already be shared.
    pub fn with_shared(bounds: Bounds, store: Rc<RefCell<S>>) -> Result<Self, GridError> {
        if bounds.is_empty() {
            return Err(GridError::EmptyBounds {
                min: bounds.min,
                max: bounds.max,
            });
        }
        Ok(Self {
            bounds,
            store,
            _cell: PhantomData,
        })
    }

    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    #[inline]
    pub fn contains(&self, x: i32, y: i32, z: i32) -> bool {
        self.bounds.contains(x, y, z)
    }

    /// Handle to the backing store, shared with every view of it.
    pub fn storage(&self) -> Rc<RefCell<S>> {
        Rc::clone(&self.store)
    }

    pub fn shares_storage_with<S2>(&self, other: &Grid<T, S2>) -> bool {
        std::ptr::addr_eq(Rc::as_ptr(&self.store), Rc::as_ptr(&other.store))
    }

    pub fn get(&self, x: i32, y: i32, z: i32) -> Cell<T> {
        if !self.bounds.contains(x, y, z) {
            return Cell::OutOfBounds;
        }
        self.store.borrow().get(x, y, z).into()
    }

    #[inline]
    pub fn get_at(&self, c: Coord) -> Cell<T> {
        self.get(c.x, c.y, c.z)
    }

    /// Cell `delta` steps from `c` along `axis`. Stepping off the `i32`
    /// lattice reads [`Cell::OutOfBounds`] like any other cell outside the box.
    #[inline]
    pub fn get_offset(&self, c: Coord, axis: Axis, delta: i32) -> Cell<T> {
        c.offset(axis, delta)
            .map_or(Cell::OutOfBounds, |n| self.get_at(n))
    }

    pub fn set(&mut self, x: i32, y: i32, z: i32, value: T) -> Result<(), GridError> {
        self.check(x, y, z)?;
        self.store.borrow_mut().set(x, y, z, value)?;
        Ok(())
    }

    #[inline]
    pub fn set_at(&mut self, c: Coord, value: T) -> Result<(), GridError> {
        self.set(c.x, c.y, c.z, value)
    }

    /// Un-write a cell so it reads back [`Cell::Absent`].
    pub fn clear(&mut self, x: i32, y: i32, z: i32) -> Result<(), GridError> {
        self.check(x, y, z)?;
        self.store.borrow_mut().remove(x, y, z)?;
        Ok(())
    }

    /// Write whatever `cell` holds; `Absent` clears.
    pub fn put(&mut self, x: i32, y: i32, z: i32, cell: Cell<T>) -> Result<(), GridError> {
        match cell {
            Cell::Present(v) => self.set(x, y, z, v),
            Cell::Absent => self.clear(x, y, z),
            Cell::OutOfBounds => Err(GridError::Sentinel {
                coord: Coord::new(x, y, z),
            }),
        }
    }

    /// New view over the same storage with a different box.
    ///
    /// The box need not lie inside this one.
    pub fn sub_map(&self, bounds: Bounds) -> Result<Self, GridError> {
        Self::with_shared(bounds, Rc::clone(&self.store))
    }

    /// Copy `src` cell by cell into this grid at equal local offsets.
    ///
    /// Both boxes must have the same per-axis extents. The first failing write
    /// aborts the copy; cells written before it stay written.
    pub fn copy_from<S2: Storage<T>>(&mut self, src: &Grid<T, S2>) -> Result<usize, GridError> {
        let (de, se) = (self.bounds.extent(), src.bounds.extent());
        if de != se {
            return Err(GridError::DimensionMismatch { dst: de, src: se });
        }
        // Equal extents make both boxes iterate in lockstep by local offset.
        let mut written = 0usize;
        for (to, from) in self.bounds.iter().zip(src.bounds.iter()) {
            let cell = src.get_at(from);
            if let Err(e) = self.put(to.x, to.y, to.z, cell) {
                log::warn!(target: "grid", "copy aborted at {} after {} cells: {}", to, written, e);
                return Err(e);
            }
            written += 1;
        }
        log::debug!(target: "grid", "copied {} cells {} -> {}", written, src.bounds, self.bounds);
        Ok(written)
    }

    #[inline]
    fn check(&self, x: i32, y: i32, z: i32) -> Result<(), GridError> {
        if self.bounds.contains(x, y, z) {
            Ok(())
        } else {
            Err(GridError::OutOfBounds {
                coord: Coord::new(x, y, z),
                bounds: self.bounds,
            })
        }
    }
}

impl<T, S> Clone for Grid<T, S> {
    fn clone(&self) -> Self {
        Self {
            bounds: self.bounds,
            store: Rc::clone(&self.store),
            _cell: PhantomData,
        }
    }
}

impl<T, S> std::fmt::Debug for Grid<T, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Grid").field("bounds", &self.bounds).finish_non_exhaustive()
    }
}
