//! Whole-box operations. Each aborts on the first failing write and reports
//! how many cells it wrote on success.

use crate::cell::Cell;
use crate::error::GridError;
use crate::grid::Grid;
use crate::storage::Storage;

impl<T: Clone + PartialEq, S: Storage<T>> Grid<T, S> {
    /// Every cell equal to `old` becomes `new`. `old` may be [`Cell::Absent`]
    /// to paint all unwritten cells.
    pub fn replace(&mut self, old: &Cell<T>, new: T) -> Result<usize, GridError> {
        let mut written = 0usize;
        for c in self.bounds().iter() {
            if self.get_at(c) == *old {
                self.set_at(c, new.clone())?;
                written += 1;
            }
        }
        log::debug!(target: "grid", "replace: {} cells in {}", written, self.bounds());
        Ok(written)
    }

    pub fn fill(&mut self, value: T) -> Result<usize, GridError> {
        let mut written = 0usize;
        for c in self.bounds().iter() {
            self.set_at(c, value.clone())?;
            written += 1;
        }
        log::debug!(target: "grid", "fill: {} cells in {}", written, self.bounds());
        Ok(written)
    }

    /// Tile `src`'s box across this one, wrapping on each axis with `src`'s
    /// extents as the period.
    pub fn fill_area<S2: Storage<T>>(&mut self, src: &Grid<T, S2>) -> Result<usize, GridError> {
        let (db, sb) = (self.bounds(), src.bounds());
        let period = sb.extent();
        let mut written = 0usize;
        for c in db.iter() {
            let local = db.local_offset(c);
            let from = [0, 1, 2].map(|i| local[i] % period[i]);
            let cell = match sb.at_offset(from) {
                Some(from) => src.get_at(from),
                None => Cell::Absent,
            };
            self.put(c.x, c.y, c.z, cell)?;
            written += 1;
        }
        log::debug!(target: "grid", "fill_area: tiled {} over {} ({} cells)", sb, db, written);
        Ok(written)
    }

    /// Set each cell to `f(i, j, k)` where `(i, j, k)` is its offset from the
    /// box minimum.
    pub fn fill_func<F>(&mut self, mut f: F) -> Result<usize, GridError>
    where
        F: FnMut(u32, u32, u32) -> T,
    {
        let b = self.bounds();
        let mut written = 0usize;
        for c in b.iter() {
            let [i, j, k] = b.local_offset(c);
            self.set_at(c, f(i, j, k))?;
            written += 1;
        }
        log::debug!(target: "grid", "fill_func: {} cells in {}", written, b);
        Ok(written)
    }
}
