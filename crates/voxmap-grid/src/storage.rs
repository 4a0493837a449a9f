//! Cell storage backends.

use crate::error::StorageError;
use hashbrown::HashMap;

/// Key-addressed backing store shared by one or more [`Grid`](crate::Grid) views.
///
/// Bounds are enforced by the grid; a backend sees every in-bounds access and
/// nothing else.
pub trait Storage<T> {
    /// Value at `(x, y, z)`, `None` if never written.
    fn get(&self, x: i32, y: i32, z: i32) -> Option<T>;

    fn set(&mut self, x: i32, y: i32, z: i32, value: T) -> Result<(), StorageError>;

    /// Forget the value at `(x, y, z)` so it reads back as unwritten.
    fn remove(&mut self, x: i32, y: i32, z: i32) -> Result<(), StorageError>;
}

/// Default sparse backend: nested maps keyed y, then z, then x. Never fails.
pub struct MapStorage<T> {
    rows: HashMap<i32, HashMap<i32, HashMap<i32, T>>>,
    len: usize,
}

impl<T> MapStorage<T> {
    pub fn new() -> Self {
        Self {
            rows: HashMap::new(),
            len: 0,
        }
    }

    /// Number of written cells.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl<T> Default for MapStorage<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Storage<T> for MapStorage<T> {
    fn get(&self, x: i32, y: i32, z: i32) -> Option<T> {
        self.rows
            .get(&y)
            .and_then(|plane| plane.get(&z))
            .and_then(|row| row.get(&x))
            .cloned()
    }

    fn set(&mut self, x: i32, y: i32, z: i32, value: T) -> Result<(), StorageError> {
        let row = self.rows.entry(y).or_default().entry(z).or_default();
        if row.insert(x, value).is_none() {
            self.len += 1;
        }
        Ok(())
    }

    fn remove(&mut self, x: i32, y: i32, z: i32) -> Result<(), StorageError> {
        let Some(plane) = self.rows.get_mut(&y) else {
            return Ok(());
        };
        let Some(row) = plane.get_mut(&z) else {
            return Ok(());
        };
        if row.remove(&x).is_some() {
            self.len -= 1;
        }
        // Prune emptied maps.
        if row.is_empty() {
            plane.remove(&z);
        }
        if plane.is_empty() {
            self.rows.remove(&y);
        }
        Ok(())
    }
}
