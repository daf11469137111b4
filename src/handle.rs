//! Shared, immutable coordinate storage.

use std::fmt;
use std::sync::Arc;

use crate::number::FieldNumber;

/// A shared handle to an immutable coordinate representation.
///
/// Copying a geometric object copies its handle, not its coordinates: the
/// copy is a reference-count bump, and both objects read the same stored
/// representation afterwards. The representation is freed when the last
/// handle referring to it is dropped. The count is atomic, so handles may
/// be cloned and dropped from multiple threads.
pub struct Handle<T> {
    rep: Arc<T>,
}

impl<T> Handle<T> {
    /// Wraps a representation in a fresh, uniquely owned handle.
    #[must_use]
    pub fn new(rep: T) -> Self {
        Self { rep: Arc::new(rep) }
    }

    /// Returns a reference to the stored representation.
    #[must_use]
    pub fn get(&self) -> &T {
        &self.rep
    }

    /// Returns the number of handles currently sharing the representation.
    #[must_use]
    pub fn refs(&self) -> usize {
        Arc::strong_count(&self.rep)
    }

    /// Returns `true` if both handles alias the same stored representation.
    #[must_use]
    pub fn ptr_eq(a: &Self, b: &Self) -> bool {
        Arc::ptr_eq(&a.rep, &b.rep)
    }
}

// A derived impl would demand `T: Clone`; sharing never copies the
// representation.
impl<T> Clone for Handle<T> {
    fn clone(&self) -> Self {
        Self {
            rep: Arc::clone(&self.rep),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Handle<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Handle").field(&self.rep).finish()
    }
}

/// Read access a coordinate representation offers the kernel.
///
/// `coordinate` returns values rather than references: homogeneous
/// representations compute Cartesian coordinates on the fly instead of
/// caching the divisions.
pub trait Coordinates {
    /// Field type of the Cartesian view of this representation.
    type FT: FieldNumber;

    /// Number of Cartesian coordinates.
    fn dimension(&self) -> usize;

    /// Returns Cartesian coordinate `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= self.dimension()`.
    fn coordinate(&self, i: usize) -> Self::FT;
}

/// Iterator over the Cartesian coordinates of a shared representation.
///
/// The iterator holds its own handle, so it stays valid independently of
/// the object it was created from, and cloning it restarts the walk from
/// the current cursor.
#[derive(Debug)]
pub struct CartesianIter<R: Coordinates> {
    rep: Handle<R>,
    index: usize,
}

impl<R: Coordinates> CartesianIter<R> {
    pub(crate) fn new(rep: Handle<R>) -> Self {
        Self { rep, index: 0 }
    }
}

impl<R: Coordinates> Iterator for CartesianIter<R> {
    type Item = R::FT;

    fn next(&mut self) -> Option<R::FT> {
        if self.index >= self.rep.get().dimension() {
            return None;
        }
        let value = self.rep.get().coordinate(self.index);
        self.index += 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.rep.get().dimension() - self.index;
        (left, Some(left))
    }
}

impl<R: Coordinates> ExactSizeIterator for CartesianIter<R> {}

impl<R: Coordinates> Clone for CartesianIter<R> {
    fn clone(&self) -> Self {
        Self {
            rep: self.rep.clone(),
            index: self.index,
        }
    }
}
