//! Thread-safe wrapper around [`DisjointSet`].
//!
//! `find` mutates parent links, so every operation takes the same lock. This
//! keeps concurrent callers correct at the cost of serialising them; the
//! single-threaded sweep in the forest builder does not use it.

use std::sync::{Mutex, MutexGuard};

use crate::{Result, error::BarcodeError, graph::VertexId};

use super::DisjointSet;

const RESOURCE: &str = "shared disjoint set";

/// A [`DisjointSet`] guarded by a mutex so it can be shared across threads.
///
/// # Examples
/// ```
/// use std::thread;
///
/// use barcode_core::SharedDisjointSet;
///
/// let set = SharedDisjointSet::new();
/// for vertex in 0..4_u32 {
///     set.register(vertex)?;
/// }
/// thread::scope(|scope| {
///     scope.spawn(|| set.union(&0, &1));
///     scope.spawn(|| set.union(&2, &3));
/// });
/// assert_eq!(set.component_count()?, 2);
/// # Ok::<(), barcode_core::BarcodeError>(())
/// ```
#[derive(Debug)]
pub struct SharedDisjointSet<V> {
    pub(super) inner: Mutex<DisjointSet<V>>,
}

impl<V: VertexId> SharedDisjointSet<V> {
    /// Creates an empty shared disjoint set.
    #[must_use]
    pub fn new() -> Self {
        Self::from(DisjointSet::new())
    }

    /// Registers `vertex`; see [`DisjointSet::register`].
    ///
    /// # Errors
    /// Returns [`BarcodeError::LockPoisoned`] when another thread panicked
    /// while holding the lock.
    pub fn register(&self, vertex: V) -> Result<bool> {
        Ok(self.lock()?.register(vertex))
    }

    /// Returns a copy of the representative of `vertex`.
    ///
    /// # Errors
    /// Returns [`BarcodeError::UnregisteredVertex`] for unknown vertices and
    /// [`BarcodeError::LockPoisoned`] when the lock is poisoned.
    pub fn find(&self, vertex: &V) -> Result<V> {
        self.lock()?.find(vertex).cloned()
    }

    /// Merges two components; see [`DisjointSet::union`].
    ///
    /// # Errors
    /// Returns [`BarcodeError::UnregisteredVertex`] for unknown vertices and
    /// [`BarcodeError::LockPoisoned`] when the lock is poisoned.
    pub fn union(&self, left: &V, right: &V) -> Result<bool> {
        self.lock()?.union(left, right)
    }

    /// Returns `true` when both vertices share a component.
    ///
    /// # Errors
    /// Returns [`BarcodeError::UnregisteredVertex`] for unknown vertices and
    /// [`BarcodeError::LockPoisoned`] when the lock is poisoned.
    pub fn same_component(&self, left: &V, right: &V) -> Result<bool> {
        self.lock()?.same_component(left, right)
    }

    /// Returns the current number of components.
    ///
    /// # Errors
    /// Returns [`BarcodeError::LockPoisoned`] when the lock is poisoned.
    pub fn component_count(&self) -> Result<usize> {
        Ok(self.lock()?.component_count())
    }

    /// Unwraps the inner disjoint set.
    ///
    /// # Errors
    /// Returns [`BarcodeError::LockPoisoned`] when the lock is poisoned.
    pub fn into_inner(self) -> Result<DisjointSet<V>> {
        self.inner
            .into_inner()
            .map_err(|_| BarcodeError::LockPoisoned { resource: RESOURCE })
    }

    fn lock(&self) -> Result<MutexGuard<'_, DisjointSet<V>>> {
        self.inner
            .lock()
            .map_err(|_| BarcodeError::LockPoisoned { resource: RESOURCE })
    }
}

impl<V> Default for SharedDisjointSet<V> {
    fn default() -> Self {
        Self::from(DisjointSet::default())
    }
}

impl<V> From<DisjointSet<V>> for SharedDisjointSet<V> {
    fn from(inner: DisjointSet<V>) -> Self {
        Self {
            inner: Mutex::new(inner),
        }
    }
}
