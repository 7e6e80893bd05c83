//! Per-vertex persistence intervals ("barcodes").
//!
//! Every vertex owns exactly one interval. Birth is always `0`; death starts
//! at `+inf` and becomes finite when the vertex joins another component
//! during the forest sweep.

use std::collections::HashMap;

use crate::graph::VertexId;

/// A `(birth, death)` pair for one vertex.
///
/// An unbounded death (`f64::INFINITY`) marks a component that never merged.
///
/// # Examples
/// ```
/// use barcode_core::Interval;
///
/// let open = Interval::unbounded();
/// assert!(open.is_unbounded());
///
/// let closed = Interval::dying_at(0.5);
/// assert_eq!(closed.birth(), 0.0);
/// assert_eq!(closed.death(), 0.5);
/// assert_eq!(closed.persistence(), 0.5);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Interval {
    birth: f64,
    death: f64,
}

impl Interval {
    /// Birth shared by every interval.
    pub const BIRTH: f64 = 0.0;

    /// Returns the interval of a vertex that has not merged yet.
    #[must_use]
    pub const fn unbounded() -> Self {
        Self {
            birth: Self::BIRTH,
            death: f64::INFINITY,
        }
    }

    /// Returns an interval born at `0` and dying at `death`.
    #[must_use]
    pub const fn dying_at(death: f64) -> Self {
        Self {
            birth: Self::BIRTH,
            death,
        }
    }

    /// Returns the birth value.
    #[must_use]
    #[rustfmt::skip]
    pub const fn birth(&self) -> f64 { self.birth }

    /// Returns the death value, `f64::INFINITY` when unbounded.
    #[must_use]
    #[rustfmt::skip]
    pub const fn death(&self) -> f64 { self.death }

    /// Returns `true` when the death is the unbounded sentinel.
    #[must_use]
    pub fn is_unbounded(&self) -> bool {
        self.death.is_infinite()
    }

    /// Returns `death - birth`.
    #[must_use]
    pub fn persistence(&self) -> f64 {
        self.death - self.birth
    }
}

impl Default for Interval {
    fn default() -> Self {
        Self::unbounded()
    }
}

/// Mapping from vertex to [`Interval`], in vertex enumeration order.
#[derive(Clone, Debug)]
pub struct Barcodes<V> {
    entries: Vec<(V, Interval)>,
    index: HashMap<V, usize>,
}

impl<V: VertexId> Barcodes<V> {
    /// Creates an unbounded interval for each distinct vertex.
    pub(crate) fn unbounded_for(vertices: &[V]) -> Self {
        let mut entries = Vec::with_capacity(vertices.len());
        let mut index = HashMap::with_capacity(vertices.len());
        for vertex in vertices {
            if index.contains_key(vertex) {
                continue;
            }
            index.insert(vertex.clone(), entries.len());
            entries.push((vertex.clone(), Interval::unbounded()));
        }
        Self { entries, index }
    }

    /// Returns the interval of `vertex`.
    #[must_use]
    pub fn get(&self, vertex: &V) -> Option<&Interval> {
        let slot = *self.index.get(vertex)?;
        self.entries.get(slot).map(|(_, interval)| interval)
    }

    pub(crate) fn get_mut(&mut self, vertex: &V) -> Option<&mut Interval> {
        let slot = *self.index.get(vertex)?;
        self.entries.get_mut(slot).map(|(_, interval)| interval)
    }

    /// Returns the number of vertices covered.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when no vertex is covered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over `(vertex, interval)` pairs in vertex order.
    pub fn iter(&self) -> impl Iterator<Item = (&V, &Interval)> + '_ {
        self.entries.iter().map(|(vertex, interval)| (vertex, interval))
    }

    /// Iterates over the intervals with a finite death.
    pub fn finite(&self) -> impl Iterator<Item = (&V, &Interval)> + '_ {
        self.iter().filter(|(_, interval)| !interval.is_unbounded())
    }

    /// Returns how many vertices kept an unbounded death.
    #[must_use]
    pub fn unbounded_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|(_, interval)| interval.is_unbounded())
            .count()
    }

    /// Consumes the mapping and returns the entries in vertex order.
    #[must_use]
    pub fn into_vec(self) -> Vec<(V, Interval)> {
        self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unbounded_for_deduplicates_vertices() {
        let barcodes = Barcodes::unbounded_for(&["x", "y", "x"]);
        assert_eq!(barcodes.len(), 2);
        assert_eq!(barcodes.unbounded_count(), 2);
        assert_eq!(barcodes.get(&"x"), Some(&Interval::unbounded()));
        assert!(barcodes.get(&"z").is_none());
    }

    #[test]
    fn finite_skips_unbounded_entries() {
        let mut barcodes = Barcodes::unbounded_for(&["x", "y", "z"]);
        if let Some(interval) = barcodes.get_mut(&"y") {
            *interval = Interval::dying_at(0.25);
        }
        let finite: Vec<(&str, f64)> = barcodes
            .finite()
            .map(|(vertex, interval)| (*vertex, interval.death()))
            .collect();
        assert_eq!(finite, vec![("y", 0.25)]);
        assert_eq!(barcodes.unbounded_count(), 2);
    }

    #[test]
    fn unbounded_interval_has_infinite_persistence() {
        let interval = Interval::default();
        assert_eq!(interval.birth(), 0.0);
        assert!(interval.persistence().is_infinite());
    }
}
