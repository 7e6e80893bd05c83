//! Keyed union-find (disjoint set union) over graph vertices.
//!
//! Vertices are interned into a flat arena on registration, so parent links
//! are slot indices rather than references. `find` compresses paths
//! iteratively and `union` attaches the smaller component under the larger
//! one, giving near-constant amortised cost per operation.

mod shared;

use std::collections::HashMap;

use crate::{
    Result,
    error::BarcodeError,
    graph::VertexId,
};

pub use self::shared::SharedDisjointSet;

/// Partition of a registered vertex universe into disjoint components.
///
/// # Examples
/// ```
/// use barcode_core::DisjointSet;
///
/// let mut set = DisjointSet::new();
/// for vertex in ["a", "b", "c"] {
///     set.register(vertex);
/// }
/// assert!(set.union(&"a", &"b")?);
/// assert!(!set.union(&"b", &"a")?);
/// assert_eq!(set.find(&"b")?, &"a");
/// assert_eq!(set.component_count(), 2);
/// # Ok::<(), barcode_core::BarcodeError>(())
/// ```
#[derive(Clone, Debug)]
pub struct DisjointSet<V> {
    members: Vec<V>,
    index: HashMap<V, usize>,
    parent: Vec<usize>,
    size: Vec<usize>,
    components: usize,
}

impl<V> Default for DisjointSet<V> {
    fn default() -> Self {
        Self {
            members: Vec::new(),
            index: HashMap::new(),
            parent: Vec::new(),
            size: Vec::new(),
            components: 0,
        }
    }
}

impl<V: VertexId> DisjointSet<V> {
    /// Creates an empty disjoint set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty disjoint set with room for `capacity` vertices.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            members: Vec::with_capacity(capacity),
            index: HashMap::with_capacity(capacity),
            parent: Vec::with_capacity(capacity),
            size: Vec::with_capacity(capacity),
            components: 0,
        }
    }

    /// Registers `vertex` as a singleton component.
    ///
    /// Registering a known vertex changes nothing. Returns `true` when the
    /// vertex was new.
    pub fn register(&mut self, vertex: V) -> bool {
        if self.index.contains_key(&vertex) {
            return false;
        }
        let slot = self.members.len();
        self.index.insert(vertex.clone(), slot);
        self.members.push(vertex);
        self.parent.push(slot);
        self.size.push(1);
        self.components = self.components.saturating_add(1);
        true
    }

    /// Returns `true` when `vertex` has been registered.
    #[must_use]
    pub fn contains(&self, vertex: &V) -> bool {
        self.index.contains_key(vertex)
    }

    /// Returns the number of registered vertices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Returns `true` when no vertex has been registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Returns the number of disjoint components.
    #[must_use]
    pub fn component_count(&self) -> usize {
        self.components
    }

    /// Returns the representative of the component containing `vertex`.
    ///
    /// Every vertex visited on the way is re-pointed at the representative.
    ///
    /// # Errors
    /// Returns [`BarcodeError::UnregisteredVertex`] when `vertex` is unknown.
    pub fn find(&mut self, vertex: &V) -> Result<&V> {
        let slot = self.slot(vertex)?;
        let root = self.find_slot(slot);
        Ok(&self.members[root])
    }

    /// Merges the components containing `left` and `right`.
    ///
    /// The smaller component is attached under the larger one's
    /// representative; on equal sizes `right`'s representative moves under
    /// `left`'s. Returns `false` when both already share a component.
    ///
    /// # Errors
    /// Returns [`BarcodeError::UnregisteredVertex`] when either vertex is
    /// unknown. Nothing is modified in that case.
    pub fn union(&mut self, left: &V, right: &V) -> Result<bool> {
        let left_slot = self.slot(left)?;
        let right_slot = self.slot(right)?;
        let left_root = self.find_slot(left_slot);
        let right_root = self.find_slot(right_slot);
        if left_root == right_root {
            return Ok(false);
        }

        let (parent, child) = if self.size[left_root] < self.size[right_root] {
            (right_root, left_root)
        } else {
            (left_root, right_root)
        };
        self.parent[child] = parent;
        self.size[parent] = self.size[parent].saturating_add(self.size[child]);
        self.components = self.components.saturating_sub(1);
        Ok(true)
    }

    /// Returns `true` when `left` and `right` share a representative.
    ///
    /// # Errors
    /// Returns [`BarcodeError::UnregisteredVertex`] when either vertex is
    /// unknown.
    pub fn same_component(&mut self, left: &V, right: &V) -> Result<bool> {
        let left_slot = self.slot(left)?;
        let right_slot = self.slot(right)?;
        Ok(self.find_slot(left_slot) == self.find_slot(right_slot))
    }

    /// Returns the number of vertices in the component containing `vertex`.
    ///
    /// # Errors
    /// Returns [`BarcodeError::UnregisteredVertex`] when `vertex` is unknown.
    pub fn component_size(&self, vertex: &V) -> Result<usize> {
        let slot = self.slot(vertex)?;
        Ok(self.size[self.root_of(slot)])
    }

    /// Groups every registered vertex by component.
    ///
    /// Groups are ordered by their earliest-registered member and list
    /// members in registration order.
    #[must_use]
    pub fn components(&self) -> Vec<Vec<&V>> {
        let mut group_of_root: HashMap<usize, usize> = HashMap::new();
        let mut groups: Vec<Vec<&V>> = Vec::with_capacity(self.components);
        for (slot, member) in self.members.iter().enumerate() {
            let root = self.root_of(slot);
            let group = *group_of_root.entry(root).or_insert_with(|| {
                groups.push(Vec::new());
                groups.len() - 1
            });
            groups[group].push(member);
        }
        groups
    }

    /// Iterates over the representatives together with their component sizes.
    pub fn representatives(&self) -> impl Iterator<Item = (&V, usize)> + '_ {
        self.members
            .iter()
            .enumerate()
            .filter(|(slot, _)| self.parent[*slot] == *slot)
            .map(|(slot, member)| (member, self.size[slot]))
    }

    fn slot(&self, vertex: &V) -> Result<usize> {
        self.index
            .get(vertex)
            .copied()
            .ok_or_else(|| BarcodeError::unregistered(vertex))
    }

    fn root_of(&self, mut slot: usize) -> usize {
        while self.parent[slot] != slot {
            slot = self.parent[slot];
        }
        slot
    }

    fn find_slot(&mut self, mut slot: usize) -> usize {
        let root = self.root_of(slot);
        while self.parent[slot] != root {
            let next = self.parent[slot];
            self.parent[slot] = root;
            slot = next;
        }
        root
    }

    #[cfg(test)]
    fn depth(&self, vertex: &V) -> Option<usize> {
        let mut slot = *self.index.get(vertex)?;
        let mut depth = 0;
        while self.parent[slot] != slot {
            slot = self.parent[slot];
            depth += 1;
        }
        Some(depth)
    }
}
