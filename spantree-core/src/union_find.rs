//! Union-find (disjoint set) over a fixed element population.
//!
//! Kruskal must ask, for each candidate edge in ascending weight order,
//! whether its endpoints already share a component. Union by rank plus
//! two-pass path compression keeps both `find` and `union` near-O(1)
//! amortised, leaving Kruskal dominated by its initial edge sort.

use thiserror::Error;

/// Error raised by [`DisjointSet`] operations on out-of-range elements.
#[derive(Clone, Copy, Debug, Error, Eq, PartialEq)]
#[non_exhaustive]
pub enum DisjointSetError {
    /// An element id fell outside `0..len`.
    #[error("element {element} is out of bounds, len is {len}")]
    IndexOutOfBounds {
        /// The offending element id.
        element: usize,
        /// The number of elements in the partition.
        len: usize,
    },
}

/// A partition of `0..len` into disjoint sets.
///
/// # Examples
/// ```
/// use spantree_core::DisjointSet;
///
/// let mut sets = DisjointSet::new(4);
/// assert!(sets.union(0, 1)?);
/// assert!(!sets.union(1, 0)?);
/// assert!(sets.is_connected(0, 1)?);
/// assert!(!sets.is_connected(0, 2)?);
/// assert_eq!(sets.set_count(), 3);
/// # Ok::<(), spantree_core::DisjointSetError>(())
/// ```
#[derive(Clone, Debug)]
pub struct DisjointSet {
    parent: Vec<usize>,
    rank: Vec<u8>,
    set_count: usize,
}

impl DisjointSet {
    /// Creates a partition where every element is its own singleton set.
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self {
            parent: (0..len).collect(),
            rank: vec![0; len],
            set_count: len,
        }
    }

    /// Returns the number of elements in the partition.
    #[must_use]
    #[rustfmt::skip]
    pub fn len(&self) -> usize { self.parent.len() }

    /// Returns `true` when the partition has no elements.
    #[must_use]
    #[rustfmt::skip]
    pub fn is_empty(&self) -> bool { self.parent.is_empty() }

    /// Returns the number of disjoint sets currently in the partition.
    #[must_use]
    #[rustfmt::skip]
    pub const fn set_count(&self) -> usize { self.set_count }

    /// Returns the canonical representative of `element`'s set,
    /// compressing the traversed path.
    ///
    /// # Errors
    ///
    /// Returns [`DisjointSetError::IndexOutOfBounds`] when `element` is
    /// outside `0..len`.
    pub fn find(&mut self, element: usize) -> Result<usize, DisjointSetError> {
        self.check_element(element)?;

        let mut root = element;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        let mut node = element;
        while self.parent[node] != node {
            let parent = self.parent[node];
            self.parent[node] = root;
            node = parent;
        }

        Ok(root)
    }

    /// Merges the sets containing `left` and `right`.
    ///
    /// Returns `true` when two distinct sets were merged and `false` when
    /// the elements were already connected, which makes the operation
    /// idempotent. The shallower root is attached under the deeper one;
    /// on a rank tie the larger root id is attached under the smaller.
    ///
    /// # Errors
    ///
    /// Returns [`DisjointSetError::IndexOutOfBounds`] when either element
    /// is outside `0..len`.
    pub fn union(&mut self, left: usize, right: usize) -> Result<bool, DisjointSetError> {
        let mut left_root = self.find(left)?;
        let mut right_root = self.find(right)?;
        if left_root == right_root {
            return Ok(false);
        }

        let left_rank = self.rank[left_root];
        let right_rank = self.rank[right_root];
        if left_rank < right_rank || (left_rank == right_rank && right_root < left_root) {
            std::mem::swap(&mut left_root, &mut right_root);
        }

        self.parent[right_root] = left_root;
        if left_rank == right_rank {
            self.rank[left_root] = self.rank[left_root].saturating_add(1);
        }
        self.set_count -= 1;
        Ok(true)
    }

    /// Reports whether two elements belong to the same set.
    ///
    /// # Errors
    ///
    /// Returns [`DisjointSetError::IndexOutOfBounds`] when either element
    /// is outside `0..len`.
    pub fn is_connected(&mut self, left: usize, right: usize) -> Result<bool, DisjointSetError> {
        Ok(self.find(left)? == self.find(right)?)
    }

    fn check_element(&self, element: usize) -> Result<(), DisjointSetError> {
        if element >= self.parent.len() {
            return Err(DisjointSetError::IndexOutOfBounds {
                element,
                len: self.parent.len(),
            });
        }
        Ok(())
    }
}
