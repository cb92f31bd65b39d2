//! Disjoint-set union (union-find) over integer elements.
//!
//! Parent links and set sizes are kept in two [`HashTable`]s so elements do
//! not need to be dense. `find_set` compresses paths iteratively, and `union`
//! attaches the root of the smaller set beneath the root of the larger one.

use crate::{
    error::DisjointSetError,
    hashtable::{HashTable, identity_hash},
};

/// Union-find structure tracking a partition of `usize` elements.
///
/// # Examples
/// ```
/// use plinth_core::DisjointSetUnion;
///
/// let mut sets = DisjointSetUnion::new();
/// for element in [1, 2, 3] {
///     sets.create_set(element).expect("fresh element");
/// }
/// sets.union(1, 2).expect("tracked elements");
/// assert!(sets.same_set(1, 2).expect("tracked elements"));
/// assert!(!sets.same_set(1, 3).expect("tracked elements"));
/// ```
#[derive(Clone, Debug)]
pub struct DisjointSetUnion {
    parent: HashTable<usize, usize>,
    size: HashTable<usize, usize>,
}

impl Default for DisjointSetUnion {
    fn default() -> Self {
        Self::new()
    }
}

impl DisjointSetUnion {
    /// Creates an empty structure with no tracked elements.
    #[must_use]
    pub fn new() -> Self {
        Self {
            parent: HashTable::new(identity_hash),
            size: HashTable::new(identity_hash),
        }
    }

    /// Returns the number of tracked elements.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.parent.len()
    }

    /// Returns `true` when no element is tracked.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Returns `true` when `element` has been registered.
    #[must_use]
    pub fn contains(&self, element: usize) -> bool {
        self.parent.contains_key(&element)
    }

    /// Registers `element` as a singleton set.
    ///
    /// # Errors
    /// Returns [`DisjointSetError::ElementAlreadyTracked`] when the element is
    /// already registered; its set membership is left untouched.
    pub fn create_set(&mut self, element: usize) -> Result<(), DisjointSetError> {
        if self.contains(element) {
            return Err(DisjointSetError::ElementAlreadyTracked { element });
        }
        self.parent.set(element, element);
        self.size.set(element, 1);
        Ok(())
    }

    /// Returns the representative of the set containing `element`.
    ///
    /// Every element visited on the way to the root is re-pointed directly at
    /// the root.
    ///
    /// # Errors
    /// Returns [`DisjointSetError::ElementNotTracked`] for unknown elements.
    pub fn find_set(&mut self, element: usize) -> Result<usize, DisjointSetError> {
        let root = self.root_of(element)?;

        let mut node = element;
        while node != root {
            let next = self.parent_of(node)?;
            self.parent.set(node, root);
            node = next;
        }

        Ok(root)
    }

    /// Merges the sets containing `left` and `right` and returns the
    /// representative of the merged set.
    ///
    /// The smaller set's root is attached under the larger set's root; on a
    /// tie the left root is attached under the right root. Merging an element
    /// with its own set changes nothing.
    ///
    /// # Errors
    /// Returns [`DisjointSetError::ElementNotTracked`] for unknown elements.
    pub fn union(&mut self, left: usize, right: usize) -> Result<usize, DisjointSetError> {
        let left_root = self.find_set(left)?;
        let right_root = self.find_set(right)?;
        if left_root == right_root {
            return Ok(left_root);
        }

        let left_size = self.size_of_root(left_root)?;
        let right_size = self.size_of_root(right_root)?;
        let (parent, child) = if left_size > right_size {
            (left_root, right_root)
        } else {
            (right_root, left_root)
        };

        self.parent.set(child, parent);
        self.size.set(parent, left_size.saturating_add(right_size));
        Ok(parent)
    }

    /// Returns `true` when both elements share a representative.
    ///
    /// # Errors
    /// Returns [`DisjointSetError::ElementNotTracked`] for unknown elements.
    pub fn same_set(&mut self, left: usize, right: usize) -> Result<bool, DisjointSetError> {
        Ok(self.find_set(left)? == self.find_set(right)?)
    }

    /// Returns the number of elements in the set containing `element`.
    ///
    /// # Errors
    /// Returns [`DisjointSetError::ElementNotTracked`] for unknown elements.
    pub fn set_size(&mut self, element: usize) -> Result<usize, DisjointSetError> {
        let root = self.find_set(element)?;
        self.size_of_root(root)
    }

    fn parent_of(&self, element: usize) -> Result<usize, DisjointSetError> {
        self.parent
            .get(&element)
            .copied()
            .ok_or(DisjointSetError::ElementNotTracked { element })
    }

    fn root_of(&self, element: usize) -> Result<usize, DisjointSetError> {
        let mut root = element;
        loop {
            let parent = self.parent_of(root)?;
            if parent == root {
                return Ok(root);
            }
            root = parent;
        }
    }

    fn size_of_root(&self, root: usize) -> Result<usize, DisjointSetError> {
        self.size
            .get(&root)
            .copied()
            .ok_or(DisjointSetError::ElementNotTracked { element: root })
    }
}
