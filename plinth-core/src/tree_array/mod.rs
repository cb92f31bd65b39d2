//! Dynamic array backed by an unbalanced, size-annotated binary tree.
//!
//! The in-order traversal of the tree *is* the array: element `i` is the node
//! with exactly `i` nodes before it in order. Each node caches the size of its
//! subtree, so locating rank `i` only compares `i` against left-subtree sizes
//! on the way down. No value comparisons are ever made; the shape depends only
//! on the sequence of insert and remove positions.
//!
//! Nodes are stored in an arena and linked by index. Removing a node compacts
//! the arena with `swap_remove` and re-points the links of the node that moved.
//!
//! Operations cost `O(height)`, which is `O(log n)` for typical insertion
//! orders and `O(n)` in the worst case. Nothing recurses, so deep trees are
//! safe.

mod iter;
mod node;

use std::mem;

use crate::error::TreeArrayError;

pub use self::iter::Iter;
use self::node::{Node, NodeId, Side};

/// A positional sequence with logarithmic average-case indexed updates.
///
/// # Examples
/// ```
/// use plinth_core::TreeArray;
///
/// let mut array = TreeArray::new();
/// array.insert(0, 1).expect("append to empty");
/// array.insert(0, 2).expect("prepend");
/// array.insert(1, 3).expect("insert in the middle");
/// array.insert(3, 10).expect("append");
/// assert_eq!(array.inorder(), vec![2, 3, 1, 10]);
///
/// assert_eq!(array.remove(1), Ok(3));
/// assert_eq!(array.get(1), Ok(&1));
/// assert_eq!(array.len(), 3);
/// ```
#[derive(Clone)]
pub struct TreeArray<T> {
    nodes: Vec<Node<T>>,
    root: Option<NodeId>,
}

impl<T> Default for TreeArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> TreeArray<T> {
    /// Creates an empty array.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            nodes: Vec::new(),
            root: None,
        }
    }

    /// Returns the number of elements, read from the root's cached size.
    #[must_use]
    pub fn len(&self) -> usize {
        self.subtree_size(self.root)
    }

    /// Returns `true` when the array holds no elements.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Returns the element at `index`.
    ///
    /// # Errors
    /// Returns [`TreeArrayError::IndexOutOfRange`] unless `index < len`.
    pub fn get(&self, index: usize) -> Result<&T, TreeArrayError> {
        let id = self.find(index)?;
        Ok(&self.nodes[id].value)
    }

    /// Returns a mutable reference to the element at `index`.
    ///
    /// # Errors
    /// Returns [`TreeArrayError::IndexOutOfRange`] unless `index < len`.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, TreeArrayError> {
        let id = self.find(index)?;
        Ok(&mut self.nodes[id].value)
    }

    /// Replaces the element at `index`, returning the previous value.
    ///
    /// # Errors
    /// Returns [`TreeArrayError::IndexOutOfRange`] unless `index < len`.
    pub fn set(&mut self, index: usize, value: T) -> Result<T, TreeArrayError> {
        Ok(mem::replace(self.get_mut(index)?, value))
    }

    /// Inserts `value` so that it ends up at position `index`, shifting later
    /// elements right. `index == len` appends.
    ///
    /// # Errors
    /// Returns [`TreeArrayError::IndexOutOfRange`] when `index > len`.
    pub fn insert(&mut self, index: usize, value: T) -> Result<(), TreeArrayError> {
        let len = self.len();
        if index > len {
            return Err(TreeArrayError::IndexOutOfRange { index, len });
        }

        let Some(root) = self.root else {
            self.nodes.push(Node::leaf(value, None));
            self.root = Some(self.nodes.len() - 1);
            return Ok(());
        };

        let (parent, side) = if index == 0 {
            (self.leftmost(root), Side::Left)
        } else {
            // Rank `index - 1` is the in-order predecessor of the new slot;
            // when `index == len` it is the last node and has no right child.
            let predecessor = self.find(index - 1)?;
            match self.nodes[predecessor].right {
                Some(right) => (self.leftmost(right), Side::Left),
                None => (predecessor, Side::Right),
            }
        };

        let id = self.nodes.len();
        self.nodes.push(Node::leaf(value, Some(parent)));
        match side {
            Side::Left => self.nodes[parent].left = Some(id),
            Side::Right => self.nodes[parent].right = Some(id),
        }
        self.fix_sizes(Some(parent));
        Ok(())
    }

    /// Appends `value` at the end.
    pub fn push(&mut self, value: T) {
        let mut cursor = self.root;
        let mut parent = None;
        while let Some(id) = cursor {
            parent = Some(id);
            cursor = self.nodes[id].right;
        }

        let id = self.nodes.len();
        self.nodes.push(Node::leaf(value, parent));
        match parent {
            Some(parent) => {
                self.nodes[parent].right = Some(id);
                self.fix_sizes(Some(parent));
            }
            None => self.root = Some(id),
        }
    }

    /// Removes and returns the element at `index`, shifting later elements
    /// left.
    ///
    /// # Errors
    /// Returns [`TreeArrayError::IndexOutOfRange`] unless `index < len`.
    pub fn remove(&mut self, index: usize) -> Result<T, TreeArrayError> {
        let target = self.find(index)?;
        let (left, right, parent) = {
            let node = &self.nodes[target];
            (node.left, node.right, node.parent)
        };

        match (left, right) {
            (None, None) => {
                self.replace_child(parent, target, None);
                self.fix_sizes(parent);
            }
            (Some(child), None) | (None, Some(child)) => {
                self.replace_child(parent, target, Some(child));
                self.nodes[child].parent = parent;
                self.fix_sizes(parent);
            }
            (Some(left), Some(right)) => {
                let fix_from = self.splice_successor(target, left, right);
                self.fix_sizes(Some(fix_from));
            }
        }

        Ok(self.release(target))
    }

    /// Returns an in-order iterator over the elements.
    #[must_use]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    /// Returns the elements in array order.
    #[must_use]
    pub fn inorder(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    fn subtree_size(&self, id: Option<NodeId>) -> usize {
        id.map_or(0, |id| self.nodes[id].size)
    }

    fn find(&self, index: usize) -> Result<NodeId, TreeArrayError> {
        let len = self.len();
        let out_of_range = TreeArrayError::IndexOutOfRange { index, len };
        if index >= len {
            return Err(out_of_range);
        }

        let mut cursor = self.root.ok_or_else(|| out_of_range.clone())?;
        let mut rank = index;
        loop {
            let node = &self.nodes[cursor];
            let left_size = self.subtree_size(node.left);
            cursor = if rank < left_size {
                node.left
            } else if rank == left_size {
                return Ok(cursor);
            } else {
                rank -= left_size + 1;
                node.right
            }
            .ok_or_else(|| out_of_range.clone())?;
        }
    }

    fn leftmost(&self, start: NodeId) -> NodeId {
        let mut cursor = start;
        while let Some(left) = self.nodes[cursor].left {
            cursor = left;
        }
        cursor
    }

    /// Recomputes cached sizes from `start` up to the root.
    fn fix_sizes(&mut self, start: Option<NodeId>) {
        let mut cursor = start;
        while let Some(id) = cursor {
            let node = &self.nodes[id];
            let size = 1 + self.subtree_size(node.left) + self.subtree_size(node.right);
            let parent = node.parent;
            self.nodes[id].size = size;
            cursor = parent;
        }
    }

    /// Points the slot that held `old` (a child of `parent`, or the root) at
    /// `new`.
    fn replace_child(&mut self, parent: Option<NodeId>, old: NodeId, new: Option<NodeId>) {
        match parent {
            None => self.root = new,
            Some(parent) => {
                let node = &mut self.nodes[parent];
                if node.left == Some(old) {
                    node.left = new;
                } else {
                    node.right = new;
                }
            }
        }
    }

    /// Moves the in-order successor of `target` into its place and returns
    /// the deepest node whose subtree size changed.
    fn splice_successor(&mut self, target: NodeId, left: NodeId, right: NodeId) -> NodeId {
        let mut successor_parent = target;
        let mut successor = right;
        while let Some(next) = self.nodes[successor].left {
            successor_parent = successor;
            successor = next;
        }

        let fix_from = if successor_parent == target {
            successor
        } else {
            // Lift the successor out, handing its right subtree to its parent.
            let orphan = self.nodes[successor].right;
            self.nodes[successor_parent].left = orphan;
            if let Some(orphan) = orphan {
                self.nodes[orphan].parent = Some(successor_parent);
            }
            self.nodes[successor].right = Some(right);
            self.nodes[right].parent = Some(successor);
            successor_parent
        };

        let parent = self.nodes[target].parent;
        self.nodes[successor].left = Some(left);
        self.nodes[left].parent = Some(successor);
        self.nodes[successor].parent = parent;
        self.replace_child(parent, target, Some(successor));
        fix_from
    }

    /// Frees the slot of a node that is no longer linked into the tree.
    fn release(&mut self, id: NodeId) -> T {
        let removed = self.nodes.swap_remove(id);
        let moved_from = self.nodes.len();
        if id == moved_from {
            return removed.value;
        }

        let (parent, left, right) = {
            let node = &self.nodes[id];
            (node.parent, node.left, node.right)
        };
        match parent {
            None => self.root = Some(id),
            Some(parent) => {
                let node = &mut self.nodes[parent];
                if node.left == Some(moved_from) {
                    node.left = Some(id);
                } else {
                    node.right = Some(id);
                }
            }
        }
        for child in [left, right].into_iter().flatten() {
            self.nodes[child].parent = Some(id);
        }
        removed.value
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for TreeArray<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<'a, T> IntoIterator for &'a TreeArray<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> FromIterator<T> for TreeArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut array = Self::new();
        array.extend(iter);
        array
    }
}

impl<T> Extend<T> for TreeArray<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}
