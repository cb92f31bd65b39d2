//! In-order traversal with an explicit stack.

use std::iter::FusedIterator;

use super::{TreeArray, node::NodeId};

/// Borrowing in-order iterator over a [`TreeArray`].
///
/// Created by [`TreeArray::iter`]. The stack holds the ancestors whose left
/// subtrees are being walked, so memory is bounded by the tree height.
#[derive(Clone, Debug)]
pub struct Iter<'a, T> {
    tree: &'a TreeArray<T>,
    stack: Vec<NodeId>,
    cursor: Option<NodeId>,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(super) fn new(tree: &'a TreeArray<T>) -> Self {
        Self {
            tree,
            stack: Vec::new(),
            cursor: tree.root,
            remaining: tree.len(),
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(id) = self.cursor {
            self.stack.push(id);
            self.cursor = self.tree.nodes[id].left;
        }
        let id = self.stack.pop()?;
        let node = &self.tree.nodes[id];
        self.cursor = node.right;
        self.remaining = self.remaining.saturating_sub(1);
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}
