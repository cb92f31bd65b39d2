//! Arena node for [`super::TreeArray`].

/// Index of a node within the tree's arena.
pub(super) type NodeId = usize;

/// A tree node.
///
/// `left` and `right` are owning links: a node is reachable from the root
/// only through its parent's child slot. `parent` is a plain back-reference
/// used to walk upwards when subtree sizes change.
#[derive(Clone, Debug)]
pub(super) struct Node<T> {
    pub(super) value: T,
    pub(super) left: Option<NodeId>,
    pub(super) right: Option<NodeId>,
    pub(super) parent: Option<NodeId>,
    /// Number of nodes in the subtree rooted here, this node included.
    pub(super) size: usize,
}

impl<T> Node<T> {
    pub(super) const fn leaf(value: T, parent: Option<NodeId>) -> Self {
        Self {
            value,
            left: None,
            right: None,
            parent,
            size: 1,
        }
    }
}

/// Which child slot a new node is attached to.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum Side {
    Left,
    Right,
}
