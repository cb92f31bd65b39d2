//! Error types for the plinth core library.
//!
//! Each component reports failures through its own enum, paired with a stable
//! machine-readable code so callers can branch on, log, or count failures
//! without matching on display strings.

use std::fmt;

use thiserror::Error;

use crate::graph::{VertexId, Weight};

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// An error produced by [`crate::HashTable`] operations.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum HashTableError {
    /// The key passed to [`crate::HashTable::delete`] is not present.
    #[error("key not found")]
    KeyNotFound,
    /// A table cannot be created without any buckets.
    #[error("hash table capacity must be at least 1 (got {capacity})")]
    InvalidCapacity {
        /// The rejected capacity.
        capacity: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`HashTableError`] variants.
    enum HashTableErrorCode for HashTableError {
        /// The key passed to delete is not present.
        KeyNotFound => KeyNotFound => "HASH_TABLE_KEY_NOT_FOUND",
        /// A table cannot be created without any buckets.
        InvalidCapacity => InvalidCapacity { .. } => "HASH_TABLE_INVALID_CAPACITY",
    }
}

/// An error produced by [`crate::DisjointSetUnion`] operations.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum DisjointSetError {
    /// The element has never been registered with `create_set`.
    #[error("element {element} is not tracked by the disjoint-set union")]
    ElementNotTracked {
        /// The unknown element.
        element: usize,
    },
    /// `create_set` was called twice for the same element.
    #[error("element {element} is already tracked by the disjoint-set union")]
    ElementAlreadyTracked {
        /// The duplicated element.
        element: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`DisjointSetError`] variants.
    enum DisjointSetErrorCode for DisjointSetError {
        /// The element has never been registered.
        ElementNotTracked => ElementNotTracked { .. } => "DSU_ELEMENT_NOT_TRACKED",
        /// The element was registered twice.
        ElementAlreadyTracked => ElementAlreadyTracked { .. } => "DSU_ELEMENT_ALREADY_TRACKED",
    }
}

/// An error produced by [`crate::Graph`] mutation and by the graph algorithms.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum GraphError {
    /// The vertex is not part of the graph.
    #[error("vertex {vertex} does not exist")]
    VertexNotFound {
        /// The missing vertex.
        vertex: VertexId,
    },
    /// The vertex was created twice.
    #[error("vertex {vertex} already exists")]
    VertexAlreadyExists {
        /// The duplicated vertex.
        vertex: VertexId,
    },
    /// The edge is already present.
    #[error("edge ({left}, {right}) already exists")]
    EdgeAlreadyExists {
        /// First endpoint as supplied by the caller.
        left: VertexId,
        /// Second endpoint as supplied by the caller.
        right: VertexId,
    },
    /// The edge is not present.
    #[error("edge ({left}, {right}) does not exist")]
    EdgeNotFound {
        /// First endpoint as supplied by the caller.
        left: VertexId,
        /// Second endpoint as supplied by the caller.
        right: VertexId,
    },
    /// Edge weights must be non-negative.
    #[error("edge ({left}, {right}) has negative weight {weight}")]
    NegativeWeight {
        /// First endpoint as supplied by the caller.
        left: VertexId,
        /// Second endpoint as supplied by the caller.
        right: VertexId,
        /// The rejected weight.
        weight: Weight,
    },
    /// An edge may not connect a vertex to itself.
    #[error("vertex {vertex} cannot be connected to itself")]
    SelfLoop {
        /// The vertex named as both endpoints.
        vertex: VertexId,
    },
    /// No path connects the source to the target.
    #[error("vertex {to} is unreachable from vertex {from}")]
    TargetUnreachable {
        /// Start of the requested path.
        from: VertexId,
        /// End of the requested path.
        to: VertexId,
    },
    /// A sum of edge weights does not fit in [`Weight`].
    #[error("adding weight {weight} to {total} overflows")]
    WeightOverflow {
        /// Running total before the addition.
        total: Weight,
        /// The edge weight that could not be added.
        weight: Weight,
    },
    /// An internal invariant was violated, indicating a logic error.
    #[error("graph invariant violated: {invariant}")]
    InvariantViolation {
        /// Name of the violated invariant to assist debugging.
        invariant: &'static str,
    },
    /// Wrapped [`HashTableError`] from the adjacency storage.
    #[error("adjacency storage failure: {0}")]
    HashTable(#[from] HashTableError),
    /// Wrapped [`DisjointSetError`] from spanning forest construction.
    #[error("disjoint-set failure: {0}")]
    DisjointSet(#[from] DisjointSetError),
}

define_error_codes! {
    /// Stable codes describing [`GraphError`] variants.
    enum GraphErrorCode for GraphError {
        /// The vertex is not part of the graph.
        VertexNotFound => VertexNotFound { .. } => "GRAPH_VERTEX_NOT_FOUND",
        /// The vertex was created twice.
        VertexAlreadyExists => VertexAlreadyExists { .. } => "GRAPH_VERTEX_ALREADY_EXISTS",
        /// The edge is already present.
        EdgeAlreadyExists => EdgeAlreadyExists { .. } => "GRAPH_EDGE_ALREADY_EXISTS",
        /// The edge is not present.
        EdgeNotFound => EdgeNotFound { .. } => "GRAPH_EDGE_NOT_FOUND",
        /// Edge weights must be non-negative.
        NegativeWeight => NegativeWeight { .. } => "GRAPH_NEGATIVE_WEIGHT",
        /// An edge may not connect a vertex to itself.
        SelfLoop => SelfLoop { .. } => "GRAPH_SELF_LOOP",
        /// No path connects the source to the target.
        TargetUnreachable => TargetUnreachable { .. } => "GRAPH_TARGET_UNREACHABLE",
        /// A sum of edge weights does not fit in the weight type.
        WeightOverflow => WeightOverflow { .. } => "GRAPH_WEIGHT_OVERFLOW",
        /// An internal invariant was violated.
        InvariantViolation => InvariantViolation { .. } => "GRAPH_INVARIANT_VIOLATION",
        /// Adjacency storage failed.
        HashTableFailure => HashTable { .. } => "GRAPH_HASH_TABLE_FAILURE",
        /// Disjoint-set bookkeeping failed.
        DisjointSetFailure => DisjointSet { .. } => "GRAPH_DISJOINT_SET_FAILURE",
    }
}

impl GraphError {
    /// Retrieve the inner [`HashTableErrorCode`] when the error originated in
    /// the adjacency storage.
    #[must_use]
    pub const fn hash_table_code(&self) -> Option<HashTableErrorCode> {
        match self {
            Self::HashTable(error) => Some(error.code()),
            _ => None,
        }
    }
}

/// An error produced by [`crate::TreeArray`] operations.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum TreeArrayError {
    /// The index lies outside the valid range for the operation.
    #[error("index {index} is out of range for length {len}")]
    IndexOutOfRange {
        /// The rejected index.
        index: usize,
        /// Number of elements held when the index was rejected.
        len: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`TreeArrayError`] variants.
    enum TreeArrayErrorCode for TreeArrayError {
        /// The index lies outside the valid range.
        IndexOutOfRange => IndexOutOfRange { .. } => "TREE_ARRAY_INDEX_OUT_OF_RANGE",
    }
}
