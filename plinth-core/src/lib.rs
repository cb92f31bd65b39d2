//! Plinth core library.
//!
//! Foundational data structures and graph algorithms built on one another:
//! a separate-chaining [`HashTable`], a [`DisjointSetUnion`] stored in two
//! hash tables, an undirected weighted [`Graph`] whose adjacency rows are hash
//! tables, Kruskal's [`minimum_spanning_forest`], a queue-driven
//! [`shortest_path`], and the positional [`TreeArray`].
//!
//! Fallible operations return per-component error enums; every error exposes
//! a stable machine-readable code through `code()`.
#![cfg_attr(docsrs, feature(doc_cfg))]

mod dsu;
mod error;
mod graph;
mod hashtable;
mod mst;
mod shortest_path;
#[cfg(test)]
mod test_utils;
mod tree_array;

pub use crate::{
    dsu::DisjointSetUnion,
    error::{
        DisjointSetError, DisjointSetErrorCode, GraphError, GraphErrorCode, HashTableError,
        HashTableErrorCode, TreeArrayError, TreeArrayErrorCode,
    },
    graph::{Edge, Graph, VertexId, Weight},
    hashtable::{DEFAULT_CAPACITY, HashFn, HashTable, HashTableBuilder, identity_hash},
    mst::{MinimumSpanningForest, minimum_spanning_forest},
    shortest_path::{ShortestPath, shortest_path},
    tree_array::{Iter as TreeArrayIter, TreeArray},
};
