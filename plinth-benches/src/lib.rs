//! Benchmark support crate for plinth.
//!
//! Provides seeded synthetic graphs, insertion workloads and parameter types
//! used by the Criterion benchmarks for the hash table, the graph algorithms
//! and the tree-backed array.

pub mod error;
pub mod params;
pub mod source;
