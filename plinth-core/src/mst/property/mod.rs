//! Property-based tests for Kruskal's minimum spanning forest.
//!
//! Compares the forest against a brute-force oracle on small graphs and
//! checks structural invariants (acyclicity, edge count, weight order) on
//! larger ones.

mod oracle;
mod strategies;
