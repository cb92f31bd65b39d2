//! Seeded synthetic workloads.
//!
//! Every generator is driven by a `SmallRng` seeded from its configuration,
//! so repeated runs measure identical inputs.

mod errors;
mod graph;
mod positions;

pub use errors::SyntheticError;
pub use graph::{SyntheticGraph, SyntheticGraphConfig};
pub use positions::InsertionPattern;
