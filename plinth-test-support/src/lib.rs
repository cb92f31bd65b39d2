//! Shared test utilities for the plinth workspace.

pub mod profile;
pub mod tracing;
