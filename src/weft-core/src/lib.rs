//! Core data model for weft hypergraphs.
//!
//! This crate provides the fundamental types:
//! - `Registry`, `NodeId`, `EdgeId` for identity management
//! - `IncidenceStore` for the node ↔ edge relation
//! - `Hypergraph` as the validating facade over both
//! - `traversal` for neighbor expansion, search and components

pub mod hypergraph;
pub mod traversal;

#[cfg(any(test, feature = "test-utils"))]
pub mod testing;

#[cfg(test)]
mod proptest_utils;

// Re-export commonly used types
pub use hypergraph::{
    DEFAULT_WEIGHT, EdgeId, EntityId, Hyperedge, Hypergraph, IncidenceStore, IncidenceView,
    Label, Node, NodeId, Registry,
};
pub use traversal::{Bfs, PathStep};
