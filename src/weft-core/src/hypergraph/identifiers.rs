//! Type identifiers for graph elements.

use std::fmt;
use std::hash::Hash;

use serde::{Deserialize, Serialize};

/// Node identifier.
///
/// Identifiers are handed out by a [`Registry`](super::Registry) in strictly
/// increasing order and are never reused within one hypergraph, so ordering
/// by id is ordering by creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(u64);

/// Edge/Hyperedge identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EdgeId(u64);

/// Common behaviour of registry-allocated identifiers.
pub trait EntityId: Copy + Ord + Hash + fmt::Debug + fmt::Display {
    /// Entity kind name used in error messages.
    const KIND: &'static str;

    /// Wrap a raw value.
    fn from_raw(raw: u64) -> Self;

    /// The raw numeric value.
    fn raw(self) -> u64;
}

impl EntityId for NodeId {
    const KIND: &'static str = "node";

    fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    fn raw(self) -> u64 {
        self.0
    }
}

impl EntityId for EdgeId {
    const KIND: &'static str = "edge";

    fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n{}", self.0)
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "e{}", self.0)
    }
}

/// Label type for optional display names on nodes and edges.
pub type Label = String;
