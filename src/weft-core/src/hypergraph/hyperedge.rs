//! N-ary hyperedge representation.

use super::{EdgeId, Label};

/// Default weight of an edge created without an explicit one.
pub const DEFAULT_WEIGHT: f64 = 1.0;

/// A hyperedge record.
///
/// The member nodes are not stored here; they live in the incidence store
/// so the relation has a single source of truth.
#[derive(Debug, Clone, PartialEq)]
pub struct Hyperedge<E> {
    /// Unique hyperedge identifier.
    pub id: EdgeId,
    /// Optional display label.
    pub label: Option<Label>,
    /// Finite and positive; changed only through `Hypergraph::set_edge_weight`.
    pub(crate) weight: f64,
    /// User payload.
    pub data: E,
}

impl<E> Hyperedge<E> {
    pub(crate) fn new(id: EdgeId, weight: f64, data: E) -> Self {
        Self {
            id,
            label: None,
            weight,
            data,
        }
    }

    /// Get the label, if any.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Check if this edge carries the default weight.
    pub fn is_unweighted(&self) -> bool {
        self.weight == DEFAULT_WEIGHT
    }
}
