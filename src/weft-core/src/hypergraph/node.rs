//! Node representation.

use super::{Label, NodeId};

/// A node in the hypergraph.
///
/// The payload is opaque to the hypergraph: it is stored and handed back
/// unchanged, never inspected.
#[derive(Debug, Clone, PartialEq)]
pub struct Node<N> {
    /// Unique node identifier.
    pub id: NodeId,
    /// Optional display label.
    pub label: Option<Label>,
    /// User payload.
    pub data: N,
}

impl<N> Node<N> {
    pub(crate) fn new(id: NodeId, data: N) -> Self {
        Self {
            id,
            label: None,
            data,
        }
    }

    /// Get the label, if any.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Check if this node carries the given label.
    pub fn has_label(&self, label: &str) -> bool {
        self.label() == Some(label)
    }
}
