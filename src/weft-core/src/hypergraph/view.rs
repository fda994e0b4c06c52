//! Read-only query surface over a hypergraph.

use super::{EdgeId, NodeId};

/// Read-only access to registered entities and their incidence.
///
/// Traversal and conversion algorithms are written against this trait so
/// they can only observe a hypergraph, never mutate it. Enumeration order of
/// `node_ids` and `edge_ids` is creation order; incident/member iteration
/// order is unspecified.
pub trait IncidenceView {
    /// Registered nodes in creation order.
    fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_;

    /// Registered edges in creation order.
    fn edge_ids(&self) -> impl Iterator<Item = EdgeId> + '_;

    fn node_count(&self) -> usize;

    fn edge_count(&self) -> usize;

    fn contains_node(&self, node: NodeId) -> bool;

    fn contains_edge(&self, edge: EdgeId) -> bool;

    /// Edges incident to `node`; empty for an unknown node.
    fn incident_edges(&self, node: NodeId) -> impl Iterator<Item = EdgeId> + '_;

    /// Nodes contained in `edge`; empty for an unknown edge.
    fn member_nodes(&self, edge: EdgeId) -> impl Iterator<Item = NodeId> + '_;

    /// Weight of `edge`, `None` for an unknown edge.
    fn edge_weight(&self, edge: EdgeId) -> Option<f64>;
}
