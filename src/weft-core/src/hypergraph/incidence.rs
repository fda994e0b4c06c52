//! Incidence store.
//!
//! Two synchronized indices, node → edges and edge → nodes. Every mutation
//! touches both sides together so that "edge E lists node N" holds exactly
//! when "node N lists edge E". The store only holds identities; payloads
//! live in the registries.

use std::collections::HashMap;

use common_error::{WeftError, WeftResult};
use indexmap::IndexSet;

use super::{EdgeId, NodeId};

/// Bidirectional node ↔ edge incidence relation.
///
/// `link` and `unlink` are O(1) amortized; `purge_*` is O(degree). Member
/// sets use swap-removal, so their iteration order is insertion order only
/// until the first unlink. Callers that need a stable order sort by id.
#[derive(Debug, Clone, Default)]
pub struct IncidenceStore {
    node_edges: HashMap<NodeId, IndexSet<EdgeId>>,
    edge_nodes: HashMap<EdgeId, IndexSet<NodeId>>,
}

impl IncidenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store with room for the given number of nodes and edges.
    pub fn with_capacity(nodes: usize, edges: usize) -> Self {
        Self {
            node_edges: HashMap::with_capacity(nodes),
            edge_nodes: HashMap::with_capacity(edges),
        }
    }

    /// Link `node` and `edge`. Returns `false` if they were already linked.
    pub fn link(&mut self, node: NodeId, edge: EdgeId) -> bool {
        let added = self.edge_nodes.entry(edge).or_default().insert(node);
        self.node_edges.entry(node).or_default().insert(edge);
        added
    }

    /// Unlink `node` and `edge`. Returns `false` if they were not linked.
    pub fn unlink(&mut self, node: NodeId, edge: EdgeId) -> bool {
        let removed = self
            .edge_nodes
            .get_mut(&edge)
            .is_some_and(|nodes| nodes.swap_remove(&node));
        if let Some(edges) = self.node_edges.get_mut(&node) {
            edges.swap_remove(&edge);
        }
        removed
    }

    /// Whether `node` and `edge` are linked.
    pub fn contains(&self, node: NodeId, edge: EdgeId) -> bool {
        self.edge_nodes
            .get(&edge)
            .is_some_and(|nodes| nodes.contains(&node))
    }

    /// Edges incident to `node`, read from live state.
    ///
    /// The iterator borrows the store, so it cannot observe a removal made
    /// after it was created; call again to restart.
    pub fn edges_of(&self, node: NodeId) -> impl Iterator<Item = EdgeId> + Clone + '_ {
        self.node_edges
            .get(&node)
            .into_iter()
            .flat_map(|edges| edges.iter().copied())
    }

    /// Nodes contained in `edge`.
    pub fn nodes_of(&self, edge: EdgeId) -> impl Iterator<Item = NodeId> + Clone + '_ {
        self.edge_nodes
            .get(&edge)
            .into_iter()
            .flat_map(|nodes| nodes.iter().copied())
    }

    /// Number of edges incident to `node`.
    pub fn degree(&self, node: NodeId) -> usize {
        self.node_edges.get(&node).map_or(0, IndexSet::len)
    }

    /// Number of nodes in `edge`.
    pub fn edge_size(&self, edge: EdgeId) -> usize {
        self.edge_nodes.get(&edge).map_or(0, IndexSet::len)
    }

    /// Unlink `node` from every edge it touches and drop its index entry.
    ///
    /// Returns the edges that were linked.
    pub fn purge_node(&mut self, node: NodeId) -> Vec<EdgeId> {
        let edges = self.node_edges.remove(&node).unwrap_or_default();
        for edge in &edges {
            if let Some(nodes) = self.edge_nodes.get_mut(edge) {
                nodes.swap_remove(&node);
            }
        }
        edges.into_iter().collect()
    }

    /// Unlink `edge` from every node it touches and drop its index entry.
    ///
    /// Returns the nodes that were linked.
    pub fn purge_edge(&mut self, edge: EdgeId) -> Vec<NodeId> {
        let nodes = self.edge_nodes.remove(&edge).unwrap_or_default();
        for node in &nodes {
            if let Some(edges) = self.node_edges.get_mut(node) {
                edges.swap_remove(&edge);
            }
        }
        nodes.into_iter().collect()
    }

    /// Nodes that currently have an index entry.
    pub fn indexed_nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.node_edges.keys().copied()
    }

    /// Edges that currently have an index entry.
    pub fn indexed_edges(&self) -> impl Iterator<Item = EdgeId> + '_ {
        self.edge_nodes.keys().copied()
    }

    /// Total number of incidence pairs.
    pub fn pair_count(&self) -> usize {
        self.edge_nodes.values().map(IndexSet::len).sum()
    }

    /// Check that the two indices are exact inverses.
    pub fn check_symmetry(&self) -> WeftResult<()> {
        for (edge, nodes) in &self.edge_nodes {
            for node in nodes {
                let mirrored = self
                    .node_edges
                    .get(node)
                    .is_some_and(|edges| edges.contains(edge));
                if !mirrored {
                    return Err(WeftError::internal(format!(
                        "edge {edge} lists node {node} but node {node} does not list edge {edge}"
                    )));
                }
            }
        }
        for (node, edges) in &self.node_edges {
            for edge in edges {
                if !self.contains(*node, *edge) {
                    return Err(WeftError::internal(format!(
                        "node {node} lists edge {edge} but edge {edge} does not list node {node}"
                    )));
                }
            }
        }
        Ok(())
    }
}
