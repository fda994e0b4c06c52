//! Hypergraph container - canonical user-facing abstraction.
//!
//! The facade owns the node and edge registries and the incidence store,
//! validates every request up front, and only then touches the indices, so a
//! call that returns an error has changed nothing.

use std::collections::{BTreeSet, HashSet};

use common_config::{EmptyEdgePolicy, GraphConfig};
use common_error::{WeftError, WeftResult, invalid_edge};
use log::{debug, trace};

use super::{
    DEFAULT_WEIGHT, EdgeId, Hyperedge, IncidenceStore, IncidenceView, Label, Node, NodeId,
    Registry,
};
use crate::traversal::{self, Bfs, PathStep};

/// A hypergraph with opaque node payloads `N` and edge payloads `E`.
///
/// Edges are undirected, duplicate-free node sets of any size. Node and
/// edge identities are allocated in increasing order and never reused;
/// every enumeration (`node_ids`, `edge_ids`, components, matrices built on
/// top) follows that creation order.
///
/// ## Example
///
/// ```rust
/// use weft_core::Hypergraph;
///
/// let mut hg: Hypergraph<&str, ()> = Hypergraph::new();
/// let a = hg.add_node("A");
/// let b = hg.add_node("B");
/// let c = hg.add_node("C");
/// let e1 = hg.add_edge([a, b, c], ()).unwrap();
///
/// assert_eq!(hg.degree(a).unwrap(), 1);
/// assert_eq!(hg.edge_size(e1).unwrap(), 3);
///
/// hg.remove_node(b).unwrap();
/// assert_eq!(hg.edge_size(e1).unwrap(), 2);
/// assert!(hg.degree(b).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct Hypergraph<N = (), E = ()> {
    nodes: Registry<NodeId, Node<N>>,
    edges: Registry<EdgeId, Hyperedge<E>>,
    incidence: IncidenceStore,
    config: GraphConfig,
}

impl<N, E> Default for Hypergraph<N, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N, E> Hypergraph<N, E> {
    /// Create a new empty hypergraph with the default configuration.
    pub fn new() -> Self {
        Self::with_config(GraphConfig::default())
    }

    /// Create a new empty hypergraph with a specific configuration.
    pub fn with_config(config: GraphConfig) -> Self {
        Self {
            nodes: Registry::new(),
            edges: Registry::new(),
            incidence: IncidenceStore::with_capacity(config.node_capacity, config.edge_capacity),
            config,
        }
    }

    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    /// Get the number of nodes in the hypergraph.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Get the number of edges in the hypergraph.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty()
    }

    // ------------------------------------------------------------------
    // Mutation
    // ------------------------------------------------------------------

    /// Add a node carrying `data` and return its identifier.
    pub fn add_node(&mut self, data: N) -> NodeId {
        let id = self.nodes.create_with(|id| Node::new(id, data));
        trace!("added node {id}");
        id
    }

    /// Remove a node, detaching it from every edge that lists it.
    ///
    /// Under [`EmptyEdgePolicy::Remove`] edges left without nodes are
    /// deleted as well. Returns the node payload.
    pub fn remove_node(&mut self, node: NodeId) -> WeftResult<N> {
        self.nodes.require(node)?;

        let touched = self.incidence.purge_node(node);
        let dropped = self.apply_empty_edge_policy(&touched);
        let removed = self.nodes.delete(node)?;

        debug!(
            "removed node {node}: detached from {} edges, dropped {dropped} empty edges",
            touched.len()
        );
        Ok(removed.data)
    }

    /// Add an edge with the default weight.
    ///
    /// Fails with `InvalidEdge` if any node is unknown or listed twice, or if
    /// the set is empty under [`EmptyEdgePolicy::Remove`].
    pub fn add_edge<I>(&mut self, nodes: I, data: E) -> WeftResult<EdgeId>
    where
        I: IntoIterator<Item = NodeId>,
    {
        self.add_weighted_edge(nodes, DEFAULT_WEIGHT, data)
    }

    /// Add an edge with an explicit weight.
    pub fn add_weighted_edge<I>(&mut self, nodes: I, weight: f64, data: E) -> WeftResult<EdgeId>
    where
        I: IntoIterator<Item = NodeId>,
    {
        let members: Vec<NodeId> = nodes.into_iter().collect();
        check_weight(weight)?;

        let mut seen = HashSet::with_capacity(members.len());
        for &node in &members {
            if !self.nodes.exists(node) {
                invalid_edge!("node {node} is not registered");
            }
            if !seen.insert(node) {
                invalid_edge!("node {node} appears more than once");
            }
        }
        if members.is_empty() && self.config.empty_edges == EmptyEdgePolicy::Remove {
            invalid_edge!("empty edges are not kept under the remove policy");
        }

        let edge = self
            .edges
            .create_with(|id| Hyperedge::new(id, weight, data));
        for &node in &members {
            self.incidence.link(node, edge);
        }

        trace!("added edge {edge} over {} nodes", members.len());
        Ok(edge)
    }

    /// Remove an edge, detaching it from all its nodes. Returns the payload.
    pub fn remove_edge(&mut self, edge: EdgeId) -> WeftResult<E> {
        self.edges.require(edge)?;

        let members = self.incidence.purge_edge(edge);
        let removed = self.edges.delete(edge)?;

        debug!("removed edge {edge} over {} nodes", members.len());
        Ok(removed.data)
    }

    /// Add `node` to an existing edge.
    ///
    /// Fails with `UnknownId` for an unknown edge and with `InvalidEdge` if
    /// the node is unknown or already a member.
    pub fn add_node_to_edge(&mut self, node: NodeId, edge: EdgeId) -> WeftResult<()> {
        self.edges.require(edge)?;
        if !self.nodes.exists(node) {
            invalid_edge!("node {node} is not registered");
        }
        if self.incidence.contains(node, edge) {
            invalid_edge!("node {node} is already a member of edge {edge}");
        }

        self.incidence.link(node, edge);
        trace!("linked node {node} to edge {edge}");
        Ok(())
    }

    /// Remove `node` from an edge.
    ///
    /// Fails like [`add_node_to_edge`](Self::add_node_to_edge), and with
    /// `InvalidEdge` if the node is not a member.
    ///
    /// Returns `true` when the edge became empty and was deleted under
    /// [`EmptyEdgePolicy::Remove`].
    pub fn remove_node_from_edge(&mut self, node: NodeId, edge: EdgeId) -> WeftResult<bool> {
        self.edges.require(edge)?;
        if !self.nodes.exists(node) {
            invalid_edge!("node {node} is not registered");
        }
        if !self.incidence.unlink(node, edge) {
            invalid_edge!("node {node} is not a member of edge {edge}");
        }

        trace!("unlinked node {node} from edge {edge}");
        Ok(self.apply_empty_edge_policy(&[edge]) > 0)
    }

    /// Replace the weight of an edge.
    pub fn set_edge_weight(&mut self, edge: EdgeId, weight: f64) -> WeftResult<()> {
        check_weight(weight)?;
        self.edges.lookup_mut(edge)?.weight = weight;
        Ok(())
    }

    /// Attach a display label to a node.
    pub fn set_node_label(&mut self, node: NodeId, label: impl Into<Label>) -> WeftResult<()> {
        self.nodes.lookup_mut(node)?.label = Some(label.into());
        Ok(())
    }

    /// Attach a display label to an edge.
    pub fn set_edge_label(&mut self, edge: EdgeId, label: impl Into<Label>) -> WeftResult<()> {
        self.edges.lookup_mut(edge)?.label = Some(label.into());
        Ok(())
    }

    fn apply_empty_edge_policy(&mut self, candidates: &[EdgeId]) -> usize {
        if self.config.empty_edges != EmptyEdgePolicy::Remove {
            return 0;
        }
        let mut dropped = 0;
        for &edge in candidates {
            if self.incidence.edge_size(edge) == 0 && self.edges.exists(edge) {
                self.incidence.purge_edge(edge);
                if self.edges.delete(edge).is_ok() {
                    trace!("dropped empty edge {edge}");
                    dropped += 1;
                }
            }
        }
        dropped
    }

    // ------------------------------------------------------------------
    // Entity access
    // ------------------------------------------------------------------

    /// Get a node by ID.
    pub fn node(&self, node: NodeId) -> Option<&Node<N>> {
        self.nodes.get(node)
    }

    /// Get a mutable node by ID.
    pub fn node_mut(&mut self, node: NodeId) -> Option<&mut Node<N>> {
        self.nodes.get_mut(node)
    }

    /// Get an edge by ID.
    pub fn edge(&self, edge: EdgeId) -> Option<&Hyperedge<E>> {
        self.edges.get(edge)
    }

    /// Get a mutable edge by ID.
    pub fn edge_mut(&mut self, edge: EdgeId) -> Option<&mut Hyperedge<E>> {
        self.edges.get_mut(edge)
    }

    pub fn contains_node(&self, node: NodeId) -> bool {
        self.nodes.exists(node)
    }

    pub fn contains_edge(&self, edge: EdgeId) -> bool {
        self.edges.exists(edge)
    }

    /// Node identifiers in creation order.
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes.ids()
    }

    /// Edge identifiers in creation order.
    pub fn edge_ids(&self) -> impl Iterator<Item = EdgeId> + '_ {
        self.edges.ids()
    }

    /// Nodes in creation order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node<N>> + '_ {
        self.nodes.iter().map(|(_, node)| node)
    }

    /// Edges in creation order.
    pub fn edges(&self) -> impl Iterator<Item = &Hyperedge<E>> + '_ {
        self.edges.iter().map(|(_, edge)| edge)
    }

    /// Get all nodes with a specific label.
    pub fn nodes_with_label(&self, label: &str) -> Vec<&Node<N>> {
        self.nodes().filter(|node| node.has_label(label)).collect()
    }

    // ------------------------------------------------------------------
    // Incidence queries
    // ------------------------------------------------------------------

    /// Edges incident to `node`, as a lazy restartable sequence.
    pub fn edges_of(&self, node: NodeId) -> WeftResult<impl Iterator<Item = EdgeId> + Clone + '_> {
        self.nodes.require(node)?;
        Ok(self.incidence.edges_of(node))
    }

    /// Nodes contained in `edge`.
    pub fn nodes_of(&self, edge: EdgeId) -> WeftResult<impl Iterator<Item = NodeId> + Clone + '_> {
        self.edges.require(edge)?;
        Ok(self.incidence.nodes_of(edge))
    }

    /// Whether `node` is a member of `edge`. Unknown ids are never members.
    pub fn is_member(&self, node: NodeId, edge: EdgeId) -> bool {
        self.incidence.contains(node, edge)
    }

    /// Number of edges incident to `node`.
    pub fn degree(&self, node: NodeId) -> WeftResult<usize> {
        self.nodes.require(node)?;
        Ok(self.incidence.degree(node))
    }

    /// Sum of the weights of the edges incident to `node`.
    pub fn weighted_degree(&self, node: NodeId) -> WeftResult<f64> {
        self.nodes.require(node)?;
        Ok(self
            .incidence
            .edges_of(node)
            .filter_map(|edge| self.edges.get(edge))
            .map(|edge| edge.weight)
            .sum())
    }

    /// Number of nodes in `edge`.
    pub fn edge_size(&self, edge: EdgeId) -> WeftResult<usize> {
        self.edges.require(edge)?;
        Ok(self.incidence.edge_size(edge))
    }

    /// Weight of `edge`.
    pub fn edge_weight(&self, edge: EdgeId) -> WeftResult<f64> {
        Ok(self.edges.lookup(edge)?.weight)
    }

    /// Nodes sharing at least one edge with `node`, excluding `node`.
    pub fn neighbors(&self, node: NodeId) -> WeftResult<BTreeSet<NodeId>> {
        self.nodes.require(node)?;
        Ok(traversal::neighbors(self, node))
    }

    /// Edges containing both `u` and `v`; empty when `u == v`.
    pub fn adjacent(&self, u: NodeId, v: NodeId) -> WeftResult<BTreeSet<EdgeId>> {
        self.nodes.require(u)?;
        self.nodes.require(v)?;
        if u == v {
            return Ok(BTreeSet::new());
        }
        Ok(self
            .incidence
            .edges_of(u)
            .filter(|&edge| self.incidence.contains(v, edge))
            .collect())
    }

    /// Whether every edge has exactly `k` nodes.
    ///
    /// Without `k`, the size of the earliest-created edge is used. A
    /// hypergraph without edges is uniform.
    pub fn is_uniform(&self, k: Option<usize>) -> bool {
        let mut sizes = self.edges.ids().map(|edge| self.incidence.edge_size(edge));
        let Some(first) = sizes.next() else {
            return true;
        };
        let k = k.unwrap_or(first);
        first == k && sizes.all(|size| size == k)
    }

    /// Whether every node has degree exactly `d`.
    ///
    /// Without `d`, the degree of the earliest-created node is used.
    pub fn is_regular(&self, d: Option<usize>) -> bool {
        let mut degrees = self.nodes.ids().map(|node| self.incidence.degree(node));
        let Some(first) = degrees.next() else {
            return true;
        };
        let d = d.unwrap_or(first);
        first == d && degrees.all(|degree| degree == d)
    }

    // ------------------------------------------------------------------
    // Traversal
    // ------------------------------------------------------------------

    /// Whether `b` is reachable from `a` through shared edges.
    pub fn is_connected(&self, a: NodeId, b: NodeId) -> WeftResult<bool> {
        self.nodes.require(a)?;
        self.nodes.require(b)?;
        Ok(traversal::is_connected(self, a, b))
    }

    /// Partition the nodes into connected components, in creation order.
    pub fn connected_components(&self) -> Vec<BTreeSet<NodeId>> {
        traversal::connected_components(self)
    }

    /// Fewest-hyperedge path between two nodes, `None` if unreachable.
    pub fn shortest_hyperpath(
        &self,
        from: NodeId,
        to: NodeId,
    ) -> WeftResult<Option<Vec<PathStep>>> {
        self.nodes.require(from)?;
        self.nodes.require(to)?;
        Ok(traversal::shortest_hyperpath(self, from, to))
    }

    /// Lazy breadth-first search from `start`.
    pub fn bfs(&self, start: NodeId) -> WeftResult<Bfs<'_, Self>> {
        self.nodes.require(start)?;
        Ok(Bfs::new(self, start))
    }

    // ------------------------------------------------------------------
    // Invariants
    // ------------------------------------------------------------------

    /// Re-check the structural invariants, reporting the first violation.
    pub fn validate(&self) -> WeftResult<()> {
        self.incidence.check_symmetry()?;

        for node in self.incidence.indexed_nodes() {
            if !self.nodes.exists(node) {
                return Err(WeftError::internal(format!(
                    "incidence index references unregistered node {node}"
                )));
            }
        }
        for edge in self.incidence.indexed_edges() {
            if !self.edges.exists(edge) {
                return Err(WeftError::internal(format!(
                    "incidence index references unregistered edge {edge}"
                )));
            }
        }
        if self.config.empty_edges == EmptyEdgePolicy::Remove {
            if let Some(edge) = self
                .edges
                .ids()
                .find(|&edge| self.incidence.edge_size(edge) == 0)
            {
                return Err(WeftError::internal(format!(
                    "edge {edge} is empty under the remove policy"
                )));
            }
        }
        Ok(())
    }
}

/// Edge weights are finite and strictly positive.
fn check_weight(weight: f64) -> WeftResult<()> {
    if !(weight.is_finite() && weight > 0.0) {
        invalid_edge!("edge weight must be finite and positive, got {weight}");
    }
    Ok(())
}

impl<N, E> IncidenceView for Hypergraph<N, E> {
    fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes.ids()
    }

    fn edge_ids(&self) -> impl Iterator<Item = EdgeId> + '_ {
        self.edges.ids()
    }

    fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn edge_count(&self) -> usize {
        self.edges.len()
    }

    fn contains_node(&self, node: NodeId) -> bool {
        self.nodes.exists(node)
    }

    fn contains_edge(&self, edge: EdgeId) -> bool {
        self.edges.exists(edge)
    }

    fn incident_edges(&self, node: NodeId) -> impl Iterator<Item = EdgeId> + '_ {
        self.incidence.edges_of(node)
    }

    fn member_nodes(&self, edge: EdgeId) -> impl Iterator<Item = NodeId> + '_ {
        self.incidence.nodes_of(edge)
    }

    fn edge_weight(&self, edge: EdgeId) -> Option<f64> {
        self.edges.get(edge).map(|edge| edge.weight)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted<T: Ord>(items: impl Iterator<Item = T>) -> Vec<T> {
        let mut items: Vec<_> = items.collect();
        items.sort();
        items
    }

    #[test]
    fn test_hypergraph_creation() {
        let hg: Hypergraph = Hypergraph::new();
        assert_eq!(hg.node_count(), 0);
        assert_eq!(hg.edge_count(), 0);
        assert!(hg.is_empty());
        assert_eq!(hg.config().empty_edges, EmptyEdgePolicy::Retain);
    }

    #[test]
    fn test_three_node_hyperedge_and_removal() {
        let mut hg = Hypergraph::new();
        let a = hg.add_node("A");
        let b = hg.add_node("B");
        let c = hg.add_node("C");
        let e1 = hg.add_edge([a, b, c], "E1").unwrap();

        assert_eq!(hg.degree(a).unwrap(), 1);
        assert_eq!(hg.edge_size(e1).unwrap(), 3);
        assert_eq!(hg.neighbors(a).unwrap(), BTreeSet::from([b, c]));

        assert_eq!(hg.remove_node(b).unwrap(), "B");
        assert_eq!(sorted(hg.nodes_of(e1).unwrap()), vec![a, c]);
        assert_eq!(hg.edge_size(e1).unwrap(), 2);
        assert!(matches!(
            hg.degree(b),
            Err(WeftError::UnknownId { kind: "node", .. })
        ));
        assert!(hg.validate().is_ok());
    }

    #[test]
    fn test_add_edge_rejects_duplicates() {
        let mut hg: Hypergraph = Hypergraph::new();
        let a = hg.add_node(());
        let b = hg.add_node(());

        let err = hg.add_edge([a, b, a], ()).unwrap_err();
        assert!(matches!(err, WeftError::InvalidEdge(_)));
        assert_eq!(hg.edge_count(), 0);
        assert_eq!(hg.degree(a).unwrap(), 0);
    }

    #[test]
    fn test_add_edge_rejects_unknown_node() {
        let mut hg: Hypergraph = Hypergraph::new();
        let a = hg.add_node(());
        let gone = hg.add_node(());
        hg.remove_node(gone).unwrap();

        let err = hg.add_edge([a, gone], ()).unwrap_err();
        assert!(matches!(err, WeftError::InvalidEdge(_)));
        assert_eq!(hg.edge_count(), 0);
        assert_eq!(hg.degree(a).unwrap(), 0);
    }

    #[test]
    fn test_add_edge_rejects_invalid_weight() {
        let mut hg: Hypergraph = Hypergraph::new();
        let a = hg.add_node(());
        for weight in [f64::NAN, f64::INFINITY, 0.0, -0.0, -2.0] {
            let err = hg.add_weighted_edge([a], weight, ()).unwrap_err();
            assert!(matches!(err, WeftError::InvalidEdge(_)), "weight {weight}");
        }
        assert_eq!(hg.edge_count(), 0);
        assert_eq!(hg.degree(a).unwrap(), 0);
    }

    #[test]
    fn test_empty_edge_allowed_under_retain() {
        let mut hg: Hypergraph = Hypergraph::new();
        let edge = hg.add_edge([], ()).unwrap();
        assert_eq!(hg.edge_size(edge).unwrap(), 0);
    }

    #[test]
    fn test_remove_policy_drops_emptied_edges() {
        let config = GraphConfig::default().with_empty_edges(EmptyEdgePolicy::Remove);
        let mut hg: Hypergraph = Hypergraph::with_config(config);
        let a = hg.add_node(());
        let b = hg.add_node(());
        let solo = hg.add_edge([a], ()).unwrap();
        let pair = hg.add_edge([a, b], ()).unwrap();

        assert!(hg.add_edge([], ()).is_err());

        hg.remove_node(a).unwrap();
        assert!(!hg.contains_edge(solo));
        assert!(hg.contains_edge(pair));

        assert!(hg.remove_node_from_edge(b, pair).unwrap());
        assert!(!hg.contains_edge(pair));
        assert_eq!(hg.edge_count(), 0);
        assert!(hg.validate().is_ok());
    }

    #[test]
    fn test_retain_policy_keeps_emptied_edges() {
        let mut hg: Hypergraph = Hypergraph::new();
        let a = hg.add_node(());
        let edge = hg.add_edge([a], ()).unwrap();

        hg.remove_node(a).unwrap();
        assert!(hg.contains_edge(edge));
        assert_eq!(hg.edge_size(edge).unwrap(), 0);
        assert!(hg.validate().is_ok());
    }

    #[test]
    fn test_incremental_edge_mutation() {
        let mut hg: Hypergraph = Hypergraph::new();
        let a = hg.add_node(());
        let b = hg.add_node(());
        let edge = hg.add_edge([a], ()).unwrap();

        hg.add_node_to_edge(b, edge).unwrap();
        assert_eq!(hg.edge_size(edge).unwrap(), 2);
        assert!(hg.is_member(b, edge));

        assert!(matches!(
            hg.add_node_to_edge(b, edge),
            Err(WeftError::InvalidEdge(_))
        ));
        assert!(!hg.remove_node_from_edge(a, edge).unwrap());
        assert!(matches!(
            hg.remove_node_from_edge(a, edge),
            Err(WeftError::InvalidEdge(_))
        ));
        assert_eq!(sorted(hg.nodes_of(edge).unwrap()), vec![b]);
    }

    #[test]
    fn test_incremental_mutation_unknown_ids() {
        let mut hg: Hypergraph = Hypergraph::new();
        let a = hg.add_node(());
        let edge = hg.add_edge([a], ()).unwrap();
        hg.remove_edge(edge).unwrap();

        assert!(hg.add_node_to_edge(a, edge).unwrap_err().is_unknown_id());
        assert!(hg.remove_node_from_edge(a, edge).unwrap_err().is_unknown_id());
        assert!(hg.remove_edge(edge).unwrap_err().is_unknown_id());
        assert_eq!(hg.degree(a).unwrap(), 0);
    }

    #[test]
    fn test_incremental_mutation_unknown_node() {
        let mut hg: Hypergraph = Hypergraph::new();
        let a = hg.add_node(());
        let b = hg.add_node(());
        let edge = hg.add_edge([a, b], ()).unwrap();
        hg.remove_node(b).unwrap();

        let err = hg.add_node_to_edge(b, edge).unwrap_err();
        assert!(matches!(err, WeftError::InvalidEdge(_)));
        let err = hg.remove_node_from_edge(b, edge).unwrap_err();
        assert!(matches!(err, WeftError::InvalidEdge(_)));
        assert_eq!(hg.edge_size(edge).unwrap(), 1);
    }

    #[test]
    fn test_remove_edge_detaches_nodes() {
        let mut hg = Hypergraph::new();
        let a = hg.add_node(1);
        let b = hg.add_node(2);
        let keep = hg.add_edge([a, b], "keep").unwrap();
        let gone = hg.add_edge([a, b], "gone").unwrap();

        assert_eq!(hg.remove_edge(gone).unwrap(), "gone");
        assert_eq!(hg.edges_of(a).unwrap().collect::<Vec<_>>(), vec![keep]);
        assert_eq!(hg.degree(b).unwrap(), 1);
        assert!(hg.nodes_of(gone).is_err());
    }

    #[test]
    fn test_weights_and_weighted_degree() {
        let mut hg: Hypergraph = Hypergraph::new();
        let a = hg.add_node(());
        let b = hg.add_node(());
        let e1 = hg.add_weighted_edge([a, b], 2.0, ()).unwrap();
        let _e2 = hg.add_edge([a], ()).unwrap();

        assert_eq!(hg.weighted_degree(a).unwrap(), 3.0);
        hg.set_edge_weight(e1, 0.5).unwrap();
        assert_eq!(hg.edge_weight(e1).unwrap(), 0.5);
        assert_eq!(hg.weighted_degree(b).unwrap(), 0.5);
        assert!(hg.set_edge_weight(e1, f64::NAN).is_err());
        assert!(hg.set_edge_weight(e1, 0.0).is_err());
        assert!(hg.set_edge_weight(e1, -1.0).is_err());
        assert_eq!(hg.edge_weight(e1).unwrap(), 0.5);
    }

    #[test]
    fn test_adjacent() {
        let mut hg: Hypergraph = Hypergraph::new();
        let a = hg.add_node(());
        let b = hg.add_node(());
        let c = hg.add_node(());
        let ab = hg.add_edge([a, b], ()).unwrap();
        let abc = hg.add_edge([a, b, c], ()).unwrap();

        assert_eq!(hg.adjacent(a, b).unwrap(), BTreeSet::from([ab, abc]));
        assert_eq!(hg.adjacent(a, c).unwrap(), BTreeSet::from([abc]));
        assert!(hg.adjacent(a, a).unwrap().is_empty());
    }

    #[test]
    fn test_uniform_and_regular() {
        let mut hg: Hypergraph = Hypergraph::new();
        assert!(hg.is_uniform(None));
        assert!(hg.is_regular(Some(3)));

        let a = hg.add_node(());
        let b = hg.add_node(());
        let c = hg.add_node(());
        hg.add_edge([a, b], ()).unwrap();
        hg.add_edge([b, c], ()).unwrap();
        hg.add_edge([c, a], ()).unwrap();

        assert!(hg.is_uniform(None));
        assert!(hg.is_uniform(Some(2)));
        assert!(!hg.is_uniform(Some(3)));
        assert!(hg.is_regular(None));
        assert!(hg.is_regular(Some(2)));

        hg.add_edge([a, b, c], ()).unwrap();
        assert!(!hg.is_uniform(None));
        assert!(hg.is_regular(Some(3)));
    }

    #[test]
    fn test_labels() {
        let mut hg: Hypergraph<(), ()> = Hypergraph::new();
        let a = hg.add_node(());
        let b = hg.add_node(());
        let edge = hg.add_edge([a, b], ()).unwrap();

        hg.set_node_label(a, "Person").unwrap();
        hg.set_edge_label(edge, "KNOWS").unwrap();

        assert_eq!(hg.nodes_with_label("Person").len(), 1);
        assert_eq!(hg.edge(edge).and_then(|e| e.label()), Some("KNOWS"));
        hg.remove_node(b).unwrap();
        assert!(hg.set_node_label(b, "Gone").unwrap_err().is_unknown_id());
    }

    #[test]
    fn test_payload_mutation() {
        let mut hg: Hypergraph<Vec<u8>, ()> = Hypergraph::new();
        let a = hg.add_node(vec![1]);
        if let Some(node) = hg.node_mut(a) {
            node.data.push(2);
        }
        assert_eq!(hg.node(a).map(|n| n.data.clone()), Some(vec![1, 2]));
    }

    #[test]
    fn test_enumeration_follows_creation_order() {
        let mut hg: Hypergraph = Hypergraph::new();
        let ids: Vec<_> = (0..4).map(|_| hg.add_node(())).collect();
        hg.remove_node(ids[1]).unwrap();
        let fresh = hg.add_node(());

        let order: Vec<_> = hg.node_ids().collect();
        assert_eq!(order, vec![ids[0], ids[2], ids[3], fresh]);
        assert!(!ids.contains(&fresh));
    }

    #[test]
    fn test_disjoint_edges_form_two_components() {
        let mut hg: Hypergraph = Hypergraph::new();
        let a = hg.add_node(());
        let b = hg.add_node(());
        let c = hg.add_node(());
        let d = hg.add_node(());
        hg.add_edge([a, b], ()).unwrap();
        hg.add_edge([c, d], ()).unwrap();

        let components = hg.connected_components();
        assert_eq!(
            components,
            vec![BTreeSet::from([a, b]), BTreeSet::from([c, d])]
        );
        assert!(hg.is_connected(a, b).unwrap());
        assert!(!hg.is_connected(a, c).unwrap());
    }

    #[test]
    fn test_traversal_rejects_unknown_nodes() {
        let mut hg: Hypergraph = Hypergraph::new();
        let a = hg.add_node(());
        let b = hg.add_node(());
        hg.remove_node(b).unwrap();

        assert!(hg.is_connected(a, b).unwrap_err().is_unknown_id());
        assert!(hg.shortest_hyperpath(b, a).unwrap_err().is_unknown_id());
        assert!(hg.bfs(b).is_err());
        assert!(hg.neighbors(b).is_err());
    }
}
