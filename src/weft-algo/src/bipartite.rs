//! Bipartite (Levi) and clique views of a hypergraph on top of petgraph.
//!
//! A hypergraph with weights `w` maps to an undirected bipartite graph with
//! one vertex per node, one vertex per edge, and a link of weight `w / 2`
//! between a node and every edge containing it. A node-to-node walk through
//! an edge therefore costs exactly the edge weight.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use common_config::GraphConfig;
use common_error::{WeftError, WeftResult, invalid_edge};
use log::debug;
use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;
use weft_core::{DEFAULT_WEIGHT, EdgeId, EntityId, Hypergraph, IncidenceView, NodeId};

/// Which side of the bipartite graph a vertex belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BipartiteVertex {
    Node(NodeId),
    Edge(EdgeId),
}

/// Bipartite incidence graph with lookups from hypergraph ids to vertices.
#[derive(Debug, Clone, Default)]
pub struct BipartiteGraph {
    graph: UnGraph<BipartiteVertex, f64>,
    node_vertices: HashMap<NodeId, NodeIndex>,
    edge_vertices: HashMap<EdgeId, NodeIndex>,
    edge_weights: HashMap<EdgeId, f64>,
}

impl BipartiteGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap an existing petgraph graph.
    ///
    /// Every link must join a `Node` vertex to an `Edge` vertex, and no id may
    /// label two vertices. Edge weights are recovered as twice the weight of
    /// their first link, which must be finite and positive. A petgraph graph
    /// stores weights only on links, so an edge vertex without links gets the
    /// default weight.
    pub fn from_petgraph(graph: UnGraph<BipartiteVertex, f64>) -> WeftResult<Self> {
        let mut node_vertices = HashMap::new();
        let mut edge_vertices = HashMap::new();
        for index in graph.node_indices() {
            let duplicate = match graph[index] {
                BipartiteVertex::Node(node) => node_vertices.insert(node, index).is_some(),
                BipartiteVertex::Edge(edge) => edge_vertices.insert(edge, index).is_some(),
            };
            if duplicate {
                invalid_edge!("{:?} labels more than one vertex", graph[index]);
            }
        }

        let mut edge_weights: HashMap<EdgeId, f64> =
            edge_vertices.keys().map(|&edge| (edge, DEFAULT_WEIGHT)).collect();
        let mut weighed = BTreeSet::new();
        for link in graph.edge_references() {
            let edge = match (graph[link.source()], graph[link.target()]) {
                (BipartiteVertex::Node(_), BipartiteVertex::Edge(edge))
                | (BipartiteVertex::Edge(edge), BipartiteVertex::Node(_)) => edge,
                (a, b) => invalid_edge!("link {a:?} -- {b:?} joins two vertices of the same side"),
            };
            let half = *link.weight();
            if !(half.is_finite() && half > 0.0) {
                invalid_edge!("link to edge {edge} has weight {half}, expected a positive weight");
            }
            if weighed.insert(edge) {
                edge_weights.insert(edge, half * 2.0);
            }
        }

        Ok(Self {
            graph,
            node_vertices,
            edge_vertices,
            edge_weights,
        })
    }

    /// Vertex for `node`, created if absent.
    pub fn add_node_vertex(&mut self, node: NodeId) -> NodeIndex {
        if let Some(&index) = self.node_vertices.get(&node) {
            return index;
        }
        let index = self.graph.add_node(BipartiteVertex::Node(node));
        self.node_vertices.insert(node, index);
        index
    }

    /// Vertex for `edge`, created if absent. The weight is overwritten.
    pub fn add_edge_vertex(&mut self, edge: EdgeId, weight: f64) -> NodeIndex {
        self.edge_weights.insert(edge, weight);
        if let Some(&index) = self.edge_vertices.get(&edge) {
            return index;
        }
        let index = self.graph.add_node(BipartiteVertex::Edge(edge));
        self.edge_vertices.insert(edge, index);
        index
    }

    /// Link `node` to `edge`. Both vertices must already exist.
    pub fn link(&mut self, node: NodeId, edge: EdgeId) -> WeftResult<()> {
        let from = self
            .vertex_of_node(node)
            .ok_or_else(|| WeftError::unknown_id("node", node.raw()))?;
        let to = self
            .vertex_of_edge(edge)
            .ok_or_else(|| WeftError::unknown_id("edge", edge.raw()))?;
        let half = self.edge_weights.get(&edge).copied().unwrap_or(DEFAULT_WEIGHT) / 2.0;
        self.graph.update_edge(from, to, half);
        Ok(())
    }

    /// The underlying petgraph graph.
    pub fn graph(&self) -> &UnGraph<BipartiteVertex, f64> {
        &self.graph
    }

    pub fn into_graph(self) -> UnGraph<BipartiteVertex, f64> {
        self.graph
    }

    pub fn vertex_of_node(&self, node: NodeId) -> Option<NodeIndex> {
        self.node_vertices.get(&node).copied()
    }

    pub fn vertex_of_edge(&self, edge: EdgeId) -> Option<NodeIndex> {
        self.edge_vertices.get(&edge).copied()
    }

    /// Which hypergraph entity a vertex stands for.
    pub fn vertex(&self, index: NodeIndex) -> Option<BipartiteVertex> {
        self.graph.node_weight(index).copied()
    }

    pub fn edge_weight(&self, edge: EdgeId) -> Option<f64> {
        self.edge_weights.get(&edge).copied()
    }

    pub fn node_vertex_count(&self) -> usize {
        self.node_vertices.len()
    }

    pub fn edge_vertex_count(&self) -> usize {
        self.edge_vertices.len()
    }

    pub fn link_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Node ids in ascending order.
    pub fn node_ids(&self) -> Vec<NodeId> {
        let mut nodes: Vec<NodeId> = self.node_vertices.keys().copied().collect();
        nodes.sort_unstable();
        nodes
    }

    /// Edge ids in ascending order.
    pub fn edge_ids(&self) -> Vec<EdgeId> {
        let mut edges: Vec<EdgeId> = self.edge_vertices.keys().copied().collect();
        edges.sort_unstable();
        edges
    }

    /// Nodes linked to `edge`, ascending. Empty for an unknown edge.
    pub fn members(&self, edge: EdgeId) -> BTreeSet<NodeId> {
        let Some(index) = self.vertex_of_edge(edge) else {
            return BTreeSet::new();
        };
        self.graph
            .neighbors(index)
            .filter_map(|neighbor| match self.graph[neighbor] {
                BipartiteVertex::Node(node) => Some(node),
                BipartiteVertex::Edge(_) => None,
            })
            .collect()
    }
}

/// Bipartite graph of a hypergraph. Vertices are added nodes first, then
/// edges, each in creation order.
pub fn to_bipartite_graph<G: IncidenceView>(graph: &G) -> BipartiteGraph {
    let mut bipartite = BipartiteGraph::new();
    for node in graph.node_ids() {
        bipartite.add_node_vertex(node);
    }
    for edge in graph.edge_ids() {
        let weight = graph.edge_weight(edge).unwrap_or(DEFAULT_WEIGHT);
        let to = bipartite.add_edge_vertex(edge, weight);
        let mut members: Vec<NodeId> = graph.member_nodes(edge).collect();
        members.sort_unstable();
        for node in members {
            if let Some(from) = bipartite.vertex_of_node(node) {
                bipartite.graph.add_edge(from, to, weight / 2.0);
            }
        }
    }
    debug!(
        "bipartite graph with {} vertices and {} links",
        bipartite.graph.node_count(),
        bipartite.graph.edge_count()
    );
    bipartite
}

/// Rebuild a hypergraph from a bipartite graph.
///
/// Nodes and edges are created in ascending order of their bipartite ids,
/// so a graph produced by [`to_bipartite_graph`] round-trips to an
/// isomorphic hypergraph with the same creation order.
pub fn from_bipartite_graph<N, E>(bipartite: &BipartiteGraph) -> WeftResult<Hypergraph<N, E>>
where
    N: Default,
    E: Default,
{
    from_bipartite_graph_with_config(bipartite, GraphConfig::default())
}

/// [`from_bipartite_graph`] with an explicit configuration for the new graph.
pub fn from_bipartite_graph_with_config<N, E>(
    bipartite: &BipartiteGraph,
    config: GraphConfig,
) -> WeftResult<Hypergraph<N, E>>
where
    N: Default,
    E: Default,
{
    let mut graph = Hypergraph::with_config(config);
    let nodes: HashMap<NodeId, NodeId> = bipartite
        .node_ids()
        .into_iter()
        .map(|old| (old, graph.add_node(N::default())))
        .collect();

    for edge in bipartite.edge_ids() {
        let weight = bipartite.edge_weight(edge).unwrap_or(DEFAULT_WEIGHT);
        let members = bipartite
            .members(edge)
            .into_iter()
            .filter_map(|old| nodes.get(&old).copied());
        graph.add_weighted_edge(members, weight, E::default())?;
    }
    Ok(graph)
}

/// Two-section (clique expansion) of a hypergraph.
///
/// Every pair of nodes sharing an edge is joined once, weighted by the total
/// weight of the edges they share. Vertices are the hypergraph nodes in
/// creation order.
pub fn clique_expansion<G: IncidenceView>(graph: &G) -> UnGraph<NodeId, f64> {
    let mut expansion = UnGraph::with_capacity(graph.node_count(), 0);
    let vertices: HashMap<NodeId, NodeIndex> = graph
        .node_ids()
        .map(|node| (node, expansion.add_node(node)))
        .collect();

    let mut pairs: BTreeMap<(NodeId, NodeId), f64> = BTreeMap::new();
    for edge in graph.edge_ids() {
        let weight = graph.edge_weight(edge).unwrap_or(DEFAULT_WEIGHT);
        let mut members: Vec<NodeId> = graph.member_nodes(edge).collect();
        members.sort_unstable();
        for (i, &u) in members.iter().enumerate() {
            for &v in &members[i + 1..] {
                *pairs.entry((u, v)).or_insert(0.0) += weight;
            }
        }
    }

    for ((u, v), weight) in pairs {
        if let (Some(&a), Some(&b)) = (vertices.get(&u), vertices.get(&v)) {
            expansion.add_edge(a, b, weight);
        }
    }
    expansion
}
