//! Testing utilities and helpers for weft-core.
//!
//! Fixtures address nodes and edges by name so tests can state expected
//! structure without tracking raw identifiers.

use std::collections::{BTreeSet, HashMap};

use crate::hypergraph::{EdgeId, Hypergraph, NodeId};

/// Test fixture builder for creating common hypergraph scenarios.
///
/// Node payloads are the node names; edge payloads are the edge names.
pub struct HypergraphFixture {
    hypergraph: Hypergraph<String, String>,
    nodes: HashMap<String, NodeId>,
    edges: HashMap<String, EdgeId>,
}

impl Default for HypergraphFixture {
    fn default() -> Self {
        Self::new()
    }
}

impl HypergraphFixture {
    /// Create a new empty fixture.
    pub fn new() -> Self {
        Self::with_hypergraph(Hypergraph::new())
    }

    /// Create a fixture around a pre-configured hypergraph.
    pub fn with_hypergraph(hypergraph: Hypergraph<String, String>) -> Self {
        Self {
            hypergraph,
            nodes: HashMap::new(),
            edges: HashMap::new(),
        }
    }

    /// `{A, B, C}` joined by one hyperedge `E1`.
    pub fn triangle_hyperedge() -> Self {
        let mut fixture = Self::new();
        fixture.add_nodes(["A", "B", "C"]);
        fixture.add_edge("E1", ["A", "B", "C"]);
        fixture
    }

    /// Two disjoint pairs: `E1 = {A, B}` and `E2 = {C, D}`.
    pub fn disjoint_pairs() -> Self {
        let mut fixture = Self::new();
        fixture.add_nodes(["A", "B", "C", "D"]);
        fixture.add_edge("E1", ["A", "B"]);
        fixture.add_edge("E2", ["C", "D"]);
        fixture
    }

    /// A chain of overlapping hyperedges plus one isolated node:
    /// `E1 = {A, B, C}`, `E2 = {C, D}`, `E3 = {D, E, F}`, `G` alone.
    pub fn chain() -> Self {
        let mut fixture = Self::new();
        fixture.add_nodes(["A", "B", "C", "D", "E", "F", "G"]);
        fixture.add_edge("E1", ["A", "B", "C"]);
        fixture.add_edge("E2", ["C", "D"]);
        fixture.add_edge("E3", ["D", "E", "F"]);
        fixture
    }

    /// Add named nodes.
    ///
    /// # Panics
    /// Panics if a name is already in use.
    pub fn add_nodes<'a>(&mut self, names: impl IntoIterator<Item = &'a str>) {
        for name in names {
            assert!(!self.nodes.contains_key(name), "duplicate node name {name}");
            let id = self.hypergraph.add_node(name.to_string());
            self.nodes.insert(name.to_string(), id);
        }
    }

    /// Add a named edge over named nodes.
    ///
    /// # Panics
    /// Panics if a node name is unknown or the edge is rejected.
    pub fn add_edge<'a>(
        &mut self,
        name: &str,
        members: impl IntoIterator<Item = &'a str>,
    ) -> EdgeId {
        let ids: Vec<NodeId> = members.into_iter().map(|m| self.node(m)).collect();
        let id = self
            .hypergraph
            .add_edge(ids, name.to_string())
            .expect("fixture edge should be valid");
        self.edges.insert(name.to_string(), id);
        id
    }

    /// Add a named weighted edge over named nodes.
    pub fn add_weighted_edge<'a>(
        &mut self,
        name: &str,
        weight: f64,
        members: impl IntoIterator<Item = &'a str>,
    ) -> EdgeId {
        let ids: Vec<NodeId> = members.into_iter().map(|m| self.node(m)).collect();
        let id = self
            .hypergraph
            .add_weighted_edge(ids, weight, name.to_string())
            .expect("fixture edge should be valid");
        self.edges.insert(name.to_string(), id);
        id
    }

    /// Get a node ID by name.
    ///
    /// # Panics
    /// Panics if the name is unknown.
    pub fn node(&self, name: &str) -> NodeId {
        *self
            .nodes
            .get(name)
            .unwrap_or_else(|| panic!("unknown fixture node {name}"))
    }

    /// Get an edge ID by name.
    ///
    /// # Panics
    /// Panics if the name is unknown.
    pub fn edge(&self, name: &str) -> EdgeId {
        *self
            .edges
            .get(name)
            .unwrap_or_else(|| panic!("unknown fixture edge {name}"))
    }

    /// A set of node IDs by name.
    pub fn node_set<'a>(&self, names: impl IntoIterator<Item = &'a str>) -> BTreeSet<NodeId> {
        names.into_iter().map(|name| self.node(name)).collect()
    }

    /// Get the hypergraph.
    pub fn hypergraph(&self) -> &Hypergraph<String, String> {
        &self.hypergraph
    }

    /// Get a mutable reference to the hypergraph.
    pub fn hypergraph_mut(&mut self) -> &mut Hypergraph<String, String> {
        &mut self.hypergraph
    }

    /// Consume the fixture and return the hypergraph.
    pub fn into_hypergraph(self) -> Hypergraph<String, String> {
        self.hypergraph
    }
}

/// Assert that a hypergraph's incidence relation is consistent.
///
/// Checks symmetry between `edges_of` and `nodes_of`, degree and size
/// bookkeeping, and the facade's own `validate`.
pub fn assert_incidence_consistent<N, E>(hypergraph: &Hypergraph<N, E>) {
    hypergraph
        .validate()
        .unwrap_or_else(|err| panic!("invariant violated: {err}"));

    for node in hypergraph.node_ids() {
        let edges: Vec<_> = hypergraph.edges_of(node).expect("live node").collect();
        assert_eq!(hypergraph.degree(node).expect("live node"), edges.len());
        for edge in edges {
            assert!(hypergraph.contains_edge(edge), "{node} lists dead edge {edge}");
            assert!(
                hypergraph.nodes_of(edge).expect("live edge").any(|n| n == node),
                "{node} lists {edge} but not the reverse"
            );
        }
    }
    for edge in hypergraph.edge_ids() {
        let nodes: Vec<_> = hypergraph.nodes_of(edge).expect("live edge").collect();
        assert_eq!(hypergraph.edge_size(edge).expect("live edge"), nodes.len());
        let unique: BTreeSet<_> = nodes.iter().copied().collect();
        assert_eq!(unique.len(), nodes.len(), "{edge} has duplicate members");
        for node in nodes {
            assert!(hypergraph.contains_node(node), "{edge} lists dead node {node}");
            assert!(
                hypergraph.edges_of(node).expect("live node").any(|e| e == edge),
                "{edge} lists {node} but not the reverse"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_triangle_fixture() {
        let fixture = HypergraphFixture::triangle_hyperedge();
        let hg = fixture.hypergraph();

        assert_eq!(hg.node_count(), 3);
        assert_eq!(hg.edge_count(), 1);
        assert_eq!(hg.edge_size(fixture.edge("E1")).unwrap(), 3);
        assert_incidence_consistent(hg);
    }

    #[test]
    fn test_chain_fixture() {
        let fixture = HypergraphFixture::chain();
        let hg = fixture.hypergraph();

        assert_eq!(hg.node_count(), 7);
        assert_eq!(hg.edge_count(), 3);
        assert_eq!(hg.degree(fixture.node("C")).unwrap(), 2);
        assert_eq!(hg.degree(fixture.node("G")).unwrap(), 0);
        assert_eq!(
            hg.node(fixture.node("D")).map(|n| n.data.as_str()),
            Some("D")
        );
    }

    #[test]
    #[should_panic(expected = "unknown fixture node Z")]
    fn test_unknown_name_panics() {
        let fixture = HypergraphFixture::new();
        fixture.node("Z");
    }
}
