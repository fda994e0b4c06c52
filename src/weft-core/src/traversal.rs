//! Traversal and connectivity over the "shares a hyperedge" relation.
//!
//! All functions read the hypergraph through [`IncidenceView`] only. Seeds
//! are taken in creation order and incident edges and member nodes are
//! expanded in ascending id order, so visiting order is reproducible.

use std::collections::{BTreeSet, HashMap, VecDeque};

use crate::hypergraph::{EdgeId, IncidenceView, NodeId};

/// One hop of a hyperpath: the edge crossed and the node it led to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PathStep {
    pub edge: EdgeId,
    pub node: NodeId,
}

/// Nodes co-incident with `node` across all its edges, excluding `node`.
pub fn neighbors<G: IncidenceView>(graph: &G, node: NodeId) -> BTreeSet<NodeId> {
    graph
        .incident_edges(node)
        .flat_map(|edge| graph.member_nodes(edge))
        .filter(|&other| other != node)
        .collect()
}

fn sorted_incident<G: IncidenceView>(graph: &G, node: NodeId) -> Vec<EdgeId> {
    let mut edges: Vec<_> = graph.incident_edges(node).collect();
    edges.sort_unstable();
    edges
}

fn sorted_members<G: IncidenceView>(graph: &G, edge: EdgeId) -> Vec<NodeId> {
    let mut nodes: Vec<_> = graph.member_nodes(edge).collect();
    nodes.sort_unstable();
    nodes
}

/// Lazy breadth-first search from a start node.
///
/// Yields every node reachable from the start (the start itself excluded)
/// in the order it is first reached, together with the path of steps that
/// reached it. Paths are shortest in number of hyperedges crossed.
pub struct Bfs<'a, G> {
    graph: &'a G,
    parents: HashMap<NodeId, Option<(EdgeId, NodeId)>>,
    frontier: VecDeque<NodeId>,
    pending: VecDeque<NodeId>,
}

impl<'a, G: IncidenceView> Bfs<'a, G> {
    /// Start a search at `start`. An unknown start yields nothing.
    pub fn new(graph: &'a G, start: NodeId) -> Self {
        let mut parents = HashMap::new();
        let mut frontier = VecDeque::new();
        if graph.contains_node(start) {
            parents.insert(start, None);
            frontier.push_back(start);
        }
        Self {
            graph,
            parents,
            frontier,
            pending: VecDeque::new(),
        }
    }

    /// Path from the start to an already reached node.
    pub fn path_to(&self, node: NodeId) -> Option<Vec<PathStep>> {
        let mut steps = Vec::new();
        let mut current = node;
        loop {
            match self.parents.get(&current)? {
                None => break,
                Some((edge, from)) => {
                    steps.push(PathStep {
                        edge: *edge,
                        node: current,
                    });
                    current = *from;
                }
            }
        }
        steps.reverse();
        Some(steps)
    }

    /// Whether `node` has been reached (the start counts as reached).
    pub fn reached(&self, node: NodeId) -> bool {
        self.parents.contains_key(&node)
    }

    fn expand(&mut self, node: NodeId) {
        for edge in sorted_incident(self.graph, node) {
            for other in sorted_members(self.graph, edge) {
                if !self.parents.contains_key(&other) {
                    self.parents.insert(other, Some((edge, node)));
                    self.frontier.push_back(other);
                    self.pending.push_back(other);
                }
            }
        }
    }
}

impl<G: IncidenceView> Iterator for Bfs<'_, G> {
    type Item = (NodeId, Vec<PathStep>);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(node) = self.pending.pop_front() {
                let path = self.path_to(node)?;
                return Some((node, path));
            }
            let node = self.frontier.pop_front()?;
            self.expand(node);
        }
    }
}

/// Fewest-hyperedge path from `from` to `to`.
///
/// `Some(vec![])` when `from == to`, `None` when `to` is unreachable or
/// either node is unknown.
pub fn shortest_hyperpath<G: IncidenceView>(
    graph: &G,
    from: NodeId,
    to: NodeId,
) -> Option<Vec<PathStep>> {
    if !graph.contains_node(from) || !graph.contains_node(to) {
        return None;
    }
    if from == to {
        return Some(Vec::new());
    }
    Bfs::new(graph, from)
        .find(|(node, _)| *node == to)
        .map(|(_, path)| path)
}

/// Whether `b` is reachable from `a`. A node is connected to itself.
pub fn is_connected<G: IncidenceView>(graph: &G, a: NodeId, b: NodeId) -> bool {
    shortest_hyperpath(graph, a, b).is_some()
}

/// The reachability class containing `node`, including `node` itself.
pub fn component_of<G: IncidenceView>(graph: &G, node: NodeId) -> BTreeSet<NodeId> {
    if !graph.contains_node(node) {
        return BTreeSet::new();
    }
    let mut component: BTreeSet<_> = Bfs::new(graph, node).map(|(n, _)| n).collect();
    component.insert(node);
    component
}

/// Partition all registered nodes into disjoint reachability classes.
///
/// Components are ordered by their earliest-created node; isolated nodes
/// form singleton components.
pub fn connected_components<G: IncidenceView>(graph: &G) -> Vec<BTreeSet<NodeId>> {
    let mut assigned = BTreeSet::new();
    let mut components = Vec::new();
    for seed in graph.node_ids() {
        if assigned.contains(&seed) {
            continue;
        }
        let component = component_of(graph, seed);
        assigned.extend(component.iter().copied());
        components.push(component);
    }
    components
}
