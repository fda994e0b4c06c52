//! Weighted shortest path lengths between nodes.
//!
//! Distances are computed with Dijkstra on the bipartite graph, where each
//! step through an edge of weight `w` costs `w / 2` in and `w / 2` out.
//! Edge weights are always positive, so every step has a positive cost.

use std::collections::BTreeMap;

use common_error::{WeftError, WeftResult};
use log::debug;
use petgraph::algo::dijkstra;
use weft_core::{EntityId, IncidenceView, NodeId};

use crate::bipartite::{BipartiteGraph, BipartiteVertex, to_bipartite_graph};

/// Distances from one node to every node it can reach.
pub type Distances = BTreeMap<NodeId, f64>;

fn distances_from(bipartite: &BipartiteGraph, source: NodeId) -> Distances {
    let Some(start) = bipartite.vertex_of_node(source) else {
        return Distances::new();
    };
    dijkstra(bipartite.graph(), start, None, |link| *link.weight())
        .into_iter()
        .filter_map(|(index, distance)| match bipartite.vertex(index)? {
            BipartiteVertex::Node(node) => Some((node, distance)),
            BipartiteVertex::Edge(_) => None,
        })
        .collect()
}

/// Shortest weighted path length from `source` to each reachable node.
///
/// The source maps to `0.0`; unreachable nodes are absent.
pub fn shortest_path_lengths<G: IncidenceView>(graph: &G, source: NodeId) -> WeftResult<Distances> {
    if !graph.contains_node(source) {
        return Err(WeftError::unknown_id(NodeId::KIND, source.raw()));
    }
    Ok(distances_from(&to_bipartite_graph(graph), source))
}

/// Shortest weighted path lengths between all pairs of nodes.
///
/// Keyed by source; pairs with no connecting path are omitted.
pub fn all_pairs_shortest_path_lengths<G: IncidenceView>(
    graph: &G,
) -> WeftResult<BTreeMap<NodeId, Distances>> {
    let bipartite = to_bipartite_graph(graph);
    let table: BTreeMap<NodeId, Distances> = graph
        .node_ids()
        .map(|source| (source, distances_from(&bipartite, source)))
        .collect();
    debug!("computed path lengths from {} sources", table.len());
    Ok(table)
}
