//! Cut-based connectivity measures.

use std::collections::BTreeSet;

use common_config::AnalysisConfig;
use common_error::{WeftError, WeftResult, ensure};
use itertools::Itertools;
use log::debug;
use weft_core::{EdgeId, EntityId, IncidenceView, NodeId};

fn cut_unchecked<G: IncidenceView>(graph: &G, subset: &BTreeSet<NodeId>) -> BTreeSet<EdgeId> {
    graph
        .edge_ids()
        .filter(|&edge| {
            let (mut inside, mut outside) = (false, false);
            for node in graph.member_nodes(edge) {
                if subset.contains(&node) {
                    inside = true;
                } else {
                    outside = true;
                }
                if inside && outside {
                    return true;
                }
            }
            false
        })
        .collect()
}

/// Edges with at least one member inside `subset` and one outside it.
pub fn edge_cut<G: IncidenceView>(
    graph: &G,
    subset: &BTreeSet<NodeId>,
) -> WeftResult<BTreeSet<EdgeId>> {
    if let Some(&unknown) = subset.iter().find(|&&node| !graph.contains_node(node)) {
        return Err(WeftError::unknown_id(NodeId::KIND, unknown.raw()));
    }
    Ok(cut_unchecked(graph, subset))
}

/// Isoperimetric number with the default analysis limits.
pub fn isoperimetric_number<G: IncidenceView>(graph: &G) -> WeftResult<f64> {
    isoperimetric_number_with_config(graph, &AnalysisConfig::default())
}

/// Minimum of `|cut(X)| / |X|` over node subsets with `1 <= |X| <= n / 2`.
///
/// The search is exhaustive, so graphs with more than
/// `max_cut_search_nodes` nodes are rejected with `InvalidParameter`.
/// Graphs with fewer than two nodes have no proper subset to cut and yield
/// infinity.
pub fn isoperimetric_number_with_config<G: IncidenceView>(
    graph: &G,
    config: &AnalysisConfig,
) -> WeftResult<f64> {
    let node_count = graph.node_count();
    ensure!(
        node_count <= config.max_cut_search_nodes,
        InvalidParameter: "{node_count} nodes exceed the exhaustive cut search limit of {}",
        config.max_cut_search_nodes
    );
    if node_count < 2 {
        return Ok(f64::INFINITY);
    }

    let nodes: Vec<NodeId> = graph.node_ids().collect();
    let mut best = f64::INFINITY;
    for size in 1..=node_count / 2 {
        for subset in nodes.iter().copied().combinations(size) {
            let subset: BTreeSet<NodeId> = subset.into_iter().collect();
            let ratio = cut_unchecked(graph, &subset).len() as f64 / size as f64;
            best = best.min(ratio);
        }
        if best == 0.0 {
            break;
        }
    }
    debug!("isoperimetric number over {node_count} nodes is {best}");
    Ok(best)
}
