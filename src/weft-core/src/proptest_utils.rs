//! Property-based testing utilities for weft-core.
//!
//! Random operation sequences are replayed against a hypergraph, checking
//! after every step that the incidence invariants hold and that a rejected
//! operation left the structure untouched.

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use common_config::{EmptyEdgePolicy, GraphConfig};
    use proptest::prelude::*;

    use crate::hypergraph::{EdgeId, Hypergraph, NodeId};
    use crate::testing::assert_incidence_consistent;

    // =========================================================================
    // Operations
    // =========================================================================

    /// A mutation addressed by position among the currently live ids, so the
    /// same sequence stays meaningful whatever ids the graph hands out.
    #[derive(Debug, Clone)]
    enum Op {
        AddNode,
        RemoveNode(usize),
        AddEdge(Vec<usize>),
        RemoveEdge(usize),
        AddNodeToEdge(usize, usize),
        RemoveNodeFromEdge(usize, usize),
    }

    fn arb_op() -> impl Strategy<Value = Op> {
        prop_oneof![
            3 => Just(Op::AddNode),
            1 => any::<usize>().prop_map(Op::RemoveNode),
            3 => prop::collection::vec(any::<usize>(), 0..5).prop_map(Op::AddEdge),
            1 => any::<usize>().prop_map(Op::RemoveEdge),
            2 => (any::<usize>(), any::<usize>()).prop_map(|(n, e)| Op::AddNodeToEdge(n, e)),
            2 => (any::<usize>(), any::<usize>()).prop_map(|(n, e)| Op::RemoveNodeFromEdge(n, e)),
        ]
    }

    fn arb_policy() -> impl Strategy<Value = EmptyEdgePolicy> {
        prop_oneof![Just(EmptyEdgePolicy::Retain), Just(EmptyEdgePolicy::Remove)]
    }

    /// Pick a live id by position; with nothing live, fall back to an id
    /// that was never allocated so the operation exercises the error path.
    fn pick<T: Copy>(ids: &[T], index: usize, missing: T) -> T {
        if ids.is_empty() {
            missing
        } else {
            ids[index % ids.len()]
        }
    }

    type Snapshot = (Vec<NodeId>, Vec<(EdgeId, BTreeSet<NodeId>)>);

    fn snapshot(hg: &Hypergraph) -> Snapshot {
        let nodes = hg.node_ids().collect();
        let edges = hg
            .edge_ids()
            .map(|edge| (edge, hg.nodes_of(edge).expect("live edge").collect()))
            .collect();
        (nodes, edges)
    }

    fn apply(hg: &mut Hypergraph, op: &Op) -> bool {
        use crate::hypergraph::EntityId;

        let nodes: Vec<_> = hg.node_ids().collect();
        let edges: Vec<_> = hg.edge_ids().collect();
        let missing_node = NodeId::from_raw(u64::MAX);
        let missing_edge = EdgeId::from_raw(u64::MAX);

        match op {
            Op::AddNode => {
                hg.add_node(());
                true
            }
            Op::RemoveNode(i) => hg.remove_node(pick(&nodes, *i, missing_node)).is_ok(),
            Op::AddEdge(members) => {
                let members: Vec<_> = members
                    .iter()
                    .map(|i| pick(&nodes, *i, missing_node))
                    .collect();
                hg.add_edge(members, ()).is_ok()
            }
            Op::RemoveEdge(i) => hg.remove_edge(pick(&edges, *i, missing_edge)).is_ok(),
            Op::AddNodeToEdge(n, e) => hg
                .add_node_to_edge(pick(&nodes, *n, missing_node), pick(&edges, *e, missing_edge))
                .is_ok(),
            Op::RemoveNodeFromEdge(n, e) => hg
                .remove_node_from_edge(
                    pick(&nodes, *n, missing_node),
                    pick(&edges, *e, missing_edge),
                )
                .is_ok(),
        }
    }

    // =========================================================================
    // Property Tests
    // =========================================================================

    proptest! {
        /// Invariants hold after every operation; failures change nothing.
        #[test]
        fn invariants_preserved_by_random_operations(
            policy in arb_policy(),
            ops in prop::collection::vec(arb_op(), 1..60)
        ) {
            let mut hg: Hypergraph = Hypergraph::with_config(
                GraphConfig::default().with_empty_edges(policy)
            );
            for op in &ops {
                let before = snapshot(&hg);
                let applied = apply(&mut hg, op);
                if !applied {
                    prop_assert_eq!(&before, &snapshot(&hg));
                }
                assert_incidence_consistent(&hg);
                if policy == EmptyEdgePolicy::Remove {
                    for edge in hg.edge_ids() {
                        prop_assert!(hg.edge_size(edge).unwrap() > 0);
                    }
                }
            }
        }

        /// Removing a node erases it from every edge that listed it.
        #[test]
        fn node_removal_cascades(
            node_count in 1usize..10,
            edges in prop::collection::vec(prop::collection::btree_set(0usize..10, 0..6), 0..10),
            victim in any::<usize>()
        ) {
            let mut hg: Hypergraph = Hypergraph::new();
            let nodes: Vec<_> = (0..node_count).map(|_| hg.add_node(())).collect();
            for members in &edges {
                let ids: BTreeSet<_> = members.iter().map(|i| nodes[i % node_count]).collect();
                hg.add_edge(ids, ()).unwrap();
            }

            let victim = nodes[victim % node_count];
            let edge_count = hg.edge_count();
            hg.remove_node(victim).unwrap();

            prop_assert_eq!(hg.edge_count(), edge_count);
            for edge in hg.edge_ids() {
                prop_assert!(hg.nodes_of(edge).unwrap().all(|n| n != victim));
            }
            prop_assert!(hg.degree(victim).unwrap_err().is_unknown_id());
        }

        /// Components partition the node set and agree with `is_connected`.
        #[test]
        fn components_partition_nodes(
            node_count in 1usize..12,
            edges in prop::collection::vec(prop::collection::btree_set(0usize..12, 1..4), 0..8)
        ) {
            let mut hg: Hypergraph = Hypergraph::new();
            let nodes: Vec<_> = (0..node_count).map(|_| hg.add_node(())).collect();
            for members in &edges {
                let ids: BTreeSet<_> = members.iter().map(|i| nodes[i % node_count]).collect();
                hg.add_edge(ids, ()).unwrap();
            }

            let components = hg.connected_components();
            let total: usize = components.iter().map(BTreeSet::len).sum();
            prop_assert_eq!(total, node_count);

            for (i, a) in components.iter().enumerate() {
                for b in components.iter().skip(i + 1) {
                    prop_assert!(a.is_disjoint(b));
                    let x = *a.iter().next().unwrap();
                    let y = *b.iter().next().unwrap();
                    prop_assert!(!hg.is_connected(x, y).unwrap());
                }
                for &x in a {
                    for &y in a {
                        prop_assert!(hg.is_connected(x, y).unwrap());
                    }
                }
            }
        }
    }
}
