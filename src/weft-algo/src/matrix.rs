//! Matrix conversions, algebraic graph theory.
//!
//! Rows are nodes and columns are edges, both in registry creation order
//! (equivalently ascending id order). Building a hypergraph from a matrix
//! creates nodes row by row and edges column by column, so exporting the
//! result again reproduces the input matrix exactly.

use std::collections::HashMap;

use common_config::{EmptyEdgePolicy, WeftConfig};
use common_error::{WeftError, WeftResult, malformed_matrix};
use log::debug;
use ndarray::{Array1, Array2, ArrayBase, Axis, Data, Ix2};
use weft_core::{DEFAULT_WEIGHT, EdgeId, Hypergraph, IncidenceView, NodeId};

/// An incidence matrix together with the identities of its rows and columns.
#[derive(Debug, Clone, PartialEq)]
pub struct IncidenceMatrix {
    nodes: Vec<NodeId>,
    edges: Vec<EdgeId>,
    values: Array2<f64>,
}

impl IncidenceMatrix {
    /// Node identity of each row.
    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    /// Edge identity of each column.
    pub fn edges(&self) -> &[EdgeId] {
        &self.edges
    }

    /// The `node_count x edge_count` entries.
    pub fn values(&self) -> &Array2<f64> {
        &self.values
    }

    pub fn into_values(self) -> Array2<f64> {
        self.values
    }

    /// `(rows, columns)`.
    pub fn shape(&self) -> (usize, usize) {
        self.values.dim()
    }

    /// Row index of `node`.
    pub fn row_of(&self, node: NodeId) -> Option<usize> {
        self.nodes.binary_search(&node).ok()
    }

    /// Column index of `edge`.
    pub fn column_of(&self, edge: EdgeId) -> Option<usize> {
        self.edges.binary_search(&edge).ok()
    }

    /// Entry for a node/edge pair, `None` if either is not in the matrix.
    pub fn get(&self, node: NodeId, edge: EdgeId) -> Option<f64> {
        Some(self.values[[self.row_of(node)?, self.column_of(edge)?]])
    }
}

fn row_positions<G: IncidenceView>(graph: &G) -> (Vec<NodeId>, HashMap<NodeId, usize>) {
    let nodes: Vec<NodeId> = graph.node_ids().collect();
    let rows = nodes.iter().enumerate().map(|(row, &node)| (node, row)).collect();
    (nodes, rows)
}

fn build_incidence<G: IncidenceView>(graph: &G, weighted: bool) -> IncidenceMatrix {
    let (nodes, rows) = row_positions(graph);
    let edges: Vec<EdgeId> = graph.edge_ids().collect();

    let mut values = Array2::zeros((nodes.len(), edges.len()));
    for (column, &edge) in edges.iter().enumerate() {
        let entry = if weighted {
            graph.edge_weight(edge).unwrap_or(DEFAULT_WEIGHT)
        } else {
            1.0
        };
        for node in graph.member_nodes(edge) {
            if let Some(&row) = rows.get(&node) {
                values[[row, column]] = entry;
            }
        }
    }

    IncidenceMatrix {
        nodes,
        edges,
        values,
    }
}

/// 0/1 incidence matrix of a hypergraph.
pub fn to_incidence_matrix<G: IncidenceView>(graph: &G) -> IncidenceMatrix {
    build_incidence(graph, false)
}

/// Incidence matrix whose nonzero entries are the edge weights.
///
/// Weights are positive, so the nonzero pattern is exactly the 0/1
/// incidence. An empty edge exports as an all-zero column, which carries no
/// weight and reads back with the default weight.
pub fn to_weighted_incidence_matrix<G: IncidenceView>(graph: &G) -> IncidenceMatrix {
    build_incidence(graph, true)
}

/// Build a dense matrix from row vectors, rejecting ragged input.
pub fn matrix_from_rows(rows: Vec<Vec<f64>>) -> WeftResult<Array2<f64>> {
    let row_count = rows.len();
    let column_count = rows.first().map_or(0, Vec::len);
    for (index, row) in rows.iter().enumerate() {
        if row.len() != column_count {
            malformed_matrix!(
                "row {index} has {} entries, expected {column_count}",
                row.len()
            );
        }
    }
    let flat: Vec<f64> = rows.into_iter().flatten().collect();
    Array2::from_shape_vec((row_count, column_count), flat)
        .map_err(|err| WeftError::malformed_matrix(err.to_string()))
}

/// Rebuild a hypergraph from a 0/1 incidence matrix.
///
/// Fails with `MalformedMatrix` if any entry is not exactly 0 or 1.
pub fn from_incidence_matrix<N, E, S>(matrix: &ArrayBase<S, Ix2>) -> WeftResult<Hypergraph<N, E>>
where
    N: Default,
    E: Default,
    S: Data<Elem = f64>,
{
    from_incidence_matrix_with_config(matrix, &WeftConfig::default())
}

/// [`from_incidence_matrix`] with an explicit configuration for the new graph.
pub fn from_incidence_matrix_with_config<N, E, S>(
    matrix: &ArrayBase<S, Ix2>,
    config: &WeftConfig,
) -> WeftResult<Hypergraph<N, E>>
where
    N: Default,
    E: Default,
    S: Data<Elem = f64>,
{
    for ((row, column), &value) in matrix.indexed_iter() {
        if value != 0.0 && value != 1.0 {
            malformed_matrix!("entry ({row}, {column}) is {value}, expected 0 or 1");
        }
    }
    let weights = vec![DEFAULT_WEIGHT; matrix.ncols()];
    assemble(matrix, &weights, config)
}

/// Rebuild a hypergraph from a weighted incidence matrix.
///
/// Entries must be finite and non-negative. The nonzero entries of a column
/// must agree within `matrix.weight_tolerance`; their first value becomes
/// the edge weight. An all-zero column becomes an empty edge of default
/// weight.
pub fn from_weighted_incidence_matrix<N, E, S>(
    matrix: &ArrayBase<S, Ix2>,
) -> WeftResult<Hypergraph<N, E>>
where
    N: Default,
    E: Default,
    S: Data<Elem = f64>,
{
    from_weighted_incidence_matrix_with_config(matrix, &WeftConfig::default())
}

/// [`from_weighted_incidence_matrix`] with an explicit configuration.
pub fn from_weighted_incidence_matrix_with_config<N, E, S>(
    matrix: &ArrayBase<S, Ix2>,
    config: &WeftConfig,
) -> WeftResult<Hypergraph<N, E>>
where
    N: Default,
    E: Default,
    S: Data<Elem = f64>,
{
    let tolerance = config.matrix.weight_tolerance;
    let mut weights = Vec::with_capacity(matrix.ncols());
    for (column, entries) in matrix.axis_iter(Axis(1)).enumerate() {
        let mut weight: Option<f64> = None;
        for (row, &value) in entries.iter().enumerate() {
            if !value.is_finite() || value < 0.0 {
                malformed_matrix!(
                    "entry ({row}, {column}) is {value}, expected a finite non-negative weight"
                );
            }
            if value == 0.0 {
                continue;
            }
            match weight {
                None => weight = Some(value),
                Some(first) if (value - first).abs() > tolerance => {
                    malformed_matrix!(
                        "column {column} mixes weights {first} and {value} (tolerance {tolerance})"
                    );
                }
                Some(_) => {}
            }
        }
        weights.push(weight.unwrap_or(DEFAULT_WEIGHT));
    }
    assemble(matrix, &weights, config)
}

fn assemble<N, E, S>(
    matrix: &ArrayBase<S, Ix2>,
    weights: &[f64],
    config: &WeftConfig,
) -> WeftResult<Hypergraph<N, E>>
where
    N: Default,
    E: Default,
    S: Data<Elem = f64>,
{
    config.validate()?;
    let (row_count, column_count) = matrix.dim();

    let columns: Vec<Vec<usize>> = matrix
        .axis_iter(Axis(1))
        .map(|entries| {
            entries
                .iter()
                .enumerate()
                .filter(|(_, value)| **value != 0.0)
                .map(|(row, _)| row)
                .collect()
        })
        .collect();
    if config.graph.empty_edges == EmptyEdgePolicy::Remove {
        if let Some(column) = columns.iter().position(Vec::is_empty) {
            malformed_matrix!("column {column} is empty but the target graph removes empty edges");
        }
    }

    let mut graph = Hypergraph::with_config(config.graph.clone());
    let nodes: Vec<NodeId> = (0..row_count).map(|_| graph.add_node(N::default())).collect();
    for (members, &weight) in columns.iter().zip(weights) {
        graph.add_weighted_edge(members.iter().map(|&row| nodes[row]), weight, E::default())?;
    }

    debug!("built hypergraph from {row_count}x{column_count} incidence matrix");
    Ok(graph)
}

/// Diagonal matrix of weighted node degrees.
pub fn degree_matrix<G: IncidenceView>(graph: &G) -> Array2<f64> {
    let degrees: Array1<f64> = graph
        .node_ids()
        .map(|node| {
            graph
                .incident_edges(node)
                .filter_map(|edge| graph.edge_weight(edge))
                .sum::<f64>()
        })
        .collect();
    Array2::from_diag(&degrees)
}

/// Weighted adjacency matrix.
///
/// Entry `(u, v)` is the total weight of the edges containing both `u` and
/// `v`; the diagonal is zero.
pub fn adjacency_matrix<G: IncidenceView>(graph: &G) -> Array2<f64> {
    let (nodes, rows) = row_positions(graph);
    let mut adjacency = Array2::zeros((nodes.len(), nodes.len()));
    for edge in graph.edge_ids() {
        let weight = graph.edge_weight(edge).unwrap_or(DEFAULT_WEIGHT);
        let members: Vec<usize> = graph
            .member_nodes(edge)
            .filter_map(|node| rows.get(&node).copied())
            .collect();
        for &u in &members {
            for &v in &members {
                if u != v {
                    adjacency[[u, v]] += weight;
                }
            }
        }
    }
    adjacency
}

/// Laplacian `diag(row sums of A) - A` of the weighted adjacency matrix.
///
/// For a 2-uniform hypergraph the row sums are the weighted degrees, giving
/// the classical `D - A`.
pub fn laplacian_matrix<G: IncidenceView>(graph: &G) -> Array2<f64> {
    let adjacency = adjacency_matrix(graph);
    let row_sums = adjacency.sum_axis(Axis(1));
    Array2::from_diag(&row_sums) - adjacency
}
