//! Algorithms over weft hypergraphs.
//!
//! Everything here reads a hypergraph through [`weft_core::IncidenceView`]:
//! - `matrix` converts to and from incidence matrices and derives the
//!   degree, adjacency and Laplacian matrices
//! - `bipartite` builds the petgraph bipartite and clique views
//! - `path` computes weighted shortest path lengths
//! - `connectivity` measures edge cuts and the isoperimetric number

pub mod bipartite;
pub mod connectivity;
pub mod matrix;
pub mod path;

pub use bipartite::{
    BipartiteGraph, BipartiteVertex, clique_expansion, from_bipartite_graph,
    from_bipartite_graph_with_config, to_bipartite_graph,
};
pub use connectivity::{edge_cut, isoperimetric_number, isoperimetric_number_with_config};
pub use matrix::{
    IncidenceMatrix, adjacency_matrix, degree_matrix, from_incidence_matrix,
    from_incidence_matrix_with_config, from_weighted_incidence_matrix,
    from_weighted_incidence_matrix_with_config, laplacian_matrix, matrix_from_rows,
    to_incidence_matrix, to_weighted_incidence_matrix,
};
pub use path::{Distances, all_pairs_shortest_path_lengths, shortest_path_lengths};
