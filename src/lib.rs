//! Weft - undirected hypergraphs with incidence, traversal and matrix views
//!
//! A hypergraph is a set of nodes and a set of edges, where each edge joins
//! any number of nodes. Weft keeps nodes and edges in id registries and the
//! membership relation in a two-way incidence index, so both directions of
//! every query are answered without scanning.
//!
//! ```
//! use weft::algo::{from_incidence_matrix, to_incidence_matrix};
//! use weft::core::Hypergraph;
//!
//! let mut hg: Hypergraph = Hypergraph::new();
//! let a = hg.add_node(());
//! let b = hg.add_node(());
//! hg.add_edge([a, b], ()).unwrap();
//!
//! let matrix = to_incidence_matrix(&hg);
//! assert_eq!(matrix.values(), &ndarray::array![[1.0], [1.0]]);
//!
//! let rebuilt: Hypergraph = from_incidence_matrix(matrix.values()).unwrap();
//! assert_eq!(rebuilt.edge_count(), 1);
//! ```

#![forbid(unsafe_code)]
#![allow(clippy::module_name_repetitions)]

// Re-export workspace crates
pub use common_config as config;
pub use common_error as error;
pub use weft_algo as algo;
pub use weft_core as core;

pub use common_error::{WeftError, WeftResult};
pub use weft_core::{EdgeId, Hypergraph, NodeId};

/// Weft version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
