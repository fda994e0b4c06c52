//! Hypergraph data model.
//!
//! This module provides the core primitives:
//! - `Registry` for identity allocation
//! - `IncidenceStore` for the node ↔ edge relation
//! - `Node` and `Hyperedge` records carrying opaque payloads
//! - `Hypergraph` for the canonical user-facing container
//! - `IncidenceView` as the read-only seam used by algorithms

mod container;
mod hyperedge;
mod identifiers;
mod incidence;
mod node;
mod registry;
mod view;

pub use container::Hypergraph;
pub use hyperedge::{DEFAULT_WEIGHT, Hyperedge};
pub use identifiers::{EdgeId, EntityId, Label, NodeId};
pub use incidence::IncidenceStore;
pub use node::Node;
pub use registry::Registry;
pub use view::IncidenceView;
