//! Error types and result aliases for weft.
//!
//! Every fallible hypergraph operation reports one of the kinds in
//! [`WeftError`] synchronously, before any structure has been touched.

mod error;

pub use error::{WeftError, WeftResult};
