//! Configuration management for weft.
//!
//! Provides per-graph structural policy plus tuning for matrix import and
//! the exhaustive cut search.

use common_error::{WeftError, WeftResult};
use serde::{Deserialize, Serialize};

/// Global weft configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct WeftConfig {
    /// Structural configuration for hypergraph instances.
    pub graph: GraphConfig,
    /// Matrix conversion configuration.
    pub matrix: MatrixConfig,
    /// Algorithm limits.
    pub analysis: AnalysisConfig,
}

impl WeftConfig {
    /// Parse a configuration from JSON and validate it.
    ///
    /// Missing sections and fields fall back to their defaults.
    pub fn from_json(json: &str) -> WeftResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every value is usable.
    pub fn validate(&self) -> WeftResult<()> {
        let tolerance = self.matrix.weight_tolerance;
        if !tolerance.is_finite() || tolerance < 0.0 {
            return Err(WeftError::config(format!(
                "matrix.weight_tolerance must be a finite non-negative number, got {tolerance}"
            )));
        }
        if self.analysis.max_cut_search_nodes == 0 {
            return Err(WeftError::config(
                "analysis.max_cut_search_nodes must be at least 1",
            ));
        }
        Ok(())
    }
}

/// What happens to an edge whose last node is detached from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum EmptyEdgePolicy {
    /// Keep the edge as a zero-node edge.
    #[default]
    Retain,
    /// Delete the edge as soon as it becomes empty. Empty edges are also
    /// rejected at creation time under this policy.
    Remove,
}

/// Hypergraph structural configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    /// Empty-edge policy, applied uniformly by every mutation.
    pub empty_edges: EmptyEdgePolicy,
    /// Initial node capacity hint.
    pub node_capacity: usize,
    /// Initial edge capacity hint.
    pub edge_capacity: usize,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            empty_edges: EmptyEdgePolicy::Retain,
            node_capacity: 0,
            edge_capacity: 0,
        }
    }
}

impl GraphConfig {
    /// Builder-style setter for the empty-edge policy.
    #[must_use]
    pub fn with_empty_edges(mut self, policy: EmptyEdgePolicy) -> Self {
        self.empty_edges = policy;
        self
    }
}

/// Matrix conversion configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatrixConfig {
    /// Maximum difference between two entries of a weighted column that are
    /// still read as the same edge weight.
    pub weight_tolerance: f64,
}

impl Default for MatrixConfig {
    fn default() -> Self {
        Self {
            weight_tolerance: 1e-4,
        }
    }
}

/// Limits for exhaustive algorithms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Largest node count the isoperimetric search will enumerate subsets of.
    pub max_cut_search_nodes: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            max_cut_search_nodes: 20,
        }
    }
}
