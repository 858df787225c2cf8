//! Shortest-path engines
//!
//! Two independent implementations with an identical result contract:
//! - `iterative`: classic working-set relaxation over the Graph
//! - `frontier`: priority-frontier engine over the Net view
//!
//! The redundancy is intentional; both must agree on route cost for
//! every input, which the tests exercise as a cross-check.

pub mod frontier;
pub mod iterative;
mod shared;

pub use frontier::frontier_shortest_path;
pub use iterative::shortest_path;

use std::fmt;
use std::str::FromStr;

use crate::error::NetspanError;
use crate::graph::{Graph, PathResult};

/// Engine selection for a shortest-path query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Algorithm {
    /// Working-set relaxation (default)
    #[default]
    Iterative,
    /// Priority-frontier over the Net view
    Frontier,
}

impl Algorithm {
    /// Run the selected engine against a graph
    pub fn execute(&self, graph: &Graph, from: &str, to: &str) -> PathResult {
        match self {
            Algorithm::Iterative => shortest_path(graph, from, to),
            Algorithm::Frontier => frontier_shortest_path(graph.net(), from, to),
        }
    }
}

impl FromStr for Algorithm {
    type Err = NetspanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "iterative" => Ok(Algorithm::Iterative),
            "frontier" => Ok(Algorithm::Frontier),
            other => Err(NetspanError::UnknownAlgorithm(other.to_string())),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::Iterative => write!(f, "iterative"),
            Algorithm::Frontier => write!(f, "frontier"),
        }
    }
}
