//! Graph model and shortest-path operations
//!
//! Provides the Euclidean graph data model and its algorithms:
//! - Validated construction from nodes + edges
//! - The memoized Net adjacency/distance view
//! - Working-set and priority-frontier shortest-path engines

pub mod algos;
pub mod net;
pub mod types;

pub use algos::{frontier_shortest_path, shortest_path, Algorithm};
pub use net::Net;
pub use types::{Edge, Node, PathResult};

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::error::{NetspanError, Result};

/// An undirected, positively-weighted graph of labeled 2D points.
///
/// Construction validates every edge endpoint against the node set;
/// no partial graph is ever produced. The graph is immutable after
/// construction, so shared references can be queried concurrently.
#[derive(Debug)]
pub struct Graph {
    nodes: HashMap<String, Node>,
    edges: Vec<Edge>,
    net: OnceLock<Net>,
}

impl Graph {
    /// Build a graph, rejecting edges that reference unknown node ids.
    ///
    /// All offending ids are collected (sorted, deduplicated) into the
    /// error, not just the first one found. Duplicate node ids are
    /// rejected the same way.
    pub fn new(nodes: Vec<Node>, edges: Vec<Edge>) -> Result<Self> {
        let mut node_map: HashMap<String, Node> = HashMap::with_capacity(nodes.len());
        let mut duplicates: Vec<String> = Vec::new();
        for node in nodes {
            if let Some(previous) = node_map.insert(node.id.clone(), node) {
                duplicates.push(previous.id);
            }
        }
        if !duplicates.is_empty() {
            duplicates.sort();
            duplicates.dedup();
            return Err(NetspanError::DuplicateNodes { ids: duplicates });
        }

        let mut unknown: Vec<String> = edges
            .iter()
            .flat_map(|edge| [&edge.a, &edge.b])
            .filter(|id| !node_map.contains_key(*id))
            .cloned()
            .collect();
        if !unknown.is_empty() {
            unknown.sort();
            unknown.dedup();
            return Err(NetspanError::UnknownEndpoints { ids: unknown });
        }

        Ok(Graph {
            nodes: node_map,
            edges,
            net: OnceLock::new(),
        })
    }

    /// The derived adjacency/distance view, computed on first use and
    /// cached for the graph's lifetime.
    pub fn net(&self) -> &Net {
        self.net
            .get_or_init(|| Net::build(&self.nodes, &self.edges))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.nodes.contains_key(id)
    }

    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.get(id)
    }

    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Total Net-derived distance along a route of node ids.
    ///
    /// Returns `None` when consecutive ids are not connected; that is a
    /// caller error (the route is not a true path over this graph).
    pub fn traversed_distance(&self, route: &[String]) -> Option<f64> {
        self.net().route_distance(route)
    }
}
