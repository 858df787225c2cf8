use serde::{Deserialize, Serialize};

/// A labeled point in the plane.
///
/// Nodes are immutable once constructed and are referenced by id from
/// edges and from all engine state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: String,
    pub x: f64,
    pub y: f64,
}

impl Node {
    pub fn new(id: impl Into<String>, x: f64, y: f64) -> Self {
        Node {
            id: id.into(),
            x,
            y,
        }
    }

    /// Euclidean distance to another node
    pub fn distance_to(&self, other: &Node) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }
}

/// An unordered connection between two node ids.
///
/// Edge weight is never stored; it is derived from the endpoint
/// coordinates when the Net view is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    pub a: String,
    pub b: String,
}

impl Edge {
    pub fn new(a: impl Into<String>, b: impl Into<String>) -> Self {
        Edge {
            a: a.into(),
            b: b.into(),
        }
    }

    /// Whether this edge has the given node as an endpoint
    pub fn touches(&self, id: &str) -> bool {
        self.a == id || self.b == id
    }

    /// Whether this edge connects the two ids, in either order
    pub fn joins(&self, x: &str, y: &str) -> bool {
        (self.a == x && self.b == y) || (self.a == y && self.b == x)
    }
}

/// Outcome of a shortest-path query.
///
/// All four outcomes are ordinary return values; the engines never use
/// errors for control flow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PathResult {
    /// A least-cost route exists
    Found { route: Vec<String>, distance: f64 },
    /// Endpoints are valid but disconnected
    NotFound,
    /// Source and/or target id is not in the graph
    InvalidEndpoints,
    /// An engine invariant was violated (e.g. a neighbor lookup failed
    /// for an edge that should exist in the Net)
    InternalError { reason: String },
}

impl PathResult {
    pub fn is_found(&self) -> bool {
        matches!(self, PathResult::Found { .. })
    }

    /// The route of a `Found` result
    pub fn route(&self) -> Option<&[String]> {
        match self {
            PathResult::Found { route, .. } => Some(route),
            _ => None,
        }
    }

    /// The total distance of a `Found` result
    pub fn distance(&self) -> Option<f64> {
        match self {
            PathResult::Found { distance, .. } => Some(*distance),
            _ => None,
        }
    }
}
