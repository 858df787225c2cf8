use crate::graph::net::Net;
use crate::graph::types::PathResult;

/// Frontier entry awaiting relaxation (ordered by accumulated cost)
#[derive(Debug, Clone)]
pub struct FrontierEntry {
    pub node: String,
    pub pred: Option<String>,
    pub cost: f64,
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == std::cmp::Ordering::Equal
    }
}

impl Eq for FrontierEntry {}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Cost first; node and predecessor ids break ties so pop order
        // is deterministic across calls.
        self.cost
            .total_cmp(&other.cost)
            .then_with(|| self.node.cmp(&other.node))
            .then_with(|| self.pred.cmp(&other.pred))
    }
}

/// Turn a reconstructed route into the final result, recomputing its
/// cost from the net view.
///
/// A hop missing from the net means the predecessor chain references an
/// edge that should exist; that is an engine invariant break, not a
/// caller-visible "no path".
pub fn finish_route(net: &Net, route: Vec<String>) -> PathResult {
    match net.route_distance(&route) {
        Some(distance) if distance.is_finite() => PathResult::Found { route, distance },
        Some(_) => PathResult::InternalError {
            reason: "route distance is not finite".to_string(),
        },
        None => PathResult::InternalError {
            reason: format!("route hop missing from net: {}", route.join(" -> ")),
        },
    }
}
