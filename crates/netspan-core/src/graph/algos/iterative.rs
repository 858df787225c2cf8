//! Working-set shortest path (iterative relaxation)
//!
//! Classic Dijkstra over a working set of unfinalized nodes: repeatedly
//! finalize the node with the minimum tentative distance and relax its
//! neighbors through the Net view.

use std::collections::{HashMap, HashSet};

use super::shared::finish_route;
use crate::graph::{Graph, PathResult};

/// Compute the least-cost route between two node ids.
///
/// `from == to` short-circuits to a zero-length route without checking
/// either id against the graph; this mirrors long-standing behavior and
/// keeps the identity property `shortest_path(g, s, s) == Found([s], 0.0)`
/// unconditional.
#[tracing::instrument(skip(graph))]
pub fn shortest_path(graph: &Graph, from: &str, to: &str) -> PathResult {
    if from == to {
        return PathResult::Found {
            route: vec![from.to_string()],
            distance: 0.0,
        };
    }
    if !graph.contains(from) || !graph.contains(to) {
        return PathResult::InvalidEndpoints;
    }

    let net = graph.net();
    let mut dist: HashMap<&str, f64> = net.ids().map(|id| (id, f64::INFINITY)).collect();
    dist.insert(from, 0.0);
    let mut prev: HashMap<&str, &str> = HashMap::new();
    let mut working: HashSet<&str> = net.ids().collect();

    while let Some(closest) = pick_closest(&working, &dist) {
        if dist[closest].is_infinite() {
            // Everything still in the working set is unreachable
            break;
        }
        working.remove(closest);

        let Some(neighbors) = net.neighbors(closest) else {
            return PathResult::InternalError {
                reason: format!("node {closest} missing from net"),
            };
        };
        for (neighbor, weight) in neighbors {
            let alternate = dist[closest] + weight;
            match dist.get_mut(neighbor.as_str()) {
                Some(tentative) if alternate < *tentative => {
                    *tentative = alternate;
                    prev.insert(neighbor.as_str(), closest);
                }
                Some(_) => {}
                None => {
                    return PathResult::InternalError {
                        reason: format!("neighbor {neighbor} missing from distance map"),
                    };
                }
            }
        }
    }

    match dist.get(to) {
        Some(distance) if distance.is_finite() => {}
        _ => return PathResult::NotFound,
    }

    let mut route = vec![to.to_string()];
    let mut cursor = to;
    while cursor != from {
        match prev.get(cursor) {
            Some(&predecessor) => {
                route.push(predecessor.to_string());
                cursor = predecessor;
            }
            None => return PathResult::NotFound,
        }
    }
    route.reverse();

    tracing::debug!(hops = route.len() - 1, "route_reconstructed");
    finish_route(net, route)
}

/// Minimum tentative distance in the working set, ties broken by id so
/// the same query always yields the same route.
fn pick_closest<'a>(working: &HashSet<&'a str>, dist: &HashMap<&'a str, f64>) -> Option<&'a str> {
    working
        .iter()
        .copied()
        .min_by(|a, b| dist[a].total_cmp(&dist[b]).then_with(|| a.cmp(b)))
}
