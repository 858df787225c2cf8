//! Priority-frontier shortest path over the Net view
//!
//! Maintains a min-heap of (cost, node, predecessor) entries awaiting
//! relaxation. The globally cheapest entry is committed to a
//! predecessor map, then its unvisited neighbors are pushed with
//! updated costs. Later, costlier entries for an already-committed node
//! are skipped on pop. Terminates when the frontier drains.
//!
//! Operates on a `Net` directly, for callers that query the same
//! materialized view repeatedly.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};

use super::shared::{finish_route, FrontierEntry};
use crate::graph::net::Net;
use crate::graph::types::PathResult;

/// Compute the least-cost route between two node ids of a Net.
///
/// Same result contract as [`super::shortest_path`]; for inputs with a
/// unique shortest route the two engines return identical results, and
/// they always agree on cost.
#[tracing::instrument(skip(net))]
pub fn frontier_shortest_path(net: &Net, from: &str, to: &str) -> PathResult {
    if from == to {
        return PathResult::Found {
            route: vec![to.to_string()],
            distance: 0.0,
        };
    }
    if !net.contains(from) || !net.contains(to) {
        return PathResult::InvalidEndpoints;
    }

    let mut frontier: BinaryHeap<Reverse<FrontierEntry>> = BinaryHeap::new();
    frontier.push(Reverse(FrontierEntry {
        node: from.to_string(),
        pred: None,
        cost: 0.0,
    }));
    // node -> predecessor, committed in cost order
    let mut committed: HashMap<String, Option<String>> = HashMap::new();

    while let Some(Reverse(entry)) = frontier.pop() {
        if committed.contains_key(&entry.node) {
            continue;
        }

        let Some(neighbors) = net.neighbors(&entry.node) else {
            return PathResult::InternalError {
                reason: format!("node {} missing from net", entry.node),
            };
        };
        for (neighbor, weight) in neighbors {
            if committed.contains_key(neighbor.as_str()) {
                continue;
            }
            frontier.push(Reverse(FrontierEntry {
                node: neighbor.clone(),
                pred: Some(entry.node.clone()),
                cost: entry.cost + weight,
            }));
        }
        committed.insert(entry.node, entry.pred);
    }

    if !committed.contains_key(to) {
        return PathResult::NotFound;
    }

    let mut route = vec![to.to_string()];
    let mut cursor = to.to_string();
    while cursor != from {
        match committed.get(&cursor) {
            Some(Some(predecessor)) => {
                route.push(predecessor.clone());
                cursor = predecessor.clone();
            }
            _ => return PathResult::NotFound,
        }
    }
    route.reverse();

    tracing::debug!(hops = route.len() - 1, "route_reconstructed");
    finish_route(net, route)
}
