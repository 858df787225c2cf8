//! Regular-polygon fixture graphs
//!
//! Places `n` nodes with ids `"0".."n-1"` evenly on a circle and
//! connects consecutive nodes into a ring. Used by the `generate`
//! command and throughout the engine tests.

use std::f64::consts::TAU;

use crate::graph::types::{Edge, Node};

/// Spike nodes sit this far beyond the ring radius
const SPIKE_RADIUS_FACTOR: f64 = 1.3;
/// Angular offset of spikes, as a fraction of the step between ring nodes
const SPIKE_SPREAD: f64 = 0.25;

/// Ring of `n` nodes on a circle of the given radius
pub fn regular_polygon(n: usize, radius: f64) -> (Vec<Node>, Vec<Edge>) {
    let mut nodes = Vec::with_capacity(n);
    for i in 0..n {
        let angle = TAU * i as f64 / n as f64;
        nodes.push(Node::new(
            i.to_string(),
            radius * angle.cos(),
            radius * angle.sin(),
        ));
    }
    (nodes, ring_edges(n))
}

fn ring_edges(n: usize) -> Vec<Edge> {
    match n {
        0 | 1 => Vec::new(),
        // closing the ring would duplicate the single edge
        2 => vec![Edge::new("0", "1")],
        _ => (0..n)
            .map(|i| Edge::new(i.to_string(), ((i + 1) % n).to_string()))
            .collect(),
    }
}

/// Polygon decorated with two dead-end "spike" nodes per ring node.
///
/// Spikes get ids `"<i>a"` / `"<i>b"`, sit outside the circle, and are
/// connected only to their ring node, which exercises non-cyclic
/// traversal cases.
pub fn spiked_polygon(n: usize, radius: f64) -> (Vec<Node>, Vec<Edge>) {
    let (mut nodes, mut edges) = regular_polygon(n, radius);
    let spike_radius = radius * SPIKE_RADIUS_FACTOR;
    let step = TAU / n.max(1) as f64;
    for i in 0..n {
        let angle = step * i as f64;
        for (suffix, direction) in [("a", -1.0), ("b", 1.0)] {
            let spike_angle = angle + direction * SPIKE_SPREAD * step;
            let id = format!("{i}{suffix}");
            nodes.push(Node::new(
                id.clone(),
                spike_radius * spike_angle.cos(),
                spike_radius * spike_angle.sin(),
            ));
            edges.push(Edge::new(i.to_string(), id));
        }
    }
    (nodes, edges)
}
