//! Path command: shortest route between two nodes of a graph file

use std::path::Path;
use std::time::Instant;

use crate::cli::{Cli, OutputFormat};
use netspan_core::error::{NetspanError, Result};
use netspan_core::graph::{Algorithm, Graph, PathResult};
use netspan_core::store;

/// Execute the path command
pub fn execute(cli: &Cli, graph_path: &Path, from: &str, to: &str, algo: Algorithm) -> Result<()> {
    let start = Instant::now();

    let graph = store::load_graph(graph_path)?;
    tracing::debug!(
        elapsed = ?start.elapsed(),
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "load_graph"
    );

    let result = algo.execute(&graph, from, to);
    match result {
        PathResult::Found {
            ref route,
            distance,
        } => {
            match cli.format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result)?),
                OutputFormat::Human => {
                    println!("{}", route.join(" -> "));
                    if !cli.quiet {
                        println!("distance: {distance:.3}");
                        println!("hops: {}", route.len() - 1);
                    }
                }
            }
            Ok(())
        }
        PathResult::NotFound => Err(NetspanError::NoRoute {
            from: from.to_string(),
            to: to.to_string(),
        }),
        PathResult::InvalidEndpoints => Err(missing_endpoint(&graph, from, to)),
        PathResult::InternalError { reason } => Err(NetspanError::Engine(reason)),
    }
}

/// Name the endpoint that is actually absent
pub fn missing_endpoint(graph: &Graph, from: &str, to: &str) -> NetspanError {
    let id = if !graph.contains(from) { from } else { to };
    NetspanError::NodeNotFound { id: id.to_string() }
}
