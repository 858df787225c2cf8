//! Generate command: polygon fixture graphs

use std::path::Path;

use crate::cli::Cli;
use netspan_core::error::{NetspanError, Result};
use netspan_core::fixture::{regular_polygon, spiked_polygon};
use netspan_core::graph::Graph;
use netspan_core::store;

/// Execute the generate command
pub fn execute(
    cli: &Cli,
    n: usize,
    radius: f64,
    spikes: bool,
    drop: &[String],
    out: Option<&Path>,
) -> Result<()> {
    let (nodes, mut edges) = if spikes {
        spiked_polygon(n, radius)
    } else {
        regular_polygon(n, radius)
    };

    for spec in drop {
        let (a, b) = parse_cut(spec)?;
        let before = edges.len();
        edges.retain(|edge| !edge.joins(&a, &b));
        if edges.len() == before {
            tracing::warn!(edge = %spec, "drop_edge matched nothing");
        }
    }

    let graph = Graph::new(nodes, edges)?;
    tracing::debug!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "fixture_built"
    );

    match out {
        Some(path) => {
            store::save_graph(path, &graph)?;
            if !cli.quiet {
                println!(
                    "wrote {} ({} nodes, {} edges)",
                    path.display(),
                    graph.node_count(),
                    graph.edge_count()
                );
            }
        }
        None => store::write_graph(std::io::stdout().lock(), &graph)?,
    }

    Ok(())
}

fn parse_cut(spec: &str) -> Result<(String, String)> {
    match spec.split_once(':') {
        Some((a, b)) if !a.is_empty() && !b.is_empty() => Ok((a.to_string(), b.to_string())),
        _ => Err(NetspanError::invalid_value("--drop-edge (expected A:B)", spec)),
    }
}
