//! Render command: graph to PNG, optionally highlighting a route

use std::path::Path;

use crate::cli::{Cli, OutputFormat};
use crate::commands::path::missing_endpoint;
use netspan_core::config::Config;
use netspan_core::error::{NetspanError, Result};
use netspan_core::graph::{Algorithm, PathResult};
use netspan_core::render::{render_graph, write_png};
use netspan_core::store;

/// Execute the render command
pub fn execute(
    cli: &Cli,
    graph_path: &Path,
    out: &Path,
    from: Option<&str>,
    to: Option<&str>,
    algo: Algorithm,
) -> Result<()> {
    let graph = store::load_graph(graph_path)?;
    let config = Config::load(cli.config.as_deref())?;

    let route = match (from, to) {
        (Some(from), Some(to)) => match algo.execute(&graph, from, to) {
            PathResult::Found { route, .. } => Some(route),
            PathResult::NotFound => {
                return Err(NetspanError::NoRoute {
                    from: from.to_string(),
                    to: to.to_string(),
                })
            }
            PathResult::InvalidEndpoints => return Err(missing_endpoint(&graph, from, to)),
            PathResult::InternalError { reason } => return Err(NetspanError::Engine(reason)),
        },
        _ => None,
    };

    let canvas = render_graph(&graph, route.as_deref(), &config.render)?;
    write_png(out, &canvas)?;
    tracing::debug!(
        out = %out.display(),
        width = canvas.width(),
        height = canvas.height(),
        "png_written"
    );

    match cli.format {
        OutputFormat::Json => println!(
            "{}",
            serde_json::json!({
                "out": out.display().to_string(),
                "width": canvas.width(),
                "height": canvas.height(),
                "route": route,
            })
        ),
        OutputFormat::Human if !cli.quiet => println!(
            "wrote {} ({}x{})",
            out.display(),
            canvas.width(),
            canvas.height()
        ),
        OutputFormat::Human => {}
    }

    Ok(())
}
