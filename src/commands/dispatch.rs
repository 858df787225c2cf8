//! Command dispatch logic for netspan

use std::time::Instant;

use crate::cli::{Cli, Commands};
use crate::commands;
use netspan_core::error::Result;

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    tracing::debug!(elapsed = ?start.elapsed(), "dispatch");

    match &cli.command {
        Commands::Generate {
            nodes,
            radius,
            spikes,
            drop_edge,
            out,
        } => commands::generate::execute(cli, *nodes, *radius, *spikes, drop_edge, out.as_deref()),

        Commands::Path {
            graph,
            from,
            to,
            algo,
        } => commands::path::execute(cli, graph, from, to, *algo),

        Commands::Render {
            graph,
            out,
            from,
            to,
            algo,
        } => commands::render::execute(cli, graph, out, from.as_deref(), to.as_deref(), *algo),
    }
}
