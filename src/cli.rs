//! CLI argument parsing for netspan
//!
//! Uses clap for argument parsing. Global flags: --format, --config,
//! --quiet, --verbose, --log-level, --log-json

use std::path::PathBuf;
use std::str::FromStr;

use clap::{Parser, Subcommand};

pub use netspan_core::format::OutputFormat;
use netspan_core::graph::Algorithm;

/// Netspan - shortest paths over Euclidean node/edge graphs
#[derive(Parser, Debug)]
#[command(name = "netspan")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, default_value = "human", value_parser = parse_format)]
    pub format: OutputFormat,

    /// TOML config file for rendering options
    #[arg(long, global = true, env = "NETSPAN_CONFIG")]
    pub config: Option<PathBuf>,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Verbose logging (debug level)
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Explicit log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a regular-polygon fixture graph as JSON
    Generate {
        /// Number of polygon nodes
        #[arg(long, short, default_value_t = 10)]
        nodes: usize,

        /// Circle radius for node placement
        #[arg(long, short, default_value_t = 100.0)]
        radius: f64,

        /// Attach two dead-end spike nodes per polygon node
        #[arg(long)]
        spikes: bool,

        /// Remove an edge by its endpoints (repeatable)
        #[arg(long, value_name = "A:B")]
        drop_edge: Vec<String>,

        /// Write to a file instead of stdout
        #[arg(long, short)]
        out: Option<PathBuf>,
    },

    /// Compute the shortest route between two nodes of a graph file
    Path {
        /// Graph file (JSON)
        graph: PathBuf,

        /// Source node id
        from: String,

        /// Target node id
        to: String,

        /// Engine to use
        #[arg(long, default_value = "iterative", value_parser = parse_algorithm)]
        algo: Algorithm,
    },

    /// Render a graph, and optionally a route, to a PNG image
    Render {
        /// Graph file (JSON)
        graph: PathBuf,

        /// Output PNG path
        #[arg(long, short)]
        out: PathBuf,

        /// Highlight the shortest route from this node
        #[arg(long, requires = "to")]
        from: Option<String>,

        /// Highlight the shortest route to this node
        #[arg(long, requires = "from")]
        to: Option<String>,

        /// Engine to use for the highlighted route
        #[arg(long, default_value = "iterative", value_parser = parse_algorithm)]
        algo: Algorithm,
    },
}

fn parse_format(s: &str) -> Result<OutputFormat, String> {
    OutputFormat::from_str(s).map_err(|e| e.to_string())
}

fn parse_algorithm(s: &str) -> Result<Algorithm, String> {
    Algorithm::from_str(s).map_err(|e| e.to_string())
}
