//! Graph file loading and saving
//!
//! Graphs persist as a JSON document: `{ "nodes": [...], "edges": [...] }`.
//! Loading runs full construction validation, so a file with edges
//! referencing unknown node ids fails before any query is attempted.

use std::fs;
use std::io::Write;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{NetspanError, Result};
use crate::graph::{Edge, Graph, Node};

/// On-disk graph document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphDoc {
    pub nodes: Vec<Node>,
    #[serde(default)]
    pub edges: Vec<Edge>,
}

impl GraphDoc {
    /// Snapshot a graph, nodes sorted by id for stable output
    pub fn from_graph(graph: &Graph) -> GraphDoc {
        let mut nodes: Vec<Node> = graph.nodes().cloned().collect();
        nodes.sort_by(|a, b| a.id.cmp(&b.id));
        GraphDoc {
            nodes,
            edges: graph.edges().to_vec(),
        }
    }

    /// Validate the document into a Graph
    pub fn into_graph(self) -> Result<Graph> {
        Graph::new(self.nodes, self.edges)
    }
}

/// Load and validate a graph file
#[tracing::instrument]
pub fn load_graph(path: &Path) -> Result<Graph> {
    let data = fs::read_to_string(path).map_err(|err| {
        if err.kind() == std::io::ErrorKind::NotFound {
            NetspanError::GraphNotFound {
                path: path.to_path_buf(),
            }
        } else {
            NetspanError::Io(err)
        }
    })?;
    let doc: GraphDoc = serde_json::from_str(&data)?;
    doc.into_graph()
}

pub fn save_graph(path: &Path, graph: &Graph) -> Result<()> {
    let file = fs::File::create(path)?;
    write_graph(file, graph)
}

/// Serialize a graph as pretty JSON with a trailing newline
pub fn write_graph(mut writer: impl Write, graph: &Graph) -> Result<()> {
    let doc = GraphDoc::from_graph(graph);
    serde_json::to_writer_pretty(&mut writer, &doc)?;
    writer.write_all(b"\n")?;
    Ok(())
}
