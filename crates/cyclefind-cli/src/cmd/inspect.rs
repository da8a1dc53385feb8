//! Implementation of `cyclefind inspect <file>`.
//!
//! Prints the adjacency list of every key in document order, followed by a
//! summary of the node count, the edge count (successor entries), and the
//! number of distinct successors that are never themselves keys.
//!
//! In `--format json` mode a single JSON object is emitted to stdout with
//! `nodes`, `edges`, `dangling` and `adjacency`.
//!
//! Exit codes: 0 = success, 2 = parse failure.
use std::io::Write;

use cyclefind_core::{Graph, NodeId};
use serde::Serialize;

use crate::OutputFormat;
use crate::cmd::{load_graph, stdout_error};
use crate::error::CliError;

/// Summary counts gathered from a parsed [`Graph`].
#[derive(Debug, PartialEq, Eq)]
pub struct InspectStats {
    /// Number of keys.
    pub node_count: usize,
    /// Total successor entries across all keys.
    pub edge_count: usize,
    /// Referenced identifiers that are not keys, sorted.
    pub dangling: Vec<String>,
}

impl InspectStats {
    /// Computes statistics from a parsed [`Graph`].
    pub fn from_graph(graph: &Graph) -> Self {
        Self {
            node_count: graph.len(),
            edge_count: graph.edge_count(),
            dangling: graph
                .dangling_successors()
                .into_iter()
                .map(ToString::to_string)
                .collect(),
        }
    }
}

/// Runs the `inspect` command.
///
/// # Errors
///
/// Returns [`CliError`] with exit code 2 if the content cannot be parsed or
/// stdout cannot be written.
pub fn run(content: &str, format: OutputFormat) -> Result<(), CliError> {
    let graph = load_graph(content)?;
    let stats = InspectStats::from_graph(&graph);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match format {
        OutputFormat::Human => print_human(&mut out, &graph, &stats),
        OutputFormat::Json => print_json(&mut out, &graph, &stats),
    }
    .map_err(|e| stdout_error(&e))
}

fn print_human<W: Write>(w: &mut W, graph: &Graph, stats: &InspectStats) -> std::io::Result<()> {
    for (node, successors) in graph.iter() {
        let joined: Vec<&str> = successors.iter().map(NodeId::as_str).collect();
        if joined.is_empty() {
            writeln!(w, "{node}:")?;
        } else {
            writeln!(w, "{node}: {}", joined.join(" "))?;
        }
    }
    writeln!(
        w,
        "nodes: {}  edges: {}  dangling: {}",
        stats.node_count,
        stats.edge_count,
        stats.dangling.len()
    )
}

/// Serialized directly so `adjacency` keeps the graph's key order.
#[derive(Serialize)]
struct InspectJson<'a> {
    nodes: usize,
    edges: usize,
    dangling: &'a [String],
    adjacency: &'a Graph,
}

fn print_json<W: Write>(w: &mut W, graph: &Graph, stats: &InspectStats) -> std::io::Result<()> {
    let doc = InspectJson {
        nodes: stats.node_count,
        edges: stats.edge_count,
        dangling: &stats.dangling,
        adjacency: graph,
    };
    let json = serde_json::to_string_pretty(&doc).map_err(std::io::Error::other)?;
    writeln!(w, "{json}")
}
