//! Implementation of `cyclefind shortest <file> <node>`.
//!
//! Prints the shortest cycle that leaves NODE and returns to it. Human mode
//! prints the cycle on one line, origin first; `--format json` prints
//! `{"node": ..., "cycle": {"nodes": [...], "length": n}}`.
//!
//! Exit codes: 0 = cycle found, 1 = NODE is not a key or has no cycle,
//! 2 = input failure.
use std::io::Write;

use cyclefind_core::{CyclePath, find_shortest_cycle};
use serde_json::json;

use crate::OutputFormat;
use crate::cmd::{load_graph, stdout_error};
use crate::error::CliError;

/// Runs the `shortest` command.
///
/// # Errors
///
/// Returns [`CliError::NodeNotFound`] or [`CliError::NoResults`] (exit code 1)
/// when there is nothing to print, and exit-code-2 errors for parse or write
/// failures.
pub fn run(
    content: &str,
    node: &str,
    delimiter: &str,
    format: OutputFormat,
) -> Result<(), CliError> {
    let graph = load_graph(content)?;
    if !graph.contains_node(node) {
        return Err(CliError::NodeNotFound {
            node_id: node.to_owned(),
        });
    }

    let cycle = find_shortest_cycle(node, &graph).ok_or_else(|| CliError::NoResults {
        detail: format!("no cycle returns to {node:?}"),
    })?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match format {
        OutputFormat::Human => writeln!(out, "{}", cycle.render(delimiter)),
        OutputFormat::Json => print_json(&mut out, node, &cycle),
    }
    .map_err(|e| stdout_error(&e))
}

fn print_json<W: Write>(w: &mut W, node: &str, cycle: &CyclePath) -> std::io::Result<()> {
    let value = json!({
        "node": node,
        "cycle": cycle,
    });
    let json = serde_json::to_string_pretty(&value).map_err(std::io::Error::other)?;
    writeln!(w, "{json}")
}
