//! Implementation of `cyclefind cycles <file>`.
//!
//! Runs the unique-cycle aggregator over the whole graph and prints each
//! retained cycle origin first. Human mode prints one cycle per line with the
//! chosen delimiter; `--format json` prints a single object:
//!
//! ```json
//! {"cycles": [{"nodes": ["A", "B", "C"], "length": 3}], "count": 1}
//! ```
//!
//! An acyclic graph is not an error. Exit codes: 0 = success, 2 = input failure.
use std::io::Write;

use cyclefind_core::{CyclePath, find_all_unique_cycles};
use serde_json::json;
use tracing::info;

use crate::OutputFormat;
use crate::cmd::{load_graph, stdout_error};
use crate::error::CliError;

/// Runs the `cycles` command.
///
/// # Errors
///
/// Returns [`CliError`] with exit code 2 if the content cannot be parsed or
/// stdout cannot be written.
pub fn run(content: &str, delimiter: &str, format: OutputFormat) -> Result<(), CliError> {
    let graph = load_graph(content)?;
    let cycles = find_all_unique_cycles(&graph);
    info!(count = cycles.len(), "unique cycles found");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match format {
        OutputFormat::Human => print_human(&mut out, &cycles, delimiter),
        OutputFormat::Json => print_json(&mut out, &cycles),
    }
    .map_err(|e| stdout_error(&e))
}

fn print_human<W: Write>(w: &mut W, cycles: &[CyclePath], delimiter: &str) -> std::io::Result<()> {
    for cycle in cycles {
        writeln!(w, "{}", cycle.render(delimiter))?;
    }
    Ok(())
}

fn print_json<W: Write>(w: &mut W, cycles: &[CyclePath]) -> std::io::Result<()> {
    let value = json!({
        "cycles": cycles,
        "count": cycles.len(),
    });
    let json = serde_json::to_string_pretty(&value).map_err(std::io::Error::other)?;
    writeln!(w, "{json}")
}
