//! Command module for the `cyclefind` CLI.
//!
//! Each submodule implements one subcommand. The `run` function in each
//! module takes the already-read input text and the parsed arguments, and
//! returns `Ok(())` on success or a [`crate::error::CliError`] on failure.
pub mod cycles;
pub mod inspect;
pub mod shortest;

use cyclefind_core::{Graph, GraphError, parse_graph};
use tracing::debug;

use crate::error::CliError;

/// Parses `content` as a JSON adjacency graph.
///
/// # Errors
///
/// Returns [`CliError::ParseFailed`] (exit code 2) if the content is not a
/// JSON object of string arrays.
pub fn load_graph(content: &str) -> Result<Graph, CliError> {
    let graph = parse_graph(content).map_err(|e| match e {
        GraphError::Parse {
            line,
            column,
            message,
        } => CliError::ParseFailed {
            detail: format!("line {line}, column {column}: {message}"),
        },
    })?;
    debug!(
        nodes = graph.len(),
        edges = graph.edge_count(),
        "loaded graph"
    );
    Ok(graph)
}

/// Maps a write failure on stdout to a [`CliError`].
pub(crate) fn stdout_error(e: &std::io::Error) -> CliError {
    CliError::IoError {
        source: "stdout".to_owned(),
        detail: e.to_string(),
    }
}
