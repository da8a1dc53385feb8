//! Random graph generator and benchmark utilities for cyclefind.
//!
//! This crate provides deterministic generation of adjacency graphs for
//! benchmarking and invariant testing of `cyclefind-core`, plus an
//! independent shortest-cycle oracle built on `petgraph`.

use std::path::PathBuf;

use cyclefind_core::Graph;

pub mod correctness;
pub mod generator;

pub use generator::{GeneratorConfig, SizeTier, generate_graph};

/// Returns the path where the JSON fixture for `tier` is stored on disk.
///
/// Files live under `target/bench-fixtures/` so they are gitignored and
/// shared between the `gen-graph` binary and anything that wants to feed
/// them to the CLI.
pub fn fixture_path(tier: SizeTier) -> PathBuf {
    fixtures_dir().join(format!("{}.json", tier.name()))
}

fn fixtures_dir() -> PathBuf {
    let manifest = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    manifest
        .join("..")
        .join("..")
        .join("target")
        .join("bench-fixtures")
}

/// A single directed ring `r0 -> r1 -> ... -> r{len-1} -> r0`.
///
/// The only cycle has `len` edges, so a search from any node walks the whole
/// ring before it returns.
pub fn ring_graph(len: usize) -> Graph {
    (0..len)
        .map(|i| (format!("r{i}"), [format!("r{}", (i + 1) % len)]))
        .collect()
}
