//! Writes generated benchmark graphs to disk as JSON fixtures.
//!
//! Usage: `gen-graph [TIER ...]` where each TIER is `small`, `medium`,
//! `large` or `xlarge` (default: every tier). Files land in
//! `target/bench-fixtures/<tier>.json` and can be fed straight to the
//! `cyclefind` binary.

use std::error::Error;
use std::fs;
use std::io::BufWriter;

use cyclefind_bench::{SizeTier, fixture_path, generate_graph};

fn main() -> Result<(), Box<dyn Error>> {
    let names: Vec<String> = std::env::args().skip(1).collect();
    let tiers: Vec<SizeTier> = if names.is_empty() {
        SizeTier::ALL.to_vec()
    } else {
        names
            .iter()
            .map(|n| SizeTier::from_name(n).ok_or_else(|| format!("unknown tier: {n}")))
            .collect::<Result<_, _>>()?
    };

    for tier in tiers {
        let path = fixture_path(tier);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let graph = generate_graph(&tier.config(42));
        eprintln!(
            "Generated {} tier: {} nodes, {} edges, {} dangling",
            tier.name(),
            graph.len(),
            graph.edge_count(),
            graph.dangling_successors().len()
        );

        let out = fs::File::create(&path)?;
        serde_json::to_writer(BufWriter::new(out), &graph)?;

        let meta = fs::metadata(&path)?;
        eprintln!(
            "Wrote {} ({:.1} KB)",
            path.display(),
            meta.len() as f64 / 1024.0
        );
    }

    Ok(())
}
