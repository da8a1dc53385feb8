//! Unique-cycle aggregation across every node of a graph.
use std::collections::HashSet;

use tracing::{debug, trace};

use crate::cycles::path::{CycleKey, CyclePath};
use crate::cycles::search::find_shortest_cycle;
use crate::graph::Graph;

/// Finds the shortest cycle through each key of `graph` and returns the
/// distinct ones.
///
/// Keys are visited in insertion order. A cycle whose node set matches one
/// already collected is dropped, so when several sources share a node set the
/// first source visited decides the retained path. The result is in discovery
/// order and is identical across calls on the same graph.
pub fn find_all_unique_cycles(graph: &Graph) -> Vec<CyclePath> {
    let mut seen: HashSet<CycleKey> = HashSet::new();
    let mut cycles: Vec<CyclePath> = Vec::new();

    for source in graph.nodes() {
        let Some(cycle) = find_shortest_cycle(source, graph) else {
            trace!(node = %source, "no cycle through node");
            continue;
        };
        if seen.contains(cycle.node_set()) {
            trace!(node = %source, cycle = %cycle, "dropping node-set duplicate");
            continue;
        }
        debug!(node = %source, length = cycle.length(), cycle = %cycle, "found cycle");
        seen.insert(cycle.node_set().clone());
        cycles.push(cycle);
    }

    debug!(
        nodes = graph.len(),
        unique = cycles.len(),
        "unique cycle search finished"
    );
    cycles
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
