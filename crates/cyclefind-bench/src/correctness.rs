//! Invariant checkers for cycle search results.
//!
//! [`CycleOracle`] computes shortest return distances with `petgraph`'s
//! Dijkstra over unit weights, independently of the backtracking search in
//! `cyclefind-core`. The `check_*` functions return a description of the
//! first violated invariant.

use std::collections::{HashMap, HashSet};

use cyclefind_core::{CycleKey, CyclePath, Graph, find_shortest_cycle};
use petgraph::Direction;
use petgraph::algo::dijkstra;
use petgraph::graph::{DiGraph, NodeIndex};

/// A `petgraph` copy of a [`Graph`] used as a shortest-cycle oracle.
///
/// Dangling successors become nodes without outgoing edges.
pub struct CycleOracle {
    graph: DiGraph<String, ()>,
    index: HashMap<String, NodeIndex>,
}

impl CycleOracle {
    /// Builds the oracle graph.
    pub fn new(graph: &Graph) -> Self {
        let mut pg: DiGraph<String, ()> = DiGraph::with_capacity(graph.len(), graph.edge_count());
        let mut index: HashMap<String, NodeIndex> = HashMap::with_capacity(graph.len());

        let mut intern = |pg: &mut DiGraph<String, ()>, id: &str| -> NodeIndex {
            *index
                .entry(id.to_owned())
                .or_insert_with(|| pg.add_node(id.to_owned()))
        };

        for (node, successors) in graph.iter() {
            let from = intern(&mut pg, node);
            for succ in successors {
                let to = intern(&mut pg, succ);
                pg.add_edge(from, to, ());
            }
        }

        Self { graph: pg, index }
    }

    /// Number of edges on the shortest closed walk through `source`, or
    /// `None` if no walk returns to it.
    ///
    /// The shortest such walk never repeats a node, so this equals the
    /// `edge_count` of the shortest simple cycle.
    pub fn cycle_edges(&self, source: &str) -> Option<usize> {
        let start = *self.index.get(source)?;
        let dist = dijkstra(&self.graph, start, None, |_| 1usize);
        self.graph
            .neighbors_directed(start, Direction::Incoming)
            .filter_map(|pred| dist.get(&pred).map(|d| d + 1))
            .min()
    }
}

/// Verifies that `cycle` is a closed walk of real edges in `graph` that
/// starts at `source` and repeats no node other than a self-loop's origin.
pub fn check_cycle_shape(graph: &Graph, source: &str, cycle: &CyclePath) -> Result<(), String> {
    if cycle.origin() != source {
        return Err(format!(
            "cycle {cycle} does not start at source {source:?}"
        ));
    }
    if cycle.length() < 2 {
        return Err(format!("cycle {cycle} has fewer than two entries"));
    }

    for (from, to) in cycle.edges() {
        let successors = graph
            .successors(from)
            .ok_or_else(|| format!("cycle {cycle} passes through non-key {from}"))?;
        if !successors.contains(to) {
            return Err(format!("cycle {cycle} uses missing edge {from} -> {to}"));
        }
    }

    if !cycle.is_self_loop() {
        let unique: HashSet<_> = cycle.nodes().iter().collect();
        if unique.len() != cycle.length() {
            return Err(format!("cycle {cycle} repeats a node"));
        }
    }
    Ok(())
}

/// Verifies the single-source search for every key against the oracle.
pub fn check_shortest_cycles(graph: &Graph, oracle: &CycleOracle) -> Result<(), String> {
    for source in graph.nodes() {
        let found = find_shortest_cycle(source, graph);
        let expected = oracle.cycle_edges(source);
        match (&found, expected) {
            (None, None) => {}
            (Some(cycle), Some(edges)) => {
                check_cycle_shape(graph, source, cycle)?;
                if cycle.edge_count() != edges {
                    return Err(format!(
                        "{source}: found {} edges ({cycle}), oracle says {edges}",
                        cycle.edge_count()
                    ));
                }
            }
            (Some(cycle), None) => {
                return Err(format!("{source}: found {cycle} but oracle has no cycle"));
            }
            (None, Some(edges)) => {
                return Err(format!("{source}: no cycle found, oracle says {edges} edges"));
            }
        }
    }
    Ok(())
}

/// Verifies the aggregator output:
/// - no two results share a node set
/// - results appear in key order of their origins
/// - every key that has a cycle is represented by a set-equal result
pub fn check_unique_cycles(graph: &Graph, cycles: &[CyclePath]) -> Result<(), String> {
    let mut sets: HashSet<&CycleKey> = HashSet::with_capacity(cycles.len());
    for cycle in cycles {
        if !sets.insert(cycle.node_set()) {
            return Err(format!("node set of {cycle} is reported twice"));
        }
    }

    let position: HashMap<&str, usize> = graph
        .nodes()
        .enumerate()
        .map(|(i, n)| (n.as_str(), i))
        .collect();
    let mut last: Option<usize> = None;
    for cycle in cycles {
        let pos = *position
            .get(cycle.origin().as_str())
            .ok_or_else(|| format!("origin of {cycle} is not a key"))?;
        if last.is_some_and(|prev| prev >= pos) {
            return Err(format!("{cycle} is out of key order"));
        }
        last = Some(pos);
    }

    for source in graph.nodes() {
        if let Some(own) = find_shortest_cycle(source, graph) {
            if !sets.contains(own.node_set()) {
                return Err(format!("{source}: cycle {own} has no set-equal result"));
            }
        }
    }
    Ok(())
}
