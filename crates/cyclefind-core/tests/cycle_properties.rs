//! Property-based tests for the cycle search and aggregation.
//!
//! Graphs are drawn from `proptest` as small adjacency lists over `n0..n9`,
//! where only the first few identifiers are keys so that some successors are
//! dangling. Results are checked against a breadth-first oracle, which finds
//! the shortest return distance to a node independently of the DFS.
#![allow(clippy::expect_used)]

use std::collections::{HashMap, HashSet, VecDeque};

use cyclefind_core::{Graph, NodeId, find_all_unique_cycles, find_shortest_cycle};
use proptest::prelude::*;

fn name(i: usize) -> String {
    format!("n{i}")
}

/// Builds a graph whose key `i` is `n{i}`, in index order.
fn build(adjacency: &[Vec<usize>]) -> Graph {
    adjacency
        .iter()
        .enumerate()
        .map(|(i, succ)| (name(i), succ.iter().map(|&j| name(j))))
        .collect()
}

fn arb_adjacency() -> impl Strategy<Value = Vec<Vec<usize>>> {
    prop::collection::vec(prop::collection::vec(0usize..10, 0..4), 1..8)
}

/// Shortest number of edges on a walk from `source` back to `source`.
fn bfs_return_edges(graph: &Graph, source: &str) -> Option<usize> {
    let mut dist: HashMap<&str, usize> = HashMap::new();
    let mut queue: VecDeque<&str> = VecDeque::new();
    dist.insert(source, 0);
    queue.push_back(source);

    let mut best: Option<usize> = None;
    while let Some(node) = queue.pop_front() {
        let d = dist[node];
        for succ in graph.successors(node).unwrap_or(&[]) {
            if succ == source {
                best = Some(best.map_or(d + 1, |b| b.min(d + 1)));
            } else if !dist.contains_key(succ.as_str()) {
                dist.insert(succ.as_str(), d + 1);
                queue.push_back(succ.as_str());
            }
        }
    }
    best
}

proptest! {
    #[test]
    fn shortest_cycle_matches_bfs_oracle(adjacency in arb_adjacency()) {
        let graph = build(&adjacency);
        for source in graph.nodes() {
            let found = find_shortest_cycle(source, &graph);
            let expected = bfs_return_edges(&graph, source);
            prop_assert_eq!(found.as_ref().map(|c| c.edge_count()), expected);
        }
    }

    #[test]
    fn cycles_are_simple_closed_walks(adjacency in arb_adjacency()) {
        let graph = build(&adjacency);
        for source in graph.nodes() {
            let Some(cycle) = find_shortest_cycle(source, &graph) else { continue };
            prop_assert_eq!(cycle.origin(), source);
            prop_assert!(cycle.length() >= 2);

            for (from, to) in cycle.edges() {
                let succ = graph.successors(from).expect("edge source is a key");
                prop_assert!(succ.contains(to), "{} -> {} is not an edge", from, to);
            }

            if !cycle.is_self_loop() {
                let distinct: HashSet<&NodeId> = cycle.nodes().iter().collect();
                prop_assert_eq!(distinct.len(), cycle.length());
            }
        }
    }

    #[test]
    fn aggregation_is_idempotent(adjacency in arb_adjacency()) {
        let graph = build(&adjacency);
        let first: Vec<String> = find_all_unique_cycles(&graph).iter().map(ToString::to_string).collect();
        let second: Vec<String> = find_all_unique_cycles(&graph).iter().map(ToString::to_string).collect();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn aggregation_keeps_one_cycle_per_node_set(adjacency in arb_adjacency()) {
        let graph = build(&adjacency);
        let cycles = find_all_unique_cycles(&graph);

        let sets: HashSet<_> = cycles.iter().map(|c| c.node_set().clone()).collect();
        prop_assert_eq!(sets.len(), cycles.len());

        // Every node with a cycle is represented by a set-equal result.
        for source in graph.nodes() {
            if let Some(own) = find_shortest_cycle(source, &graph) {
                prop_assert!(sets.contains(own.node_set()));
            }
        }
    }

    #[test]
    fn aggregation_follows_key_order(adjacency in arb_adjacency()) {
        let graph = build(&adjacency);
        let position: HashMap<&str, usize> = graph
            .nodes()
            .enumerate()
            .map(|(i, n)| (n.as_str(), i))
            .collect();
        let origins: Vec<usize> = find_all_unique_cycles(&graph)
            .iter()
            .map(|c| position[c.origin().as_str()])
            .collect();
        prop_assert!(origins.windows(2).all(|w| w[0] < w[1]));
    }
}
