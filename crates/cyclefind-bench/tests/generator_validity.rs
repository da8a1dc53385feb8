//! Tests that the generator is deterministic and produces well-formed graphs
//! across size tiers and seeds.
#![allow(clippy::expect_used)]

use std::collections::HashSet;

use cyclefind_bench::generator::topology::node_id;
use cyclefind_bench::{SizeTier, generate_graph};
use cyclefind_core::{Graph, parse_graph};
use proptest::prelude::*;

fn assert_well_formed(graph: &Graph, tier: SizeTier, label: &str) {
    let config = tier.config(0);
    assert_eq!(
        graph.len(),
        config.num_clusters * config.cluster_size,
        "{label}: key count"
    );
    for (node, successors) in graph.iter() {
        let cluster = node
            .strip_prefix('c')
            .and_then(|rest| rest.split('n').next())
            .expect("generated key shape");
        for succ in successors {
            let same_cluster = succ.starts_with(&format!("c{cluster}n"));
            assert!(
                same_cluster || succ.starts_with("ext"),
                "{label}: {node} -> {succ} leaves its cluster"
            );
        }
    }
}

#[test]
fn generated_tiers_are_well_formed() {
    for tier in SizeTier::ALL {
        for seed in [42, 123, 999] {
            let graph = generate_graph(&tier.config(seed));
            assert_well_formed(&graph, tier, &format!("{}/seed={seed}", tier.name()));
        }
    }
}

#[test]
fn same_seed_same_graph() {
    let a = generate_graph(&SizeTier::Medium.config(7));
    let b = generate_graph(&SizeTier::Medium.config(7));
    assert_eq!(a, b);
    let order_a: Vec<_> = a.nodes().collect();
    let order_b: Vec<_> = b.nodes().collect();
    assert_eq!(order_a, order_b, "key order is part of the output");
}

#[test]
fn different_seeds_differ() {
    let a = generate_graph(&SizeTier::Medium.config(1));
    let b = generate_graph(&SizeTier::Medium.config(2));
    assert_ne!(a, b);
}

#[test]
fn unshuffled_tier_keeps_cluster_order() {
    let graph = generate_graph(&SizeTier::Small.config(42));
    let first: Vec<String> = graph.nodes().take(3).map(ToString::to_string).collect();
    assert_eq!(first, vec![node_id(0, 0), node_id(0, 1), node_id(0, 2)]);
}

#[test]
fn dangling_references_use_external_ids() {
    let graph = generate_graph(&SizeTier::Large.config(42));
    let dangling = graph.dangling_successors();
    assert!(!dangling.is_empty(), "large tier should contain dangling references");
    assert!(dangling.iter().all(|d| d.starts_with("ext")));
}

#[test]
fn json_round_trip_preserves_order() {
    let graph = generate_graph(&SizeTier::Medium.config(42));
    let json = serde_json::to_string(&graph).expect("serializes");
    let back = parse_graph(&json).expect("parses");
    let keys: HashSet<_> = back.nodes().collect();
    assert_eq!(keys.len(), graph.len());
    assert!(back.nodes().eq(graph.nodes()));
}

proptest! {
    #[test]
    fn successors_stay_inside_cluster(seed in any::<u64>()) {
        let graph = generate_graph(&SizeTier::Small.config(seed));
        for (node, successors) in graph.iter() {
            let prefix = &node[..node.find('n').expect("key has cluster prefix") + 1];
            for succ in successors {
                prop_assert!(succ.starts_with(prefix) || succ.starts_with("ext"));
            }
        }
    }
}
