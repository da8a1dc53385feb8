//! Cluster topology: random successor lists inside each cluster, with
//! optional self-loops, dangling references, and key shuffling.

use cyclefind_core::{Graph, NodeId};
use rand::Rng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use super::GeneratorConfig;

/// Identifier of node `index` in cluster `cluster`.
pub fn node_id(cluster: usize, index: usize) -> String {
    format!("c{cluster}n{index}")
}

/// Builds a graph of `config.num_clusters` disconnected clusters.
pub fn build_clustered_graph(config: &GeneratorConfig, rng: &mut StdRng) -> Graph {
    let total = config.num_clusters * config.cluster_size;
    let mut entries: Vec<(NodeId, Vec<NodeId>)> = Vec::with_capacity(total);
    let mut dangling_counter: usize = 0;

    for cluster in 0..config.num_clusters {
        for index in 0..config.cluster_size {
            let successors =
                build_successors(config, rng, cluster, index, &mut dangling_counter);
            entries.push((NodeId::from(node_id(cluster, index)), successors));
        }
    }

    if config.shuffle_keys {
        entries.shuffle(rng);
    }

    let mut graph = Graph::with_capacity(total);
    for (node, successors) in entries {
        graph.insert(node, successors);
    }
    graph
}

fn build_successors(
    config: &GeneratorConfig,
    rng: &mut StdRng,
    cluster: usize,
    index: usize,
    dangling_counter: &mut usize,
) -> Vec<NodeId> {
    let mut successors = Vec::new();

    if config.cluster_size > 1 {
        let degree = rng.gen_range(0..=config.max_out_degree);
        for _ in 0..degree {
            let mut target = rng.gen_range(0..config.cluster_size - 1);
            if target >= index {
                target += 1;
            }
            successors.push(NodeId::from(node_id(cluster, target)));
        }
    }

    if rng.gen_bool(config.self_loop_rate) {
        let at = rng.gen_range(0..=successors.len());
        successors.insert(at, NodeId::from(node_id(cluster, index)));
    }

    if rng.gen_bool(config.dangling_rate) {
        successors.push(NodeId::from(format!("ext{dangling_counter}")));
        *dangling_counter += 1;
    }

    successors
}
