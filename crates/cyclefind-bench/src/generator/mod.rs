//! Random adjacency graph generator.
//!
//! Produces [`Graph`] instances made of independent clusters of densely
//! connected nodes, with self-loops and dangling references mixed in.
//! Clusters never link to each other, so the work of a single search stays
//! bounded by the cluster size while the aggregator still scales with the
//! total node count.

pub mod topology;

use cyclefind_core::Graph;
use rand::SeedableRng;
use rand::rngs::StdRng;

use topology::build_clustered_graph;

/// Configuration for the graph generator.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Seed for the random number generator (deterministic).
    pub seed: u64,
    /// Number of independent clusters.
    pub num_clusters: usize,
    /// Nodes per cluster.
    pub cluster_size: usize,
    /// Maximum successors drawn for each node (0..=max).
    pub max_out_degree: usize,
    /// Probability that a node lists itself as a successor (0.0-1.0).
    pub self_loop_rate: f64,
    /// Probability that a node lists an identifier that is never a key (0.0-1.0).
    pub dangling_rate: f64,
    /// Whether keys are inserted in shuffled rather than cluster order.
    pub shuffle_keys: bool,
}

/// Predefined size tiers for benchmarking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeTier {
    /// ~50 nodes
    Small,
    /// ~800 nodes
    Medium,
    /// ~4000 nodes
    Large,
    /// ~16000 nodes
    XLarge,
}

impl SizeTier {
    /// All tiers, smallest first.
    pub const ALL: [SizeTier; 4] = [
        SizeTier::Small,
        SizeTier::Medium,
        SizeTier::Large,
        SizeTier::XLarge,
    ];

    /// Lower-case tier name, used for fixture file names.
    pub fn name(self) -> &'static str {
        match self {
            SizeTier::Small => "small",
            SizeTier::Medium => "medium",
            SizeTier::Large => "large",
            SizeTier::XLarge => "xlarge",
        }
    }

    /// Parses a tier name as returned by [`SizeTier::name`].
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.name() == name)
    }

    /// Returns the default `GeneratorConfig` for this size tier.
    pub fn config(self, seed: u64) -> GeneratorConfig {
        match self {
            SizeTier::Small => GeneratorConfig {
                seed,
                num_clusters: 8,
                cluster_size: 6,
                max_out_degree: 2,
                self_loop_rate: 0.05,
                dangling_rate: 0.1,
                shuffle_keys: false,
            },
            SizeTier::Medium => GeneratorConfig {
                seed,
                num_clusters: 100,
                cluster_size: 8,
                max_out_degree: 3,
                self_loop_rate: 0.05,
                dangling_rate: 0.1,
                shuffle_keys: true,
            },
            SizeTier::Large => GeneratorConfig {
                seed,
                num_clusters: 500,
                cluster_size: 8,
                max_out_degree: 3,
                self_loop_rate: 0.03,
                dangling_rate: 0.1,
                shuffle_keys: true,
            },
            SizeTier::XLarge => GeneratorConfig {
                seed,
                num_clusters: 2000,
                cluster_size: 8,
                max_out_degree: 3,
                self_loop_rate: 0.03,
                dangling_rate: 0.15,
                shuffle_keys: true,
            },
        }
    }
}

/// Generates a graph from the given configuration.
///
/// All randomness is deterministic, seeded from `config.seed`.
pub fn generate_graph(config: &GeneratorConfig) -> Graph {
    let mut rng = StdRng::seed_from_u64(config.seed);
    build_clustered_graph(config, &mut rng)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_names_round_trip() {
        for tier in SizeTier::ALL {
            assert_eq!(SizeTier::from_name(tier.name()), Some(tier));
        }
        assert_eq!(SizeTier::from_name("huge"), None);
    }
}
