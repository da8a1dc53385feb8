#![deny(clippy::print_stdout, clippy::print_stderr)]

pub mod cycles;
pub mod graph;
pub mod newtypes;

pub use cycles::{CycleKey, CyclePath, find_all_unique_cycles, find_shortest_cycle};
pub use graph::{Graph, GraphError, parse_graph};
pub use newtypes::NodeId;

/// Returns the version of the cyclefind-core library.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use super::*;

    #[test]
    fn version_is_semver() {
        let v = version();
        let parts: Vec<&str> = v.split('.').collect();
        assert_eq!(parts.len(), 3, "version should have 3 parts: {v}");
        for part in parts {
            part.parse::<u32>().expect("each part should be a number");
        }
    }
}
