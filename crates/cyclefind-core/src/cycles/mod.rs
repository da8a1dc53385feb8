//! Cycle search over a [`Graph`](crate::graph::Graph).
//!
//! - [`find_shortest_cycle`] finds the shortest cycle through one node.
//! - [`find_all_unique_cycles`] runs that search for every node and keeps one
//!   cycle per distinct node set.
pub mod path;
pub mod search;
pub mod unique;

pub use path::{CycleKey, CyclePath};
pub use search::find_shortest_cycle;
pub use unique::find_all_unique_cycles;
