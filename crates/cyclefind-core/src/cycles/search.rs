//! Shortest-cycle search for a single source node.
//!
//! The search is a depth-first backtracking walk that never revisits a node
//! already on the current path. It runs on an explicit frame stack rather
//! than the call stack, so path depth is bounded by heap memory only.
//!
//! # Algorithm
//!
//! Each frame holds a node, its successor list, the index of the next
//! successor to try, and the shortest partial cycle returned by any child so
//! far. When a frame's node is probed:
//!
//! 1. if the node already has an open frame deeper in the stack, the branch
//!    yields nothing (the path would repeat a node);
//! 2. if the node is not a key of the graph, it is a dead end;
//! 3. if the source is among its successors, the branch yields the two-entry
//!    partial `node -> source` immediately;
//! 4. otherwise a frame is opened and its successors are tried in listed order.
//!
//! Every settled child result is offered to the frame that tried the child.
//! The frame prepends its own node and keeps the candidate only if it is
//! strictly shorter than its current best, so ties go to the earliest
//! successor. When a frame runs out of successors it closes and offers its
//! best to its parent in turn. The source frame does not prepend itself: the
//! source already terminates every partial.
use std::collections::HashSet;

use crate::cycles::path::CyclePath;
use crate::graph::Graph;
use crate::newtypes::NodeId;

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Returns the shortest cycle that leaves `source` and returns to it, or
/// `None` if no such cycle exists.
///
/// A `source` that is not a key of `graph` has no successors and therefore
/// no cycle.
pub fn find_shortest_cycle(source: &str, graph: &Graph) -> Option<CyclePath> {
    let mut on_path: HashSet<&str> = HashSet::new();

    let root_successors = match probe(graph, source, source, &on_path) {
        Probe::Resolved(found) => return found.map(Partial::finish),
        Probe::Expand(successors) => successors,
    };

    on_path.insert(source);
    let mut stack: Vec<Frame<'_>> = vec![Frame::new(source, root_successors)];

    while let Some(frame) = stack.last_mut() {
        let successors = frame.successors;

        if let Some(child) = successors.get(frame.next) {
            frame.next += 1;
            match probe(graph, child, source, &on_path) {
                Probe::Resolved(found) => {
                    let is_root = stack.len() == 1;
                    if let Some(frame) = stack.last_mut() {
                        frame.offer(found, is_root);
                    }
                }
                Probe::Expand(grandchildren) => {
                    on_path.insert(child.as_str());
                    stack.push(Frame::new(child, grandchildren));
                }
            }
            continue;
        }

        // Successors exhausted: close the frame and hand its best to the parent.
        let Some(done) = stack.pop() else { break };
        on_path.remove(done.node);

        let is_root = stack.len() == 1;
        match stack.last_mut() {
            Some(parent) => parent.offer(done.best, is_root),
            None => return done.best.map(Partial::finish),
        }
    }

    None
}

// ---------------------------------------------------------------------------
// Internal: probing and frames
// ---------------------------------------------------------------------------

/// Outcome of visiting a node before a frame is opened for it.
enum Probe<'g> {
    /// The branch is settled without descending.
    Resolved(Option<Partial<'g>>),
    /// The node must be expanded over these successors.
    Expand(&'g [NodeId]),
}

/// Applies the revisit guard, dead-end check and direct-hit check to `node`.
///
/// `on_path` holds the nodes of all open frames, which are exactly the nodes
/// visited strictly before `node` on the current path.
fn probe<'g>(
    graph: &'g Graph,
    node: &'g str,
    target: &'g str,
    on_path: &HashSet<&str>,
) -> Probe<'g> {
    if on_path.contains(node) {
        return Probe::Resolved(None);
    }
    let Some(successors) = graph.successors(node) else {
        return Probe::Resolved(None);
    };
    if successors.iter().any(|succ| succ == target) {
        return Probe::Resolved(Some(Partial::direct(node, target)));
    }
    Probe::Expand(successors)
}

/// One level of the explicit DFS stack.
struct Frame<'g> {
    node: &'g str,
    successors: &'g [NodeId],
    next: usize,
    best: Option<Partial<'g>>,
}

impl<'g> Frame<'g> {
    fn new(node: &'g str, successors: &'g [NodeId]) -> Self {
        Self {
            node,
            successors,
            next: 0,
            best: None,
        }
    }

    /// Folds a child's result into this frame.
    fn offer(&mut self, found: Option<Partial<'g>>, is_root: bool) {
        let Some(mut candidate) = found else { return };
        if !is_root {
            candidate.prepend(self.node);
        }
        let shorter = self
            .best
            .as_ref()
            .is_none_or(|best| candidate.len() < best.len());
        if shorter {
            self.best = Some(candidate);
        }
    }
}

/// A cycle under construction, borrowed from the graph.
///
/// Held back to front so that prepending is a push: `rev[0]` is the source,
/// `rev[1]` the node before the return, and the last element the node
/// nearest the source on the outbound side.
struct Partial<'g> {
    rev: Vec<&'g str>,
}

impl<'g> Partial<'g> {
    fn direct(node: &'g str, target: &'g str) -> Self {
        Self {
            rev: vec![target, node],
        }
    }

    fn prepend(&mut self, node: &'g str) {
        self.rev.push(node);
    }

    fn len(&self) -> usize {
        self.rev.len()
    }

    /// Converts to display order: source first, then the walk.
    fn finish(self) -> CyclePath {
        let mut rev = self.rev.into_iter();
        let mut entries: Vec<NodeId> = Vec::with_capacity(rev.len());
        if let Some(source) = rev.next() {
            entries.push(NodeId::from(source));
        }
        entries.extend(rev.rev().map(NodeId::from));
        CyclePath::from_entries(entries)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use super::*;

    fn graph(adjacency: &[(&str, &[&str])]) -> Graph {
        adjacency
            .iter()
            .map(|&(node, succ)| (node, succ.iter().copied()))
            .collect()
    }

    fn rendered(source: &str, g: &Graph) -> Option<String> {
        find_shortest_cycle(source, g).map(|p| p.to_string())
    }

    #[test]
    fn self_loop_is_length_two() {
        let g = graph(&[("A", &["A"])]);
        let p = find_shortest_cycle("A", &g).expect("self-loop is a cycle");
        assert_eq!(p.length(), 2);
        assert!(p.nodes().iter().all(|n| n == "A"));
        assert!(p.is_self_loop());
    }

    #[test]
    fn two_node_cycle() {
        let g = graph(&[("A", &["B"]), ("B", &["A"])]);
        let p = find_shortest_cycle("A", &g).expect("cycle");
        assert_eq!(p.to_string(), "A B");
        assert_eq!(p.length(), 2);
    }

    #[test]
    fn triangle_renders_in_traversal_order() {
        let g = graph(&[("A", &["B"]), ("B", &["C"]), ("C", &["A"])]);
        assert_eq!(rendered("A", &g).as_deref(), Some("A B C"));
        assert_eq!(rendered("B", &g).as_deref(), Some("B C A"));
        assert_eq!(rendered("C", &g).as_deref(), Some("C A B"));
    }

    #[test]
    fn acyclic_graph_has_no_cycle() {
        let g = graph(&[("A", &["B"]), ("B", &[])]);
        assert!(find_shortest_cycle("A", &g).is_none());
        assert!(find_shortest_cycle("B", &g).is_none());
    }

    #[test]
    fn unknown_source_has_no_cycle() {
        let g = graph(&[("A", &["A"])]);
        assert!(find_shortest_cycle("Z", &g).is_none());
    }

    #[test]
    fn successor_missing_from_keys_is_a_dead_end() {
        let g = graph(&[("A", &["ghost", "B"]), ("B", &["A"])]);
        assert_eq!(rendered("A", &g).as_deref(), Some("A B"));
    }

    #[test]
    fn shorter_sibling_branch_wins() {
        let g = graph(&[
            ("A", &["B", "C"]),
            ("B", &["A"]),
            ("C", &["D"]),
            ("D", &["A"]),
        ]);
        let p = find_shortest_cycle("A", &g).expect("cycle");
        assert_eq!(p.to_string(), "A B");
    }

    #[test]
    fn shorter_later_branch_replaces_longer_earlier_one() {
        let g = graph(&[
            ("A", &["C", "B"]),
            ("B", &["A"]),
            ("C", &["D"]),
            ("D", &["A"]),
        ]);
        assert_eq!(rendered("A", &g).as_deref(), Some("A B"));
    }

    #[test]
    fn equal_length_tie_keeps_first_branch() {
        let g = graph(&[
            ("S", &["X", "Y"]),
            ("X", &["M"]),
            ("Y", &["N"]),
            ("M", &["S"]),
            ("N", &["S"]),
        ]);
        assert_eq!(rendered("S", &g).as_deref(), Some("S X M"));
    }

    #[test]
    fn direct_hit_short_circuits_deeper_options() {
        // B returns to A directly even though B -> C -> A also exists.
        let g = graph(&[("A", &["B"]), ("B", &["C", "A"]), ("C", &["A"])]);
        assert_eq!(rendered("A", &g).as_deref(), Some("A B"));
    }

    #[test]
    fn cycle_not_through_source_is_ignored() {
        // B <-> C loops forever without the revisit guard but never returns to A.
        let g = graph(&[("A", &["B"]), ("B", &["C"]), ("C", &["B"])]);
        assert!(find_shortest_cycle("A", &g).is_none());
        assert_eq!(rendered("B", &g).as_deref(), Some("B C"));
    }

    #[test]
    fn self_loop_on_intermediate_node_is_skipped() {
        let g = graph(&[("A", &["B"]), ("B", &["B", "C"]), ("C", &["A"])]);
        assert_eq!(rendered("A", &g).as_deref(), Some("A B C"));
    }

    #[test]
    fn siblings_see_restored_path() {
        // The B branch opens a frame for D; the shorter C branch must reuse D.
        let g = graph(&[
            ("A", &["B", "C"]),
            ("B", &["X"]),
            ("X", &["D"]),
            ("D", &["E"]),
            ("E", &["A"]),
            ("C", &["D"]),
        ]);
        assert_eq!(rendered("A", &g).as_deref(), Some("A C D E"));

        let g = graph(&[
            ("A", &["B", "C"]),
            ("B", &["D"]),
            ("C", &["D"]),
            ("D", &["B", "A"]),
        ]);
        // A -> B -> D -> A and A -> C -> D -> A tie; first branch kept.
        assert_eq!(rendered("A", &g).as_deref(), Some("A B D"));
    }

    #[test]
    fn path_never_repeats_intermediate_nodes() {
        let g = graph(&[
            ("A", &["B"]),
            ("B", &["C", "D"]),
            ("C", &["B"]),
            ("D", &["A"]),
        ]);
        let p = find_shortest_cycle("A", &g).expect("cycle");
        assert_eq!(p.to_string(), "A B D");
        let unique: HashSet<&str> = p.nodes().iter().map(NodeId::as_str).collect();
        assert_eq!(unique.len(), p.length());
    }

    #[test]
    fn every_edge_of_result_exists() {
        let g = graph(&[
            ("1", &["2", "3"]),
            ("2", &["4"]),
            ("3", &["4", "1"]),
            ("4", &["1"]),
        ]);
        let p = find_shortest_cycle("1", &g).expect("cycle");
        for (from, to) in p.edges() {
            let succ = g.successors(from).expect("edge source is a key");
            assert!(succ.contains(to), "{from} -> {to} is not an edge");
        }
    }

    #[test]
    fn long_ring_does_not_exhaust_the_stack() {
        let n = 200_000;
        let names: Vec<String> = (0..n).map(|i| format!("n{i}")).collect();
        let g: Graph = (0..n)
            .map(|i| (names[i].as_str(), vec![names[(i + 1) % n].as_str()]))
            .collect();
        let p = find_shortest_cycle("n0", &g).expect("ring is a cycle");
        assert_eq!(p.length(), n);
        assert_eq!(p.origin(), "n0");
        assert_eq!(p.nodes()[1], "n1");
        assert_eq!(p.nodes()[n - 1], format!("n{}", n - 1).as_str());
    }
}
