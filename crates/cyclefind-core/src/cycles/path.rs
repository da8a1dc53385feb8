//! [`CyclePath`]: one discovered cycle and its node-set identity.
use std::collections::BTreeSet;
use std::fmt;

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use crate::newtypes::NodeId;

// ---------------------------------------------------------------------------
// CycleKey
// ---------------------------------------------------------------------------

/// Canonical identity of a cycle: the set of node identifiers it contains.
///
/// Two cycles with the same key are treated as the same cycle regardless of
/// traversal order or direction. This conflates distinct cycles that happen
/// to visit the same nodes through different edges; see `DESIGN.md`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CycleKey(BTreeSet<NodeId>);

impl CycleKey {
    /// Iterates the member nodes in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &NodeId> {
        self.0.iter()
    }

    /// Number of distinct nodes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false` for keys built from a [`CyclePath`].
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns `true` if `node` is a member.
    pub fn contains(&self, node: &str) -> bool {
        self.0.contains(node)
    }
}

// ---------------------------------------------------------------------------
// CyclePath
// ---------------------------------------------------------------------------

/// A walk that leaves its origin and returns to it without repeating any
/// other node.
///
/// Entries are held in display order: the origin first, then each following
/// node of the walk. The closing edge back to the origin is implied. A direct
/// self-loop is held as `[origin, origin]`, the "node before the return" and
/// the origin itself, so every cycle has at least two entries.
///
/// Equality and hashing go through [`CycleKey`]: two paths are equal when
/// they contain the same set of nodes.
#[derive(Debug, Clone)]
pub struct CyclePath {
    entries: Vec<NodeId>,
    key: CycleKey,
}

impl CyclePath {
    /// Builds a path from entries already in display order.
    ///
    /// Callers guarantee `entries.len() >= 2`.
    pub(crate) fn from_entries(entries: Vec<NodeId>) -> Self {
        let key = CycleKey(entries.iter().cloned().collect());
        Self { entries, key }
    }

    /// The node the cycle starts and ends at.
    pub fn origin(&self) -> &NodeId {
        &self.entries[0]
    }

    /// Entries in display order, origin first.
    pub fn nodes(&self) -> &[NodeId] {
        &self.entries
    }

    /// Number of stored entries; the measure used to pick the shortest cycle.
    pub fn length(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the cycle is a single edge from the origin to itself.
    pub fn is_self_loop(&self) -> bool {
        self.key.len() == 1
    }

    /// Number of directed edges traversed by the closed walk.
    pub fn edge_count(&self) -> usize {
        if self.is_self_loop() {
            1
        } else {
            self.entries.len()
        }
    }

    /// The directed edges of the closed walk, in traversal order.
    pub fn edges(&self) -> impl Iterator<Item = (&NodeId, &NodeId)> {
        let walk = if self.is_self_loop() {
            &self.entries[..1]
        } else {
            &self.entries[..]
        };
        walk.iter()
            .zip(walk.iter().skip(1).chain(std::iter::once(self.origin())))
    }

    /// The node set used for deduplication.
    pub fn node_set(&self) -> &CycleKey {
        &self.key
    }

    /// Returns `true` if both paths contain exactly the same nodes.
    pub fn same_cycle(&self, other: &CyclePath) -> bool {
        self.key == other.key
    }

    /// Joins the entries with `delimiter`, origin first.
    pub fn render(&self, delimiter: &str) -> String {
        let parts: Vec<&str> = self.entries.iter().map(NodeId::as_str).collect();
        parts.join(delimiter)
    }
}

impl PartialEq for CyclePath {
    fn eq(&self, other: &Self) -> bool {
        self.same_cycle(other)
    }
}

impl Eq for CyclePath {}

impl std::hash::Hash for CyclePath {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}

impl fmt::Display for CyclePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(" "))
    }
}

impl Serialize for CyclePath {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        let mut st = s.serialize_struct("CyclePath", 2)?;
        st.serialize_field("nodes", &self.entries)?;
        st.serialize_field("length", &self.length())?;
        st.end()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
