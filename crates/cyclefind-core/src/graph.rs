//! Directed graph data model: an insertion-ordered adjacency mapping.
//!
//! A [`Graph`] maps each node identifier to the ordered list of its
//! successors. It is not required to be symmetric, may contain self-references,
//! and may list successors that never appear as keys. Such successors are dead
//! ends during a search, indistinguishable from keys with an empty list.
//!
//! Key order is significant: the unique-cycle aggregator visits nodes in the
//! order they were inserted (document order when parsed from JSON), and that
//! order decides which of several node-set-equal cycles is kept. The mapping
//! therefore carries an explicit ordered key list next to the hash index.
use std::collections::{BTreeSet, HashMap};
use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::warn;

use crate::newtypes::NodeId;

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

/// Errors produced while loading a [`Graph`] from its serialized form.
#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    /// The input is not valid JSON, or is valid JSON of the wrong shape
    /// (top level not an object, values not arrays of strings).
    #[error("invalid graph at line {line}, column {column}: {message}")]
    Parse {
        /// 1-based line of the offending input.
        line: usize,
        /// 1-based column of the offending input.
        column: usize,
        /// Description produced by the JSON parser.
        message: String,
    },
}

impl From<serde_json::Error> for GraphError {
    fn from(e: serde_json::Error) -> Self {
        Self::Parse {
            line: e.line(),
            column: e.column(),
            message: e.to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// Graph
// ---------------------------------------------------------------------------

/// An immutable-during-search adjacency mapping with stable key order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Graph {
    order: Vec<NodeId>,
    successors: HashMap<NodeId, Vec<NodeId>>,
}

impl Graph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty graph with room for `capacity` keys.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            order: Vec::with_capacity(capacity),
            successors: HashMap::with_capacity(capacity),
        }
    }

    /// Sets the successor list of `node`.
    ///
    /// A new node is appended to the key order. An existing node keeps its
    /// position; its previous successor list is replaced and returned.
    pub fn insert(
        &mut self,
        node: impl Into<NodeId>,
        successors: Vec<NodeId>,
    ) -> Option<Vec<NodeId>> {
        let node = node.into();
        if let Some(existing) = self.successors.get_mut(node.as_str()) {
            return Some(std::mem::replace(existing, successors));
        }
        self.order.push(node.clone());
        self.successors.insert(node, successors);
        None
    }

    /// Returns the successors of `node`, or `None` if `node` is not a key.
    pub fn successors(&self, node: &str) -> Option<&[NodeId]> {
        self.successors.get(node).map(Vec::as_slice)
    }

    /// Returns `true` if `node` appears as a key.
    pub fn contains_node(&self, node: &str) -> bool {
        self.successors.contains_key(node)
    }

    /// Iterates over the keys in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &NodeId> {
        self.order.iter()
    }

    /// Iterates over `(node, successors)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&NodeId, &[NodeId])> {
        self.order.iter().map(|node| {
            let successors = self.successors.get(node).map_or(&[][..], Vec::as_slice);
            (node, successors)
        })
    }

    /// Number of keys.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns `true` if the graph has no keys.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Total number of successor entries across all keys.
    ///
    /// A successor listed twice under the same key counts twice.
    pub fn edge_count(&self) -> usize {
        self.successors.values().map(Vec::len).sum()
    }

    /// Identifiers referenced as successors that never appear as keys.
    pub fn dangling_successors(&self) -> BTreeSet<&NodeId> {
        self.successors
            .values()
            .flatten()
            .filter(|succ| !self.successors.contains_key(succ.as_str()))
            .collect()
    }
}

impl<K, I> FromIterator<(K, I)> for Graph
where
    K: Into<NodeId>,
    I: IntoIterator,
    I::Item: Into<NodeId>,
{
    fn from_iter<T: IntoIterator<Item = (K, I)>>(iter: T) -> Self {
        let mut graph = Graph::new();
        for (node, successors) in iter {
            graph.insert(node, successors.into_iter().map(Into::into).collect());
        }
        graph
    }
}

/// Parses a JSON object of `node -> [successor, ...]` into a [`Graph`].
///
/// # Errors
///
/// Returns [`GraphError::Parse`] if `json` is malformed or not an object whose
/// values are arrays of strings.
pub fn parse_graph(json: &str) -> Result<Graph, GraphError> {
    let graph: Graph = serde_json::from_str(json)?;
    Ok(graph)
}

// ---------------------------------------------------------------------------
// Serde
// ---------------------------------------------------------------------------

impl Serialize for Graph {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        let mut map = s.serialize_map(Some(self.len()))?;
        for (node, successors) in self.iter() {
            map.serialize_entry(node, successors)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Graph {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        d.deserialize_map(GraphVisitor)
    }
}

struct GraphVisitor;

impl<'de> Visitor<'de> for GraphVisitor {
    type Value = Graph;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an object mapping node identifiers to arrays of successor identifiers")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Graph, A::Error> {
        let mut graph = Graph::with_capacity(access.size_hint().unwrap_or(0));
        while let Some((node, successors)) = access.next_entry::<NodeId, Vec<NodeId>>()? {
            if graph.contains_node(&node) {
                warn!(node = %node, "duplicate node key, keeping the last successor list");
            }
            graph.insert(node, successors);
        }
        Ok(graph)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
