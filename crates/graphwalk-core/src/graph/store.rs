//! Adjacency-list store for named nodes.
//!
//! Edges are stored symmetrically: linking A to B also links B to A.
//! Every operation is total. Unknown names degrade to no-ops or empty
//! results, so callers that want to reject bad input must check first
//! (see [`GraphSession`](crate::session::GraphSession)).

use std::collections::HashSet;

use indexmap::IndexMap;
use tracing::debug;

use super::snapshot::{GraphSnapshot, NodeEntry};

/// In-memory graph keyed by node name.
///
/// Each node maps to its neighbours in the order the edges were added,
/// without duplicates. Node iteration follows insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GraphStore {
    /// node -> neighbours, in edge insertion order.
    adjacency: IndexMap<String, Vec<String>>,
}

impl GraphStore {
    /// Creates a new empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store with room for `expected_nodes` nodes.
    #[must_use]
    pub fn with_capacity(expected_nodes: usize) -> Self {
        Self {
            adjacency: IndexMap::with_capacity(expected_nodes),
        }
    }

    // ── Nodes ──────────────────────────────────────────────────────────

    /// Adds a node with no neighbours. Adding an existing node does nothing.
    pub fn add_node(&mut self, id: &str) {
        if !self.adjacency.contains_key(id) {
            debug!(node = id, "add node");
            self.adjacency.insert(id.to_string(), Vec::new());
        }
    }

    /// Returns true if a node with the given name exists.
    #[must_use]
    pub fn has_node(&self, id: &str) -> bool {
        self.adjacency.contains_key(id)
    }

    /// Returns all node names.
    ///
    /// The order is insertion order today, but callers should not depend on
    /// it staying stable across removals.
    pub fn nodes(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.adjacency.keys().map(String::as_str)
    }

    /// Returns the total number of nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Returns true if the store holds no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Removes a node and purges it from every neighbour list.
    ///
    /// Does nothing for an unknown node.
    pub fn remove_node(&mut self, id: &str) {
        if self.adjacency.shift_remove(id).is_none() {
            return;
        }
        debug!(node = id, "remove node");
        // Sweep every list, not only former neighbours: an earlier one-sided
        // `remove_edge` can leave a back-reference the removed list no longer
        // points at.
        for neighbours in self.adjacency.values_mut() {
            neighbours.retain(|n| n != id);
        }
    }

    // ── Edges ──────────────────────────────────────────────────────────

    /// Links `from` and `to` in both directions, creating either node if
    /// missing. Existing links are not duplicated.
    pub fn add_edge(&mut self, from: &str, to: &str) {
        self.add_node(from);
        self.add_node(to);
        debug!(from, to, "add edge");
        Self::link(&mut self.adjacency, from, to);
        Self::link(&mut self.adjacency, to, from);
    }

    fn link(adjacency: &mut IndexMap<String, Vec<String>>, from: &str, to: &str) {
        if let Some(neighbours) = adjacency.get_mut(from) {
            if !neighbours.iter().any(|n| n == to) {
                neighbours.push(to.to_string());
            }
        }
    }

    /// Removes `to` from the neighbour list of `from`.
    ///
    /// Only this one direction is removed. The link from `to` back to
    /// `from` stays until `remove_edge(to, from)` is called as well.
    pub fn remove_edge(&mut self, from: &str, to: &str) {
        if let Some(neighbours) = self.adjacency.get_mut(from) {
            let before = neighbours.len();
            neighbours.retain(|n| n != to);
            if neighbours.len() != before {
                debug!(from, to, "remove edge");
            }
        }
    }

    /// Returns the neighbours of a node in edge insertion order.
    ///
    /// Unknown nodes have no neighbours.
    #[must_use]
    pub fn neighbors(&self, id: &str) -> &[String] {
        self.adjacency.get(id).map_or(&[], Vec::as_slice)
    }

    /// Returns true if `to` is in the neighbour list of `from`.
    #[must_use]
    pub fn has_edge(&self, from: &str, to: &str) -> bool {
        self.neighbors(from).iter().any(|n| n == to)
    }

    /// Returns the number of neighbours of a node.
    #[must_use]
    pub fn degree(&self, id: &str) -> usize {
        self.neighbors(id).len()
    }

    /// Returns every adjacency once as a `(from, to)` pair.
    ///
    /// Nodes are walked in order; `(a, b)` is skipped when `(b, a)` was
    /// already emitted, so a symmetric link shows up a single time.
    #[must_use]
    pub fn edges(&self) -> Vec<(&str, &str)> {
        let mut seen: HashSet<(&str, &str)> = HashSet::new();
        let mut edges = Vec::new();
        for (from, neighbours) in &self.adjacency {
            for to in neighbours {
                let key = if from <= to {
                    (from.as_str(), to.as_str())
                } else {
                    (to.as_str(), from.as_str())
                };
                if seen.insert(key) {
                    edges.push((from.as_str(), to.as_str()));
                }
            }
        }
        edges
    }

    /// Returns the number of distinct node pairs linked in either direction.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges().len()
    }

    /// Clears all nodes and edges from the store.
    pub fn clear(&mut self) {
        debug!(nodes = self.adjacency.len(), "clear graph");
        self.adjacency.clear();
    }

    // ── Traversal ──────────────────────────────────────────────────────

    /// Depth-first pre-order walk from `start`.
    ///
    /// Returns an empty vector when `start` is unknown.
    #[must_use]
    pub fn dfs(&self, start: &str) -> Vec<String> {
        super::traversal::dfs(self, start)
    }

    /// Continues a depth-first walk from `start` into caller-owned
    /// accumulators. See [`traversal::dfs_extend`](super::traversal::dfs_extend).
    pub fn dfs_extend(
        &self,
        start: &str,
        visited: &mut HashSet<String>,
        result: &mut Vec<String>,
    ) {
        super::traversal::dfs_extend(self, start, visited, result);
    }

    /// Walks every connected component, one pre-order sequence each.
    #[must_use]
    pub fn components(&self) -> Vec<Vec<String>> {
        super::traversal::dfs_forest(self)
    }

    // ── Snapshots ──────────────────────────────────────────────────────

    /// Captures every node with its neighbour list as-is.
    #[must_use]
    pub fn snapshot(&self) -> GraphSnapshot {
        GraphSnapshot {
            nodes: self
                .adjacency
                .iter()
                .map(|(name, neighbors)| NodeEntry {
                    name: name.clone(),
                    neighbors: neighbors.clone(),
                })
                .collect(),
        }
    }

    /// Rebuilds a store from a snapshot.
    ///
    /// Neighbour lists are restored in their recorded order without
    /// re-linking the reverse direction, so `from_snapshot(&s.snapshot())`
    /// equals `s`. Input that did not come from [`snapshot`](Self::snapshot)
    /// is normalised: a repeated node merges into its first entry, repeated
    /// neighbours keep their first position, and neighbours naming no node
    /// are dropped.
    #[must_use]
    pub fn from_snapshot(snapshot: &GraphSnapshot) -> Self {
        let mut store = Self::with_capacity(snapshot.nodes.len());
        for entry in &snapshot.nodes {
            store.add_node(&entry.name);
        }
        for entry in &snapshot.nodes {
            for neighbor in &entry.neighbors {
                if store.has_node(neighbor) {
                    Self::link(&mut store.adjacency, &entry.name, neighbor);
                } else {
                    debug!(
                        node = %entry.name,
                        neighbor = %neighbor,
                        "dropping dangling neighbour"
                    );
                }
            }
        }
        store
    }
}
