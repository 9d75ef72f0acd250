//! Serializable view of a graph.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// One node and its neighbour list, in exploration order.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct NodeEntry {
    /// Node name.
    pub name: String,
    /// Neighbours exactly as the store lists them.
    #[serde(default)]
    pub neighbors: Vec<String>,
}

/// Nodes and adjacency of a [`GraphStore`](super::GraphStore) at one point
/// in time.
///
/// Neighbour lists are kept verbatim, so restoring a snapshot reproduces
/// every walk order, including one-sided links left by
/// [`remove_edge`](super::GraphStore::remove_edge).
///
/// # Example
///
/// ```rust
/// use graphwalk_core::graph::{GraphSnapshot, GraphStore};
///
/// let mut store = GraphStore::new();
/// store.add_edge("B", "C");
/// store.add_edge("A", "C");
///
/// let json = store.snapshot().to_json().unwrap();
/// let restored = GraphStore::from_snapshot(&GraphSnapshot::from_json(&json).unwrap());
/// assert_eq!(restored.neighbors("C"), ["B", "A"]);
/// assert_eq!(restored, store);
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct GraphSnapshot {
    /// Nodes in store order.
    pub nodes: Vec<NodeEntry>,
}

impl GraphSnapshot {
    /// Serializes the snapshot as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns `Error::Json` if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parses a snapshot from JSON.
    ///
    /// # Errors
    ///
    /// Returns `Error::Json` if the text is not a valid snapshot.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
