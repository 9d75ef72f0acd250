//! Validating front for [`GraphStore`].
//!
//! The store accepts anything and silently ignores bad references. A
//! session checks names first and reports what was wrong, which is what an
//! interactive front end needs to show the user. The graph is undirected:
//! the store's adjacency is the only record of which edges exist.

use std::fmt;

use tracing::info;

use crate::error::{Error, Result};
use crate::graph::{GraphSnapshot, GraphStore};

/// Ordered result of a depth-first walk.
///
/// Displays as the node names joined with ` → `.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DfsPath {
    start: String,
    nodes: Vec<String>,
}

impl DfsPath {
    /// Returns the start node of the walk.
    #[must_use]
    pub fn start(&self) -> &str {
        &self.start
    }

    /// Returns the visited nodes in visiting order.
    #[must_use]
    pub fn nodes(&self) -> &[String] {
        &self.nodes
    }
}

impl fmt::Display for DfsPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.nodes.join(" → "))
    }
}

/// A graph plus the checks an interactive editor performs before each edit.
#[derive(Debug, Default)]
pub struct GraphSession {
    store: GraphStore,
}

impl GraphSession {
    /// Creates a session over an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Read access to the underlying graph.
    #[must_use]
    pub fn store(&self) -> &GraphStore {
        &self.store
    }

    /// Adds a node.
    ///
    /// # Errors
    ///
    /// - `Error::EmptyNodeName` if `name` is blank.
    /// - `Error::NodeExists` if the node is already present.
    pub fn add_node(&mut self, name: &str) -> Result<String> {
        let name = non_empty(name)?;
        if self.store.has_node(name) {
            return Err(Error::NodeExists(name.to_string()));
        }
        self.store.add_node(name);
        info!(node = name, "node added");
        Ok(name.to_string())
    }

    /// Links two existing nodes.
    ///
    /// # Errors
    ///
    /// - `Error::EmptyNodeName` if either name is blank.
    /// - `Error::NodeNotFound` for the first missing endpoint.
    /// - `Error::SelfLoop` if both names are the same.
    /// - `Error::EdgeExists` if the nodes are already linked.
    pub fn connect(&mut self, from: &str, to: &str) -> Result<(String, String)> {
        let (from, to) = self.existing_pair(from, to)?;
        if from == to {
            return Err(Error::SelfLoop(from.to_string()));
        }
        if self.store.has_edge(from, to) {
            return Err(Error::EdgeExists(from.to_string(), to.to_string()));
        }
        self.store.add_edge(from, to);
        info!(from, to, "edge added");
        Ok((from.to_string(), to.to_string()))
    }

    /// Removes a node and every edge touching it.
    ///
    /// # Errors
    ///
    /// - `Error::EmptyNodeName` if `name` is blank.
    /// - `Error::NodeNotFound` if the node is absent.
    pub fn remove_node(&mut self, name: &str) -> Result<()> {
        let name = self.existing(name)?;
        self.store.remove_node(name);
        info!(node = name, "node removed");
        Ok(())
    }

    /// Unlinks two nodes in both directions.
    ///
    /// # Errors
    ///
    /// - `Error::EmptyNodeName` if either name is blank.
    /// - `Error::NodeNotFound` for the first missing endpoint.
    /// - `Error::EdgeNotFound` if neither direction is linked.
    pub fn disconnect(&mut self, from: &str, to: &str) -> Result<()> {
        let (from, to) = self.existing_pair(from, to)?;
        if !self.store.has_edge(from, to) && !self.store.has_edge(to, from) {
            return Err(Error::EdgeNotFound(from.to_string(), to.to_string()));
        }
        self.store.remove_edge(from, to);
        self.store.remove_edge(to, from);
        info!(from, to, "edge removed");
        Ok(())
    }

    /// Runs a depth-first walk from `start`.
    ///
    /// # Errors
    ///
    /// - `Error::EmptyNodeName` if `start` is blank.
    /// - `Error::NodeNotFound` if the node is absent.
    pub fn traverse(&self, start: &str) -> Result<DfsPath> {
        let start = self.existing(start)?;
        let path = DfsPath {
            start: start.to_string(),
            nodes: self.store.dfs(start),
        };
        info!(start, visited = path.nodes.len(), "dfs from {start}: {path}");
        Ok(path)
    }

    /// Walks every connected component.
    #[must_use]
    pub fn components(&self) -> Vec<Vec<String>> {
        self.store.components()
    }

    /// Drops every node and edge.
    pub fn reset(&mut self) {
        self.store.clear();
        info!("graph reset");
    }

    /// Captures the current graph.
    #[must_use]
    pub fn snapshot(&self) -> GraphSnapshot {
        self.store.snapshot()
    }

    /// Replaces the current graph with the contents of `snapshot`.
    pub fn load(&mut self, snapshot: &GraphSnapshot) {
        self.store = GraphStore::from_snapshot(snapshot);
        info!(
            nodes = self.store.node_count(),
            edges = self.store.edge_count(),
            "graph loaded"
        );
    }

    fn existing<'a>(&self, name: &'a str) -> Result<&'a str> {
        let name = non_empty(name)?;
        if !self.store.has_node(name) {
            return Err(Error::NodeNotFound(name.to_string()));
        }
        Ok(name)
    }

    fn existing_pair<'a>(&self, from: &'a str, to: &'a str) -> Result<(&'a str, &'a str)> {
        let from = non_empty(from)?;
        let to = non_empty(to)?;
        Ok((self.existing(from)?, self.existing(to)?))
    }
}

fn non_empty(name: &str) -> Result<&str> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(Error::EmptyNodeName);
    }
    Ok(trimmed)
}
