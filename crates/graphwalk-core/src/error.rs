//! Error types for graphwalk-core.
//!
//! [`GraphStore`](crate::graph::GraphStore) never fails: unknown names
//! degrade to no-ops. These errors come from the validating
//! [`GraphSession`](crate::session::GraphSession) layer and from snapshot
//! decoding.

use thiserror::Error;

/// Graph session error types.
#[derive(Error, Debug)]
pub enum Error {
    /// A node name was empty after trimming.
    #[error("Node name cannot be empty")]
    EmptyNodeName,

    /// A node with this name is already in the graph.
    #[error("Node '{0}' already exists")]
    NodeExists(String),

    /// No node with this name is in the graph.
    #[error("Node '{0}' does not exist")]
    NodeNotFound(String),

    /// The two nodes are already adjacent.
    #[error("Edge {0} → {1} already exists")]
    EdgeExists(String, String),

    /// The two nodes are not adjacent in either direction.
    #[error("Edge {0} → {1} does not exist")]
    EdgeNotFound(String, String),

    /// An edge from a node to itself was requested.
    #[error("Cannot connect node '{0}' to itself")]
    SelfLoop(String),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for graph session operations.
pub type Result<T> = std::result::Result<T, Error>;
