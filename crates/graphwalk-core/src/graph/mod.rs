//! In-memory graph module.
//!
//! Provides the adjacency store, depth-first traversal, and snapshots.
//!
//! # Example
//!
//! ```rust
//! use graphwalk_core::graph::GraphStore;
//!
//! let mut store = GraphStore::new();
//! for node in ["A", "B", "C", "D"] {
//!     store.add_node(node);
//! }
//! store.add_edge("A", "B");
//! store.add_edge("A", "C");
//! store.add_edge("B", "D");
//!
//! assert_eq!(store.dfs("A"), ["A", "B", "D", "C"]);
//! ```

mod snapshot;
mod store;
pub mod traversal;


pub use snapshot::{GraphSnapshot, NodeEntry};
pub use store::GraphStore;
pub use traversal::{dfs, dfs_extend, dfs_forest, GraphTraversal};
