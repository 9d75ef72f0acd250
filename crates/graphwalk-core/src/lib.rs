//! # graphwalk core
//!
//! Named-node graphs with depth-first traversal.
//!
//! The crate has two layers:
//!
//! - [`GraphStore`]: an adjacency list keyed by node name. Every operation
//!   is total; unknown names are ignored or yield empty results.
//! - [`GraphSession`]: validates names before touching the store and
//!   reports problems as [`Error`] values, for interactive front ends.
//!
//! ## Quick Start
//!
//! ```rust
//! use graphwalk_core::GraphSession;
//!
//! fn main() -> Result<(), graphwalk_core::Error> {
//!     let mut session = GraphSession::new();
//!     for name in ["A", "B", "C", "D"] {
//!         session.add_node(name)?;
//!     }
//!     session.connect("A", "B")?;
//!     session.connect("A", "C")?;
//!     session.connect("B", "D")?;
//!
//!     let path = session.traverse("A")?;
//!     assert_eq!(path.to_string(), "A → B → D → C");
//!
//!     // Duplicate edges are rejected instead of ignored.
//!     assert!(session.connect("B", "A").is_err());
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![cfg_attr(test, allow(clippy::doc_markdown, clippy::uninlined_format_args))]

pub mod error;
#[cfg(test)]
mod error_tests;
pub mod graph;
pub mod session;

pub use error::{Error, Result};
pub use graph::{GraphSnapshot, GraphStore, GraphTraversal, NodeEntry};
pub use session::{DfsPath, GraphSession};
