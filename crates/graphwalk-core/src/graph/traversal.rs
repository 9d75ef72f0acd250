//! Depth-first traversal for adjacency-list graphs.
//!
//! Generic over [`GraphTraversal`] so any store that can list neighbours
//! in a stable order gets the same walk. The walk keeps its own stack, so
//! long chains do not grow the call stack.

use std::collections::HashSet;

use super::GraphStore;

/// Read access a depth-first walk needs from an adjacency store.
pub trait GraphTraversal {
    /// Returns true if the node exists.
    fn contains(&self, id: &str) -> bool;

    /// Returns the neighbours of a node in exploration order.
    fn neighbors(&self, id: &str) -> &[String];

    /// Returns all node names, in the order components are discovered.
    fn node_ids(&self) -> Vec<&str>;
}

impl GraphTraversal for GraphStore {
    fn contains(&self, id: &str) -> bool {
        self.has_node(id)
    }

    fn neighbors(&self, id: &str) -> &[String] {
        GraphStore::neighbors(self, id)
    }

    fn node_ids(&self) -> Vec<&str> {
        self.nodes().collect()
    }
}

/// DFS traversal from a start node.
///
/// Visits `start`, then each unvisited neighbour in neighbour-list order
/// before backtracking. Every node reachable from `start` appears exactly
/// once. An unknown `start` yields an empty vector.
#[must_use]
pub fn dfs<G: GraphTraversal + ?Sized>(graph: &G, start: &str) -> Vec<String> {
    let mut visited = HashSet::new();
    let mut result = Vec::new();
    dfs_extend(graph, start, &mut visited, &mut result);
    result
}

/// Continues a DFS into caller-owned accumulators.
///
/// Returns immediately if `start` is unknown or already in `visited`.
/// Otherwise marks and appends nodes in the same order as [`dfs`]. Sharing
/// `visited` across calls lets one walk cover several start nodes without
/// repeating any of them.
pub fn dfs_extend<G: GraphTraversal + ?Sized>(
    graph: &G,
    start: &str,
    visited: &mut HashSet<String>,
    result: &mut Vec<String>,
) {
    if !graph.contains(start) || visited.contains(start) {
        return;
    }
    visited.insert(start.to_string());
    result.push(start.to_string());

    // Each frame is a neighbour list plus a cursor to the next entry to
    // try, which reproduces the recursive visiting order exactly.
    let mut stack: Vec<(&[String], usize)> = vec![(graph.neighbors(start), 0)];

    while let Some(frame) = stack.last_mut() {
        let (neighbours, cursor) = *frame;
        frame.1 += 1;

        let Some(next) = neighbours.get(cursor) else {
            stack.pop();
            continue;
        };

        if graph.contains(next) && !visited.contains(next.as_str()) {
            visited.insert(next.clone());
            result.push(next.clone());
            stack.push((graph.neighbors(next), 0));
        }
    }
}

/// Runs a DFS from every node that is not yet visited.
///
/// Returns one pre-order sequence per connected component, in the order
/// their first node appears in [`GraphTraversal::node_ids`].
#[must_use]
pub fn dfs_forest<G: GraphTraversal + ?Sized>(graph: &G) -> Vec<Vec<String>> {
    let mut visited = HashSet::new();
    let mut components = Vec::new();

    for id in graph.node_ids() {
        let mut component = Vec::new();
        dfs_extend(graph, id, &mut visited, &mut component);
        if !component.is_empty() {
            components.push(component);
        }
    }

    components
}
