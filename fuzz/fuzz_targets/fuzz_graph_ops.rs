//! Fuzz target for store mutations followed by traversal.
//!
//! Applies an arbitrary sequence of operations over a small name pool and
//! checks that every walk visits each reachable node exactly once.
//!
//! # Running
//!
//! ```bash
//! cd fuzz
//! cargo +nightly fuzz run fuzz_graph_ops
//! ```

#![no_main]

use std::collections::HashSet;

use arbitrary::Arbitrary;
use graphwalk_core::GraphStore;
use libfuzzer_sys::fuzz_target;

const POOL: usize = 16;

#[derive(Arbitrary, Debug)]
enum Op {
    AddNode(u8),
    AddEdge(u8, u8),
    RemoveNode(u8),
    RemoveEdge(u8, u8),
    Dfs(u8),
}

fn name(id: u8) -> String {
    format!("n{}", usize::from(id) % POOL)
}

fuzz_target!(|ops: Vec<Op>| {
    let mut store = GraphStore::new();

    for op in ops.into_iter().take(512) {
        match op {
            Op::AddNode(a) => store.add_node(&name(a)),
            Op::AddEdge(a, b) => store.add_edge(&name(a), &name(b)),
            Op::RemoveNode(a) => store.remove_node(&name(a)),
            Op::RemoveEdge(a, b) => store.remove_edge(&name(a), &name(b)),
            Op::Dfs(a) => {
                let start = name(a);
                let order = store.dfs(&start);
                if store.has_node(&start) {
                    assert_eq!(order.first(), Some(&start));
                } else {
                    assert!(order.is_empty());
                }
                let unique: HashSet<&String> = order.iter().collect();
                assert_eq!(unique.len(), order.len(), "node visited twice");
                assert!(order.iter().all(|node| store.has_node(node)));
            }
        }
    }

    let covered: usize = store.components().iter().map(Vec::len).sum();
    assert_eq!(covered, store.node_count());
});
