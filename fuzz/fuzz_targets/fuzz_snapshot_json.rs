//! Fuzz target for snapshot decoding.
//!
//! Arbitrary bytes must either fail to decode or load into a session
//! without panicking, and a loaded graph must survive another round trip
//! unchanged.
//!
//! # Running
//!
//! ```bash
//! cd fuzz
//! cargo +nightly fuzz run fuzz_snapshot_json
//! ```

#![no_main]

use graphwalk_core::{GraphSession, GraphSnapshot, GraphStore};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(snapshot) = GraphSnapshot::from_json(text) else {
        return;
    };

    let mut session = GraphSession::new();
    session.load(&snapshot);

    // Once loaded, a snapshot round trip must be exact.
    let json = session.snapshot().to_json().expect("snapshot encodes");
    let again = GraphSnapshot::from_json(&json).expect("snapshot decodes");
    let restored = GraphStore::from_snapshot(&again);
    assert_eq!(&restored, session.store());
    assert!(restored.nodes().eq(session.store().nodes()));

    for node in session.store().nodes() {
        let _ = session.traverse(node);
    }
});
