//! Property-based tests for record store invariants.
//!
//! These tests drive random interleavings of mutations and check that the
//! store's documented invariants hold afterwards.

use proptest::prelude::*;

use archive_store::{RecordStore, VisitStatus};

/// Small address pool so freezes and visits actually interact.
const IPS: [&str; 3] = ["10.0.0.1", "10.0.0.2", "10.0.0.3"];

#[derive(Debug, Clone)]
enum Op {
    Visit(usize),
    Freeze(usize),
    Unfreeze(usize),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0..IPS.len()).prop_map(Op::Visit),
        (0..IPS.len()).prop_map(Op::Freeze),
        (0..IPS.len()).prop_map(Op::Unfreeze),
    ]
}

fn apply(store: &mut RecordStore, ops: &[Op]) {
    for (i, op) in ops.iter().enumerate() {
        match op {
            Op::Visit(ip) => {
                store
                    .record_visit(IPS[*ip], format!("/p/{i}"), "UA")
                    .unwrap();
            }
            Op::Freeze(ip) => store.freeze(IPS[*ip]).unwrap(),
            Op::Unfreeze(ip) => store.unfreeze(IPS[*ip]).unwrap(),
        }
    }
}

proptest! {
    /// Mass updates keep every visit's status in sync with the frozen set.
    #[test]
    fn status_always_matches_frozen_set(ops in proptest::collection::vec(op_strategy(), 1..64)) {
        let mut store = RecordStore::in_memory();
        apply(&mut store, &ops);

        let snapshot = store.snapshot();
        for visit in &snapshot.visits {
            let frozen = snapshot.frozen_ips.contains(&visit.ip);
            prop_assert_eq!(visit.status == VisitStatus::Frozen, frozen);
        }
        prop_assert_eq!(snapshot.frozen_count, snapshot.frozen_ips.len());
    }

    /// Repeating a freeze or unfreeze changes nothing observable.
    #[test]
    fn freeze_and_unfreeze_are_idempotent(
        ops in proptest::collection::vec(op_strategy(), 0..32),
        ip in 0..IPS.len(),
    ) {
        let mut store = RecordStore::in_memory();
        apply(&mut store, &ops);

        store.freeze(IPS[ip]).unwrap();
        let once = store.snapshot();
        store.freeze(IPS[ip]).unwrap();
        prop_assert_eq!(once, store.snapshot());

        store.unfreeze(IPS[ip]).unwrap();
        let once = store.snapshot();
        store.unfreeze(IPS[ip]).unwrap();
        prop_assert_eq!(once, store.snapshot());
    }

    /// The visit list never grows past the retention cap, and unique-IP
    /// counting stays within the pool.
    #[test]
    fn derived_counts_stay_consistent(ops in proptest::collection::vec(op_strategy(), 1..128)) {
        let mut store = RecordStore::in_memory();
        apply(&mut store, &ops);

        let snapshot = store.snapshot();
        prop_assert!(snapshot.visits.len() <= 1000);
        prop_assert_eq!(snapshot.total_visits, snapshot.visits.len());
        prop_assert!(snapshot.unique_ip_count <= IPS.len());
        prop_assert_eq!(snapshot.message_count, snapshot.messages.len());
    }
}
