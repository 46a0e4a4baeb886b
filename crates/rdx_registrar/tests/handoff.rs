//! Delivery properties of fragment evaluation.
//!
//! For every table: evaluating a fragment either calls the installed hook
//! exactly once with that table, or leaves it in the pending slot. Never both,
//! never neither, and the delivered table is unchanged.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use std::sync::Arc;

use parking_lot::Mutex;
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rdx_registrar::fragments::CORE_DEFAULT;
use rdx_registrar::{
    evaluate, Delivery, Fragment, ImplementorIndex, ImplementorRegistry, TableFragment,
};
use rdx_table::{ImplementorTable, Markup};

type Calls = Arc<Mutex<Vec<ImplementorTable>>>;

fn recording_registry() -> (ImplementorRegistry, Calls) {
    let registry = ImplementorRegistry::new();
    let calls: Calls = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&calls);
    registry.install_hook(move |table| sink.lock().push(table));
    (registry, calls)
}

fn table_strategy() -> impl Strategy<Value = ImplementorTable> {
    prop::collection::vec(
        (
            "[a-z][a-z0-9_]{0,8}",
            prop::collection::vec(".{0,24}", 0..6),
        ),
        0..8,
    )
    .prop_map(|entries| {
        entries
            .into_iter()
            .map(|(package, items)| {
                let descriptors: Vec<_> = items.into_iter().map(Markup::from).collect();
                (package, descriptors)
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn prop_hook_present_delivers_exactly_once(table in table_strategy()) {
        let (registry, calls) = recording_registry();
        let fragment = TableFragment::new("p::T", table.clone());

        let outcome = evaluate(&fragment, &registry);

        prop_assert_eq!(outcome, Delivery::Delivered);
        let calls = calls.lock();
        prop_assert_eq!(calls.as_slice(), std::slice::from_ref(&table));
        prop_assert!(!registry.has_pending());
    }

    #[test]
    fn prop_hook_absent_queues_unchanged(table in table_strategy()) {
        let registry = ImplementorRegistry::new();
        let fragment = TableFragment::new("p::T", table.clone());

        let outcome = evaluate(&fragment, &registry);

        prop_assert_eq!(outcome, Delivery::Queued);
        prop_assert_eq!(registry.pending(), Some(table));
        prop_assert!(!registry.has_hook());
    }
}

#[test]
fn core_default_queued_before_aggregator_loads() {
    let registry = ImplementorRegistry::new();

    assert_eq!(evaluate(&CORE_DEFAULT, &registry), Delivery::Queued);

    let pending = registry.pending().unwrap();
    assert_eq!(pending, CORE_DEFAULT.build());
    assert_eq!(pending.get("feed").map(<[Markup]>::len), Some(12));
    assert!(!registry.has_hook());
}

#[test]
fn core_default_delivered_to_recorder() {
    let (registry, calls) = recording_registry();

    assert_eq!(evaluate(&CORE_DEFAULT, &registry), Delivery::Delivered);

    assert_eq!(*calls.lock(), vec![CORE_DEFAULT.build()]);
    assert!(!registry.has_pending());
}

#[test]
fn reevaluation_without_hook_is_last_write_wins() {
    let registry = ImplementorRegistry::new();
    let first: ImplementorTable = [("rand", vec![])].into_iter().collect();

    evaluate(&TableFragment::new("core::default::Default", first), &registry);
    evaluate(&CORE_DEFAULT, &registry);
    evaluate(&CORE_DEFAULT, &registry);

    assert_eq!(registry.pending(), Some(CORE_DEFAULT.build()));
}

#[test]
fn empty_package_survives_handoff() {
    let registry = ImplementorRegistry::new();
    let table: ImplementorTable = [("rand", vec![])].into_iter().collect();

    evaluate(&TableFragment::new("core::default::Default", table), &registry);

    let pending = registry.drain_pending().unwrap();
    assert!(pending.contains_package("rand"));
    assert_eq!(pending.get("rand"), Some(&[][..]));
}

#[test]
fn late_aggregator_sees_last_pending_then_live_deliveries() {
    let registry = ImplementorRegistry::new();
    let early: ImplementorTable = [("uuid", vec![Markup::from("Uuid")])].into_iter().collect();
    evaluate(&TableFragment::new("core::default::Default", early), &registry);

    let index = ImplementorIndex::for_package("feed");
    assert!(index.attach(&registry));
    evaluate(&CORE_DEFAULT, &registry);

    assert_eq!(index.tables_received(), 2);
    // uuid twice (early + CORE_DEFAULT), rand once, feed skipped as local.
    assert_eq!(index.len(), 3);
    assert!(index.rows_for("feed").is_empty());
    assert_eq!(index.rows_for("uuid").len(), 2);
    assert!(index.checked("libc"));
    assert!(index.rows_for("libc").is_empty());
}
