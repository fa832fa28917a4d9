//! Domain-specific assertion helpers for cpl harnesses.
//!
//! These wrap `pretty_assertions` and add context-rich failure messages that
//! make it clear *which* pipeline invariant was violated and *on which*
//! record.

use cpl_core::classify::classify;
use cpl_core::record::PartnerRecord;
use cpl_core::{Catalog, Source};

// ---------------------------------------------------------------------------
// Record assertions
// ---------------------------------------------------------------------------

/// Assert that a `PartnerRecord` has the expected reward type.
///
/// ```rust
/// assert_reward!(record, RewardType::Cashback);
/// ```
#[macro_export]
macro_rules! assert_reward {
    ($record:expr, $reward:expr) => {{
        let record: &cpl_core::PartnerRecord = &$record;
        let expected: cpl_core::RewardType = $reward;
        if record.reward_type != expected {
            panic!(
                "assert_reward! failed:\n  expected: {:?}\n  actual:   {:?}\n  record: {:?} from {}",
                expected, record.reward_type, record.name, record.source
            );
        }
    }};
}

/// Assert that a `PartnerRecord` carries the expected provenance tag.
#[macro_export]
macro_rules! assert_provenance {
    ($record:expr, $source:expr) => {{
        let record: &cpl_core::PartnerRecord = &$record;
        let expected: cpl_core::Source = $source;
        if record.source != expected {
            panic!(
                "assert_provenance! failed:\n  expected: {:?}\n  actual:   {:?}\n  record: {:?}",
                expected, record.source, record.name
            );
        }
    }};
}

// ---------------------------------------------------------------------------
// Canonical record invariants
// ---------------------------------------------------------------------------

/// Assert the invariants every normalized record must satisfy: a non-empty
/// trimmed name, and a reward type that recomputes to itself from the
/// record's own fields (referential transparency of the classifier).
pub fn assert_canonical(record: &PartnerRecord) {
    assert!(
        !record.name.trim().is_empty(),
        "normalized record must have a non-empty name: {record:?}"
    );
    assert_eq!(
        record.name,
        record.name.trim(),
        "normalized name must be trimmed: {:?}",
        record.name
    );
    let recomputed = classify(
        record.source,
        record.cashback.as_deref(),
        &record.taksit_months,
    );
    assert_eq!(
        record.reward_type, recomputed,
        "reward_type must recompute from (source, cashback, taksit_months): {record:?}"
    );
    let mut sorted = record.taksit_months.clone();
    sorted.sort_unstable();
    sorted.dedup();
    assert_eq!(
        record.taksit_months, sorted,
        "taksit_months must be a sorted, deduplicated set: {record:?}"
    );
}

// ---------------------------------------------------------------------------
// Catalog assertions
// ---------------------------------------------------------------------------

/// Assert that catalog records appear in canonical source order (provenance
/// indices must be non-decreasing front to back).
pub fn assert_catalog_order(catalog: &Catalog) {
    let index = |source: Source| {
        Source::ALL
            .iter()
            .position(|s| *s == source)
            .expect("every source is in Source::ALL")
    };
    let mut last = 0usize;
    for record in &catalog.records {
        let current = index(record.source);
        assert!(
            current >= last,
            "catalog out of canonical order: {} after {}",
            record.source,
            Source::ALL[last]
        );
        last = current;
    }
}

/// Assert one source's emitted/dropped counters in a catalog.
pub fn assert_source_count(catalog: &Catalog, source: Source, emitted: usize, dropped: usize) {
    let count = catalog
        .counts
        .iter()
        .find(|c| c.source == source)
        .unwrap_or_else(|| panic!("catalog has no count entry for {source}"));
    assert_eq!(
        (count.emitted, count.dropped),
        (emitted, dropped),
        "unexpected (emitted, dropped) for {source}"
    );
}
