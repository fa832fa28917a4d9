//! Aggregation — concatenates per-source batches into one canonical
//! [`Catalog`] in the fixed [`Source::ALL`] order.
//!
//! The catalog is the single downstream artifact; exporters read from it,
//! never from individual batches. No cross-source deduplication or sorting
//! happens here; each normalizer's emission order is preserved.

use crate::record::{PartnerRecord, Source, SourceBatch};

/// Per-source observability counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceCount {
    pub source: Source,
    /// Records emitted into the catalog.
    pub emitted: usize,
    /// Records dropped by the normalizer for an empty name.
    pub dropped: usize,
}

/// The aggregated record sequence plus per-source counts.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    pub records: Vec<PartnerRecord>,
    pub counts: Vec<SourceCount>,
}

impl Catalog {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn total_dropped(&self) -> usize {
        self.counts.iter().map(|c| c.dropped).sum()
    }
}

/// Concatenate batches in canonical source order, whatever order they arrive
/// in. Multiple batches for one source keep their relative arrival order.
pub fn combine(batches: Vec<SourceBatch>) -> Catalog {
    let mut records = Vec::with_capacity(batches.iter().map(|b| b.records.len()).sum());
    let mut counts = Vec::with_capacity(Source::ALL.len());

    for source in Source::ALL {
        let mut emitted = 0;
        let mut dropped = 0;
        for batch in batches.iter().filter(|b| b.source == source) {
            emitted += batch.records.len();
            dropped += batch.dropped;
            records.extend(batch.records.iter().cloned());
        }
        counts.push(SourceCount {
            source,
            emitted,
            dropped,
        });
    }

    Catalog { records, counts }
}
