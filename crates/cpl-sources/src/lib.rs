//! cpl-sources — per-site source adapters for cpl.
//!
//! Each adapter owns one site's raw schema: it extracts raw records from the
//! payload text the fetch layer saved to disk (a JSON document, a
//! server-rendered HTML page, or an application bundle chunk) and normalizes
//! each raw record into a canonical [`PartnerRecord`].
//!
//! Extraction failures are fatal for that one source; normalization never
//! fails. Missing fields degrade to empty values, and only records whose
//! name trims to empty are dropped (counted on the batch).

pub mod bankrespublika;
pub mod birbank;
pub mod bolkart;
pub mod flatten;
pub mod html;
pub mod pashabank;
pub mod rabitabank;
pub mod tamkart;
pub mod unibank;
pub mod xalqbank;

use cpl_core::{Config, PartnerRecord, Source, SourceBatch};
use thiserror::Error;

/// A source-fatal failure: the whole source yields zero records and the
/// error is surfaced to the driver, which decides whether to continue with
/// the remaining sources.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("literal extraction failed: {0}")]
    Extract(#[from] cpl_core::ExtractError),
    #[error("literal parse failed: {0}")]
    Parse(#[from] cpl_core::ParseError),
    #[error("payload is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unexpected payload shape: {0}")]
    Shape(String),
}

/// One site's adapter: typed raw schema plus extraction and normalization.
pub trait SourceAdapter {
    /// Source-specific raw record type.
    type Raw;

    fn source(&self) -> Source;

    /// Pull all raw records out of one payload text.
    fn extract(&self, payload: &str) -> Result<Vec<Self::Raw>, SourceError>;

    /// Map one raw record to the canonical model. `None` means the record
    /// is dropped (empty name).
    fn normalize(&self, raw: &Self::Raw) -> Option<PartnerRecord>;

    /// Batch-level post-pass over the emitted records, applied after all
    /// payloads are normalized. The default keeps everything.
    fn finish(&self, records: Vec<PartnerRecord>) -> Vec<PartnerRecord> {
        records
    }
}

/// Run one adapter over a source's payloads (one element per fetched page).
pub fn run_adapter<A: SourceAdapter>(
    adapter: &A,
    payloads: &[String],
) -> Result<SourceBatch, SourceError> {
    let mut records = Vec::new();
    let mut dropped = 0usize;
    for payload in payloads {
        for raw in adapter.extract(payload)? {
            match adapter.normalize(&raw) {
                Some(record) => records.push(record),
                None => dropped += 1,
            }
        }
    }
    let records = adapter.finish(records);
    tracing::debug!(
        source = %adapter.source(),
        emitted = records.len(),
        dropped,
        "normalized source batch"
    );
    Ok(SourceBatch {
        source: adapter.source(),
        records,
        dropped,
    })
}

/// Run the adapter for `source` over its payloads.
pub fn run_source(
    source: Source,
    payloads: &[String],
    config: &Config,
) -> Result<SourceBatch, SourceError> {
    match source {
        Source::Bolkart => run_adapter(&bolkart::Bolkart, payloads),
        Source::Tamkart => run_adapter(&tamkart::Tamkart::from_config(config), payloads),
        Source::Birbank => run_adapter(&birbank::Birbank, payloads),
        Source::Rabitabank => run_adapter(&rabitabank::Rabitabank, payloads),
        Source::Unibank => run_adapter(&unibank::Unibank, payloads),
        Source::Xalqbank => run_adapter(&xalqbank::Xalqbank, payloads),
        Source::Pashabank => run_adapter(&pashabank::Pashabank, payloads),
        Source::Bankrespublika => run_adapter(&bankrespublika::Bankrespublika, payloads),
    }
}
