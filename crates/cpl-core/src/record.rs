//! Core types for cpl-core — Card Partner Listings.
//!
//! This module defines the fundamental data structures shared across all
//! pipeline stages: the canonical [`PartnerRecord`], its [`RewardType`], and
//! the [`Source`] provenance discriminant, plus the field-normalization
//! helpers every source adapter applies.

use rust_decimal::Decimal;
use serde::Serialize;
use std::str::FromStr;

/// Which site a record was scraped from. Set once at normalization, never
/// mutated. [`Source::ALL`] is the fixed aggregation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    Bolkart,
    Tamkart,
    Birbank,
    Rabitabank,
    Unibank,
    Xalqbank,
    Pashabank,
    Bankrespublika,
}

impl Source {
    /// All sources in canonical aggregation order.
    pub const ALL: [Source; 8] = [
        Source::Bolkart,
        Source::Tamkart,
        Source::Birbank,
        Source::Rabitabank,
        Source::Unibank,
        Source::Xalqbank,
        Source::Pashabank,
        Source::Bankrespublika,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Source::Bolkart => "bolkart",
            Source::Tamkart => "tamkart",
            Source::Birbank => "birbank",
            Source::Rabitabank => "rabitabank",
            Source::Unibank => "unibank",
            Source::Xalqbank => "xalqbank",
            Source::Pashabank => "pashabank",
            Source::Bankrespublika => "bankrespublika",
        }
    }
}

impl std::fmt::Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Source {
    type Err = UnknownSource;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Source::ALL
            .into_iter()
            .find(|src| src.as_str() == s)
            .ok_or_else(|| UnknownSource(s.to_string()))
    }
}

/// Error for [`Source::from_str`] on an unrecognized source name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown source {0:?}")]
pub struct UnknownSource(pub String);

/// How a partner rewards card usage, derived by the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RewardType {
    Cashback,
    Miles,
    TaksitOnly,
    Unknown,
}

impl RewardType {
    pub fn as_str(self) -> &'static str {
        match self {
            RewardType::Cashback => "cashback",
            RewardType::Miles => "miles",
            RewardType::TaksitOnly => "taksit_only",
            RewardType::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for RewardType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A canonical partner record, produced once by a source normalizer and
/// immutable thereafter.
///
/// Every string field may be empty; a site not publishing a field is not an
/// error. `name` is the exception: normalizers drop records whose name trims
/// to empty instead of emitting them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PartnerRecord {
    pub source: Source,
    /// Original partner identifier, if the site exposes one.
    pub id: Option<String>,
    pub name: String,
    pub category: String,
    /// Normalized reward value: canonical decimal string when the raw text
    /// parses as a number, the stripped raw text verbatim when it does not.
    pub cashback: Option<String>,
    pub reward_type: RewardType,
    /// Installment month options, sorted ascending and deduplicated.
    pub taksit_months: Vec<u32>,
    pub city: String,
    pub address: String,
    pub phone: String,
    pub website: String,
    pub image_url: String,
}

/// One normalizer's output: its emitted records plus the count of records
/// dropped for having an empty name.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceBatch {
    pub source: Source,
    pub records: Vec<PartnerRecord>,
    pub dropped: usize,
}

impl SourceBatch {
    pub fn empty(source: Source) -> Self {
        SourceBatch {
            source,
            records: Vec::new(),
            dropped: 0,
        }
    }
}

// ---------------------------------------------------------------------------
// Field normalization helpers
// ---------------------------------------------------------------------------

/// Trim surrounding whitespace; the canonical empty string stands for an
/// absent field.
pub fn clean(raw: &str) -> String {
    raw.trim().to_string()
}

/// Parse decimal text, accepting scientific notation.
pub fn parse_decimal(text: &str) -> Option<Decimal> {
    Decimal::from_str(text)
        .or_else(|_| Decimal::from_scientific(text))
        .ok()
}

/// Normalize a raw cashback value: strip `%` and whitespace, then attempt a
/// decimal parse. Numeric input becomes the canonical decimal string
/// (`"5.50"` → `"5.5"`); non-numeric input is kept verbatim for the
/// classifier to interpret; empty input becomes `None`.
pub fn normalize_cashback(raw: &str) -> Option<String> {
    let stripped = raw.replace('%', "");
    let stripped = stripped.trim();
    if stripped.is_empty() {
        return None;
    }
    match parse_decimal(stripped) {
        Some(d) => Some(d.normalize().to_string()),
        None => Some(stripped.to_string()),
    }
}

/// Collect installment months into the canonical ordered set: sorted
/// ascending, deduplicated.
pub fn month_set(months: impl IntoIterator<Item = u32>) -> Vec<u32> {
    let mut set: Vec<u32> = months.into_iter().collect();
    set.sort_unstable();
    set.dedup();
    set
}

/// Parse a delimited month list like `"3, 6, 12"` or `"3; 6"`. Tokens that
/// are not small integers are ignored.
pub fn parse_month_list(raw: &str) -> Vec<u32> {
    month_set(
        raw.split([',', ';'])
            .filter_map(|part| part.trim().parse::<u32>().ok()),
    )
}
