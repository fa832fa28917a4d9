//! Reward classifier — derives [`RewardType`] from normalized fields.
//!
//! A pure, total function: the same `(source, cashback, taksit_months)`
//! always yields the same reward type, and unrecognized input degrades to
//! [`RewardType::Unknown`], never to an error.

use crate::record::{parse_decimal, RewardType, Source};
use rust_decimal::Decimal;

/// Classify one record's reward.
///
/// Rules, in priority order:
/// 1. The miles-denominated source is always [`RewardType::Miles`].
/// 2. A present, non-empty cashback value that parses as a number > 0 is
///    [`RewardType::Cashback`]. Non-numeric, non-empty cashback text also
///    classifies as cashback, kept that way for compatibility with
///    previously published output; see the pinning test in
///    `tests/classify_harness.rs` before changing it. A value that parses
///    as <= 0 falls through.
/// 3. Any installment months present make it [`RewardType::TaksitOnly`].
/// 4. Otherwise [`RewardType::Unknown`].
pub fn classify(source: Source, cashback: Option<&str>, taksit_months: &[u32]) -> RewardType {
    if source == Source::Pashabank {
        return RewardType::Miles;
    }
    if let Some(raw) = cashback {
        let raw = raw.trim();
        if !raw.is_empty() {
            match parse_decimal(raw) {
                Some(value) if value > Decimal::ZERO => return RewardType::Cashback,
                Some(_) => {} // zero or negative
                None => return RewardType::Cashback,
            }
        }
    }
    if !taksit_months.is_empty() {
        return RewardType::TaksitOnly;
    }
    RewardType::Unknown
}
