//! tamkart — partner list embedded as a JS array literal in a Next.js
//! bundle chunk.
//!
//! There is no pagination API: the site ships the whole array in a static
//! chunk, assigned as `let s=[…]`. The fetch layer locates the chunk via the
//! build manifest and saves its text; this adapter finds the literal behind
//! the marker, scans its balanced span, parses it permissively, and projects
//! each element object into a raw record.

use crate::{SourceAdapter, SourceError};
use cpl_core::classify::classify;
use cpl_core::config::Config;
use cpl_core::extract;
use cpl_core::parse::{parse_with_limit, DEFAULT_MAX_DEPTH};
use cpl_core::record::{clean, normalize_cashback, parse_month_list, PartnerRecord, Source};
use cpl_core::value::Value;

pub struct Tamkart {
    marker: String,
    max_depth: usize,
}

impl Tamkart {
    pub fn new(marker: impl Into<String>, max_depth: usize) -> Self {
        Tamkart {
            marker: marker.into(),
            max_depth,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Tamkart::new(&config.tamkart.literal_marker, config.parser.max_depth)
    }
}

impl Default for Tamkart {
    fn default() -> Self {
        Tamkart::new("let s=", DEFAULT_MAX_DEPTH)
    }
}

impl SourceAdapter for Tamkart {
    type Raw = Value;

    fn source(&self) -> Source {
        Source::Tamkart
    }

    fn extract(&self, payload: &str) -> Result<Vec<Value>, SourceError> {
        let literal = extract::extract(payload, &self.marker)?;
        match parse_with_limit(literal, self.max_depth)? {
            Value::List(items) => Ok(items),
            Value::Object(_) => Err(SourceError::Shape(
                "expected an array literal behind the marker, got an object".into(),
            )),
            _ => Err(SourceError::Shape(
                "expected an array literal behind the marker, got a scalar".into(),
            )),
        }
    }

    fn normalize(&self, raw: &Value) -> Option<PartnerRecord> {
        if !raw.is_object() {
            return None;
        }
        let name = clean(&raw.member_text("name"));
        if name.is_empty() {
            return None;
        }
        let id = clean(&raw.member_text("id"));
        let cashback = normalize_cashback(&raw.member_text("cashback"));
        let taksit_months = parse_month_list(&raw.member_text("taksits"));
        Some(PartnerRecord {
            source: Source::Tamkart,
            id: (!id.is_empty()).then_some(id),
            name,
            category: clean(&raw.member_text("category")),
            reward_type: classify(Source::Tamkart, cashback.as_deref(), &taksit_months),
            cashback,
            taksit_months,
            city: clean(&raw.member_text("city")),
            address: clean(&raw.member_text("address")),
            phone: String::new(),
            website: String::new(),
            image_url: String::new(),
        })
    }
}
