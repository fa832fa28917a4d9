//! bankrespublika — one server-rendered page with all partner branches in a
//! single `contentTable`.
//!
//! The table tag is unclosed in the live markup, so rows are read from the
//! opening tag onward. Each row is three cells: name, address, city. Rows
//! are branch locations, not unique companies.

use crate::html::text_content;
use crate::{SourceAdapter, SourceError};
use cpl_core::classify::classify;
use cpl_core::record::{PartnerRecord, Source};
use regex::Regex;
use std::sync::LazyLock;

pub struct Bankrespublika;

const TABLE_MARKER: &str = "<table class=\"contentTable\"";

/// One table row: three strip-tagged, entity-decoded strings.
#[derive(Debug, Clone, PartialEq)]
pub struct RawRow {
    pub name: String,
    pub address: String,
    pub city: String,
}

static TR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<tr>(.*?)</tr>").expect("tr pattern compiles"));
static TD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<td[^>]*>(.*?)</td>").expect("td pattern compiles"));

impl SourceAdapter for Bankrespublika {
    type Raw = RawRow;

    fn source(&self) -> Source {
        Source::Bankrespublika
    }

    fn extract(&self, payload: &str) -> Result<Vec<RawRow>, SourceError> {
        let table_start = payload
            .find(TABLE_MARKER)
            .ok_or_else(|| SourceError::Shape("contentTable not found in page".into()))?;
        let table_region = &payload[table_start..];

        let mut rows = Vec::new();
        for tr in TR.captures_iter(table_region) {
            let inner = tr.get(1).map(|m| m.as_str()).unwrap_or_default();
            let cells: Vec<String> = TD
                .captures_iter(inner)
                .filter_map(|c| c.get(1))
                .map(|m| text_content(m.as_str()))
                .collect();
            if cells.len() < 3 {
                continue;
            }
            rows.push(RawRow {
                name: cells[0].clone(),
                address: cells[1].clone(),
                city: cells[2].clone(),
            });
        }
        Ok(rows)
    }

    fn normalize(&self, raw: &RawRow) -> Option<PartnerRecord> {
        let name = raw.name.trim().to_string();
        if name.is_empty() {
            return None;
        }
        Some(PartnerRecord {
            source: Source::Bankrespublika,
            id: None,
            name,
            category: String::new(),
            cashback: None,
            reward_type: classify(Source::Bankrespublika, None, &[]),
            taksit_months: Vec::new(),
            city: raw.city.clone(),
            address: raw.address.clone(),
            phone: String::new(),
            website: String::new(),
            image_url: String::new(),
        })
    }
}
