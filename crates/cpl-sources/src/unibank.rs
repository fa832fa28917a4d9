//! unibank — server-rendered U-Card partner listing.
//!
//! Each partner appears twice per page (desktop and mobile variants); only
//! the desktop `hidden--mobile` blocks are parsed. The last page repeats, so
//! the batch is deduplicated by partner id, keeping the first occurrence.

use crate::html::split_blocks;
use crate::{SourceAdapter, SourceError};
use cpl_core::classify::classify;
use cpl_core::record::{month_set, normalize_cashback, PartnerRecord, Source};
use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

pub struct Unibank;

const BASE: &str = "https://unibank.az";

/// Desktop variant marker; the `hidden--desc` mobile duplicate is skipped.
const BLOCK_MARKER: &str =
    "<div class=\"feature feature--alb feature--cashbackpartners hidden--mobile\"";

#[derive(Debug, Clone, PartialEq)]
pub struct RawPartner {
    pub id: String,
    pub name: String,
    pub category: String,
    pub cashback_percent: String,
    pub taksit_months: Vec<u32>,
    pub detail_url: String,
    pub image_url: String,
}

static ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"data-partner="(\d+)""#).expect("id pattern compiles"));
static NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"feature__value--partners">\s*([^\s<][^<]*?)\s*</div>"#)
        .expect("name pattern compiles")
});
static CATEGORY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"feature__desc--partners1">\s*([^\s<][^<]*?)\s*</div>"#)
        .expect("category pattern compiles")
});
static PERCENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"data-percent="([^"]*)""#).expect("percent pattern compiles"));
static IMG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"feature__img[^>]+src="([^"]+)""#).expect("img pattern compiles"));
static DETAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"href="(/[^"]*partner/\d+[^"]*)""#).expect("detail pattern compiles")
});
static MONTH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<div class="month(\d+) feature--taksit-item"#).expect("month pattern compiles")
});

fn capture(re: &Regex, block: &str) -> String {
    re.captures(block)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().trim().to_string())
        .unwrap_or_default()
}

fn absolutize(url: String) -> String {
    if url.is_empty() || url.starts_with("http") {
        url
    } else {
        format!("{BASE}{url}")
    }
}

fn parse_block(block: &str) -> Option<RawPartner> {
    let id = capture(&ID, block);
    if id.is_empty() {
        return None;
    }
    Some(RawPartner {
        id,
        name: capture(&NAME, block),
        category: capture(&CATEGORY, block),
        cashback_percent: capture(&PERCENT, block),
        taksit_months: month_set(
            MONTH
                .captures_iter(block)
                .filter_map(|c| c.get(1))
                .filter_map(|m| m.as_str().parse::<u32>().ok()),
        ),
        detail_url: absolutize(capture(&DETAIL, block)),
        image_url: absolutize(capture(&IMG, block)),
    })
}

impl SourceAdapter for Unibank {
    type Raw = RawPartner;

    fn source(&self) -> Source {
        Source::Unibank
    }

    fn extract(&self, payload: &str) -> Result<Vec<RawPartner>, SourceError> {
        Ok(split_blocks(payload, BLOCK_MARKER)
            .into_iter()
            .filter_map(parse_block)
            .collect())
    }

    fn normalize(&self, raw: &RawPartner) -> Option<PartnerRecord> {
        let name = raw.name.trim().to_string();
        if name.is_empty() {
            return None;
        }
        let cashback = normalize_cashback(&raw.cashback_percent);
        Some(PartnerRecord {
            source: Source::Unibank,
            id: Some(raw.id.clone()),
            name,
            category: raw.category.trim().to_string(),
            reward_type: classify(Source::Unibank, cashback.as_deref(), &raw.taksit_months),
            cashback,
            taksit_months: raw.taksit_months.clone(),
            city: String::new(),
            address: String::new(),
            phone: String::new(),
            website: raw.detail_url.clone(),
            image_url: raw.image_url.clone(),
        })
    }

    /// Pagination cycles back to the first page at the end; keep the first
    /// occurrence of each partner id.
    fn finish(&self, records: Vec<PartnerRecord>) -> Vec<PartnerRecord> {
        let before = records.len();
        let mut seen: HashSet<String> = HashSet::new();
        let records: Vec<PartnerRecord> = records
            .into_iter()
            .filter(|r| match &r.id {
                Some(id) => seen.insert(id.clone()),
                None => true,
            })
            .collect();
        if records.len() < before {
            tracing::debug!(
                source = %Source::Unibank,
                removed = before - records.len(),
                "deduplicated repeated pagination content"
            );
        }
        records
    }
}
