//! pashabank — Miles & Smiles partner page (Drupal, server-rendered).
//!
//! All partners sit in one page as `partner-block` divs. The reward is a
//! miles-per-AZN figure inside the description paragraph, phrased
//! `1 AZN məbləğinə əlavə [condition] N Mil hesablanır`; the optional
//! condition text between the fixed phrases is kept as the address field.
//! Category names come from the inline type paragraph, falling back to the
//! page's filter-link map.

use crate::html::{split_blocks, strip_tags, unescape};
use crate::{SourceAdapter, SourceError};
use cpl_core::classify::classify;
use cpl_core::record::{normalize_cashback, PartnerRecord, Source};
use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;

pub struct Pashabank;

const BASE: &str = "https://miles.pashabank.az";
const BLOCK_MARKER: &str = "<div class=\"partner-block\"";

#[derive(Debug, Clone, PartialEq)]
pub struct RawPartner {
    pub name: String,
    pub category: String,
    pub miles_per_azn: String,
    pub condition: String,
    pub image_url: String,
}

static FILTER_CATEGORY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"data-category="(\d+)"[^>]*>([^<]+)<"#).expect("filter pattern compiles")
});
static BLOCK_CATEGORY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"data-product-category="(\d+)""#).expect("category pattern compiles")
});
static IMG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"data-src="([^"]+)""#).expect("img pattern compiles"));
static NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?s)class="partner__name">(.*?)</h2>"#).expect("name pattern compiles")
});
static PARTNER_TYPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?s)class="partners__type">(.*?)</p>"#).expect("type pattern compiles")
});
static DESCRIPTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?s)class="description">(.*?)</p>"#).expect("description pattern compiles")
});
static MILES: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([\d.]+)\s*Mil\s*hesablanır").expect("miles pattern compiles")
});
static LEAD_PHRASE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"1 AZN məbləğinə əlavə\s*").expect("lead phrase pattern compiles")
});
static TAIL_PHRASE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[\d.]+\s*Mil hesablanır").expect("tail phrase pattern compiles")
});

/// Category id → name, taken from the filter links ("all" id 0 excluded).
fn build_category_map(page_html: &str) -> HashMap<String, String> {
    FILTER_CATEGORY
        .captures_iter(page_html)
        .filter_map(|c| Some((c.get(1)?.as_str(), c.get(2)?.as_str())))
        .filter(|(id, _)| *id != "0")
        .map(|(id, name)| (id.to_string(), name.trim().to_string()))
        .collect()
}

fn first_capture(re: &Regex, block: &str) -> String {
    re.captures(block)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}

/// The miles figure from the plain description text.
fn extract_miles(description: &str) -> String {
    MILES
        .captures(description)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}

/// The condition note: the description minus the fixed lead/tail phrases.
fn extract_condition(description_html: &str) -> String {
    let text = strip_tags(description_html);
    let text = LEAD_PHRASE.replace_all(&text, "");
    TAIL_PHRASE.replace_all(&text, "").trim().to_string()
}

impl SourceAdapter for Pashabank {
    type Raw = RawPartner;

    fn source(&self) -> Source {
        Source::Pashabank
    }

    fn extract(&self, payload: &str) -> Result<Vec<RawPartner>, SourceError> {
        let categories = build_category_map(payload);
        let raws = split_blocks(payload, BLOCK_MARKER)
            .into_iter()
            .map(|block| {
                let description_html = first_capture(&DESCRIPTION, block);
                let description_text = strip_tags(&description_html);
                let category_id = first_capture(&BLOCK_CATEGORY, block);
                let inline_type = strip_tags(&first_capture(&PARTNER_TYPE, block));
                let category = if inline_type.is_empty() {
                    categories.get(&category_id).cloned().unwrap_or_default()
                } else {
                    inline_type
                };
                let image = first_capture(&IMG, block);
                RawPartner {
                    name: unescape(&strip_tags(&first_capture(&NAME, block))),
                    category,
                    miles_per_azn: extract_miles(&description_text),
                    condition: extract_condition(&description_html),
                    image_url: if image.is_empty() || image.starts_with("http") {
                        image
                    } else {
                        format!("{BASE}{image}")
                    },
                }
            })
            .collect();
        Ok(raws)
    }

    fn normalize(&self, raw: &RawPartner) -> Option<PartnerRecord> {
        let name = raw.name.trim().to_string();
        if name.is_empty() {
            return None;
        }
        // cashback carries the miles-per-AZN figure for this source.
        let cashback = normalize_cashback(&raw.miles_per_azn);
        Some(PartnerRecord {
            source: Source::Pashabank,
            id: None,
            name,
            category: raw.category.clone(),
            reward_type: classify(Source::Pashabank, cashback.as_deref(), &[]),
            cashback,
            taksit_months: Vec::new(),
            city: String::new(),
            address: raw.condition.clone(),
            phone: String::new(),
            website: String::new(),
            image_url: raw.image_url.clone(),
        })
    }
}
