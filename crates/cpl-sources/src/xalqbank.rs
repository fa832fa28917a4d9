//! xalqbank — partners API returning a page-block tree.
//!
//! The partner list sits in `data.blocks[type == "card-partners"].blocks`.
//! Address, phone, and website are not separate fields: they are mined out
//! of each partner's `body` HTML fragment.

use crate::flatten::{text_or_empty, Text};
use crate::html::strip_tags;
use crate::{SourceAdapter, SourceError};
use cpl_core::classify::classify;
use cpl_core::record::{clean, normalize_cashback, PartnerRecord, Source};
use regex::Regex;
use serde::Deserialize;
use std::sync::LazyLock;

pub struct Xalqbank;

#[derive(Debug, Deserialize)]
pub struct Response {
    pub data: Payload,
}

#[derive(Debug, Deserialize)]
pub struct Payload {
    #[serde(default)]
    pub blocks: Vec<Block>,
}

#[derive(Debug, Deserialize)]
pub struct Block {
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub blocks: Vec<RawPartner>,
}

#[derive(Debug, Deserialize)]
pub struct RawPartner {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub percent: Option<Text>,
    #[serde(default)]
    pub category: Option<Titled>,
    #[serde(default)]
    pub region: Option<Titled>,
    #[serde(default)]
    pub image: Option<Image>,
    #[serde(default)]
    pub body: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Titled {
    #[serde(default)]
    pub title: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Image {
    #[serde(default)]
    pub src: Option<String>,
}

static PHONE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?:Tel[:\s]*)?(\+?994[\d\s\-\(\)]{7,}|\(?0\d{2}\)?[\s\-]?\d{3}[\s\-]?\d{2}[\s\-]?\d{2})",
    )
    .expect("phone pattern compiles")
});
static HREF: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"href=["']([^"']+)["']"#).expect("href pattern compiles"));
static PARAGRAPH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<p>(.*?)</p>").expect("paragraph pattern compiles"));

/// Mine `(address, phone, website)` out of a partner's body HTML.
///
/// Typical body: `<p>Address…</p><p>Tel: +994…</p><p><a href="…">…</a></p>`.
pub fn extract_body_fields(body_html: &str) -> (String, String, String) {
    let phones: Vec<String> = PHONE
        .captures_iter(body_html)
        .filter_map(|c| c.get(1))
        .take(3)
        .map(|m| m.as_str().trim().to_string())
        .collect();
    let phone = phones.join("; ");

    let links: Vec<&str> = HREF
        .captures_iter(body_html)
        .filter_map(|c| c.get(1))
        .map(|m| m.as_str())
        .collect();
    let is_social =
        |link: &str| link.to_lowercase().contains("instagram") || link.to_lowercase().contains("facebook");
    let website = links
        .iter()
        .find(|l| l.starts_with("http") && !l.contains("xalqbank") && !is_social(l))
        .or_else(|| links.iter().find(|l| is_social(l)))
        .map(|l| l.to_string())
        .unwrap_or_default();

    let mut address = String::new();
    for paragraph in PARAGRAPH.captures_iter(body_html) {
        let inner = paragraph.get(1).map(|m| m.as_str()).unwrap_or_default();
        let text = strip_tags(inner);
        if !text.is_empty() && !text.contains("Tel") && !text.starts_with('+') && !inner.contains("href")
        {
            address = text;
            break;
        }
    }

    (address, phone, website)
}

impl SourceAdapter for Xalqbank {
    type Raw = RawPartner;

    fn source(&self) -> Source {
        Source::Xalqbank
    }

    fn extract(&self, payload: &str) -> Result<Vec<RawPartner>, SourceError> {
        let response: Response = serde_json::from_str(payload)?;
        Ok(response
            .data
            .blocks
            .into_iter()
            .find(|b| b.kind.as_deref() == Some("card-partners"))
            .map(|b| b.blocks)
            .unwrap_or_default())
    }

    fn normalize(&self, raw: &RawPartner) -> Option<PartnerRecord> {
        let name = clean(raw.title.as_deref().unwrap_or_default());
        if name.is_empty() {
            return None;
        }
        let cashback = normalize_cashback(&text_or_empty(&raw.percent));
        let (address, phone, website) =
            extract_body_fields(raw.body.as_deref().unwrap_or_default());
        let titled = |t: &Option<Titled>| {
            clean(
                t.as_ref()
                    .and_then(|t| t.title.as_deref())
                    .unwrap_or_default(),
            )
        };
        Some(PartnerRecord {
            source: Source::Xalqbank,
            id: raw.id.map(|id| id.to_string()),
            name,
            category: titled(&raw.category),
            reward_type: classify(Source::Xalqbank, cashback.as_deref(), &[]),
            cashback,
            taksit_months: Vec::new(),
            city: titled(&raw.region),
            address,
            phone,
            website,
            image_url: clean(
                raw.image
                    .as_ref()
                    .and_then(|i| i.src.as_deref())
                    .unwrap_or_default(),
            ),
        })
    }
}
