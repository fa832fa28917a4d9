//! rabitabank — flat partners API (Laravel, session + XSRF handled by the
//! fetch layer). One payload per page; an empty `partners` list ends the
//! pagination upstream.

use crate::flatten::{text_or_empty, Text};
use crate::{SourceAdapter, SourceError};
use cpl_core::classify::classify;
use cpl_core::record::{clean, normalize_cashback, PartnerRecord, Source};
use serde::Deserialize;

pub struct Rabitabank;

#[derive(Debug, Deserialize)]
pub struct Page {
    #[serde(default)]
    pub partners: Vec<RawPartner>,
}

#[derive(Debug, Deserialize)]
pub struct RawPartner {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub cash_back: Option<Text>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub image: Option<Image>,
}

#[derive(Debug, Deserialize)]
pub struct Image {
    #[serde(default)]
    pub src: Option<String>,
}

impl SourceAdapter for Rabitabank {
    type Raw = RawPartner;

    fn source(&self) -> Source {
        Source::Rabitabank
    }

    fn extract(&self, payload: &str) -> Result<Vec<RawPartner>, SourceError> {
        let page: Page = serde_json::from_str(payload)?;
        Ok(page.partners)
    }

    fn normalize(&self, raw: &RawPartner) -> Option<PartnerRecord> {
        let name = clean(raw.title.as_deref().unwrap_or_default());
        if name.is_empty() {
            return None;
        }
        let cashback = normalize_cashback(&text_or_empty(&raw.cash_back));
        Some(PartnerRecord {
            source: Source::Rabitabank,
            id: raw.id.map(|id| id.to_string()),
            name,
            category: clean(raw.category.as_deref().unwrap_or_default()),
            reward_type: classify(Source::Rabitabank, cashback.as_deref(), &[]),
            cashback,
            taksit_months: Vec::new(),
            city: String::new(),
            address: String::new(),
            phone: String::new(),
            website: clean(raw.url.as_deref().unwrap_or_default()),
            image_url: clean(
                raw.image
                    .as_ref()
                    .and_then(|i| i.src.as_deref())
                    .unwrap_or_default(),
            ),
        })
    }
}
