//! bolkart — paginated partners API with nested multilingual JSON.
//!
//! Each page is `{totalElements, data: [partner, …]}`; names, descriptions,
//! and category names are `{az, en, ru}` objects, installment options are a
//! list of `{taksit: N}` entries, and the logo may live in either `logoUrl`
//! or the nested `icon.url`.

use crate::flatten::{text_or_empty, MultiLang, Text};
use crate::{SourceAdapter, SourceError};
use cpl_core::classify::classify;
use cpl_core::record::{clean, month_set, normalize_cashback, PartnerRecord, Source};
use serde::Deserialize;

pub struct Bolkart;

#[derive(Debug, Deserialize)]
pub struct Page {
    #[serde(default)]
    pub data: Vec<RawPartner>,
}

#[derive(Debug, Deserialize)]
pub struct RawPartner {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: Option<MultiLang>,
    #[serde(default, rename = "phoneNumber")]
    pub phone_number: Option<String>,
    #[serde(default, rename = "siteUrl")]
    pub site_url: Option<String>,
    #[serde(default)]
    pub cashback: Option<Text>,
    #[serde(default, rename = "partnerCategory")]
    pub partner_category: Option<PartnerCategory>,
    #[serde(default)]
    pub taksits: Vec<TaksitEntry>,
    #[serde(default)]
    pub icon: Option<Icon>,
    #[serde(default, rename = "logoUrl")]
    pub logo_url: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct PartnerCategory {
    #[serde(default)]
    pub name: Option<MultiLang>,
}

#[derive(Debug, Deserialize)]
pub struct TaksitEntry {
    #[serde(default)]
    pub taksit: Option<Text>,
}

#[derive(Debug, Deserialize)]
pub struct Icon {
    #[serde(default)]
    pub url: Option<String>,
}

impl SourceAdapter for Bolkart {
    type Raw = RawPartner;

    fn source(&self) -> Source {
        Source::Bolkart
    }

    fn extract(&self, payload: &str) -> Result<Vec<RawPartner>, SourceError> {
        let page: Page = serde_json::from_str(payload)?;
        Ok(page.data)
    }

    fn normalize(&self, raw: &RawPartner) -> Option<PartnerRecord> {
        let name = clean(&raw.name.as_ref().map(MultiLang::az_or_empty).unwrap_or_default());
        if name.is_empty() {
            return None;
        }
        let category = clean(
            &raw.partner_category
                .as_ref()
                .and_then(|c| c.name.as_ref())
                .map(MultiLang::az_or_empty)
                .unwrap_or_default(),
        );
        let cashback = normalize_cashback(&text_or_empty(&raw.cashback));
        let taksit_months = month_set(
            raw.taksits
                .iter()
                .filter_map(|t| t.taksit.as_ref())
                .filter_map(|t| t.as_text().trim().parse::<u32>().ok()),
        );
        let logo = clean(raw.logo_url.as_deref().unwrap_or_default());
        let image_url = if logo.is_empty() {
            clean(
                raw.icon
                    .as_ref()
                    .and_then(|i| i.url.as_deref())
                    .unwrap_or_default(),
            )
        } else {
            logo
        };
        Some(PartnerRecord {
            source: Source::Bolkart,
            id: raw.id.map(|id| id.to_string()),
            name,
            category,
            reward_type: classify(Source::Bolkart, cashback.as_deref(), &taksit_months),
            cashback,
            taksit_months,
            city: String::new(),
            address: String::new(),
            phone: clean(raw.phone_number.as_deref().unwrap_or_default()),
            website: clean(raw.site_url.as_deref().unwrap_or_default()),
            image_url,
        })
    }
}
