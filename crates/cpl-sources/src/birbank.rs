//! birbank — Next.js data endpoint backed by a Strapi CMS.
//!
//! Each page is `pageProps.initialState.partners.partnersData`, a list of
//! `{id, attributes}` entities whose relation fields (categories, cities,
//! installments) are Strapi `{data: [{attributes: {…}}]}` lists flattened to
//! `"; "`-joined strings.

use crate::flatten::{join_relation, text_or_empty, Relation, Text};
use crate::{SourceAdapter, SourceError};
use cpl_core::classify::classify;
use cpl_core::record::{clean, normalize_cashback, parse_month_list, PartnerRecord, Source};
use serde::Deserialize;

pub struct Birbank;

#[derive(Debug, Deserialize)]
pub struct Page {
    #[serde(rename = "pageProps")]
    pub page_props: PageProps,
}

#[derive(Debug, Deserialize)]
pub struct PageProps {
    #[serde(rename = "initialState")]
    pub initial_state: InitialState,
}

#[derive(Debug, Deserialize)]
pub struct InitialState {
    pub partners: PartnersState,
}

#[derive(Debug, Deserialize)]
pub struct PartnersState {
    #[serde(default, rename = "partnersData")]
    pub partners_data: Vec<RawPartner>,
}

#[derive(Debug, Deserialize)]
pub struct RawPartner {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub attributes: Attributes,
}

#[derive(Debug, Default, Deserialize)]
pub struct Attributes {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub cashback: Option<Text>,
    #[serde(default)]
    pub categories: Option<Relation>,
    #[serde(default)]
    pub cities: Option<Relation>,
    #[serde(default)]
    pub installments: Option<Relation>,
    #[serde(default)]
    pub phone: Option<Text>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub image: Option<Image>,
}

#[derive(Debug, Deserialize)]
pub struct Image {
    #[serde(default)]
    pub data: Option<ImageData>,
}

#[derive(Debug, Deserialize)]
pub struct ImageData {
    #[serde(default)]
    pub attributes: Option<ImageAttributes>,
}

#[derive(Debug, Deserialize)]
pub struct ImageAttributes {
    #[serde(default)]
    pub url: Option<String>,
}

impl SourceAdapter for Birbank {
    type Raw = RawPartner;

    fn source(&self) -> Source {
        Source::Birbank
    }

    fn extract(&self, payload: &str) -> Result<Vec<RawPartner>, SourceError> {
        let page: Page = serde_json::from_str(payload)?;
        Ok(page.page_props.initial_state.partners.partners_data)
    }

    fn normalize(&self, raw: &RawPartner) -> Option<PartnerRecord> {
        let a = &raw.attributes;
        let name = clean(a.name.as_deref().unwrap_or_default());
        if name.is_empty() {
            return None;
        }
        let cashback = normalize_cashback(&text_or_empty(&a.cashback));
        // Installment durations arrive as a relation list; join then parse
        // the joined text so string and numeric durations both land.
        let taksit_months =
            parse_month_list(&join_relation(a.installments.as_ref(), "duration", "; "));
        let image_url = raw
            .attributes
            .image
            .as_ref()
            .and_then(|i| i.data.as_ref())
            .and_then(|d| d.attributes.as_ref())
            .and_then(|attrs| attrs.url.clone())
            .unwrap_or_default();
        Some(PartnerRecord {
            source: Source::Birbank,
            id: raw.id.map(|id| id.to_string()),
            name,
            category: join_relation(a.categories.as_ref(), "categoryName", "; "),
            reward_type: classify(Source::Birbank, cashback.as_deref(), &taksit_months),
            cashback,
            taksit_months,
            city: join_relation(a.cities.as_ref(), "name", "; "),
            address: String::new(),
            phone: clean(&text_or_empty(&a.phone)),
            website: clean(a.website.as_deref().unwrap_or_default()),
            image_url: clean(&image_url),
        })
    }
}
