//! Flattening combinators for nested payload shapes.
//!
//! The JSON-backed sites wrap scalar data in recurring envelope shapes: a
//! Strapi relation list (`{data: [{attributes: {…}}]}`), a multilingual
//! `{az, en, ru}` object, or scalar fields that arrive as either strings or
//! numbers. These are modeled once here and reused by every adapter instead
//! of being re-derived per source.

use serde::Deserialize;
use serde_json::Value as Json;

// ---------------------------------------------------------------------------
// Scalar-or-string fields
// ---------------------------------------------------------------------------

/// A scalar field the site serves interchangeably as string, number, or
/// boolean (e.g. `"cashback": "1.5"` on one page and `"cashback": 1.5` on
/// the next).
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Text {
    Str(String),
    Num(serde_json::Number),
    Bool(bool),
}

impl Text {
    pub fn as_text(&self) -> String {
        match self {
            Text::Str(s) => s.clone(),
            Text::Num(n) => n.to_string(),
            Text::Bool(b) => b.to_string(),
        }
    }
}

/// Text of an optional scalar field, `""` when absent.
pub fn text_or_empty(field: &Option<Text>) -> String {
    field.as_ref().map(Text::as_text).unwrap_or_default()
}

// ---------------------------------------------------------------------------
// Multilingual fields
// ---------------------------------------------------------------------------

/// A multilingual `{az, en, ru}` object. Only the `az` variant is carried
/// into the canonical model.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MultiLang {
    #[serde(default)]
    pub az: Option<String>,
    #[serde(default)]
    pub en: Option<String>,
    #[serde(default)]
    pub ru: Option<String>,
}

impl MultiLang {
    pub fn az_or_empty(&self) -> String {
        self.az.clone().unwrap_or_default()
    }
}

// ---------------------------------------------------------------------------
// Strapi relations
// ---------------------------------------------------------------------------

/// A Strapi-style relation: `{data: [{id, attributes: {…}}]}`. `data` may be
/// null, a list, or a single item depending on relation cardinality.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Relation {
    #[serde(default)]
    pub data: Option<RelationData>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RelationData {
    Many(Vec<RelationItem>),
    One(RelationItem),
}

/// One related entity. Attribute lookup falls back to the item's own fields
/// for payloads that skip the `attributes` envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct RelationItem {
    #[serde(default)]
    pub attributes: serde_json::Map<String, Json>,
    #[serde(flatten)]
    pub rest: serde_json::Map<String, Json>,
}

impl RelationItem {
    fn field_text(&self, key: &str) -> String {
        self.attributes
            .get(key)
            .or_else(|| self.rest.get(key))
            .map(json_scalar_text)
            .unwrap_or_default()
    }
}

/// Extract `key` from each related item and join the non-empty values with
/// `sep`: the "list of X under key Y" combinator.
pub fn join_relation(relation: Option<&Relation>, key: &str, sep: &str) -> String {
    let Some(relation) = relation else {
        return String::new();
    };
    let items: &[RelationItem] = match &relation.data {
        None => &[],
        Some(RelationData::Many(items)) => items,
        Some(RelationData::One(item)) => std::slice::from_ref(item),
    };
    let parts: Vec<String> = items
        .iter()
        .map(|item| item.field_text(key))
        .map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty())
        .collect();
    parts.join(sep)
}

/// Render a JSON scalar as plain text; null and containers render empty.
pub fn json_scalar_text(value: &Json) -> String {
    match value {
        Json::String(s) => s.clone(),
        Json::Number(n) => n.to_string(),
        Json::Bool(b) => b.to_string(),
        Json::Null | Json::Array(_) | Json::Object(_) => String::new(),
    }
}
