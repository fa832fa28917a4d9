//! Test builders — ergonomic constructors for `PartnerRecord` fixtures.
//!
//! These builders are designed for readability in test assertions, not for
//! production use. `reward_type` is never set directly: `build` derives it
//! through the real classifier, so fixtures can't violate the invariant that
//! the reward is a pure function of its inputs.

use cpl_core::classify::classify;
use cpl_core::record::{month_set, PartnerRecord, Source};

// ---------------------------------------------------------------------------
// PartnerRecordBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for [`PartnerRecord`] test fixtures.
///
/// # Example
///
/// ```rust
/// let record = PartnerRecordBuilder::new("Kontakt Home")
///     .source(Source::Unibank)
///     .id("77")
///     .cashback("2")
///     .months([3, 6, 12])
///     .build();
/// ```
pub struct PartnerRecordBuilder {
    source: Source,
    id: Option<String>,
    name: String,
    category: String,
    cashback: Option<String>,
    taksit_months: Vec<u32>,
    city: String,
    address: String,
    phone: String,
    website: String,
    image_url: String,
}

impl PartnerRecordBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            source: Source::Bolkart,
            id: None,
            name: name.into(),
            category: String::new(),
            cashback: None,
            taksit_months: Vec::new(),
            city: String::new(),
            address: String::new(),
            phone: String::new(),
            website: String::new(),
            image_url: String::new(),
        }
    }

    pub fn source(mut self, source: Source) -> Self {
        self.source = source;
        self
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn cashback(mut self, cashback: impl Into<String>) -> Self {
        self.cashback = Some(cashback.into());
        self
    }

    pub fn months(mut self, months: impl IntoIterator<Item = u32>) -> Self {
        self.taksit_months = month_set(months);
        self
    }

    pub fn city(mut self, city: impl Into<String>) -> Self {
        self.city = city.into();
        self
    }

    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.address = address.into();
        self
    }

    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = phone.into();
        self
    }

    pub fn website(mut self, website: impl Into<String>) -> Self {
        self.website = website.into();
        self
    }

    pub fn image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = image_url.into();
        self
    }

    pub fn build(self) -> PartnerRecord {
        PartnerRecord {
            reward_type: classify(self.source, self.cashback.as_deref(), &self.taksit_months),
            source: self.source,
            id: self.id,
            name: self.name,
            category: self.category,
            cashback: self.cashback,
            taksit_months: self.taksit_months,
            city: self.city,
            address: self.address,
            phone: self.phone,
            website: self.website,
            image_url: self.image_url,
        }
    }
}

// ---------------------------------------------------------------------------
// Convenience constructors
// ---------------------------------------------------------------------------

/// A cashback-classified record.
pub fn cashback_record(source: Source, name: &str, cashback: &str) -> PartnerRecord {
    PartnerRecordBuilder::new(name)
        .source(source)
        .cashback(cashback)
        .build()
}

/// An installment-only record.
pub fn taksit_record(
    source: Source,
    name: &str,
    months: impl IntoIterator<Item = u32>,
) -> PartnerRecord {
    PartnerRecordBuilder::new(name)
        .source(source)
        .months(months)
        .build()
}

/// A record with no reward signal at all.
pub fn unknown_record(source: Source, name: &str) -> PartnerRecord {
    PartnerRecordBuilder::new(name).source(source).build()
}
