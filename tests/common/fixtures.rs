//! Static payload corpora used across harnesses.
//!
//! One constant per source, shaped exactly like the live payloads the fetch
//! layer saves to disk: JSON pages for the API-backed sites, server-rendered
//! HTML for the rest, and a minified bundle chunk for the literal-embedded
//! source. All fixtures are deterministic so repeated pipeline runs must
//! produce byte-identical output.

use cpl_core::{catalog, Catalog, Config, Source, SourceBatch};

/// bolkart page 1: one full partner, one zero-cashback installment partner.
pub const BOLKART_PAGE_1: &str = r#"{
  "totalElements": 4,
  "data": [
    {
      "id": 101,
      "name": {"az": "Araz Market", "en": "Araz Market", "ru": "Араз Маркет"},
      "phoneNumber": "+994 12 555 00 11",
      "siteUrl": "https://arazmarket.az",
      "cashback": 1.5,
      "partnerCategory": {"id": 7, "name": {"az": "Marketlər", "en": "Markets", "ru": null}},
      "taksits": [{"taksit": 3}, {"taksit": 6}],
      "icon": {"url": "https://cdn.bolkart.az/icons/araz.png"},
      "logoUrl": null,
      "status": "ACTIVE",
      "popularity": 120
    },
    {
      "id": 102,
      "name": {"az": "Təmiz Paltar", "en": null, "ru": null},
      "cashback": "0",
      "partnerCategory": {"id": 9, "name": {"az": "Xidmətlər", "en": null, "ru": null}},
      "taksits": [{"taksit": 3}],
      "logoUrl": "https://cdn.bolkart.az/logos/temiz.png"
    }
  ]
}"#;

/// bolkart page 2: a blank-name partner (dropped) and a signal-less one.
pub const BOLKART_PAGE_2: &str = r#"{
  "totalElements": 4,
  "data": [
    {
      "id": 103,
      "name": {"az": "   ", "en": "Ghost Partner", "ru": null}
    },
    {
      "id": 104,
      "name": {"az": "Kofe Evi", "en": "Coffee House", "ru": null},
      "partnerCategory": {"id": 3, "name": {"az": "Kafelər", "en": null, "ru": null}}
    }
  ]
}"#;

/// tamkart bundle chunk: module junk around a `let s=[…]` literal with
/// unquoted keys, all three quote styles, and a trailing comma.
pub const TAMKART_CHUNK: &str = concat!(
    "\"use strict\";(self.webpackChunk_N_E=self.webpackChunk_N_E||[])",
    ".push([[5243],{60617:function(e,t,n){n.d(t,{Z:function(){return d}});",
    "let s=[",
    "{id:1,name:\"Oba Market\",city:'Bakı',category:`Market`,",
    "cashback:\"1%\",taksits:\"\",address:\"Koroğlu pr. 14\",map:\"40.41, 49.87\"},",
    "{id:2,name:'Grand Electronics',city:\"Gəncə\",category:\"Elektronika\",",
    "cashback:\"\",taksits:\"3, 6, 12\",address:\"Atatürk pr. 2\",parent:null},",
    "{id:3,name:\"  \",city:\"\",category:\"\",cashback:\"\",taksits:\"\"},",
    "];let d={partners:s}}}]);"
);

/// birbank Next.js data page with Strapi relation lists.
pub const BIRBANK_PAGE: &str = r#"{
  "pageProps": {
    "initialState": {
      "partners": {
        "pagination": {"total": 2, "pageCount": 1},
        "partnersData": [
          {
            "id": 3301,
            "attributes": {
              "name": "Bravo Supermarket",
              "cashback": "2",
              "categories": {"data": [{"id": 1, "attributes": {"categoryName": "Market"}},
                                       {"id": 2, "attributes": {"categoryName": "Food"}}]},
              "cities": {"data": [{"id": 9, "attributes": {"name": "Bakı"}}]},
              "installments": {"data": [{"id": 5, "attributes": {"duration": 3}},
                                         {"id": 6, "attributes": {"duration": 12}}]},
              "phone": "*1111",
              "website": "https://bravomarket.az",
              "image": {"data": {"attributes": {"url": "https://cdn.birbank.az/bravo.png"}}}
            }
          },
          {
            "id": 3302,
            "attributes": {"name": "Book House", "image": {"data": null}}
          }
        ]
      }
    }
  }
}"#;

/// rabitabank partners API page; the second entry carries the non-numeric
/// cashback text the classifier must preserve.
pub const RABITABANK_PAGE: &str = r#"{
  "partners": [
    {"id": 12, "title": "Gourmet Café", "cash_back": "5%",
     "category": "Restoran", "url": "https://gourmet.az",
     "image": {"src": "https://rabitabank.com/img/gourmet.png"}},
    {"id": 13, "title": "Zeta Travel", "cash_back": "N/A", "category": "Turizm"}
  ]
}"#;

/// unibank server-rendered page: desktop blocks only are parsed; the mobile
/// duplicate at the end must be ignored.
pub const UNIBANK_PAGE: &str = concat!(
    "<html><body>",
    "<div class=\"feature feature--alb feature--cashbackpartners hidden--mobile\" ",
    "data-partner=\"1\" data-cat=\"4\" data-percent=\"2\">",
    "<a class=\"anchor\" href=\"/az/cards/ucardpartner/1\"></a>",
    "<img class=\"feature__img\" src=\"/upload/partners/kontakt.png\">",
    "<div class=\"feature__value feature__value--partners\"> Kontakt Home </div>",
    "<div class=\"feature__desc feature__desc--partners1\"> Elektronika </div>",
    "<div class=\"month3 feature--taksit-item\"></div>",
    "<div class=\"month12 feature--taksit-item\"></div>",
    "</div>",
    "<div class=\"feature feature--alb feature--cashbackpartners hidden--mobile\" ",
    "data-partner=\"2\" data-cat=\"4\" data-percent=\"\">",
    "<a class=\"anchor\" href=\"/az/cards/ucardpartner/2\"></a>",
    "<img class=\"feature__img\" src=\"/upload/partners/irshad.png\">",
    "<div class=\"feature__value feature__value--partners\"> Irshad </div>",
    "<div class=\"feature__desc feature__desc--partners1\"> Elektronika </div>",
    "<div class=\"month6 feature--taksit-item\"></div>",
    "<div class=\"month12 feature--taksit-item\"></div>",
    "</div>",
    "<div class=\"feature feature--alb feature--cashbackpartners hidden--desc\" ",
    "data-partner=\"1\" data-percent=\"2\"></div>",
    "</body></html>"
);

/// xalqbank page-block API response; contact details live in body HTML.
pub const XALQBANK_RESPONSE: &str = r#"{
  "data": {
    "blocks": [
      {"type": "hero", "blocks": []},
      {"type": "card-partners", "blocks": [
        {
          "id": 41,
          "title": "Emporium",
          "percent": "3",
          "category": {"id": 2, "title": "Geyim"},
          "region": {"id": 1, "title": "Bakı"},
          "image": {"src": "https://www.xalqbank.az/img/emporium.png"},
          "body": "<p>Nizami küç. 203</p><p>Tel: +994 12 404 77 88</p><p><a href=\"https://emporium.az\">emporium.az</a></p>"
        }
      ]}
    ]
  }
}"#;

/// pashabank miles page: two partner blocks, one with a condition note.
pub const PASHABANK_PAGE: &str = concat!(
    "<ul class=\"filters\">",
    "<li><a data-category=\"0\" href=\"#\">Hamısı</a></li>",
    "<li><a data-category=\"12\" href=\"#\">Restoranlar</a></li>",
    "</ul>",
    "<div class=\"partner-block\" data-product-category=\"12\">",
    "<img data-src=\"/sites/default/files/sumakh.png\">",
    "<h2 class=\"partner__name\">Sumakh &amp; Co</h2>",
    "<p class=\"description\">1 AZN məbləğinə əlavə ",
    "<span class=\"tooltip\">nağdsız ödənişdə</span> 1.5 Mil hesablanır</p>",
    "</div>",
    "<div class=\"partner-block\" data-product-category=\"12\">",
    "<h2 class=\"partner__name\">Qaynana</h2>",
    "<p class=\"partners__type\">Restoran</p>",
    "<p class=\"description\">1 AZN məbləğinə əlavə 2 Mil hesablanır</p>",
    "</div>"
);

/// bankrespublika page with the unclosed contentTable: one entity-encoded
/// row, one blank-name row, one spacer row, one plain row.
pub const BANKRESPUBLIKA_PAGE: &str = concat!(
    "<html><body><div>intro</div>",
    "<table class=\"contentTable\" border=\"0\">",
    "<tr><td><strong>A&ccedil;ıq Market</strong></td>",
    "<td>Nizami k&uuml;&ccedil;. 5</td><td>Bak&#305;</td></tr>",
    "<tr><td>&nbsp;</td><td>no name here</td><td>Gəncə</td></tr>",
    "<tr><td colspan=\"3\">spacer</td></tr>",
    "<tr><td>Tea House</td><td>28 May, 7</td><td>Sumqayıt</td></tr>",
    "</body></html>"
);

// ---------------------------------------------------------------------------
// Pipeline helpers
// ---------------------------------------------------------------------------

/// The saved payload list for one source, as the driver would read it off
/// disk (paginated sources have one element per page).
pub fn payloads_for(source: Source) -> Vec<String> {
    let pages: &[&str] = match source {
        Source::Bolkart => &[BOLKART_PAGE_1, BOLKART_PAGE_2],
        Source::Tamkart => &[TAMKART_CHUNK],
        Source::Birbank => &[BIRBANK_PAGE],
        Source::Rabitabank => &[RABITABANK_PAGE],
        Source::Unibank => &[UNIBANK_PAGE],
        Source::Xalqbank => &[XALQBANK_RESPONSE],
        Source::Pashabank => &[PASHABANK_PAGE],
        Source::Bankrespublika => &[BANKRESPUBLIKA_PAGE],
    };
    pages.iter().map(|p| p.to_string()).collect()
}

/// Run one source's adapter over its fixture payloads.
pub fn run_fixture_source(source: Source) -> SourceBatch {
    cpl_sources::run_source(source, &payloads_for(source), &Config::defaults())
        .unwrap_or_else(|err| panic!("fixture payload for {source} must extract: {err}"))
}

/// Run the whole fixture pipeline, all sources in canonical order.
pub fn run_fixture_pipeline() -> Catalog {
    catalog::combine(Source::ALL.into_iter().map(run_fixture_source).collect())
}
