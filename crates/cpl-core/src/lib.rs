//! cpl-core — Card Partner Listings core library.
//!
//! This crate exposes the pipeline stages as public modules, plus the shared
//! types used across all of them.
//!
//! # Architecture
//!
//! ```text
//! Locator ──► Scanner ──► Parser ──► Normalizers ──► Classifier ──► Aggregator ──► Export
//! ```
//!
//! Everything here is synchronous and pure: each stage consumes immutable
//! input and hands ownership of its output to the next stage. The per-source
//! normalizers themselves live in `cpl-sources`; this crate provides the
//! literal machinery they share and the canonical record model they target.

pub mod catalog;
pub mod classify;
pub mod config;
pub mod export;
pub mod extract;
pub mod parse;
pub mod record;
pub mod value;

pub use catalog::{combine, Catalog, SourceCount};
pub use classify::classify;
pub use config::Config;
pub use extract::ExtractError;
pub use parse::ParseError;
pub use record::{PartnerRecord, RewardType, Source, SourceBatch};
pub use value::Value;
