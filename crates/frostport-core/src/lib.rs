#![forbid(unsafe_code)]

//! Core data model and search primitives for the Frostport docs portal.
//!
//! This crate is presentation-free: everything here is a pure function over
//! the static bilingual catalog plus explicit state passed in by the caller.
//! The frontend recomputes derived collections synchronously on every state
//! change; nothing in this crate spawns threads or performs I/O.
//!
//! - [`locale`]: the two supported display locales and bilingual text.
//! - [`theme`]: theme preference model and host-environment detection.
//! - [`catalog`]: the static document catalog and URL resolution.
//! - [`tokenizer`]: query normalization into search tokens.
//! - [`scorer`]: weighted multi-field relevance scoring.
//! - [`filter`]: predicate + ranking over the catalog.
//! - [`highlight`]: literal match emphasis for displayed text.

pub mod catalog;
pub mod filter;
pub mod highlight;
pub mod locale;
pub mod scorer;
pub mod theme;
pub mod tokenizer;

pub use catalog::{CatalogIndex, DocCategory, DocEntry, DocLevel, doc_url};
pub use filter::{CategoryFilter, FilterState, LevelFilter, RankedDoc};
pub use highlight::Segment;
pub use locale::{Locale, LocalizedText};
pub use theme::{ResolvedTheme, ThemeMode};
