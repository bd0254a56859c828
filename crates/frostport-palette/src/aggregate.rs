#![forbid(unsafe_code)]

//! Merging actions and docs into one palette sequence.
//!
//! The aggregated order is load-bearing: matching actions first, then the
//! doc subset, both contiguous. With an empty query the doc subset is the
//! featured-or-Core selection; with a query it is every positively scored
//! entry, ranked by score, featured flag, then primary-locale title, and
//! capped at [`PALETTE_DOC_CAP`].

use crate::action::{ActionRegistry, Effect};
use frostport_core::catalog::{CatalogIndex, DocEntry, DocLevel};
use frostport_core::locale::Locale;
use frostport_core::scorer::score;

/// Maximum number of doc entries in the palette.
pub const PALETTE_DOC_CAP: usize = 8;

/// Which source a palette entry came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Action,
    Doc,
}

/// A uniformly-typed palette entry. Selection and highlighting operate on
/// this without caring which side it came from.
#[derive(Debug, Clone)]
pub struct PaletteEntry {
    pub id: String,
    pub kind: EntryKind,
    pub label: String,
    pub hint: String,
    pub meta: Option<&'static str>,
    pub effect: Effect,
}

fn doc_subset(
    catalog: CatalogIndex,
    tokens: &[String],
    locale: Locale,
) -> Vec<(&'static DocEntry, u32)> {
    let mut docs: Vec<(&'static DocEntry, u32)> = catalog
        .entries()
        .iter()
        .map(|doc| (doc, score(doc, tokens, locale)))
        .filter(|(doc, doc_score)| {
            if tokens.is_empty() {
                doc.featured || doc.level == DocLevel::Core
            } else {
                *doc_score > 0
            }
        })
        .collect();
    docs.sort_by(|(a, a_score), (b, b_score)| {
        b_score
            .cmp(a_score)
            .then_with(|| b.featured.cmp(&a.featured))
            .then_with(|| a.title.get(locale).cmp(b.title.get(locale)))
    });
    docs.truncate(PALETTE_DOC_CAP);
    docs
}

/// Build the aggregated entry sequence for the current palette query.
#[must_use]
pub fn aggregate(
    registry: &ActionRegistry,
    catalog: CatalogIndex,
    tokens: &[String],
    locale: Locale,
) -> Vec<PaletteEntry> {
    let mut entries: Vec<PaletteEntry> = registry
        .matching(tokens, locale)
        .into_iter()
        .map(|action| PaletteEntry {
            id: format!("action-{}", action.id),
            kind: EntryKind::Action,
            label: action.label.get(locale).to_string(),
            hint: action.hint.get(locale).to_string(),
            meta: None,
            effect: action.effect.clone(),
        })
        .collect();

    entries.extend(doc_subset(catalog, tokens, locale).into_iter().map(
        |(doc, _)| PaletteEntry {
            id: format!("doc-{}", doc.path),
            kind: EntryKind::Doc,
            label: doc.title.get(locale).to_string(),
            hint: doc.summary.get(locale).to_string(),
            meta: Some(doc.path),
            effect: Effect::OpenUrl(doc.url()),
        },
    ));

    tracing::trace!(entries = entries.len(), "palette aggregated");
    entries
}
