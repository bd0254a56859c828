#![forbid(unsafe_code)]

//! Filtering and ranking over the catalog.
//!
//! An entry passes when its category and level match the filters and, for a
//! non-empty query, its score is strictly positive. Ranking applies a strict
//! total comparator via a stable sort, so equal-key entries keep a
//! deterministic relative order.
//!
//! Tie-break chain: descending score, featured first, Core before Advanced,
//! then primary-locale title. Title ordering is plain `str::cmp`; it is
//! deterministic and total, which is what the ordering contract requires.

use crate::catalog::{CatalogIndex, DocCategory, DocEntry, DocLevel};
use crate::locale::Locale;
use crate::scorer::score;
use std::cmp::Ordering;

/// Number of entries shown in the "top matches" preview.
pub const TOP_MATCH_CAP: usize = 4;

/// Category filter: the fixed categories plus a wildcard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(DocCategory),
}

impl CategoryFilter {
    fn admits(self, category: DocCategory) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => wanted == category,
        }
    }
}

/// Level filter: Core, Advanced, or the wildcard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LevelFilter {
    #[default]
    All,
    Only(DocLevel),
}

impl LevelFilter {
    fn admits(self, level: DocLevel) -> bool {
        match self {
            LevelFilter::All => true,
            LevelFilter::Only(wanted) => wanted == level,
        }
    }
}

/// Session-scoped filter state. Owned by exactly one session context; every
/// derived collection is a pure function of this plus the static catalog.
#[derive(Debug, Clone, Default)]
pub struct FilterState {
    pub query: String,
    pub category: CategoryFilter,
    pub level: LevelFilter,
}

impl FilterState {
    /// Whether any filter deviates from the defaults. Drives the top-matches
    /// preview and the Escape-resets-filters key.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.query.trim().is_empty()
            || self.category != CategoryFilter::All
            || self.level != LevelFilter::All
    }

    /// Restore all defaults.
    pub fn reset(&mut self) {
        self.query.clear();
        self.category = CategoryFilter::All;
        self.level = LevelFilter::All;
    }
}

/// A catalog entry paired with its score for the current query.
#[derive(Debug, Clone, Copy)]
pub struct RankedDoc {
    pub doc: &'static DocEntry,
    pub score: u32,
}

/// Comparator shared by the navigator list; the palette reuses the score,
/// featured, and title keys without the level key.
fn compare_ranked(a: &RankedDoc, b: &RankedDoc, locale: Locale) -> Ordering {
    b.score
        .cmp(&a.score)
        .then_with(|| b.doc.featured.cmp(&a.doc.featured))
        .then_with(|| {
            let a_core = a.doc.level == DocLevel::Core;
            let b_core = b.doc.level == DocLevel::Core;
            b_core.cmp(&a_core)
        })
        .then_with(|| a.doc.title.get(locale).cmp(b.doc.title.get(locale)))
}

/// Produce the ranked list of entries passing the filters.
#[must_use]
pub fn ranked_docs(
    catalog: CatalogIndex,
    state: &FilterState,
    tokens: &[String],
    locale: Locale,
) -> Vec<RankedDoc> {
    let mut ranked: Vec<RankedDoc> = catalog
        .entries()
        .iter()
        .map(|doc| RankedDoc {
            doc,
            score: score(doc, tokens, locale),
        })
        .filter(|ranked| {
            state.category.admits(ranked.doc.category)
                && state.level.admits(ranked.doc.level)
                && (tokens.is_empty() || ranked.score > 0)
        })
        .collect();
    ranked.sort_by(|a, b| compare_ranked(a, b, locale));
    ranked
}

/// The capped preview slice: first [`TOP_MATCH_CAP`] ranked entries when any
/// filter is active, empty otherwise.
#[must_use]
pub fn top_matches<'a>(ranked: &'a [RankedDoc], state: &FilterState) -> &'a [RankedDoc] {
    if !state.is_active() {
        return &[];
    }
    &ranked[..ranked.len().min(TOP_MATCH_CAP)]
}

/// Per-category match counts honoring the level filter and query but not the
/// category filter, so each category pill shows what selecting it would yield.
#[must_use]
pub fn category_counts(
    catalog: CatalogIndex,
    state: &FilterState,
    tokens: &[String],
    locale: Locale,
) -> [(DocCategory, usize); 6] {
    DocCategory::ALL.map(|category| {
        let count = catalog
            .entries()
            .iter()
            .filter(|doc| {
                doc.category == category
                    && state.level.admits(doc.level)
                    && (tokens.is_empty() || score(doc, tokens, locale) > 0)
            })
            .count();
        (category, count)
    })
}

/// Group an already-ranked list by category, preserving rank order within
/// each group. Categories with no entries yield empty groups.
#[must_use]
pub fn docs_by_category(ranked: &[RankedDoc]) -> [(DocCategory, Vec<RankedDoc>); 6] {
    DocCategory::ALL.map(|category| {
        let docs = ranked
            .iter()
            .filter(|r| r.doc.category == category)
            .copied()
            .collect();
        (category, docs)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenizer::tokenize;

    fn titles(ranked: &[RankedDoc], locale: Locale) -> Vec<&'static str> {
        ranked.iter().map(|r| r.doc.title.get(locale)).collect()
    }

    #[test]
    fn no_filters_passes_whole_catalog() {
        let catalog = CatalogIndex::builtin();
        let state = FilterState::default();
        let ranked = ranked_docs(catalog, &state, &[], Locale::En);
        assert_eq!(ranked.len(), catalog.len());
        assert!(!state.is_active());
    }

    #[test]
    fn config_query_ranks_title_matches_above_keyword_and_path_matches() {
        let catalog = CatalogIndex::builtin();
        let state = FilterState {
            query: "config".into(),
            ..FilterState::default()
        };
        let tokens = tokenize(&state.query);
        let ranked = ranked_docs(catalog, &state, &tokens, Locale::En);
        let names = titles(&ranked, Locale::En);

        let config_ref = names.iter().position(|t| *t == "Config Reference").unwrap();
        let commands_ref = names
            .iter()
            .position(|t| *t == "Commands Reference")
            .unwrap();
        // "Custom Providers" matches only through its category label; both
        // reference entries carry title/keyword weight and must rank above it.
        if let Some(weak) = names.iter().position(|t| *t == "Custom Providers") {
            assert!(config_ref < weak);
            assert!(commands_ref < weak);
        }

        let top = top_matches(&ranked, &state);
        assert!(top.len() <= TOP_MATCH_CAP);
        assert!(!top.is_empty());
    }

    #[test]
    fn security_advanced_intersection_in_title_order() {
        let catalog = CatalogIndex::builtin();
        let state = FilterState {
            query: String::new(),
            category: CategoryFilter::Only(DocCategory::Security),
            level: LevelFilter::Only(DocLevel::Advanced),
        };
        let ranked = ranked_docs(catalog, &state, &[], Locale::En);
        assert_eq!(
            titles(&ranked, Locale::En),
            vec!["Agnostic Security", "Sandboxing"]
        );
    }

    #[test]
    fn empty_query_with_level_filter_keeps_featured_then_core_then_title_order() {
        let catalog = CatalogIndex::builtin();
        let state = FilterState {
            level: LevelFilter::Only(DocLevel::Core),
            ..FilterState::default()
        };
        let ranked = ranked_docs(catalog, &state, &[], Locale::En);
        assert!(ranked.iter().all(|r| r.doc.level == DocLevel::Core));
        // All scores are 0, so featured entries lead, title-ordered within.
        let featured: Vec<bool> = ranked.iter().map(|r| r.doc.featured).collect();
        let first_plain = featured.iter().position(|f| !f).unwrap();
        assert!(featured[..first_plain].iter().all(|f| *f));
        assert!(featured[first_plain..].iter().all(|f| !f));
    }

    #[test]
    fn sort_is_idempotent() {
        let catalog = CatalogIndex::builtin();
        let state = FilterState {
            query: "re".into(),
            ..FilterState::default()
        };
        let tokens = tokenize(&state.query);
        let once = ranked_docs(catalog, &state, &tokens, Locale::En);
        let mut twice = once.clone();
        twice.sort_by(|a, b| compare_ranked(a, b, Locale::En));
        assert_eq!(titles(&once, Locale::En), titles(&twice, Locale::En));
    }

    #[test]
    fn zero_match_query_yields_empty_not_error() {
        let catalog = CatalogIndex::builtin();
        let state = FilterState {
            query: "qqqqzzzz".into(),
            ..FilterState::default()
        };
        let tokens = tokenize(&state.query);
        let ranked = ranked_docs(catalog, &state, &tokens, Locale::En);
        assert!(ranked.is_empty());
        assert!(top_matches(&ranked, &state).is_empty());
    }

    #[test]
    fn top_matches_empty_when_no_filter_active() {
        let catalog = CatalogIndex::builtin();
        let state = FilterState::default();
        let ranked = ranked_docs(catalog, &state, &[], Locale::En);
        assert!(top_matches(&ranked, &state).is_empty());
    }

    #[test]
    fn category_counts_ignore_category_filter_but_honor_level() {
        let catalog = CatalogIndex::builtin();
        let state = FilterState {
            category: CategoryFilter::Only(DocCategory::Security),
            level: LevelFilter::Only(DocLevel::Advanced),
            ..FilterState::default()
        };
        let counts = category_counts(catalog, &state, &[], Locale::En);
        let security = counts
            .iter()
            .find(|(c, _)| *c == DocCategory::Security)
            .unwrap()
            .1;
        let channels = counts
            .iter()
            .find(|(c, _)| *c == DocCategory::Channels)
            .unwrap()
            .1;
        assert_eq!(security, 2);
        // Channels keeps its own advanced count even while Security is the
        // selected category.
        assert_eq!(channels, 2);
    }

    #[test]
    fn grouping_preserves_rank_order() {
        let catalog = CatalogIndex::builtin();
        let state = FilterState::default();
        let ranked = ranked_docs(catalog, &state, &[], Locale::En);
        let groups = docs_by_category(&ranked);
        let regrouped: usize = groups.iter().map(|(_, docs)| docs.len()).sum();
        assert_eq!(regrouped, ranked.len());
        for (category, docs) in &groups {
            assert!(docs.iter().all(|r| r.doc.category == *category));
        }
    }

    #[test]
    fn reset_clears_every_filter() {
        let mut state = FilterState {
            query: "config".into(),
            category: CategoryFilter::Only(DocCategory::Security),
            level: LevelFilter::Only(DocLevel::Core),
        };
        assert!(state.is_active());
        state.reset();
        assert!(!state.is_active());
    }
}
