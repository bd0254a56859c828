#![forbid(unsafe_code)]

//! Weighted multi-field relevance scoring.
//!
//! Each token contributes independently; contributions are summed across
//! tokens and fields. Matching is case-insensitive substring containment,
//! locale-naive: no stemming, no fuzzy distance.
//!
//! # Weights
//!
//! | Field (active locale)        | Weight |
//! |------------------------------|--------|
//! | Title                        | 7      |
//! | Category label               | 5      |
//! | Summary                      | 4      |
//! | Keyword list                 | 3      |
//! | Path                         | 2      |
//! | Any alternate-locale field   | 2      |
//!
//! The alternate-locale bonus is a single fixed weight no matter which of
//! title/summary/category matched, so cross-language discovery works without
//! letting alternate-locale matches outrank the active locale.
//!
//! # Invariants
//!
//! 1. Scores are non-negative integers; an empty token set scores 0.
//! 2. Determinism: same entry, tokens, and locale give the same score.
//! 3. Monotonicity: matching strictly more fields never lowers the score.

use crate::catalog::DocEntry;
use crate::locale::Locale;

const W_TITLE: u32 = 7;
const W_CATEGORY: u32 = 5;
const W_SUMMARY: u32 = 4;
const W_KEYWORDS: u32 = 3;
const W_PATH: u32 = 2;
const W_ALT_LOCALE: u32 = 2;

/// Score one catalog entry against a token set.
///
/// Tokens are expected lowercase (the tokenizer guarantees this); entry text
/// is lowercased here so matching stays case-insensitive for both sides.
#[must_use]
pub fn score(doc: &DocEntry, tokens: &[String], locale: Locale) -> u32 {
    if tokens.is_empty() {
        return 0;
    }

    let alt = locale.other();
    let title = doc.title.get(locale).to_lowercase();
    let summary = doc.summary.get(locale).to_lowercase();
    let category = doc.category.label(locale).to_lowercase();
    let alt_title = doc.title.get(alt).to_lowercase();
    let alt_summary = doc.summary.get(alt).to_lowercase();
    let alt_category = doc.category.label(alt).to_lowercase();
    let path = doc.path.to_lowercase();
    let keywords = doc.keywords.join(" ").to_lowercase();

    let mut total = 0;
    for token in tokens {
        if title.contains(token.as_str()) {
            total += W_TITLE;
        }
        if category.contains(token.as_str()) {
            total += W_CATEGORY;
        }
        if summary.contains(token.as_str()) {
            total += W_SUMMARY;
        }
        if keywords.contains(token.as_str()) {
            total += W_KEYWORDS;
        }
        if path.contains(token.as_str()) {
            total += W_PATH;
        }
        if alt_title.contains(token.as_str())
            || alt_summary.contains(token.as_str())
            || alt_category.contains(token.as_str())
        {
            total += W_ALT_LOCALE;
        }
    }
    total
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{DocCategory, DocLevel};
    use crate::locale::LocalizedText;
    use crate::tokenizer::tokenize;

    fn entry(
        title_en: &'static str,
        summary_en: &'static str,
        path: &'static str,
        keywords: &'static [&'static str],
    ) -> DocEntry {
        DocEntry {
            title: LocalizedText::new(title_en, "占位标题"),
            path,
            category: DocCategory::Configuration,
            summary: LocalizedText::new(summary_en, "占位摘要"),
            level: DocLevel::Core,
            featured: false,
            keywords,
        }
    }

    #[test]
    fn empty_token_set_scores_zero() {
        let doc = entry("Config Reference", "Schema.", "docs/config.md", &[]);
        assert_eq!(score(&doc, &[], Locale::En), 0);
    }

    #[test]
    fn title_outweighs_every_other_single_field() {
        let tokens = tokenize("config");
        let title_only = entry("Config", "Nothing here.", "docs/x.md", &[]);
        let path_only = entry("Other", "Nothing here.", "docs/config.md", &[]);
        let keyword_only = entry("Other", "Nothing here.", "docs/x.md", &["config"]);
        assert!(score(&title_only, &tokens, Locale::En) > score(&path_only, &tokens, Locale::En));
        assert!(
            score(&title_only, &tokens, Locale::En) > score(&keyword_only, &tokens, Locale::En)
        );
    }

    #[test]
    fn more_matching_fields_never_score_lower() {
        let tokens = tokenize("config");
        let sparse = entry("Config", "Nothing here.", "docs/x.md", &[]);
        let dense = entry("Config", "The config schema.", "docs/config.md", &["config"]);
        assert!(score(&dense, &tokens, Locale::En) >= score(&sparse, &tokens, Locale::En));
    }

    #[test]
    fn matching_is_case_insensitive() {
        let doc = entry("Config Reference", "Schema.", "docs/x.md", &[]);
        assert_eq!(
            score(&doc, &tokenize("CONFIG"), Locale::En),
            score(&doc, &tokenize("config"), Locale::En)
        );
    }

    #[test]
    fn alternate_locale_match_scores_a_single_bonus() {
        // Token matches the zh title while the active locale is en: only the
        // combined alternate-locale weight applies.
        let doc = DocEntry {
            title: LocalizedText::new("Config Reference", "配置参考"),
            path: "docs/x.md",
            category: DocCategory::Configuration,
            summary: LocalizedText::new("Schema.", "配置结构。"),
            level: DocLevel::Core,
            featured: false,
            keywords: &[],
        };
        // "参考" appears in alt title only; "配置" appears in alt title, alt
        // summary, and alt category. Both must contribute the same bonus.
        assert_eq!(score(&doc, &tokenize("参考"), Locale::En), 2);
        assert_eq!(score(&doc, &tokenize("配置"), Locale::En), 2);
    }

    #[test]
    fn tokens_sum_independently() {
        let doc = entry("Config Reference", "Schema.", "docs/x.md", &[]);
        let both = score(&doc, &tokenize("config reference"), Locale::En);
        let first = score(&doc, &tokenize("config"), Locale::En);
        let second = score(&doc, &tokenize("reference"), Locale::En);
        assert_eq!(both, first + second);
    }

    #[test]
    fn unmatched_token_contributes_nothing() {
        let doc = entry("Config Reference", "Schema.", "docs/x.md", &[]);
        assert_eq!(score(&doc, &tokenize("zzzz"), Locale::En), 0);
    }
}
