#![forbid(unsafe_code)]

//! Bilingual interface copy.
//!
//! Every user-visible string lives here as a [`LocalizedText`] pair so the
//! locale toggle swaps the whole surface at once.

use frostport_core::locale::LocalizedText;

pub const APP_TITLE: LocalizedText =
    LocalizedText::new("Frostport Docs Portal", "Frostport 文档门户");
pub const SEARCH_LABEL: LocalizedText = LocalizedText::new("Search docs", "搜索文档");
pub const SEARCH_PLACEHOLDER: LocalizedText = LocalizedText::new(
    "Type to filter by title, category, summary, keywords, or path",
    "输入以按标题、分类、摘要、关键词或路径过滤",
);
pub const FEATURED_HEADING: LocalizedText = LocalizedText::new("Featured", "精选");
pub const TOP_MATCHES_HEADING: LocalizedText = LocalizedText::new("Top matches", "最佳匹配");
pub const ALL_CATEGORIES: LocalizedText = LocalizedText::new("All categories", "全部分类");
pub const ALL_LEVELS: LocalizedText = LocalizedText::new("All levels", "全部层级");
pub const RESULT_COUNT: LocalizedText = LocalizedText::new("results", "条结果");
pub const NO_MATCH_TITLE: LocalizedText = LocalizedText::new("No documents match", "没有匹配的文档");
pub const NO_MATCH_HINT: LocalizedText = LocalizedText::new(
    "Try a broader query, for example:",
    "试试更宽泛的查询，例如：",
);
pub const NO_MATCH_RESET: LocalizedText =
    LocalizedText::new("Press Esc to clear filters", "按 Esc 清除过滤条件");
pub const PALETTE_TITLE: LocalizedText = LocalizedText::new("Command Palette", "命令面板");
pub const PALETTE_ACTIONS_HEADING: LocalizedText = LocalizedText::new("Actions", "操作");
pub const PALETTE_DOCS_HEADING: LocalizedText = LocalizedText::new("Documents", "文档");
pub const PALETTE_EMPTY: LocalizedText = LocalizedText::new("No entries", "没有条目");
pub const FOOTER_HINTS: LocalizedText = LocalizedText::new(
    "Ctrl+K palette · / search · ↑↓ move · Enter open · Esc clear · q quit",
    "Ctrl+K 面板 · / 搜索 · ↑↓ 移动 · Enter 打开 · Esc 清除 · q 退出",
);

/// Suggested queries shown when a filter combination matches nothing.
pub const NO_MATCH_SUGGESTIONS: &[&str] = &["config", "security"];

#[cfg(test)]
mod tests {
    use super::*;
    use frostport_core::locale::Locale;

    #[test]
    fn all_copy_has_both_scripts() {
        let pairs = [
            APP_TITLE,
            SEARCH_LABEL,
            SEARCH_PLACEHOLDER,
            FEATURED_HEADING,
            TOP_MATCHES_HEADING,
            ALL_CATEGORIES,
            ALL_LEVELS,
            RESULT_COUNT,
            NO_MATCH_TITLE,
            NO_MATCH_HINT,
            NO_MATCH_RESET,
            PALETTE_TITLE,
            PALETTE_ACTIONS_HEADING,
            PALETTE_DOCS_HEADING,
            PALETTE_EMPTY,
            FOOTER_HINTS,
        ];
        for text in pairs {
            assert!(!text.get(Locale::En).is_empty());
            assert!(!text.get(Locale::Zh).is_empty());
        }
    }

    #[test]
    fn suggestions_are_lowercase_queries() {
        for s in NO_MATCH_SUGGESTIONS {
            assert_eq!(*s, s.to_lowercase());
        }
    }
}
