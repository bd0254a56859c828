#![forbid(unsafe_code)]

//! The fixed registry of invocable actions.
//!
//! Actions are defined once per session; identifiers and the set itself are
//! static, while labels and hints are bilingual. Instead of binding boxed
//! closures, each action carries a closed [`Effect`] that the session
//! dispatches exhaustively, keeping the run path testable as data.

use frostport_core::catalog::doc_url;
use frostport_core::locale::{Locale, LocalizedText};
use frostport_core::theme::ThemeMode;

/// The effect bound to a palette entry. Every variant is handled
/// exhaustively where entries are activated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Scroll the main view to the docs navigator section.
    JumpToDocs,
    /// Open a fully-qualified URL in a detached browser context.
    OpenUrl(String),
    /// Toggle between the two display locales.
    ToggleLocale,
    /// Set the theme preference.
    SetTheme(ThemeMode),
}

/// One invocable command with bilingual copy and search keywords.
#[derive(Debug, Clone)]
pub struct PaletteAction {
    pub id: &'static str,
    pub label: LocalizedText,
    pub hint: LocalizedText,
    pub keywords: &'static [&'static str],
    pub effect: Effect,
}

impl PaletteAction {
    /// Whether every token appears somewhere in the label, hint, or keyword
    /// list for the active locale (AND across tokens, OR across fields).
    #[must_use]
    pub fn matches(&self, tokens: &[String], locale: Locale) -> bool {
        if tokens.is_empty() {
            return true;
        }
        let haystack = format!(
            "{} {} {}",
            self.label.get(locale),
            self.hint.get(locale),
            self.keywords.join(" ")
        )
        .to_lowercase();
        tokens.iter().all(|token| haystack.contains(token.as_str()))
    }
}

/// The static set of portal actions.
#[derive(Debug, Clone)]
pub struct ActionRegistry {
    actions: Vec<PaletteAction>,
}

impl ActionRegistry {
    /// The standard portal registry: navigation, outbound links, and the
    /// locale/theme toggles.
    #[must_use]
    pub fn standard() -> Self {
        let theme_hint = LocalizedText::new("Update visual theme mode", "更新视觉主题模式");
        let actions = vec![
            PaletteAction {
                id: "jump-docs",
                label: LocalizedText::new("Jump to Docs Navigator", "跳转到文档导航"),
                hint: LocalizedText::new("Scroll to the main docs section", "滚动到主文档区域"),
                keywords: &["docs", "navigator", "文档", "导航"],
                effect: Effect::JumpToDocs,
            },
            PaletteAction {
                id: "open-docs-home",
                label: LocalizedText::new("Open Docs Home", "打开文档首页"),
                hint: LocalizedText::new("Open docs hub in the browser", "在浏览器打开文档总入口"),
                keywords: &["docs", "home", "文档", "首页"],
                effect: Effect::OpenUrl(doc_url("docs/README.md")),
            },
            PaletteAction {
                id: "open-repo",
                label: LocalizedText::new("Open Repository", "打开仓库"),
                hint: LocalizedText::new("Open the project repository", "打开项目仓库"),
                keywords: &["repo", "github", "仓库"],
                effect: Effect::OpenUrl(doc_url("README.md")),
            },
            PaletteAction {
                id: "switch-language",
                label: LocalizedText::new("Switch Language", "切换语言"),
                hint: LocalizedText::new("Toggle between English and Chinese", "中英文切换"),
                keywords: &["language", "locale", "语言", "中英"],
                effect: Effect::ToggleLocale,
            },
            PaletteAction {
                id: "theme-dark",
                label: LocalizedText::new("Set Theme: Dark", "设置主题：深色"),
                hint: theme_hint,
                keywords: &["theme", "dark", "深色", "主题"],
                effect: Effect::SetTheme(ThemeMode::Dark),
            },
            PaletteAction {
                id: "theme-light",
                label: LocalizedText::new("Set Theme: Light", "设置主题：浅色"),
                hint: theme_hint,
                keywords: &["theme", "light", "浅色", "主题"],
                effect: Effect::SetTheme(ThemeMode::Light),
            },
            PaletteAction {
                id: "theme-system",
                label: LocalizedText::new("Set Theme: Auto", "设置主题：自动"),
                hint: theme_hint,
                keywords: &["theme", "auto", "system", "自动"],
                effect: Effect::SetTheme(ThemeMode::System),
            },
        ];
        Self { actions }
    }

    #[must_use]
    pub fn actions(&self) -> &[PaletteAction] {
        &self.actions
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Actions whose copy contains every query token.
    #[must_use]
    pub fn matching(&self, tokens: &[String], locale: Locale) -> Vec<&PaletteAction> {
        self.actions
            .iter()
            .filter(|action| action.matches(tokens, locale))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use frostport_core::tokenizer::tokenize;
    use std::collections::HashSet;

    #[test]
    fn registry_ids_are_unique() {
        let registry = ActionRegistry::standard();
        let mut seen = HashSet::new();
        for action in registry.actions() {
            assert!(seen.insert(action.id), "duplicate id: {}", action.id);
        }
    }

    #[test]
    fn empty_tokens_match_every_action() {
        let registry = ActionRegistry::standard();
        assert_eq!(registry.matching(&[], Locale::En).len(), registry.len());
    }

    #[test]
    fn tokens_and_across_fields() {
        let registry = ActionRegistry::standard();
        // "theme dark" spans label and keywords of exactly one action.
        let matched = registry.matching(&tokenize("theme dark"), Locale::En);
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].id, "theme-dark");
    }

    #[test]
    fn keywords_match_in_either_script() {
        let registry = ActionRegistry::standard();
        let matched = registry.matching(&tokenize("语言"), Locale::En);
        assert!(matched.iter().any(|a| a.id == "switch-language"));
    }

    #[test]
    fn unmatched_token_excludes_action() {
        let registry = ActionRegistry::standard();
        assert!(registry.matching(&tokenize("zzzz"), Locale::En).is_empty());
    }

    #[test]
    fn outbound_actions_carry_full_urls() {
        let registry = ActionRegistry::standard();
        let repo = registry
            .actions()
            .iter()
            .find(|a| a.id == "open-repo")
            .unwrap();
        match &repo.effect {
            Effect::OpenUrl(url) => assert!(url.starts_with("https://")),
            other => panic!("unexpected effect: {other:?}"),
        }
    }
}
