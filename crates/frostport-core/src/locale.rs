#![forbid(unsafe_code)]

//! The two supported display locales and bilingual text.
//!
//! Every user-facing label in the portal is a [`LocalizedText`] carrying both
//! locales by construction, so a missing translation cannot exist at runtime.
//! Locale resolution follows a fixed precedence: explicit override, then the
//! persisted preference, then the host environment. Malformed values at any
//! stage fall through to the next one.

use std::fmt;

/// A display locale. Exactly two are supported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    #[default]
    En,
    Zh,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::En, Locale::Zh];

    /// The other supported locale.
    #[must_use]
    pub fn other(self) -> Self {
        match self {
            Locale::En => Locale::Zh,
            Locale::Zh => Locale::En,
        }
    }

    /// Stable identifier used for persistence and CLI flags.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Zh => "zh",
        }
    }

    /// Parse a locale identifier leniently.
    ///
    /// Accepts raw environment values like `zh_CN.UTF-8` or `en-US@latin`:
    /// codeset and modifier suffixes are stripped and only the language
    /// subtag is considered. Unknown languages yield `None` rather than a
    /// default so callers can continue down the precedence chain.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        let raw = raw.split('@').next().unwrap_or(raw);
        let raw = raw.split('.').next().unwrap_or(raw).trim();
        if raw.is_empty() {
            return None;
        }
        let lang = raw
            .split(['-', '_'])
            .next()
            .unwrap_or(raw)
            .to_ascii_lowercase();
        match lang.as_str() {
            "en" => Some(Locale::En),
            "zh" => Some(Locale::Zh),
            _ => None,
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolve the active locale from the three configuration sources.
///
/// Precedence: explicit override (CLI flag), then the persisted preference,
/// then the host environment language. Values that fail to parse are ignored
/// in favor of the next source; the final fallback is English.
#[must_use]
pub fn resolve_locale(
    override_raw: Option<&str>,
    persisted: Option<&str>,
    env_lang: Option<&str>,
) -> Locale {
    override_raw
        .and_then(Locale::parse)
        .or_else(|| persisted.and_then(Locale::parse))
        .or_else(|| env_lang.and_then(Locale::parse))
        .unwrap_or_default()
}

/// A string pair carrying both supported locales.
///
/// Invariant: both fields are always populated; the type cannot represent a
/// partially translated label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocalizedText {
    pub en: &'static str,
    pub zh: &'static str,
}

impl LocalizedText {
    #[must_use]
    pub const fn new(en: &'static str, zh: &'static str) -> Self {
        Self { en, zh }
    }

    /// The text for the given locale.
    #[must_use]
    pub fn get(&self, locale: Locale) -> &'static str {
        match locale {
            Locale::En => self.en,
            Locale::Zh => self.zh,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_strips_codeset_and_modifier() {
        assert_eq!(Locale::parse("zh_CN.UTF-8"), Some(Locale::Zh));
        assert_eq!(Locale::parse("en-US@latin"), Some(Locale::En));
        assert_eq!(Locale::parse("  EN  "), Some(Locale::En));
    }

    #[test]
    fn parse_rejects_unknown_languages() {
        assert_eq!(Locale::parse("fr_FR.UTF-8"), None);
        assert_eq!(Locale::parse(""), None);
        assert_eq!(Locale::parse("C"), None);
    }

    #[test]
    fn resolve_prefers_override() {
        let locale = resolve_locale(Some("zh"), Some("en"), Some("en_US.UTF-8"));
        assert_eq!(locale, Locale::Zh);
    }

    #[test]
    fn resolve_falls_through_malformed_override() {
        let locale = resolve_locale(Some("klingon"), Some("zh"), None);
        assert_eq!(locale, Locale::Zh);
    }

    #[test]
    fn resolve_uses_env_when_nothing_persisted() {
        let locale = resolve_locale(None, None, Some("zh_CN.UTF-8"));
        assert_eq!(locale, Locale::Zh);
    }

    #[test]
    fn resolve_defaults_to_english() {
        assert_eq!(resolve_locale(None, None, None), Locale::En);
        assert_eq!(resolve_locale(Some("xx"), Some("yy"), Some("zz")), Locale::En);
    }

    #[test]
    fn other_is_an_involution() {
        for locale in Locale::ALL {
            assert_eq!(locale.other().other(), locale);
        }
    }

    #[test]
    fn localized_text_returns_requested_side() {
        let text = LocalizedText::new("Docs", "文档");
        assert_eq!(text.get(Locale::En), "Docs");
        assert_eq!(text.get(Locale::Zh), "文档");
    }
}
