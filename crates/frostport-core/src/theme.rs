#![forbid(unsafe_code)]

//! Theme preference model.
//!
//! The persisted preference is a [`ThemeMode`] (`system`/`dark`/`light`);
//! `System` defers to the detected host preference. Detection reads the
//! conventional `COLORFGBG` terminal hint and falls back to dark, which is
//! the safe default for terminal rendering.

use crate::locale::{Locale, LocalizedText};
use std::fmt;

/// User-selected theme preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    System,
    Dark,
    Light,
}

/// A concrete theme after resolving `System` against the host preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolvedTheme {
    Dark,
    Light,
}

impl ThemeMode {
    pub const ALL: [ThemeMode; 3] = [ThemeMode::System, ThemeMode::Dark, ThemeMode::Light];

    /// Stable identifier used for persistence.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::System => "system",
            ThemeMode::Dark => "dark",
            ThemeMode::Light => "light",
        }
    }

    /// Parse a persisted theme value. Unknown strings yield `None` so the
    /// caller falls back to the default instead of propagating garbage.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "system" | "auto" => Some(ThemeMode::System),
            "dark" => Some(ThemeMode::Dark),
            "light" => Some(ThemeMode::Light),
            _ => None,
        }
    }

    /// Resolve against the detected host preference.
    #[must_use]
    pub fn resolve(self, system: ResolvedTheme) -> ResolvedTheme {
        match self {
            ThemeMode::System => system,
            ThemeMode::Dark => ResolvedTheme::Dark,
            ThemeMode::Light => ResolvedTheme::Light,
        }
    }

    /// Display label for the mode toggle.
    #[must_use]
    pub fn label(self, locale: Locale) -> &'static str {
        match self {
            ThemeMode::System => LocalizedText::new("Auto", "自动").get(locale),
            ThemeMode::Dark => LocalizedText::new("Dark", "深色").get(locale),
            ThemeMode::Light => LocalizedText::new("Light", "浅色").get(locale),
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Detect the host color-scheme preference from a `COLORFGBG` value.
///
/// The convention is `"<fg>;<bg>"` with ANSI palette indices; a background
/// index of 0-6 or 8 indicates a dark terminal. Missing or malformed values
/// default to dark.
#[must_use]
pub fn detect_system_theme(colorfgbg: Option<&str>) -> ResolvedTheme {
    let Some(raw) = colorfgbg else {
        return ResolvedTheme::Dark;
    };
    let Some(bg) = raw.rsplit(';').next().and_then(|s| s.trim().parse::<u8>().ok()) else {
        return ResolvedTheme::Dark;
    };
    if bg == 7 || bg >= 9 {
        ResolvedTheme::Light
    } else {
        ResolvedTheme::Dark
    }
}

/// Whether the host asks for reduced motion. Terminal frontends have no media
/// query, so this honors the conventional environment opt-out.
#[must_use]
pub fn reduced_motion(env_value: Option<&str>) -> bool {
    matches!(env_value, Some(v) if !v.trim().is_empty() && v.trim() != "0")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_known_modes() {
        assert_eq!(ThemeMode::parse("dark"), Some(ThemeMode::Dark));
        assert_eq!(ThemeMode::parse(" LIGHT "), Some(ThemeMode::Light));
        assert_eq!(ThemeMode::parse("system"), Some(ThemeMode::System));
        assert_eq!(ThemeMode::parse("auto"), Some(ThemeMode::System));
    }

    #[test]
    fn parse_rejects_unknown_modes() {
        assert_eq!(ThemeMode::parse("solarized"), None);
        assert_eq!(ThemeMode::parse(""), None);
    }

    #[test]
    fn system_mode_follows_detection() {
        assert_eq!(
            ThemeMode::System.resolve(ResolvedTheme::Light),
            ResolvedTheme::Light
        );
        assert_eq!(
            ThemeMode::Dark.resolve(ResolvedTheme::Light),
            ResolvedTheme::Dark
        );
    }

    #[test]
    fn detect_reads_background_index() {
        assert_eq!(detect_system_theme(Some("0;15")), ResolvedTheme::Light);
        assert_eq!(detect_system_theme(Some("15;0")), ResolvedTheme::Dark);
        assert_eq!(detect_system_theme(Some("garbage")), ResolvedTheme::Dark);
        assert_eq!(detect_system_theme(None), ResolvedTheme::Dark);
    }

    #[test]
    fn reduced_motion_requires_nonzero_value() {
        assert!(reduced_motion(Some("1")));
        assert!(!reduced_motion(Some("0")));
        assert!(!reduced_motion(Some("  ")));
        assert!(!reduced_motion(None));
    }
}
