#![forbid(unsafe_code)]

//! Persisted user preferences.
//!
//! Theme mode and locale survive across sessions in a small JSON file.
//! Loads are lenient: a missing or corrupt file degrades to defaults and a
//! warning, never a startup failure. Saves are atomic via the write-rename
//! pattern so a crash mid-write cannot leave a torn file.

use std::env;
use std::fmt;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

// ─────────────────────────────────────────────────────────────────────────────
// Error Types
// ─────────────────────────────────────────────────────────────────────────────

/// Errors that can occur while persisting preferences.
#[derive(Debug)]
pub enum PrefsError {
    /// I/O error during file operations.
    Io(std::io::Error),
    /// JSON encode/decode error.
    Serialization(String),
}

impl fmt::Display for PrefsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrefsError::Io(e) => write!(f, "I/O error: {e}"),
            PrefsError::Serialization(msg) => write!(f, "serialization error: {msg}"),
        }
    }
}

impl std::error::Error for PrefsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PrefsError::Io(e) => Some(e),
            PrefsError::Serialization(_) => None,
        }
    }
}

impl From<std::io::Error> for PrefsError {
    fn from(e: std::io::Error) -> Self {
        PrefsError::Io(e)
    }
}

/// Result type for preference operations.
pub type PrefsResult<T> = Result<T, PrefsError>;

// ─────────────────────────────────────────────────────────────────────────────
// Preferences
// ─────────────────────────────────────────────────────────────────────────────

/// Raw persisted preferences. Values are stored as the strings the UI wrote;
/// interpretation (and rejection of unknown values) happens at load sites.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prefs {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
}

/// File-backed preference store.
#[derive(Debug, Clone)]
pub struct PrefsStore {
    path: PathBuf,
}

impl PrefsStore {
    #[must_use]
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load preferences, degrading to defaults on any failure.
    ///
    /// A missing file is the normal first-run case and does not log; corrupt
    /// JSON logs a warning and is otherwise treated as empty.
    #[must_use]
    pub fn load(&self) -> Prefs {
        match fs::read_to_string(&self.path) {
            Ok(raw) => match serde_json::from_str(&raw) {
                Ok(prefs) => prefs,
                Err(e) => {
                    tracing::warn!(path = %self.path.display(), error = %e, "corrupt prefs file, using defaults");
                    Prefs::default()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Prefs::default(),
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "cannot read prefs file, using defaults");
                Prefs::default()
            }
        }
    }

    /// Save preferences atomically: write to a sibling temp file, then rename
    /// over the target.
    pub fn save(&self, prefs: &Prefs) -> PrefsResult<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(prefs)
            .map_err(|e| PrefsError::Serialization(e.to_string()))?;
        let tmp = self.path.with_extension("json.tmp");
        {
            let mut file = fs::File::create(&tmp)?;
            file.write_all(json.as_bytes())?;
            file.write_all(b"\n")?;
            file.sync_all()?;
        }
        fs::rename(&tmp, &self.path)?;
        tracing::debug!(path = %self.path.display(), "prefs saved");
        Ok(())
    }
}

/// Resolve the preferences file path: explicit override, then
/// `FROSTPORT_PREFS`, then `~/.config/frostport/prefs.json`, then the
/// working directory as a last resort.
#[must_use]
pub fn default_path(override_path: Option<&str>) -> PathBuf {
    if let Some(path) = override_path {
        return PathBuf::from(path);
    }
    if let Ok(path) = env::var("FROSTPORT_PREFS") {
        return PathBuf::from(path);
    }
    if let Ok(home) = env::var("HOME") {
        return Path::new(&home)
            .join(".config")
            .join("frostport")
            .join("prefs.json");
    }
    PathBuf::from("frostport-prefs.json")
}
