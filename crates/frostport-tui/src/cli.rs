#![forbid(unsafe_code)]

//! Command-line argument parsing for the portal binary.
//!
//! Parses args manually (no external dependencies) to keep the binary lean.
//! Supports environment variable overrides via `FROSTPORT_*` prefix; explicit
//! flags win over the environment.

use std::env;
use std::process;

const VERSION: &str = env!("CARGO_PKG_VERSION");

const HELP_TEXT: &str = "\
Frostport Docs Portal — bilingual catalog search and command palette

USAGE:
    frostport [OPTIONS]

OPTIONS:
    --lang=LOCALE        Display locale: 'en' or 'zh' (overrides saved choice)
    --theme=MODE         Theme mode: 'dark', 'light', or 'system'
    --prefs=PATH         Preferences file path
    --help, -h           Show this help message
    --version, -V        Show version

KEYBINDINGS:
    Ctrl+K          Toggle the command palette
    /               Focus the search field
    Down / Tab      Next entry
    Up / Shift-Tab  Previous entry
    Enter           Activate the selected entry
    Esc             Close palette, or clear filters and leave search
    q / Ctrl+C      Quit

ENVIRONMENT VARIABLES:
    FROSTPORT_LANG       Override display locale (en|zh)
    FROSTPORT_THEME      Override theme mode (dark|light|system)
    FROSTPORT_PREFS      Override preferences file path
    FROSTPORT_LOG        Tracing filter directive (e.g. debug)
    FROSTPORT_LOG_FILE   Log file path (default: frostport.log)
    FROSTPORT_REDUCED_MOTION  Disable cursor blinking when set";

/// Parsed command-line options. Unset options fall through to persisted
/// preferences and then defaults.
#[derive(Debug, Default)]
pub struct Opts {
    /// Locale override, raw string as given.
    pub lang: Option<String>,
    /// Theme mode override, raw string as given.
    pub theme: Option<String>,
    /// Preferences file path override.
    pub prefs: Option<String>,
}

impl Opts {
    /// Parse command-line arguments and environment variables.
    ///
    /// Environment variables are applied first and overridden by explicit
    /// command-line flags.
    pub fn parse() -> Self {
        Self::from_args(env::args().skip(1))
    }

    fn from_args(args: impl Iterator<Item = String>) -> Self {
        let mut opts = Self::default();

        if let Ok(val) = env::var("FROSTPORT_LANG") {
            opts.lang = Some(val);
        }
        if let Ok(val) = env::var("FROSTPORT_THEME") {
            opts.theme = Some(val);
        }
        if let Ok(val) = env::var("FROSTPORT_PREFS") {
            opts.prefs = Some(val);
        }

        for arg in args {
            match arg.as_str() {
                "--help" | "-h" => {
                    println!("{HELP_TEXT}");
                    process::exit(0);
                }
                "--version" | "-V" => {
                    println!("frostport {VERSION}");
                    process::exit(0);
                }
                other => {
                    if let Some(val) = other.strip_prefix("--lang=") {
                        opts.lang = Some(val.to_string());
                    } else if let Some(val) = other.strip_prefix("--theme=") {
                        opts.theme = Some(val.to_string());
                    } else if let Some(val) = other.strip_prefix("--prefs=") {
                        opts.prefs = Some(val.to_string());
                    } else {
                        eprintln!("Unknown argument: {other}");
                        eprintln!("Run with --help for usage information.");
                        process::exit(1);
                    }
                }
            }
        }

        opts
    }
}
