#![forbid(unsafe_code)]

//! Opening outbound URLs in the system browser.
//!
//! The launch is detached: the portal never waits on the browser process.
//! On Linux several openers are tried in order until one spawns.

use std::fmt;
use std::io;
use std::process::{Command, Stdio};

/// Errors from attempting to open a URL.
#[derive(Debug)]
pub enum LaunchError {
    /// Every candidate opener failed to spawn.
    NoOpener(io::Error),
}

impl fmt::Display for LaunchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LaunchError::NoOpener(e) => write!(f, "no browser opener available: {e}"),
        }
    }
}

impl std::error::Error for LaunchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LaunchError::NoOpener(e) => Some(e),
        }
    }
}

fn spawn_detached(program: &str, args: &[&str]) -> io::Result<()> {
    Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map(|_| ())
}

/// Open `url` in the default browser without blocking.
pub fn open_url(url: &str) -> Result<(), LaunchError> {
    tracing::info!(url, "opening in browser");

    #[cfg(target_os = "macos")]
    {
        spawn_detached("open", &[url]).map_err(LaunchError::NoOpener)
    }

    #[cfg(target_os = "windows")]
    {
        spawn_detached("cmd", &["/C", "start", "", url]).map_err(LaunchError::NoOpener)
    }

    #[cfg(not(any(target_os = "macos", target_os = "windows")))]
    {
        let candidates: [(&str, &[&str]); 3] = [
            ("xdg-open", &[url]),
            ("gio", &["open", url]),
            ("sensible-browser", &[url]),
        ];
        let mut last_err = io::Error::new(io::ErrorKind::NotFound, "no opener tried");
        for (program, args) in candidates {
            match spawn_detached(program, args) {
                Ok(()) => return Ok(()),
                Err(e) => {
                    tracing::debug!(program, error = %e, "opener unavailable");
                    last_err = e;
                }
            }
        }
        Err(LaunchError::NoOpener(last_err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_opener_reports_error() {
        let err = spawn_detached("frostport-no-such-opener", &["https://example.com"]);
        assert!(err.is_err());
    }

    #[test]
    fn launch_error_display_mentions_opener() {
        let e = LaunchError::NoOpener(io::Error::new(io::ErrorKind::NotFound, "nope"));
        assert!(e.to_string().contains("opener"));
    }
}
