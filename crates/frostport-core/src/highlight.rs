#![forbid(unsafe_code)]

//! Literal match emphasis for displayed text.
//!
//! Tokens are escaped before the pattern is built, so user input is always
//! matched as literal text; a token containing regex metacharacters cannot
//! alter the matching structure.

use regex::RegexBuilder;

/// One run of display text, marked when it matched a search token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub emphasized: bool,
}

impl Segment {
    fn plain(text: &str) -> Self {
        Self {
            text: text.to_string(),
            emphasized: false,
        }
    }

    fn emphasized(text: &str) -> Self {
        Self {
            text: text.to_string(),
            emphasized: true,
        }
    }
}

/// Split display text into plain and emphasized segments.
///
/// Matching is case-insensitive against any token. An empty token set, or a
/// text with no matches, returns the whole text as one plain segment. The
/// concatenation of all segment texts always reproduces the input.
#[must_use]
pub fn highlight(text: &str, tokens: &[String]) -> Vec<Segment> {
    if text.is_empty() {
        return Vec::new();
    }
    if tokens.is_empty() {
        return vec![Segment::plain(text)];
    }

    let pattern = tokens
        .iter()
        .map(|token| regex::escape(token))
        .collect::<Vec<_>>()
        .join("|");
    let matcher = match RegexBuilder::new(&pattern).case_insensitive(true).build() {
        Ok(matcher) => matcher,
        // Escaped literals always compile; if they somehow do not, degrade to
        // unhighlighted text rather than surfacing an error.
        Err(error) => {
            tracing::warn!(%error, "highlight pattern failed to build");
            return vec![Segment::plain(text)];
        }
    };

    let mut segments = Vec::new();
    let mut cursor = 0;
    for found in matcher.find_iter(text) {
        if found.start() > cursor {
            segments.push(Segment::plain(&text[cursor..found.start()]));
        }
        if !found.as_str().is_empty() {
            segments.push(Segment::emphasized(found.as_str()));
        }
        cursor = found.end();
    }
    if cursor < text.len() {
        segments.push(Segment::plain(&text[cursor..]));
    }
    if segments.is_empty() {
        segments.push(Segment::plain(text));
    }
    segments
}
