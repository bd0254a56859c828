#![forbid(unsafe_code)]

//! Query tokenization.
//!
//! A raw query becomes a deduplicated list of lowercase tokens. Order of the
//! output is first-occurrence order but carries no meaning; scoring treats
//! the tokens as a set.

/// Normalize a raw query into search tokens.
///
/// Splits on whitespace runs, lowercases, trims, removes duplicates, and
/// drops single-character ASCII-alphanumeric tokens (stray-keystroke noise).
/// A single CJK character is a meaningful query and is kept.
#[must_use]
pub fn tokenize(query: &str) -> Vec<String> {
    let mut tokens: Vec<String> = Vec::new();
    for word in query.split_whitespace() {
        let token = word.to_lowercase();
        if is_noise(&token) || tokens.iter().any(|t| t == &token) {
            continue;
        }
        tokens.push(token);
    }
    tokens
}

fn is_noise(token: &str) -> bool {
    let mut chars = token.chars();
    match (chars.next(), chars.next()) {
        (None, _) => true,
        (Some(c), None) => c.is_ascii_alphanumeric(),
        _ => false,
    }
}
