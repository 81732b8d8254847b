//! Single-token locator
//!
//! Finds the first or last occurrence of one literal token and cuts the snippet around it.
//!
//! The `delete_*` family names the side that is dropped rather than the side that is kept:
//! `delete_after` keeps the prefix (it is [`before`]), `delete_before` keeps the suffix
//! (it is [`after`]). The inclusion policy keeps the same meaning in both families.
//!
//! An empty token matches at position 0 with length 0, for both first and last searches.

use super::{cut_after, cut_before, InclusionPolicy};

/// Byte offset of the first occurrence of `token`, or `None`.
pub fn find(snippet: &str, token: &str) -> Option<usize> {
    snippet.find(token)
}

/// Byte offset of the last occurrence of `token`, or `None`.
pub fn find_last(snippet: &str, token: &str) -> Option<usize> {
    if token.is_empty() {
        // str::rfind reports the empty match at the end; keep it at the start like `find`
        return Some(0);
    }
    snippet.rfind(token)
}

/// Text before the first occurrence of `token`.
///
/// With [`InclusionPolicy::Including`] the token is kept at the end of the result.
/// Returns `snippet` unchanged when the token is absent.
pub fn before<'a>(snippet: &'a str, token: &str, policy: InclusionPolicy) -> &'a str {
    match find(snippet, token) {
        Some(index) => cut_before(snippet, index, token.len(), policy),
        None => snippet,
    }
}

/// Text after the first occurrence of `token`.
///
/// With [`InclusionPolicy::Including`] the result starts with the token.
/// Returns `snippet` unchanged when the token is absent.
pub fn after<'a>(snippet: &'a str, token: &str, policy: InclusionPolicy) -> &'a str {
    match find(snippet, token) {
        Some(index) => cut_after(snippet, index, token.len(), policy),
        None => snippet,
    }
}

/// Text before the last occurrence of `token`.
pub fn before_last<'a>(snippet: &'a str, token: &str, policy: InclusionPolicy) -> &'a str {
    match find_last(snippet, token) {
        Some(index) => cut_before(snippet, index, token.len(), policy),
        None => snippet,
    }
}

/// Text after the last occurrence of `token`.
pub fn after_last<'a>(snippet: &'a str, token: &str, policy: InclusionPolicy) -> &'a str {
    match find_last(snippet, token) {
        Some(index) => cut_after(snippet, index, token.len(), policy),
        None => snippet,
    }
}

/// Drops everything before the first occurrence of `token`.
pub fn delete_before<'a>(snippet: &'a str, token: &str, policy: InclusionPolicy) -> &'a str {
    after(snippet, token, policy)
}

/// Drops everything after the first occurrence of `token`.
pub fn delete_after<'a>(snippet: &'a str, token: &str, policy: InclusionPolicy) -> &'a str {
    before(snippet, token, policy)
}

/// Drops everything after the last occurrence of `token`.
pub fn delete_after_last<'a>(snippet: &'a str, token: &str, policy: InclusionPolicy) -> &'a str {
    before_last(snippet, token, policy)
}

/// Replaces only the last occurrence of `token` with `replacement`.
pub fn replace_last(snippet: &str, token: &str, replacement: &str) -> String {
    match find_last(snippet, token) {
        Some(index) => {
            let mut result = String::with_capacity(snippet.len() + replacement.len());
            result.push_str(&snippet[..index]);
            result.push_str(replacement);
            result.push_str(&snippet[index + token.len()..]);
            result
        }
        None => snippet.to_string(),
    }
}
