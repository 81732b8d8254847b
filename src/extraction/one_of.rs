//! Multi-token locator
//!
//! Among a set of single-character tokens, the one whose first occurrence comes earliest
//! decides the cut. Order inside the set never matters: two distinct characters cannot
//! start at the same offset, so there is nothing to break ties on.

use super::{cut_after, cut_before, InclusionPolicy};
use crate::error::TextcutError;

/// Ordered set of distinct single-character tokens
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TokenSet {
    tokens: Vec<char>,
}

impl TokenSet {
    /// Build a set from characters, keeping first-seen order and dropping repeats.
    pub fn new(tokens: &[char]) -> Self {
        tokens.iter().copied().collect()
    }

    /// Build a set from string tokens, each of which must be exactly one character.
    pub fn from_strs<S: AsRef<str>>(tokens: &[S]) -> Result<Self, TextcutError> {
        let mut set = TokenSet::default();
        for token in tokens {
            let token = token.as_ref();
            let mut chars = token.chars();
            match (chars.next(), chars.next()) {
                (Some(ch), None) => set.insert(ch),
                _ => {
                    return Err(TextcutError::InvalidArgument(format!(
                        "token set entries must be single characters, got {token:?}"
                    )))
                }
            }
        }
        Ok(set)
    }

    pub fn insert(&mut self, token: char) {
        if !self.tokens.contains(&token) {
            self.tokens.push(token);
        }
    }

    pub fn contains(&self, token: char) -> bool {
        self.tokens.contains(&token)
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        self.tokens.iter().copied()
    }
}

impl FromIterator<char> for TokenSet {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        let mut set = TokenSet::default();
        for token in iter {
            set.insert(token);
        }
        set
    }
}

impl From<&str> for TokenSet {
    /// Every character of the string becomes a token.
    fn from(tokens: &str) -> Self {
        tokens.chars().collect()
    }
}

/// Earliest matching token and its byte offset.
///
/// A fold over the per-token searches keeping the minimum; tokens that do not occur are
/// skipped, which is the same as treating their position as infinite.
pub(crate) fn earliest(snippet: &str, tokens: &TokenSet) -> Option<(usize, char)> {
    tokens
        .iter()
        .fold(None, |best, token| match (best, snippet.find(token)) {
            (Some((best_index, _)), Some(index)) if index < best_index => Some((index, token)),
            (None, Some(index)) => Some((index, token)),
            (best, _) => best,
        })
}

/// Byte offset of the earliest occurring token, or `None` when no token occurs.
pub fn find_one_of(snippet: &str, tokens: &TokenSet) -> Option<usize> {
    earliest(snippet, tokens).map(|(index, _)| index)
}

/// Text before the earliest occurring token.
///
/// Returns `snippet` unchanged when no token occurs.
pub fn before_one_of<'a>(
    snippet: &'a str,
    tokens: &TokenSet,
    policy: InclusionPolicy,
) -> &'a str {
    match earliest(snippet, tokens) {
        Some((index, token)) => cut_before(snippet, index, token.len_utf8(), policy),
        None => snippet,
    }
}

/// Text after the earliest occurring token.
///
/// Returns `snippet` unchanged when no token occurs.
pub fn after_one_of<'a>(
    snippet: &'a str,
    tokens: &TokenSet,
    policy: InclusionPolicy,
) -> &'a str {
    match earliest(snippet, tokens) {
        Some((index, token)) => cut_after(snippet, index, token.len_utf8(), policy),
        None => snippet,
    }
}
