//! Sequence splitters and list builders
//!
//!     Word splitting peels one word at a time off a buffer with the multi-token locator:
//!     [`before_one_of`] yields the word, [`after_one_of`] advances past its stop character.
//!     When no stop character is left the word is the whole buffer and the loop ends.
//!
//!     Line splitting treats `\r\n`, `\r` and `\n` as atomic separators, so a Windows line
//!     ending never produces an extra empty line.
//!
//!     The joiners are the inverse operations. None of them reorder their input; the
//!     distinct variants keep the first occurrence of each item.

use std::collections::{BTreeMap, HashSet};

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::TextcutError;
use crate::extraction::{after_one_of, before_one_of, InclusionPolicy, TokenSet};

/// Characters that end a word unless configured otherwise.
pub const DEFAULT_WORD_STOPS: [char; 13] = [
    ' ', ',', ';', ':', '(', ')', '{', '}', '[', ']', '!', '.', '?',
];

static LINE_BREAK: Lazy<Regex> = Lazy::new(|| Regex::new(r"\r\n|\r|\n").unwrap());

/// Splits text into words at a configurable set of stop characters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordSplitter {
    stops: TokenSet,
}

impl WordSplitter {
    pub fn new(stops: TokenSet) -> Self {
        WordSplitter { stops }
    }

    pub fn stops(&self) -> &TokenSet {
        &self.stops
    }

    pub fn split<'a>(&self, snippet: &'a str) -> Vec<&'a str> {
        split_into_words(snippet, &self.stops)
    }
}

impl Default for WordSplitter {
    fn default() -> Self {
        WordSplitter::new(TokenSet::new(&DEFAULT_WORD_STOPS))
    }
}

/// Splits `snippet` into words separated by any character of `stops`.
///
/// Runs of stop characters do not produce empty words.
pub fn split_into_words<'a>(snippet: &'a str, stops: &TokenSet) -> Vec<&'a str> {
    let mut words = Vec::new();
    let mut buffer = snippet;

    while !buffer.is_empty() {
        let word = before_one_of(buffer, stops, InclusionPolicy::Excluding);
        if !word.is_empty() {
            words.push(word);
        }

        // a word spanning the whole buffer means no stop is left
        buffer = if word == buffer {
            ""
        } else {
            after_one_of(buffer, stops, InclusionPolicy::Excluding)
        };
        log::trace!("word {word:?}, {} bytes left", buffer.len());
    }

    words
}

/// Splits `text` into lines on `\r\n`, `\r` or `\n`.
///
/// Empty text yields no lines. A trailing break yields a trailing empty line.
pub fn split_on_line_break(text: &str) -> Vec<&str> {
    if text.is_empty() {
        return Vec::new();
    }
    LINE_BREAK.split(text).collect()
}

/// Like [`split_on_line_break`], keeping only the first occurrence of each line.
pub fn split_on_line_break_distinct(text: &str) -> Vec<&str> {
    let mut seen = HashSet::new();
    split_on_line_break(text)
        .into_iter()
        .filter(|line| seen.insert(*line))
        .collect()
}

/// Joins items with a single-character separator.
pub fn join<S: AsRef<str>>(items: &[S], separator: char) -> String {
    let mut joined = String::new();
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            joined.push(separator);
        }
        joined.push_str(item.as_ref());
    }
    joined
}

/// Joins items with a single-character separator, skipping repeats.
pub fn join_distinct<S: AsRef<str>>(items: &[S], separator: char) -> String {
    let mut seen = HashSet::new();
    let distinct: Vec<&str> = items
        .iter()
        .map(|item| item.as_ref())
        .filter(|item| seen.insert(*item))
        .collect();
    join(&distinct, separator)
}

/// Joins items one per line.
pub fn join_lines<S: AsRef<str>>(items: &[S], separator: &str) -> String {
    items
        .iter()
        .map(|item| item.as_ref())
        .collect::<Vec<&str>>()
        .join(separator)
}

/// Splits delimited text into its fields. Empty text has no fields.
pub fn split_delimited(text: &str, separator: char) -> Vec<&str> {
    if text.is_empty() {
        return Vec::new();
    }
    text.split(separator).collect()
}

/// Rewrites delimited text with one field per line.
///
/// An empty `token` leaves the text unchanged.
pub fn delimited_to_lines(text: &str, token: &str, separator: &str) -> String {
    if token.is_empty() {
        return text.to_string();
    }
    text.replace(token, separator)
}

/// Splits `key=value` entries into a map.
///
/// An entry without `key_value` maps to an empty value; only the first two parts of an
/// entry are used. A key that appears twice is an invalid argument.
pub fn split_to_map(
    text: &str,
    key_value: char,
    entry: char,
) -> Result<BTreeMap<String, String>, TextcutError> {
    collect_unique(split_delimited(text, entry), key_value)
}

/// Like [`split_to_map`], but the first occurrence of a key wins.
pub fn split_to_distinct_map(
    text: &str,
    key_value: char,
    entry: char,
) -> BTreeMap<String, String> {
    let mut map = BTreeMap::new();
    for pair in split_delimited(text, entry) {
        let (key, value) = split_pair(pair, key_value);
        map.entry(key.to_string())
            .or_insert_with(|| value.to_string());
    }
    map
}

/// Like [`split_to_map`] with one entry per line.
pub fn split_lines_to_map(
    text: &str,
    key_value: char,
) -> Result<BTreeMap<String, String>, TextcutError> {
    collect_unique(split_on_line_break(text), key_value)
}

fn split_pair(pair: &str, key_value: char) -> (&str, &str) {
    let mut parts = pair.split(key_value);
    let key = parts.next().unwrap_or_default();
    let value = parts.next().unwrap_or_default();
    (key, value)
}

fn collect_unique(
    entries: Vec<&str>,
    key_value: char,
) -> Result<BTreeMap<String, String>, TextcutError> {
    let mut map = BTreeMap::new();
    for pair in entries {
        let (key, value) = split_pair(pair, key_value);
        if map.insert(key.to_string(), value.to_string()).is_some() {
            return Err(TextcutError::InvalidArgument(format!("duplicate key {key:?}")));
        }
    }
    Ok(map)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_words_on_default_stops() {
        let words = WordSplitter::default().split("one, two; three.");
        assert_eq!(words, vec!["one", "two", "three"]);
    }

    #[test]
    fn text_without_stops_is_one_word() {
        assert_eq!(WordSplitter::default().split("single"), vec!["single"]);
    }

    #[test]
    fn custom_stops_replace_defaults() {
        let splitter = WordSplitter::new(TokenSet::new(&['|']));
        assert_eq!(splitter.split("a b|c d"), vec!["a b", "c d"]);
    }

    #[test]
    fn empty_stop_set_keeps_snippet_whole() {
        assert_eq!(split_into_words("a b", &TokenSet::default()), vec!["a b"]);
    }

    #[test]
    fn line_breaks_are_atomic() {
        assert_eq!(split_on_line_break("a\r\nb\rc\nd"), vec!["a", "b", "c", "d"]);
        assert_eq!(split_on_line_break("a\r\n\r\nb"), vec!["a", "", "b"]);
        assert_eq!(split_on_line_break("a\n"), vec!["a", ""]);
    }

    #[test]
    fn distinct_lines_keep_first_seen_order() {
        assert_eq!(split_on_line_break_distinct("b\na\r\nb\ra"), vec!["b", "a"]);
    }

    #[test]
    fn joins_keep_order() {
        assert_eq!(join(&["c", "a", "c"], ','), "c,a,c");
        assert_eq!(join_distinct(&["c", "a", "c", "b"], ','), "c,a,b");
        assert_eq!(join::<&str>(&[], ','), "");
        assert_eq!(join_lines(&["x", "y"], "\r\n"), "x\r\ny");
    }

    #[test]
    fn delimited_helpers() {
        assert_eq!(split_delimited("a;b;;c", ';'), vec!["a", "b", "", "c"]);
        assert!(split_delimited("", ';').is_empty());
        assert_eq!(delimited_to_lines("a|b", "|", "\n"), "a\nb");
        assert_eq!(delimited_to_lines("a|b", "", "\n"), "a|b");
    }

    #[test]
    fn map_splitting() {
        let map = split_to_map("a=1&b=2&c", '=', '&').unwrap();
        assert_eq!(map.get("a").map(String::as_str), Some("1"));
        assert_eq!(map.get("c").map(String::as_str), Some(""));

        let err = split_to_map("a=1&a=2", '=', '&').unwrap_err();
        assert!(matches!(err, TextcutError::InvalidArgument(_)));

        let distinct = split_to_distinct_map("a=1&a=2", '=', '&');
        assert_eq!(distinct.get("a").map(String::as_str), Some("1"));

        let lines = split_lines_to_map("host:example\r\nport:80", ':').unwrap();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines["port"], "80");
    }
}
