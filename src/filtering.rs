//! Character filters and truncation
//!
//! Counts in this module are characters (Unicode scalar values), not bytes.

use once_cell::sync::Lazy;
use regex::Regex;

static PUNCTUATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r##"[!@#$%^&*()\-=+\\/?<>|\[\]{};:`'".,™“’–”]"##).unwrap());

static PUNCTUATION_AND_UNDERSCORE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r##"[!@#$%^&*()\-_=+\\/?<>|\[\]{};:`'".,™“’–”]"##).unwrap());

static LINE_ENDINGS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\r\n]").unwrap());

static BLANKS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[ \t]").unwrap());

/// Turns punctuation into spaces and drops line endings.
///
/// With `remove_whitespace`, spaces and tabs (including the ones punctuation became) are
/// removed. With `remove_underscore`, underscores count as punctuation.
pub fn to_alphanumeric(text: &str, remove_whitespace: bool, remove_underscore: bool) -> String {
    let punctuation = if remove_underscore {
        &PUNCTUATION_AND_UNDERSCORE
    } else {
        &PUNCTUATION
    };
    let cleaned = LINE_ENDINGS.replace_all(text, "");
    let cleaned = punctuation.replace_all(&cleaned, " ");
    if remove_whitespace {
        BLANKS.replace_all(&cleaned, "").into_owned()
    } else {
        cleaned.into_owned()
    }
}

/// Makes text usable in a URL path: punctuation and blanks become `replacement`.
pub fn to_url_friendly(text: &str, replacement: &str) -> String {
    let cleaned = LINE_ENDINGS.replace_all(text, "");
    let cleaned = PUNCTUATION.replace_all(&cleaned, " ");
    BLANKS
        .replace_all(&cleaned, regex::NoExpand(replacement))
        .into_owned()
}

/// Byte offset of the `count`th character, or the text length.
fn char_offset(text: &str, count: usize) -> usize {
    text.char_indices()
        .nth(count)
        .map_or(text.len(), |(offset, _)| offset)
}

/// First `count` characters of `text`.
///
/// When `ellipsis` is given and the text is cut, the kept prefix is shortened so that the
/// prefix plus the ellipsis is `count` characters long. Text that already fits is returned
/// unchanged.
pub fn first(text: &str, count: usize, ellipsis: Option<&str>) -> String {
    if text.chars().count() <= count {
        return text.to_string();
    }
    match ellipsis {
        Some(ellipsis) => {
            let keep = count.saturating_sub(ellipsis.chars().count());
            format!("{}{}", &text[..char_offset(text, keep)], ellipsis)
        }
        None => text[..char_offset(text, count)].to_string(),
    }
}

/// Drops the last `count` characters of `text`.
pub fn without_last(text: &str, count: usize) -> &str {
    let keep = text.chars().count().saturating_sub(count);
    &text[..char_offset(text, keep)]
}
