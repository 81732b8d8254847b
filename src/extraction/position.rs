//! Position-based extractor
//!
//! The before/after/between cuts for callers that already hold byte offsets (for example
//! from [`find`](super::find) plus a known token length).
//!
//! `None` is the "no position" sentinel. An offset past the end of the snippet is treated
//! the same way. An offset inside a multi-byte character cannot be cut and is reported as
//! [`TextcutError::InvalidArgument`].

use crate::error::TextcutError;

/// Normalizes an optional offset: out of range becomes `None`, a split character is an error.
fn resolve(snippet: &str, position: Option<usize>) -> Result<Option<usize>, TextcutError> {
    match position {
        Some(position) if position <= snippet.len() => {
            if snippet.is_char_boundary(position) {
                Ok(Some(position))
            } else {
                Err(TextcutError::InvalidArgument(format!(
                    "offset {position} is not on a character boundary"
                )))
            }
        }
        _ => Ok(None),
    }
}

/// Text before `position`, or `snippet` when there is no position.
pub fn before_position(snippet: &str, position: Option<usize>) -> Result<&str, TextcutError> {
    Ok(match resolve(snippet, position)? {
        Some(position) => &snippet[..position],
        None => snippet,
    })
}

/// Text from `position` onwards, or `snippet` when there is no position.
pub fn after_position(snippet: &str, position: Option<usize>) -> Result<&str, TextcutError> {
    Ok(match resolve(snippet, position)? {
        Some(position) => &snippet[position..],
        None => snippet,
    })
}

/// Drops everything before `position`.
pub fn delete_before_position(
    snippet: &str,
    position: Option<usize>,
) -> Result<&str, TextcutError> {
    after_position(snippet, position)
}

/// Text from `after` up to and including a closing token of `before_token_len` bytes at `before`.
///
/// Falls back to the single-sided cut when only one position is present and to `snippet`
/// when neither is.
pub fn between_positions(
    snippet: &str,
    after: Option<usize>,
    before: Option<usize>,
    before_token_len: usize,
) -> Result<&str, TextcutError> {
    match (resolve(snippet, after)?, resolve(snippet, before)?) {
        (None, None) => Ok(snippet),
        (None, Some(before)) => Ok(&snippet[..before]),
        (Some(after), None) => Ok(&snippet[after..]),
        (Some(after), Some(before)) => {
            if before < after {
                return Err(TextcutError::InvalidArgument(format!(
                    "closing offset {before} precedes opening offset {after}"
                )));
            }
            match before.checked_add(before_token_len) {
                Some(end) if end <= snippet.len() && snippet.is_char_boundary(end) => {
                    Ok(&snippet[after..end])
                }
                _ => Err(TextcutError::InvalidArgument(format!(
                    "closing token of {before_token_len} bytes at {before} overruns the snippet"
                ))),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_sided_cuts() {
        assert_eq!(before_position("abcdef", Some(2)), Ok("ab"));
        assert_eq!(after_position("abcdef", Some(2)), Ok("cdef"));
        assert_eq!(delete_before_position("abcdef", Some(4)), Ok("ef"));
        assert_eq!(before_position("abcdef", Some(0)), Ok(""));
        assert_eq!(after_position("abcdef", Some(6)), Ok(""));
    }

    #[test]
    fn no_position_returns_snippet() {
        assert_eq!(before_position("abc", None), Ok("abc"));
        assert_eq!(after_position("abc", None), Ok("abc"));
        assert_eq!(before_position("abc", Some(10)), Ok("abc"));
        assert_eq!(after_position("abc", Some(10)), Ok("abc"));
    }

    #[test]
    fn between_includes_closing_token() {
        // "a[1]b": opening at 1, closing ']' at 3
        assert_eq!(between_positions("a[1]b", Some(1), Some(3), 1), Ok("[1]"));
        assert_eq!(between_positions("a[1]b", Some(0), Some(3), 1), Ok("a[1]"));
    }

    #[test]
    fn between_falls_back_to_single_side() {
        assert_eq!(between_positions("a[1]b", None, Some(3), 1), Ok("a[1"));
        assert_eq!(between_positions("a[1]b", Some(1), None, 1), Ok("[1]b"));
        assert_eq!(between_positions("a[1]b", None, None, 1), Ok("a[1]b"));
        assert_eq!(between_positions("a[1]b", Some(1), Some(99), 1), Ok("[1]b"));
    }

    #[test]
    fn split_character_is_invalid() {
        let err = before_position("é", Some(1)).unwrap_err();
        assert!(matches!(err, TextcutError::InvalidArgument(_)));
    }

    #[test]
    fn inverted_or_overrunning_range_is_invalid() {
        assert!(between_positions("abcdef", Some(4), Some(2), 1).is_err());
        assert!(between_positions("abcdef", Some(1), Some(5), 3).is_err());
    }
}
