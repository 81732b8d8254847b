//! Boundary extractor
//!
//! Text between an opening and a closing token. Built from two independent locator
//! searches: the closing token is searched in the suffix after the opening token and its
//! offset is shifted back into snippet coordinates.

use super::locator::{after, before, find};
use super::InclusionPolicy;

/// Text between the first `after_token` and the first `before_token` that follows it.
///
/// | opening | closing after it | result                                   |
/// |---------|------------------|------------------------------------------|
/// | absent  | absent           | `snippet`                                |
/// | absent  | (searched whole) | `before(snippet, before_token, policy)`  |
/// | found   | absent           | `after(snippet, after_token, policy)`    |
/// | found   | found            | interior, framed by both tokens if `Including` |
pub fn between<'a>(
    snippet: &'a str,
    after_token: &str,
    before_token: &str,
    policy: InclusionPolicy,
) -> &'a str {
    let Some(after_index) = find(snippet, after_token) else {
        return before(snippet, before_token, policy);
    };

    let interior_start = after_index + after_token.len();
    let Some(offset) = find(&snippet[interior_start..], before_token) else {
        return after(snippet, after_token, policy);
    };
    let before_index = interior_start + offset;

    if policy.includes() {
        &snippet[after_index..before_index + before_token.len()]
    } else {
        &snippet[interior_start..before_index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use InclusionPolicy::{Excluding, Including};

    #[test]
    fn takes_first_pair_only() {
        assert_eq!(between("a[1]b[2]c", "[", "]", Excluding), "1");
        assert_eq!(between("a[1]b[2]c", "[", "]", Including), "[1]");
    }

    #[test]
    fn closing_token_is_searched_after_opening() {
        // the leading ']' sits before the opening bracket and must be skipped
        assert_eq!(between("]x[inner]", "[", "]", Excluding), "inner");
    }

    #[test]
    fn opening_at_position_zero_is_found() {
        assert_eq!(between("<tag>rest", "<", ">", Excluding), "tag");
    }

    #[test]
    fn missing_opening_falls_back_to_before() {
        assert_eq!(between("value]tail", "[", "]", Excluding), "value");
        assert_eq!(between("value]tail", "[", "]", Including), "value]");
    }

    #[test]
    fn missing_closing_falls_back_to_after() {
        assert_eq!(between("head[value", "[", "]", Excluding), "value");
        assert_eq!(between("head[value", "[", "]", Including), "[value");
    }

    #[test]
    fn neither_token_returns_snippet() {
        assert_eq!(between("plain", "[", "]", Excluding), "plain");
        assert_eq!(between("plain", "[", "]", Including), "plain");
    }

    #[test]
    fn multi_character_markers() {
        assert_eq!(
            between("<!-- note --> body", "<!--", "-->", Excluding),
            " note "
        );
        assert_eq!(
            between("<!-- note --> body", "<!--", "-->", Including),
            "<!-- note -->"
        );
    }
}
