//! Token-relative extraction
//!
//!     Every extractor answers the same question: where does a token sit inside the snippet,
//!     and which side of it does the caller want back. The pieces build on each other:
//!
//!     - [locator]: one literal token, first or last occurrence.
//!     - [one_of]: the earliest of several single-character tokens. This is the primitive
//!       word splitting needs (stop at whichever punctuation comes first).
//!     - [boundary]: two independent locator searches composed into "between".
//!     - [position]: the same cuts when the caller already holds byte offsets.
//!
//!     A token that is not found is not an error. Before/after cuts fall back to the
//!     snippet unchanged, so callers can chain extractors without checking each step.
//!
//!     Positions are byte offsets into the snippet and comparison is ordinal (no locale or
//!     case folding). Cuts are returned as slices borrowed from the snippet.

mod boundary;
mod locator;
mod one_of;
mod policy;
mod position;

pub use boundary::between;
pub use locator::{
    after, after_last, before, before_last, delete_after, delete_after_last, delete_before, find,
    find_last, replace_last,
};
pub use one_of::{after_one_of, before_one_of, find_one_of, TokenSet};
pub use policy::InclusionPolicy;
pub use position::{after_position, before_position, between_positions, delete_before_position};

/// Prefix of `snippet` ending at a match, optionally keeping the matched text.
///
/// The token is literal, so appending it to the prefix is the same as extending the
/// slice over the match.
pub(crate) fn cut_before(
    snippet: &str,
    index: usize,
    token_len: usize,
    policy: InclusionPolicy,
) -> &str {
    let end = if policy.includes() {
        index + token_len
    } else {
        index
    };
    &snippet[..end]
}

/// Suffix of `snippet` starting at a match, optionally keeping the matched text.
pub(crate) fn cut_after(
    snippet: &str,
    index: usize,
    token_len: usize,
    policy: InclusionPolicy,
) -> &str {
    let start = if policy.includes() {
        index
    } else {
        index + token_len
    };
    &snippet[start..]
}
