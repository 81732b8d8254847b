//! # textcut
//!
//! Token-relative string extraction.
//!
//! File Layout
//!
//! src/extraction
//!   ├── policy       Inclusion policy shared by every extractor
//!   ├── locator      Single-token search: before / after / last / delete / replace
//!   ├── one_of       Earliest of several single-character tokens
//!   ├── boundary     Text between two tokens
//!   └── position     Same cuts driven by byte offsets
//! src/splitting      Word and line splitters, list joiners, key/value records
//! src/filtering      Character filters and truncation
//! src/config         Layered configuration (embedded defaults + user files)
//!
//! Every operation is a pure function of its arguments. Cuts return slices of the
//! input snippet; only operations that build new text allocate.
//!
//! A token that cannot be found is never an error: the snippet comes back unchanged.
//! Errors are reserved for arguments of the wrong shape, see [`error::TextcutError`].

pub mod config;
pub mod error;
pub mod extraction;
pub mod filtering;
pub mod splitting;

pub use error::TextcutError;
pub use extraction::{
    after, after_last, after_one_of, after_position, before, before_last, before_one_of,
    before_position, between, between_positions, delete_after, delete_after_last, delete_before,
    delete_before_position, find, find_last, find_one_of, replace_last, InclusionPolicy, TokenSet,
};
pub use splitting::{
    join, join_distinct, split_into_words, split_on_line_break, split_on_line_break_distinct,
    WordSplitter,
};
