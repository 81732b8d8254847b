//! Error type for textcut operations
//!
//! Not-found conditions are never reported here. A missing token is a documented
//! fallback (the snippet is returned unchanged), so the only failures are arguments
//! of the wrong shape and configuration that cannot be loaded.

use std::fmt;

/// Errors that can occur while cutting or splitting text
#[derive(Debug, Clone, PartialEq)]
pub enum TextcutError {
    /// An argument had a shape no operation can make sense of
    InvalidArgument(String),
    /// Configuration could not be loaded or deserialized
    Config(String),
}

impl fmt::Display for TextcutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TextcutError::InvalidArgument(msg) => write!(f, "Invalid argument: {msg}"),
            TextcutError::Config(msg) => write!(f, "Configuration error: {msg}"),
        }
    }
}

impl std::error::Error for TextcutError {}

impl From<config::ConfigError> for TextcutError {
    fn from(err: config::ConfigError) -> Self {
        TextcutError::Config(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_failure() {
        let err = TextcutError::InvalidArgument("offset 3 splits a character".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid argument: offset 3 splits a character"
        );
    }
}
