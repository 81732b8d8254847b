//! Layered configuration for textcut.
//!
//! `defaults/textcut.default.toml` is embedded into the library so the documented defaults
//! and runtime behavior stay in sync. Applications layer their own TOML files and key
//! overrides on top via [`Loader`] before deserializing into [`TextcutConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

use crate::error::TextcutError;
use crate::extraction::TokenSet;
use crate::filtering;
use crate::splitting::{self, WordSplitter};

const DEFAULT_TOML: &str = include_str!("../defaults/textcut.default.toml");

/// Top-level configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct TextcutConfig {
    pub words: WordsConfig,
    pub lines: LinesConfig,
    pub truncate: TruncateConfig,
}

/// Word splitting knobs.
#[derive(Debug, Clone, Deserialize)]
pub struct WordsConfig {
    /// Each character is one stop token.
    pub stops: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LinesConfig {
    pub separator: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TruncateConfig {
    pub ellipsis: String,
}

impl TextcutConfig {
    /// Word splitter using the configured stop characters.
    pub fn word_splitter(&self) -> Result<WordSplitter, TextcutError> {
        if self.words.stops.is_empty() {
            return Err(TextcutError::InvalidArgument(
                "words.stops must name at least one stop character".to_string(),
            ));
        }
        Ok(WordSplitter::new(TokenSet::from(self.words.stops.as_str())))
    }
}

impl LinesConfig {
    pub fn join<S: AsRef<str>>(&self, items: &[S]) -> String {
        splitting::join_lines(items, &self.separator)
    }

    pub fn delimited_to_lines(&self, text: &str, token: &str) -> String {
        splitting::delimited_to_lines(text, token, &self.separator)
    }
}

impl TruncateConfig {
    /// First `count` characters of `text`, ending in the configured ellipsis when cut.
    pub fn first(&self, text: &str, count: usize) -> String {
        filtering::first(text, count, Some(self.ellipsis.as_str()))
    }
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error at build time.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        log::debug!("layering config file {}", path.as_ref().display());
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        log::debug!("layering optional config file {}", path.as_ref().display());
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer TOML text, e.g. configuration embedded by the caller.
    pub fn with_toml(mut self, toml: &str) -> Self {
        self.builder = self
            .builder
            .add_source(File::from_str(toml, FileFormat::Toml));
        self
    }

    /// Apply a single key/value override.
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, TextcutError>
    where
        I: Into<ValueKind>,
    {
        log::trace!("config override for {key}");
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<TextcutConfig, TextcutError> {
        let config = self.builder.build()?.try_deserialize()?;
        Ok(config)
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<TextcutConfig, TextcutError> {
    Loader::new().build()
}
