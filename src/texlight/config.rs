//! Configuration loading
//!
//! `defaults/texlight.default.toml` is embedded into the binary so the documented defaults
//! and the runtime behavior stay in sync. Callers layer files and single-key overrides on
//! top of those defaults via [`Loader`] before deserializing into [`TexlightConfig`].

use crate::texlight::formats::LatexOptions;
use crate::texlight::lexing::LexerOptions;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::{Path, PathBuf};

const DEFAULT_TOML: &str = include_str!("../../defaults/texlight.default.toml");

/// Name of the optional per-directory configuration file
pub const LOCAL_CONFIG_FILE: &str = "texlight.toml";

/// Top-level configuration
#[derive(Debug, Clone, Deserialize)]
pub struct TexlightConfig {
    pub conversion: ConversionConfig,
    pub lexer: LexerOptions,
    pub latex: LatexOptions,
}

/// Where the input comes from, where the output goes, and what processes it
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ConversionConfig {
    pub dir: PathBuf,
    pub base: String,
    pub input_suffix: String,
    pub source_extension: String,
    pub output_extension: String,
    pub lexer: String,
    pub format: String,
    /// Explicit input path, replacing the one built from `base`
    #[serde(default)]
    pub input: Option<PathBuf>,
    /// Explicit output path, replacing the one built from `base`
    #[serde(default)]
    pub output: Option<PathBuf>,
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

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (`latex.mathescape`, `conversion.base`, ...).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<TexlightConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<TexlightConfig, ConfigError> {
    Loader::new().build()
}
