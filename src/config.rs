//! Layered defaults for the optional parameters of every operation.
//!
//! `defaults/textlib.default.toml` is embedded into the library so docs and
//! runtime behavior stay in sync. Applications layer their own files and
//! overrides on top via [`Loader`] before deserializing into [`TextConfig`].
//! The [`Dispatcher`](crate::dispatch::Dispatcher) reads these values whenever
//! a call leaves an optional parameter out.

use crate::formatter::{CaseStyle, PadSide, SlugOptions, TruncateOptions};
use crate::validator::{EmailMode, IpVersion};
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/textlib.default.toml");

/// Top-level configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct TextConfig {
    pub email: EmailConfig,
    pub ip: IpConfig,
    pub case: CaseConfig,
    pub slug: SlugConfig,
    pub truncate: TruncateConfig,
    pub pad: PadConfig,
    pub mask: MaskConfig,
    pub newlines: NewlinesConfig,
    pub csv: CsvConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct EmailConfig {
    pub mode: EmailMode,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct IpConfig {
    pub version: IpVersion,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct CaseConfig {
    pub style: CaseStyle,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SlugConfig {
    pub lowercase: bool,
    pub separator: char,
}

impl Default for SlugConfig {
    fn default() -> Self {
        let options = SlugOptions::default();
        Self {
            lowercase: options.lowercase,
            separator: options.separator,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TruncateConfig {
    pub suffix: String,
    pub preserve_words: bool,
    pub boundaries: String,
}

impl Default for TruncateConfig {
    fn default() -> Self {
        let options = TruncateOptions::default();
        Self {
            suffix: options.suffix,
            preserve_words: options.preserve_words,
            boundaries: options.boundaries,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PadConfig {
    pub fill: char,
    pub side: PadSide,
}

impl Default for PadConfig {
    fn default() -> Self {
        Self {
            fill: '_',
            side: PadSide::Right,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MaskConfig {
    pub fill: char,
}

impl Default for MaskConfig {
    fn default() -> Self {
        Self { fill: '*' }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NewlinesConfig {
    pub replace_with: String,
}

impl Default for NewlinesConfig {
    fn default() -> Self {
        Self {
            replace_with: " ".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CsvConfig {
    pub separator: String,
}

impl Default for CsvConfig {
    fn default() -> Self {
        Self {
            separator: ",".to_string(),
        }
    }
}

impl TextConfig {
    pub fn slug_options(&self) -> SlugOptions {
        SlugOptions {
            lowercase: self.slug.lowercase,
            separator: self.slug.separator,
        }
    }

    pub fn truncate_options(&self) -> TruncateOptions {
        TruncateOptions {
            suffix: self.truncate.suffix.clone(),
            preserve_words: self.truncate.preserve_words,
            boundaries: self.truncate.boundaries.clone(),
        }
    }
}

/// Builds a [`TextConfig`] from the embedded defaults plus any number of layers.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Seeded with `defaults/textlib.default.toml`.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a TOML file that must exist.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer a TOML file, skipped silently when absent.
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer TOML text, e.g. settings embedded by an application.
    pub fn with_toml_str(mut self, toml: &str) -> Self {
        self.builder = self
            .builder
            .add_source(File::from_str(toml, FileFormat::Toml));
        self
    }

    /// Apply a single key/value override such as `("truncate.suffix", "…")`.
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Merge all layers and deserialize.
    pub fn build(self) -> Result<TextConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// The embedded defaults with nothing layered on top.
pub fn load_defaults() -> Result<TextConfig, ConfigError> {
    Loader::new().build()
}
