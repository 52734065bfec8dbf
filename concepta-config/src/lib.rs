//! Settings for the concepta CLI: highlight language, quick search limit and log level.
//!
//! Defaults ship inside the binary (`defaults/concepta.default.toml`). A `concepta.toml`
//! in the working directory, an explicit file and single-key overrides can be stacked on
//! top with [`Loader`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

pub use config::ConfigError;

const DEFAULT_TOML: &str = include_str!("../defaults/concepta.default.toml");

/// Top-level configuration consumed by concepta applications.
#[derive(Debug, Clone, Deserialize)]
pub struct ConceptaConfig {
    pub highlight: HighlightConfig,
    pub search: SearchConfig,
    pub logging: LoggingConfig,
}

/// Code sample highlighting.
#[derive(Debug, Clone, Deserialize)]
pub struct HighlightConfig {
    /// Name of the vocabulary used to classify identifiers (e.g. `csharp`).
    pub language: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchConfig {
    /// Maximum number of hits shown by quick search.
    pub result_limit: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// `tracing` filter directive used when `RUST_LOG` is unset.
    pub level: String,
}

/// Per-project file picked up by [Loader::discover].
pub const LOCAL_CONFIG_FILE: &str = "concepta.toml";

/// Builds a [ConceptaConfig] from sources applied in order, later ones winning:
/// embedded defaults, files, then single-key overrides.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    pub fn new() -> Self {
        let defaults = File::from_str(DEFAULT_TOML, FileFormat::Toml);
        Self {
            builder: Config::builder().add_source(defaults),
        }
    }

    /// Defaults plus `concepta.toml` from `dir` when that file exists.
    pub fn discover(dir: impl AsRef<Path>) -> Self {
        Self::new().with_optional_file(dir.as_ref().join(LOCAL_CONFIG_FILE))
    }

    /// Add a TOML file that must exist.
    pub fn with_file(self, path: impl AsRef<Path>) -> Self {
        self.add_toml(path.as_ref(), true)
    }

    /// Add a TOML file, skipped when absent.
    pub fn with_optional_file(self, path: impl AsRef<Path>) -> Self {
        self.add_toml(path.as_ref(), false)
    }

    /// Override one dotted key, e.g. `search.result_limit`.
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    pub fn build(self) -> Result<ConceptaConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }

    fn add_toml(mut self, path: &Path, required: bool) -> Self {
        let source = File::from(path).format(FileFormat::Toml).required(required);
        self.builder = self.builder.add_source(source);
        self
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

pub fn load_defaults() -> Result<ConceptaConfig, ConfigError> {
    Loader::new().build()
}
