//! Configuration loader for aoc-tools.
//!
//! `defaults/aoc.default.toml` is embedded into the binary so that docs and
//! runtime behavior stay in sync. [`Loader`] layers a user file and `AOC_TOOLS_*`
//! environment variables on top of those defaults before deserializing into
//! [`AocConfig`].

use aoc_markdown::TranscodeOptions;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::{Path, PathBuf};

const DEFAULT_TOML: &str = include_str!("../defaults/aoc.default.toml");

/// Directory name used under the platform config and cache dirs.
pub const APP_DIR: &str = "aoc-tools";

const SESSION_FILE: &str = ".session.lock";
const CONFIG_FILE: &str = "aoc.toml";

/// Top-level configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AocConfig {
    pub site: SiteConfig,
    pub session: SessionConfig,
    pub markdown: MarkdownConfig,
}

/// Where requests go and how they identify themselves.
#[derive(Debug, Clone, Deserialize)]
pub struct SiteConfig {
    pub base_url: String,
    pub user_agent: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SessionConfig {
    /// Session key file; empty selects the platform cache location.
    pub path: String,
}

impl SessionConfig {
    /// The session key file, falling back to `<cache dir>/aoc-tools/.session.lock`.
    /// `None` only when no path is configured and the platform has no cache dir.
    pub fn resolved_path(&self) -> Option<PathBuf> {
        if self.path.trim().is_empty() {
            dirs::cache_dir().map(|dir| dir.join(APP_DIR).join(SESSION_FILE))
        } else {
            Some(PathBuf::from(self.path.trim()))
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct MarkdownConfig {
    pub code_language: String,
}

impl From<&MarkdownConfig> for TranscodeOptions {
    fn from(config: &MarkdownConfig) -> Self {
        TranscodeOptions {
            code_language: config.code_language.clone(),
        }
    }
}

/// `<user config dir>/aoc-tools/aoc.toml`, if the platform has a config dir.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
}

/// Prefix of environment overrides. Plain `AOC_*` variables such as
/// `AOC_SESSION` belong to other tools and are not read.
pub const ENV_PREFIX: &str = "AOC_TOOLS";

fn environment() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .separator("__")
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

    /// Layer `AOC_TOOLS_<SECTION>__<KEY>` environment variables.
    pub fn with_env(mut self) -> Self {
        self.builder = self.builder.add_source(environment());
        self
    }

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<AocConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Load configuration the way the `aoc` binary does: defaults, then the
/// explicit file (required) or the default user file (optional), then the
/// environment.
pub fn load(explicit: Option<&Path>) -> Result<AocConfig, ConfigError> {
    let loader = Loader::new();
    let loader = match (explicit, default_config_path()) {
        (Some(path), _) => loader.with_file(path),
        (None, Some(path)) => loader.with_optional_file(path),
        (None, None) => loader,
    };
    loader.with_env().build()
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<AocConfig, ConfigError> {
    Loader::new().build()
}
