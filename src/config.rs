//! Configuration for the migration pipeline.
//!
//! Loaded from TOML. Every section falls back to its defaults, so an empty
//! file (or no file at all) reproduces the stock Quark WPR migration.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Default start sentinel of a legacy rule record.
pub const DEFAULT_SENTINEL: &str = "QuarkWprConfig(";

/// Errors that can occur while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error("Failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Segmenter sentinel cannot be empty")]
    EmptySentinel,
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub segmenter: SegmenterConfig,
    pub naming: NamingConfig,
}

/// How the input buffer is split into records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SegmenterConfig {
    /// Literal that opens every legacy record
    pub sentinel: String,
    /// Drop records containing any of `skip_tokens`
    pub skip_experimental: bool,
    /// Tokens that mark a record as not to be migrated
    pub skip_tokens: Vec<String>,
}

impl Default for SegmenterConfig {
    fn default() -> Self {
        Self {
            sentinel: DEFAULT_SENTINEL.to_string(),
            skip_experimental: true,
            skip_tokens: vec![
                "QuarkWprConfigStatus.EXPERIMENTAL".to_string(),
                "fuss_limited_discoverable".to_string(),
            ],
        }
    }
}

/// How legacy rule names are turned into target names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NamingConfig {
    /// Prepended to every migrated name
    pub namespace_prefix: String,
    /// Leading tokens; the first one that matches is stripped
    pub legacy_prefixes: Vec<String>,
    /// Removed wherever they occur (some sit before `_v2` or `_exp`)
    pub legacy_infixes: Vec<String>,
    /// Stripped when the name ends with them
    pub legacy_suffixes: Vec<String>,
}

impl Default for NamingConfig {
    fn default() -> Self {
        Self {
            namespace_prefix: "wpr_".to_string(),
            legacy_prefixes: vec!["rule__integrity_".to_string(), "rule__".to_string()],
            legacy_infixes: vec![
                "_via_wpr_in_quark".to_string(),
                "_wpr_quark".to_string(),
                "_in_wpr".to_string(),
            ],
            legacy_suffixes: vec!["_wpr".to_string()],
        }
    }
}

impl Config {
    /// Default config file location (`<config_dir>/rulemt/config.toml`).
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(dir.join("rulemt").join("config.toml"))
    }

    /// Load from the default location, or defaults when no file exists.
    pub fn load() -> Result<Self, ConfigError> {
        let path = match Self::config_path() {
            Ok(path) => path,
            Err(ConfigError::NoConfigDir) => return Ok(Self::default()),
            Err(e) => return Err(e),
        };
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load and validate a specific config file.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.segmenter.sentinel.is_empty() {
            return Err(ConfigError::EmptySentinel);
        }
        Ok(())
    }
}
