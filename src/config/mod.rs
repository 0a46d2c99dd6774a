//! Configuration system for treepath.
//!
//! A `Configuration` controls how paths are split and what typed getters
//! return when a value is missing. It is a small `Copy` value, so one
//! configuration can back any number of views of the same or different trees.
//! Configuration can be loaded from a TOML file and overridden from the
//! command line.
//!
//! # Example
//!
//! ```
//! use treepath::config::Configuration;
//!
//! // Use default configuration
//! let config = Configuration::default();
//! assert_eq!(config.separator(), '.');
//! assert!(config.missing_returns_null());
//!
//! // Customize it
//! let custom = Configuration::default()
//!     .with_separator("/")
//!     .unwrap()
//!     .with_missing_returns_null(false);
//! assert_eq!(custom.separator(), '/');
//!
//! // Multi-character separators are rejected up front
//! assert!(Configuration::default().with_separator("::").is_err());
//! ```

use crate::error::{Result, TreePathError};
use serde::{Deserialize, Serialize};

/// Settings shared by every view of a tree.
///
/// # Fields
///
/// * `separator` - Path separator character (default: `.`)
/// * `missing_returns_null` - Scalar and nested-view getters return `None`
///   for missing values instead of the type's zero value (default: true)
/// * `missing_returns_empty` - List getters return an empty list for missing
///   values instead of `None` (default: true)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawConfiguration")]
pub struct Configuration {
    separator: char,
    missing_returns_null: bool,
    missing_returns_empty: bool,
}

/// On-disk form. The separator is read as a string so a multi-character
/// value surfaces as `InvalidSeparator` rather than a generic type error.
#[derive(Debug, Deserialize)]
struct RawConfiguration {
    #[serde(default = "default_separator")]
    separator: String,

    #[serde(default = "default_missing_returns_null")]
    missing_returns_null: bool,

    #[serde(default = "default_missing_returns_empty")]
    missing_returns_empty: bool,
}

/// Returns the default separator.
fn default_separator() -> String {
    ".".to_string()
}

/// Returns the default scalar fallback policy.
fn default_missing_returns_null() -> bool {
    true
}

/// Returns the default list fallback policy.
fn default_missing_returns_empty() -> bool {
    true
}

impl TryFrom<RawConfiguration> for Configuration {
    type Error = TreePathError;

    fn try_from(raw: RawConfiguration) -> Result<Self> {
        Ok(Configuration::default()
            .with_separator(&raw.separator)?
            .with_missing_returns_null(raw.missing_returns_null)
            .with_missing_returns_empty(raw.missing_returns_empty))
    }
}

impl Default for Configuration {
    /// Creates a configuration with default values.
    ///
    /// # Default Values
    ///
    /// * `separator`: `.`
    /// * `missing_returns_null`: true
    /// * `missing_returns_empty`: true
    fn default() -> Self {
        Self {
            separator: '.',
            missing_returns_null: default_missing_returns_null(),
            missing_returns_empty: default_missing_returns_empty(),
        }
    }
}

impl Configuration {
    /// Returns the path separator.
    pub fn separator(&self) -> char {
        self.separator
    }

    /// Whether scalar getters return `None` (rather than `""`, `0`, `0.0`,
    /// `false`) when no value is found.
    pub fn missing_returns_null(&self) -> bool {
        self.missing_returns_null
    }

    /// Whether list getters return an empty list (rather than `None`) when no
    /// value is found.
    pub fn missing_returns_empty(&self) -> bool {
        self.missing_returns_empty
    }

    /// Sets the separator from a string, which must hold exactly one character.
    ///
    /// # Errors
    ///
    /// Returns [`TreePathError::InvalidSeparator`] for empty or
    /// multi-character input.
    pub fn with_separator(self, separator: &str) -> Result<Self> {
        let mut chars = separator.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Ok(self.with_separator_char(c)),
            _ => Err(TreePathError::InvalidSeparator(separator.to_string())),
        }
    }

    /// Sets the separator character.
    pub fn with_separator_char(mut self, separator: char) -> Self {
        self.separator = separator;
        self
    }

    pub fn with_missing_returns_null(mut self, value: bool) -> Self {
        self.missing_returns_null = value;
        self
    }

    pub fn with_missing_returns_empty(mut self, value: bool) -> Self {
        self.missing_returns_empty = value;
        self
    }

    /// Returns the path to the config file.
    ///
    /// Uses `~/.config/treepath/config.toml` on all platforms.
    pub fn config_path() -> Option<std::path::PathBuf> {
        dirs::home_dir().map(|mut path| {
            path.push(".config");
            path.push("treepath");
            path.push("config.toml");
            path
        })
    }

    /// Parses a configuration from TOML text.
    pub fn from_toml_str(contents: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Loads configuration from the default config file.
    ///
    /// Returns the default configuration if the file doesn't exist or can't be read.
    pub fn load() -> Self {
        let config_path = match Self::config_path() {
            Some(path) => path,
            None => return Self::default(),
        };

        if !config_path.exists() {
            return Self::default();
        }

        Self::load_from(&config_path).unwrap_or_else(|err| {
            tracing::warn!(path = %config_path.display(), error = %err, "Ignoring invalid config file");
            Self::default()
        })
    }

    /// Loads configuration from an explicit TOML file.
    pub fn load_from<P: AsRef<std::path::Path>>(path: P) -> anyhow::Result<Self> {
        use anyhow::Context;

        let contents = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config {}", path.as_ref().display()))?;
        Self::from_toml_str(&contents)
    }

    /// Saves configuration to the default config file.
    ///
    /// Creates the config directory if it doesn't exist.
    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
        self.save_to(config_path)
    }

    /// Saves configuration to an explicit path as pretty TOML.
    pub fn save_to<P: AsRef<std::path::Path>>(&self, path: P) -> anyhow::Result<()> {
        let path = path.as_ref();

        // Create parent directory if it doesn't exist
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let toml_string = toml::to_string_pretty(self)?;
        std::fs::write(path, toml_string)?;

        Ok(())
    }
}
