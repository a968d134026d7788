//! mdblocks Config
//!
//! This crate handles configuration loading and management
//! for mdblocks, supporting TOML configuration files.
//!
//! # Overview
//!
//! Configuration is loaded from platform-specific locations:
//! - Linux: `~/.config/mdblocks/config.toml`
//! - macOS: `~/Library/Application Support/mdblocks/config.toml`
//! - Windows: `%APPDATA%\mdblocks\config.toml`
//!
//! # Example
//!
//! ```no_run
//! use mdblocks_config::Config;
//!
//! // Load config with defaults
//! let config = Config::load().unwrap();
//!
//! // Or load with an inline override
//! let config = Config::load_with_override(Some("[features]\nTables = false")).unwrap();
//! ```

mod features;
mod output;

pub use features::FeaturesConfig;
pub use output::OutputConfig;

use mdblocks_core::{MdBlocksError, ParseOptions, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default TOML configuration string.
const DEFAULT_TOML: &str = r#"[features]
Tables       = true
Images       = true
Links        = true
CodeLanguage = false

[output]
Version  = "2.22.2"
IdLength = 10
Pretty   = true
"#;

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Feature flags configuration
    #[serde(default)]
    pub features: FeaturesConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Returns the default TOML configuration string.
    ///
    /// # Example
    ///
    /// ```
    /// use mdblocks_config::Config;
    /// let toml = Config::default_toml();
    /// assert!(toml.contains("[features]"));
    /// assert!(toml.contains("[output]"));
    /// ```
    pub fn default_toml() -> &'static str {
        DEFAULT_TOML
    }

    /// Returns the platform-specific configuration file path.
    pub fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("config.toml"))
    }

    /// Returns the platform-specific configuration directory.
    pub fn config_dir() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "mdblocks")
            .map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Load configuration from the default platform-specific path.
    ///
    /// If no config file exists, returns the default configuration.
    pub fn load() -> Result<Self> {
        if let Some(config_path) = Self::config_path() {
            if config_path.exists() {
                return Self::load_from(&config_path);
            }
        }

        Ok(Self::default())
    }

    /// Load configuration from a specific path.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
            .map_err(|e| MdBlocksError::Config(format!("{} in {}", e, path.display())))
    }

    /// Parse configuration from a TOML string.
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| MdBlocksError::Config(format!("Parse error: {}", e)))
    }

    /// Load configuration with an optional override file or string.
    ///
    /// 1. Load the base config from the default location
    /// 2. If `override_config` names an existing file, load and merge it
    /// 3. Otherwise treat it as inline TOML and merge that
    ///
    /// # Example
    ///
    /// ```no_run
    /// use mdblocks_config::Config;
    ///
    /// let config = Config::load_with_override(Some("./custom.toml")).unwrap();
    /// let config = Config::load_with_override(Some("[features]\nLinks = false")).unwrap();
    /// ```
    pub fn load_with_override(override_config: Option<&str>) -> Result<Self> {
        let mut config = Self::load()?;

        if let Some(override_str) = override_config {
            config.merge(&Self::resolve_override(override_str)?);
        }

        Ok(config)
    }

    /// Interpret an override argument as a file path or inline TOML.
    pub fn resolve_override(override_str: &str) -> Result<Self> {
        let override_path = Path::new(override_str);
        if override_path.is_file() {
            Self::load_from(override_path)
        } else {
            Self::parse(override_str)
        }
    }

    /// Merge another config into this one.
    ///
    /// Values from `other` take precedence over values in `self`.
    ///
    /// # Example
    ///
    /// ```
    /// use mdblocks_config::Config;
    ///
    /// let mut base = Config::default();
    /// let override_config = Config::parse("[features]\nLinks = false").unwrap();
    ///
    /// base.merge(&override_config);
    /// assert!(!base.features.links);
    /// ```
    pub fn merge(&mut self, other: &Config) {
        self.features.merge(&other.features);
        self.output.merge(&other.output);
    }

    /// Save configuration to a file.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| MdBlocksError::Config(format!("Serialization error: {}", e)))?;
        std::fs::write(path, toml_string)?;
        Ok(())
    }

    /// Parser options selected by the `[features]` section.
    pub fn parse_options(&self) -> ParseOptions {
        self.features.parse_options()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.features.tables);
        assert!(config.features.links);
        assert!(!config.features.code_language);
        assert_eq!(config.output.id_length, 10);
        assert!(config.output.pretty);
    }

    #[test]
    fn test_default_toml_matches_default() {
        let parsed = Config::parse(DEFAULT_TOML).unwrap();
        let default = Config::default();
        assert_eq!(parsed.output.version, default.output.version);
        assert_eq!(parsed.output.id_length, default.output.id_length);
        assert_eq!(parsed.parse_options(), default.parse_options());
    }

    #[test]
    fn test_merge() {
        let mut base = Config::default();
        let override_config = Config::parse(
            r#"
            [features]
            Tables = false
            [output]
            IdLength = 16
            Pretty = false
        "#,
        )
        .unwrap();

        base.merge(&override_config);
        assert!(!base.features.tables);
        assert!(base.features.images);
        assert_eq!(base.output.id_length, 16);
        assert!(!base.output.pretty);
        assert_eq!(base.output.version, "2.22.2");
    }

    #[test]
    fn test_parse_error_is_config_error() {
        let err = Config::parse("[features\nTables = ").unwrap_err();
        assert!(matches!(err, MdBlocksError::Config(_)));
    }

    #[test]
    fn test_resolve_override_inline() {
        let config = Config::resolve_override("[output]\nVersion = \"2.30.0\"").unwrap();
        assert_eq!(config.output.version, "2.30.0");
    }

    #[test]
    fn test_load_with_override_inline() {
        let config = Config::load_with_override(Some("[features]\nCodeLanguage = true")).unwrap();
        assert!(config.features.code_language);

        let err = Config::load_with_override(Some("[output\n")).unwrap_err();
        assert!(matches!(err, MdBlocksError::Config(_)));
    }

    #[test]
    fn test_config_path() {
        // On CI/containers this might be None, so we just check it doesn't panic
        if let Some(p) = Config::config_path() {
            assert!(p.to_string_lossy().contains("mdblocks"));
        }
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = std::env::temp_dir().join(format!("mdblocks-config-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.toml");

        let mut config = Config::default();
        config.features.code_language = true;
        config.output.id_length = 12;
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert!(loaded.features.code_language);
        assert_eq!(loaded.output.id_length, 12);

        let via_override = Config::resolve_override(path.to_str().unwrap()).unwrap();
        assert_eq!(via_override.output.id_length, 12);

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
