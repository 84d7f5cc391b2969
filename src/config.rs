use crate::domain::{BumpKind, BumpOptions, SortOrder, DEFAULT_PRERELEASE_PREFIX};
use crate::error::{Result, SemverToolError};
use crate::resolver::ResolveOptions;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// File name looked up in the current directory
pub const LOCAL_CONFIG_FILE: &str = "semvertool.toml";
/// File name looked up in the user config directory
pub const USER_CONFIG_FILE: &str = ".semvertool.toml";

/// Represents the complete configuration for semvertool.
///
/// Every section is optional; command-line flags take precedence over the
/// values found here.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub bump: BumpConfig,

    #[serde(default)]
    pub git: GitConfig,

    #[serde(default)]
    pub previous: PreviousConfig,

    #[serde(default)]
    pub sort: SortConfig,
}

fn default_prerelease_prefix() -> String {
    DEFAULT_PRERELEASE_PREFIX.to_string()
}

fn default_separator() -> String {
    " ".to_string()
}

/// Settings for `bump` and `bump git`.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct BumpConfig {
    /// Prefix used when a prerelease bump starts a new sequence
    #[serde(default = "default_prerelease_prefix")]
    pub prerelease_prefix: String,
}

impl Default for BumpConfig {
    fn default() -> Self {
        BumpConfig {
            prerelease_prefix: default_prerelease_prefix(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct GitConfig {
    /// Always append the abbreviated HEAD hash to `bump git` results
    #[serde(default)]
    pub hash: bool,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct PreviousConfig {
    #[serde(default)]
    pub released_only: bool,
}

/// Settings for `sort`.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct SortConfig {
    #[serde(default = "default_separator")]
    pub separator: String,

    #[serde(default)]
    pub descending: bool,
}

impl Default for SortConfig {
    fn default() -> Self {
        SortConfig {
            separator: default_separator(),
            descending: false,
        }
    }
}

impl SortConfig {
    pub fn order(&self) -> SortOrder {
        if self.descending {
            SortOrder::Descending
        } else {
            SortOrder::Ascending
        }
    }
}

impl Config {
    /// Bump options for `kind` using the configured prerelease prefix
    pub fn bump_options(&self, kind: BumpKind) -> BumpOptions {
        BumpOptions::new(kind).with_prerelease_prefix(self.bump.prerelease_prefix.clone())
    }

    /// Resolver options seeded from the `[git]` and `[previous]` sections
    pub fn resolve_options(&self) -> ResolveOptions {
        ResolveOptions {
            released_only: self.previous.released_only,
            append_hash: self.git.hash,
        }
    }
}

/// Where the configuration would be read from, if anywhere.
///
/// Lookup order:
/// 1. Custom path provided as parameter
/// 2. `semvertool.toml` in current directory
/// 3. `.semvertool.toml` in the user config directory
pub fn config_source(config_path: Option<&str>) -> Option<PathBuf> {
    if let Some(path) = config_path {
        return Some(PathBuf::from(path));
    }

    let local = Path::new(".").join(LOCAL_CONFIG_FILE);
    if local.exists() {
        return Some(local);
    }

    dirs::config_dir()
        .map(|dir| dir.join(USER_CONFIG_FILE))
        .filter(|path| path.exists())
}

/// Loads configuration from file or returns defaults.
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let Some(path) = config_source(config_path) else {
        tracing::debug!("No configuration file found, using defaults");
        return Ok(Config::default());
    };

    let config_str = fs::read_to_string(&path).map_err(|e| {
        SemverToolError::config(format!("Failed to read {}: {}", path.display(), e))
    })?;
    tracing::debug!("Loaded configuration from {}", path.display());

    parse_config(&config_str)
}

/// Parse configuration from TOML text
pub fn parse_config(text: &str) -> Result<Config> {
    toml::from_str(text).map_err(|e| SemverToolError::config(e.to_string()))
}
