//! Run configuration: optional TOML settings file plus required environment
//! credentials.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{LangStatsError, Result};

/// Default configuration file name, discovered in the working directory.
pub const CONFIG_FILE_NAME: &str = "lang-stats.toml";

const fn default_max_rows() -> usize {
    10
}

fn default_readme() -> PathBuf {
    PathBuf::from("README.md")
}

fn default_assets_dir() -> PathBuf {
    PathBuf::from("assets")
}

fn default_exclude_languages() -> Vec<String> {
    vec!["Jupyter Notebook".to_string()]
}

/// Exclusion lists applied during aggregation.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ExcludeConfig {
    /// Repository names to skip entirely
    #[serde(default)]
    pub repos: Vec<String>,

    /// Language names whose bytes never count
    #[serde(default = "default_exclude_languages")]
    pub languages: Vec<String>,
}

impl Default for ExcludeConfig {
    fn default() -> Self {
        Self {
            repos: Vec::new(),
            languages: default_exclude_languages(),
        }
    }
}

/// Settings loaded from `lang-stats.toml`, all optional.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Maximum number of rows displayed in the table and charts (default: 10)
    #[serde(default = "default_max_rows")]
    pub max_rows: usize,

    /// README file to patch (default: README.md)
    #[serde(default = "default_readme")]
    pub readme: PathBuf,

    /// Directory for the generated SVG files (default: assets)
    #[serde(default = "default_assets_dir")]
    pub assets_dir: PathBuf,

    #[serde(default)]
    pub exclude: ExcludeConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_rows: default_max_rows(),
            readme: default_readme(),
            assets_dir: default_assets_dir(),
            exclude: ExcludeConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from an explicit path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing or not valid TOML.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(LangStatsError::Config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load `lang-stats.toml` from the working directory if present,
    /// otherwise fall back to defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if a present file cannot be read or parsed.
    pub fn discover() -> Result<Self> {
        let path = Path::new(CONFIG_FILE_NAME);
        if path.exists() {
            Self::load_from_path(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Build the aggregation filters from the exclusion lists.
    #[must_use]
    pub fn filters(&self) -> Filters {
        Filters {
            repos: self.exclude.repos.iter().cloned().collect(),
            languages: self.exclude.languages.iter().cloned().collect(),
        }
    }
}

/// Exclusion sets handed to the aggregator as an explicit parameter, keeping
/// aggregation a pure function of (repository data, filters).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filters {
    pub repos: HashSet<String>,
    pub languages: HashSet<String>,
}

/// API credential and login read from the environment.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub token: String,
    pub login: String,
}

impl Credentials {
    /// Read `GITHUB_TOKEN` and the login (`GITHUB_REPOSITORY_OWNER`, falling
    /// back to `GITHUB_ACTOR`) from the environment.
    ///
    /// # Errors
    ///
    /// Returns [`LangStatsError::MissingEnv`] if the token is absent, or a
    /// configuration error if neither login variable is set. Empty values
    /// count as absent.
    pub fn from_env() -> Result<Self> {
        let token = non_empty_var("GITHUB_TOKEN")
            .ok_or(LangStatsError::MissingEnv("GITHUB_TOKEN"))?;

        let login = non_empty_var("GITHUB_REPOSITORY_OWNER")
            .or_else(|| non_empty_var("GITHUB_ACTOR"))
            .ok_or_else(|| {
                LangStatsError::Config(
                    "Could not determine login: set GITHUB_REPOSITORY_OWNER or GITHUB_ACTOR"
                        .to_string(),
                )
            })?;

        Ok(Self { token, login })
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
