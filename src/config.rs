use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ChangelogError, Result};

/// File name looked up at the repository root.
pub const CONFIG_FILE_NAME: &str = "changelog.toml";

/// File name looked up in the user config directory.
pub const USER_CONFIG_FILE_NAME: &str = ".git-changelog.toml";

/// Represents the complete configuration for git-changelog.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Config {
    #[serde(default = "default_remote")]
    pub remote: String,

    #[serde(default)]
    pub changelog: ChangelogConfig,

    #[serde(default)]
    pub conventional_commits: ConventionalCommitsConfig,
}

fn default_remote() -> String {
    "origin".to_string()
}

fn default_changelog_path() -> PathBuf {
    PathBuf::from("CHANGELOG.md")
}

/// Returns the commit types that get a changelog entry.
///
/// `chore` is left out so release commits never show up in later entries.
fn default_commit_types() -> Vec<String> {
    vec![
        "feat".to_string(),
        "fix".to_string(),
        "docs".to_string(),
        "style".to_string(),
        "refactor".to_string(),
        "test".to_string(),
        "perf".to_string(),
    ]
}

/// Where the changelog lives, relative to the work tree.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ChangelogConfig {
    #[serde(default = "default_changelog_path")]
    pub path: PathBuf,
}

impl Default for ChangelogConfig {
    fn default() -> Self {
        ChangelogConfig {
            path: default_changelog_path(),
        }
    }
}

/// Configuration for conventional commit classification.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ConventionalCommitsConfig {
    #[serde(default = "default_commit_types")]
    pub types: Vec<String>,
}

impl Default for ConventionalCommitsConfig {
    fn default() -> Self {
        ConventionalCommitsConfig {
            types: default_commit_types(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            remote: default_remote(),
            changelog: ChangelogConfig::default(),
            conventional_commits: ConventionalCommitsConfig::default(),
        }
    }
}

impl Config {
    /// Parse a configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check values serde cannot express
    ///
    /// The changelog is staged by its path inside the work tree, so it must be relative.
    pub fn validate(&self) -> Result<()> {
        if self.changelog.path.is_absolute() {
            return Err(ChangelogError::config(format!(
                "changelog.path must be relative to the repository root, got {}",
                self.changelog.path.display()
            )));
        }
        Ok(())
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `changelog.toml` at the repository root
/// 3. `.git-changelog.toml` in the user config directory
/// 4. Default configuration if no file found
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If a file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&Path>, repo_root: &Path) -> Result<Config> {
    let repo_config = repo_root.join(CONFIG_FILE_NAME);

    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)?
    } else if repo_config.exists() {
        fs::read_to_string(repo_config)?
    } else if let Some(config_dir) = dirs::config_dir() {
        let user_config = config_dir.join(USER_CONFIG_FILE_NAME);
        if user_config.exists() {
            fs::read_to_string(user_config)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    Config::from_toml(&config_str)
}
