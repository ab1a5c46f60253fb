use std::path::Path;

use anyhow::Result;
use serde::Deserialize;

use crate::naming::DEFAULT_MAX_LEN;

/// Root configuration structure, deserialized from `.pypackage-gen/config.toml`.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Defaults used when the matching CLI flag is not given.
    #[serde(default)]
    pub defaults: Defaults,
    /// Package name rules.
    #[serde(default)]
    pub naming: NamingConfig,
}

/// Per-user defaults for generated packages.
#[derive(Debug, Default, Deserialize)]
pub struct Defaults {
    /// Copyright holder and `setup.py` author.
    pub user: Option<String>,
    /// Holder email; left out of generated files when unset.
    pub email: Option<String>,
    /// License key (`gplv3`, `mit`, `agplv3`, `bsd`, `apache2`).
    ///
    /// Kept as text so an unsupported key surfaces as a license lookup failure.
    pub license: Option<String>,
    /// README description.
    pub description: Option<String>,
    /// Create a `docs/` directory in every package.
    #[serde(default)]
    pub docs: bool,
}

#[derive(Debug, Deserialize)]
pub struct NamingConfig {
    /// Maximum length of a normalized package name. Defaults to `15`.
    #[serde(default = "default_max_len")]
    pub max_len: usize,
}

fn default_max_len() -> usize {
    DEFAULT_MAX_LEN
}

impl Default for NamingConfig {
    fn default() -> Self {
        NamingConfig {
            max_len: DEFAULT_MAX_LEN,
        }
    }
}

impl NamingConfig {
    /// The configured maximum, never below one character.
    pub fn effective_max_len(&self) -> usize {
        self.max_len.max(1)
    }
}

/// Load the configuration, searching in order:
///
/// 1. `config_override` — path passed via `--config`
/// 2. `<cwd>/.pypackage-gen/config.toml`
/// 3. `~/.config/pypackage-gen/config.toml`
/// 4. Built-in [`Config::default`]
pub fn load_config(cwd: &Path, config_override: Option<&Path>) -> Result<Config> {
    if let Some(path) = config_override {
        tracing::debug!(path = %path.display(), "loading config override");
        let content = std::fs::read_to_string(path)?;
        return Ok(toml::from_str(&content)?);
    }

    let project_config = cwd.join(".pypackage-gen").join("config.toml");
    if project_config.exists() {
        tracing::debug!(path = %project_config.display(), "loading project config");
        let content = std::fs::read_to_string(&project_config)?;
        return Ok(toml::from_str(&content)?);
    }

    if let Some(home) = dirs::home_dir() {
        let home_config = home
            .join(".config")
            .join("pypackage-gen")
            .join("config.toml");
        if home_config.exists() {
            tracing::debug!(path = %home_config.display(), "loading user config");
            let content = std::fs::read_to_string(&home_config)?;
            return Ok(toml::from_str(&content)?);
        }
    }

    Ok(Config::default())
}
