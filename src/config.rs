//! Configuration directory, `config.toml`, and services file resolution.
//!
//! The services file is looked up in this order:
//!
//! 1. `--data <PATH>` on the command line
//! 2. `data_file` in `<config dir>/config.toml` (relative to the config dir)
//! 3. `services.csv` in the current working directory

use std::fs;
use std::path::{Path, PathBuf};

use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use serde::Deserialize;
use tracing::debug;

use crate::constants;

/// Contents of `config.toml`. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Location of the services CSV file.
    pub data_file: Option<PathBuf>,
}

impl Config {
    /// Parses configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid TOML or contains unknown keys.
    pub fn from_toml_str(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Loads `config.toml` from `dir`, falling back to defaults when the file is absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(dir: &Path) -> Result<Self> {
        let path = dir.join(constants::CONFIG_FILE_NAME);
        if !path.is_file() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)
            .wrap_err_with(|| format!("{}: {}", constants::ERR_CONFIG_READ, path.display()))?;
        let config = Self::from_toml_str(&content)
            .wrap_err_with(|| format!("{}: {}", constants::ERR_CONFIG_PARSE, path.display()))?;

        debug!(path = %path.display(), ?config, "loaded config file");
        Ok(config)
    }
}

/// Where the configuration directory came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSource {
    /// Given with `--config-dir`.
    Flag,
    /// Platform default from `dirs::config_dir`.
    Default,
}

impl std::fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigSource::Flag => write!(f, "flag"),
            ConfigSource::Default => write!(f, "default"),
        }
    }
}

/// Resolved configuration directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigDir {
    pub path: PathBuf,
    pub source: ConfigSource,
}

impl ConfigDir {
    /// Picks the `--config-dir` flag if present, else the platform config dir.
    ///
    /// Returns `None` when no flag is given and the platform has no config dir.
    #[must_use]
    pub fn resolve(flag: Option<&Path>) -> Option<Self> {
        if let Some(path) = flag {
            return Some(Self {
                path: path.to_path_buf(),
                source: ConfigSource::Flag,
            });
        }
        dirs::config_dir().map(|base| Self {
            path: base.join(constants::APP_NAME),
            source: ConfigSource::Default,
        })
    }
}

/// Decides which services file to read.
#[must_use]
pub fn resolve_data_path(
    flag: Option<&Path>,
    config: &Config,
    config_dir: Option<&Path>,
    cwd: &Path,
) -> PathBuf {
    if let Some(path) = flag {
        return path.to_path_buf();
    }
    if let Some(file) = &config.data_file {
        if file.is_absolute() {
            return file.clone();
        }
        return config_dir.unwrap_or(cwd).join(file);
    }
    cwd.join(constants::DEFAULT_DATA_FILE_NAME)
}
