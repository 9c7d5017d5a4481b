//! Runtime configuration.
//!
//! Every key is optional: a missing file or missing key falls back to the
//! defaults, so the binary runs with zero setup. Unknown keys are reported
//! with a warning rather than rejected, so older builds tolerate newer
//! config files.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::data::DATA_FILE_NAME;
use crate::responder::DEFAULT_QUICK_MEAL_MAX_MINUTES;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "NEUROCHEF_CONFIG";

/// Environment variable overriding the dataset path.
pub const DATA_ENV: &str = "NEUROCHEF_DATA";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub data: DataConfig,
    pub responder: ResponderConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// Dataset file path, tilde-expanded. Unset: `meal_data.json` next to
    /// the executable.
    pub path: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ResponderConfig {
    /// Inclusive cutoff, in minutes, for the quick-meal list.
    pub quick_meal_max_minutes: u32,
}

impl Default for ResponderConfig {
    fn default() -> Self {
        Self {
            quick_meal_max_minutes: DEFAULT_QUICK_MEAL_MAX_MINUTES,
        }
    }
}

impl Config {
    /// Load configuration: the explicit path if given, else `$NEUROCHEF_CONFIG`,
    /// else `config.toml` in the platform config directory. Only explicitly
    /// named files are required to exist.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let (path, required) = match explicit {
            Some(p) => (Some(p.to_path_buf()), true),
            None => match std::env::var(CONFIG_ENV) {
                Ok(raw) => (Some(expand_path(&raw)), true),
                Err(_) => (default_config_path(), false),
            },
        };

        let Some(path) = path else {
            return Ok(Self::default());
        };
        if !path.exists() {
            if required {
                anyhow::bail!("config file not found: {}", path.display());
            }
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let raw = std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let config = Self::parse(&raw)
            .with_context(|| format!("failed to parse config {}", path.display()))?;
        tracing::debug!(path = %path.display(), "config loaded");
        Ok(config)
    }

    /// Parse TOML, warning about keys this version does not understand.
    pub fn parse(raw: &str) -> Result<Self> {
        let value: toml::Value = toml::from_str(raw)?;
        let mut unknown = Vec::new();
        let config = serde_ignored::deserialize(value, |path| {
            unknown.push(path.to_string());
        })?;
        for key in unknown {
            tracing::warn!(%key, "ignoring unknown config key");
        }
        Ok(config)
    }

    /// Resolve the dataset path. Precedence: `--data` flag, then
    /// `$NEUROCHEF_DATA`, then the config file, then `meal_data.json` next
    /// to the executable.
    pub fn resolve_data_path(&self, flag: Option<&Path>) -> Result<PathBuf> {
        if let Some(path) = flag {
            return Ok(path.to_path_buf());
        }
        if let Ok(raw) = std::env::var(DATA_ENV) {
            return Ok(expand_path(&raw));
        }
        if let Some(raw) = &self.data.path {
            return Ok(expand_path(raw));
        }

        let exe = std::env::current_exe().context("cannot locate the running executable")?;
        let dir = exe.parent().unwrap_or_else(|| Path::new("."));
        Ok(dir.join(DATA_FILE_NAME))
    }
}

fn expand_path(raw: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(raw).into_owned())
}

fn default_config_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", "neurochef")
        .map(|dirs| dirs.config_dir().join("config.toml"))
}
