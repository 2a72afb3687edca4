use std::{
    env, fs, io,
    path::PathBuf,
};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Environment variable naming an optional JSON configuration file.
pub const CONFIG_PATH_ENV: &str = "EXPENSE_TRACKER_CONFIG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error reading `{}`: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Configuration error: {0}")]
    Serde(String),
}

/// Presentation and diagnostics preferences. Every field is optional in the
/// file; missing keys fall back to [`Config::default`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub plain_mode: bool,
    pub screen_reader_mode: bool,
    pub high_contrast_mode: bool,
    pub audio_feedback: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_filter: Option<String>,
}

/// Read-only loader for [`Config`]. Configuration is never written back.
#[derive(Debug, Clone, Default)]
pub struct ConfigManager {
    path: Option<PathBuf>,
}

impl ConfigManager {
    /// Resolves the configuration path from [`CONFIG_PATH_ENV`].
    pub fn from_env() -> Self {
        let path = env::var_os(CONFIG_PATH_ENV)
            .filter(|value| !value.is_empty())
            .map(PathBuf::from);
        Self { path }
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    pub fn load(&self) -> Result<Config, ConfigError> {
        let Some(path) = &self.path else {
            return Ok(Config::default());
        };
        let data = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.clone(),
            source,
        })?;
        serde_json::from_str(&data).map_err(|err| ConfigError::Serde(err.to_string()))
    }
}
