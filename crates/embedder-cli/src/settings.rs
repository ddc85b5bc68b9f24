//! Configuration loading.
//!
//! Layered precedence: built-in defaults, then the config file
//! (~/.config/chunk-embedder/config.toml), then EMBEDDER_* environment
//! variables, then CLI flags applied by the caller.

use std::path::PathBuf;

use config::{Config, Environment, File};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use embedder_model::{ModelSource, DEFAULT_MODEL_REPO};

use crate::error::CliError;

/// Application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// HuggingFace repository id of the embedding model
    #[serde(default = "default_model_repo")]
    pub model_repo: String,

    /// Directory for cached model files
    #[serde(default = "default_cache_dir")]
    pub cache_dir: String,

    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_model_repo() -> String {
    DEFAULT_MODEL_REPO.to_string()
}

fn default_cache_dir() -> String {
    ProjectDirs::from("", "", "chunk-embedder")
        .map(|p| p.cache_dir().join("models"))
        .unwrap_or_else(|| PathBuf::from("./models"))
        .to_string_lossy()
        .to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            model_repo: default_model_repo(),
            cache_dir: default_cache_dir(),
            log_level: default_log_level(),
        }
    }
}

impl Settings {
    /// Load settings with layered precedence:
    /// 1. Built-in defaults
    /// 2. Config file (~/.config/chunk-embedder/config.toml)
    /// 3. CLI-specified config file (optional)
    /// 4. Environment variables (EMBEDDER_*)
    ///
    /// CLI flags should be applied by the caller after this returns.
    pub fn load(cli_config_path: Option<&str>) -> Result<Self, CliError> {
        let config_dir = ProjectDirs::from("", "", "chunk-embedder")
            .map(|p| p.config_dir().to_path_buf())
            .unwrap_or_else(|| PathBuf::from("."));

        let default_config_path = config_dir.join("config");

        let mut builder = Config::builder()
            .set_default("model_repo", default_model_repo())
            .map_err(|e| CliError::Config(e.to_string()))?
            .set_default("cache_dir", default_cache_dir())
            .map_err(|e| CliError::Config(e.to_string()))?
            .set_default("log_level", default_log_level())
            .map_err(|e| CliError::Config(e.to_string()))?
            .add_source(File::with_name(&default_config_path.to_string_lossy()).required(false));

        if let Some(path) = cli_config_path {
            builder = builder.add_source(File::with_name(path).required(true));
        }

        // Flat keys: EMBEDDER_MODEL_REPO, EMBEDDER_CACHE_DIR, EMBEDDER_LOG_LEVEL
        builder = builder.add_source(Environment::with_prefix("EMBEDDER").try_parsing(true));

        let config = builder
            .build()
            .map_err(|e| CliError::Config(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| CliError::Config(e.to_string()))
    }

    /// Model source described by these settings.
    pub fn model_source(&self) -> ModelSource {
        ModelSource::new(&self.model_repo, self.expanded_cache_dir())
    }

    /// Expand a leading ~/ in cache_dir to the home directory.
    pub fn expanded_cache_dir(&self) -> PathBuf {
        if let Some(rest) = self.cache_dir.strip_prefix("~/") {
            if let Some(home) = std::env::var_os("HOME") {
                return PathBuf::from(home).join(rest);
            }
        }
        PathBuf::from(&self.cache_dir)
    }
}
