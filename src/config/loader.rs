//! Config struct and loading logic.
//!
//! Priority (highest to lowest):
//! 1. CLI flags
//! 2. Environment variables
//! 3. `.taskscout.toml` in repo root
//! 4. `~/.config/taskscout/config.toml` (global defaults)
//! 5. Built-in defaults

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

use crate::constants::{
    DEFAULT_MAX_COMMITS, DEFAULT_POLL_INTERVAL_SECS, DEFAULT_TASKS_FILE, ENV_FORMAT,
    ENV_MAX_COMMITS, ENV_POLL_INTERVAL, ENV_TASKS,
};
use crate::env::Env;
use crate::models::OutputFormat;

/// Errors during config loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    ParseFile {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub log: LogConfig,
    pub watch: WatchConfig,
    pub tasks: TasksConfig,
    pub output: OutputConfig,
}

/// Commit log reading.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Lookback window per scan. Commits beyond it are never scanned.
    pub max_commits: usize,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            max_commits: DEFAULT_MAX_COMMITS,
        }
    }
}

/// Polling behaviour for `taskscout watch`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WatchConfig {
    pub poll_interval_secs: u64,
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            poll_interval_secs: DEFAULT_POLL_INTERVAL_SECS,
        }
    }
}

impl WatchConfig {
    /// Poll interval; zero is clamped to one second.
    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_secs.max(1))
    }
}

/// Where the task list lives.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TasksConfig {
    /// Task file path; relative paths resolve against the repository root.
    pub file: Option<PathBuf>,
}

/// Output settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
}

impl Config {
    /// Load configuration with proper layering.
    ///
    /// Reads from global config, repo-local config, then applies
    /// environment variable overrides.
    pub fn load(repo_root: Option<&Path>, env: &Env) -> Result<Self, ConfigError> {
        let mut config = Config::default();

        // Layer 4: global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                let global = Self::load_file(&global_path)?;
                config.merge(global);
            }
        }

        // Layer 3: repo-local config
        if let Some(root) = repo_root {
            let local_path = root.join(crate::constants::CONFIG_FILENAME);
            if local_path.exists() {
                let local = Self::load_file(&local_path)?;
                config.merge(local);
            }
        }

        // Layer 2: environment variables
        config.apply_env_vars(env);

        Ok(config)
    }

    /// Resolve the task file against `repo_root`.
    pub fn tasks_path(&self, repo_root: &Path) -> PathBuf {
        let file = self
            .tasks
            .file
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_TASKS_FILE));
        if file.is_absolute() {
            file
        } else {
            repo_root.join(file)
        }
    }

    /// Load a config from a specific file.
    fn load_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source: e,
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseFile {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the global config file path.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(crate::constants::CONFIG_DIR).join("config.toml"))
    }

    /// Merge another config into this one (other takes precedence for non-default values).
    fn merge(&mut self, other: Config) {
        if other.log.max_commits != LogConfig::default().max_commits {
            self.log.max_commits = other.log.max_commits;
        }
        if other.watch.poll_interval_secs != WatchConfig::default().poll_interval_secs {
            self.watch.poll_interval_secs = other.watch.poll_interval_secs;
        }
        if other.tasks.file.is_some() {
            self.tasks.file = other.tasks.file;
        }
        if other.output.format != OutputFormat::default() {
            self.output.format = other.output.format;
        }
    }

    /// Apply environment variable overrides.
    fn apply_env_vars(&mut self, env: &Env) {
        if let Ok(val) = env.var(ENV_TASKS) {
            if !val.trim().is_empty() {
                self.tasks.file = Some(PathBuf::from(val.trim()));
            }
        }
        if let Some(secs) = env.parse::<u64>(ENV_POLL_INTERVAL) {
            self.watch.poll_interval_secs = secs;
        }
        if let Some(max) = env.parse::<usize>(ENV_MAX_COMMITS) {
            self.log.max_commits = max;
        }
        if let Some(format) = env.parse::<OutputFormat>(ENV_FORMAT) {
            self.output.format = format;
        }
    }
}
