//! Application configuration.
//!
//! Loaded from a TOML file; every section and field has a default so an empty
//! file (or no file at all) is a valid configuration. Environment variables
//! are applied on top of whatever the file says.

use crate::error::{CoachError, Result};
use crate::quiz::DEFAULT_PASS_THRESHOLD;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_ENV: &str = "FENGSHUI_CONFIG";
pub const HOST_ENV: &str = "FENGSHUI_HOST";
pub const PORT_ENV: &str = "FENGSHUI_PORT";
pub const LOG_ENV: &str = "FENGSHUI_LOG";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub quiz: QuizConfig,
    pub placement: PlacementConfig,
    pub content: ContentConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub enable_cors: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5001,
            enable_cors: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default `tracing` filter; `RUST_LOG` takes precedence when set.
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuizConfig {
    /// Minimum score (below a perfect one) that earns the positive message.
    pub pass_threshold: u32,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            pass_threshold: DEFAULT_PASS_THRESHOLD,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlacementConfig {
    /// Reject furniture outside the grid instead of evaluating it.
    pub strict_bounds: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentConfig {
    /// Replacement for the bundled question bank.
    pub path: Option<PathBuf>,
}

impl AppConfig {
    /// Resolve and load configuration.
    ///
    /// Uses `explicit` if given, then `$FENGSHUI_CONFIG`, then `config.toml`
    /// in the platform config directory when it exists. Falls back to
    /// defaults. Environment overrides are applied last.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        Self::load_with_source(explicit).map(|(config, _)| config)
    }

    /// Like [`AppConfig::load`], also returning the file that was read.
    ///
    /// Configuration is loaded before the log subscriber exists, so callers
    /// report the source once logging is up.
    pub fn load_with_source(explicit: Option<&Path>) -> Result<(Self, Option<PathBuf>)> {
        let source = Self::resolve_path(explicit);
        let mut config = match &source {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_env_overrides()?;
        Ok((config, source))
    }

    fn resolve_path(explicit: Option<&Path>) -> Option<PathBuf> {
        if let Some(path) = explicit {
            return Some(path.to_path_buf());
        }
        if let Ok(path) = std::env::var(CONFIG_ENV) {
            if !path.is_empty() {
                return Some(PathBuf::from(path));
            }
        }
        Self::default_path().filter(|path| path.exists())
    }

    /// `config.toml` in the platform config directory.
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "fengshui-coach")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        let mut config: AppConfig = toml::from_str(&raw)?;

        // Content paths are relative to the config file.
        if let (Some(content), Some(base)) = (config.content.path.as_mut(), path.parent()) {
            if content.is_relative() {
                *content = base.join(&*content);
            }
        }
        Ok(config)
    }

    fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(host) = std::env::var(HOST_ENV) {
            self.server.host = host;
        }
        if let Ok(port) = std::env::var(PORT_ENV) {
            self.server.port = port.parse().map_err(|_| {
                CoachError::Config(format!("{} is not a valid port: {}", PORT_ENV, port))
            })?;
        }
        if let Ok(level) = std::env::var(LOG_ENV) {
            self.logging.level = level;
        }
        Ok(())
    }
}
