//! Configuration for toolchat.
//!
//! Loaded from ./.toolchat.yml or ~/.config/toolchat/toolchat.yml

use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::api::HttpAgentConfig;
use crate::api::http::DEFAULT_BASE_URL;
use crate::session::MissingSessionPolicy;
use crate::session::context::DEFAULT_USER_ID;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Default log filter when RUST_LOG is unset.
    #[serde(rename = "log-level")]
    pub log_level: String,

    /// Agent service connection.
    pub server: ServerConfig,

    /// Session defaults.
    pub session: SessionConfig,

    /// Terminal UI settings.
    pub tui: TuiConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            server: ServerConfig::default(),
            session: SessionConfig::default(),
            tui: TuiConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    #[serde(rename = "base-url")]
    pub base_url: String,

    /// Per-request timeout in milliseconds; 0 waits forever.
    #[serde(rename = "timeout-ms")]
    pub timeout_ms: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_ms: 120_000,
        }
    }
}

impl ServerConfig {
    pub fn http_config(&self) -> HttpAgentConfig {
        HttpAgentConfig::with_base_url(&self.base_url).with_timeout_ms(self.timeout_ms)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    #[serde(rename = "user-id")]
    pub user_id: String,

    /// Behavior when a query is sent before any session exists.
    #[serde(rename = "missing-session")]
    pub missing_session: MissingSessionPolicy,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            user_id: DEFAULT_USER_ID.to_string(),
            missing_session: MissingSessionPolicy::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TuiConfig {
    #[serde(rename = "tick-rate-ms")]
    pub tick_rate_ms: u64,
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self { tick_rate_ms: 250 }
    }
}

impl Config {
    /// Load configuration with fallback chain.
    ///
    /// Search order:
    /// 1. Explicit path if provided
    /// 2. .toolchat.yml in current directory
    /// 3. ~/.config/toolchat/toolchat.yml
    /// 4. Defaults
    pub fn load(config_path: Option<&PathBuf>) -> Result<Self> {
        // Explicit path takes precedence
        if let Some(path) = config_path {
            return Self::load_from_file(path).context(format!("Failed to load config from {}", path.display()));
        }

        Self::load_first(&Self::search_paths())
    }

    fn search_paths() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from(".toolchat.yml")];
        if let Some(config_dir) = dirs::config_dir() {
            let project_name = env!("CARGO_PKG_NAME");
            paths.push(config_dir.join(project_name).join(format!("{}.yml", project_name)));
        }
        paths
    }

    /// Load the first candidate that exists.
    ///
    /// A file that exists but does not parse is an error, not a skip.
    fn load_first(candidates: &[PathBuf]) -> Result<Self> {
        let Some(path) = candidates.iter().find(|p| p.exists()) else {
            log::info!("No config file found, using defaults");
            return Ok(Self::default());
        };

        let config = Self::load_from_file(path).context(format!("Failed to load config from {}", path.display()))?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path).context("Failed to read config file")?;
        let config: Self = serde_yaml::from_str(&content).context("Failed to parse config file")?;
        Ok(config)
    }

    /// Apply command-line overrides on top of the loaded file.
    pub fn with_overrides(mut self, server: Option<&str>, user: Option<&str>) -> Self {
        if let Some(server) = server {
            self.server.base_url = server.to_string();
        }
        if let Some(user) = user {
            self.session.user_id = user.to_string();
        }
        self
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        let base_url = self.server.base_url.trim();
        if base_url.is_empty() {
            eyre::bail!("server.base-url must not be empty");
        }
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            eyre::bail!("server.base-url must start with http:// or https://, got {}", base_url);
        }
        if self.session.user_id.trim().is_empty() {
            eyre::bail!("session.user-id must not be empty");
        }
        if self.tui.tick_rate_ms == 0 {
            eyre::bail!("tui.tick-rate-ms must be > 0");
        }
        Ok(())
    }
}
