// src/config.rs
//! Client configuration: optional cvscan.yaml, then environment overrides

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::info;

const DEFAULT_CONFIG_FILE: &str = "cvscan.yaml";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub base_url: String,
    pub upload_endpoint: String,
    pub file_field: String,
    pub role_field: String,
    pub default_role: String,
    pub session_cookie: Option<String>,
    pub timeout_seconds: u64,
    pub storage_dir: PathBuf,
    pub log_file: PathBuf,
    pub log_level: String,
    pub routes: RouteConfig,
    pub terminal: TerminalConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RouteConfig {
    pub result: String,
    pub login: String,
    pub root: String,
    /// Substring of a response URL that marks a redirect to the login page
    pub login_marker: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TerminalConfig {
    pub line_speed_ms: u64,
    pub buffer_ms: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:5000".to_string(),
            upload_endpoint: "/upload".to_string(),
            file_field: "resume".to_string(),
            role_field: "role".to_string(),
            default_role: "Frontend Developer".to_string(),
            session_cookie: None,
            timeout_seconds: 120,
            storage_dir: PathBuf::from(".cvscan"),
            log_file: PathBuf::from("/tmp/cvscan.log"),
            log_level: "info".to_string(),
            routes: RouteConfig::default(),
            terminal: TerminalConfig::default(),
        }
    }
}

impl Default for RouteConfig {
    fn default() -> Self {
        Self {
            result: "/result".to_string(),
            login: "/auth/login".to_string(),
            root: "/".to_string(),
            login_marker: "/login".to_string(),
        }
    }
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            line_speed_ms: 600,
            buffer_ms: 1000,
        }
    }
}

impl TerminalConfig {
    pub fn line_speed(&self) -> Duration {
        Duration::from_millis(self.line_speed_ms)
    }

    pub fn buffer(&self) -> Duration {
        Duration::from_millis(self.buffer_ms)
    }
}

impl ClientConfig {
    /// Load configuration from the config file (if any) and the environment
    pub fn load() -> Result<Self> {
        let config_path = std::env::var("CVSCAN_CONFIG")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_FILE));

        let mut config = if config_path.exists() {
            Self::load_from_file(&config_path)?
        } else {
            Self::default()
        };

        config.apply_env_overrides()?;
        config.storage_dir = Self::resolve_path(&config.storage_dir)?;
        Ok(config)
    }

    pub fn load_from_file(path: &Path) -> Result<Self> {
        info!("Loading client configuration from: {}", path.display());
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::from_yaml(&content).with_context(|| format!("Failed to parse {}", path.display()))
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).context("Invalid client configuration")
    }

    fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(url) = std::env::var("CVSCAN_BASE_URL") {
            self.base_url = url;
        }
        if let Ok(dir) = std::env::var("CVSCAN_STORAGE_DIR") {
            self.storage_dir = PathBuf::from(dir);
        }
        if let Ok(cookie) = std::env::var("CVSCAN_SESSION_COOKIE") {
            self.session_cookie = Some(cookie);
        }
        if let Ok(log_file) = std::env::var("CVSCAN_LOG_FILE") {
            self.log_file = PathBuf::from(log_file);
        }
        if let Ok(timeout) = std::env::var("CVSCAN_TIMEOUT_SECS") {
            self.timeout_seconds = timeout
                .parse::<u64>()
                .context("CVSCAN_TIMEOUT_SECS must be a whole number of seconds")?;
        }
        Ok(())
    }

    fn resolve_path(path: &Path) -> Result<PathBuf> {
        if path.is_absolute() {
            Ok(path.to_path_buf())
        } else {
            let current_dir = std::env::current_dir().context("Failed to get current directory")?;
            Ok(current_dir.join(path))
        }
    }

    pub fn upload_url(&self) -> String {
        format!(
            "{}{}",
            self.base_url.trim_end_matches('/'),
            self.upload_endpoint
        )
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}
