use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::app::{AppTheme, route::Route};
use crate::core::{api::DEFAULT_API_BASE, refresh::POLL_INTERVAL};

const DEFAULT_ORIGIN: &str = "http://localhost:5173";
const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

pub const API_URL_ENV: &str = "KONTACT_API_URL";
pub const SESSION_TOKEN_ENV: &str = "KONTACT_SESSION_TOKEN";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("No config directory on this platform")]
    NoConfigDir,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct DashboardConfig {
    pub api_url: Option<String>,
    pub origin: Option<String>,
    pub session_token: Option<String>,
    pub token_command: Option<String>,
    pub theme: Option<String>,
    pub startup_route: Option<String>,
    pub poll_interval_secs: Option<u64>,
    pub request_timeout_secs: Option<u64>,
}

impl DashboardConfig {
    /// `kontact/config.toml` under the platform config directory.
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("kontact").join("config.toml"))
    }

    pub fn load() -> Self {
        let Some(path) = Self::config_path() else {
            log::warn!("No config directory found, using defaults");
            return Self::default();
        };
        match Self::load_from(&path) {
            Ok(config) => config,
            Err(ConfigError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                Self::default()
            }
            Err(e) => {
                log::warn!("Ignoring {}: {e}", path.display());
                Self::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }

    pub fn save(&self) -> Result<(), ConfigError> {
        let path = Self::config_path().ok_or(ConfigError::NoConfigDir)?;
        self.save_to(&path)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = toml::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    /// Base URL of the account API, environment first.
    pub fn api_base(&self) -> String {
        let base = std::env::var(API_URL_ENV)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .or_else(|| self.api_url.clone())
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string());
        self.resolve_base(&base)
    }

    fn resolve_base(&self, base: &str) -> String {
        if base.starts_with('/') {
            let origin = self.origin.as_deref().unwrap_or(DEFAULT_ORIGIN);
            format!("{}{base}", origin.trim_end_matches('/'))
        } else {
            base.to_string()
        }
    }

    pub fn session_token(&self) -> Option<String> {
        std::env::var(SESSION_TOKEN_ENV)
            .ok()
            .or_else(|| self.session_token.clone())
    }

    pub fn theme(&self) -> AppTheme {
        match self.theme.as_deref() {
            Some("light") => AppTheme::Light,
            Some("dark") => AppTheme::Dark,
            _ => AppTheme::System,
        }
    }

    pub fn set_theme(&mut self, theme: AppTheme) {
        self.theme = match theme {
            AppTheme::System => None,
            AppTheme::Light => Some("light".into()),
            AppTheme::Dark => Some("dark".into()),
        };
    }

    pub fn startup_route(&self) -> Route {
        self.startup_route
            .as_deref()
            .map_or(Route::Dashboard, Route::from_path)
    }

    pub fn poll_interval(&self) -> Duration {
        self.poll_interval_secs
            .filter(|s| *s > 0)
            .map_or(POLL_INTERVAL, Duration::from_secs)
    }

    pub fn request_timeout(&self) -> Duration {
        self.request_timeout_secs
            .filter(|s| *s > 0)
            .map_or(DEFAULT_REQUEST_TIMEOUT, Duration::from_secs)
    }
}
