//! Runtime configuration from the environment (optionally a `.env` file).

use crate::error::{DashboardError, Result};
use std::time::Duration;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";
pub const DEFAULT_API_TIMEOUT_SECS: u64 = 10;

#[derive(Clone, Debug)]
pub struct Config {
    /// Bind address (HOST)
    pub host: String,
    /// Bind port (PORT)
    pub port: u16,
    /// Base URL of the tournament REST API (API_BASE_URL)
    pub api_base_url: String,
    /// Per-request timeout against the upstream (API_TIMEOUT_SECS)
    pub api_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            api_timeout: Duration::from_secs(DEFAULT_API_TIMEOUT_SECS),
        }
    }
}

impl Config {
    /// Load `.env` if present, then read the process environment.
    pub fn from_env() -> Result<Self> {
        if let Ok(path) = dotenvy::dotenv() {
            log::debug!("Loaded environment from {}", path.display());
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup (the environment in production).
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let port = match lookup("PORT") {
            Some(p) => p.trim().parse::<u16>().map_err(|_| {
                DashboardError::Config("PORT must be a valid port number".to_string())
            })?,
            None => defaults.port,
        };
        let api_timeout = match lookup("API_TIMEOUT_SECS") {
            Some(s) => {
                let secs = s.trim().parse::<u64>().map_err(|_| {
                    DashboardError::Config(
                        "API_TIMEOUT_SECS must be a whole number of seconds".to_string(),
                    )
                })?;
                Duration::from_secs(secs)
            }
            None => defaults.api_timeout,
        };
        let api_base_url = lookup("API_BASE_URL")
            .map(|u| u.trim().trim_end_matches('/').to_string())
            .filter(|u| !u.is_empty())
            .unwrap_or(defaults.api_base_url);
        if !api_base_url.starts_with("http://") && !api_base_url.starts_with("https://") {
            return Err(DashboardError::Config(format!(
                "API_BASE_URL must be an http(s) URL, got {api_base_url}"
            )));
        }

        Ok(Self {
            host: lookup("HOST").unwrap_or(defaults.host),
            port,
            api_base_url,
            api_timeout,
        })
    }
}
