use std::sync::OnceLock;
use std::time::Duration;

use url::Url;

use crate::error::{AppError, AppResult};

static APP_CONFIG: OnceLock<AppConfig> = OnceLock::new();

pub const ENV_API_BASE_URL: &str = "SMARTFRIDGE_API_BASE_URL";
pub const ENV_HTTP_TIMEOUT_SECS: &str = "SMARTFRIDGE_HTTP_TIMEOUT_SECS";
pub const ENV_HTTP_CONNECT_TIMEOUT_SECS: &str = "SMARTFRIDGE_HTTP_CONNECT_TIMEOUT_SECS";

/// Where the backend listens when started with its default parameters.
const DEFAULT_BASE_URL: &str = "http://127.0.0.1:3000";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid {0}: {1}")]
    InvalidVar(&'static str, String),
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub api: ApiConfig,
}

#[derive(Clone, Debug)]
pub struct ApiConfig {
    pub base_url: Url,
    pub timeout: Duration,
    pub connect_timeout: Duration,
}

impl AppConfig {
    pub fn set_global(config: AppConfig) -> AppResult<()> {
        APP_CONFIG
            .set(config)
            .map_err(|_| AppError::AppState("Failed to set global app config".to_string()))
    }

    pub fn get() -> AppResult<&'static AppConfig> {
        APP_CONFIG
            .get()
            .ok_or_else(|| AppError::AppState("App config not initialized".to_string()))
    }
}

pub fn build_config() -> Result<AppConfig, ConfigError> {
    info!("Building AppConfig...");

    let base_url = std::env::var(ENV_API_BASE_URL).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
    let base_url = Url::parse(&base_url).map_err(|e| ConfigError::InvalidVar(ENV_API_BASE_URL, e.to_string()))?;

    let timeout = env_secs(ENV_HTTP_TIMEOUT_SECS)?.unwrap_or(DEFAULT_TIMEOUT_SECS);
    let connect_timeout = env_secs(ENV_HTTP_CONNECT_TIMEOUT_SECS)?.unwrap_or(DEFAULT_TIMEOUT_SECS);

    let config = AppConfig {
        api: ApiConfig {
            base_url,
            timeout: Duration::from_secs(timeout),
            connect_timeout: Duration::from_secs(connect_timeout),
        },
    };
    info!("AppConfig built");

    Ok(config)
}

fn env_secs(name: &'static str) -> Result<Option<u64>, ConfigError> {
    match std::env::var(name) {
        Ok(raw) => raw
            .parse::<u64>()
            .map(Some)
            .map_err(|_| ConfigError::InvalidVar(name, raw)),
        Err(_) => Ok(None),
    }
}
