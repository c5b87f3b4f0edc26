use std::str::FromStr;

use serde::Deserialize;

use crate::error::AppError;

/// Global application configuration loaded from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Path of the JSON file the collateral feed polls
    pub collateral_types_path: String,

    /// Feed polling interval in milliseconds (default: 5000)
    pub feed_poll_interval_ms: u64,

    /// Collateral type identifiers to watch (e.g. `ETH-A`). Empty means all.
    pub cdp_types: Vec<String>,

    /// Port the API server binds to (default: 3000)
    pub api_port: u16,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        Ok(Self {
            collateral_types_path: std::env::var("COLLATERAL_TYPES_PATH")
                .unwrap_or_else(|_| "data/collateral_types.json".to_string()),
            feed_poll_interval_ms: parse_setting(
                "FEED_POLL_INTERVAL_MS",
                std::env::var("FEED_POLL_INTERVAL_MS").ok(),
                5000,
            )?,
            cdp_types: std::env::var("CDP_TYPES")
                .map(|raw| parse_cdp_types(&raw))
                .unwrap_or_default(),
            api_port: parse_setting("API_PORT", std::env::var("API_PORT").ok(), 3000)?,
        })
    }
}

/// Parse a numeric setting, falling back to `default` when it is unset.
pub fn parse_setting<T: FromStr>(name: &str, raw: Option<String>, default: T) -> Result<T, AppError> {
    match raw {
        None => Ok(default),
        Some(value) => value.trim().parse().map_err(|_| {
            AppError::Config(format!(
                "{} must be a valid {}, got {:?}",
                name,
                std::any::type_name::<T>(),
                value
            ))
        }),
    }
}

/// Split a comma-separated `CDP_TYPES` value, dropping blanks.
pub fn parse_cdp_types(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
